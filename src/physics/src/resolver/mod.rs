pub mod container;
pub mod pair;
pub mod wall;

pub use container::resolve_container;
pub use pair::{resolve_pair, resolve_pairs, PairPolicy};
pub use wall::resolve_wall;

use crate::boundary::Boundary;
use crate::particle::Particle;
use crate::V2;

/// Which position a resolver tests against the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollisionTest {
	/// Test where the particle will be after `dt`; catches fast particles
	/// before they pass through a wall.
	#[default]
	LookAhead,
	/// Test the current position only.
	Immediate,
}

impl CollisionTest {
	/// How far ahead, in time, the test looks.
	pub fn horizon(self, dt: f32) -> f32 {
		match self {
			CollisionTest::LookAhead => dt,
			CollisionTest::Immediate => 0.,
		}
	}
}

// direction used when two centers coincide and no axis exists
pub(crate) fn fallback_axis() -> V2 {
	V2::new(1., 0.)
}

/// Dispatches to the wall or container resolver. The container pads its
/// test by the distance covered in `dt` only when looking ahead.
pub fn resolve_boundary(
	p: &mut Particle,
	boundary: &Boundary,
	dt: f32,
	dampening: f32,
	test: CollisionTest,
) -> bool {
	match boundary {
		Boundary::Walls(posbox) => resolve_wall(p, posbox, dt, dampening, test),
		Boundary::Container(container) => {
			resolve_container(p, test.horizon(dt), container)
		}
	}
}
