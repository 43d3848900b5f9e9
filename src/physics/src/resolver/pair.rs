use crate::particle::Particle;
use crate::resolver::{fallback_axis, CollisionTest};

/// How two touching particles respond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PairPolicy {
	/// Push both apart by half the overlap each, velocities untouched.
	#[default]
	Separate,
	/// Negate both velocities when approaching, positions untouched.
	Reflect,
}

pub fn resolve_pair(
	a: &mut Particle,
	b: &mut Particle,
	dt: f32,
	policy: PairPolicy,
	test: CollisionTest,
) -> bool {
	match policy {
		PairPolicy::Separate => separate(a, b, test.horizon(dt)),
		PairPolicy::Reflect => reflect(a, b),
	}
}

fn separate(a: &mut Particle, b: &mut Particle, horizon: f32) -> bool {
	let axis = b.pos - a.pos;
	let distance = axis.magnitude();
	let reach = (a.speed() + b.speed()) * horizon;
	let overlap = distance - (a.get_radius() + b.get_radius()) - reach;
	if overlap >= 0. {
		return false;
	}
	let n = if distance > f32::EPSILON {
		axis / distance
	} else {
		fallback_axis()
	};
	// no mass weighting, both move the same amount
	let correct = n * (-overlap / 2.);
	a.pos -= correct;
	b.pos += correct;
	true
}

fn reflect(a: &mut Particle, b: &mut Particle) -> bool {
	let axis = b.pos - a.pos;
	let rsum = a.get_radius() + b.get_radius();
	if axis.magnitude_squared() >= rsum * rsum {
		return false;
	}
	// only while closing in, otherwise a pair still overlapping after the
	// flip would flip straight back
	if (b.vel - a.vel).dot(&axis) < 0. {
		a.vel = -a.vel;
		b.vel = -b.vel;
	}
	true
}

/// Mutable references to two distinct slots, `i < j`.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
	debug_assert!(i < j, "pair_mut({}, {})", i, j);
	let (head, tail) = items.split_at_mut(j);
	(&mut head[i], &mut tail[0])
}

/// One pass over every unordered pair in ascending index order
/// (`(0, 1), (0, 2), .., (1, 2), ..`). Returns the number of contacts.
pub fn resolve_pairs(
	particles: &mut [Particle],
	dt: f32,
	policy: PairPolicy,
	test: CollisionTest,
) -> usize {
	let n = particles.len();
	let mut contacts = 0;
	for i in 0..n {
		for j in i + 1..n {
			let (a, b) = pair_mut(particles, i, j);
			if resolve_pair(a, b, dt, policy, test) {
				contacts += 1;
			}
		}
	}
	contacts
}
