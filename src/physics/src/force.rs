use crate::particle::Particle;
use crate::V2;

/// Screen directions; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Left,
	Right,
	Up,
	Down,
}

impl Direction {
	pub fn unit(self) -> V2 {
		match self {
			Direction::Left => V2::new(-1., 0.),
			Direction::Right => V2::new(1., 0.),
			Direction::Up => V2::new(0., -1.),
			Direction::Down => V2::new(0., 1.),
		}
	}
}

/// Whether acceleration survives from one frame to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccelMode {
	/// Cleared after every step, so forces only act for the frame they were
	/// applied in.
	#[default]
	Reset,
	/// Accumulates across frames until something overwrites it.
	Persist,
}

// accumulates
pub fn apply_directional_force(
	particle: &mut Particle,
	direction: Direction,
	magnitude: f32,
) {
	particle.accel += direction.unit() * magnitude;
}

// overwrites, not normalized: farther targets pull harder
pub fn apply_force_toward(particle: &mut Particle, target: V2) {
	particle.accel = target - particle.pos;
}
