use crate::boundary::Container;
use crate::particle::Particle;

/// Pushes the particle toward the container center by however far its
/// circle, padded by the distance it covers in `dt`, sticks out.
///
/// The correction never carries the center past the container center, so a
/// particle too large for the container settles in the middle instead of
/// oscillating. Velocity is only touched when the container bounces.
pub fn resolve_container(p: &mut Particle, dt: f32, container: &Container) -> bool {
	let to_center = container.center - p.pos;
	let d = to_center.magnitude();
	let penetration = d + p.get_radius() + p.speed() * dt - container.radius;
	if penetration <= 0. {
		return false;
	}
	let shift = penetration.min(d);
	if shift <= f32::EPSILON {
		return true;
	}
	let n = to_center / d;
	p.pos += n * shift;
	if let Some(dampening) = container.bounce {
		let vn = -p.vel.dot(&n);
		if vn > 0. {
			// outward radial part reversed and scaled, tangential part kept
			p.vel += n * vn * (1. + dampening);
		}
	}
	true
}
