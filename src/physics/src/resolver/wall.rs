use crate::particle::Particle;
use crate::posbox::Posbox;
use crate::resolver::CollisionTest;

/// Keeps the circle inside `posbox`, axis by axis.
///
/// A circle whose (predicted) edge crosses a wall is put back against it, and
/// the velocity on that axis is reversed and scaled by `dampening` if it
/// still points through the wall. Corners flip both axes in one call. On an
/// axis where the box is narrower than the circle the center is pinned to
/// the middle and that velocity component dropped.
pub fn resolve_wall(
	p: &mut Particle,
	posbox: &Posbox,
	dt: f32,
	dampening: f32,
	test: CollisionTest,
) -> bool {
	let next = p.predict(test.horizon(dt));
	let r = p.get_radius();
	let mut flag = false;
	for (axis, lo, hi) in [(0, posbox.xmin, posbox.xmax), (1, posbox.ymin, posbox.ymax)]
	{
		if hi - lo < 2. * r {
			// wider than the box on this axis, held in the middle
			let mid = (lo + hi) / 2.;
			if p.pos[axis] != mid || p.vel[axis] != 0. {
				p.pos[axis] = mid;
				p.vel[axis] = 0.;
				flag = true;
			}
			continue;
		}
		if next[axis] - r < lo {
			p.pos[axis] = lo + r;
			if p.vel[axis] < 0. {
				p.vel[axis] *= -dampening;
			}
			flag = true;
		} else if next[axis] + r > hi {
			p.pos[axis] = hi - r;
			if p.vel[axis] > 0. {
				p.vel[axis] *= -dampening;
			}
			flag = true;
		}
	}
	flag
}
