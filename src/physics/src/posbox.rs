use crate::error::{Error, Result};
use crate::V2;

/// Axis-aligned rectangle the walls enclose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posbox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Posbox {
	pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Result<Self> {
		let all_finite = [xmin, xmax, ymin, ymax].iter().all(|x| x.is_finite());
		if !all_finite || xmin >= xmax || ymin >= ymax {
			return Err(Error::param(format!(
				"empty box x: [{}, {}] y: [{}, {}]",
				xmin, xmax, ymin, ymax
			)));
		}
		Ok(Self {
			xmin,
			xmax,
			ymin,
			ymax,
		})
	}

	/// Box from the origin to `(width, height)`, i.e. window coordinates.
	pub fn from_size(width: f32, height: f32) -> Result<Self> {
		Self::new(0., width, 0., height)
	}

	pub fn min(&self) -> V2 {
		V2::new(self.xmin, self.ymin)
	}

	pub fn max(&self) -> V2 {
		V2::new(self.xmax, self.ymax)
	}

	pub fn center(&self) -> V2 {
		(self.min() + self.max()) / 2.
	}

	// open interval, a center on the wall itself counts as outside
	pub fn contains(&self, pos: V2) -> bool {
		pos[0] > self.xmin
			&& pos[0] < self.xmax
			&& pos[1] > self.ymin
			&& pos[1] < self.ymax
	}

	/// Clamps `pos` so that a circle of radius `r` fits. Returns whether
	/// anything was moved. A box thinner than the circle centers it on that
	/// axis.
	pub fn apply(&self, pos: &mut V2, r: f32) -> bool {
		let mut flag = false;
		for (axis, lo, hi) in [(0, self.xmin, self.xmax), (1, self.ymin, self.ymax)]
		{
			let (lo, hi) = if hi - lo < 2. * r {
				let mid = (lo + hi) / 2.;
				(mid, mid)
			} else {
				(lo + r, hi - r)
			};
			if pos[axis] < lo {
				pos[axis] = lo;
				flag = true;
			} else if pos[axis] > hi {
				pos[axis] = hi;
				flag = true;
			}
		}
		flag
	}
}
