use crate::V2;
use protocol::pr_model::PrBoundary;

/// Maps world coordinates to window pixels. World y grows downward like
/// the screen, so no flip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	world_center: V2,
	screen_center: V2,
	scaler: V2,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			world_center: V2::new(800., 450.),
			screen_center: V2::new(800., 450.),
			scaler: V2::new(1., 1.),
		}
	}
}

impl Viewport {
	/// Fits the boundary into the window, keeping the aspect ratio.
	pub fn fit(boundary: &PrBoundary, window_size: [u32; 2]) -> Self {
		let (min, max) = match *boundary {
			PrBoundary::Rect { min, max } => (V2::from(min), V2::from(max)),
			PrBoundary::Circle { center, radius } => {
				let c = V2::from(center);
				let r = V2::new(radius, radius);
				(c - r, c + r)
			}
		};
		let screen = V2::new(window_size[0] as f32, window_size[1] as f32);
		let size = max - min;
		let k = (screen[0] / size[0]).min(screen[1] / size[1]);
		Self {
			world_center: (min + max) / 2.,
			screen_center: screen / 2.,
			scaler: V2::new(k, k),
		}
	}

	pub fn w2s(&self, p: V2) -> V2 {
		(p - self.world_center).component_mul(&self.scaler) + self.screen_center
	}

	pub fn s2w(&self, p: V2) -> V2 {
		(p - self.screen_center).component_div(&self.scaler) + self.world_center
	}

	pub fn scale(&self) -> f32 {
		self.scaler[0]
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_identity() {
		let rect = PrBoundary::Rect {
			min: [0., 0.],
			max: [1600., 900.],
		};
		let vp = Viewport::fit(&rect, [1600, 900]);
		assert_eq!(vp, Viewport::default());
		let p = V2::new(123., 45.);
		assert_eq!(vp.w2s(p), p);
	}

	#[test]
	fn test_fit_circle() {
		let circle = PrBoundary::Circle {
			center: [0., 0.],
			radius: 100.,
		};
		let vp = Viewport::fit(&circle, [800, 400]);
		assert_eq!(vp.scale(), 2.);
		assert_eq!(vp.w2s(V2::new(0., -100.)), V2::new(400., 0.));
		let p = V2::new(37., -12.);
		assert!((vp.s2w(vp.w2s(p)) - p).magnitude() < 1e-4);
	}
}
