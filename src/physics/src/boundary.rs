use crate::error::{Error, Result};
use crate::posbox::Posbox;
use crate::V2;
use protocol::pr_model::PrBoundary;

/// Circular area particles have to stay inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
	pub center: V2,
	pub radius: f32,
	// dampening applied to the radial velocity on contact, None: position only
	pub bounce: Option<f32>,
}

impl Container {
	pub fn new(center: V2, radius: f32) -> Result<Self> {
		let result = Self {
			center,
			radius,
			bounce: None,
		};
		result.validate()?;
		Ok(result)
	}

	pub fn with_bounce(mut self, dampening: f32) -> Self {
		self.bounce = Some(dampening);
		self
	}

	pub fn validate(&self) -> Result<()> {
		if !self.radius.is_finite() || self.radius <= 0.0 {
			return Err(Error::param(format!(
				"container radius must be finite and > 0, got {}",
				self.radius
			)));
		}
		if !self.center.iter().all(|x| x.is_finite()) {
			return Err(Error::param("container center must be finite"));
		}
		if let Some(d) = self.bounce {
			if !(d > 0.0 && d <= 1.0) {
				return Err(Error::param(format!(
					"container bounce must be in (0, 1], got {}",
					d
				)));
			}
		}
		Ok(())
	}

	/// Pulls `pos` inward until a circle of radius `r` fits.
	pub fn apply(&self, pos: &mut V2, r: f32) -> bool {
		let limit = (self.radius - r).max(0.);
		let dp = *pos - self.center;
		let d = dp.magnitude();
		if d <= limit {
			return false;
		}
		*pos = self.center + dp / d * limit;
		true
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
	Walls(Posbox),
	Container(Container),
}

impl Default for Boundary {
	fn default() -> Self {
		Boundary::Walls(Posbox {
			xmin: 0.,
			xmax: 1600.,
			ymin: 0.,
			ymax: 900.,
		})
	}
}

impl Boundary {
	pub fn validate(&self) -> Result<()> {
		match self {
			Boundary::Walls(b) => {
				Posbox::new(b.xmin, b.xmax, b.ymin, b.ymax).map(|_| ())
			}
			Boundary::Container(c) => c.validate(),
		}
	}

	/// Moves a circle center to the nearest place where the whole circle fits.
	pub fn confine(&self, pos: &mut V2, r: f32) -> bool {
		match self {
			Boundary::Walls(b) => b.apply(pos, r),
			Boundary::Container(c) => c.apply(pos, r),
		}
	}

	pub fn render(&self) -> PrBoundary {
		match self {
			Boundary::Walls(b) => PrBoundary::Rect {
				min: b.min().into(),
				max: b.max().into(),
			},
			Boundary::Container(c) => PrBoundary::Circle {
				center: c.center.into(),
				radius: c.radius,
			},
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_container_validate() {
		assert!(Container::new(V2::zeros(), 0.).is_err());
		assert!(Container::new(V2::zeros(), -3.).is_err());
		let c = Container::new(V2::zeros(), 400.).unwrap();
		assert!(c.with_bounce(0.).validate().is_err());
		assert!(c.with_bounce(1.5).validate().is_err());
		assert!(c.with_bounce(0.8).validate().is_ok());
	}

	#[test]
	fn test_container_apply() {
		let c = Container::new(V2::new(10., 10.), 100.).unwrap();
		let mut pos = V2::new(210., 10.);
		assert!(c.apply(&mut pos, 20.));
		assert!((pos - V2::new(90., 10.)).magnitude() < 1e-4);
		let mut pos = V2::new(10., 50.);
		assert!(!c.apply(&mut pos, 20.));
	}

	#[test]
	fn test_confine_walls() {
		let boundary = Boundary::default();
		let mut pos = V2::new(1700., -10.);
		assert!(boundary.confine(&mut pos, 50.));
		assert_eq!(pos, V2::new(1550., 50.));
		assert!(boundary.validate().is_ok());
	}

	#[test]
	fn test_render() {
		let c = Container::new(V2::new(1., 2.), 3.).unwrap();
		assert_eq!(
			Boundary::Container(c).render(),
			PrBoundary::Circle {
				center: [1., 2.],
				radius: 3.
			}
		);
	}
}
