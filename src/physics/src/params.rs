use crate::error::{Error, Result};
use crate::force::AccelMode;
use crate::resolver::{CollisionTest, PairPolicy};
use crate::V2;

/// Physics knobs of a world.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
	pub gravity: V2,
	pub gravity_enabled: bool,
	// velocity kept on a wall bounce, 1 = elastic
	pub dampening: f32,
	pub substeps: usize,
	pub collision_test: CollisionTest,
	pub pair_policy: PairPolicy,
	pub accel_mode: AccelMode,
	// acceleration added per directional push
	pub force: f32,
}

impl Default for Params {
	fn default() -> Self {
		Self {
			gravity: V2::new(0., 500.),
			gravity_enabled: false,
			dampening: 0.95,
			substeps: 8,
			collision_test: CollisionTest::LookAhead,
			pair_policy: PairPolicy::Separate,
			accel_mode: AccelMode::Reset,
			force: 100.,
		}
	}
}

impl Params {
	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = gravity;
		self.gravity_enabled = true;
		self
	}

	pub fn without_gravity(mut self) -> Self {
		self.gravity_enabled = false;
		self
	}

	pub fn with_dampening(mut self, dampening: f32) -> Self {
		self.dampening = dampening;
		self
	}

	pub fn with_substeps(mut self, substeps: usize) -> Self {
		self.substeps = substeps;
		self
	}

	pub fn with_collision_test(mut self, test: CollisionTest) -> Self {
		self.collision_test = test;
		self
	}

	pub fn with_pair_policy(mut self, policy: PairPolicy) -> Self {
		self.pair_policy = policy;
		self
	}

	pub fn with_accel_mode(mut self, mode: AccelMode) -> Self {
		self.accel_mode = mode;
		self
	}

	pub fn with_force(mut self, force: f32) -> Self {
		self.force = force;
		self
	}

	pub fn active_gravity(&self) -> Option<V2> {
		if self.gravity_enabled {
			Some(self.gravity)
		} else {
			None
		}
	}

	pub fn validate(&self) -> Result<()> {
		if self.substeps == 0 {
			return Err(Error::param("substeps must be >= 1"));
		}
		if !(self.dampening > 0.0 && self.dampening <= 1.0) {
			return Err(Error::param(format!(
				"dampening must be in (0, 1], got {}",
				self.dampening
			)));
		}
		if !self.gravity.iter().all(|x| x.is_finite()) {
			return Err(Error::param("gravity must be finite"));
		}
		if !self.force.is_finite() || self.force <= 0.0 {
			return Err(Error::param(format!(
				"force must be finite and > 0, got {}",
				self.force
			)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_valid() {
		let params = Params::default();
		assert!(params.validate().is_ok());
		assert_eq!(params.active_gravity(), None);
	}

	#[test]
	fn test_builders() {
		let params = Params::default()
			.with_gravity(V2::new(0., 9.8))
			.with_substeps(2)
			.with_pair_policy(PairPolicy::Reflect);
		assert_eq!(params.active_gravity(), Some(V2::new(0., 9.8)));
		assert_eq!(params.substeps, 2);
		assert_eq!(params.without_gravity().active_gravity(), None);
	}

	#[test]
	fn test_validate() {
		let bad = [
			Params::default().with_substeps(0),
			Params::default().with_dampening(0.),
			Params::default().with_dampening(1.01),
			Params::default().with_dampening(f32::NAN),
			Params::default().with_gravity(V2::new(f32::NAN, 0.)),
			Params::default().with_force(-1.),
		];
		for params in bad {
			assert!(params.validate().is_err(), "{:?}", params);
		}
		assert!(Params::default().with_dampening(1.).validate().is_ok());
	}
}
