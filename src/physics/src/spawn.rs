use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::particle::ParticleTemplate;
use crate::V2;
use protocol::Color;

/// Hands out particle templates with randomized radius, color and initial
/// velocity. Seeded spawners repeat the same sequence.
pub struct Spawner {
	rng: StdRng,
	min_radius: f32,
	max_radius: f32,
	max_speed: f32,
	palette: Vec<Color>,
}

impl Default for Spawner {
	fn default() -> Self {
		Self {
			rng: StdRng::from_entropy(),
			min_radius: 10.,
			max_radius: 30.,
			max_speed: 0.,
			palette: Color::PALETTE.to_vec(),
		}
	}
}

impl Spawner {
	pub fn new(min_radius: f32, max_radius: f32) -> Result<Self> {
		if !min_radius.is_finite() || !max_radius.is_finite() {
			return Err(Error::param("spawn radius must be finite"));
		}
		if min_radius <= 0. || min_radius > max_radius {
			return Err(Error::param(format!(
				"spawn radius range must satisfy 0 < min <= max, got [{}, {}]",
				min_radius, max_radius
			)));
		}
		Ok(Self {
			min_radius,
			max_radius,
			..Default::default()
		})
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.rng = StdRng::seed_from_u64(seed);
		self
	}

	// negative or NaN speeds spawn at rest
	pub fn with_speed(mut self, max_speed: f32) -> Self {
		self.max_speed = if max_speed > 0. { max_speed } else { 0. };
		self
	}

	pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
		if !palette.is_empty() {
			self.palette = palette;
		}
		self
	}

	pub fn template(&mut self) -> ParticleTemplate {
		let radius = self.rng.gen_range(self.min_radius..=self.max_radius);
		let color = self.palette[self.rng.gen_range(0..self.palette.len())];
		let vel = if self.max_speed > 0. {
			let angle = self.rng.gen_range(0.0..TAU);
			let speed = self.rng.gen_range(0.0..=self.max_speed);
			V2::new(angle.cos(), angle.sin()) * speed
		} else {
			V2::zeros()
		};
		ParticleTemplate { radius, color, vel }
	}
}
