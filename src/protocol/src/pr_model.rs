// pr_model: Physical model for rendering

use crate::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub id: usize,
	pub pos: [f32; 2],
	pub vel: [f32; 2],
	pub accel: [f32; 2],
	pub radius: f32,
	pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrBoundary {
	Rect {
		min: [f32; 2],
		max: [f32; 2],
	},
	Circle {
		center: [f32; 2],
		radius: f32,
	},
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub boundary: PrBoundary,
	// None when gravity is switched off
	pub gravity: Option<[f32; 2]>,
}

impl PrModel {
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn first(&self) -> Option<&PrParticle> {
		self.particles.first()
	}
}
