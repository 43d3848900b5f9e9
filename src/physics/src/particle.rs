use crate::error::{Error, Result};
use crate::V2;
use protocol::pr_model::PrParticle;
use protocol::Color;

/// Everything about a particle except where it is.
#[derive(Clone, Debug)]
pub struct ParticleTemplate {
	pub radius: f32,
	pub color: Color,
	pub vel: V2,
}

impl ParticleTemplate {
	pub fn build(self, pos: V2) -> Result<Particle> {
		Ok(Particle::new(pos, self.radius)?
			.with_color(self.color)
			.with_vel(self.vel))
	}
}

#[derive(Clone, Debug)]
pub struct Particle {
	pub id: usize,
	pub pos: V2,
	pub vel: V2,
	pub accel: V2,
	radius: f32,
	color: Color,
}

impl Particle {
	pub fn new(pos: V2, radius: f32) -> Result<Self> {
		if !radius.is_finite() || radius <= 0.0 {
			return Err(Error::param(format!(
				"radius must be finite and > 0, got {}",
				radius
			)));
		}
		if !pos.iter().all(|x| x.is_finite()) {
			return Err(Error::param("position must be finite"));
		}
		Ok(Self {
			id: 0,
			pos,
			vel: V2::zeros(),
			accel: V2::zeros(),
			radius,
			color: Color::default(),
		})
	}

	pub fn with_vel(mut self, vel: V2) -> Self {
		self.vel = vel;
		self
	}

	pub fn with_accel(mut self, accel: V2) -> Self {
		self.accel = accel;
		self
	}

	pub fn with_color(mut self, color: Color) -> Self {
		self.color = color;
		self
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn set_id(&mut self, id: usize) {
		self.id = id;
	}

	pub fn get_radius(&self) -> f32 {
		self.radius
	}

	pub fn speed(&self) -> f32 {
		self.vel.magnitude()
	}

	/// Position after `dt` at the current velocity.
	pub fn predict(&self, dt: f32) -> V2 {
		self.pos + self.vel * dt
	}

	// explicit euler: position moves with the velocity from the start of the step
	pub fn update(&mut self, dt: f32, gravity: Option<V2>) {
		self.pos += self.vel * dt;
		self.vel += self.accel * dt;
		if let Some(g) = gravity {
			self.vel += g * dt;
		}
	}

	pub fn reset_accel(&mut self) {
		self.accel = V2::zeros();
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			id: self.id,
			pos: self.pos.into(),
			vel: self.vel.into(),
			accel: self.accel.into(),
			radius: self.radius,
			color: self.color,
		}
	}
}
