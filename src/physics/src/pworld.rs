use crate::boundary::Boundary;
use crate::controller_message::ControllerMessage;
use crate::error::{Error, Result};
use crate::force::{apply_directional_force, apply_force_toward, AccelMode, Direction};
use crate::params::Params;
use crate::particle::Particle;
use crate::resolver::{resolve_boundary, resolve_pairs};
use crate::spawn::Spawner;
use crate::V2;
use protocol::pr_model::PrModel;

/// Owns the particles and advances them frame by frame.
pub struct PWorld {
	params: Params,
	boundary: Boundary,
	spawner: Spawner,
	particles: Vec<Particle>,
	id_alloc: usize,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
}

impl Default for PWorld {
	fn default() -> Self {
		Self {
			params: Params::default(),
			boundary: Boundary::default(),
			spawner: Spawner::default(),
			particles: Vec::new(),
			id_alloc: 0,
			forward_frames: -1,
		}
	}
}

impl PWorld {
	pub fn new(params: Params, boundary: Boundary) -> Result<Self> {
		params.validate()?;
		boundary.validate()?;
		eprintln!(
			"INFO: world {:?}, {} substeps, gravity {:?}",
			boundary,
			params.substeps,
			params.active_gravity(),
		);
		Ok(Self {
			params,
			boundary,
			..Default::default()
		})
	}

	pub fn with_spawner(mut self, spawner: Spawner) -> Self {
		self.spawner = spawner;
		self
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn get_particle(&self, id: usize) -> Option<&Particle> {
		self.particles.iter().find(|p| p.get_id() == id)
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	/// Moves the particle inside the boundary, gives it the next id and
	/// appends it. Returns the id.
	pub fn add_particle(&mut self, mut particle: Particle) -> usize {
		let r = particle.get_radius();
		self.boundary.confine(&mut particle.pos, r);
		let id = self.id_alloc;
		self.id_alloc += 1;
		particle.set_id(id);
		self.particles.push(particle);
		id
	}

	pub fn spawn(&mut self, pos: V2) -> Result<usize> {
		let particle = self.spawner.template().build(pos)?;
		Ok(self.add_particle(particle))
	}

	/// Spawns `count` particles on a grid covering the boundary.
	pub fn init_grid(&mut self, count: usize) -> Result<()> {
		if count == 0 {
			return Ok(());
		}
		let (min, max) = match &self.boundary {
			Boundary::Walls(posbox) => (posbox.min(), posbox.max()),
			Boundary::Container(c) => {
				let half = c.radius / 2f32.sqrt();
				let half = V2::new(half, half);
				(c.center - half, c.center + half)
			}
		};
		let size = max - min;
		if size[0] <= 0. || size[1] <= 0. {
			return Err(Error::param("boundary too small for a grid"));
		}
		let cols = ((count as f32 * size[0] / size[1]).sqrt().ceil() as usize).max(1);
		let rows = (count + cols - 1) / cols;
		let cell = V2::new(size[0] / cols as f32, size[1] / rows as f32);
		for idx in 0..count {
			let (col, row) = (idx % cols, idx / cols);
			let pos = min
				+ V2::new(
					(col as f32 + 0.5) * cell[0],
					(row as f32 + 0.5) * cell[1],
				);
			self.spawn(pos)?;
		}
		eprintln!("INFO: spawned {} particles on a {}x{} grid", count, cols, rows);
		Ok(())
	}

	pub fn push(&mut self, direction: Direction) {
		let force = self.params.force;
		for p in self.particles.iter_mut() {
			apply_directional_force(p, direction, force);
		}
	}

	pub fn attract(&mut self, target: V2) {
		for p in self.particles.iter_mut() {
			apply_force_toward(p, target);
		}
	}

	pub fn handle(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::Push(direction) => self.push(direction),
			ControllerMessage::Attract(target) => self.attract(target.into()),
			ControllerMessage::Spawn(pos) => {
				if let Err(e) = self.spawn(pos.into()) {
					eprintln!("WARN: spawn at {:?} rejected: {}", pos, e);
				}
			}
			ControllerMessage::ToggleGravity => {
				self.params.gravity_enabled = !self.params.gravity_enabled;
				eprintln!("INFO: gravity {:?}", self.params.active_gravity());
			}
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
					eprintln!("INFO: resumed");
				} else {
					self.forward_frames = 0;
					eprintln!("INFO: paused");
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
		}
	}

	// a center on or past a wall means something upstream went wrong
	fn check_bounds(&self) {
		if let Boundary::Walls(posbox) = &self.boundary {
			for p in self.particles.iter() {
				debug_assert!(
					posbox.contains(p.pos),
					"particle {} at {:?} outside {:?}",
					p.get_id(),
					p.pos,
					posbox,
				);
			}
		}
	}

	#[cfg(not(debug_assertions))]
	fn resolve_boundary(&mut self, dt: f32) {
		use rayon::prelude::*;
		let boundary = &self.boundary;
		let dampening = self.params.dampening;
		let test = self.params.collision_test;
		self.particles
			.par_iter_mut()
			.for_each(|p| {
				resolve_boundary(p, boundary, dt, dampening, test);
			});
	}

	#[cfg(debug_assertions)]
	fn resolve_boundary(&mut self, dt: f32) {
		let boundary = &self.boundary;
		let dampening = self.params.dampening;
		let test = self.params.collision_test;
		self.particles.iter_mut().for_each(|p| {
			resolve_boundary(p, boundary, dt, dampening, test);
		});
	}

	#[cfg(not(debug_assertions))]
	fn integrate(&mut self, dt: f32) {
		use rayon::prelude::*;
		let gravity = self.params.active_gravity();
		self.particles
			.par_iter_mut()
			.for_each(|p| p.update(dt, gravity));
	}

	#[cfg(debug_assertions)]
	fn integrate(&mut self, dt: f32) {
		let gravity = self.params.active_gravity();
		self.particles
			.iter_mut()
			.for_each(|p| p.update(dt, gravity));
	}

	fn update_frame(&mut self, dt: f32) {
		self.check_bounds();
		let substeps = self.params.substeps;
		let dt = dt / substeps as f32;
		for _ in 0..substeps {
			resolve_pairs(
				&mut self.particles,
				dt,
				self.params.pair_policy,
				self.params.collision_test,
			);
			self.resolve_boundary(dt);
			self.integrate(dt);
		}
		if self.params.accel_mode == AccelMode::Reset {
			for p in self.particles.iter_mut() {
				p.reset_accel();
			}
		}
	}

	/// Advances one frame of `dt` seconds. Returns false when nothing ran
	/// because the world is paused or `dt` is zero.
	pub fn step(&mut self, dt: f32) -> bool {
		if dt <= 0f32 || self.forward_frames == 0 {
			return false;
		}
		if self.forward_frames > 0 {
			self.forward_frames -= 1;
		}
		self.update_frame(dt);
		true
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			particles: self.particles.iter().map(|p| p.render()).collect(),
			boundary: self.boundary.render(),
			gravity: self.params.active_gravity().map(Into::into),
		}
	}
}
