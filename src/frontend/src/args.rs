use clap::Parser;

use physics::boundary::{Boundary, Container};
use physics::force::AccelMode;
use physics::params::Params;
use physics::posbox::Posbox;
use physics::pworld::PWorld;
use physics::resolver::{CollisionTest, PairPolicy};
use physics::spawn::Spawner;

use crate::time_manager::TimeModel;
use crate::V2;

/// Circular particles bouncing around a window.
///
/// Arrows push, left click pulls toward the cursor, right button held
/// spawns. G gravity, Space pause, S single frame, D debug overlay, Q quit.
#[derive(Parser, Debug)]
pub struct Args {
	#[arg(long, default_value_t = 1600)]
	pub width: u32,
	#[arg(long, default_value_t = 900)]
	pub height: u32,
	#[arg(long, default_value_t = 8)]
	pub substeps: usize,
	/// Start with gravity switched on
	#[arg(long)]
	pub gravity: bool,
	/// Downward gravity, world units per second squared
	#[arg(long, default_value_t = 500.0)]
	pub gravity_strength: f32,
	/// Velocity kept on a wall bounce, in (0, 1]
	#[arg(long, default_value_t = 0.95)]
	pub dampening: f32,
	/// Keep particles inside a circle instead of the window walls
	#[arg(long)]
	pub container: bool,
	/// Container radius, defaults to fill the window
	#[arg(long)]
	pub container_radius: Option<f32>,
	/// Reflect velocity on container contact with this dampening
	#[arg(long)]
	pub container_bounce: Option<f32>,
	/// Test collisions at the current position instead of the predicted one
	#[arg(long)]
	pub immediate: bool,
	/// Bounce touching particles off each other instead of separating them
	#[arg(long)]
	pub reflect: bool,
	/// Keep acceleration between frames
	#[arg(long)]
	pub persist_accel: bool,
	/// Acceleration added per arrow key press
	#[arg(long, default_value_t = 100.0)]
	pub force: f32,
	#[arg(long, default_value_t = 10.0)]
	pub min_radius: f32,
	#[arg(long, default_value_t = 30.0)]
	pub max_radius: f32,
	/// Largest initial speed of spawned particles
	#[arg(long, default_value_t = 0.0)]
	pub speed: f32,
	/// Particles placed at startup
	#[arg(short = 'n', long, default_value_t = 1)]
	pub count: usize,
	#[arg(long)]
	pub seed: Option<u64>,
	#[arg(long, default_value_t = 60)]
	pub fps: u32,
	/// Simulate exactly 1/fps per frame regardless of wall time
	#[arg(long)]
	pub fixed_dt: bool,
	/// Show velocity/acceleration vectors and the first particle's state
	#[arg(long)]
	pub debug: bool,
}

impl Args {
	pub fn params(&self) -> Params {
		let mut params = Params::default()
			.with_gravity(V2::new(0., self.gravity_strength))
			.with_dampening(self.dampening)
			.with_substeps(self.substeps)
			.with_force(self.force);
		params.gravity_enabled = self.gravity;
		if self.immediate {
			params = params.with_collision_test(CollisionTest::Immediate);
		}
		if self.reflect {
			params = params.with_pair_policy(PairPolicy::Reflect);
		}
		if self.persist_accel {
			params = params.with_accel_mode(AccelMode::Persist);
		}
		params
	}

	pub fn boundary(&self) -> physics::Result<Boundary> {
		let (w, h) = (self.width as f32, self.height as f32);
		if !self.container {
			return Ok(Boundary::Walls(Posbox::from_size(w, h)?));
		}
		let radius = self.container_radius.unwrap_or(w.min(h) / 2. - 10.);
		let mut container = Container::new(V2::new(w / 2., h / 2.), radius)?;
		if let Some(d) = self.container_bounce {
			container = container.with_bounce(d);
		}
		Ok(Boundary::Container(container))
	}

	pub fn spawner(&self) -> physics::Result<Spawner> {
		let spawner =
			Spawner::new(self.min_radius, self.max_radius)?.with_speed(self.speed);
		Ok(match self.seed {
			Some(seed) => spawner.with_seed(seed),
			None => spawner,
		})
	}

	pub fn time_model(&self) -> TimeModel {
		if self.fixed_dt {
			TimeModel::Fixed
		} else {
			TimeModel::RtFrameLock
		}
	}

	pub fn world(&self) -> physics::Result<PWorld> {
		let mut pworld =
			PWorld::new(self.params(), self.boundary()?)?.with_spawner(self.spawner()?);
		pworld.init_grid(self.count)?;
		Ok(pworld)
	}
}
