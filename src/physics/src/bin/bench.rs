use std::time::SystemTime;

use physics::boundary::Boundary;
use physics::params::Params;
use physics::pworld::PWorld;
use physics::spawn::Spawner;
use physics::V2;

fn main() -> physics::Result<()> {
	let count = std::env::args()
		.nth(1)
		.and_then(|x| x.parse().ok())
		.unwrap_or(400usize);
	let params = Params::default().with_gravity(V2::new(0., 500.));
	let spawner = Spawner::new(8., 16.)?.with_seed(0).with_speed(200.);
	let mut pworld = PWorld::new(params, Boundary::default())?.with_spawner(spawner);
	pworld.init_grid(count)?;

	let dt = 1. / 60.;
	let rframes = 100;
	let start = SystemTime::now();
	for _ in 0..rframes {
		pworld.step(dt);
	}
	let time = rframes as f32 * dt;
	let duration = SystemTime::now()
		.duration_since(start)
		.map(|d| d.as_micros())
		.unwrap_or_default();
	eprintln!("{} particles: {:.3}%", count, duration as f32 / time / 1e4);
	Ok(())
}
