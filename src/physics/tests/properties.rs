use physics::boundary::{Boundary, Container};
use physics::force::Direction;
use physics::params::Params;
use physics::particle::Particle;
use physics::posbox::Posbox;
use physics::pworld::PWorld;
use physics::resolver::{resolve_container, resolve_pair, resolve_wall};
use physics::resolver::{CollisionTest, PairPolicy};
use physics::spawn::Spawner;
use physics::V2;

const EPS: f32 = 1e-3;

fn walls(width: f32, height: f32) -> Boundary {
	Boundary::Walls(Posbox::from_size(width, height).unwrap())
}

fn particle(x: f32, y: f32, r: f32) -> Particle {
	Particle::new(V2::new(x, y), r).unwrap()
}

fn min_gap(world: &PWorld) -> f32 {
	let ps = world.particles();
	let mut result = f32::INFINITY;
	for i in 0..ps.len() {
		for j in i + 1..ps.len() {
			let d = (ps[j].pos - ps[i].pos).magnitude();
			let gap = d - ps[i].get_radius() - ps[j].get_radius();
			result = result.min(gap);
		}
	}
	result
}

#[test]
fn integration_moves_by_velocity() {
	let mut p = particle(0., 0., 1.).with_vel(V2::new(10., 0.));
	p.update(1.0, None);
	assert_eq!(p.pos, V2::new(10., 0.));
}

#[test]
fn wall_containment_right() {
	let posbox = Posbox::from_size(800., 600.).unwrap();
	for x in [771., 780., 790., 799.] {
		let mut p = particle(x, 300., 30.).with_vel(V2::new(120., 5.));
		resolve_wall(&mut p, &posbox, 1. / 60., 0.9, CollisionTest::LookAhead);
		assert!(p.pos[0] + p.get_radius() <= 800. + EPS);
		assert!((p.vel[0] + 108.).abs() < EPS);
	}
}

#[test]
fn colliding_pair_separated_after_step() {
	let mut world = PWorld::new(Params::default(), walls(1600., 900.)).unwrap();
	world.add_particle(particle(700., 450., 40.).with_vel(V2::new(300., 0.)));
	world.add_particle(particle(760., 460., 25.).with_vel(V2::new(-300., 0.)));
	world.add_particle(particle(200., 200., 30.));
	world.add_particle(particle(200., 200., 30.));
	world.step(1. / 60.);
	assert!(min_gap(&world) >= -EPS, "{}", min_gap(&world));
}

// the wall pass runs after the pair pass, so a pair squeezed against a wall
// keeps a residual overlap that halves every substep
#[test]
fn pair_against_wall_converges() {
	let mut world = PWorld::new(Params::default(), walls(1600., 900.)).unwrap();
	world.add_particle(particle(10., 450., 10.));
	world.add_particle(particle(25., 450., 10.));
	world.step(1. / 60.);
	// 5 initial overlap, halved over 8 substeps
	assert!((min_gap(&world) + 5. / 256.).abs() < EPS, "{}", min_gap(&world));
	for _ in 0..4 {
		world.step(1. / 60.);
	}
	assert!(min_gap(&world) >= -EPS, "{}", min_gap(&world));
	assert_eq!(world.particles()[0].pos[0], 10.);
}

#[test]
fn dense_row_relaxes() {
	let params = Params::default().with_substeps(8);
	let mut world = PWorld::new(params, walls(1600., 900.)).unwrap();
	for i in 0..6 {
		world.add_particle(particle(700. + 12. * i as f32, 450., 10.));
	}
	for _ in 0..60 {
		world.step(1. / 60.);
	}
	assert!(min_gap(&world) >= -EPS, "{}", min_gap(&world));
	for p in world.particles() {
		assert!(p.pos.iter().all(|x| x.is_finite()));
	}
}

#[test]
fn bounces_lose_energy_under_dampening() {
	let params = Params::default().with_dampening(0.7).with_substeps(2);
	let mut world = PWorld::new(params, walls(400., 400.)).unwrap();
	world.add_particle(particle(200., 200., 20.).with_vel(V2::new(900., 0.)));
	let mut last = world.particles()[0].vel[0];
	let mut speeds = vec![last.abs()];
	for _ in 0..600 {
		world.step(1. / 60.);
		let vx = world.particles()[0].vel[0];
		if vx.signum() != last.signum() {
			speeds.push(vx.abs());
		}
		last = vx;
	}
	assert!(speeds.len() > 3);
	for w in speeds.windows(2) {
		assert!(w[1] < w[0], "{:?}", speeds);
	}
}

#[test]
fn container_pulls_back() {
	let c = Container::new(V2::zeros(), 400.).unwrap();
	let mut p = particle(0., 420., 20.);
	resolve_container(&mut p, 1. / 60., &c);
	assert!((p.pos.magnitude() - 380.).abs() < EPS);

	let mut p = particle(0., 370., 20.);
	resolve_container(&mut p, 1. / 60., &c);
	assert_eq!(p.pos, V2::new(0., 370.));
}

#[test]
fn container_world_keeps_particles_inside() {
	let c = Container::new(V2::new(400., 400.), 300.).unwrap();
	let params = Params::default().with_gravity(V2::new(0., 500.));
	let spawner = Spawner::new(8., 16.).unwrap().with_seed(11).with_speed(300.);
	let mut world = PWorld::new(params, Boundary::Container(c))
		.unwrap()
		.with_spawner(spawner);
	world.init_grid(30).unwrap();
	for _ in 0..240 {
		world.step(1. / 60.);
	}
	for p in world.particles() {
		let d = (p.pos - c.center).magnitude();
		assert!(d + p.get_radius() <= 300. + 1.0, "{} at {}", p.get_id(), d);
	}
}

#[test]
fn resolvers_idempotent_at_rest() {
	let posbox = Posbox::from_size(500., 500.).unwrap();
	let c = Container::new(V2::new(250., 250.), 250.).unwrap();
	let mut a = particle(100., 100., 20.);
	let mut b = particle(160., 100., 30.);
	for _ in 0..3 {
		for test in [CollisionTest::LookAhead, CollisionTest::Immediate] {
			assert!(!resolve_wall(&mut a, &posbox, 0.1, 0.9, test));
			assert!(!resolve_pair(&mut a, &mut b, 0.1, PairPolicy::Separate, test));
		}
		assert!(!resolve_container(&mut b, 0.1, &c));
	}
	assert_eq!(a.pos, V2::new(100., 100.));
	assert_eq!(b.pos, V2::new(160., 100.));
}

#[test]
fn gravity_stays_within_walls() {
	let params = Params::default().with_gravity(V2::new(0., 500.));
	let spawner = Spawner::new(10., 20.).unwrap().with_seed(5).with_speed(400.);
	let mut world = PWorld::new(params, walls(600., 400.))
		.unwrap()
		.with_spawner(spawner);
	world.init_grid(40).unwrap();
	for frame in 0..300 {
		if frame % 50 == 0 {
			world.push(Direction::Up);
		}
		world.step(1. / 60.);
	}
	for p in world.particles() {
		let r = p.get_radius();
		assert!(p.pos[0] - r >= -EPS && p.pos[0] + r <= 600. + EPS);
		assert!(p.pos[1] - r >= -EPS && p.pos[1] + r <= 400. + EPS);
	}
}
