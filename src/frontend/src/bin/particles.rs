use clap::Parser;

use frontend::args::Args;
use frontend::input::{held_spawn, translate, Action};
use frontend::renderer::Renderer;
use frontend::time_manager::TimeManager;
use frontend::viewport::Viewport;
use protocol::update_info::UpdateInfo;

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	let mut pworld = args.world()?;

	let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
	let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
	let window = video_subsystem
		.window("particles", args.width, args.height)
		.position_centered()
		.build()?;
	let canvas = window.into_canvas().build()?;
	let vp = Viewport::fit(&pworld.pr_model().boundary, [args.width, args.height]);
	let mut renderer = Renderer::new(canvas, vp).with_debug(args.debug);
	let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;
	let mut tm = TimeManager::new(args.fps, args.time_model());

	'running: loop {
		for event in event_pump.poll_iter() {
			match translate(&event, renderer.viewport()) {
				Some(Action::Quit) => break 'running,
				Some(Action::ToggleDebug) => renderer.toggle_debug(),
				Some(Action::Controller(msg)) => pworld.handle(msg),
				None => {}
			}
		}
		let mouse = event_pump.mouse_state();
		if let Some(msg) =
			held_spawn(mouse.right(), mouse.x(), mouse.y(), renderer.viewport())
		{
			pworld.handle(msg);
		}

		let dt = tm.take_time();
		pworld.step(dt);
		let info = UpdateInfo {
			load: tm.load(),
			particle_len: pworld.len(),
			paused: pworld.is_paused(),
		};
		renderer
			.draw(&pworld.pr_model(), &info)
			.map_err(anyhow::Error::msg)?;
	}
	eprintln!("INFO: quit with {} particles", pworld.len());
	Ok(())
}
