use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::viewport::Viewport;
use crate::V2;
use protocol::pr_model::{PrBoundary, PrModel, PrParticle};
use protocol::update_info::UpdateInfo;

const LINE_SIZE: u8 = 3;
const TEXT_HEIGHT: i16 = 10;

fn sdl_color(c: protocol::Color) -> Color {
	let [r, g, b, a] = c.to_array();
	Color::RGBA(r, g, b, a)
}

pub struct Renderer {
	canvas: Canvas<Window>,
	vp: Viewport,
	debug: bool,
}

impl Renderer {
	pub fn new(mut canvas: Canvas<Window>, vp: Viewport) -> Self {
		canvas.set_draw_color(sdl_color(protocol::Color::BLACK));
		canvas.clear();
		canvas.present();
		Self {
			canvas,
			vp,
			debug: false,
		}
	}

	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	pub fn toggle_debug(&mut self) {
		self.debug = !self.debug;
	}

	pub fn viewport(&self) -> &Viewport {
		&self.vp
	}
}

impl Renderer {
	// overflow is okay, `as` saturates
	fn map_pos(&self, pos: V2) -> (i16, i16) {
		let cast = self.vp.w2s(pos);
		(cast[0] as i16, cast[1] as i16)
	}

	fn map_len(&self, len: f32) -> i16 {
		(len * self.vp.scale()).round().max(1.) as i16
	}

	fn draw_boundary(&self, boundary: &PrBoundary) -> Result<(), String> {
		let color = sdl_color(protocol::Color::YELLOW);
		match *boundary {
			PrBoundary::Rect { min, max } => {
				let (x1, y1) = self.map_pos(min.into());
				let (x2, y2) = self.map_pos(max.into());
				self.canvas.rectangle(x1, y1, x2 - 1, y2 - 1, color)
			}
			PrBoundary::Circle { center, radius } => {
				let (x, y) = self.map_pos(center.into());
				self.canvas.aa_circle(x, y, self.map_len(radius), color)
			}
		}
	}

	fn draw_vector(&self, from: V2, v: V2, color: protocol::Color) -> Result<(), String> {
		let (x1, y1) = self.map_pos(from);
		let (x2, y2) = self.map_pos(from + v);
		self.canvas
			.thick_line(x1, y1, x2, y2, LINE_SIZE, sdl_color(color))
	}

	// velocity, acceleration and gravity drawn from the center, same scale
	// as positions
	fn draw_particle_debug(
		&self,
		p: &PrParticle,
		gravity: Option<[f32; 2]>,
	) -> Result<(), String> {
		let pos = V2::from(p.pos);
		self.draw_vector(pos, p.vel.into(), protocol::Color::RED)?;
		self.draw_vector(pos, p.accel.into(), protocol::Color::GREEN)?;
		if let Some(g) = gravity {
			self.draw_vector(pos, g.into(), protocol::Color::PURPLE)?;
		}
		Ok(())
	}

	fn draw_text(&self, row: i16, text: &str, color: protocol::Color) -> Result<(), String> {
		self.canvas
			.string(0, row * TEXT_HEIGHT, text, sdl_color(color))
	}

	pub fn draw(&mut self, pr_model: &PrModel, info: &UpdateInfo) -> Result<(), String> {
		self.canvas.set_draw_color(sdl_color(protocol::Color::BLACK));
		self.canvas.clear();
		self.draw_boundary(&pr_model.boundary)?;
		for p in pr_model.particles.iter() {
			let (x, y) = self.map_pos(p.pos.into());
			self.canvas
				.filled_circle(x, y, self.map_len(p.radius), sdl_color(p.color))?;
		}
		if self.debug {
			for p in pr_model.particles.iter() {
				self.draw_particle_debug(p, pr_model.gravity)?;
			}
			let white = protocol::Color::WHITE;
			if let Some(p) = pr_model.first() {
				let lines = [("pos", p.pos), ("vel", p.vel), ("acc", p.accel)];
				for (row, (name, v)) in lines.iter().enumerate() {
					let text = format!("{}: {}, {}", name, v[0].trunc(), v[1].trunc());
					self.draw_text(row as i16, &text, white)?;
				}
			}
			let color = if info.overloaded() {
				protocol::Color::RED
			} else {
				white
			};
			self.draw_text(3, &info.text(), color)?;
		} else if info.paused {
			self.draw_text(0, "[paused]", protocol::Color::WHITE)?;
		}
		self.canvas.present();
		Ok(())
	}
}
