/// Per-frame figures shown on the HUD next to the world.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateInfo {
	// simulation cost relative to the frame budget, 1.0 = full frame
	pub load: f32,
	pub particle_len: usize,
	pub paused: bool,
}

impl UpdateInfo {
	pub fn overloaded(&self) -> bool {
		self.load > 1.0
	}

	pub fn text(&self) -> String {
		let mut text = format!(
			"Load: {:.2}%  Particles: {}",
			self.load * 100.,
			self.particle_len
		);
		if self.paused {
			text.push_str("  [paused]");
		}
		text
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_text() {
		let info = UpdateInfo {
			load: 0.5,
			particle_len: 3,
			paused: true,
		};
		let text = info.text();
		assert!(text.starts_with("Load: 50.00%"));
		assert!(text.contains("Particles: 3"));
		assert!(text.ends_with("[paused]"));
		assert!(!info.overloaded());
	}
}
