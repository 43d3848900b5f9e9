use std::time::{Duration, Instant};

pub enum TimeModel {
	// same dt every frame regardless of wall time
	Fixed,
	RtFrameLock,
}

/// Frame clock of the main loop.
pub struct TimeManager {
	pft: f32,
	max_dt: f32,
	model: TimeModel,
	start_time: Instant,
	load: f32,
}

impl TimeManager {
	pub fn new(fps: u32, model: TimeModel) -> Self {
		let pft = 1. / fps.max(1) as f32;
		Self {
			pft,
			max_dt: 4. * pft,
			model,
			start_time: Instant::now(),
			load: 0.,
		}
	}

	pub fn with_max_dt(mut self, max_dt: f32) -> Self {
		self.max_dt = max_dt;
		self
	}

	/// Share of the frame budget the last frame spent working.
	pub fn load(&self) -> f32 {
		self.load
	}

	/// Waits out the rest of the frame and returns the dt to simulate.
	/// Long stalls (window drags, breakpoints) are capped at `max_dt`.
	pub fn take_time(&mut self) -> f32 {
		let work = self.start_time.elapsed().as_secs_f32();
		self.load = work / self.pft;
		if work < self.pft {
			std::thread::sleep(Duration::from_secs_f32(self.pft - work));
		}
		let passed = self.start_time.elapsed().as_secs_f32();
		self.start_time = Instant::now();
		match self.model {
			TimeModel::Fixed => self.pft,
			TimeModel::RtFrameLock => passed.min(self.max_dt),
		}
	}
}
