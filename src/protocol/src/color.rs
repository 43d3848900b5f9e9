/// Display color of a particle. Carries no physical meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 255 }
	}

	pub const BLACK: Self = Self::rgb(0, 0, 0);
	pub const WHITE: Self = Self::rgb(255, 255, 255);
	pub const RED: Self = Self::rgb(230, 41, 55);
	pub const GREEN: Self = Self::rgb(0, 228, 48);
	pub const BLUE: Self = Self::rgb(0, 121, 241);
	pub const PURPLE: Self = Self::rgb(200, 122, 255);
	pub const YELLOW: Self = Self::rgb(253, 249, 0);
	pub const ORANGE: Self = Self::rgb(255, 161, 0);
	pub const PINK: Self = Self::rgb(255, 109, 194);
	pub const SKYBLUE: Self = Self::rgb(102, 191, 255);
	pub const LIME: Self = Self::rgb(0, 158, 47);
	pub const GOLD: Self = Self::rgb(255, 203, 0);

	/// Colors handed out to spawned particles.
	pub const PALETTE: [Self; 8] = [
		Self::BLUE,
		Self::RED,
		Self::GREEN,
		Self::YELLOW,
		Self::ORANGE,
		Self::PINK,
		Self::SKYBLUE,
		Self::GOLD,
	];

	pub fn to_array(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::BLUE
	}
}
