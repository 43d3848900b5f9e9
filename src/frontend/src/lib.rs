pub mod args;
pub mod input;
pub mod renderer;
pub mod time_manager;
pub mod viewport;

pub type V2 = nalgebra::Vector2<f32>;
