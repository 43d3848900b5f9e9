pub mod boundary;
pub mod controller_message;
pub mod error;
pub mod force;
pub mod params;
pub mod particle;
pub mod posbox;
pub mod pworld;
pub mod resolver;
pub mod spawn;

pub use error::{Error, Result};

pub type V2 = nalgebra::Vector2<f32>;
