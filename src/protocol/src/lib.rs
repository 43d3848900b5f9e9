pub mod color;
pub mod pr_model;
pub mod update_info;

pub use color::Color;
