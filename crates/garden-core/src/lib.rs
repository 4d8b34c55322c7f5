pub mod config;
pub mod error;
pub mod event;
pub mod haiku;
pub mod health;
pub mod io;
pub mod markers;
pub mod narrative;
pub mod paths;
pub mod pipeline;
pub mod render;

pub use error::{GardenError, Result};
