pub mod color;
pub mod config;
pub mod errors;

pub use color::Rgba;
pub use config::{OverlayColors, OverlayConfig, MAX_QUADS_LIMIT};
pub use errors::ConfigError;
