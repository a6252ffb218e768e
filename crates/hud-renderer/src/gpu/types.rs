use hud_common::ConfigError;

/// Errors that can occur while building or feeding the overlay renderer.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("quad capacity exceeded: at most {max} quads per frame")]
    CapacityExceeded { max: usize },
}

/// Where and how large the overlay's render target is.
///
/// `width`/`height` are physical pixels. The shader positions quads in
/// logical pixels, so both are divided by the effective pixel ratio:
/// the display's actual ratio clamped to what the device supports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    pub max_pixel_ratio: f32,
}

impl Viewport {
    /// Logical screen size after pixel-ratio adjustment.
    pub fn scaled_size(&self) -> [f32; 2] {
        let ratio = self.max_pixel_ratio.min(self.pixel_ratio);
        [self.width as f32 / ratio, self.height as f32 / ratio]
    }
}
