mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use hud_common::ConfigError;

    #[test]
    fn capacity_exceeded_display() {
        let err = RendererError::CapacityExceeded { max: 512 };
        assert_eq!(
            err.to_string(),
            "quad capacity exceeded: at most 512 quads per frame"
        );
    }

    #[test]
    fn config_error_passes_through() {
        let err: RendererError =
            ConfigError::ValidationError("max_quads must be positive".into()).into();
        assert_eq!(
            err.to_string(),
            "config validation error: max_quads must be positive"
        );
    }

    #[test]
    fn viewport_scales_by_lesser_pixel_ratio() {
        let vp = Viewport {
            width: 2880,
            height: 1800,
            pixel_ratio: 2.0,
            max_pixel_ratio: 2.0,
        };
        assert_eq!(vp.scaled_size(), [1440.0, 900.0]);
    }

    #[test]
    fn viewport_clamps_to_device_cap() {
        // Display reports 3x but the device caps at 2x.
        let vp = Viewport {
            width: 3000,
            height: 1500,
            pixel_ratio: 3.0,
            max_pixel_ratio: 2.0,
        };
        assert_eq!(vp.scaled_size(), [1500.0, 750.0]);
    }
}
