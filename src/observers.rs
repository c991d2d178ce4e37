/// Scroll offset (px) past which the navbar switches to its solid style.
pub const NAVBAR_SOLID_THRESHOLD: f64 = 24.0;

/// Maximum parallax travel across the whole viewport (px).
pub const PARALLAX_RANGE: f64 = 30.0;
pub const PARALLAX_SCALE: f64 = 1.05;

pub fn navbar_solid(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SOLID_THRESHOLD
}

/// Background offset for the current pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

impl ParallaxOffset {
    pub fn from_pointer(pointer_x: f64, pointer_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: axis_offset(pointer_x, width),
            y: axis_offset(pointer_y, height),
        }
    }

    /// CSS transform for the background layer.
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, PARALLAX_SCALE
        )
    }
}

fn axis_offset(position: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (position / extent - 0.5) * PARALLAX_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_threshold() {
        assert!(!navbar_solid(0.0));
        assert!(!navbar_solid(24.0));
        assert!(navbar_solid(25.0));
        assert!(navbar_solid(24.5));
        assert!(navbar_solid(4000.0));
        // rubber-band overscroll reports negative offsets
        assert!(!navbar_solid(-10.0));
    }

    #[test]
    fn test_parallax_center_and_corners() {
        let center = ParallaxOffset::from_pointer(640.0, 360.0, 1280.0, 720.0);
        assert_eq!(center, ParallaxOffset { x: 0.0, y: 0.0 });

        let origin = ParallaxOffset::from_pointer(0.0, 0.0, 1280.0, 720.0);
        assert_eq!(origin, ParallaxOffset { x: -15.0, y: -15.0 });

        let far = ParallaxOffset::from_pointer(1280.0, 720.0, 1280.0, 720.0);
        assert_eq!(far, ParallaxOffset { x: 15.0, y: 15.0 });
    }

    #[test]
    fn test_parallax_is_linear() {
        let quarter = ParallaxOffset::from_pointer(250.0, 750.0, 1000.0, 1000.0);
        assert_eq!(quarter, ParallaxOffset { x: -7.5, y: 7.5 });
    }

    #[test]
    fn test_parallax_zero_viewport() {
        let offset = ParallaxOffset::from_pointer(10.0, 10.0, 0.0, 720.0);
        assert_eq!(offset.x, 0.0);
        assert!(offset.y < 0.0);
    }

    #[test]
    fn test_parallax_transform() {
        let origin = ParallaxOffset::from_pointer(0.0, 0.0, 800.0, 600.0);
        assert_eq!(origin.transform(), "translate(-15px, -15px) scale(1.05)");
        assert_eq!(
            ParallaxOffset::default().transform(),
            "translate(0px, 0px) scale(1.05)"
        );
    }
}
