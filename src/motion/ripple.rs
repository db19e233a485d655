/// Bounding box of a clicked control, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and offset of a ripple relative to the control it sits in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// A square ripple as large as the control's bigger side, centred on the
    /// click point.
    pub fn at(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: client_x - bounds.left - size / 2.0,
            top: client_y - bounds.top - size / 2.0,
        }
    }

    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("width", px(self.size)),
            ("height", px(self.size)),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Bounds = Bounds {
        left: 100.0,
        top: 40.0,
        width: 160.0,
        height: 48.0,
    };

    #[test]
    fn sized_to_larger_side() {
        let ripple = RippleGeometry::at(BUTTON, 150.0, 60.0);
        assert_eq!(ripple.size, 160.0);

        let tall = Bounds {
            width: 30.0,
            height: 90.0,
            ..BUTTON
        };
        assert_eq!(RippleGeometry::at(tall, 110.0, 50.0).size, 90.0);
    }

    #[test]
    fn centred_on_click() {
        let ripple = RippleGeometry::at(BUTTON, 180.0, 64.0);
        assert_eq!(ripple.left + ripple.size / 2.0, 80.0);
        assert_eq!(ripple.top + ripple.size / 2.0, 24.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -56.0);
    }

    #[test]
    fn style_values_are_pixels() {
        let ripple = RippleGeometry::at(BUTTON, 100.0, 40.0);
        let style = ripple.style();
        assert_eq!(style[0], ("width", "160px".to_string()));
        assert_eq!(style[1], ("height", "160px".to_string()));
        assert_eq!(style[2], ("left", "-80px".to_string()));
        assert_eq!(style[3], ("top", "-80px".to_string()));
    }
}
