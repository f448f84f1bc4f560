use rondel_scenegraph::marks::bar::BarMarkInstance;

/// Axis-aligned bounding box of a bar, in pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BarBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BarBounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Bounding box of a bar regardless of orientation. Vertical bars span
/// `x ± width/2` across and `[min(y, base), max(y, base)]` along the value
/// axis; horizontal bars swap the roles. The box is not clamped to any
/// plot area.
pub fn bar_bounds(bar: &BarMarkInstance) -> BarBounds {
    if let Some(width) = bar.width {
        let half = width / 2.0;
        BarBounds {
            left: bar.x - half,
            right: bar.x + half,
            top: bar.y.min(bar.base),
            bottom: bar.y.max(bar.base),
        }
    } else {
        let half = bar.height.unwrap_or_default() / 2.0;
        BarBounds {
            left: bar.x.min(bar.base),
            right: bar.x.max(bar.base),
            top: bar.y - half,
            bottom: bar.y + half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_bounds() {
        let bar = BarMarkInstance {
            x: 50.0,
            y: 40.0,
            base: 100.0,
            width: Some(20.0),
            height: None,
            ..Default::default()
        };
        let bounds = bar_bounds(&bar);
        assert_eq!(
            bounds,
            BarBounds {
                left: 40.0,
                top: 40.0,
                right: 60.0,
                bottom: 100.0
            }
        );
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 60.0);
    }

    #[test]
    fn test_vertical_bounds_negative_direction() {
        // Value pixel below the base: extent still min..max
        let bar = BarMarkInstance {
            x: 50.0,
            y: 120.0,
            base: 100.0,
            width: Some(20.0),
            height: None,
            ..Default::default()
        };
        let bounds = bar_bounds(&bar);
        assert_eq!(bounds.top, 100.0);
        assert_eq!(bounds.bottom, 120.0);
    }

    #[test]
    fn test_horizontal_bounds() {
        let bar = BarMarkInstance {
            x: 80.0,
            y: 30.0,
            base: 20.0,
            width: None,
            height: Some(10.0),
            horizontal: true,
            ..Default::default()
        };
        let bounds = bar_bounds(&bar);
        assert_eq!(
            bounds,
            BarBounds {
                left: 20.0,
                top: 25.0,
                right: 80.0,
                bottom: 35.0
            }
        );
    }

    #[test]
    fn test_bounds_may_exceed_plot_area() {
        let bar = BarMarkInstance {
            x: -5.0,
            y: -40.0,
            base: 10.0,
            width: Some(30.0),
            height: None,
            ..Default::default()
        };
        let bounds = bar_bounds(&bar);
        assert_eq!(bounds.left, -20.0);
        assert_eq!(bounds.top, -40.0);
    }
}
