use std::f32::consts::{FRAC_PI_2, PI};

use lyon_extra::euclid::Point2D;
use lyon_path::{builder::BorderRadii, geom::Box2D, Path, Winding};
use rondel_common::types::CornerRadii;

use crate::rounded_rect::RoundedRect;

/// A canvas-like path target. Angles are radians with 0 along positive x
/// and `π/2` pointing down; `counterclockwise` selects the sweep direction
/// between the two angles.
pub trait PathSink {
    fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    );

    fn line_to(&mut self, x: f32, y: f32);
}

/// Append the outline of a rounded rectangle to the sink's current path,
/// starting at the top-left arc and walking down the left edge. Corners
/// with radius 0 still issue their arc, which degenerates to a point. The
/// path is left open for the caller to fill or stroke.
pub fn add_rounded_rect_path<S: PathSink>(sink: &mut S, rect: &RoundedRect) {
    let RoundedRect { x, y, w, h, radius } = *rect;

    // top left arc
    sink.arc(
        x + radius.top_left,
        y + radius.top_left,
        radius.top_left,
        -FRAC_PI_2,
        PI,
        true,
    );

    // line from top left to bottom left
    sink.line_to(x, y + h - radius.bottom_left);

    // bottom left arc
    sink.arc(
        x + radius.bottom_left,
        y + h - radius.bottom_left,
        radius.bottom_left,
        PI,
        FRAC_PI_2,
        true,
    );

    // line from bottom left to bottom right
    sink.line_to(x + w - radius.bottom_right, y + h);

    // bottom right arc
    sink.arc(
        x + w - radius.bottom_right,
        y + h - radius.bottom_right,
        radius.bottom_right,
        FRAC_PI_2,
        0.0,
        true,
    );

    // line from bottom right to top right
    sink.line_to(x + w, y + radius.top_right);

    // top right arc
    sink.arc(
        x + w - radius.top_right,
        y + radius.top_right,
        radius.top_right,
        0.0,
        -FRAC_PI_2,
        true,
    );

    // line from top right to top left
    sink.line_to(x + radius.top_left, y);
}

/// One recorded path primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Arc {
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    },
    LineTo {
        x: f32,
        y: f32,
    },
}

/// A `PathSink` that records segments for later replay against a concrete
/// drawing surface, and for asserting on emitted geometry in tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordedPath {
    pub segments: Vec<PathSegment>,
}

impl RecordedPath {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathSink for RecordedPath {
    fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        self.segments.push(PathSegment::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.segments.push(PathSegment::LineTo { x, y });
    }
}

/// Build a lyon path for a composed rectangle, for hosts that tessellate
/// instead of replaying canvas primitives.
pub fn to_lyon_path(rect: &RoundedRect) -> Path {
    let mut path_builder = Path::builder();
    let b = Box2D::new(
        Point2D::new(rect.x, rect.y),
        Point2D::new(rect.x + rect.w, rect.y + rect.h),
    );

    if rect.radius == CornerRadii::default() {
        path_builder.add_rectangle(&b, Winding::Positive);
    } else {
        path_builder.add_rounded_rectangle(
            &b,
            &BorderRadii {
                top_left: rect.radius.top_left,
                top_right: rect.radius.top_right,
                bottom_left: rect.radius.bottom_left,
                bottom_right: rect.radius.bottom_right,
            },
            Winding::Positive,
        );
    }

    path_builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn rect(x: f32, y: f32, w: f32, h: f32, radius: CornerRadii) -> RoundedRect {
        RoundedRect { x, y, w, h, radius }
    }

    #[test]
    fn test_zero_radius_emits_plain_rectangle() {
        let mut path = RecordedPath::new();
        add_rounded_rect_path(&mut path, &rect(10.0, 20.0, 100.0, 50.0, CornerRadii::default()));

        assert_eq!(path.segments.len(), 8);

        let lines: Vec<_> = path
            .segments
            .iter()
            .filter_map(|seg| match seg {
                PathSegment::LineTo { x, y } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(
            lines,
            vec![(10.0, 70.0), (110.0, 70.0), (110.0, 20.0), (10.0, 20.0)]
        );

        // Arcs are still issued, all degenerate
        for seg in &path.segments {
            if let PathSegment::Arc {
                radius,
                counterclockwise,
                ..
            } = seg
            {
                assert_eq!(*radius, 0.0);
                assert!(*counterclockwise);
            }
        }
    }

    #[test]
    fn test_rounded_corner_arc_placement() {
        let radius = CornerRadii {
            top_left: 10.0,
            top_right: 4.0,
            bottom_left: 6.0,
            bottom_right: 8.0,
        };
        let mut path = RecordedPath::new();
        add_rounded_rect_path(&mut path, &rect(0.0, 0.0, 100.0, 50.0, radius));

        match path.segments[0] {
            PathSegment::Arc {
                cx,
                cy,
                radius,
                start_angle,
                end_angle,
                counterclockwise,
            } => {
                assert_approx_eq!(f32, cx, 10.0);
                assert_approx_eq!(f32, cy, 10.0);
                assert_approx_eq!(f32, radius, 10.0);
                assert_approx_eq!(f32, start_angle, -FRAC_PI_2);
                assert_approx_eq!(f32, end_angle, PI);
                assert!(counterclockwise);
            }
            _ => panic!("expected top-left arc first"),
        }

        // Left edge stops where the bottom-left arc begins
        assert_eq!(path.segments[1], PathSegment::LineTo { x: 0.0, y: 44.0 });

        match path.segments[4] {
            PathSegment::Arc {
                cx, cy, radius, ..
            } => {
                assert_approx_eq!(f32, cx, 92.0);
                assert_approx_eq!(f32, cy, 42.0);
                assert_approx_eq!(f32, radius, 8.0);
            }
            _ => panic!("expected bottom-right arc"),
        }

        // Path returns to the start of the top-left arc
        assert_eq!(
            *path.segments.last().unwrap(),
            PathSegment::LineTo { x: 10.0, y: 0.0 }
        );
    }

    #[test]
    fn test_lyon_path_construction() {
        let plain = to_lyon_path(&rect(0.0, 0.0, 10.0, 10.0, CornerRadii::default()));
        assert!(plain.iter().count() > 0);

        let rounded = to_lyon_path(&rect(0.0, 0.0, 10.0, 10.0, CornerRadii::uniform(2.0)));
        // A rounded rectangle produces more events than a plain one
        assert!(rounded.iter().count() > plain.iter().count());
    }
}
