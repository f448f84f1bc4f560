use rondel_common::types::CornerRadii;
use rondel_scenegraph::marks::bar::BarMarkInstance;

use crate::border::{resolve_border_radius, resolve_border_width, resolve_skipped};
use crate::bounds::bar_bounds;
use crate::path::{add_rounded_rect_path, PathSink};

/// A rectangle with one clamped radius per corner.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub radius: CornerRadii,
}

/// The two nested rectangles a bar renders with: `outer` spans the full
/// bounds and is traced for the border, `inner` is shrunk by the border
/// widths and traced for the fill.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BoundingRects {
    pub outer: RoundedRect,
    pub inner: RoundedRect,
}

impl BoundingRects {
    /// Append the fill outline (the inner rectangle) to `sink`.
    pub fn emit_fill_path<S: PathSink>(&self, sink: &mut S) {
        add_rounded_rect_path(sink, &self.inner);
    }

    /// Append the border outline to `sink`: the outer rectangle followed by
    /// the inner one, so an even-odd fill paints only the border ring.
    pub fn emit_border_path<S: PathSink>(&self, sink: &mut S) {
        add_rounded_rect_path(sink, &self.outer);
        add_rounded_rect_path(sink, &self.inner);
    }
}

/// Compose a bar's outer and inner rounded rectangles.
///
/// Border widths are clamped to half the corresponding dimension before the
/// inner rectangle is derived, which keeps the inner width/height
/// non-negative. Each inner corner radius is the outer radius reduced by
/// the larger of the two adjoining border widths, floored at 0.
pub fn bounding_rects(bar: &BarMarkInstance) -> BoundingRects {
    let bounds = bar_bounds(bar);
    let width = bounds.width();
    let height = bounds.height();

    let value = if bar.horizontal { bar.x } else { bar.y };
    let skip = resolve_skipped(bar.border_skipped, bar.horizontal, bar.base, value);
    let border = resolve_border_width(&bar.border_width, &skip, width / 2.0, height / 2.0);
    let radius = resolve_border_radius(&bar.border_radius, &skip, width / 2.0, height / 2.0);

    BoundingRects {
        outer: RoundedRect {
            x: bounds.left,
            y: bounds.top,
            w: width,
            h: height,
            radius,
        },
        inner: RoundedRect {
            x: bounds.left + border.left,
            y: bounds.top + border.top,
            w: width - border.left - border.right,
            h: height - border.top - border.bottom,
            radius: CornerRadii {
                top_left: (radius.top_left - border.top.max(border.left)).max(0.0),
                top_right: (radius.top_right - border.top.max(border.right)).max(0.0),
                bottom_left: (radius.bottom_left - border.bottom.max(border.left)).max(0.0),
                bottom_right: (radius.bottom_right - border.bottom.max(border.right)).max(0.0),
            },
        },
    }
}
