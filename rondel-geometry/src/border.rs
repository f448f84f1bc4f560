use rondel_common::types::{
    BorderWidthSpec, CornerRadii, CornerRadiusSpec, Edge, EdgeWidths, SkippedEdges,
};

fn skip_or_limit(skip: bool, value: f32, min: f32, max: f32) -> f32 {
    if skip {
        0.0
    } else {
        value.min(max).max(min)
    }
}

/// Resolve which edges of a bar are skipped, flipping the configured edge
/// so it always lands on the baseline side regardless of which direction
/// the bar extends.
///
/// For horizontal bars the configured `left`/`right` swap when the base
/// pixel exceeds the value pixel; for vertical bars `bottom`/`top` swap
/// when the base sits below the value pixel.
pub fn resolve_skipped(
    edge: Option<Edge>,
    horizontal: bool,
    base: f32,
    value: f32,
) -> SkippedEdges {
    let Some(mut edge) = edge else {
        return SkippedEdges::none();
    };

    if horizontal {
        if base > value {
            edge = edge.swapped(Edge::Left, Edge::Right);
        }
    } else if base < value {
        edge = edge.swapped(Edge::Bottom, Edge::Top);
    }

    SkippedEdges::only(edge)
}

/// Resolve a border width spec against the bar's dimensions. Skipped edges
/// come out as 0; left/right clamp to `max_w`, top/bottom to `max_h`.
/// Negative widths clamp to 0.
pub fn resolve_border_width(
    spec: &BorderWidthSpec,
    skip: &SkippedEdges,
    max_w: f32,
    max_h: f32,
) -> EdgeWidths {
    let widths = spec.to_trbl();

    EdgeWidths {
        top: skip_or_limit(skip.top, widths.top, 0.0, max_h),
        right: skip_or_limit(skip.right, widths.right, 0.0, max_w),
        bottom: skip_or_limit(skip.bottom, widths.bottom, 0.0, max_h),
        left: skip_or_limit(skip.left, widths.left, 0.0, max_w),
    }
}

/// Resolve a corner radius spec against the bar's dimensions. A corner is
/// forced to 0 when either adjoining edge is skipped; otherwise it clamps
/// to `min(max_w, max_h)`.
pub fn resolve_border_radius(
    spec: &CornerRadiusSpec,
    skip: &SkippedEdges,
    max_w: f32,
    max_h: f32,
) -> CornerRadii {
    let radii = spec.to_trbl_corners();
    let max_r = max_w.min(max_h);

    CornerRadii {
        top_left: skip_or_limit(skip.top || skip.left, radii.top_left, 0.0, max_r),
        top_right: skip_or_limit(skip.top || skip.right, radii.top_right, 0.0, max_r),
        bottom_left: skip_or_limit(skip.bottom || skip.left, radii.bottom_left, 0.0, max_r),
        bottom_right: skip_or_limit(skip.bottom || skip.right, radii.bottom_right, 0.0, max_r),
    }
}
