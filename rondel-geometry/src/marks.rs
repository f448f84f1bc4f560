use lyon_path::Path;
use rondel_scenegraph::marks::bar::{BarMarkInstance, SceneBarMark};

use crate::path::to_lyon_path;
use crate::rounded_rect::{bounding_rects, BoundingRects};

fn translated(bar: &BarMarkInstance, origin: [f32; 2]) -> BarMarkInstance {
    let mut bar = *bar;
    bar.x += origin[0];
    bar.y += origin[1];
    // base lies on the value axis
    bar.base += if bar.horizontal { origin[0] } else { origin[1] };
    bar
}

pub trait BarGeometryUtils {
    /// Per-bar outer/inner rectangles, offset by the mark group's origin.
    fn bounding_rects_iter(
        &self,
        origin: [f32; 2],
    ) -> Box<dyn Iterator<Item = BoundingRects> + '_>;

    /// Per-bar outer outlines as lyon paths, for tessellating hosts.
    fn transformed_path_iter(&self, origin: [f32; 2]) -> Box<dyn Iterator<Item = Path> + '_>;
}

impl BarGeometryUtils for SceneBarMark {
    fn bounding_rects_iter(
        &self,
        origin: [f32; 2],
    ) -> Box<dyn Iterator<Item = BoundingRects> + '_> {
        Box::new(
            self.instances()
                .map(move |bar| bounding_rects(&translated(&bar, origin))),
        )
    }

    fn transformed_path_iter(&self, origin: [f32; 2]) -> Box<dyn Iterator<Item = Path> + '_> {
        Box::new(
            self.bounding_rects_iter(origin)
                .map(|rects| to_lyon_path(&rects.outer)),
        )
    }
}
