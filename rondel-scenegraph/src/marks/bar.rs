use itertools::izip;
use rondel_common::types::{BorderWidthSpec, CornerRadiusSpec, Edge};
use rondel_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

/// A group of bars sharing one orientation and skip edge, with per-bar
/// position, extent, and border encodings.
///
/// Vertical bars carry a `width` encoding (thickness along x, extent from
/// `base` to `y`); horizontal bars carry `height` (thickness along y,
/// extent from `base` to `x`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneBarMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub horizontal: bool,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub base: ScalarOrArray<f32>,
    pub width: Option<ScalarOrArray<f32>>,
    pub height: Option<ScalarOrArray<f32>>,
    pub fill: ScalarOrArray<[f32; 4]>,
    pub stroke: ScalarOrArray<[f32; 4]>,
    pub border_width: ScalarOrArray<BorderWidthSpec>,
    pub border_radius: ScalarOrArray<CornerRadiusSpec>,
    pub border_skipped: Option<Edge>,
}

impl SceneBarMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }

    pub fn base_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.base.as_iter(self.len as usize)
    }

    pub fn width_iter(&self) -> Box<dyn Iterator<Item = Option<f32>> + '_> {
        if let Some(width) = self.width.as_ref() {
            Box::new(width.as_iter_owned(self.len as usize).map(Some))
        } else {
            Box::new(std::iter::repeat(None).take(self.len as usize))
        }
    }

    pub fn height_iter(&self) -> Box<dyn Iterator<Item = Option<f32>> + '_> {
        if let Some(height) = self.height.as_ref() {
            Box::new(height.as_iter_owned(self.len as usize).map(Some))
        } else {
            Box::new(std::iter::repeat(None).take(self.len as usize))
        }
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &[f32; 4]> + '_> {
        self.fill.as_iter(self.len as usize)
    }

    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &[f32; 4]> + '_> {
        self.stroke.as_iter(self.len as usize)
    }

    pub fn border_width_iter(&self) -> Box<dyn Iterator<Item = &BorderWidthSpec> + '_> {
        self.border_width.as_iter(self.len as usize)
    }

    pub fn border_radius_iter(&self) -> Box<dyn Iterator<Item = &CornerRadiusSpec> + '_> {
        self.border_radius.as_iter(self.len as usize)
    }

    /// Iterate per-bar descriptors, resolving every encoding for each bar.
    pub fn instances(&self) -> Box<dyn Iterator<Item = BarMarkInstance> + '_> {
        let horizontal = self.horizontal;
        let border_skipped = self.border_skipped;
        Box::new(
            izip!(
                self.x_iter(),
                self.y_iter(),
                self.base_iter(),
                self.width_iter(),
                self.height_iter(),
                self.fill_iter(),
                self.stroke_iter(),
                self.border_width_iter(),
                self.border_radius_iter()
            )
            .map(
                move |(x, y, base, width, height, fill, stroke, border_width, border_radius)| {
                    BarMarkInstance {
                        x: *x,
                        y: *y,
                        base: *base,
                        width,
                        height,
                        horizontal,
                        fill: *fill,
                        stroke: *stroke,
                        border_width: *border_width,
                        border_radius: *border_radius,
                        border_skipped,
                    }
                },
            ),
        )
    }

    /// Assemble a mark from per-bar descriptors. The thickness encoding is
    /// taken from `height` for horizontal marks and `width` otherwise,
    /// defaulting any missing value to 1.
    pub fn from_instances(
        name: impl Into<String>,
        horizontal: bool,
        instances: &[BarMarkInstance],
    ) -> Self {
        let thickness: Vec<f32> = instances
            .iter()
            .map(|bar| {
                if horizontal {
                    bar.height.unwrap_or(1.0)
                } else {
                    bar.width.unwrap_or(1.0)
                }
            })
            .collect();
        let (width, height) = if horizontal {
            (None, Some(ScalarOrArray::new_array(thickness)))
        } else {
            (Some(ScalarOrArray::new_array(thickness)), None)
        };

        Self {
            name: name.into(),
            clip: true,
            len: instances.len() as u32,
            horizontal,
            x: ScalarOrArray::new_array(instances.iter().map(|bar| bar.x).collect()),
            y: ScalarOrArray::new_array(instances.iter().map(|bar| bar.y).collect()),
            base: ScalarOrArray::new_array(instances.iter().map(|bar| bar.base).collect()),
            width,
            height,
            fill: ScalarOrArray::new_array(instances.iter().map(|bar| bar.fill).collect()),
            stroke: ScalarOrArray::new_array(instances.iter().map(|bar| bar.stroke).collect()),
            border_width: ScalarOrArray::new_array(
                instances.iter().map(|bar| bar.border_width).collect(),
            ),
            border_radius: ScalarOrArray::new_array(
                instances.iter().map(|bar| bar.border_radius).collect(),
            ),
            border_skipped: instances.first().and_then(|bar| bar.border_skipped),
        }
    }
}

impl Default for SceneBarMark {
    fn default() -> Self {
        Self {
            name: "bar_mark".to_string(),
            clip: true,
            len: 1,
            horizontal: false,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            base: ScalarOrArray::new_scalar(0.0),
            width: Some(ScalarOrArray::new_scalar(1.0)),
            height: None,
            fill: ScalarOrArray::new_scalar([0.0, 0.0, 0.0, 0.0]),
            stroke: ScalarOrArray::new_scalar([0.0, 0.0, 0.0, 0.0]),
            border_width: ScalarOrArray::new_scalar(BorderWidthSpec::Uniform(0.0)),
            border_radius: ScalarOrArray::new_scalar(CornerRadiusSpec::Uniform(0.0)),
            border_skipped: None,
        }
    }
}

/// One bar's fully resolved render model.
///
/// `x`/`y` locate the value end of the bar: for vertical bars `x` is the
/// thickness center and `y` the value pixel; for horizontal bars the roles
/// swap. `base` is the baseline pixel on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BarMarkInstance {
    pub x: f32,
    pub y: f32,
    pub base: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub horizontal: bool,
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
    pub border_width: BorderWidthSpec,
    pub border_radius: CornerRadiusSpec,
    pub border_skipped: Option<Edge>,
}

impl Default for BarMarkInstance {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            base: 0.0,
            width: Some(1.0),
            height: None,
            horizontal: false,
            fill: [0.0, 0.0, 0.0, 0.0],
            stroke: [0.0, 0.0, 0.0, 0.0],
            border_width: BorderWidthSpec::Uniform(0.0),
            border_radius: CornerRadiusSpec::Uniform(0.0),
            border_skipped: None,
        }
    }
}

impl BarMarkInstance {
    /// A bar is treated as vertical when it carries an explicit width.
    pub fn is_vertical(&self) -> bool {
        self.width.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_zip_encodings() {
        let mark = SceneBarMark {
            len: 3,
            x: ScalarOrArray::new_array(vec![10.0, 20.0, 30.0]),
            y: ScalarOrArray::new_array(vec![5.0, 6.0, 7.0]),
            base: ScalarOrArray::new_scalar(100.0),
            width: Some(ScalarOrArray::new_scalar(8.0)),
            ..Default::default()
        };

        let instances: Vec<_> = mark.instances().collect();
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[1].x, 20.0);
        assert_eq!(instances[1].y, 6.0);
        assert_eq!(instances[1].base, 100.0);
        assert_eq!(instances[1].width, Some(8.0));
        assert_eq!(instances[1].height, None);
        assert!(instances[1].is_vertical());
    }

    #[test]
    fn test_horizontal_mark_has_no_width() {
        let mark = SceneBarMark {
            horizontal: true,
            width: None,
            height: Some(ScalarOrArray::new_scalar(12.0)),
            ..Default::default()
        };
        let bar = mark.instances().next().unwrap();
        assert_eq!(bar.width, None);
        assert_eq!(bar.height, Some(12.0));
        assert!(!bar.is_vertical());
        assert!(bar.horizontal);
    }

    #[test]
    fn test_from_instances_round_trip() {
        let bars = vec![
            BarMarkInstance {
                x: 10.0,
                y: 40.0,
                base: 100.0,
                width: Some(16.0),
                ..Default::default()
            },
            BarMarkInstance {
                x: 30.0,
                y: 60.0,
                base: 100.0,
                width: Some(16.0),
                ..Default::default()
            },
        ];
        let mark = SceneBarMark::from_instances("bars", false, &bars);
        assert_eq!(mark.len, 2);
        let out: Vec<_> = mark.instances().collect();
        assert_eq!(out, bars);
    }

    #[test]
    fn test_serde_kebab_case() {
        let mark = SceneBarMark::default();
        let json = serde_json::to_value(&mark).unwrap();
        assert!(json.get("border-width").is_some());
        assert!(json.get("border-skipped").is_some());
    }
}
