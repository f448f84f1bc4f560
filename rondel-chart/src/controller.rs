use rondel_scales::numeric::ValueScale;
use rondel_scenegraph::marks::bar::{BarMarkInstance, SceneBarMark};
use serde::{Deserialize, Serialize};

use crate::config::BarsConfig;
use crate::data::BarChartData;
use crate::error::RondelChartError;

/// Pixel-space extents of one bar along the value axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPixelExtents {
    pub size: f32,
    pub base: f32,
    pub head: f32,
    pub center: f32,
}

/// Drives bar sizing against a value scale: resolves stacked starts,
/// maps them to pixels, and assembles render models with the configured
/// border overlays applied.
pub struct BarController<S> {
    scale: S,
    config: BarsConfig,
}

impl<S: ValueScale> BarController<S> {
    pub fn new(scale: S, config: BarsConfig) -> Self {
        Self { scale, config }
    }

    pub fn scale(&self) -> &S {
        &self.scale
    }

    pub fn config(&self) -> &BarsConfig {
        &self.config
    }

    /// Compute the base/head/size/center pixels for one bar.
    ///
    /// When the bar participates in a stack, every earlier visible dataset
    /// with the same stack key and the same value sign contributes to the
    /// start. Each contribution shifts the start down by
    /// `stack_overlap` data units and lengthens the bar to match, tucking
    /// the segment under its predecessor.
    ///
    /// Pixel values are not clamped to the scale area.
    pub fn calculate_bar_value_pixels(
        &self,
        data: &BarChartData,
        dataset_index: usize,
        index: usize,
    ) -> Result<BarPixelExtents, RondelChartError> {
        let datasets = &data.datasets;
        let dataset = datasets
            .get(dataset_index)
            .ok_or(RondelChartError::DatasetLookupError(dataset_index))?;
        let value = dataset
            .data
            .get(index)
            .ok_or(RondelChartError::DatumLookupError {
                dataset: dataset_index,
                index,
            })?
            .parse();

        let is_horizontal = self.scale.is_horizontal();
        let min_bar_length = self.config.min_bar_length;
        let overlap = self.config.stack_overlap;
        let stacked = self.scale.stacked();
        let stack = dataset.stack.as_deref();

        let mut start = match value.start {
            None => 0.0,
            Some(_) => {
                if value.max >= 0.0 && value.min >= 0.0 {
                    value.min
                } else {
                    value.max
                }
            }
        };
        let mut length = match value.start {
            None => value.end,
            Some(_) => {
                if value.max >= 0.0 && value.min >= 0.0 {
                    value.max - value.min
                } else {
                    value.min - value.max
                }
            }
        };

        if stacked == Some(true) || (stacked.is_none() && stack.is_some()) {
            for (i, other) in datasets.iter().enumerate() {
                if i == dataset_index {
                    break;
                }
                if other.hidden || other.stack.as_deref() != stack {
                    continue;
                }

                let Some(other_span) = other.data.get(index).map(|datum| datum.parse()) else {
                    continue;
                };
                let ivalue = match other_span.start {
                    None => other_span.end,
                    Some(_) => {
                        if other_span.min >= 0.0 && other_span.max >= 0.0 {
                            other_span.max
                        } else {
                            other_span.min
                        }
                    }
                };

                if (value.min < 0.0 && ivalue < 0.0) || (value.max >= 0.0 && ivalue > 0.0) {
                    start += ivalue - overlap;
                    length += overlap;
                }
            }
        }

        let base = self.scale.pixel_for_value(start);
        let mut head = self.scale.pixel_for_value(start + length);
        let mut size = head - base;

        if let Some(min_bar_length) = min_bar_length {
            if size.abs() < min_bar_length {
                size = min_bar_length;
                if (length >= 0.0 && !is_horizontal) || (length < 0.0 && is_horizontal) {
                    head = base - min_bar_length;
                } else {
                    head = base + min_bar_length;
                }
            }
        }

        Ok(BarPixelExtents {
            size,
            base,
            head,
            center: head + size / 2.0,
        })
    }

    /// Assemble one bar's render model from its value extents and its slot
    /// on the category axis, then merge the configured border overlays.
    pub fn build_bar(
        &self,
        extents: &BarPixelExtents,
        category_center: f32,
        thickness: f32,
        fill: [f32; 4],
        stroke: [f32; 4],
    ) -> BarMarkInstance {
        let horizontal = self.scale.is_horizontal();
        let mut bar = BarMarkInstance {
            x: if horizontal {
                extents.head
            } else {
                category_center
            },
            y: if horizontal {
                category_center
            } else {
                extents.head
            },
            base: extents.base,
            width: if horizontal { None } else { Some(thickness) },
            height: if horizontal { Some(thickness) } else { None },
            horizontal,
            fill,
            stroke,
            ..Default::default()
        };
        self.config.apply_to(&mut bar);
        bar
    }

    /// Build the full mark for one dataset: one bar per datum, laid out at
    /// the provided category centers with a shared thickness.
    pub fn update_dataset(
        &self,
        data: &BarChartData,
        dataset_index: usize,
        category_centers: &[f32],
        thickness: f32,
        fill: [f32; 4],
        stroke: [f32; 4],
    ) -> Result<SceneBarMark, RondelChartError> {
        let dataset = data
            .datasets
            .get(dataset_index)
            .ok_or(RondelChartError::DatasetLookupError(dataset_index))?;
        let name = dataset.label.clone().unwrap_or_else(|| "bars".to_string());

        let mut bars = Vec::with_capacity(category_centers.len());
        for (index, center) in category_centers.iter().enumerate() {
            let extents = self.calculate_bar_value_pixels(data, dataset_index, index)?;
            bars.push(self.build_bar(&extents, *center, thickness, fill, stroke));
        }

        Ok(SceneBarMark::from_instances(
            name,
            self.scale.is_horizontal(),
            &bars,
        ))
    }
}
