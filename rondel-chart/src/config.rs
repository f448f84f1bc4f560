use rondel_common::types::{BorderWidthSpec, CornerRadiusSpec, Edge};
use rondel_scenegraph::marks::bar::BarMarkInstance;
use serde::{Deserialize, Serialize};

/// Bar rendering options. Border fields are overlays: when set, they
/// override whatever the host populated on the bar model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarsConfig {
    pub border_width: Option<BorderWidthSpec>,
    pub border_radius: Option<CornerRadiusSpec>,
    pub border_skipped: Option<Edge>,

    /// Minimum rendered bar length in pixels, so near-zero values still
    /// show a sliver in the correct direction.
    pub min_bar_length: Option<f32>,

    /// Data-space distance each stacked segment extends beneath its
    /// predecessor, so the seam between rounded segments stays covered.
    /// Set to 0 for plain cumulative stacking.
    pub stack_overlap: f32,

    /// Band-layout fractions consumed by the host when sizing bar slots.
    pub category_percentage: f32,
    pub bar_percentage: f32,
}

impl Default for BarsConfig {
    fn default() -> Self {
        Self::vertical()
    }
}

impl BarsConfig {
    /// Defaults for vertical bars: the baseline edge is the bottom.
    pub fn vertical() -> Self {
        Self {
            border_width: None,
            border_radius: None,
            border_skipped: Some(Edge::Bottom),
            min_bar_length: None,
            stack_overlap: 20.0,
            category_percentage: 0.8,
            bar_percentage: 0.9,
        }
    }

    /// Defaults for horizontal bars: the baseline edge is the left.
    pub fn horizontal() -> Self {
        Self {
            border_skipped: Some(Edge::Left),
            ..Self::vertical()
        }
    }

    pub fn with_border_width(mut self, width: BorderWidthSpec) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn with_border_radius(mut self, radius: CornerRadiusSpec) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_border_skipped(mut self, edge: Option<Edge>) -> Self {
        self.border_skipped = edge;
        self
    }

    pub fn with_min_bar_length(mut self, min: Option<f32>) -> Self {
        self.min_bar_length = min;
        self
    }

    pub fn with_stack_overlap(mut self, overlap: f32) -> Self {
        self.stack_overlap = overlap;
        self
    }

    /// Merge the configured overlays into a populated bar model. Runs as
    /// an explicit step after the host fills in the model, replacing the
    /// property interception the host library would otherwise need.
    pub fn apply_to(&self, bar: &mut BarMarkInstance) {
        if let Some(width) = self.border_width {
            bar.border_width = width;
        }
        if let Some(radius) = self.border_radius {
            bar.border_radius = radius;
        }
        if let Some(edge) = self.border_skipped {
            bar.border_skipped = Some(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_defaults() {
        let vertical = BarsConfig::vertical();
        assert_eq!(vertical.border_skipped, Some(Edge::Bottom));
        assert_eq!(vertical.stack_overlap, 20.0);
        assert_eq!(vertical.category_percentage, 0.8);
        assert_eq!(vertical.bar_percentage, 0.9);

        let horizontal = BarsConfig::horizontal();
        assert_eq!(horizontal.border_skipped, Some(Edge::Left));
        assert_eq!(horizontal.stack_overlap, 20.0);
    }

    #[test]
    fn test_deserialize_host_option_keys() {
        let config: BarsConfig = serde_json::from_str(
            r#"{
                "borderWidth": {"left": 2.0},
                "borderRadius": 8.0,
                "borderSkipped": "left",
                "minBarLength": 4.0,
                "stackOverlap": 0.0
            }"#,
        )
        .unwrap();

        assert_eq!(config.border_radius, Some(CornerRadiusSpec::Uniform(8.0)));
        assert_eq!(config.border_skipped, Some(Edge::Left));
        assert_eq!(config.min_bar_length, Some(4.0));
        assert_eq!(config.stack_overlap, 0.0);
        // Unspecified fields keep their defaults
        assert_eq!(config.category_percentage, 0.8);
    }

    #[test]
    fn test_apply_to_overrides_populated_model() {
        let config = BarsConfig::vertical()
            .with_border_radius(CornerRadiusSpec::Uniform(6.0))
            .with_border_width(BorderWidthSpec::Uniform(2.0));

        let mut bar = BarMarkInstance {
            border_width: BorderWidthSpec::Uniform(1.0),
            border_skipped: None,
            ..Default::default()
        };
        config.apply_to(&mut bar);

        assert_eq!(bar.border_width, BorderWidthSpec::Uniform(2.0));
        assert_eq!(bar.border_radius, CornerRadiusSpec::Uniform(6.0));
        assert_eq!(bar.border_skipped, Some(Edge::Bottom));
    }

    #[test]
    fn test_apply_to_leaves_unconfigured_fields() {
        let config = BarsConfig::vertical().with_border_skipped(None);
        let mut bar = BarMarkInstance {
            border_width: BorderWidthSpec::Uniform(3.0),
            ..Default::default()
        };
        config.apply_to(&mut bar);
        assert_eq!(bar.border_width, BorderWidthSpec::Uniform(3.0));
        assert_eq!(bar.border_skipped, None);
    }
}
