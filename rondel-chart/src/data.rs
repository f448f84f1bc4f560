use rondel_scales::datum::BarDatum;
use serde::{Deserialize, Serialize};

/// One series of bar values, with an optional stack key grouping it with
/// other series rendered cumulatively at the same category positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    #[serde(default)]
    pub label: Option<String>,
    pub data: Vec<BarDatum>,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

impl BarDataset {
    pub fn new(data: Vec<BarDatum>) -> Self {
        Self {
            label: None,
            data,
            stack: None,
            hidden: false,
        }
    }

    pub fn from_values(values: Vec<f32>) -> Self {
        Self::new(values.into_iter().map(BarDatum::from).collect())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Datasets in declaration order. Stacking accumulates over earlier
/// datasets, so order is meaningful.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartData {
    pub datasets: Vec<BarDataset>,
}

impl BarChartData {
    pub fn new(datasets: Vec<BarDataset>) -> Self {
        Self { datasets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_builders() {
        let dataset = BarDataset::from_values(vec![1.0, 2.0])
            .with_label("revenue")
            .with_stack("a");
        assert_eq!(dataset.label.as_deref(), Some("revenue"));
        assert_eq!(dataset.stack.as_deref(), Some("a"));
        assert!(!dataset.hidden);
        assert_eq!(dataset.data, vec![BarDatum::Scalar(1.0), BarDatum::Scalar(2.0)]);
    }

    #[test]
    fn test_dataset_deserialization_defaults() {
        let dataset: BarDataset = serde_json::from_str(r#"{"data": [1.0, [2.0, 5.0]]}"#).unwrap();
        assert_eq!(dataset.stack, None);
        assert!(!dataset.hidden);
        assert_eq!(dataset.data[1], BarDatum::Range([2.0, 5.0]));
    }
}
