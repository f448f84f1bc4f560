use serde::{Deserialize, Serialize};

/// A bar's raw data value: a plain number, or a `[start, end]` pair for
/// range (floating) bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarDatum {
    Scalar(f32),
    Range([f32; 2]),
}

impl BarDatum {
    pub fn parse(&self) -> ParsedSpan {
        match *self {
            BarDatum::Scalar(v) => ParsedSpan {
                start: None,
                end: v,
                min: v,
                max: v,
            },
            BarDatum::Range([start, end]) => ParsedSpan {
                start: Some(start),
                end,
                min: start.min(end),
                max: start.max(end),
            },
        }
    }
}

impl From<f32> for BarDatum {
    fn from(v: f32) -> Self {
        BarDatum::Scalar(v)
    }
}

/// A parsed bar value in data space. `start` is present only for range
/// bars; scalar bars collapse to `min == max == end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedSpan {
    pub start: Option<f32>,
    pub end: f32,
    pub min: f32,
    pub max: f32,
}
