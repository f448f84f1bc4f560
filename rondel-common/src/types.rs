use serde::{Deserialize, Serialize};
use strum::VariantNames;

/// Coerce a raw numeric input to a usable value: NaN and negative zero
/// collapse to `+0.0`, everything else passes through untouched.
fn number_or_zero(v: f32) -> f32 {
    if v.is_nan() || v == 0.0 {
        0.0
    } else {
        v
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Returns `b` if self is `a`, `a` if self is `b`, otherwise self.
    pub fn swapped(self, a: Edge, b: Edge) -> Edge {
        if self == a {
            b
        } else if self == b {
            a
        } else {
            self
        }
    }
}

/// Border width for a bar, either uniform or specified per edge.
/// Deserializes from a bare number or an object with any subset of
/// `top`/`right`/`bottom`/`left` keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderWidthSpec {
    Uniform(f32),
    PerEdge {
        #[serde(default)]
        top: f32,
        #[serde(default)]
        right: f32,
        #[serde(default)]
        bottom: f32,
        #[serde(default)]
        left: f32,
    },
}

impl BorderWidthSpec {
    /// Expand to a complete per-edge record. Missing or non-numeric
    /// components come out as 0.
    pub fn to_trbl(&self) -> EdgeWidths {
        match *self {
            BorderWidthSpec::Uniform(v) => {
                let v = number_or_zero(v);
                EdgeWidths {
                    top: v,
                    right: v,
                    bottom: v,
                    left: v,
                }
            }
            BorderWidthSpec::PerEdge {
                top,
                right,
                bottom,
                left,
            } => EdgeWidths {
                top: number_or_zero(top),
                right: number_or_zero(right),
                bottom: number_or_zero(bottom),
                left: number_or_zero(left),
            },
        }
    }
}

impl Default for BorderWidthSpec {
    fn default() -> Self {
        BorderWidthSpec::Uniform(0.0)
    }
}

/// Corner radius for a bar, either uniform or specified per corner.
/// Deserializes from a bare number or an object with any subset of
/// `topLeft`/`topRight`/`bottomLeft`/`bottomRight` keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadiusSpec {
    Uniform(f32),
    #[serde(rename_all = "camelCase")]
    PerCorner {
        #[serde(default)]
        top_left: f32,
        #[serde(default)]
        top_right: f32,
        #[serde(default)]
        bottom_left: f32,
        #[serde(default)]
        bottom_right: f32,
    },
}

impl CornerRadiusSpec {
    pub fn to_trbl_corners(&self) -> CornerRadii {
        match *self {
            CornerRadiusSpec::Uniform(v) => {
                let v = number_or_zero(v);
                CornerRadii {
                    top_left: v,
                    top_right: v,
                    bottom_left: v,
                    bottom_right: v,
                }
            }
            CornerRadiusSpec::PerCorner {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => CornerRadii {
                top_left: number_or_zero(top_left),
                top_right: number_or_zero(top_right),
                bottom_left: number_or_zero(bottom_left),
                bottom_right: number_or_zero(bottom_right),
            },
        }
    }
}

impl Default for CornerRadiusSpec {
    fn default() -> Self {
        CornerRadiusSpec::Uniform(0.0)
    }
}

/// Resolved, clamped border width per edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Resolved, clamped radius per corner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerRadii {
    pub fn uniform(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_left: r,
            bottom_right: r,
        }
    }
}

/// Edges whose border and corner radii are forced to zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl SkippedEdges {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn only(edge: Edge) -> Self {
        let mut skip = Self::default();
        match edge {
            Edge::Top => skip.top = true,
            Edge::Right => skip.right = true,
            Edge::Bottom => skip.bottom = true,
            Edge::Left => skip.left = true,
        }
        skip
    }

    pub fn skips(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}
