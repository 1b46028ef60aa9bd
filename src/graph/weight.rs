//! Edge weights.
//!
//! An edge either carries a numeric weight or is a plain "connected" marker.
//! Zero is a valid numeric weight and is distinct from the absence of an edge;
//! absence is only ever represented structurally by the graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The weight stored on a directed edge.
///
/// `Unit` is the boolean `true` marker used by graphs that only care about
/// connectivity. It costs `1` when walked by weighted algorithms.
///
/// In JSON a weight is either a number or `true`:
///
/// ```rust
/// use graphscope::graph::Weight;
///
/// let w: Weight = serde_json::from_str("2.5").unwrap();
/// assert_eq!(w, Weight::Value(2.5));
///
/// let w: Weight = serde_json::from_str("true").unwrap();
/// assert_eq!(w, Weight::Unit);
///
/// // `false` would mean "no edge", which is not a weight
/// assert!(serde_json::from_str::<Weight>("false").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawWeight", into = "RawWeight")]
pub enum Weight {
    /// Unweighted connection marker
    #[default]
    Unit,
    /// Numeric weight, zero included
    Value(f64),
}

impl Weight {
    /// Returns the cost of walking this edge.
    pub fn cost(&self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Value(value) => *value,
        }
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<i32> for Weight {
    fn from(value: i32) -> Self {
        Self::Value(f64::from(value))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "true"),
            Self::Value(value) => write!(f, "{}", value),
        }
    }
}

/// Wire form of a weight: a JSON number or boolean.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawWeight {
    Flag(bool),
    Number(f64),
}

impl TryFrom<RawWeight> for Weight {
    type Error = String;

    fn try_from(raw: RawWeight) -> Result<Self, Self::Error> {
        match raw {
            RawWeight::Flag(true) => Ok(Weight::Unit),
            RawWeight::Flag(false) => {
                Err("`false` is not a weight; omit the edge instead".to_string())
            }
            RawWeight::Number(value) => Ok(Weight::Value(value)),
        }
    }
}

impl From<Weight> for RawWeight {
    fn from(weight: Weight) -> Self {
        match weight {
            Weight::Unit => RawWeight::Flag(true),
            Weight::Value(value) => RawWeight::Number(value),
        }
    }
}
