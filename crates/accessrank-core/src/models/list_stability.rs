use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Resistance of the prediction order to reshuffling on small score changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStability {
    Low,
    Medium,
    High,
}

/// Numeric constants behind a [`ListStability`] level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityParams {
    /// Blend exponent `l`: Markov weight is raised to `l`, CRF weight to `1/l`.
    pub blend_exponent: f64,
    /// Bonus `d` granted to the previously better-ranked item of a pair.
    pub stability_bonus: f64,
}

impl ListStability {
    pub const ALL: [ListStability; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn params(self) -> StabilityParams {
        let (blend_exponent, stability_bonus) = match self {
            Self::Low => (1.65, 0.0),
            Self::Medium => (1.65, 0.2),
            Self::High => (2.50, 0.5),
        };
        StabilityParams {
            blend_exponent,
            stability_bonus,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ListStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListStability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "unknown list stability '{other}', expected low, medium or high"
            )),
        }
    }
}
