use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Investor appetite for risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [
        RiskTolerance::Low,
        RiskTolerance::Medium,
        RiskTolerance::High,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "LOW",
            RiskTolerance::Medium => "MEDIUM",
            RiskTolerance::High => "HIGH",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low (Income)",
            RiskTolerance::Medium => "Medium (Balanced)",
            RiskTolerance::High => "High (Growth)",
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for RiskTolerance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskTolerance::ALL
            .iter()
            .copied()
            .find(|risk| risk.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_identifier("risk tolerance", s))
    }
}
