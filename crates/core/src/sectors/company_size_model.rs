//! Company size bands by market capitalisation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

const MEDIUM_CAP_FLOOR: f64 = 500_000_000.0;
const LARGE_CAP_FLOOR: f64 = 10_000_000_000.0;
const MEGA_CAP_FLOOR: f64 = 100_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanySize {
    /// Less than $500 million
    SmallCap,
    /// $500 million to under $10 billion
    MediumCap,
    /// $10 billion to under $100 billion
    LargeCap,
    /// $100 billion and above
    MegaCap,
}

impl CompanySize {
    pub const ALL: [CompanySize; 4] = [
        CompanySize::SmallCap,
        CompanySize::MediumCap,
        CompanySize::LargeCap,
        CompanySize::MegaCap,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CompanySize::SmallCap => "SMALL_CAP",
            CompanySize::MediumCap => "MEDIUM_CAP",
            CompanySize::LargeCap => "LARGE_CAP",
            CompanySize::MegaCap => "MEGA_CAP",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            CompanySize::SmallCap => "Small-Cap",
            CompanySize::MediumCap => "Medium-Cap",
            CompanySize::LargeCap => "Large-Cap",
            CompanySize::MegaCap => "Very Large-Cap",
        }
    }

    /// Classifies a market capitalisation (in dollars) into its band.
    ///
    /// Returns `None` for negative or non-finite values.
    pub fn from_market_cap(market_cap: f64) -> Option<CompanySize> {
        if !market_cap.is_finite() || market_cap < 0.0 {
            return None;
        }

        let size = if market_cap < MEDIUM_CAP_FLOOR {
            CompanySize::SmallCap
        } else if market_cap < LARGE_CAP_FLOOR {
            CompanySize::MediumCap
        } else if market_cap < MEGA_CAP_FLOOR {
            CompanySize::LargeCap
        } else {
            CompanySize::MegaCap
        };
        Some(size)
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CompanySize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompanySize::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_identifier("company size", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_market_cap_band_edges() {
        assert_eq!(CompanySize::from_market_cap(0.0), Some(CompanySize::SmallCap));
        assert_eq!(
            CompanySize::from_market_cap(499_999_999.0),
            Some(CompanySize::SmallCap)
        );
        assert_eq!(
            CompanySize::from_market_cap(500_000_000.0),
            Some(CompanySize::MediumCap)
        );
        assert_eq!(
            CompanySize::from_market_cap(10_000_000_000.0),
            Some(CompanySize::LargeCap)
        );
        assert_eq!(
            CompanySize::from_market_cap(100_000_000_000.0),
            Some(CompanySize::MegaCap)
        );
        assert_eq!(
            CompanySize::from_market_cap(3.1e12),
            Some(CompanySize::MegaCap)
        );
    }

    #[test]
    fn test_from_market_cap_rejects_invalid_values() {
        assert_eq!(CompanySize::from_market_cap(-1.0), None);
        assert_eq!(CompanySize::from_market_cap(f64::NAN), None);
        assert_eq!(CompanySize::from_market_cap(f64::INFINITY), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CompanySize::MegaCap.to_string(), "Very Large-Cap");
        assert_eq!(
            serde_json::to_string(&CompanySize::MediumCap).unwrap(),
            "\"MEDIUM_CAP\""
        );
        assert_eq!("LARGE_CAP".parse::<CompanySize>(), Ok(CompanySize::LargeCap));
    }
}
