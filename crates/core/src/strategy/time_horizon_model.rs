//! Holding-period horizons and the pricing data each one needs.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeHorizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
    Undefined,
}

impl TimeHorizon {
    pub const ALL: [TimeHorizon; 4] = [
        TimeHorizon::ShortTerm,
        TimeHorizon::MediumTerm,
        TimeHorizon::LongTerm,
        TimeHorizon::Undefined,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "SHORT_TERM",
            TimeHorizon::MediumTerm => "MEDIUM_TERM",
            TimeHorizon::LongTerm => "LONG_TERM",
            TimeHorizon::Undefined => "UNDEFINED",
        }
    }

    /// Short kebab-case label, e.g. `short-term`.
    pub const fn term(&self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "short-term",
            TimeHorizon::MediumTerm => "medium-term",
            TimeHorizon::LongTerm => "long-term",
            TimeHorizon::Undefined => "undefined",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "Short-Term",
            TimeHorizon::MediumTerm => "Medium-Term",
            TimeHorizon::LongTerm => "Long-Term",
            TimeHorizon::Undefined => "Undefined",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => {
                "Suitable for investments typically held within a 1-2 week span."
            }
            TimeHorizon::MediumTerm => {
                "Suitable for investments typically held within a 4-8 week span."
            }
            TimeHorizon::LongTerm => {
                "Intended for investments held for greater than 2 months to years."
            }
            TimeHorizon::Undefined => "Time Horizon undefined",
        }
    }

    /// Human-readable price bar granularity.
    pub const fn bar_interval(&self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "Every 1 hour",
            TimeHorizon::MediumTerm => "Daily close",
            TimeHorizon::LongTerm => "Weekly close",
            TimeHorizon::Undefined => "N/A",
        }
    }

    /// Spacing between consecutive price bars. Zero for `Undefined`.
    pub fn increment_frequency(&self) -> Duration {
        match self {
            TimeHorizon::ShortTerm => Duration::hours(1),
            TimeHorizon::MediumTerm => Duration::days(1),
            TimeHorizon::LongTerm => Duration::days(7),
            TimeHorizon::Undefined => Duration::zero(),
        }
    }

    /// Number of fiscal quarters of fundamentals to consider.
    pub const fn max_quarters(&self) -> u32 {
        match self {
            TimeHorizon::Undefined => 0,
            _ => 15,
        }
    }

    pub const fn months_of_pricing_data(&self) -> u32 {
        match self {
            TimeHorizon::ShortTerm => 2,
            TimeHorizon::MediumTerm => 5,
            TimeHorizon::LongTerm => 36,
            TimeHorizon::Undefined => 0,
        }
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TimeHorizon {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeHorizon::ALL
            .iter()
            .copied()
            .find(|horizon| horizon.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_identifier("time horizon", s))
    }
}
