use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TimeHorizon;
use crate::errors::ValidationError;

/// A concrete holding window within a [`TimeHorizon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "SHORT_RANGE_1_2")]
    ShortRange1To2,
    #[serde(rename = "MEDIUM_RANGE_3_6")]
    MediumRange3To6,
    #[serde(rename = "MEDIUM_RANGE_5_10")]
    MediumRange5To10,
    #[serde(rename = "LONG_RANGE_0_1")]
    LongRange0To1,
    #[serde(rename = "LONG_RANGE_1_2")]
    LongRange1To2,
    #[serde(rename = "UNDEFINED")]
    Undefined,
}

impl TimeRange {
    pub const ALL: [TimeRange; 6] = [
        TimeRange::ShortRange1To2,
        TimeRange::MediumRange3To6,
        TimeRange::MediumRange5To10,
        TimeRange::LongRange0To1,
        TimeRange::LongRange1To2,
        TimeRange::Undefined,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortRange1To2 => "SHORT_RANGE_1_2",
            TimeRange::MediumRange3To6 => "MEDIUM_RANGE_3_6",
            TimeRange::MediumRange5To10 => "MEDIUM_RANGE_5_10",
            TimeRange::LongRange0To1 => "LONG_RANGE_0_1",
            TimeRange::LongRange1To2 => "LONG_RANGE_1_2",
            TimeRange::Undefined => "UNDEFINED",
        }
    }

    pub const fn time_horizon(&self) -> TimeHorizon {
        match self {
            TimeRange::ShortRange1To2 => TimeHorizon::ShortTerm,
            TimeRange::MediumRange3To6 | TimeRange::MediumRange5To10 => TimeHorizon::MediumTerm,
            TimeRange::LongRange0To1 | TimeRange::LongRange1To2 => TimeHorizon::LongTerm,
            TimeRange::Undefined => TimeHorizon::Undefined,
        }
    }

    pub const fn range(&self) -> &'static str {
        match self {
            TimeRange::ShortRange1To2 => "1 - 2 weeks",
            TimeRange::MediumRange3To6 => "3 - 6 weeks",
            TimeRange::MediumRange5To10 => "5 - 10 weeks",
            TimeRange::LongRange0To1 => "3m - 1 year",
            TimeRange::LongRange1To2 => "1 - 2 years",
            TimeRange::Undefined => "N/A",
        }
    }

    /// Compact label for tight layouts, e.g. `~1 mo`.
    pub const fn simple_range(&self) -> &'static str {
        match self {
            TimeRange::ShortRange1To2 => "<2 wks",
            TimeRange::MediumRange3To6 => "~1 mo",
            TimeRange::MediumRange5To10 => "~2 mo",
            TimeRange::LongRange0To1 => "~1 yr",
            TimeRange::LongRange1To2 => "~2 yrs",
            TimeRange::Undefined => "N/A",
        }
    }

    /// Ranges belonging to `horizon`, in declaration order.
    pub fn for_horizon(horizon: TimeHorizon) -> Vec<TimeRange> {
        TimeRange::ALL
            .iter()
            .copied()
            .filter(|range| range.time_horizon() == horizon)
            .collect()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.range())
    }
}

impl FromStr for TimeRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .iter()
            .copied()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_identifier("time range", s))
    }
}
