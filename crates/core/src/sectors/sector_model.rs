//! Economic sector enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Top-level economic sector, as reported by market data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sector {
    BasicMaterials,
    CommunicationServices,
    ConsumerCyclical,
    ConsumerDefensive,
    Energy,
    FinancialServices,
    Healthcare,
    Industrials,
    RealEstate,
    Technology,
    Utilities,
}

impl Sector {
    pub const ALL: [Sector; 11] = [
        Sector::BasicMaterials,
        Sector::CommunicationServices,
        Sector::ConsumerCyclical,
        Sector::ConsumerDefensive,
        Sector::Energy,
        Sector::FinancialServices,
        Sector::Healthcare,
        Sector::Industrials,
        Sector::RealEstate,
        Sector::Technology,
        Sector::Utilities,
    ];

    /// Returns the stable identifier (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Sector::BasicMaterials => "BASIC_MATERIALS",
            Sector::CommunicationServices => "COMMUNICATION_SERVICES",
            Sector::ConsumerCyclical => "CONSUMER_CYCLICAL",
            Sector::ConsumerDefensive => "CONSUMER_DEFENSIVE",
            Sector::Energy => "ENERGY",
            Sector::FinancialServices => "FINANCIAL_SERVICES",
            Sector::Healthcare => "HEALTHCARE",
            Sector::Industrials => "INDUSTRIALS",
            Sector::RealEstate => "REAL_ESTATE",
            Sector::Technology => "TECHNOLOGY",
            Sector::Utilities => "UTILITIES",
        }
    }

    pub const fn sector_name(&self) -> &'static str {
        match self {
            Sector::BasicMaterials => "Basic Materials",
            Sector::CommunicationServices => "Communication Services",
            Sector::ConsumerCyclical => "Consumer Cyclical",
            Sector::ConsumerDefensive => "Consumer Defensive",
            Sector::Energy => "Energy",
            Sector::FinancialServices => "Financial Services",
            Sector::Healthcare => "Healthcare",
            Sector::Industrials => "Industrials",
            Sector::RealEstate => "Real Estate",
            Sector::Technology => "Technology",
            Sector::Utilities => "Utilities",
        }
    }

    /// Case-insensitive exact match against sector names.
    pub fn from_sector_name(name: Option<&str>) -> Option<Sector> {
        let name = name?;
        Sector::ALL
            .iter()
            .copied()
            .find(|sector| sector.sector_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sector_name())
    }
}

impl FromStr for Sector {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .iter()
            .copied()
            .find(|sector| sector.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_identifier("sector", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sector_name() {
        assert_eq!(
            Sector::from_sector_name(Some("Financial Services")),
            Some(Sector::FinancialServices)
        );
        assert_eq!(
            Sector::from_sector_name(Some("consumer defensive")),
            Some(Sector::ConsumerDefensive)
        );
        assert_eq!(Sector::from_sector_name(Some("Financials")), None);
        assert_eq!(Sector::from_sector_name(None), None);
    }

    #[test]
    fn test_identifier_round_trip() {
        for sector in Sector::ALL {
            assert_eq!(sector.as_str().parse::<Sector>(), Ok(sector));
            assert_eq!(
                serde_json::to_string(&sector).unwrap(),
                format!("\"{}\"", sector.as_str())
            );
        }
        assert!("Technology".parse::<Sector>().is_err());
    }
}
