//! Named category sets over the industry identifier space.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::industry_model::Industry;
use super::industry_sets as sets;
use crate::errors::ValidationError;

/// A named, immutable grouping of industries sharing an economic characteristic.
///
/// Categories along different axes overlap freely. Membership carries no
/// ordering; use [`IndustryCategory::contains`] for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndustryCategory {
    // Capital structure
    CapitalIntensive,
    AssetLight,

    // Operating model
    HasInventory,
    NoInventory,

    // Risk / volatility
    LowVolatility,
    HighVolatility,

    // Sector groupings
    Financial,
    Technology,
    Software,
    Utilities,
    RealEstate,
    Industrial,
    Energy,
    Retail,
    ConsumerStaples,
    ConsumerDiscretionary,
    Healthcare,

    // Cyclicality / commodity
    Cyclical,
    Commodity,
    Travel,

    // Finer groupings
    CapitalMarketsFinancial,
    TraditionalFinancial,
    BasicMaterials,
    Metal,
    Chemical,
    StableCommunication,
    GrowthCommunication,
    LuxuryApparel,
    NonRenewableEnergy,
    RenewableEnergy,
    SoftwareAndServicesTech,
    HardwareAndEquipmentTech,
    SemiconductorTech,
    Education,
    GeneralHealthcare,
}

impl IndustryCategory {
    pub const ALL: [IndustryCategory; 35] = [
        IndustryCategory::CapitalIntensive,
        IndustryCategory::AssetLight,
        IndustryCategory::HasInventory,
        IndustryCategory::NoInventory,
        IndustryCategory::LowVolatility,
        IndustryCategory::HighVolatility,
        IndustryCategory::Financial,
        IndustryCategory::Technology,
        IndustryCategory::Software,
        IndustryCategory::Utilities,
        IndustryCategory::RealEstate,
        IndustryCategory::Industrial,
        IndustryCategory::Energy,
        IndustryCategory::Retail,
        IndustryCategory::ConsumerStaples,
        IndustryCategory::ConsumerDiscretionary,
        IndustryCategory::Healthcare,
        IndustryCategory::Cyclical,
        IndustryCategory::Commodity,
        IndustryCategory::Travel,
        IndustryCategory::CapitalMarketsFinancial,
        IndustryCategory::TraditionalFinancial,
        IndustryCategory::BasicMaterials,
        IndustryCategory::Metal,
        IndustryCategory::Chemical,
        IndustryCategory::StableCommunication,
        IndustryCategory::GrowthCommunication,
        IndustryCategory::LuxuryApparel,
        IndustryCategory::NonRenewableEnergy,
        IndustryCategory::RenewableEnergy,
        IndustryCategory::SoftwareAndServicesTech,
        IndustryCategory::HardwareAndEquipmentTech,
        IndustryCategory::SemiconductorTech,
        IndustryCategory::Education,
        IndustryCategory::GeneralHealthcare,
    ];

    /// Returns the stable identifier (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            IndustryCategory::CapitalIntensive => "CAPITAL_INTENSIVE",
            IndustryCategory::AssetLight => "ASSET_LIGHT",
            IndustryCategory::HasInventory => "HAS_INVENTORY",
            IndustryCategory::NoInventory => "NO_INVENTORY",
            IndustryCategory::LowVolatility => "LOW_VOLATILITY",
            IndustryCategory::HighVolatility => "HIGH_VOLATILITY",
            IndustryCategory::Financial => "FINANCIAL",
            IndustryCategory::Technology => "TECHNOLOGY",
            IndustryCategory::Software => "SOFTWARE",
            IndustryCategory::Utilities => "UTILITIES",
            IndustryCategory::RealEstate => "REAL_ESTATE",
            IndustryCategory::Industrial => "INDUSTRIAL",
            IndustryCategory::Energy => "ENERGY",
            IndustryCategory::Retail => "RETAIL",
            IndustryCategory::ConsumerStaples => "CONSUMER_STAPLES",
            IndustryCategory::ConsumerDiscretionary => "CONSUMER_DISCRETIONARY",
            IndustryCategory::Healthcare => "HEALTHCARE",
            IndustryCategory::Cyclical => "CYCLICAL",
            IndustryCategory::Commodity => "COMMODITY",
            IndustryCategory::Travel => "TRAVEL",
            IndustryCategory::CapitalMarketsFinancial => "CAPITAL_MARKETS_FINANCIAL",
            IndustryCategory::TraditionalFinancial => "TRADITIONAL_FINANCIAL",
            IndustryCategory::BasicMaterials => "BASIC_MATERIALS",
            IndustryCategory::Metal => "METAL",
            IndustryCategory::Chemical => "CHEMICAL",
            IndustryCategory::StableCommunication => "STABLE_COMMUNICATION",
            IndustryCategory::GrowthCommunication => "GROWTH_COMMUNICATION",
            IndustryCategory::LuxuryApparel => "LUXURY_APPAREL",
            IndustryCategory::NonRenewableEnergy => "NON_RENEWABLE_ENERGY",
            IndustryCategory::RenewableEnergy => "RENEWABLE_ENERGY",
            IndustryCategory::SoftwareAndServicesTech => "SOFTWARE_AND_SERVICES_TECH",
            IndustryCategory::HardwareAndEquipmentTech => "HARDWARE_AND_EQUIPMENT_TECH",
            IndustryCategory::SemiconductorTech => "SEMICONDUCTOR_TECH",
            IndustryCategory::Education => "EDUCATION",
            IndustryCategory::GeneralHealthcare => "GENERAL_HEALTHCARE",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            IndustryCategory::CapitalIntensive => "Capital Intensive",
            IndustryCategory::AssetLight => "Asset Light",
            IndustryCategory::HasInventory => "Has Inventory",
            IndustryCategory::NoInventory => "No Inventory",
            IndustryCategory::LowVolatility => "Low Volatility",
            IndustryCategory::HighVolatility => "High Volatility",
            IndustryCategory::Financial => "Financial",
            IndustryCategory::Technology => "Technology",
            IndustryCategory::Software => "Software",
            IndustryCategory::Utilities => "Utilities",
            IndustryCategory::RealEstate => "Real Estate",
            IndustryCategory::Industrial => "Industrial",
            IndustryCategory::Energy => "Energy",
            IndustryCategory::Retail => "Retail",
            IndustryCategory::ConsumerStaples => "Consumer Staples",
            IndustryCategory::ConsumerDiscretionary => "Consumer Discretionary",
            IndustryCategory::Healthcare => "Healthcare",
            IndustryCategory::Cyclical => "Cyclical",
            IndustryCategory::Commodity => "Commodity",
            IndustryCategory::Travel => "Travel",
            IndustryCategory::CapitalMarketsFinancial => "Capital Markets Financial",
            IndustryCategory::TraditionalFinancial => "Traditional Financial",
            IndustryCategory::BasicMaterials => "Basic Materials",
            IndustryCategory::Metal => "Metal",
            IndustryCategory::Chemical => "Chemical",
            IndustryCategory::StableCommunication => "Stable Communication",
            IndustryCategory::GrowthCommunication => "Growth Communication",
            IndustryCategory::LuxuryApparel => "Luxury Apparel",
            IndustryCategory::NonRenewableEnergy => "Non-Renewable Energy",
            IndustryCategory::RenewableEnergy => "Renewable Energy",
            IndustryCategory::SoftwareAndServicesTech => "Software & Services Tech",
            IndustryCategory::HardwareAndEquipmentTech => "Hardware & Equipment Tech",
            IndustryCategory::SemiconductorTech => "Semiconductor Tech",
            IndustryCategory::Education => "Education",
            IndustryCategory::GeneralHealthcare => "General Healthcare",
        }
    }

    /// The industries in this category.
    pub fn members(&self) -> &'static HashSet<Industry> {
        match self {
            IndustryCategory::CapitalIntensive => &sets::CAPITAL_INTENSIVE,
            IndustryCategory::AssetLight => &sets::ASSET_LIGHT,
            IndustryCategory::HasInventory => &sets::HAS_INVENTORY,
            IndustryCategory::NoInventory => &sets::NO_INVENTORY,
            IndustryCategory::LowVolatility => &sets::LOW_VOLATILITY,
            IndustryCategory::HighVolatility => &sets::HIGH_VOLATILITY,
            IndustryCategory::Financial => &sets::FINANCIAL,
            IndustryCategory::Technology => &sets::TECHNOLOGY,
            IndustryCategory::Software => &sets::SOFTWARE,
            IndustryCategory::Utilities => &sets::UTILITIES,
            IndustryCategory::RealEstate => &sets::REAL_ESTATE,
            IndustryCategory::Industrial => &sets::INDUSTRIAL,
            IndustryCategory::Energy => &sets::ENERGY,
            IndustryCategory::Retail => &sets::RETAIL,
            IndustryCategory::ConsumerStaples => &sets::CONSUMER_STAPLES,
            IndustryCategory::ConsumerDiscretionary => &sets::CONSUMER_DISCRETIONARY,
            IndustryCategory::Healthcare => &sets::HEALTHCARE,
            IndustryCategory::Cyclical => &sets::CYCLICAL,
            IndustryCategory::Commodity => &sets::COMMODITY,
            IndustryCategory::Travel => &sets::TRAVEL,
            IndustryCategory::CapitalMarketsFinancial => &sets::CAPITAL_MARKETS_FINANCIAL,
            IndustryCategory::TraditionalFinancial => &sets::TRADITIONAL_FINANCIAL,
            IndustryCategory::BasicMaterials => &sets::BASIC_MATERIALS,
            IndustryCategory::Metal => &sets::METAL,
            IndustryCategory::Chemical => &sets::CHEMICAL,
            IndustryCategory::StableCommunication => &sets::STABLE_COMMUNICATION,
            IndustryCategory::GrowthCommunication => &sets::GROWTH_COMMUNICATION,
            IndustryCategory::LuxuryApparel => &sets::LUXURY_APPAREL,
            IndustryCategory::NonRenewableEnergy => &sets::NON_RENEWABLE_ENERGY,
            IndustryCategory::RenewableEnergy => &sets::RENEWABLE_ENERGY,
            IndustryCategory::SoftwareAndServicesTech => &sets::SOFTWARE_AND_SERVICES_TECH,
            IndustryCategory::HardwareAndEquipmentTech => &sets::HARDWARE_AND_EQUIPMENT_TECH,
            IndustryCategory::SemiconductorTech => &sets::SEMICONDUCTOR_TECH,
            IndustryCategory::Education => &sets::EDUCATION,
            IndustryCategory::GeneralHealthcare => &sets::GENERAL_HEALTHCARE,
        }
    }

    pub fn contains(&self, industry: Industry) -> bool {
        self.members().contains(&industry)
    }
}

impl fmt::Display for IndustryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for IndustryCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndustryCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_identifier("industry category", s))
    }
}
