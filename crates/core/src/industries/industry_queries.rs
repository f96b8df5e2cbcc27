//! Membership predicates over the industry catalogue.
//!
//! Every predicate is a total function: it answers for every [`Industry`],
//! `Unknown` included, and holds no state.

use serde::{Deserialize, Serialize};

use super::industry_category::IndustryCategory;
use super::industry_model::Industry;
use super::industry_sets as sets;

impl Industry {
    /// Industries requiring significant physical assets and infrastructure.
    pub fn is_capital_intensive(&self) -> bool {
        sets::CAPITAL_INTENSIVE.contains(self)
    }

    /// Industries relying on intellectual property, human capital or digital
    /// infrastructure rather than physical assets.
    pub fn is_asset_light(&self) -> bool {
        sets::ASSET_LIGHT.contains(self)
    }

    pub fn has_inventory(&self) -> bool {
        sets::HAS_INVENTORY.contains(self)
    }

    pub fn is_low_volatility(&self) -> bool {
        sets::LOW_VOLATILITY.contains(self)
    }

    pub fn is_high_volatility(&self) -> bool {
        sets::HIGH_VOLATILITY.contains(self)
    }

    pub fn is_financial(&self) -> bool {
        sets::FINANCIAL.contains(self)
    }

    pub fn is_technology(&self) -> bool {
        sets::TECHNOLOGY.contains(self)
    }

    pub fn is_software(&self) -> bool {
        sets::SOFTWARE.contains(self)
    }

    pub fn is_utilities(&self) -> bool {
        sets::UTILITIES.contains(self)
    }

    pub fn is_cyclical(&self) -> bool {
        sets::CYCLICAL.contains(self)
    }

    pub fn is_industrial(&self) -> bool {
        sets::INDUSTRIAL.contains(self)
    }

    pub fn is_commodity(&self) -> bool {
        sets::COMMODITY.contains(self)
    }

    pub fn is_energy(&self) -> bool {
        sets::ENERGY.contains(self)
    }

    pub fn is_retail(&self) -> bool {
        sets::RETAIL.contains(self)
    }

    pub fn is_consumer_staples(&self) -> bool {
        sets::CONSUMER_STAPLES.contains(self)
    }

    pub fn is_consumer_discretionary(&self) -> bool {
        sets::CONSUMER_DISCRETIONARY.contains(self)
    }

    pub fn is_travel(&self) -> bool {
        sets::TRAVEL.contains(self)
    }

    pub fn is_healthcare(&self) -> bool {
        sets::HEALTHCARE.contains(self)
    }

    pub fn is_real_estate(&self) -> bool {
        sets::REAL_ESTATE.contains(self)
    }

    pub fn is_automotive(&self) -> bool {
        matches!(
            self,
            Industry::AutoManufacturers | Industry::AutoParts | Industry::AutoDealerships
        )
    }

    pub fn is_media(&self) -> bool {
        matches!(
            self,
            Industry::MediaEntertainment
                | Industry::Broadcasting
                | Industry::Publishing
                | Industry::InternetContentInformation
        )
    }

    pub fn is_restaurant(&self) -> bool {
        matches!(self, Industry::Restaurants)
    }

    /// Manufacturing-focused industries, including industrial machinery.
    pub fn is_manufacturing(&self) -> bool {
        matches!(
            self,
            Industry::ManufacturingMetalFabrication
                | Industry::ManufacturingMiscellaneous
                | Industry::ManufacturingTextiles
                | Industry::ManufacturingToolsAccessories
                | Industry::IndustrialMachinery
        )
    }

    /// Oil & gas industries, excluding `OilGasEnergy`.
    pub fn is_oil(&self) -> bool {
        matches!(
            self,
            Industry::OilGasDrilling
                | Industry::OilGasEquipmentServices
                | Industry::OilGasIntegrated
                | Industry::OilGasMidstream
                | Industry::OilGasRefiningMarketing
                | Industry::OilGasExplorationProduction
        )
    }

    pub fn is_communication(&self) -> bool {
        matches!(
            self,
            Industry::CommunicationEquipment | Industry::TelecommunicationsServices
        )
    }

    pub fn is_bank(&self) -> bool {
        matches!(
            self,
            Industry::Banks | Industry::BanksDiversified | Industry::BanksRegional
        )
    }

    pub fn is_mining(&self) -> bool {
        matches!(
            self,
            Industry::Gold
                | Industry::Silver
                | Industry::Copper
                | Industry::OtherPreciousMetals
                | Industry::Aluminum
                | Industry::Steel
        )
    }

    /// Every category this industry belongs to, in [`IndustryCategory::ALL`] order.
    pub fn categories(&self) -> Vec<IndustryCategory> {
        IndustryCategory::ALL
            .iter()
            .copied()
            .filter(|category| category.contains(*self))
            .collect()
    }

    /// Evaluates every predicate for this industry.
    pub fn profile(&self) -> IndustryProfile {
        IndustryProfile {
            industry: *self,
            industry_name: self.industry_name().to_string(),
            capital_intensive: self.is_capital_intensive(),
            asset_light: self.is_asset_light(),
            has_inventory: self.has_inventory(),
            low_volatility: self.is_low_volatility(),
            high_volatility: self.is_high_volatility(),
            financial: self.is_financial(),
            technology: self.is_technology(),
            software: self.is_software(),
            utilities: self.is_utilities(),
            cyclical: self.is_cyclical(),
            industrial: self.is_industrial(),
            commodity: self.is_commodity(),
            energy: self.is_energy(),
            retail: self.is_retail(),
            consumer_staples: self.is_consumer_staples(),
            consumer_discretionary: self.is_consumer_discretionary(),
            travel: self.is_travel(),
            healthcare: self.is_healthcare(),
            real_estate: self.is_real_estate(),
            automotive: self.is_automotive(),
            media: self.is_media(),
            restaurant: self.is_restaurant(),
            manufacturing: self.is_manufacturing(),
            oil: self.is_oil(),
            communication: self.is_communication(),
            bank: self.is_bank(),
            mining: self.is_mining(),
        }
    }
}

/// Snapshot of every predicate for one industry, for transport layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryProfile {
    pub industry: Industry,
    pub industry_name: String,
    pub capital_intensive: bool,
    pub asset_light: bool,
    pub has_inventory: bool,
    pub low_volatility: bool,
    pub high_volatility: bool,
    pub financial: bool,
    pub technology: bool,
    pub software: bool,
    pub utilities: bool,
    pub cyclical: bool,
    pub industrial: bool,
    pub commodity: bool,
    pub energy: bool,
    pub retail: bool,
    pub consumer_staples: bool,
    pub consumer_discretionary: bool,
    pub travel: bool,
    pub healthcare: bool,
    pub real_estate: bool,
    pub automotive: bool,
    pub media: bool,
    pub restaurant: bool,
    pub manufacturing: bool,
    pub oil: bool,
    pub communication: bool,
    pub bank: bool,
    pub mining: bool,
}
