//! Industry catalogue: the closed set of industry identifiers and their display names.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A leaf-level economic-activity classification (e.g. "Banks - Regional").
///
/// Identifiers are stable: once a variant is introduced it is never renamed,
/// so persisted or transmitted values (`"BANKS_REGIONAL"`) stay valid.
/// `Unknown` is the fallback produced by name resolution and belongs to no
/// category set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Industry {
    // Basic materials
    Steel,
    Silver,
    OtherPreciousMetals,
    Gold,
    Copper,
    Aluminum,
    PaperLumberForestProducts,
    IndustrialMaterials,
    ConstructionMaterials,
    ChemicalsSpecialty,
    Chemicals,
    AgriculturalInputs,

    // Communication services
    TelecommunicationsServices,
    InternetContentInformation,
    Publishing,
    Broadcasting,
    AdvertisingAgencies,
    Entertainment,

    // Consumer cyclical
    TravelLodging,
    TravelServices,
    SpecialtyRetail,
    LuxuryGoods,
    HomeImprovement,
    ResidentialConstruction,
    DepartmentStores,
    PersonalProductsServices,
    Leisure,
    GamblingResortsCasinos,
    FurnishingsFixturesAppliances,
    Restaurants,
    AutoParts,
    AutoManufacturers,
    AutoRecreationalVehicles,
    AutoDealerships,
    ApparelRetail,
    ApparelManufacturers,
    ApparelFootwearAccessories,
    PackagingContainers,

    // Consumer defensive
    Tobacco,
    GroceryStores,
    DiscountStores,
    HouseholdPersonalProducts,
    PackagedFoods,
    FoodDistribution,
    FoodConfectioners,
    AgriculturalFarmProducts,
    EducationTrainingServices,
    BeveragesWineriesDistilleries,
    BeveragesNonAlcoholic,
    BeveragesAlcoholic,

    // Energy
    Uranium,
    Solar,
    OilGasRefiningMarketing,
    OilGasMidstream,
    OilGasIntegrated,
    OilGasExplorationProduction,
    OilGasEquipmentServices,
    OilGasEnergy,
    OilGasDrilling,
    Coal,

    // Financial services
    ShellCompanies,
    InvestmentBankingInvestmentServices,
    InsuranceSpecialty,
    InsuranceReinsurance,
    InsurancePropertyCasualty,
    InsuranceLife,
    InsuranceDiversified,
    InsuranceBrokers,
    FinancialMortgages,
    FinancialDiversified,
    FinancialDataStockExchanges,
    FinancialCreditServices,
    FinancialConglomerates,
    FinancialCapitalMarkets,
    BanksRegional,
    BanksDiversified,
    Banks,
    AssetManagement,
    AssetManagementBonds,
    AssetManagementIncome,
    AssetManagementLeveraged,
    AssetManagementCryptocurrency,
    AssetManagementGlobal,

    // Healthcare
    MedicalSpecialties,
    MedicalPharmaceuticals,
    MedicalInstrumentsSupplies,
    MedicalHealthcarePlans,
    MedicalHealthcareInformationServices,
    MedicalEquipmentServices,
    MedicalDistribution,
    MedicalDiagnosticsResearch,
    MedicalDevices,
    MedicalCareFacilities,
    DrugManufacturersSpecialtyGeneric,
    DrugManufacturersGeneral,
    Biotechnology,

    // Industrials
    WasteManagement,
    Trucking,
    Railroads,
    AerospaceDefense,
    MarineShipping,
    IntegratedFreightLogistics,
    AirlinesAirportsAirServices,
    GeneralTransportation,
    ManufacturingToolsAccessories,
    ManufacturingTextiles,
    ManufacturingMiscellaneous,
    ManufacturingMetalFabrication,
    IndustrialDistribution,
    IndustrialSpecialties,
    IndustrialPollutionTreatmentControls,
    EnvironmentalServices,
    IndustrialMachinery,
    IndustrialInfrastructureOperations,
    IndustrialCapitalGoods,
    ConsultingServices,
    BusinessEquipmentSupplies,
    StaffingEmploymentServices,
    RentalLeasingServices,
    EngineeringConstruction,
    SecurityProtectionServices,
    SpecialtyBusinessServices,
    Construction,
    Conglomerates,
    ElectricalEquipmentParts,
    AgriculturalMachinery,
    AgriculturalCommoditiesMilling,

    // Real estate
    ReitSpecialty,
    ReitRetail,
    ReitResidential,
    ReitOffice,
    ReitMortgage,
    ReitIndustrial,
    ReitHotelMotel,
    ReitHealthcareFacilities,
    ReitDiversified,
    RealEstateServices,
    RealEstateDiversified,
    RealEstateDevelopment,
    RealEstateGeneral,

    // Technology
    InformationTechnologyServices,
    HardwareEquipmentParts,
    ComputerHardware,
    ElectronicGamingMultimedia,
    SoftwareServices,
    SoftwareInfrastructure,
    SoftwareApplication,
    Semiconductors,
    MediaEntertainment,
    CommunicationEquipment,
    TechnologyDistributors,
    ConsumerElectronics,

    // Utilities
    RenewableUtilities,
    RegulatedWater,
    RegulatedGas,
    RegulatedElectric,
    IndependentPowerProducers,
    DiversifiedUtilities,
    GeneralUtilities,

    // Fallback
    #[default]
    Unknown,
}

impl Industry {
    /// Every industry in declaration order. `Unknown` is last.
    pub const ALL: [Industry; 160] = [
        Industry::Steel,
        Industry::Silver,
        Industry::OtherPreciousMetals,
        Industry::Gold,
        Industry::Copper,
        Industry::Aluminum,
        Industry::PaperLumberForestProducts,
        Industry::IndustrialMaterials,
        Industry::ConstructionMaterials,
        Industry::ChemicalsSpecialty,
        Industry::Chemicals,
        Industry::AgriculturalInputs,
        Industry::TelecommunicationsServices,
        Industry::InternetContentInformation,
        Industry::Publishing,
        Industry::Broadcasting,
        Industry::AdvertisingAgencies,
        Industry::Entertainment,
        Industry::TravelLodging,
        Industry::TravelServices,
        Industry::SpecialtyRetail,
        Industry::LuxuryGoods,
        Industry::HomeImprovement,
        Industry::ResidentialConstruction,
        Industry::DepartmentStores,
        Industry::PersonalProductsServices,
        Industry::Leisure,
        Industry::GamblingResortsCasinos,
        Industry::FurnishingsFixturesAppliances,
        Industry::Restaurants,
        Industry::AutoParts,
        Industry::AutoManufacturers,
        Industry::AutoRecreationalVehicles,
        Industry::AutoDealerships,
        Industry::ApparelRetail,
        Industry::ApparelManufacturers,
        Industry::ApparelFootwearAccessories,
        Industry::PackagingContainers,
        Industry::Tobacco,
        Industry::GroceryStores,
        Industry::DiscountStores,
        Industry::HouseholdPersonalProducts,
        Industry::PackagedFoods,
        Industry::FoodDistribution,
        Industry::FoodConfectioners,
        Industry::AgriculturalFarmProducts,
        Industry::EducationTrainingServices,
        Industry::BeveragesWineriesDistilleries,
        Industry::BeveragesNonAlcoholic,
        Industry::BeveragesAlcoholic,
        Industry::Uranium,
        Industry::Solar,
        Industry::OilGasRefiningMarketing,
        Industry::OilGasMidstream,
        Industry::OilGasIntegrated,
        Industry::OilGasExplorationProduction,
        Industry::OilGasEquipmentServices,
        Industry::OilGasEnergy,
        Industry::OilGasDrilling,
        Industry::Coal,
        Industry::ShellCompanies,
        Industry::InvestmentBankingInvestmentServices,
        Industry::InsuranceSpecialty,
        Industry::InsuranceReinsurance,
        Industry::InsurancePropertyCasualty,
        Industry::InsuranceLife,
        Industry::InsuranceDiversified,
        Industry::InsuranceBrokers,
        Industry::FinancialMortgages,
        Industry::FinancialDiversified,
        Industry::FinancialDataStockExchanges,
        Industry::FinancialCreditServices,
        Industry::FinancialConglomerates,
        Industry::FinancialCapitalMarkets,
        Industry::BanksRegional,
        Industry::BanksDiversified,
        Industry::Banks,
        Industry::AssetManagement,
        Industry::AssetManagementBonds,
        Industry::AssetManagementIncome,
        Industry::AssetManagementLeveraged,
        Industry::AssetManagementCryptocurrency,
        Industry::AssetManagementGlobal,
        Industry::MedicalSpecialties,
        Industry::MedicalPharmaceuticals,
        Industry::MedicalInstrumentsSupplies,
        Industry::MedicalHealthcarePlans,
        Industry::MedicalHealthcareInformationServices,
        Industry::MedicalEquipmentServices,
        Industry::MedicalDistribution,
        Industry::MedicalDiagnosticsResearch,
        Industry::MedicalDevices,
        Industry::MedicalCareFacilities,
        Industry::DrugManufacturersSpecialtyGeneric,
        Industry::DrugManufacturersGeneral,
        Industry::Biotechnology,
        Industry::WasteManagement,
        Industry::Trucking,
        Industry::Railroads,
        Industry::AerospaceDefense,
        Industry::MarineShipping,
        Industry::IntegratedFreightLogistics,
        Industry::AirlinesAirportsAirServices,
        Industry::GeneralTransportation,
        Industry::ManufacturingToolsAccessories,
        Industry::ManufacturingTextiles,
        Industry::ManufacturingMiscellaneous,
        Industry::ManufacturingMetalFabrication,
        Industry::IndustrialDistribution,
        Industry::IndustrialSpecialties,
        Industry::IndustrialPollutionTreatmentControls,
        Industry::EnvironmentalServices,
        Industry::IndustrialMachinery,
        Industry::IndustrialInfrastructureOperations,
        Industry::IndustrialCapitalGoods,
        Industry::ConsultingServices,
        Industry::BusinessEquipmentSupplies,
        Industry::StaffingEmploymentServices,
        Industry::RentalLeasingServices,
        Industry::EngineeringConstruction,
        Industry::SecurityProtectionServices,
        Industry::SpecialtyBusinessServices,
        Industry::Construction,
        Industry::Conglomerates,
        Industry::ElectricalEquipmentParts,
        Industry::AgriculturalMachinery,
        Industry::AgriculturalCommoditiesMilling,
        Industry::ReitSpecialty,
        Industry::ReitRetail,
        Industry::ReitResidential,
        Industry::ReitOffice,
        Industry::ReitMortgage,
        Industry::ReitIndustrial,
        Industry::ReitHotelMotel,
        Industry::ReitHealthcareFacilities,
        Industry::ReitDiversified,
        Industry::RealEstateServices,
        Industry::RealEstateDiversified,
        Industry::RealEstateDevelopment,
        Industry::RealEstateGeneral,
        Industry::InformationTechnologyServices,
        Industry::HardwareEquipmentParts,
        Industry::ComputerHardware,
        Industry::ElectronicGamingMultimedia,
        Industry::SoftwareServices,
        Industry::SoftwareInfrastructure,
        Industry::SoftwareApplication,
        Industry::Semiconductors,
        Industry::MediaEntertainment,
        Industry::CommunicationEquipment,
        Industry::TechnologyDistributors,
        Industry::ConsumerElectronics,
        Industry::RenewableUtilities,
        Industry::RegulatedWater,
        Industry::RegulatedGas,
        Industry::RegulatedElectric,
        Industry::IndependentPowerProducers,
        Industry::DiversifiedUtilities,
        Industry::GeneralUtilities,
        Industry::Unknown,
    ];

    /// Returns the stable identifier (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Industry::Steel => "STEEL",
            Industry::Silver => "SILVER",
            Industry::OtherPreciousMetals => "OTHER_PRECIOUS_METALS",
            Industry::Gold => "GOLD",
            Industry::Copper => "COPPER",
            Industry::Aluminum => "ALUMINUM",
            Industry::PaperLumberForestProducts => "PAPER_LUMBER_FOREST_PRODUCTS",
            Industry::IndustrialMaterials => "INDUSTRIAL_MATERIALS",
            Industry::ConstructionMaterials => "CONSTRUCTION_MATERIALS",
            Industry::ChemicalsSpecialty => "CHEMICALS_SPECIALTY",
            Industry::Chemicals => "CHEMICALS",
            Industry::AgriculturalInputs => "AGRICULTURAL_INPUTS",
            Industry::TelecommunicationsServices => "TELECOMMUNICATIONS_SERVICES",
            Industry::InternetContentInformation => "INTERNET_CONTENT_INFORMATION",
            Industry::Publishing => "PUBLISHING",
            Industry::Broadcasting => "BROADCASTING",
            Industry::AdvertisingAgencies => "ADVERTISING_AGENCIES",
            Industry::Entertainment => "ENTERTAINMENT",
            Industry::TravelLodging => "TRAVEL_LODGING",
            Industry::TravelServices => "TRAVEL_SERVICES",
            Industry::SpecialtyRetail => "SPECIALTY_RETAIL",
            Industry::LuxuryGoods => "LUXURY_GOODS",
            Industry::HomeImprovement => "HOME_IMPROVEMENT",
            Industry::ResidentialConstruction => "RESIDENTIAL_CONSTRUCTION",
            Industry::DepartmentStores => "DEPARTMENT_STORES",
            Industry::PersonalProductsServices => "PERSONAL_PRODUCTS_SERVICES",
            Industry::Leisure => "LEISURE",
            Industry::GamblingResortsCasinos => "GAMBLING_RESORTS_CASINOS",
            Industry::FurnishingsFixturesAppliances => "FURNISHINGS_FIXTURES_APPLIANCES",
            Industry::Restaurants => "RESTAURANTS",
            Industry::AutoParts => "AUTO_PARTS",
            Industry::AutoManufacturers => "AUTO_MANUFACTURERS",
            Industry::AutoRecreationalVehicles => "AUTO_RECREATIONAL_VEHICLES",
            Industry::AutoDealerships => "AUTO_DEALERSHIPS",
            Industry::ApparelRetail => "APPAREL_RETAIL",
            Industry::ApparelManufacturers => "APPAREL_MANUFACTURERS",
            Industry::ApparelFootwearAccessories => "APPAREL_FOOTWEAR_ACCESSORIES",
            Industry::PackagingContainers => "PACKAGING_CONTAINERS",
            Industry::Tobacco => "TOBACCO",
            Industry::GroceryStores => "GROCERY_STORES",
            Industry::DiscountStores => "DISCOUNT_STORES",
            Industry::HouseholdPersonalProducts => "HOUSEHOLD_PERSONAL_PRODUCTS",
            Industry::PackagedFoods => "PACKAGED_FOODS",
            Industry::FoodDistribution => "FOOD_DISTRIBUTION",
            Industry::FoodConfectioners => "FOOD_CONFECTIONERS",
            Industry::AgriculturalFarmProducts => "AGRICULTURAL_FARM_PRODUCTS",
            Industry::EducationTrainingServices => "EDUCATION_TRAINING_SERVICES",
            Industry::BeveragesWineriesDistilleries => "BEVERAGES_WINERIES_DISTILLERIES",
            Industry::BeveragesNonAlcoholic => "BEVERAGES_NON_ALCOHOLIC",
            Industry::BeveragesAlcoholic => "BEVERAGES_ALCOHOLIC",
            Industry::Uranium => "URANIUM",
            Industry::Solar => "SOLAR",
            Industry::OilGasRefiningMarketing => "OIL_GAS_REFINING_MARKETING",
            Industry::OilGasMidstream => "OIL_GAS_MIDSTREAM",
            Industry::OilGasIntegrated => "OIL_GAS_INTEGRATED",
            Industry::OilGasExplorationProduction => "OIL_GAS_EXPLORATION_PRODUCTION",
            Industry::OilGasEquipmentServices => "OIL_GAS_EQUIPMENT_SERVICES",
            Industry::OilGasEnergy => "OIL_GAS_ENERGY",
            Industry::OilGasDrilling => "OIL_GAS_DRILLING",
            Industry::Coal => "COAL",
            Industry::ShellCompanies => "SHELL_COMPANIES",
            Industry::InvestmentBankingInvestmentServices => "INVESTMENT_BANKING_INVESTMENT_SERVICES",
            Industry::InsuranceSpecialty => "INSURANCE_SPECIALTY",
            Industry::InsuranceReinsurance => "INSURANCE_REINSURANCE",
            Industry::InsurancePropertyCasualty => "INSURANCE_PROPERTY_CASUALTY",
            Industry::InsuranceLife => "INSURANCE_LIFE",
            Industry::InsuranceDiversified => "INSURANCE_DIVERSIFIED",
            Industry::InsuranceBrokers => "INSURANCE_BROKERS",
            Industry::FinancialMortgages => "FINANCIAL_MORTGAGES",
            Industry::FinancialDiversified => "FINANCIAL_DIVERSIFIED",
            Industry::FinancialDataStockExchanges => "FINANCIAL_DATA_STOCK_EXCHANGES",
            Industry::FinancialCreditServices => "FINANCIAL_CREDIT_SERVICES",
            Industry::FinancialConglomerates => "FINANCIAL_CONGLOMERATES",
            Industry::FinancialCapitalMarkets => "FINANCIAL_CAPITAL_MARKETS",
            Industry::BanksRegional => "BANKS_REGIONAL",
            Industry::BanksDiversified => "BANKS_DIVERSIFIED",
            Industry::Banks => "BANKS",
            Industry::AssetManagement => "ASSET_MANAGEMENT",
            Industry::AssetManagementBonds => "ASSET_MANAGEMENT_BONDS",
            Industry::AssetManagementIncome => "ASSET_MANAGEMENT_INCOME",
            Industry::AssetManagementLeveraged => "ASSET_MANAGEMENT_LEVERAGED",
            Industry::AssetManagementCryptocurrency => "ASSET_MANAGEMENT_CRYPTOCURRENCY",
            Industry::AssetManagementGlobal => "ASSET_MANAGEMENT_GLOBAL",
            Industry::MedicalSpecialties => "MEDICAL_SPECIALTIES",
            Industry::MedicalPharmaceuticals => "MEDICAL_PHARMACEUTICALS",
            Industry::MedicalInstrumentsSupplies => "MEDICAL_INSTRUMENTS_SUPPLIES",
            Industry::MedicalHealthcarePlans => "MEDICAL_HEALTHCARE_PLANS",
            Industry::MedicalHealthcareInformationServices => "MEDICAL_HEALTHCARE_INFORMATION_SERVICES",
            Industry::MedicalEquipmentServices => "MEDICAL_EQUIPMENT_SERVICES",
            Industry::MedicalDistribution => "MEDICAL_DISTRIBUTION",
            Industry::MedicalDiagnosticsResearch => "MEDICAL_DIAGNOSTICS_RESEARCH",
            Industry::MedicalDevices => "MEDICAL_DEVICES",
            Industry::MedicalCareFacilities => "MEDICAL_CARE_FACILITIES",
            Industry::DrugManufacturersSpecialtyGeneric => "DRUG_MANUFACTURERS_SPECIALTY_GENERIC",
            Industry::DrugManufacturersGeneral => "DRUG_MANUFACTURERS_GENERAL",
            Industry::Biotechnology => "BIOTECHNOLOGY",
            Industry::WasteManagement => "WASTE_MANAGEMENT",
            Industry::Trucking => "TRUCKING",
            Industry::Railroads => "RAILROADS",
            Industry::AerospaceDefense => "AEROSPACE_DEFENSE",
            Industry::MarineShipping => "MARINE_SHIPPING",
            Industry::IntegratedFreightLogistics => "INTEGRATED_FREIGHT_LOGISTICS",
            Industry::AirlinesAirportsAirServices => "AIRLINES_AIRPORTS_AIR_SERVICES",
            Industry::GeneralTransportation => "GENERAL_TRANSPORTATION",
            Industry::ManufacturingToolsAccessories => "MANUFACTURING_TOOLS_ACCESSORIES",
            Industry::ManufacturingTextiles => "MANUFACTURING_TEXTILES",
            Industry::ManufacturingMiscellaneous => "MANUFACTURING_MISCELLANEOUS",
            Industry::ManufacturingMetalFabrication => "MANUFACTURING_METAL_FABRICATION",
            Industry::IndustrialDistribution => "INDUSTRIAL_DISTRIBUTION",
            Industry::IndustrialSpecialties => "INDUSTRIAL_SPECIALTIES",
            Industry::IndustrialPollutionTreatmentControls => "INDUSTRIAL_POLLUTION_TREATMENT_CONTROLS",
            Industry::EnvironmentalServices => "ENVIRONMENTAL_SERVICES",
            Industry::IndustrialMachinery => "INDUSTRIAL_MACHINERY",
            Industry::IndustrialInfrastructureOperations => "INDUSTRIAL_INFRASTRUCTURE_OPERATIONS",
            Industry::IndustrialCapitalGoods => "INDUSTRIAL_CAPITAL_GOODS",
            Industry::ConsultingServices => "CONSULTING_SERVICES",
            Industry::BusinessEquipmentSupplies => "BUSINESS_EQUIPMENT_SUPPLIES",
            Industry::StaffingEmploymentServices => "STAFFING_EMPLOYMENT_SERVICES",
            Industry::RentalLeasingServices => "RENTAL_LEASING_SERVICES",
            Industry::EngineeringConstruction => "ENGINEERING_CONSTRUCTION",
            Industry::SecurityProtectionServices => "SECURITY_PROTECTION_SERVICES",
            Industry::SpecialtyBusinessServices => "SPECIALTY_BUSINESS_SERVICES",
            Industry::Construction => "CONSTRUCTION",
            Industry::Conglomerates => "CONGLOMERATES",
            Industry::ElectricalEquipmentParts => "ELECTRICAL_EQUIPMENT_PARTS",
            Industry::AgriculturalMachinery => "AGRICULTURAL_MACHINERY",
            Industry::AgriculturalCommoditiesMilling => "AGRICULTURAL_COMMODITIES_MILLING",
            Industry::ReitSpecialty => "REIT_SPECIALTY",
            Industry::ReitRetail => "REIT_RETAIL",
            Industry::ReitResidential => "REIT_RESIDENTIAL",
            Industry::ReitOffice => "REIT_OFFICE",
            Industry::ReitMortgage => "REIT_MORTGAGE",
            Industry::ReitIndustrial => "REIT_INDUSTRIAL",
            Industry::ReitHotelMotel => "REIT_HOTEL_MOTEL",
            Industry::ReitHealthcareFacilities => "REIT_HEALTHCARE_FACILITIES",
            Industry::ReitDiversified => "REIT_DIVERSIFIED",
            Industry::RealEstateServices => "REAL_ESTATE_SERVICES",
            Industry::RealEstateDiversified => "REAL_ESTATE_DIVERSIFIED",
            Industry::RealEstateDevelopment => "REAL_ESTATE_DEVELOPMENT",
            Industry::RealEstateGeneral => "REAL_ESTATE_GENERAL",
            Industry::InformationTechnologyServices => "INFORMATION_TECHNOLOGY_SERVICES",
            Industry::HardwareEquipmentParts => "HARDWARE_EQUIPMENT_PARTS",
            Industry::ComputerHardware => "COMPUTER_HARDWARE",
            Industry::ElectronicGamingMultimedia => "ELECTRONIC_GAMING_MULTIMEDIA",
            Industry::SoftwareServices => "SOFTWARE_SERVICES",
            Industry::SoftwareInfrastructure => "SOFTWARE_INFRASTRUCTURE",
            Industry::SoftwareApplication => "SOFTWARE_APPLICATION",
            Industry::Semiconductors => "SEMICONDUCTORS",
            Industry::MediaEntertainment => "MEDIA_ENTERTAINMENT",
            Industry::CommunicationEquipment => "COMMUNICATION_EQUIPMENT",
            Industry::TechnologyDistributors => "TECHNOLOGY_DISTRIBUTORS",
            Industry::ConsumerElectronics => "CONSUMER_ELECTRONICS",
            Industry::RenewableUtilities => "RENEWABLE_UTILITIES",
            Industry::RegulatedWater => "REGULATED_WATER",
            Industry::RegulatedGas => "REGULATED_GAS",
            Industry::RegulatedElectric => "REGULATED_ELECTRIC",
            Industry::IndependentPowerProducers => "INDEPENDENT_POWER_PRODUCERS",
            Industry::DiversifiedUtilities => "DIVERSIFIED_UTILITIES",
            Industry::GeneralUtilities => "GENERAL_UTILITIES",
            Industry::Unknown => "UNKNOWN",
        }
    }

    /// Returns the human-readable display name used for matching and presentation.
    pub const fn industry_name(&self) -> &'static str {
        match self {
            Industry::Steel => "Steel",
            Industry::Silver => "Silver",
            Industry::OtherPreciousMetals => "Other Precious Metals",
            Industry::Gold => "Gold",
            Industry::Copper => "Copper",
            Industry::Aluminum => "Aluminum",
            Industry::PaperLumberForestProducts => "Paper, Lumber & Forest Products",
            Industry::IndustrialMaterials => "Industrial Materials",
            Industry::ConstructionMaterials => "Construction Materials",
            Industry::ChemicalsSpecialty => "Chemicals - Specialty",
            Industry::Chemicals => "Chemicals",
            Industry::AgriculturalInputs => "Agricultural Inputs",
            Industry::TelecommunicationsServices => "Telecommunications Services",
            Industry::InternetContentInformation => "Internet Content & Information",
            Industry::Publishing => "Publishing",
            Industry::Broadcasting => "Broadcasting",
            Industry::AdvertisingAgencies => "Advertising Agencies",
            Industry::Entertainment => "Entertainment",
            Industry::TravelLodging => "Travel Lodging",
            Industry::TravelServices => "Travel Services",
            Industry::SpecialtyRetail => "Specialty Retail",
            Industry::LuxuryGoods => "Luxury Goods",
            Industry::HomeImprovement => "Home Improvement",
            Industry::ResidentialConstruction => "Residential Construction",
            Industry::DepartmentStores => "Department Stores",
            Industry::PersonalProductsServices => "Personal Products & Services",
            Industry::Leisure => "Leisure",
            Industry::GamblingResortsCasinos => "Gambling, Resorts & Casinos",
            Industry::FurnishingsFixturesAppliances => "Furnishings, Fixtures & Appliances",
            Industry::Restaurants => "Restaurants",
            Industry::AutoParts => "Auto - Parts",
            Industry::AutoManufacturers => "Auto - Manufacturers",
            Industry::AutoRecreationalVehicles => "Auto - Recreational Vehicles",
            Industry::AutoDealerships => "Auto - Dealerships",
            Industry::ApparelRetail => "Apparel - Retail",
            Industry::ApparelManufacturers => "Apparel - Manufacturers",
            Industry::ApparelFootwearAccessories => "Apparel - Footwear & Accessories",
            Industry::PackagingContainers => "Packaging & Containers",
            Industry::Tobacco => "Tobacco",
            Industry::GroceryStores => "Grocery Stores",
            Industry::DiscountStores => "Discount Stores",
            Industry::HouseholdPersonalProducts => "Household & Personal Products",
            Industry::PackagedFoods => "Packaged Foods",
            Industry::FoodDistribution => "Food Distribution",
            Industry::FoodConfectioners => "Food Confectioners",
            Industry::AgriculturalFarmProducts => "Agricultural Farm Products",
            Industry::EducationTrainingServices => "Education & Training Services",
            Industry::BeveragesWineriesDistilleries => "Beverages - Wineries & Distilleries",
            Industry::BeveragesNonAlcoholic => "Beverages - Non-Alcoholic",
            Industry::BeveragesAlcoholic => "Beverages - Alcoholic",
            Industry::Uranium => "Uranium",
            Industry::Solar => "Solar",
            Industry::OilGasRefiningMarketing => "Oil & Gas Refining & Marketing",
            Industry::OilGasMidstream => "Oil & Gas Midstream",
            Industry::OilGasIntegrated => "Oil & Gas Integrated",
            Industry::OilGasExplorationProduction => "Oil & Gas Exploration & Production",
            Industry::OilGasEquipmentServices => "Oil & Gas Equipment & Services",
            Industry::OilGasEnergy => "Oil & Gas Energy",
            Industry::OilGasDrilling => "Oil & Gas Drilling",
            Industry::Coal => "Coal",
            Industry::ShellCompanies => "Shell Companies",
            Industry::InvestmentBankingInvestmentServices => "Investment - Banking & Investment Services",
            Industry::InsuranceSpecialty => "Insurance - Specialty",
            Industry::InsuranceReinsurance => "Insurance - Reinsurance",
            Industry::InsurancePropertyCasualty => "Insurance - Property & Casualty",
            Industry::InsuranceLife => "Insurance - Life",
            Industry::InsuranceDiversified => "Insurance - Diversified",
            Industry::InsuranceBrokers => "Insurance - Brokers",
            Industry::FinancialMortgages => "Financial - Mortgages",
            Industry::FinancialDiversified => "Financial - Diversified",
            Industry::FinancialDataStockExchanges => "Financial - Data & Stock Exchanges",
            Industry::FinancialCreditServices => "Financial - Credit Services",
            Industry::FinancialConglomerates => "Financial - Conglomerates",
            Industry::FinancialCapitalMarkets => "Financial - Capital Markets",
            Industry::BanksRegional => "Banks - Regional",
            Industry::BanksDiversified => "Banks - Diversified",
            Industry::Banks => "Banks",
            Industry::AssetManagement => "Asset Management",
            Industry::AssetManagementBonds => "Asset Management - Bonds",
            Industry::AssetManagementIncome => "Asset Management - Income",
            Industry::AssetManagementLeveraged => "Asset Management - Leveraged",
            Industry::AssetManagementCryptocurrency => "Asset Management - Cryptocurrency",
            Industry::AssetManagementGlobal => "Asset Management - Global",
            Industry::MedicalSpecialties => "Medical - Specialties",
            Industry::MedicalPharmaceuticals => "Medical - Pharmaceuticals",
            Industry::MedicalInstrumentsSupplies => "Medical - Instruments & Supplies",
            Industry::MedicalHealthcarePlans => "Medical - Healthcare Plans",
            Industry::MedicalHealthcareInformationServices => "Medical - Healthcare Information Services",
            Industry::MedicalEquipmentServices => "Medical - Equipment & Services",
            Industry::MedicalDistribution => "Medical - Distribution",
            Industry::MedicalDiagnosticsResearch => "Medical - Diagnostics & Research",
            Industry::MedicalDevices => "Medical - Devices",
            Industry::MedicalCareFacilities => "Medical - Care Facilities",
            Industry::DrugManufacturersSpecialtyGeneric => "Drug Manufacturers - Specialty & Generic",
            Industry::DrugManufacturersGeneral => "Drug Manufacturers - General",
            Industry::Biotechnology => "Biotechnology",
            Industry::WasteManagement => "Waste Management",
            Industry::Trucking => "Trucking",
            Industry::Railroads => "Railroads",
            Industry::AerospaceDefense => "Aerospace & Defense",
            Industry::MarineShipping => "Marine Shipping",
            Industry::IntegratedFreightLogistics => "Integrated Freight & Logistics",
            Industry::AirlinesAirportsAirServices => "Airlines, Airports & Air Services",
            Industry::GeneralTransportation => "General Transportation",
            Industry::ManufacturingToolsAccessories => "Manufacturing - Tools & Accessories",
            Industry::ManufacturingTextiles => "Manufacturing - Textiles",
            Industry::ManufacturingMiscellaneous => "Manufacturing - Miscellaneous",
            Industry::ManufacturingMetalFabrication => "Manufacturing - Metal Fabrication",
            Industry::IndustrialDistribution => "Industrial - Distribution",
            Industry::IndustrialSpecialties => "Industrial - Specialties",
            Industry::IndustrialPollutionTreatmentControls => "Industrial - Pollution & Treatment Controls",
            Industry::EnvironmentalServices => "Environmental Services",
            Industry::IndustrialMachinery => "Industrial - Machinery",
            Industry::IndustrialInfrastructureOperations => "Industrial - Infrastructure Operations",
            Industry::IndustrialCapitalGoods => "Industrial - Capital Goods",
            Industry::ConsultingServices => "Consulting Services",
            Industry::BusinessEquipmentSupplies => "Business Equipment & Supplies",
            Industry::StaffingEmploymentServices => "Staffing & Employment Services",
            Industry::RentalLeasingServices => "Rental & Leasing Services",
            Industry::EngineeringConstruction => "Engineering & Construction",
            Industry::SecurityProtectionServices => "Security & Protection Services",
            Industry::SpecialtyBusinessServices => "Specialty Business Services",
            Industry::Construction => "Construction",
            Industry::Conglomerates => "Conglomerates",
            Industry::ElectricalEquipmentParts => "Electrical Equipment & Parts",
            Industry::AgriculturalMachinery => "Agricultural - Machinery",
            Industry::AgriculturalCommoditiesMilling => "Agricultural - Commodities/Milling",
            Industry::ReitSpecialty => "REIT - Specialty",
            Industry::ReitRetail => "REIT - Retail",
            Industry::ReitResidential => "REIT - Residential",
            Industry::ReitOffice => "REIT - Office",
            Industry::ReitMortgage => "REIT - Mortgage",
            Industry::ReitIndustrial => "REIT - Industrial",
            Industry::ReitHotelMotel => "REIT - Hotel & Motel",
            Industry::ReitHealthcareFacilities => "REIT - Healthcare Facilities",
            Industry::ReitDiversified => "REIT - Diversified",
            Industry::RealEstateServices => "Real Estate - Services",
            Industry::RealEstateDiversified => "Real Estate - Diversified",
            Industry::RealEstateDevelopment => "Real Estate - Development",
            Industry::RealEstateGeneral => "Real Estate - General",
            Industry::InformationTechnologyServices => "Information Technology Services",
            Industry::HardwareEquipmentParts => "Hardware, Equipment & Parts",
            Industry::ComputerHardware => "Computer Hardware",
            Industry::ElectronicGamingMultimedia => "Electronic Gaming & Multimedia",
            Industry::SoftwareServices => "Software - Services",
            Industry::SoftwareInfrastructure => "Software - Infrastructure",
            Industry::SoftwareApplication => "Software - Application",
            Industry::Semiconductors => "Semiconductors",
            Industry::MediaEntertainment => "Media & Entertainment",
            Industry::CommunicationEquipment => "Communication Equipment",
            Industry::TechnologyDistributors => "Technology Distributors",
            Industry::ConsumerElectronics => "Consumer Electronics",
            Industry::RenewableUtilities => "Renewable Utilities",
            Industry::RegulatedWater => "Regulated Water",
            Industry::RegulatedGas => "Regulated Gas",
            Industry::RegulatedElectric => "Regulated Electric",
            Industry::IndependentPowerProducers => "Independent Power Producers",
            Industry::DiversifiedUtilities => "Diversified Utilities",
            Industry::GeneralUtilities => "General Utilities",
            Industry::Unknown => "Unknown",
        }
    }

    /// Resolves a display name to its industry.
    ///
    /// Matching is exact but case-insensitive. Absent, empty or unmatched
    /// input resolves to [`Industry::Unknown`]; this never fails.
    pub fn from_industry_name(name: Option<&str>) -> Industry {
        let Some(name) = name else {
            return Industry::Unknown;
        };

        Industry::ALL
            .iter()
            .copied()
            .find(|industry| industry.industry_name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                debug!("Industry name '{}' did not match any known industry", name);
                Industry::Unknown
            })
    }

    pub fn is_unknown(&self) -> bool {
        *self == Industry::Unknown
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.industry_name())
    }
}

/// Parses the stable identifier (`"BANKS_REGIONAL"`), not the display name.
impl FromStr for Industry {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .iter()
            .copied()
            .find(|industry| industry.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_identifier("industry", s))
    }
}
