//! Category set definitions.
//!
//! Each set groups industries sharing one economic characteristic. Sets are
//! not partitions: an industry may belong to any number of them. Membership
//! is hand-curated and built once, on first use.

use std::collections::HashSet;

use lazy_static::lazy_static;

use super::industry_category::IndustryCategory;
use super::industry_model::Industry::{self, *};

fn industry_set(members: &[Industry]) -> HashSet<Industry> {
    members.iter().copied().collect()
}

/// Explicit members of the no-inventory set, on top of its component sets.
pub const NO_INVENTORY_EXTRAS: [Industry; 2] = [Biotechnology, ShellCompanies];

/// Sets whose union (plus [`NO_INVENTORY_EXTRAS`]) forms the no-inventory set.
pub const NO_INVENTORY_COMPONENTS: [IndustryCategory; 8] = [
    IndustryCategory::StableCommunication,
    IndustryCategory::GrowthCommunication,
    IndustryCategory::TraditionalFinancial,
    IndustryCategory::CapitalMarketsFinancial,
    IndustryCategory::RealEstate,
    IndustryCategory::SoftwareAndServicesTech,
    IndustryCategory::Utilities,
    IndustryCategory::Education,
];

lazy_static! {
    // ── Capital structure ────────────────────────────────────────────────────

    /// Industries requiring significant physical assets and infrastructure,
    /// with high fixed costs and low asset turnover.
    pub(crate) static ref CAPITAL_INTENSIVE: HashSet<Industry> = industry_set(&[
        // Energy
        Uranium, Coal, Solar,
        OilGasDrilling, OilGasEquipmentServices, OilGasIntegrated,
        OilGasMidstream, OilGasRefiningMarketing, OilGasExplorationProduction,
        OilGasEnergy,
        // Metals & materials
        Steel, Aluminum, Copper, Gold, Silver, OtherPreciousMetals,
        PaperLumberForestProducts, Chemicals, ConstructionMaterials,
        // Utilities
        RegulatedElectric, RegulatedGas, RegulatedWater, RenewableUtilities,
        IndependentPowerProducers, DiversifiedUtilities, GeneralUtilities,
        // Transportation
        AirlinesAirportsAirServices, Railroads, MarineShipping, Trucking,
        // Manufacturing
        AutoManufacturers, IndustrialMachinery, IndustrialCapitalGoods,
        ManufacturingMetalFabrication, ManufacturingToolsAccessories,
        // Real estate
        ReitIndustrial, ReitHotelMotel, ReitResidential, ReitRetail,
        ReitOffice, ReitHealthcareFacilities, ReitSpecialty, ReitDiversified,
        RealEstateDevelopment, RealEstateDiversified, RealEstateGeneral,
        // Other
        WasteManagement, IndustrialInfrastructureOperations, TelecommunicationsServices,
    ]);

    /// Industries relying on intellectual property, human capital or digital
    /// infrastructure rather than physical assets.
    pub(crate) static ref ASSET_LIGHT: HashSet<Industry> = industry_set(&[
        // Technology & software
        SoftwareApplication, SoftwareInfrastructure, SoftwareServices,
        InformationTechnologyServices, ElectronicGamingMultimedia,
        // Content & digital services
        InternetContentInformation, MediaEntertainment,
        // Professional services
        AdvertisingAgencies, ConsultingServices, SpecialtyBusinessServices,
        StaffingEmploymentServices, SecurityProtectionServices,
        // Financial services
        AssetManagement, AssetManagementBonds, AssetManagementIncome,
        AssetManagementLeveraged, AssetManagementCryptocurrency, AssetManagementGlobal,
        FinancialDataStockExchanges,
        // Healthcare services
        Biotechnology, MedicalHealthcareInformationServices,
        // Education
        EducationTrainingServices,
    ]);

    // ── Operating model ──────────────────────────────────────────────────────

    pub(crate) static ref HAS_INVENTORY: HashSet<Industry> = industry_set(&[
        // Financial services
        Banks, BanksDiversified, BanksRegional,
        InsuranceBrokers, InsuranceDiversified, InsuranceLife,
        InsurancePropertyCasualty, InsuranceReinsurance, InsuranceSpecialty,
        FinancialConglomerates, FinancialCreditServices,
        FinancialDiversified, FinancialMortgages,
        AssetManagement, AssetManagementBonds, AssetManagementIncome,
        AssetManagementLeveraged, AssetManagementCryptocurrency, AssetManagementGlobal,
        // Software and digital services
        SoftwareApplication, SoftwareInfrastructure, SoftwareServices,
        InformationTechnologyServices, InternetContentInformation,
        ElectronicGamingMultimedia,
        // Professional services
        ConsultingServices, SpecialtyBusinessServices,
        StaffingEmploymentServices,
        // Real estate
        ReitSpecialty, ReitRetail, ReitResidential, ReitOffice,
        ReitMortgage, ReitIndustrial, ReitHotelMotel,
        ReitHealthcareFacilities, ReitDiversified,
        RealEstateServices, RealEstateDiversified, RealEstateDevelopment,
        // Utilities
        RegulatedWater, RegulatedGas, RegulatedElectric,
        IndependentPowerProducers, DiversifiedUtilities, GeneralUtilities,
        // Others
        ShellCompanies, MedicalHealthcareInformationServices,
        EducationTrainingServices,
    ]);

    /// Composed from [`NO_INVENTORY_COMPONENTS`], so edits to a component set
    /// propagate here.
    pub(crate) static ref NO_INVENTORY: HashSet<Industry> = {
        let mut set = industry_set(&NO_INVENTORY_EXTRAS);
        for component in NO_INVENTORY_COMPONENTS {
            set.extend(component.members().iter().copied());
        }
        set
    };

    // ── Risk / volatility ────────────────────────────────────────────────────

    pub(crate) static ref LOW_VOLATILITY: HashSet<Industry> = industry_set(&[
        RegulatedElectric, RegulatedGas, RegulatedWater,
        DiversifiedUtilities, GeneralUtilities, RenewableUtilities,
        ReitDiversified, ReitHealthcareFacilities, ReitIndustrial,
        ReitOffice, ReitResidential, ReitRetail,
        HouseholdPersonalProducts, PackagedFoods, GroceryStores,
        DiscountStores, Tobacco, InsuranceDiversified,
        TelecommunicationsServices,
    ]);

    pub(crate) static ref HIGH_VOLATILITY: HashSet<Industry> = industry_set(&[
        Biotechnology, DrugManufacturersSpecialtyGeneric,
        SoftwareApplication, SoftwareInfrastructure,
        Semiconductors, ElectronicGamingMultimedia,
        Solar, Uranium, Coal,
        OilGasExplorationProduction, OilGasEquipmentServices,
        Steel, Copper, Gold, Silver,
        OtherPreciousMetals,
    ]);

    // ── Sector groupings ─────────────────────────────────────────────────────

    pub(crate) static ref FINANCIAL: HashSet<Industry> = industry_set(&[
        Banks, BanksDiversified, BanksRegional,
        InsuranceBrokers, InsuranceDiversified, InsuranceLife,
        InsurancePropertyCasualty, InsuranceReinsurance, InsuranceSpecialty,
        FinancialConglomerates, FinancialCreditServices,
        FinancialDataStockExchanges, FinancialDiversified, FinancialMortgages,
        AssetManagement, AssetManagementBonds, AssetManagementIncome,
        AssetManagementLeveraged, AssetManagementCryptocurrency, AssetManagementGlobal,
    ]);

    /// Software industries are listed here explicitly as well as in [`SOFTWARE`].
    pub(crate) static ref TECHNOLOGY: HashSet<Industry> = industry_set(&[
        SoftwareApplication, SoftwareInfrastructure, SoftwareServices,
        InformationTechnologyServices, ElectronicGamingMultimedia,
        Semiconductors, ComputerHardware, HardwareEquipmentParts,
        CommunicationEquipment, ConsumerElectronics, TechnologyDistributors,
    ]);

    pub(crate) static ref SOFTWARE: HashSet<Industry> = industry_set(&[
        SoftwareApplication, SoftwareInfrastructure, SoftwareServices,
    ]);

    pub(crate) static ref UTILITIES: HashSet<Industry> = industry_set(&[
        RegulatedElectric, RegulatedGas, RegulatedWater,
        RenewableUtilities, DiversifiedUtilities, GeneralUtilities,
        IndependentPowerProducers,
    ]);

    pub(crate) static ref REAL_ESTATE: HashSet<Industry> = industry_set(&[
        RealEstateDevelopment,
        RealEstateDiversified,
        RealEstateServices,
        ReitDiversified,
        ReitHealthcareFacilities,
        ReitHotelMotel,
        ReitIndustrial,
        ReitMortgage,
        ReitOffice,
        ReitResidential,
        ReitRetail,
        ReitSpecialty,
    ]);

    pub(crate) static ref INDUSTRIAL: HashSet<Industry> = industry_set(&[
        IndustrialMaterials,
        IndustrialDistribution,
        IndustrialSpecialties,
        IndustrialPollutionTreatmentControls,
        IndustrialMachinery,
        IndustrialInfrastructureOperations,
        IndustrialCapitalGoods,
        ReitIndustrial,
    ]);

    /// Renewable utilities and independent power producers are kept under
    /// utilities rather than here.
    pub(crate) static ref ENERGY: HashSet<Industry> = industry_set(&[
        Uranium, Coal, Solar,
        OilGasDrilling, OilGasEquipmentServices, OilGasIntegrated,
        OilGasMidstream, OilGasRefiningMarketing, OilGasExplorationProduction,
        OilGasEnergy,
    ]);

    pub(crate) static ref RETAIL: HashSet<Industry> = industry_set(&[
        ApparelRetail, SpecialtyRetail, DepartmentStores,
        GroceryStores, DiscountStores, HomeImprovement, AutoDealerships,
    ]);

    /// Essential goods bought regardless of economic conditions.
    pub(crate) static ref CONSUMER_STAPLES: HashSet<Industry> = industry_set(&[
        // Food & beverage production and distribution
        PackagedFoods,
        FoodDistribution,
        FoodConfectioners,
        BeveragesWineriesDistilleries,
        BeveragesNonAlcoholic,
        BeveragesAlcoholic,
        // Household & personal products
        HouseholdPersonalProducts,
        PersonalProductsServices,
        Tobacco,
        // Food & staples retailing
        GroceryStores,
        DiscountStores,
    ]);

    pub(crate) static ref CONSUMER_DISCRETIONARY: HashSet<Industry> = industry_set(&[
        Entertainment,
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
        Broadcasting,
        AdvertisingAgencies,
        Publishing,
        ElectronicGamingMultimedia,
        ConsumerElectronics,
        ReitHotelMotel,
    ]);

    pub(crate) static ref HEALTHCARE: HashSet<Industry> = industry_set(&[
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
    ]);

    // ── Cyclicality / commodity ──────────────────────────────────────────────

    pub(crate) static ref CYCLICAL: HashSet<Industry> = industry_set(&[
        AutoManufacturers, AutoParts, AutoDealerships,
        ResidentialConstruction, FurnishingsFixturesAppliances,
        TravelLodging, TravelServices, Restaurants,
        Leisure, GamblingResortsCasinos,
        // Apparel
        ApparelRetail, ApparelManufacturers, ApparelFootwearAccessories,
        // Retail
        HomeImprovement, SpecialtyRetail, DepartmentStores, LuxuryGoods,
    ]);

    pub(crate) static ref COMMODITY: HashSet<Industry> = industry_set(&[
        Steel, Aluminum, Copper, Gold, Silver,
        OtherPreciousMetals, OilGasDrilling, OilGasEquipmentServices,
        OilGasIntegrated, OilGasMidstream, OilGasRefiningMarketing,
        OilGasExplorationProduction, Coal, Uranium, Solar,
        Chemicals, ChemicalsSpecialty,
        PaperLumberForestProducts,
        AgriculturalInputs, AgriculturalMachinery, AgriculturalFarmProducts,
        AgriculturalCommoditiesMilling,
    ]);

    pub(crate) static ref TRAVEL: HashSet<Industry> = industry_set(&[
        TravelLodging,
        TravelServices,
        AirlinesAirportsAirServices,
        GamblingResortsCasinos,
        Restaurants,
        Leisure,
        ReitHotelMotel,
    ]);

    // ── Finer groupings ──────────────────────────────────────────────────────

    pub(crate) static ref CAPITAL_MARKETS_FINANCIAL: HashSet<Industry> = industry_set(&[
        InvestmentBankingInvestmentServices,
        FinancialDataStockExchanges,
        FinancialCreditServices,
        FinancialCapitalMarkets,
        AssetManagement,
        AssetManagementBonds,
        AssetManagementIncome,
        AssetManagementLeveraged,
        AssetManagementCryptocurrency,
        AssetManagementGlobal,
    ]);

    pub(crate) static ref TRADITIONAL_FINANCIAL: HashSet<Industry> = industry_set(&[
        InsuranceSpecialty,
        InsuranceReinsurance,
        InsurancePropertyCasualty,
        InsuranceLife,
        InsuranceDiversified,
        InsuranceBrokers,
        FinancialMortgages,
        FinancialDiversified,
        FinancialConglomerates,
        BanksRegional,
        BanksDiversified,
        Banks,
    ]);

    pub(crate) static ref BASIC_MATERIALS: HashSet<Industry> = industry_set(&[
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
        PackagingContainers,
    ]);

    pub(crate) static ref METAL: HashSet<Industry> = industry_set(&[Steel, Copper, Aluminum]);

    pub(crate) static ref CHEMICAL: HashSet<Industry> = industry_set(&[ChemicalsSpecialty, Chemicals]);

    pub(crate) static ref STABLE_COMMUNICATION: HashSet<Industry> =
        industry_set(&[TelecommunicationsServices, Broadcasting, Publishing]);

    pub(crate) static ref GROWTH_COMMUNICATION: HashSet<Industry> =
        industry_set(&[InternetContentInformation, Entertainment, AdvertisingAgencies]);

    pub(crate) static ref LUXURY_APPAREL: HashSet<Industry> =
        industry_set(&[LuxuryGoods, ApparelFootwearAccessories]);

    pub(crate) static ref NON_RENEWABLE_ENERGY: HashSet<Industry> = industry_set(&[
        Uranium,
        OilGasRefiningMarketing,
        OilGasMidstream,
        OilGasIntegrated,
        OilGasExplorationProduction,
        OilGasEquipmentServices,
        OilGasEnergy,
        OilGasDrilling,
        Coal,
    ]);

    pub(crate) static ref RENEWABLE_ENERGY: HashSet<Industry> =
        industry_set(&[Solar, RenewableUtilities]);

    pub(crate) static ref SOFTWARE_AND_SERVICES_TECH: HashSet<Industry> = industry_set(&[
        InformationTechnologyServices,
        SoftwareServices,
        SoftwareInfrastructure,
        SoftwareApplication,
        ElectronicGamingMultimedia,
        MediaEntertainment,
    ]);

    pub(crate) static ref HARDWARE_AND_EQUIPMENT_TECH: HashSet<Industry> = industry_set(&[
        HardwareEquipmentParts,
        ComputerHardware,
        CommunicationEquipment,
        TechnologyDistributors,
        ConsumerElectronics,
    ]);

    pub(crate) static ref SEMICONDUCTOR_TECH: HashSet<Industry> = industry_set(&[Semiconductors]);

    pub(crate) static ref EDUCATION: HashSet<Industry> = industry_set(&[EducationTrainingServices]);

    /// Healthcare without biotechnology.
    pub(crate) static ref GENERAL_HEALTHCARE: HashSet<Industry> = industry_set(&[
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
    ]);
}
