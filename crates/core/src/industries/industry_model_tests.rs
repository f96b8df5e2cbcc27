//! Tests for the industry catalogue, category sets and predicates.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::errors::ValidationError;
    use crate::industries::{
        Industry, IndustryCategory, NO_INVENTORY_COMPONENTS, NO_INVENTORY_EXTRAS,
    };

    // ==================== Catalogue ====================

    #[test]
    fn test_catalogue_has_no_duplicates_and_unknown_is_last() {
        let unique: HashSet<Industry> = Industry::ALL.iter().copied().collect();
        assert_eq!(unique.len(), Industry::ALL.len());
        assert_eq!(Industry::ALL.len(), 160);
        assert_eq!(Industry::ALL.last(), Some(&Industry::Unknown));
    }

    #[test]
    fn test_display_names_are_unique_ignoring_case() {
        let names: HashSet<String> = Industry::ALL
            .iter()
            .map(|i| i.industry_name().to_lowercase())
            .collect();
        assert_eq!(names.len(), Industry::ALL.len());
    }

    #[test]
    fn test_identifiers_are_unique() {
        let ids: HashSet<&str> = Industry::ALL.iter().map(|i| i.as_str()).collect();
        assert_eq!(ids.len(), Industry::ALL.len());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Industry::default(), Industry::Unknown);
        assert!(Industry::default().is_unknown());
        assert!(!Industry::Steel.is_unknown());
    }

    #[test]
    fn test_display_uses_industry_name() {
        assert_eq!(Industry::BanksRegional.to_string(), "Banks - Regional");
        assert_eq!(
            Industry::PaperLumberForestProducts.to_string(),
            "Paper, Lumber & Forest Products"
        );
        assert_eq!(Industry::Unknown.to_string(), "Unknown");
    }

    // ==================== Resolution ====================

    #[test]
    fn test_resolves_every_display_name() {
        for industry in Industry::ALL {
            let name = industry.industry_name();
            assert_eq!(Industry::from_industry_name(Some(name)), industry);
            assert_eq!(
                Industry::from_industry_name(Some(&name.to_uppercase())),
                industry,
                "upper-cased {}",
                name
            );
            assert_eq!(
                Industry::from_industry_name(Some(&name.to_lowercase())),
                industry,
                "lower-cased {}",
                name
            );
        }
    }

    #[test]
    fn test_unresolvable_names_fall_back_to_unknown() {
        assert_eq!(Industry::from_industry_name(None), Industry::Unknown);
        assert_eq!(Industry::from_industry_name(Some("")), Industry::Unknown);
        assert_eq!(
            Industry::from_industry_name(Some("not-a-real-industry")),
            Industry::Unknown
        );
    }

    #[test]
    fn test_resolution_is_exact_not_fuzzy() {
        // No trimming, no prefix matching, identifiers are not display names
        assert_eq!(Industry::from_industry_name(Some(" Steel")), Industry::Unknown);
        assert_eq!(Industry::from_industry_name(Some("Banks -")), Industry::Unknown);
        assert_eq!(
            Industry::from_industry_name(Some("BANKS_REGIONAL")),
            Industry::Unknown
        );
        assert_eq!(
            Industry::from_industry_name(Some("Software Infrastructure")),
            Industry::Unknown
        );
    }

    // ==================== Identifier parsing & serde ====================

    #[test]
    fn test_from_str_parses_identifiers() {
        for industry in Industry::ALL {
            assert_eq!(industry.as_str().parse::<Industry>(), Ok(industry));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_identifier() {
        let err = "Steel".parse::<Industry>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownIdentifier {
                kind: "industry",
                value: "Steel".to_string()
            }
        );
    }

    #[test]
    fn test_industry_serializes_as_identifier() {
        for industry in Industry::ALL {
            let json = serde_json::to_string(&industry).unwrap();
            assert_eq!(json, format!("\"{}\"", industry.as_str()));
        }
        let parsed: Industry = serde_json::from_str("\"SOFTWARE_INFRASTRUCTURE\"").unwrap();
        assert_eq!(parsed, Industry::SoftwareInfrastructure);
    }

    // ==================== Worked examples ====================

    #[test]
    fn test_steel() {
        let steel = Industry::from_industry_name(Some("steel"));
        assert_eq!(steel, Industry::Steel);
        assert!(steel.is_mining());
        assert!(steel.is_capital_intensive());
        assert!(!steel.is_asset_light());
        assert!(steel.is_commodity());
        assert!(steel.is_high_volatility());
    }

    #[test]
    fn test_software_infrastructure() {
        let software = Industry::from_industry_name(Some("Software - Infrastructure"));
        assert_eq!(software, Industry::SoftwareInfrastructure);
        assert!(software.is_technology());
        assert!(software.is_software());
        assert!(!software.is_financial());
        assert!(software.is_asset_light());
    }

    #[test]
    fn test_banks_regional() {
        let bank = Industry::from_industry_name(Some("Banks - Regional"));
        assert_eq!(bank, Industry::BanksRegional);
        assert!(bank.is_bank());
        assert!(bank.is_financial());
        assert!(bank.has_inventory());
        assert!(!bank.is_capital_intensive());
    }

    #[test]
    fn test_unknown_matches_no_predicate() {
        let unknown = Industry::from_industry_name(None);
        assert_eq!(unknown, Industry::Unknown);

        let profile = unknown.profile();
        let flags = [
            profile.capital_intensive,
            profile.asset_light,
            profile.has_inventory,
            profile.low_volatility,
            profile.high_volatility,
            profile.financial,
            profile.technology,
            profile.software,
            profile.utilities,
            profile.cyclical,
            profile.industrial,
            profile.commodity,
            profile.energy,
            profile.retail,
            profile.consumer_staples,
            profile.consumer_discretionary,
            profile.travel,
            profile.healthcare,
            profile.real_estate,
            profile.automotive,
            profile.media,
            profile.restaurant,
            profile.manufacturing,
            profile.oil,
            profile.communication,
            profile.bank,
            profile.mining,
        ];
        assert!(flags.iter().all(|flag| !flag));
        assert!(unknown.categories().is_empty());
    }

    // ==================== Direct-equality predicates ====================

    #[test]
    fn test_direct_predicates_match_exact_lists() {
        let count = |pred: fn(&Industry) -> bool| Industry::ALL.iter().filter(|i| pred(i)).count();

        assert_eq!(count(Industry::is_automotive), 3);
        assert_eq!(count(Industry::is_media), 4);
        assert_eq!(count(Industry::is_restaurant), 1);
        assert_eq!(count(Industry::is_manufacturing), 5);
        assert_eq!(count(Industry::is_oil), 6);
        assert_eq!(count(Industry::is_communication), 2);
        assert_eq!(count(Industry::is_bank), 3);
        assert_eq!(count(Industry::is_mining), 6);
    }

    #[test]
    fn test_direct_predicate_edges() {
        assert!(!Industry::AutoRecreationalVehicles.is_automotive());
        assert!(!Industry::Entertainment.is_media());
        assert!(Industry::IndustrialMachinery.is_manufacturing());
        assert!(!Industry::OilGasEnergy.is_oil());
        assert!(Industry::OilGasEnergy.is_energy());
        assert!(!Industry::InvestmentBankingInvestmentServices.is_bank());
        assert!(!Industry::Uranium.is_mining());
        assert!(Industry::CommunicationEquipment.is_communication());
    }

    // ==================== Category sets ====================

    #[test]
    fn test_no_inventory_is_union_of_components() {
        let mut expected: HashSet<Industry> = NO_INVENTORY_EXTRAS.iter().copied().collect();
        for component in NO_INVENTORY_COMPONENTS {
            expected.extend(component.members().iter().copied());
        }
        assert_eq!(IndustryCategory::NoInventory.members(), &expected);

        assert!(IndustryCategory::NoInventory.contains(Industry::Biotechnology));
        assert!(IndustryCategory::NoInventory.contains(Industry::ShellCompanies));
        assert!(IndustryCategory::NoInventory.contains(Industry::Broadcasting));
        assert!(IndustryCategory::NoInventory.contains(Industry::ReitMortgage));
        assert!(IndustryCategory::NoInventory.contains(Industry::MediaEntertainment));
        assert!(!IndustryCategory::NoInventory.contains(Industry::Steel));
    }

    #[test]
    fn test_volatility_sets_are_disjoint() {
        let low = IndustryCategory::LowVolatility.members();
        let high = IndustryCategory::HighVolatility.members();
        assert!(low.is_disjoint(high), "overlap: {:?}", low.intersection(high));
    }

    #[test]
    fn test_software_is_listed_under_technology() {
        let software = IndustryCategory::Software.members();
        let technology = IndustryCategory::Technology.members();
        assert!(software.is_subset(technology));
    }

    #[test]
    fn test_no_category_contains_unknown() {
        for category in IndustryCategory::ALL {
            assert!(
                !category.contains(Industry::Unknown),
                "{} contains Unknown",
                category
            );
            assert!(!category.members().is_empty(), "{} is empty", category);
        }
    }

    #[test]
    fn test_set_predicates_agree_with_categories() {
        let pairs: [(IndustryCategory, fn(&Industry) -> bool); 19] = [
            (IndustryCategory::CapitalIntensive, Industry::is_capital_intensive),
            (IndustryCategory::AssetLight, Industry::is_asset_light),
            (IndustryCategory::HasInventory, Industry::has_inventory),
            (IndustryCategory::LowVolatility, Industry::is_low_volatility),
            (IndustryCategory::HighVolatility, Industry::is_high_volatility),
            (IndustryCategory::Financial, Industry::is_financial),
            (IndustryCategory::Technology, Industry::is_technology),
            (IndustryCategory::Software, Industry::is_software),
            (IndustryCategory::Utilities, Industry::is_utilities),
            (IndustryCategory::RealEstate, Industry::is_real_estate),
            (IndustryCategory::Industrial, Industry::is_industrial),
            (IndustryCategory::Energy, Industry::is_energy),
            (IndustryCategory::Retail, Industry::is_retail),
            (IndustryCategory::ConsumerStaples, Industry::is_consumer_staples),
            (
                IndustryCategory::ConsumerDiscretionary,
                Industry::is_consumer_discretionary,
            ),
            (IndustryCategory::Healthcare, Industry::is_healthcare),
            (IndustryCategory::Cyclical, Industry::is_cyclical),
            (IndustryCategory::Commodity, Industry::is_commodity),
            (IndustryCategory::Travel, Industry::is_travel),
        ];

        for industry in Industry::ALL {
            let categories = industry.categories();
            for (category, predicate) in pairs {
                assert_eq!(
                    categories.contains(&category),
                    predicate(&industry),
                    "{} / {}",
                    industry.as_str(),
                    category.as_str()
                );
            }
        }
    }

    #[test]
    fn test_categories_preserve_declaration_order() {
        let categories = Industry::SoftwareApplication.categories();
        assert_eq!(
            categories,
            vec![
                IndustryCategory::AssetLight,
                IndustryCategory::HasInventory,
                IndustryCategory::NoInventory,
                IndustryCategory::HighVolatility,
                IndustryCategory::Technology,
                IndustryCategory::Software,
                IndustryCategory::SoftwareAndServicesTech,
            ]
        );
    }

    #[test]
    fn test_set_sizes() {
        assert_eq!(IndustryCategory::CapitalIntensive.members().len(), 49);
        assert_eq!(IndustryCategory::AssetLight.members().len(), 22);
        assert_eq!(IndustryCategory::HasInventory.members().len(), 49);
        assert_eq!(IndustryCategory::LowVolatility.members().len(), 19);
        assert_eq!(IndustryCategory::HighVolatility.members().len(), 16);
        assert_eq!(IndustryCategory::Financial.members().len(), 20);
        assert_eq!(IndustryCategory::Technology.members().len(), 11);
        assert_eq!(IndustryCategory::ConsumerDiscretionary.members().len(), 26);
        assert_eq!(IndustryCategory::Commodity.members().len(), 22);
    }

    #[test]
    fn test_category_identifiers_round_trip() {
        for category in IndustryCategory::ALL {
            assert_eq!(category.as_str().parse::<IndustryCategory>(), Ok(category));
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        assert!("NOT_A_CATEGORY".parse::<IndustryCategory>().is_err());
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = Industry::Restaurants.profile();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["industry"], "RESTAURANTS");
        assert_eq!(json["industryName"], "Restaurants");
        assert_eq!(json["restaurant"], true);
        assert_eq!(json["consumerDiscretionary"], true);
        assert_eq!(json["travel"], true);
        assert_eq!(json["cyclical"], true);
        assert_eq!(json["bank"], false);
    }
}
