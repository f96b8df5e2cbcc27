//! Property-based integration tests for the industry taxonomy.
//!
//! Name resolution and membership predicates are total functions, so they
//! must behave for arbitrary input, not just the catalogue names.

use proptest::prelude::*;
use stocklens_core::industries::{Industry, IndustryCategory};
use stocklens_core::sectors::CompanySize;
use stocklens_core::strategy::{TimeHorizon, TimeRange};

// =============================================================================
// Generators
// =============================================================================

/// Picks any industry from the catalogue.
fn arb_industry() -> impl Strategy<Value = Industry> {
    prop::sample::select(Industry::ALL.to_vec())
}

fn arb_category() -> impl Strategy<Value = IndustryCategory> {
    prop::sample::select(IndustryCategory::ALL.to_vec())
}

/// A display name with each ASCII letter's case chosen independently.
fn arb_recased_name() -> impl Strategy<Value = (Industry, String)> {
    arb_industry().prop_flat_map(|industry| {
        let name = industry.industry_name();
        prop::collection::vec(any::<bool>(), name.len()).prop_map(move |flips| {
            let recased: String = name
                .chars()
                .zip(flips)
                .map(|(c, upper)| {
                    if upper {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect();
            (industry, recased)
        })
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_display_name_resolves_in_any_case((industry, name) in arb_recased_name()) {
        prop_assert_eq!(Industry::from_industry_name(Some(&name)), industry);
    }

    #[test]
    fn prop_resolution_never_panics(name in ".{0,64}") {
        let resolved = Industry::from_industry_name(Some(&name));
        if resolved != Industry::Unknown {
            prop_assert!(resolved.industry_name().eq_ignore_ascii_case(&name));
        }
    }

    #[test]
    fn prop_padded_names_are_not_trimmed(industry in arb_industry()) {
        prop_assume!(industry != Industry::Unknown);
        let padded = format!(" {} ", industry.industry_name());
        prop_assert_eq!(Industry::from_industry_name(Some(&padded)), Industry::Unknown);
    }

    #[test]
    fn prop_categories_match_membership(industry in arb_industry(), category in arb_category()) {
        prop_assert_eq!(
            industry.categories().contains(&category),
            category.contains(industry)
        );
    }

    #[test]
    fn prop_volatility_bands_are_exclusive(industry in arb_industry()) {
        prop_assert!(!(industry.is_low_volatility() && industry.is_high_volatility()));
    }

    #[test]
    fn prop_software_implies_technology(industry in arb_industry()) {
        if industry.is_software() {
            prop_assert!(industry.is_technology());
        }
    }

    #[test]
    fn prop_profile_agrees_with_predicates(industry in arb_industry()) {
        let profile = industry.profile();
        prop_assert_eq!(profile.industry, industry);
        prop_assert_eq!(profile.capital_intensive, industry.is_capital_intensive());
        prop_assert_eq!(profile.has_inventory, industry.has_inventory());
        prop_assert_eq!(profile.financial, industry.is_financial());
        prop_assert_eq!(profile.bank, industry.is_bank());
        prop_assert_eq!(profile.mining, industry.is_mining());
    }

    #[test]
    fn prop_identifier_round_trips(industry in arb_industry()) {
        let parsed: Industry = industry.as_str().parse().unwrap();
        prop_assert_eq!(parsed, industry);
    }

    #[test]
    fn prop_market_cap_bands_are_monotonic(a in 0.0f64..5e12, b in 0.0f64..5e12) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_band = CompanySize::from_market_cap(low).unwrap();
        let high_band = CompanySize::from_market_cap(high).unwrap();
        prop_assert!(low_band <= high_band);
    }

    #[test]
    fn prop_time_ranges_belong_to_their_horizon(
        horizon in prop::sample::select(TimeHorizon::ALL.to_vec())
    ) {
        for range in TimeRange::for_horizon(horizon) {
            prop_assert_eq!(range.time_horizon(), horizon);
        }
    }
}
