//! Property-based integration tests for the pricing engine.
//!
//! These tests verify that the engine's universal invariants hold across
//! arbitrary inputs, using the `proptest` crate for random test case
//! generation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use fleetquote_core::inventory::{normalizer, Vehicle};
use fleetquote_core::quotes::builder;
use fleetquote_core::reservations::format_reservation_number;
use fleetquote_core::season::{classify, rental_days, Season, SeasonWindow};
use fleetquote_core::selection::{DraftQuote, SelectionLedger};

// =============================================================================
// Generators
// =============================================================================

/// Generates a calendar date within a few years of the fleet's era.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..1500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Generates a non-negative daily rate with cent precision.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_season() -> impl Strategy<Value = Season> {
    prop_oneof![Just(Season::Low), Just(Season::High)]
}

/// Generates a raw price field the way inventory editors produce them:
/// numbers, comma-decimal strings, nulls, and plain garbage.
fn arb_raw_price() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| json!(n)),
        (0u32..10_000, 0u32..100).prop_map(|(whole, frac)| json!(format!("{whole},{frac:02}"))),
        Just(json!(null)),
        "[a-z ]{0,10}".prop_map(|s| json!(s)),
    ]
}

/// Generates an open field-bag with any subset of the known price aliases.
fn arb_raw_vehicle() -> impl Strategy<Value = serde_json::Value> {
    (
        proptest::option::of("[a-z0-9]{1,8}"),
        proptest::option::of("[A-Za-z ]{1,16}"),
        proptest::option::of(arb_raw_price()),
        proptest::option::of(arb_raw_price()),
        proptest::option::of(arb_raw_price()),
    )
        .prop_map(|(id, name, low, flat, high)| {
            let mut bag = serde_json::Map::new();
            if let Some(id) = id {
                bag.insert("id".to_string(), json!(id));
            }
            if let Some(name) = name {
                bag.insert("name".to_string(), json!(name));
            }
            if let Some(low) = low {
                bag.insert("lowSeasonPrice".to_string(), low);
            }
            if let Some(flat) = flat {
                bag.insert("price".to_string(), flat);
            }
            if let Some(high) = high {
                bag.insert("highSeasonPrice".to_string(), high);
            }
            serde_json::Value::Object(bag)
        })
}

/// Generates the selection for a draft: per vehicle a rate pair and the
/// season it was toggled under.
fn arb_fleet() -> impl Strategy<Value = Vec<(Decimal, Decimal, Season)>> {
    proptest::collection::vec((arb_price(), arb_price(), arb_season()), 1..8)
}

fn fleet_vehicle(index: usize, low: Decimal, high: Decimal) -> Vehicle {
    Vehicle {
        id: index.to_string(),
        name: format!("Vehicle {index}"),
        low_season_price: low.min(high),
        high_season_price: low.max(high),
        ..Vehicle::default()
    }
}

// =============================================================================
// Normalization invariants
// =============================================================================

proptest! {
    #[test]
    fn normalized_prices_uphold_the_ordering_invariant(raw in arb_raw_vehicle()) {
        let vehicle = normalizer::normalize(&raw);
        prop_assert!(vehicle.low_season_price >= Decimal::ZERO);
        prop_assert!(vehicle.high_season_price >= vehicle.low_season_price);
    }

    #[test]
    fn a_flat_price_covers_both_seasons(units in 1u32..10_000) {
        let vehicle = normalizer::normalize(&json!({ "price": units }));
        prop_assert_eq!(vehicle.low_season_price, Decimal::from(units));
        prop_assert_eq!(vehicle.high_season_price, Decimal::from(units));
    }
}

// =============================================================================
// Season classification invariants
// =============================================================================

proptest! {
    #[test]
    fn an_unset_window_never_classifies_high(start in arb_date(), end in arb_date()) {
        prop_assert_eq!(classify(start, end, &SeasonWindow::default()), Season::Low);
    }

    #[test]
    fn classification_ignores_stay_endpoint_order(
        start in arb_date(),
        end in arb_date(),
        window_start in arb_date(),
        window_len in 0i64..120,
    ) {
        let window = SeasonWindow::new(
            Some(window_start),
            Some(window_start + Duration::days(window_len)),
        );
        prop_assert_eq!(
            classify(start, end, &window),
            classify(end, start, &window)
        );
    }

    #[test]
    fn touching_a_window_boundary_is_high(
        window_start in arb_date(),
        window_len in 0i64..120,
        stay_len in 0i64..60,
    ) {
        let window_end = window_start + Duration::days(window_len);
        let window = SeasonWindow::new(Some(window_start), Some(window_end));

        let arriving = classify(window_start - Duration::days(stay_len), window_start, &window);
        prop_assert_eq!(arriving, Season::High);

        let departing = classify(window_end, window_end + Duration::days(stay_len), &window);
        prop_assert_eq!(departing, Season::High);
    }
}

// =============================================================================
// Duration invariants
// =============================================================================

proptest! {
    #[test]
    fn rental_days_is_order_independent(a in arb_date(), b in arb_date()) {
        prop_assert_eq!(rental_days(a, b), rental_days(b, a));
    }

    #[test]
    fn rental_days_matches_the_calendar_distance(a in arb_date(), span in 0i64..1000) {
        prop_assert_eq!(rental_days(a, a + Duration::days(span)), span as u32);
    }
}

// =============================================================================
// Quote building invariants
// =============================================================================

proptest! {
    #[test]
    fn finalized_quotes_total_correctly_and_stay_sorted(
        fleet in arb_fleet(),
        start in arb_date(),
        span in 0i64..60,
    ) {
        let mut draft = DraftQuote {
            client_name: "Ana Torres".to_string(),
            reservation_number: format_reservation_number(1),
            start_date: Some(start),
            end_date: Some(start + Duration::days(span)),
            ..DraftQuote::default()
        };
        for (index, &(low, high, season)) in fleet.iter().enumerate() {
            draft.selection.toggle(&fleet_vehicle(index, low, high), season);
        }

        let quote = builder::finalize(&draft).unwrap();
        prop_assert_eq!(quote.days, span as u32);
        prop_assert_eq!(quote.items.len(), fleet.len());

        let day_count = Decimal::from(quote.days);
        let expected: Decimal = fleet
            .iter()
            .map(|&(low, high, season)| match season {
                Season::High => low.max(high) * day_count,
                Season::Low => low.min(high) * day_count,
            })
            .sum();
        prop_assert_eq!(quote.total, expected);

        for item in &quote.items {
            prop_assert_eq!(item.line_total, item.price_per_day * day_count);
        }
        for pair in quote.items.windows(2) {
            prop_assert!(pair[0].price_per_day <= pair[1].price_per_day);
        }
    }
}

// =============================================================================
// Selection invariants
// =============================================================================

proptest! {
    #[test]
    fn a_manual_price_survives_any_season_toggling(
        seasons in proptest::collection::vec(arb_season(), 0..12),
        cents in 0i64..100_000,
    ) {
        let vehicle = fleet_vehicle(0, dec!(60), dec!(72));
        let mut ledger = SelectionLedger::new();
        ledger.toggle(&vehicle, Season::Low);

        let manual = Decimal::new(cents, 2);
        ledger.set_price("0", &manual.to_string());
        for season in seasons {
            ledger.set_season(&vehicle, season);
        }

        prop_assert_eq!(ledger.entries()[0].price_per_day, manual);
        prop_assert!(ledger.entries()[0].manually_edited);
    }
}

// =============================================================================
// Reservation token invariants
// =============================================================================

proptest! {
    #[test]
    fn reservation_tokens_are_zero_padded_and_recoverable(counter in 1u64..10_000) {
        let token = format_reservation_number(counter);
        prop_assert!(token.starts_with('#'));
        prop_assert_eq!(token.len(), 5);
        prop_assert_eq!(token[1..].parse::<u64>().unwrap(), counter);
    }
}
