//! Tests for raw vehicle normalization.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use super::normalizer::normalize;
use super::seed;
use crate::constants::FALLBACK_VEHICLE_NAME;

#[test]
fn test_canonical_record_passes_through() {
    let vehicle = normalize(&json!({
        "id": "7",
        "name": "Volkswagen Tiguan",
        "type": "Suv",
        "fuel": "Gasoline",
        "seats": 5,
        "deposit": 500,
        "lowSeasonPrice": 72,
        "highSeasonPrice": 82
    }));

    assert_eq!(vehicle.id, "7");
    assert_eq!(vehicle.name, "Volkswagen Tiguan");
    assert_eq!(vehicle.vehicle_type.as_deref(), Some("Suv"));
    assert_eq!(vehicle.fuel.as_deref(), Some("Gasoline"));
    assert_eq!(vehicle.seats, Some(5));
    assert_eq!(vehicle.deposit, Some(dec!(500)));
    assert_eq!(vehicle.low_season_price, dec!(72));
    assert_eq!(vehicle.high_season_price, dec!(82));
}

#[test]
fn test_flat_price_means_both_seasons() {
    let vehicle = normalize(&json!({ "id": "1", "name": "City Car", "price": 55 }));
    assert_eq!(vehicle.low_season_price, dec!(55));
    assert_eq!(vehicle.high_season_price, dec!(55));
}

#[test]
fn test_zero_price_falls_through_to_later_aliases() {
    let vehicle = normalize(&json!({
        "id": "1",
        "name": "City Car",
        "lowSeasonPrice": 0,
        "priceLow": 55
    }));
    assert_eq!(vehicle.low_season_price, dec!(55));
}

#[test]
fn test_spanish_rate_sheet_aliases() {
    let vehicle = normalize(&json!({
        "id": "9",
        "modelo": "Seat Ibiza",
        "tipo": "Econ",
        "combustible": "Gasolina",
        "plazas": "5",
        "precioBaja": "48,5",
        "precioAlta": "56,0"
    }));

    assert_eq!(vehicle.name, "Seat Ibiza");
    assert_eq!(vehicle.vehicle_type.as_deref(), Some("Econ"));
    assert_eq!(vehicle.fuel.as_deref(), Some("Gasolina"));
    assert_eq!(vehicle.seats, Some(5));
    assert_eq!(vehicle.low_season_price, dec!(48.5));
    assert_eq!(vehicle.high_season_price, dec!(56.0));
}

#[test]
fn test_high_price_clamped_up_to_low() {
    let vehicle = normalize(&json!({
        "id": "1",
        "name": "Odd Pricing",
        "lowSeasonPrice": 90,
        "highSeasonPrice": 70
    }));
    assert_eq!(vehicle.high_season_price, dec!(90));
}

#[test]
fn test_missing_high_price_uses_low() {
    let vehicle = normalize(&json!({ "id": "1", "name": "One Rate", "lowSeasonPrice": 64 }));
    assert_eq!(vehicle.high_season_price, dec!(64));
}

#[test]
fn test_unparseable_prices_degrade_to_zero() {
    let vehicle = normalize(&json!({
        "id": "1",
        "name": "Broken",
        "lowSeasonPrice": "call us",
        "highSeasonPrice": null
    }));
    assert_eq!(vehicle.low_season_price, Decimal::ZERO);
    assert_eq!(vehicle.high_season_price, Decimal::ZERO);
}

#[test]
fn test_missing_identity_gets_generated_id_and_placeholder_name() {
    let vehicle = normalize(&json!({ "price": 40 }));
    assert!(!vehicle.id.is_empty());
    assert_eq!(vehicle.name, FALLBACK_VEHICLE_NAME);

    let other = normalize(&json!({ "price": 40 }));
    assert_ne!(vehicle.id, other.id);
}

#[test]
fn test_alternate_id_field() {
    let vehicle = normalize(&json!({ "_id": 42, "name": "Numeric Id" }));
    assert_eq!(vehicle.id, "42");
}

#[test]
fn test_unparseable_seats_do_not_fall_through() {
    // "seats" is present but malformed, so "plazas" is not consulted.
    let vehicle = normalize(&json!({
        "id": "1",
        "name": "Van",
        "seats": "big",
        "plazas": 9
    }));
    assert_eq!(vehicle.seats, None);
}

#[test]
fn test_non_scalar_metadata_is_absent() {
    let vehicle = normalize(&json!({
        "id": "1",
        "name": "Weird",
        "type": ["Suv"],
        "fuel": { "kind": "diesel" }
    }));
    assert_eq!(vehicle.vehicle_type, None);
    assert_eq!(vehicle.fuel, None);
}

#[test]
fn test_factory_inventory_upholds_price_invariant() {
    for raw in seed::factory_inventory() {
        let vehicle = normalize(&raw);
        assert!(
            vehicle.low_season_price >= Decimal::ZERO,
            "{}: negative low price",
            vehicle.name
        );
        assert!(
            vehicle.high_season_price >= vehicle.low_season_price,
            "{}: high price below low price",
            vehicle.name
        );
    }
}
