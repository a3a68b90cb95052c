//! Best-effort normalization of raw vehicle records.
//!
//! Records arrive as open field-bags whose pricing and metadata fields may
//! appear under any of several known aliases: season-specific price fields,
//! a single flat price meaning both seasons, Spanish-language column names
//! from imported rate sheets. Normalization is pure and never fails; invalid
//! input degrades to defaults (zero prices, placeholder name, generated id).

use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use super::inventory_model::Vehicle;
use crate::constants::FALLBACK_VEHICLE_NAME;
use crate::utils::parse_utils::{
    count_from_value, decimal_from_value, decimal_or_zero, scalar_to_string,
};

/// Aliases for the low-season daily rate, in resolution priority order. The
/// trailing entries let a single flat price stand in for both seasons.
const LOW_PRICE_ALIASES: [&str; 5] = [
    "lowSeasonPrice",
    "priceLow",
    "precioBaja",
    "price",
    "pricePerDay",
];

/// Aliases for the high-season daily rate.
const HIGH_PRICE_ALIASES: [&str; 3] = ["highSeasonPrice", "priceHigh", "precioAlta"];

/// Converts a raw vehicle record into its canonical shape.
///
/// After resolving both prices independently, the high-season price is
/// clamped up to the low-season price, so
/// `high_season_price >= low_season_price` holds for every output.
pub fn normalize(raw: &Value) -> Vehicle {
    let low = resolve_price(raw, &LOW_PRICE_ALIASES).unwrap_or(Decimal::ZERO);
    let high = resolve_price(raw, &HIGH_PRICE_ALIASES).unwrap_or(low);

    Vehicle {
        id: first_scalar(raw, &["id", "_id"]).unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: first_scalar(raw, &["name", "modelo", "title"])
            .unwrap_or_else(|| FALLBACK_VEHICLE_NAME.to_string()),
        vehicle_type: first_scalar(raw, &["type", "tipo", "category"]),
        fuel: first_scalar(raw, &["fuel", "combustible"]),
        seats: first_present(raw, &["seats", "plazas"]).and_then(count_from_value),
        deposit: first_present(raw, &["deposit", "deposito"]).and_then(decimal_from_value),
        low_season_price: low,
        high_season_price: high.max(low),
    }
}

/// First alias that coerces to a non-zero amount. An explicit zero falls
/// through to later aliases, which is what lets the flat `price` field win
/// when the season-specific fields are zero or absent.
fn resolve_price(raw: &Value, aliases: &[&str]) -> Option<Decimal> {
    aliases.iter().find_map(|alias| {
        let value = decimal_or_zero(raw.get(*alias));
        if value.is_zero() {
            None
        } else {
            Some(value)
        }
    })
}

/// First alias whose value is a stringifiable scalar. An empty string counts
/// as present.
fn first_scalar(raw: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|alias| scalar_to_string(raw.get(*alias)))
}

/// First alias whose value is present and non-null; coercion happens after
/// the alias is chosen, so an unparseable value does not fall through to the
/// next alias.
fn first_present<'a>(raw: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .find_map(|alias| raw.get(*alias).filter(|v| !v.is_null()))
}
