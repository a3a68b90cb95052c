//! Draft validation and quote snapshotting.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::quote_model::{Quote, QuoteLineItem};
use crate::errors::{Error, Result, ValidationError};
use crate::season::rental_days;
use crate::selection::DraftQuote;

/// Validates the draft and snapshots it into an immutable [`Quote`].
///
/// Deterministic given its inputs except for the generated id and
/// `created_at`. No side effects: persistence and rendering are the
/// caller's concern.
///
/// The day count comes from the draft's manual override when set, otherwise
/// from the date range. Items are sorted ascending by daily price; the sort
/// is stable, so ties keep their selection order.
pub fn finalize(draft: &DraftQuote) -> Result<Quote> {
    if draft.client_name.trim().is_empty() {
        return Err(missing("clientName"));
    }
    if draft.reservation_number.trim().is_empty() {
        return Err(missing("reservationNumber"));
    }
    let start_date = draft.start_date.ok_or_else(|| missing("startDate"))?;
    let end_date = draft.end_date.ok_or_else(|| missing("endDate"))?;
    if draft.selection.is_empty() {
        return Err(Error::Validation(ValidationError::EmptySelection));
    }

    let days = draft
        .days_override
        .unwrap_or_else(|| rental_days(start_date, end_date));
    let day_count = Decimal::from(days);

    let mut items: Vec<QuoteLineItem> = draft
        .selection
        .entries()
        .iter()
        .map(|entry| QuoteLineItem {
            vehicle_id: entry.vehicle_id.clone(),
            vehicle_name: entry.vehicle_name.clone(),
            vehicle_type: entry.vehicle_type.clone(),
            vehicle_fuel: entry.vehicle_fuel.clone(),
            price_per_day: entry.price_per_day,
            line_total: entry.price_per_day * day_count,
            season: entry.season,
            manually_edited: entry.manually_edited,
        })
        .collect();
    items.sort_by_key(|item| item.price_per_day);
    let total: Decimal = items.iter().map(|item| item.line_total).sum();

    Ok(Quote {
        id: Uuid::new_v4().to_string(),
        reservation_number: draft.reservation_number.clone(),
        client_name: draft.client_name.clone(),
        start_date,
        end_date,
        days,
        items,
        total,
        created_at: Utc::now(),
        document: None,
        image: None,
    })
}

fn missing(field: &str) -> Error {
    Error::Validation(ValidationError::MissingField(field.to_string()))
}
