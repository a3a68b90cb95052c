//! Quote domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::renderer::RenderedArtifacts;
use crate::season::Season;

/// One priced line of a finalized quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineItem {
    pub vehicle_id: String,
    pub vehicle_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_fuel: Option<String>,
    pub price_per_day: Decimal,
    /// `price_per_day` × the quote's day count.
    pub line_total: Decimal,
    pub season: Season,
    pub manually_edited: bool,
}

/// An immutable, finalized quote.
///
/// Line items are ordered ascending by daily price (stable on selection
/// order for ties) and `total` equals the sum of the line totals. Once
/// built, a quote is never mutated; the only post-construction step is
/// attaching the rendered artifacts before the quote reaches history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub reservation_number: String,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub items: Vec<QuoteLineItem>,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    /// Rendered printable document, as an opaque handle (e.g. a data URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Rendered raster image handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Quote {
    /// Attaches the rendered artifacts. Addressable by the quote's id and
    /// reservation number from then on, and never replaced.
    pub fn with_artifacts(mut self, artifacts: RenderedArtifacts) -> Self {
        self.document = artifacts.document;
        self.image = artifacts.image;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_quote() -> Quote {
        Quote {
            id: "q-1".to_string(),
            reservation_number: "#0004".to_string(),
            client_name: "Ana Torres".to_string(),
            start_date: "2025-06-01".parse().unwrap(),
            end_date: "2025-06-05".parse().unwrap(),
            days: 4,
            items: vec![
                QuoteLineItem {
                    vehicle_id: "a".to_string(),
                    vehicle_name: "Toyota Camry".to_string(),
                    vehicle_type: Some("Sedan".to_string()),
                    vehicle_fuel: Some("Gasoline".to_string()),
                    price_per_day: dec!(50),
                    line_total: dec!(200),
                    season: Season::Low,
                    manually_edited: false,
                },
                QuoteLineItem {
                    vehicle_id: "b".to_string(),
                    vehicle_name: "BMW X3".to_string(),
                    vehicle_type: Some("Suv".to_string()),
                    vehicle_fuel: None,
                    price_per_day: dec!(80),
                    line_total: dec!(320),
                    season: Season::Low,
                    manually_edited: true,
                },
            ],
            total: dec!(520),
            created_at: Utc::now(),
            document: None,
            image: None,
        }
    }

    #[test]
    fn test_quote_round_trips_through_json() {
        let quote = sample_quote();
        let blob = serde_json::to_string(&quote).unwrap();
        let restored: Quote = serde_json::from_str(&blob).unwrap();

        assert_eq!(restored.total, quote.total);
        let ids: Vec<_> = restored.items.iter().map(|i| i.vehicle_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(restored, quote);
    }

    #[test]
    fn test_with_artifacts_attaches_both_handles() {
        let quote = sample_quote().with_artifacts(RenderedArtifacts {
            document: Some("doc".to_string()),
            image: Some("img".to_string()),
        });
        assert_eq!(quote.document.as_deref(), Some("doc"));
        assert_eq!(quote.image.as_deref(), Some("img"));
    }
}
