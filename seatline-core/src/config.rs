//! Booking configuration: layout, pricing and the fixed booked-seat list.
use crate::constants::{
    AISLE_AFTER_COLUMN, COLUMN_COUNT, CURRENCY_GLYPH, DEFAULT_BOOKED_SEATS, MAX_SELECTED_SEATS,
    PRICE_PER_SEAT, ROW_COUNT,
};
use crate::seat::{MAX_ROWS, SeatId, SeatIdError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("booked seat '{id}' is invalid: {source}")]
    InvalidSeat {
        id: String,
        #[source]
        source: SeatIdError,
    },
    #[error("grid must have 1..={max} rows and at least one column (got {rows}x{columns})")]
    InvalidDimensions { rows: u8, columns: u8, max: u8 },
    #[error("maximum selectable seats must be at least 1")]
    ZeroCapacity,
}

/// Grid shape consumed by the seat grid builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u8,
    pub columns: u8,
    /// Columns `1..=aisle_after` form the left group, the rest the right group.
    pub aisle_after: u8,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: ROW_COUNT,
            columns: COLUMN_COUNT,
            aisle_after: AISLE_AFTER_COLUMN,
        }
    }
}

impl GridLayout {
    #[must_use]
    pub fn contains(&self, id: SeatId) -> bool {
        id.row() < self.rows && id.column() <= self.columns
    }
}

/// Unit price and the glyph prefixed to rendered totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub unit_price: u64,
    pub currency_glyph: String,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            unit_price: PRICE_PER_SEAT,
            currency_glyph: CURRENCY_GLYPH.to_string(),
        }
    }
}

impl Pricing {
    #[must_use]
    pub fn total(&self, seat_count: usize) -> u64 {
        self.unit_price
            .saturating_mul(u64::try_from(seat_count).unwrap_or(u64::MAX))
    }

    #[must_use]
    pub fn render(&self, amount: u64) -> String {
        format!("{}{amount}", self.currency_glyph)
    }
}

/// Complete configuration. All fields default to the built-in constants if
/// missing from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub layout: GridLayout,
    pub pricing: Pricing,
    pub max_seats: usize,
    pub booked_seats: Vec<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            pricing: Pricing::default(),
            max_seats: MAX_SELECTED_SEATS,
            booked_seats: DEFAULT_BOOKED_SEATS
                .iter()
                .map(|id| (*id).to_string())
                .collect(),
        }
    }
}

impl BookingConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check dimensions, capacity and every booked identifier.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = self.layout;
        if layout.rows == 0 || layout.rows > MAX_ROWS || layout.columns == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: layout.rows,
                columns: layout.columns,
                max: MAX_ROWS,
            });
        }
        if self.max_seats == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        self.booked_seat_ids().map(|_| ())
    }

    /// Parse the booked list into identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first identifier that does not parse.
    pub fn booked_seat_ids(&self) -> Result<BTreeSet<SeatId>, ConfigError> {
        self.booked_seats
            .iter()
            .map(|raw| {
                raw.parse::<SeatId>()
                    .map_err(|source| ConfigError::InvalidSeat {
                        id: raw.clone(),
                        source,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = BookingConfig::default();
        assert_eq!((config.layout.rows, config.layout.columns), (10, 4));
        assert_eq!(config.max_seats, 4);
        assert_eq!(config.pricing.unit_price, 560);
        assert_eq!(config.booked_seat_ids().unwrap().len(), 7);
        config.validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = BookingConfig::from_json(r#"{ "max_seats": 2 }"#).unwrap();
        assert_eq!(config.max_seats, 2);
        assert_eq!(config.layout, GridLayout::default());
        assert_eq!(config.pricing.currency_glyph, "৳");
    }

    #[test]
    fn rejects_bad_booked_ids_and_shapes() {
        let err = BookingConfig::from_json(r#"{ "booked_seats": ["A1", "ZZ"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeat { ref id, .. } if id == "ZZ"));

        let err = BookingConfig::from_json(
            r#"{ "layout": { "rows": 0, "columns": 4, "aisle_after": 2 } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("rows"));

        let err = BookingConfig::from_json(r#"{ "max_seats": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));

        assert!(matches!(
            BookingConfig::from_json("{ nope").unwrap_err(),
            ConfigError::Json(_)
        ));
    }

    #[test]
    fn pricing_totals_and_renders() {
        let pricing = Pricing::default();
        assert_eq!(pricing.total(3), 1_680);
        assert_eq!(pricing.render(pricing.total(3)), "৳1680");
        assert_eq!(pricing.render(0), "৳0");
    }
}
