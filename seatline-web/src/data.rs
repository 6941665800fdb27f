//! Web-specific configuration loading
//!
//! Provides the browser implementation of the seatline-core `DataLoader`
//! trait and the static form data the page offers.

use seatline_core::{BookingConfig, ConfigError, DataLoader};

/// Locations offered by the origin and destination selects.
pub const LOCATIONS: &[&str] = &[
    "Dhaka",
    "Chittagong",
    "Sylhet",
    "Rajshahi",
    "Khulna",
    "Barisal",
    "Rangpur",
    "Cox's Bazar",
];

/// Headline figures animated on the landing page, as `(i18n key, final text)`.
pub const STAT_FIGURES: &[(&str, &str)] = &[
    ("stats.passengers", "50K+"),
    ("stats.routes", "120+"),
    ("stats.tickets", "2.5 Lacks"),
    ("stats.operators", "35+"),
];

/// Data loader backed by assets embedded at build time
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Invalid booking config: {0}")]
    Config(#[from] ConfigError),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_booking_config(&self) -> Result<BookingConfig, Self::Error> {
        let json = include_str!("../static/data/booking.json");
        BookingConfig::from_json(json).map_err(WebDataError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = WebDataLoader.load_booking_config().expect("embedded config");
        assert_eq!(config, BookingConfig::default());
    }

    #[test]
    fn locations_are_unique() {
        let mut sorted = LOCATIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), LOCATIONS.len());
        assert!(LOCATIONS.contains(&seatline_core::constants::DEFAULT_ORIGIN));
        assert!(LOCATIONS.contains(&seatline_core::constants::DEFAULT_DESTINATION));
    }
}
