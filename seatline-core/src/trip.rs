//! Trip details read from the booking form.
use crate::constants::{
    DEFAULT_DESTINATION, DEFAULT_ORIGIN, DEFAULT_TRAVEL_DATE, DEFAULT_TRAVEL_TIME,
};
use crate::format::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque form values; the form controls constrain them upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
    pub origin: String,
    pub destination: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
}

impl Default for TripDetails {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            date: DEFAULT_TRAVEL_DATE.to_string(),
            time: DEFAULT_TRAVEL_TIME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripField {
    Origin,
    Destination,
    Date,
    Time,
}

impl TripField {
    /// DOM id of the form control bound to this field.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Origin => "fromLocation",
            Self::Destination => "toLocation",
            Self::Date => "travelDate",
            Self::Time => "travelTime",
        }
    }
}

impl TripDetails {
    #[must_use]
    pub fn field(&self, field: TripField) -> &str {
        match field {
            TripField::Origin => &self.origin,
            TripField::Destination => &self.destination,
            TripField::Date => &self.date,
            TripField::Time => &self.time,
        }
    }

    pub fn set_field(&mut self, field: TripField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TripField::Origin => self.origin = value,
            TripField::Destination => self.destination = value,
            TripField::Date => self.date = value,
            TripField::Time => self.time = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TripValidationError {
    #[error("Origin and destination cannot be the same")]
    SameOriginDestination,
    #[error("Please select a future date")]
    PastDate,
}

/// Form-level checks. A travel date of `today` is accepted; an unparseable
/// date is left for the summary's placeholder rather than rejected here.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate_trip(trip: &TripDetails, today: NaiveDate) -> Result<(), TripValidationError> {
    if trip.origin == trip.destination {
        return Err(TripValidationError::SameOriginDestination);
    }
    if parse_date(&trip.date).is_some_and(|date| date < today) {
        return Err(TripValidationError::PastDate);
    }
    Ok(())
}
