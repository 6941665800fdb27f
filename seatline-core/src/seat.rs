//! Seat identifiers and per-seat flags.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rows are lettered, so a grid can never be taller than the alphabet.
pub const MAX_ROWS: u8 = 26;

/// Row letter plus 1-based column number, e.g. `C3`.
///
/// Ordering is row-major: `A1 < A2 < B1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    row: u8,
    column: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatIdError {
    #[error("seat identifier is empty")]
    Empty,
    #[error("invalid seat row '{0}'")]
    InvalidRow(char),
    #[error("invalid seat column '{0}'")]
    InvalidColumn(String),
}

impl SeatId {
    /// Build an identifier from a 0-based row index and a 1-based column.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is past `Z` or the column is zero.
    pub fn new(row: u8, column: u8) -> Result<Self, SeatIdError> {
        if row >= MAX_ROWS {
            return Err(SeatIdError::InvalidRow(char::from(b'A'.saturating_add(row))));
        }
        if column == 0 {
            return Err(SeatIdError::InvalidColumn(column.to_string()));
        }
        Ok(Self { row, column })
    }

    /// 0-based row index (`A` is 0).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// 1-based column number.
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    #[must_use]
    pub const fn row_letter(self) -> char {
        (b'A' + self.row) as char
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column)
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or(SeatIdError::Empty)?;
        if !letter.is_ascii_alphabetic() {
            return Err(SeatIdError::InvalidRow(letter));
        }
        let row = letter.to_ascii_uppercase() as u8 - b'A';

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeatIdError::InvalidColumn(digits.to_string()));
        }
        let column = digits
            .parse::<u8>()
            .map_err(|_| SeatIdError::InvalidColumn(digits.to_string()))?;
        Self::new(row, column)
    }
}

impl Serialize for SeatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Display status of a single seat control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Selected,
    Booked,
}

impl SeatStatus {
    /// Extra CSS class applied next to the base `seat` class.
    #[must_use]
    pub const fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Available => None,
            Self::Selected => Some("selected"),
            Self::Booked => Some("booked"),
        }
    }
}

/// One seat in the grid. `booked` never changes after the grid is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub booked: bool,
    pub selected: bool,
}

impl Seat {
    #[must_use]
    pub const fn new(id: SeatId, booked: bool) -> Self {
        Self {
            id,
            booked,
            selected: false,
        }
    }

    /// Booked seats never receive a selection handler.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        !self.booked
    }

    #[must_use]
    pub const fn status(&self) -> SeatStatus {
        if self.booked {
            SeatStatus::Booked
        } else if self.selected {
            SeatStatus::Selected
        } else {
            SeatStatus::Available
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_identifiers() {
        let id: SeatId = "C3".parse().unwrap();
        assert_eq!(id.row(), 2);
        assert_eq!(id.column(), 3);
        assert_eq!(id.row_letter(), 'C');
        assert_eq!(id.to_string(), "C3");

        let lower: SeatId = " j4 ".parse().unwrap();
        assert_eq!(lower.to_string(), "J4");
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert_eq!("".parse::<SeatId>(), Err(SeatIdError::Empty));
        assert_eq!("3C".parse::<SeatId>(), Err(SeatIdError::InvalidRow('3')));
        assert_eq!(
            "C".parse::<SeatId>(),
            Err(SeatIdError::InvalidColumn(String::new()))
        );
        assert_eq!(
            "C0".parse::<SeatId>(),
            Err(SeatIdError::InvalidColumn("0".into()))
        );
        assert!("C-1".parse::<SeatId>().is_err());
        assert!("C999".parse::<SeatId>().is_err());
    }

    #[test]
    fn ordering_is_row_major() {
        let mut ids: Vec<SeatId> = ["B1", "A2", "A1", "C4"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        ids.sort();
        let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["A1", "A2", "B1", "C4"]);
    }

    #[test]
    fn serde_uses_display_form() {
        let id: SeatId = "E3".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"E3\"");
        let back: SeatId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<SeatId>("\"??\"").is_err());
    }

    #[test]
    fn status_prefers_booked_over_selected() {
        let id: SeatId = "A1".parse().unwrap();
        let mut seat = Seat::new(id, false);
        assert_eq!(seat.status(), SeatStatus::Available);
        seat.selected = true;
        assert_eq!(seat.status(), SeatStatus::Selected);
        assert_eq!(seat.status().class_name(), Some("selected"));

        let booked = Seat::new(id, true);
        assert!(!booked.is_interactive());
        assert_eq!(booked.status().class_name(), Some("booked"));
    }
}
