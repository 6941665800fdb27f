//! Static seat layout built once at startup.
use crate::config::{BookingConfig, ConfigError, GridLayout};
use crate::constants::LOG_TARGET;
use crate::seat::{MAX_ROWS, Seat, SeatId};
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read-only source of pre-assigned seats, queried once per grid build.
pub trait BookedSeatSource {
    fn booked_seats(&self) -> BTreeSet<SeatId>;
}

/// A fixed booked list, the only source this widget ships with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedBookedSeats(BTreeSet<SeatId>);

impl FixedBookedSeats {
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = SeatId>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// # Errors
    ///
    /// Returns an error if any configured identifier does not parse.
    pub fn from_config(config: &BookingConfig) -> Result<Self, ConfigError> {
        config.booked_seat_ids().map(Self)
    }
}

impl BookedSeatSource for FixedBookedSeats {
    fn booked_seats(&self) -> BTreeSet<SeatId> {
        self.0.clone()
    }
}

/// One lettered row, split around the aisle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRow {
    pub letter: char,
    pub left: Vec<Seat>,
    pub right: Vec<Seat>,
}

impl SeatRow {
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.left.iter().chain(self.right.iter())
    }

    fn seats_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.left.iter_mut().chain(self.right.iter_mut())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatGrid {
    rows: Vec<SeatRow>,
}

impl SeatGrid {
    /// Build a fresh grid for `layout`, marking every seat from `source` booked.
    #[must_use]
    pub fn from_source(layout: GridLayout, source: &impl BookedSeatSource) -> Self {
        let mut grid = Self::default();
        grid.build(layout, source);
        grid
    }

    /// Populate the grid, discarding whatever a previous build left behind.
    pub fn build(&mut self, layout: GridLayout, source: &impl BookedSeatSource) {
        self.rows.clear();
        let booked = source.booked_seats();

        for stray in booked.iter().filter(|id| !layout.contains(**id)) {
            log::warn!(target: LOG_TARGET, "ignoring booked seat {stray} outside the grid");
        }

        if layout.rows > MAX_ROWS {
            log::warn!(
                target: LOG_TARGET,
                "layout asks for {} rows; only {MAX_ROWS} can be lettered",
                layout.rows
            );
        }

        for row in 0..layout.rows.min(MAX_ROWS) {
            let Ok(first) = SeatId::new(row, 1) else {
                break;
            };
            let mut left = Vec::new();
            let mut right = Vec::new();
            for column in 1..=layout.columns {
                let Ok(id) = SeatId::new(row, column) else {
                    continue;
                };
                let seat = Seat::new(id, booked.contains(&id));
                if column <= layout.aisle_after {
                    left.push(seat);
                } else {
                    right.push(seat);
                }
            }
            self.rows.push(SeatRow {
                letter: first.row_letter(),
                left,
                right,
            });
        }
        log::debug!(
            target: LOG_TARGET,
            "built seat grid: {} rows, {} booked",
            self.rows.len(),
            self.booked_count()
        );
    }

    #[must_use]
    pub fn rows(&self) -> &[SeatRow] {
        &self.rows
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(SeatRow::seats)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        self.seats().find(|seat| seat.id == *id)
    }

    /// True only for seats that exist and are not booked.
    #[must_use]
    pub fn is_interactive(&self, id: &SeatId) -> bool {
        self.seat(id).is_some_and(Seat::is_interactive)
    }

    #[must_use]
    pub fn booked_count(&self) -> usize {
        self.seats().filter(|seat| seat.booked).count()
    }

    /// Mirror the controller's selection onto the per-seat flags.
    pub fn sync_selection(&mut self, selection: &SelectionState) {
        for seat in self.rows.iter_mut().flat_map(SeatRow::seats_mut) {
            seat.selected = !seat.booked && selection.contains(&seat.id);
        }
    }
}
