//! Ordered, capped set of selected seats.
use crate::seat::SeatId;
use serde::{Deserialize, Serialize};

/// Selected seats in the order they were picked.
///
/// Never holds more than `capacity` seats and never holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSelection")]
pub struct SelectionState {
    seats: Vec<SeatId>,
    capacity: usize,
}

#[derive(Deserialize)]
struct StoredSelection {
    seats: Vec<SeatId>,
    capacity: usize,
}

impl TryFrom<StoredSelection> for SelectionState {
    type Error = String;

    fn try_from(stored: StoredSelection) -> Result<Self, Self::Error> {
        let mut selection = Self::new(stored.capacity);
        for id in stored.seats {
            if !selection.push(id) {
                return Err(format!(
                    "seat {id} is a duplicate or exceeds the capacity of {}",
                    stored.capacity
                ));
            }
        }
        Ok(selection)
    }
}

impl SelectionState {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            seats: Vec::new(),
            capacity,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.seats.len() >= self.capacity
    }

    #[must_use]
    pub fn contains(&self, id: &SeatId) -> bool {
        self.seats.contains(id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeatId> {
        self.seats.iter()
    }

    /// Append a seat. Returns `false` without changing anything when the seat
    /// is already present or the selection is full.
    pub fn push(&mut self, id: SeatId) -> bool {
        if self.contains(&id) || self.is_full() {
            return false;
        }
        self.seats.push(id);
        true
    }

    /// Remove a seat, keeping the relative order of the rest.
    pub fn remove(&mut self, id: &SeatId) -> bool {
        let before = self.seats.len();
        self.seats.retain(|seat| seat != id);
        self.seats.len() != before
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }
}
