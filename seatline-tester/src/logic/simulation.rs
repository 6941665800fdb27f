use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seatline_core::{
    BookingConfig, BookingController, CloseReason, CollectingNotifier, ConfigError,
    ConfirmationSnapshot, ScrollFlag, SeatId, ToggleOutcome, TripField,
};
use serde::Serialize;
use std::collections::BTreeSet;

pub type HeadlessController = BookingController<CollectingNotifier, ScrollFlag>;

const CLOSE_REASONS: [CloseReason; 4] = [
    CloseReason::CloseButton,
    CloseReason::Continue,
    CloseReason::Overlay,
    CloseReason::Escape,
];

const TRIP_EDITS: &[(TripField, &str)] = &[
    (TripField::Origin, "Sylhet"),
    (TripField::Destination, "Khulna"),
    (TripField::Date, "2025-01-05"),
    (TripField::Date, "not-a-date"),
    (TripField::Time, "14:05"),
    (TripField::Time, "00:30"),
];

/// How a run picks its next interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrivePolicy {
    /// Fixed A2, B1, C3 booking with exact summary checks; ignores the step count.
    Scripted,
    /// Fill to the cap, bounce off it once, confirm, close, repeat.
    FillAndClear,
    /// Sit at the cap and keep clicking other seats.
    LimitPressure,
    /// Any interaction, uniformly mixed.
    RandomWalk,
}

pub type Expectation = fn(&SimulationSummary) -> Result<(), String>;

#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub policy: DrivePolicy,
    pub steps: usize,
    expectations: Vec<Expectation>,
}

impl SimulationPlan {
    #[must_use]
    pub fn new(policy: DrivePolicy, steps: usize) -> Self {
        Self {
            policy,
            steps,
            expectations: vec![no_violations],
        }
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// First failed expectation, if any.
    pub fn evaluate(&self, summary: &SimulationSummary) -> Option<String> {
        self.expectations
            .iter()
            .find_map(|expectation| expectation(summary).err())
    }
}

fn no_violations(summary: &SimulationSummary) -> Result<(), String> {
    match summary.violations.first() {
        None => Ok(()),
        Some(first) => Err(format!(
            "{} invariant violation(s), first: {first}",
            summary.violations.len()
        )),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub selected: usize,
    pub deselected: usize,
    pub limit_reached: usize,
    pub unavailable: usize,
}

impl OutcomeCounts {
    fn record(&mut self, outcome: ToggleOutcome) {
        match outcome {
            ToggleOutcome::Selected => self.selected += 1,
            ToggleOutcome::Deselected => self.deselected += 1,
            ToggleOutcome::LimitReached => self.limit_reached += 1,
            ToggleOutcome::Unavailable => self.unavailable += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.selected + self.deselected + self.limit_reached + self.unavailable
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub seed: u64,
    pub policy: DrivePolicy,
    pub steps: usize,
    pub outcomes: OutcomeCounts,
    pub confirmations: usize,
    pub closes: usize,
    pub notifications: usize,
    pub peak_selection: usize,
    /// Selection cap from the config under test.
    pub capacity: usize,
    /// Seats in the grid that are not booked.
    pub open_seats: usize,
    pub final_seats: String,
    pub final_total: String,
    pub violations: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("could not build controller: {0}")]
    Config(#[from] ConfigError),
}

/// Drives a headless controller according to a plan and records what happened.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: BookingConfig,
}

impl Simulator {
    #[must_use]
    pub const fn new(config: BookingConfig) -> Self {
        Self { config }
    }

    /// Run one plan with one seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the controller cannot be built from the config.
    pub fn run(&self, plan: &SimulationPlan, seed: u64) -> Result<SimulationSummary, SimulationError> {
        let mut run = Run::new(&self.config, plan.policy, seed)?;
        match plan.policy {
            DrivePolicy::Scripted => run.scripted(),
            DrivePolicy::FillAndClear => run.fill_and_clear(plan.steps),
            DrivePolicy::LimitPressure => run.limit_pressure(plan.steps),
            DrivePolicy::RandomWalk => run.random_walk(plan.steps),
        }
        Ok(run.finish())
    }
}

struct Run {
    ctl: HeadlessController,
    notifier: CollectingNotifier,
    scroll: ScrollFlag,
    booked: BTreeSet<SeatId>,
    seats: Vec<SeatId>,
    rng: ChaCha8Rng,
    frozen: Option<ConfirmationSnapshot>,
    summary: SimulationSummary,
}

impl Run {
    fn new(config: &BookingConfig, policy: DrivePolicy, seed: u64) -> Result<Self, SimulationError> {
        let notifier = CollectingNotifier::default();
        let scroll = ScrollFlag::default();
        let ctl = BookingController::from_config(config, notifier.clone(), scroll.clone())?;
        let booked = config.booked_seat_ids()?;
        let seats = ctl.grid().seats().map(|seat| seat.id).collect();
        let open_seats = ctl.grid().seats().filter(|seat| seat.is_interactive()).count();
        let capacity = ctl.selection().capacity();
        Ok(Self {
            ctl,
            notifier,
            scroll,
            booked,
            seats,
            rng: ChaCha8Rng::seed_from_u64(seed),
            frozen: None,
            summary: SimulationSummary {
                seed,
                policy,
                steps: 0,
                outcomes: OutcomeCounts::default(),
                confirmations: 0,
                closes: 0,
                notifications: 0,
                peak_selection: 0,
                capacity,
                open_seats,
                final_seats: String::new(),
                final_total: String::new(),
                violations: Vec::new(),
            },
        })
    }

    fn violation(&mut self, message: String) {
        log::debug!("seed {} step {}: {message}", self.summary.seed, self.summary.steps);
        self.summary.violations.push(message);
    }

    fn expect_eq(&mut self, what: &str, actual: &str, expected: &str) {
        if actual != expected {
            self.violation(format!("{what}: expected {expected:?}, got {actual:?}"));
        }
    }

    fn open_seats(&self) -> Vec<SeatId> {
        self.seats
            .iter()
            .copied()
            .filter(|seat| !self.booked.contains(seat) && !self.ctl.selection().contains(seat))
            .collect()
    }

    fn pick_open_seat(&mut self) -> Option<SeatId> {
        let open = self.open_seats();
        open.choose(&mut self.rng).copied()
    }

    fn pick_any_seat(&mut self) -> SeatId {
        let index = self.rng.gen_range(0..self.seats.len());
        self.seats[index]
    }

    fn random_close_reason(&mut self) -> CloseReason {
        CLOSE_REASONS[self.rng.gen_range(0..CLOSE_REASONS.len())]
    }

    fn toggle(&mut self, seat: SeatId) -> ToggleOutcome {
        let before = self.ctl.selection().clone();
        let notices = self.notifier.len();
        let outcome = self.ctl.toggle_seat(&seat);
        self.summary.outcomes.record(outcome);

        match outcome {
            ToggleOutcome::Selected => {
                if before.contains(&seat) || before.is_full() {
                    self.violation(format!("{seat} selected from {:?}", before.as_slice()));
                }
            }
            ToggleOutcome::Deselected => {
                if !before.contains(&seat) {
                    self.violation(format!("{seat} deselected but was not selected"));
                }
            }
            ToggleOutcome::LimitReached => {
                if self.ctl.selection() != &before {
                    self.violation(format!("limit rejection of {seat} changed the selection"));
                }
                if self.notifier.len() != notices + 1 {
                    self.violation(format!("limit rejection of {seat} did not notify exactly once"));
                }
            }
            ToggleOutcome::Unavailable => {
                if !self.booked.contains(&seat) {
                    self.violation(format!("{seat} reported unavailable but is not booked"));
                }
                if self.ctl.selection() != &before {
                    self.violation(format!("booked seat {seat} changed the selection"));
                }
            }
        }
        if outcome != ToggleOutcome::LimitReached && self.notifier.len() != notices {
            self.violation(format!("unexpected notice after {outcome:?} on {seat}"));
        }
        self.after_step();
        outcome
    }

    fn confirm(&mut self) -> bool {
        let was_open = self.ctl.modal().is_open();
        let opened = self.ctl.confirm();
        if opened {
            self.summary.confirmations += 1;
            if was_open || self.ctl.selection().is_empty() {
                self.violation("confirm opened the modal from an invalid state".to_string());
            }
            self.frozen = self.ctl.modal().snapshot().cloned();
            let expected_seats = format!("Seats: {}", self.ctl.summary().seat_list);
            let expected_total = format!("Total: {}", self.ctl.summary().total_text);
            if let Some(snapshot) = self.frozen.clone() {
                self.expect_eq("snapshot seats", &snapshot.seats_text, &expected_seats);
                self.expect_eq("snapshot total", &snapshot.total_text, &expected_total);
            } else {
                self.violation("modal opened without a snapshot".to_string());
            }
        } else if !was_open && !self.ctl.selection().is_empty() {
            self.violation("confirm refused a non-empty selection".to_string());
        }
        self.after_step();
        opened
    }

    fn close(&mut self, reason: CloseReason) -> bool {
        let closed = self.ctl.close_modal(reason);
        if closed {
            self.summary.closes += 1;
            self.frozen = None;
            if !self.ctl.selection().is_empty() {
                self.violation(format!("selection survived close via {reason:?}"));
            }
        }
        self.after_step();
        closed
    }

    fn edit_trip(&mut self) {
        let (field, value) = TRIP_EDITS[self.rng.gen_range(0..TRIP_EDITS.len())];
        self.ctl.update_trip_field(field, value);
        if self.ctl.trip().field(field) != value {
            self.violation(format!("trip field {field:?} did not take {value:?}"));
        }
        self.after_step();
    }

    fn after_step(&mut self) {
        self.summary.steps += 1;
        let len = self.ctl.selection().len();
        self.summary.peak_selection = self.summary.peak_selection.max(len);
        self.check_invariants();
    }

    fn check_invariants(&mut self) {
        let mut problems = Vec::new();
        let selected = self.ctl.selection().as_slice().to_vec();
        let capacity = self.ctl.selection().capacity();

        if selected.len() > capacity {
            problems.push(format!("selection {} over cap {capacity}", selected.len()));
        }
        let unique: BTreeSet<_> = selected.iter().collect();
        if unique.len() != selected.len() {
            problems.push(format!("duplicate seats in {selected:?}"));
        }
        if let Some(seat) = selected.iter().find(|seat| self.booked.contains(seat)) {
            problems.push(format!("booked seat {seat} is selected"));
        }

        let summary = self.ctl.summary();
        if summary.seat_count != selected.len() {
            problems.push(format!("summary count {} != {}", summary.seat_count, selected.len()));
        }
        let expected_total = self.ctl.pricing().total(selected.len());
        if summary.total_price != expected_total {
            problems.push(format!("total {} != {expected_total}", summary.total_price));
        }
        if summary.action.enabled == selected.is_empty() {
            problems.push("action enabled state disagrees with selection".to_string());
        }

        let flagged = self.ctl.grid().seats().filter(|seat| seat.selected).count();
        if flagged != selected.len() {
            problems.push(format!("grid flags {flagged} seats, selection has {}", selected.len()));
        }
        if self.scroll.is_locked() != self.ctl.modal().is_open() {
            problems.push("scroll lock out of sync with modal".to_string());
        }
        if self.ctl.modal().snapshot() != self.frozen.as_ref() {
            problems.push("modal snapshot changed while open".to_string());
        }

        for problem in problems {
            self.violation(problem);
        }
    }

    fn scripted(&mut self) {
        for raw in ["A2", "B1", "C3"] {
            match raw.parse::<SeatId>() {
                Ok(seat) => {
                    self.toggle(seat);
                }
                Err(err) => self.violation(format!("bad scripted seat {raw}: {err}")),
            }
        }
        let seat_list = self.ctl.summary().seat_list.clone();
        let total = self.ctl.summary().total_text.clone();
        let label = self.ctl.summary().action.label;
        self.expect_eq("seat list", &seat_list, "A2, B1, C3");
        self.expect_eq("total", &total, "৳1680");
        self.expect_eq("action label", label, "Confirm Booking");

        self.confirm();
        self.close(CloseReason::Continue);
        let seat_list = self.ctl.summary().seat_list.clone();
        let label = self.ctl.summary().action.label;
        self.expect_eq("seat list after close", &seat_list, "None");
        self.expect_eq("action label after close", label, "Select Seats First");
    }

    fn fill_and_clear(&mut self, rounds: usize) {
        for _ in 0..rounds {
            while !self.ctl.selection().is_full() {
                let Some(seat) = self.pick_open_seat() else {
                    break;
                };
                self.toggle(seat);
            }
            if let Some(extra) = self.pick_open_seat() {
                let outcome = self.toggle(extra);
                if self.ctl.selection().is_full() && outcome != ToggleOutcome::LimitReached {
                    self.violation(format!("extra seat {extra} at cap gave {outcome:?}"));
                }
            }
            self.confirm();
            let reason = self.random_close_reason();
            self.close(reason);
        }
    }

    fn limit_pressure(&mut self, steps: usize) {
        while !self.ctl.selection().is_full() {
            let Some(seat) = self.pick_open_seat() else {
                return;
            };
            self.toggle(seat);
        }
        for _ in 0..steps {
            if self.rng.gen_ratio(1, 5) {
                let selected = self.ctl.selection().as_slice().to_vec();
                if let Some(seat) = selected.choose(&mut self.rng).copied() {
                    self.toggle(seat);
                }
                if let Some(seat) = self.pick_open_seat() {
                    self.toggle(seat);
                }
                continue;
            }
            let seat = self.pick_any_seat();
            if self.ctl.selection().contains(&seat) {
                continue;
            }
            let outcome = self.toggle(seat);
            if !matches!(outcome, ToggleOutcome::LimitReached | ToggleOutcome::Unavailable) {
                self.violation(format!("{seat} at cap gave {outcome:?}"));
            }
        }
    }

    fn random_walk(&mut self, steps: usize) {
        for _ in 0..steps {
            match self.rng.gen_range(0..10) {
                0 => {
                    self.confirm();
                }
                1 => {
                    let reason = self.random_close_reason();
                    self.close(reason);
                }
                2 => self.edit_trip(),
                _ => {
                    let seat = self.pick_any_seat();
                    self.toggle(seat);
                }
            }
        }
    }

    fn finish(mut self) -> SimulationSummary {
        self.summary.notifications = self.notifier.len();
        self.summary.final_seats = self.ctl.summary().seat_list.clone();
        self.summary.final_total = self.ctl.summary().total_text.clone();
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_run_is_clean() {
        let summary = Simulator::default()
            .run(&SimulationPlan::new(DrivePolicy::Scripted, 0), 1)
            .unwrap();
        assert!(summary.violations.is_empty(), "{:?}", summary.violations);
        assert_eq!(summary.outcomes.selected, 3);
        assert_eq!(summary.confirmations, 1);
        assert_eq!(summary.closes, 1);
        assert_eq!(summary.final_seats, "None");
        assert_eq!(summary.final_total, "৳0");
    }

    #[test]
    fn random_policies_hold_invariants_across_seeds() {
        let simulator = Simulator::default();
        for policy in [
            DrivePolicy::FillAndClear,
            DrivePolicy::LimitPressure,
            DrivePolicy::RandomWalk,
        ] {
            for seed in 0..8 {
                let plan = SimulationPlan::new(policy, 60);
                let summary = simulator.run(&plan, seed).unwrap();
                assert_eq!(plan.evaluate(&summary), None, "{policy:?} seed {seed}");
                assert_eq!(summary.notifications, summary.outcomes.limit_reached);
            }
        }
    }

    #[test]
    fn same_seed_replays_identically() {
        let simulator = Simulator::default();
        let plan = SimulationPlan::new(DrivePolicy::RandomWalk, 120);
        let a = simulator.run(&plan, 42).unwrap();
        let b = simulator.run(&plan, 42).unwrap();
        assert_eq!(a.outcomes, b.outcomes);
        assert_eq!(a.final_seats, b.final_seats);
        assert_eq!(a.steps, b.steps);
    }

    #[test]
    fn fill_and_clear_bounces_off_the_cap() {
        let summary = Simulator::default()
            .run(&SimulationPlan::new(DrivePolicy::FillAndClear, 5), 9)
            .unwrap();
        assert_eq!(summary.peak_selection, 4);
        assert_eq!(summary.outcomes.limit_reached, 5);
        assert_eq!(summary.confirmations, 5);
        assert_eq!(summary.closes, 5);
        assert_eq!((summary.capacity, summary.open_seats), (4, 33));
    }

    #[test]
    fn expectations_report_first_failure() {
        fn never(_: &SimulationSummary) -> Result<(), String> {
            Err("nope".to_string())
        }
        let plan = SimulationPlan::new(DrivePolicy::Scripted, 0).with_expectation(never);
        let summary = Simulator::default().run(&plan, 0).unwrap();
        assert_eq!(plan.evaluate(&summary), Some("nope".to_string()));
    }
}
