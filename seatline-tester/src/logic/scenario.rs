use super::simulation::{DrivePolicy, SimulationPlan, SimulationSummary};

pub const DEFAULT_STEPS: usize = 200;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub plan: SimulationPlan,
}

impl TestScenario {
    #[must_use]
    pub const fn new(key: &'static str, name: &'static str, plan: SimulationPlan) -> Self {
        Self { key, name, plan }
    }
}

const CATALOG: &[(&str, &str)] = &[
    ("smoke", "Smoke Test - A2, B1, C3 booking"),
    ("fill-and-clear", "Fill to Capacity and Clear"),
    ("limit-pressure", "Seat Limit Pressure"),
    ("random-walk", "Random Interaction Walk"),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Look a scenario up by key, with `steps` applied to the randomized ones.
pub fn get_scenario(key: &str, steps: usize) -> Option<TestScenario> {
    let key = key.to_lowercase();
    let (key, name) = CATALOG.iter().copied().find(|(k, _)| *k == key)?;
    let plan = match key {
        "smoke" => SimulationPlan::new(DrivePolicy::Scripted, 0).with_expectation(single_booking),
        "fill-and-clear" => SimulationPlan::new(DrivePolicy::FillAndClear, steps)
            .with_expectation(reached_capacity)
            .with_expectation(every_confirm_closed),
        "limit-pressure" => SimulationPlan::new(DrivePolicy::LimitPressure, steps)
            .with_expectation(notices_match_rejections),
        "random-walk" => SimulationPlan::new(DrivePolicy::RandomWalk, steps)
            .with_expectation(notices_match_rejections),
        _ => return None,
    };
    Some(TestScenario::new(key, name, plan))
}

pub fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = crate::common::split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s.eq_ignore_ascii_case("all")) {
        scenarios.retain(|s| !s.eq_ignore_ascii_case("all"));
        for (key, _) in CATALOG {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push((*key).to_string());
            }
        }
    }
    scenarios
}

fn single_booking(summary: &SimulationSummary) -> Result<(), String> {
    if summary.confirmations == 1 && summary.closes == 1 {
        Ok(())
    } else {
        Err(format!(
            "expected one confirm/close cycle, saw {} confirmations and {} closes",
            summary.confirmations, summary.closes
        ))
    }
}

fn reached_capacity(summary: &SimulationSummary) -> Result<(), String> {
    if summary.steps > 0 && summary.peak_selection == 0 {
        return Err("selection never grew".to_string());
    }
    // With no seat left over once the selection is full, the cap cannot be hit.
    let cap_reachable = summary.open_seats > summary.capacity;
    if cap_reachable && summary.confirmations > 0 && summary.outcomes.limit_reached == 0 {
        return Err("cap was never hit".to_string());
    }
    Ok(())
}

fn every_confirm_closed(summary: &SimulationSummary) -> Result<(), String> {
    if summary.confirmations == summary.closes {
        Ok(())
    } else {
        Err(format!(
            "{} confirmations but {} closes",
            summary.confirmations, summary.closes
        ))
    }
}

fn notices_match_rejections(summary: &SimulationSummary) -> Result<(), String> {
    if summary.notifications == summary.outcomes.limit_reached {
        Ok(())
    } else {
        Err(format!(
            "{} notices for {} limit rejections",
            summary.notifications, summary.outcomes.limit_reached
        ))
    }
}
