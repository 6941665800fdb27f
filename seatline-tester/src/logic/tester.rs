use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::scenario::TestScenario;
use super::simulation::{OutcomeCounts, Simulator};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    pub toggles: usize,
    pub limit_rejections: usize,
    pub confirmations: usize,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    simulator: Simulator,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(simulator: Simulator, verbose: bool) -> Self {
        Self { simulator, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut outcomes = OutcomeCounts::default();
        let mut confirmations = 0;
        let mut elapsed = Duration::ZERO;

        for i in 0..iterations {
            let start_time = Instant::now();
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));

            match self.simulator.run(&scenario.plan, iteration_seed) {
                Ok(summary) => {
                    outcomes.selected += summary.outcomes.selected;
                    outcomes.deselected += summary.outcomes.deselected;
                    outcomes.limit_reached += summary.outcomes.limit_reached;
                    outcomes.unavailable += summary.outcomes.unavailable;
                    confirmations += summary.confirmations;

                    if let Some(err) = scenario.plan.evaluate(&summary) {
                        let failure = format!(
                            "Iteration {} (seed {}, steps {}, final seats '{}'): {err}",
                            i + 1,
                            summary.seed,
                            summary.steps,
                            summary.final_seats
                        );
                        if self.verbose {
                            println!("  ❌ {}", failure.clone().red());
                        }
                        failures.push(failure);
                    } else {
                        successes += 1;
                    }
                }
                Err(err) => {
                    log::error!("{}: {err}", scenario.key);
                    failures.push(format!("Iteration {} (seed {iteration_seed}): {err}", i + 1));
                }
            }
            elapsed += start_time.elapsed();
        }

        let average_duration = if iterations == 0 {
            Duration::ZERO
        } else {
            elapsed / u32::try_from(iterations).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            toggles: outcomes.total(),
            limit_rejections: outcomes.limit_reached,
            confirmations,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::get_scenario;

    #[test]
    fn runs_each_seed_once() {
        let tester = LogicTester::new(Simulator::default(), false);
        let scenario = get_scenario("random-walk", 50).unwrap();
        let results = tester.run_scenario(&scenario, &[1, 2, 3], 2);
        assert_eq!(results.len(), 3);
        for result in &results {
            assert!(result.passed, "{:?}", result.failures);
            assert_eq!(result.iterations_run, 2);
            assert_eq!(result.successful_iterations, 2);
            assert!(result.toggles > 0);
        }
    }

    #[test]
    fn broken_config_fails_every_iteration() {
        let config = seatline_core::BookingConfig {
            max_seats: 0,
            ..seatline_core::BookingConfig::default()
        };
        let tester = LogicTester::new(Simulator::new(config), false);
        let scenario = get_scenario("smoke", 0).unwrap();
        let results = tester.run_scenario(&scenario, &[7], 3);
        assert!(!results[0].passed);
        assert_eq!(results[0].failures.len(), 3);
    }

    #[test]
    fn results_round_trip_through_json() {
        let tester = LogicTester::new(Simulator::default(), false);
        let scenario = get_scenario("smoke", 0).unwrap();
        let result = tester.run_scenario(&scenario, &[1], 1).remove(0);
        let json = serde_json::to_string(&result).unwrap();
        let back: ScenarioResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scenario_name, result.scenario_name);
        assert_eq!(back.confirmations, 1);
    }
}
