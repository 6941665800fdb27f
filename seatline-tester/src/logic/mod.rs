pub mod reports;
pub mod scenario;
pub mod seeds;
pub mod simulation;
pub mod tester;

pub use scenario::{expand_scenarios, get_scenario, list_scenarios};
pub use seeds::resolve_seed_inputs;
pub use simulation::Simulator;
pub use tester::*;
