//! Reqres Contract Tests
//!
//! Black-box contract tests for the `reqres.in` mock REST API.
//!
//! The crate holds the scenario catalog (one request/response expectation per
//! endpoint), a runner that executes a scenario in fail-fast or soft mode,
//! and test logging setup. The tests themselves live under `tests/`:
//!
//! - `mocked_reqres`: hermetic, replays canned reqres bodies from a local
//!   mock server
//! - `live_reqres`: hits the real service; enabled with the `live-tests`
//!   feature (`cargo test -p reqres-contract-tests --features live-tests`)

pub mod error;
pub mod logging;
pub mod runner;
pub mod scenarios;

pub use error::ScenarioError;
pub use runner::{run_scenario, verify_scenario};
pub use scenarios::{catalog, scenario, Scenario};
