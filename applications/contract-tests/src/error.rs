//! Scenario runner errors.

use reqres_assert::SoftAssertionError;
use reqres_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    /// The request could not be built or sent
    #[error("Scenario {scenario}: {source}")]
    Client {
        scenario: String,
        #[source]
        source: ClientError,
    },

    /// The response did not meet the scenario's expectations
    #[error("Scenario {scenario}: {source}")]
    Failed {
        scenario: String,
        #[source]
        source: SoftAssertionError,
    },
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
