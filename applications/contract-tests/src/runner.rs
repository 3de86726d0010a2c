//! Scenario execution.

use crate::error::{Result, ScenarioError};
use crate::scenarios::Scenario;
use reqres_assert::{ResponseAssertExt, SoftAssert};
use reqres_client::{ApiResponse, ReqresClient};
use tracing::{info, warn};

async fn send(client: &ReqresClient, scenario: &Scenario) -> Result<ApiResponse> {
    let client_error = |source| ScenarioError::Client {
        scenario: scenario.name.to_string(),
        source,
    };

    let spec = scenario.request().map_err(client_error)?;
    let response = client.send(spec).await.map_err(client_error)?;

    info!(
        scenario = scenario.name,
        status = %response.status(),
        "Scenario response received"
    );
    Ok(response)
}

/// Run a scenario fail-fast: panics at the first unmet expectation.
///
/// Transport failures are returned as errors.
pub async fn run_scenario(client: &ReqresClient, scenario: &Scenario) -> Result<ApiResponse> {
    let response = send(client, scenario).await?;

    let then = response
        .then()
        .status_code(scenario.expected_status)
        .body_fields(
            scenario
                .expected_fields
                .iter()
                .map(|(path, expected)| (*path, expected.clone())),
        );
    if let Some(body) = scenario.expected_body {
        then.body_eq(body);
    }

    Ok(response)
}

/// Run a scenario in soft mode: every expectation is checked and all
/// failures come back together in [`ScenarioError::Failed`].
pub async fn verify_scenario(client: &ReqresClient, scenario: &Scenario) -> Result<ApiResponse> {
    let response = send(client, scenario).await?;

    let mut soft = SoftAssert::new();
    let then = response.then();
    soft.record(then.check_status(scenario.expected_status));
    for (path, expected) in &scenario.expected_fields {
        soft.record(then.check_field(path, expected));
    }
    if let Some(body) = scenario.expected_body {
        soft.record(then.check_body(body));
    }

    match soft.finish() {
        Ok(()) => Ok(response),
        Err(source) => {
            warn!(scenario = scenario.name, failures = source.failures.len(), "Scenario failed");
            Err(ScenarioError::Failed {
                scenario: scenario.name.to_string(),
                source,
            })
        }
    }
}
