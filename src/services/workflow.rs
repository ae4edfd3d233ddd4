use std::time::Duration;

use thiserror::Error;

use crate::config::Config;
use crate::models::workflow::{WorkflowRequest, WorkflowResponse};

/// Failure kinds of the webhook call. All of them feed the fallback path;
/// timeout is kept distinct so it shows up as such in the logs.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("workflow webhook timed out")]
    Timeout,
    #[error("workflow request failed: {0}")]
    Request(String),
    #[error("workflow webhook returned status {0}")]
    Status(u16),
    #[error("workflow response was not valid JSON: {0}")]
    Json(String),
}

/// POST one inbound message to the workflow webhook and parse its answer.
/// Bounded by the configured timeout so a stuck workflow cannot hold a
/// user-facing reply open indefinitely.
pub async fn forward_message(
    http: &reqwest::Client,
    cfg: &Config,
    req: &WorkflowRequest,
) -> Result<WorkflowResponse, WorkflowError> {
    let res = http
        .post(cfg.workflow_webhook_url.clone())
        .timeout(Duration::from_secs(cfg.workflow_timeout_secs))
        .json(req)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                WorkflowError::Timeout
            } else {
                WorkflowError::Request(e.to_string())
            }
        })?;

    if !res.status().is_success() {
        return Err(WorkflowError::Status(res.status().as_u16()));
    }

    res.json::<WorkflowResponse>()
        .await
        .map_err(|e| WorkflowError::Json(e.to_string()))
}
