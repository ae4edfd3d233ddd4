use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body POSTed to the workflow webhook for each inbound message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkflowRequest {
    pub from: String,
    pub body: String,
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub message_type: String,
}

/// Whatever the workflow answers. Only `reply` is acted on; everything else
/// is tolerated and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkflowResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(flatten, default)]
    pub extra: HashMap<String, Value>,
}
