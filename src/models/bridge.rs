use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Event envelope the bridge POSTs to `/webhooks/whatsapp`. The payload shape
/// depends on the event name, so it stays loose here and is parsed per event
/// in the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BridgeWebhook {
    #[serde(default)]
    pub id: Option<String>,
    pub event: String,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub payload: Option<Value>,
}

/// Payload of a `qr` event: the pairing string to render for scanning.
#[derive(Debug, Clone, Deserialize)]
pub struct QrPayload {
    pub qr: String,
}

/// Payload of a `message` event. One inbound chat message, consumed
/// immediately and never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub id: Option<String>,
    pub from: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(rename = "type", default = "default_message_type")]
    pub message_type: String,
    #[serde(rename = "fromMe", default)]
    pub from_me: bool,
}

fn default_message_type() -> String {
    "chat".to_string()
}
