use std::sync::atomic::Ordering;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    AppState,
    models::bridge::{BridgeWebhook, MessagePayload, QrPayload},
};

pub mod message;

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("Payload is missing")]
    MissingPayload,

    #[error("Invalid {event} payload: {source}")]
    Payload {
        event: &'static str,
        source: serde_json::Error,
    },
}

/// Route one bridge event. Lifecycle events update process state and log;
/// message events are enqueued on the sender's queue and handled after the
/// webhook route has already acknowledged the bridge.
pub async fn dispatch_event(webhook: BridgeWebhook, state: AppState) -> Result<(), HandleError> {
    match webhook.event.as_str() {
        "qr" => {
            let payload = webhook.payload.ok_or(HandleError::MissingPayload)?;
            let qr: QrPayload = serde_json::from_value(payload).map_err(|source| {
                HandleError::Payload {
                    event: "qr",
                    source,
                }
            })?;
            info!("Scan this pairing code with WhatsApp: {}", qr.qr);
            info!("Open WhatsApp on your phone > Settings > Linked Devices > Link a Device");
        }
        "ready" => {
            state.ready.store(true, Ordering::SeqCst);
            info!("WhatsApp session is ready, listening for messages");
        }
        "message" => {
            let payload = webhook.payload.ok_or(HandleError::MissingPayload)?;
            let msg: MessagePayload = serde_json::from_value(payload).map_err(|source| {
                HandleError::Payload {
                    event: "message",
                    source,
                }
            })?;

            if msg.from_me {
                // Own outgoing messages echo back through the bridge; skip them.
                return Ok(());
            }

            let key = msg.from.clone();
            let task_state = state.clone();
            state
                .queues
                .enqueue(&key, message::handle_message(task_state, msg))
                .await;
        }
        other => {
            // The bridge emits more lifecycle events than we consume.
            debug!("ignoring bridge event '{other}'");
        }
    }
    Ok(())
}
