use tracing::{debug, info, warn};

use crate::{
    AppState, fallback,
    models::{bridge::MessagePayload, workflow::WorkflowRequest},
    services::workflow,
};

/// Handle one inbound message end to end: forward it to the workflow webhook,
/// relay a non-empty `reply`, or substitute the local fallback reply when the
/// webhook call fails. A success without a `reply` field sends nothing.
pub async fn handle_message(state: AppState, msg: MessagePayload) {
    info!("Message from {}: {}", msg.from, msg.body);

    let req = WorkflowRequest {
        from: msg.from.clone(),
        body: msg.body.clone(),
        timestamp: msg.timestamp,
        message_type: msg.message_type.clone(),
    };

    match workflow::forward_message(&state.http, &state.cfg, &req).await {
        Ok(res) => match res.reply.filter(|reply| !reply.is_empty()) {
            Some(reply) => deliver_reply(&state, &msg, &reply).await,
            None => debug!("workflow returned no reply for {}", msg.from),
        },
        Err(err) => {
            warn!("workflow call failed for {}: {err}", msg.from);
            let reply = fallback::simple_reply(&msg.body);
            deliver_reply(&state, &msg, &reply).await;
        }
    }
}

/// Deliver one reply inside its own failure boundary: a bridge send error is
/// logged and swallowed so it cannot crash the message path or re-trigger the
/// webhook error handling.
async fn deliver_reply(state: &AppState, msg: &MessagePayload, text: &str) {
    match state.whatsapp.reply(&msg.from, msg.id.as_deref(), text).await {
        Ok(()) => info!("Sent reply to {}", msg.from),
        Err(err) => warn!("failed to deliver reply to {}: {err}", msg.from),
    }
}
