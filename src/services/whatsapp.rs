use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::config::Config;

#[derive(Debug, Serialize)]
struct SendTextOut<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Error)]
pub enum WhatsappError {
    #[error("invalid bridge endpoint: {0}")]
    Endpoint(String),
    #[error("bridge request failed: {0}")]
    Request(String),
    #[error("bridge returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// HTTP client for the WhatsApp bridge's send API. The bridge owns the actual
/// session; this is the only way the adapter puts text on the wire.
#[derive(Clone)]
pub struct WhatsappClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    session: String,
}

impl WhatsappClient {
    pub fn new(cfg: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: cfg.bridge_base_url.clone(),
            api_key: cfg.bridge_api_key.clone(),
            session: cfg.bridge_session.clone(),
        }
    }

    /// Send plain text to a chat.
    pub async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), WhatsappError> {
        self.post_send_text(chat_id, text, None).await
    }

    /// Send text quoting the originating message, the bridge equivalent of a
    /// chat reply. Falls back to a plain send when the inbound id is unknown.
    pub async fn reply(
        &self,
        chat_id: &str,
        reply_to: Option<&str>,
        text: &str,
    ) -> Result<(), WhatsappError> {
        self.post_send_text(chat_id, text, reply_to).await
    }

    async fn post_send_text(
        &self,
        chat_id: &str,
        text: &str,
        reply_to: Option<&str>,
    ) -> Result<(), WhatsappError> {
        let url = self
            .base_url
            .join("/api/sendText")
            .map_err(|e| WhatsappError::Endpoint(e.to_string()))?;

        let payload = SendTextOut {
            session: &self.session,
            chat_id,
            text,
            reply_to,
        };

        let mut req = self.http.post(url).json(&payload);
        if let Some(api_key) = &self.api_key {
            req = req.header("X-Api-Key", api_key);
        }

        let res = req
            .send()
            .await
            .map_err(|e| WhatsappError::Request(e.to_string()))?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(WhatsappError::Status { status, body });
        }
        Ok(())
    }
}
