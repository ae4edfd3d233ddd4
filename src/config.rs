use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind host (e.g., 0.0.0.0)
    pub app_host: String,
    /// HTTP bind port (e.g., 3000)
    pub app_port: u16,

    /// WhatsApp bridge base URL (e.g., http://localhost:8080)
    pub bridge_base_url: Url,
    /// Optional bridge API key, sent as X-Api-Key
    pub bridge_api_key: Option<String>,
    /// Bridge session name
    pub bridge_session: String,

    /// Workflow webhook URL that receives inbound messages
    pub workflow_webhook_url: Url,
    /// Explicit timeout for the webhook call, in seconds
    pub workflow_timeout_secs: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present
        let _ = dotenv();

        let app_host = env_or_default("APP_HOST", "0.0.0.0");
        let app_port = parse_or_default::<u16>("APP_PORT", 3000)?;

        let bridge_base_url = parse_url_required("BRIDGE_BASE_URL")?;
        let bridge_api_key = env::var("BRIDGE_API_KEY").ok();
        let bridge_session = env_or_default("BRIDGE_SESSION", "default");

        let workflow_webhook_url = parse_url_required("WORKFLOW_WEBHOOK_URL")?;
        let workflow_timeout_secs = parse_or_default::<u64>("WORKFLOW_TIMEOUT_SECS", 10)?;

        Ok(Self {
            app_host,
            app_port,
            bridge_base_url,
            bridge_api_key,
            bridge_session,
            workflow_webhook_url,
            workflow_timeout_secs,
        })
    }
}

/* --------------------------- helpers --------------------------- */

fn env_or_default(key: &'static str, default: &'static str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or_default<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(v) => v.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
            name: key,
            value: v,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_url_required(key: &'static str) -> Result<Url, ConfigError> {
    let raw = env::var(key).map_err(|_| ConfigError::MissingVar(key))?;
    Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl {
        name: key,
        value: raw,
    })
}
