//! Configuration types, built from environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Twilio credentials.
///
/// Absence only disables provider-side delivery; the conversation
/// logic runs without them.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: SecretString,
    pub whatsapp_number: String,
    pub secret_key: String,
}

impl TwilioConfig {
    /// Build from environment variables. Returns `None` when
    /// `TWILIO_ACCOUNT_SID` is not set.
    pub fn from_env() -> Option<Self> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok()?;
        let auth_token =
            SecretString::from(std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default());
        let whatsapp_number = std::env::var("TWILIO_WHATSAPP_NUMBER").unwrap_or_default();
        let secret_key =
            std::env::var("SECRET_KEY").unwrap_or_else(|_| "dev-secret-key".to_string());

        Some(Self {
            account_sid,
            auth_token,
            whatsapp_number,
            secret_key,
        })
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Directory holding the convenio templates.
    pub templates_dir: PathBuf,
    /// Directory where generated documents are written.
    pub output_dir: PathBuf,
    /// Value substituted for the `[LUGAR]` placeholder.
    pub place: String,
    /// Sessions idle longer than this are evicted.
    pub session_idle_timeout: Duration,
    /// How often the prune task runs.
    pub prune_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            templates_dir: PathBuf::from("documents"),
            output_dir: PathBuf::from("output"),
            place: "Buenos Aires, Argentina".to_string(),
            session_idle_timeout: Duration::from_secs(3600), // 1 hour
            prune_interval: Duration::from_secs(60),
        }
    }
}

impl AppConfig {
    /// Build from `CONVENIO_*` environment variables, falling back to
    /// defaults for anything unset. A set-but-unparsable variable is
    /// rejected rather than silently defaulted.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match std::env::var("CONVENIO_PORT") {
            Ok(raw) => parse_value("CONVENIO_PORT", &raw)?,
            Err(_) => defaults.port,
        };
        let session_idle_timeout = match std::env::var("CONVENIO_SESSION_TTL_SECS") {
            Ok(raw) => Duration::from_secs(parse_value("CONVENIO_SESSION_TTL_SECS", &raw)?),
            Err(_) => defaults.session_idle_timeout,
        };

        Ok(Self {
            port,
            templates_dir: std::env::var("CONVENIO_TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.templates_dir),
            output_dir: std::env::var("CONVENIO_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            place: std::env::var("CONVENIO_LUGAR").unwrap_or(defaults.place),
            session_idle_timeout,
            prune_interval: defaults.prune_interval,
        })
    }
}

/// Parse a configuration value, naming the offending variable on
/// failure.
fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse {raw:?}"),
    })
}
