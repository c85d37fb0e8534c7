//! CLI error types with miette diagnostics.
//!
//! Maps config and core errors into user-facing errors with help text
//! and a process exit code. Stdout stays empty on every error path.

use miette::Diagnostic;
use thiserror::Error;

use unifi_inventory_config::ConfigError;
use unifi_inventory_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("Missing required environment variables UNIFI_USERNAME or UNIFI_PASSWORD")]
    #[diagnostic(
        code(unifi_inventory::no_credentials),
        help(
            "Export UNIFI_USERNAME and UNIFI_PASSWORD before running.\n\
             UNIFI_PASSWORD must be base64-encoded, e.g. `printf '%s' \"$pw\" | base64`."
        )
    )]
    NoCredentials,

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unifi_inventory::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(unifi_inventory::config))]
    Config(Box<figment::Error>),

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(unifi_inventory::auth_failed),
        help(
            "{message}\n\
             Verify UNIFI_USERNAME and the base64 UNIFI_PASSWORD, and that\n\
             UNIFI_PLATFORM matches the controller (classic or unifi-os)."
        )
    )]
    AuthFailed { message: String },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(unifi_inventory::connection_failed),
        help(
            "{reason}\n\
             Check UNIFI_HOST / UNIFI_PORT. For self-signed certificates set\n\
             UNIFI_ALLOW_INSECURE=true or point UNIFI_CA_CERT at the CA."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(unifi_inventory::timeout),
        help("Increase UNIFI_TIMEOUT or check controller responsiveness.")
    )]
    Timeout,

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(unifi_inventory::api_error))]
    ApiError { message: String },

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize inventory: {0}")]
    #[diagnostic(code(unifi_inventory::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NoCredentials | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingCredentials => CliError::NoCredentials,
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout => CliError::Timeout,
            other @ CoreError::NotConnected => CliError::ApiError {
                message: other.to_string(),
            },
            CoreError::Api { message, status: _ } => CliError::ApiError { message },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}
