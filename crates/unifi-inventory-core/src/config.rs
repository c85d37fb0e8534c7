// ── Runtime connection configuration ──
//
// Describes how to reach the controller and which site to inventory.
// The config crate builds one of these from the environment and hands
// it to `Controller::new`; nothing in core reads the environment.

use std::path::PathBuf;
use std::time::Duration;

use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use unifi_inventory_api::ControllerPlatform;
use url::Url;

use crate::error::CoreError;

/// Session credentials for the legacy login endpoint.
///
/// The password is kept exactly as configured (base64-encoded) and only
/// decoded at login time, so a malformed value surfaces as an
/// authentication failure rather than a startup error.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub encoded_password: SecretString,
}

impl Credentials {
    /// Decode the base64 password into its UTF-8 plaintext.
    pub fn decode_password(&self) -> Result<SecretString, CoreError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(self.encoded_password.expose_secret().trim())
            .map_err(|e| CoreError::AuthenticationFailed {
                message: format!("password is not valid base64: {e}"),
            })?;
        let plain = String::from_utf8(bytes).map_err(|_| CoreError::AuthenticationFailed {
            message: "decoded password is not valid UTF-8".into(),
        })?;
        Ok(SecretString::from(plain))
    }
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for one inventory run against a single controller site.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Controller root URL (e.g., `https://ctrl.example:8443`).
    pub url: Url,
    /// Site to inventory (defaults to "default").
    pub site: String,
    pub credentials: Credentials,
    pub platform: ControllerPlatform,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}
