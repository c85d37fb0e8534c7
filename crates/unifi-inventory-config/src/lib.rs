//! Environment-sourced configuration for the UniFi dynamic inventory.
//!
//! Every setting comes from a `UNIFI_*` variable, merged through figment,
//! then validated once into a `unifi_inventory_core::InventoryConfig`.
//! Nothing downstream reads the environment.
//!
//! Variables are handed to figment as verbatim text, so `UNIFI_SITE=0001`
//! stays `"0001"`; numeric and boolean settings are parsed from that text.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use figment::{Figment, providers::Serialized};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

use unifi_inventory_core::{
    ControllerPlatform, Credentials, InventoryConfig, TlsVerification, UnknownPlatform,
};

mod lenient;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "UNIFI_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables UNIFI_USERNAME or UNIFI_PASSWORD")]
    MissingCredentials,

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Raw settings ────────────────────────────────────────────────────

/// Raw settings as read from the environment, before validation.
///
/// Fields accept any scalar shape, so figments built from typed sources
/// (tests, `Serialized` providers) extract the same way as the environment.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Controller host name or address.
    #[serde(default = "default_host", deserialize_with = "lenient::string")]
    pub host: String,

    #[serde(default = "default_port", deserialize_with = "lenient::number")]
    pub port: u16,

    /// Site name.
    #[serde(default = "default_site", deserialize_with = "lenient::string")]
    pub site: String,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub username: Option<String>,

    /// Base64-encoded password.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub password: Option<String>,

    /// Skip TLS verification: `true`, `1` or `yes`, any case.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub allow_insecure: bool,

    /// Full controller base URL; overrides host and port.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub controller: Option<String>,

    /// `classic` (default) or `unifi-os`.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub platform: Option<String>,

    /// Path to a PEM CA certificate trusted in addition to the system store.
    #[serde(default)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout", deserialize_with = "lenient::number")]
    pub timeout: u64,
}

fn default_host() -> String {
    "ctrl.bitswalk.net".into()
}
fn default_port() -> u16 {
    8443
}
fn default_site() -> String {
    "default".into()
}
fn default_timeout() -> u64 {
    30
}

impl Settings {
    /// Extract settings from an arbitrary figment (tests build their own).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Controller base URL: `UNIFI_CONTROLLER` if set, else `https://{host}:{port}`.
    pub fn base_url(&self) -> Result<url::Url, ConfigError> {
        let raw = self
            .controller
            .clone()
            .unwrap_or_else(|| format!("https://{}:{}", self.host, self.port));
        raw.parse().map_err(|e| ConfigError::Validation {
            field: "controller".into(),
            reason: format!("invalid URL {raw}: {e}"),
        })
    }

    /// Validate into the core configuration.
    ///
    /// Missing (or empty) username or password is fatal.
    pub fn into_inventory_config(self) -> Result<InventoryConfig, ConfigError> {
        let (Some(username), Some(password)) = (
            self.username.clone().filter(|s| !s.is_empty()),
            self.password.clone().filter(|s| !s.is_empty()),
        ) else {
            return Err(ConfigError::MissingCredentials);
        };

        let url = self.base_url()?;

        let platform = match self.platform.as_deref() {
            None | Some("") => ControllerPlatform::default(),
            Some(name) => name.parse().map_err(|e: UnknownPlatform| ConfigError::Validation {
                field: "platform".into(),
                reason: e.to_string(),
            })?,
        };

        let tls = if self.allow_insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(path) = self.ca_cert {
            TlsVerification::CustomCa(path)
        } else {
            TlsVerification::SystemDefaults
        };

        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        Ok(InventoryConfig {
            url,
            site: self.site,
            credentials: Credentials {
                username,
                encoded_password: SecretString::from(password),
            },
            platform,
            tls,
            timeout: Duration::from_secs(self.timeout),
        })
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// The figment reading `UNIFI_*` from the process environment.
pub fn figment() -> Figment {
    Figment::new().merge(Serialized::defaults(prefixed_vars(std::env::vars_os())))
}

/// `UNIFI_*` variables keyed by the lowercased remainder, values untouched.
/// Names or values that are not valid UTF-8 are ignored.
fn prefixed_vars<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .filter_map(|(key, value)| {
            let name = key.strip_prefix(ENV_PREFIX)?.to_ascii_lowercase();
            (!name.is_empty()).then_some((name, value))
        })
        .collect()
}

/// Load and validate configuration from the process environment.
pub fn load_inventory_config() -> Result<InventoryConfig, ConfigError> {
    Settings::from_figment(&figment())?.into_inventory_config()
}
