// ── Controller facade ──
//
// One inventory run: authenticate, fetch devices, fetch clients, build.
// Every step is awaited in order; nothing runs in the background.

use tracing::{debug, info, warn};

use unifi_inventory_api::transport::{TlsMode, TransportConfig};
use unifi_inventory_api::{Error as ApiError, LegacyClient};

use crate::config::{InventoryConfig, TlsVerification};
use crate::error::CoreError;
use crate::inventory::Inventory;
use crate::model::{Client, Device};

/// Facade over the legacy API client for a single controller site.
pub struct Controller {
    config: InventoryConfig,
    legacy_client: Option<LegacyClient>,
}

impl Controller {
    /// Create a new Controller from configuration. Does NOT connect --
    /// call [`connect()`](Self::connect) to authenticate.
    pub fn new(config: InventoryConfig) -> Self {
        Self {
            config,
            legacy_client: None,
        }
    }

    /// Whether a session has been established.
    pub fn is_connected(&self) -> bool {
        self.legacy_client.is_some()
    }

    // ── Connection lifecycle ─────────────────────────────────────

    /// Build the HTTP client and log in.
    ///
    /// A password that does not decode, a transport failure, and a
    /// non-200 login response all fail here; nothing is fetched.
    pub async fn connect(&mut self) -> Result<(), CoreError> {
        let config = &self.config;
        let transport = build_transport(config);

        let client = LegacyClient::new(
            config.url.clone(),
            config.site.clone(),
            config.platform,
            &transport,
        )
        .map_err(|e| match e {
            ApiError::Tls(msg) => CoreError::ConnectionFailed {
                url: config.url.to_string(),
                reason: format!("TLS error: {msg}"),
            },
            other => other.into(),
        })?;

        let password = config.credentials.decode_password()?;
        client
            .login(&config.credentials.username, &password)
            .await
            .map_err(|e| match CoreError::from(e) {
                err @ CoreError::AuthenticationFailed { .. } => err,
                other => CoreError::AuthenticationFailed {
                    message: other.to_string(),
                },
            })?;
        debug!(platform = %config.platform, "session authentication successful");

        self.legacy_client = Some(client);
        Ok(())
    }

    /// Log out, if connected. Failure is logged and otherwise ignored.
    pub async fn disconnect(&mut self) {
        if let Some(client) = self.legacy_client.take() {
            if let Err(e) = client.logout().await {
                warn!(error = %e, "logout failed (non-fatal)");
            }
        }
        debug!("disconnected");
    }

    // ── Fetches ──────────────────────────────────────────────────

    /// Fetch all managed devices for the configured site.
    pub async fn fetch_devices(&self) -> Result<Vec<Device>, CoreError> {
        let records = self.client()?.list_devices().await?;
        Ok(records.into_iter().map(Device::from).collect())
    }

    /// Fetch all currently connected clients for the configured site.
    pub async fn fetch_clients(&self) -> Result<Vec<Client>, CoreError> {
        let records = self.client()?.list_clients().await?;
        Ok(records.into_iter().map(Client::from).collect())
    }

    /// Fetch devices, then clients, and build the inventory.
    ///
    /// A failed fetch degrades that category to an empty list (logged at
    /// `warn`); the document is still built from whatever succeeded. The
    /// output carries no marker distinguishing "none" from "fetch failed".
    pub async fn inventory(&self) -> Result<Inventory, CoreError> {
        // Only a missing session is fatal here.
        self.client()?;

        let devices = or_empty("devices", self.fetch_devices().await);
        let clients = or_empty("clients", self.fetch_clients().await);

        let inventory = Inventory::build(&devices, &clients);
        info!(
            devices = devices.len(),
            clients = clients.len(),
            hosts = inventory.host_count(),
            "inventory built"
        );
        Ok(inventory)
    }

    fn client(&self) -> Result<&LegacyClient, CoreError> {
        self.legacy_client.as_ref().ok_or(CoreError::NotConnected)
    }
}

/// Degrade a failed fetch to an empty list.
fn or_empty<T>(category: &str, fetched: Result<Vec<T>, CoreError>) -> Vec<T> {
    fetched.unwrap_or_else(|e| {
        warn!(error = %e, "failed to fetch {category}; continuing with none");
        Vec::new()
    })
}

fn build_transport(config: &InventoryConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
        cookie_jar: None,
    }
    .with_cookie_jar()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_degrades_to_empty() {
        let fetched: Result<Vec<Device>, CoreError> = Err(CoreError::Api {
            message: "HTTP 500".into(),
            status: Some(500),
        });
        assert!(or_empty("devices", fetched).is_empty());
    }

    #[test]
    fn successful_fetch_passes_through() {
        let fetched: Result<Vec<u8>, CoreError> = Ok(vec![1, 2, 3]);
        assert_eq!(or_empty("devices", fetched), vec![1, 2, 3]);
    }
}
