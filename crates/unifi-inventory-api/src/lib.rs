// unifi-inventory-api: async client for the UniFi controller legacy API
//
// Only the surface the inventory needs: session login/logout and the two
// site-scoped stat endpoints (devices and active stations).

pub mod auth;
pub mod error;
pub mod legacy;
pub mod transport;

pub use auth::{ControllerPlatform, UnknownPlatform};
pub use error::Error;
pub use legacy::LegacyClient;
pub use legacy::models::{LegacyClientEntry, LegacyDevice};
pub use transport::{TlsMode, TransportConfig};
