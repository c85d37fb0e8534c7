// ── Domain model ──
//
// Typed device and client records. Wire-level optionality is resolved
// here: every field either stays `Option` (emitted as `null`) or has an
// explicit default applied during conversion (see `convert`).

use serde::{Serialize, Serializer};

use crate::inventory::HostId;

/// Default adoption state when the controller omits `state`.
pub const DEFAULT_ADOPTION_STATE: i64 = 1;

/// Type code recorded when the controller omits `type`.
pub const UNKNOWN_DEVICE_TYPE: &str = "unknown";

/// Device category, keyed by the controller's short type code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// `usw`
    Switch,
    /// `uap`
    AccessPoint,
    /// `ugw`
    Gateway,
    /// Any other code (`udm`, `uxg`, `unknown`, ...), kept verbatim.
    Other(String),
}

impl DeviceType {
    /// Exact, case-sensitive match on the controller's type code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "usw" => Self::Switch,
            "uap" => Self::AccessPoint,
            "ugw" => Self::Gateway,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The raw type code as the controller reports it.
    pub fn code(&self) -> &str {
        match self {
            Self::Switch => "usw",
            Self::AccessPoint => "uap",
            Self::Gateway => "ugw",
            Self::Other(code) => code,
        }
    }
}

impl Default for DeviceType {
    fn default() -> Self {
        Self::Other(UNKNOWN_DEVICE_TYPE.into())
    }
}

impl Serialize for DeviceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// A managed network device (switch, access point, gateway, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: Option<String>,
    pub mac: Option<String>,
    pub device_type: DeviceType,
    pub ip: Option<String>,
    pub model: Option<String>,
    pub version: Option<String>,
    /// Controller adoption/connection state; [`DEFAULT_ADOPTION_STATE`] when absent.
    pub adoption_state: i64,
}

impl Device {
    /// Inventory hostname: `name`, falling back to `mac`.
    pub fn host_id(&self) -> HostId {
        HostId::from_candidates(self.name.as_deref(), self.mac.as_deref())
    }
}

/// A connected client (station).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub hostname: Option<String>,
    pub mac: Option<String>,
    pub is_wired: bool,
    pub ip: Option<String>,
    /// Unix epoch seconds.
    pub last_seen: Option<i64>,
}

impl Client {
    /// Inventory hostname: `hostname`, falling back to `mac`.
    pub fn host_id(&self) -> HostId {
        HostId::from_candidates(self.hostname.as_deref(), self.mac.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_match_exactly() {
        assert_eq!(DeviceType::from_code("usw"), DeviceType::Switch);
        assert_eq!(DeviceType::from_code("uap"), DeviceType::AccessPoint);
        assert_eq!(DeviceType::from_code("ugw"), DeviceType::Gateway);
        assert_eq!(DeviceType::from_code("USW"), DeviceType::Other("USW".into()));
        assert_eq!(DeviceType::from_code("udm").code(), "udm");
        assert_eq!(DeviceType::default().code(), "unknown");
    }

    #[test]
    fn empty_name_falls_back_to_mac() {
        let device = Device {
            name: Some(String::new()),
            mac: Some("aa:bb".into()),
            device_type: DeviceType::Switch,
            ip: None,
            model: None,
            version: None,
            adoption_state: DEFAULT_ADOPTION_STATE,
        };
        assert_eq!(device.host_id(), HostId::named("aa:bb"));
    }
}
