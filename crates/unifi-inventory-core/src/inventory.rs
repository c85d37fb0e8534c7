// ── Inventory document ──
//
// The Ansible dynamic inventory shape:
//
//   all
//   ├── unifi_devices: switches, aps, gateways
//   └── unifi_clients: wired_clients, wireless_clients
//
// plus `_meta.hostvars` so Ansible never needs a per-host `--host` call.
// Every top-level group is always present, even when it has no hosts.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::model::{Client, Device, DeviceType};

// ── Host identifier ─────────────────────────────────────────────────

/// Inventory hostname of a device or client.
///
/// `None` when the record carries neither its primary name nor a MAC. Such
/// a host is still inventoried: it serializes as `null` inside `hosts`
/// lists and as the key `"null"` inside `_meta.hostvars`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostId(Option<String>);

impl HostId {
    /// Key used for a host without any identifier.
    pub const NULL_KEY: &'static str = "null";

    pub fn named(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    pub fn unnamed() -> Self {
        Self(None)
    }

    /// First non-empty candidate wins.
    pub(crate) fn from_candidates(primary: Option<&str>, fallback: Option<&str>) -> Self {
        Self(
            primary
                .filter(|s| !s.is_empty())
                .or(fallback.filter(|s| !s.is_empty()))
                .map(str::to_owned),
        )
    }

    /// The string used as this host's `_meta.hostvars` key.
    pub fn as_key(&self) -> &str {
        self.0.as_deref().unwrap_or(Self::NULL_KEY)
    }
}

impl Serialize for HostId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl From<&str> for HostId {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

// ── Host variables ──────────────────────────────────────────────────

/// Variables attached to a device host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceVars {
    pub mac_address: Option<String>,
    pub ip_address: Option<String>,
    pub model: Option<String>,
    pub version: Option<String>,
    pub device_type: DeviceType,
    pub adoption_state: i64,
    pub unifi_device: bool,
}

impl From<&Device> for DeviceVars {
    fn from(d: &Device) -> Self {
        Self {
            mac_address: d.mac.clone(),
            ip_address: d.ip.clone(),
            model: d.model.clone(),
            version: d.version.clone(),
            device_type: d.device_type.clone(),
            adoption_state: d.adoption_state,
            unifi_device: true,
        }
    }
}

/// Variables attached to a client host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientVars {
    pub mac_address: Option<String>,
    pub ip_address: Option<String>,
    pub hostname: Option<String>,
    pub is_wired: bool,
    pub last_seen: Option<i64>,
    pub unifi_client: bool,
}

impl From<&Client> for ClientVars {
    fn from(c: &Client) -> Self {
        Self {
            mac_address: c.mac.clone(),
            ip_address: c.ip.clone(),
            hostname: c.hostname.clone(),
            is_wired: c.is_wired,
            last_seen: c.last_seen,
            unifi_client: true,
        }
    }
}

/// One `_meta.hostvars` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HostVars {
    Device(DeviceVars),
    Client(ClientVars),
}

// ── Groups ──────────────────────────────────────────────────────────

/// An inventory group: either a parent listing child groups, or a leaf
/// listing hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hosts: Option<Vec<HostId>>,
}

impl Group {
    fn parent(children: &[&'static str]) -> Self {
        Self {
            children: Some(children.to_vec()),
            hosts: None,
        }
    }

    fn leaf() -> Self {
        Self {
            children: None,
            hosts: Some(Vec::new()),
        }
    }

    /// Child group names; empty for leaf groups.
    pub fn children(&self) -> &[&'static str] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Member hosts in insertion order; empty for parent groups.
    pub fn hosts(&self) -> &[HostId] {
        self.hosts.as_deref().unwrap_or_default()
    }

    fn push(&mut self, host: HostId) {
        self.hosts.get_or_insert_with(Vec::new).push(host);
    }
}

// ── Document ────────────────────────────────────────────────────────

/// `_meta` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    #[serde(serialize_with = "serialize_hostvars")]
    pub hostvars: IndexMap<HostId, HostVars>,
}

fn serialize_hostvars<S: Serializer>(
    hostvars: &IndexMap<HostId, HostVars>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(hostvars.len()))?;
    for (id, vars) in hostvars {
        map.serialize_entry(id.as_key(), vars)?;
    }
    map.end()
}

/// Ansible dynamic inventory document.
///
/// Field order is the emitted key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    pub all: Group,
    pub unifi_devices: Group,
    pub switches: Group,
    pub aps: Group,
    pub gateways: Group,
    pub unifi_clients: Group,
    pub wired_clients: Group,
    pub wireless_clients: Group,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::empty()
    }
}

impl Inventory {
    /// The skeleton: every group present, no hosts, no hostvars.
    pub fn empty() -> Self {
        Self {
            meta: Meta::default(),
            all: Group::parent(&["unifi_devices", "unifi_clients"]),
            unifi_devices: Group::parent(&["switches", "aps", "gateways"]),
            switches: Group::leaf(),
            aps: Group::leaf(),
            gateways: Group::leaf(),
            unifi_clients: Group::parent(&["wired_clients", "wireless_clients"]),
            wired_clients: Group::leaf(),
            wireless_clients: Group::leaf(),
        }
    }

    /// Build the document from devices, then clients.
    ///
    /// A client sharing a device's identifier replaces that device's
    /// hostvars entry (the key keeps its original position); both group
    /// memberships remain. Hosts lists are never deduplicated.
    pub fn build(devices: &[Device], clients: &[Client]) -> Self {
        let mut inventory = Self::empty();
        for device in devices {
            inventory.add_device(device);
        }
        for client in clients {
            inventory.add_client(client);
        }
        inventory
    }

    /// Record a device's hostvars and file it under its device sub-group.
    ///
    /// Unrecognised type codes get hostvars but no sub-group.
    pub fn add_device(&mut self, device: &Device) {
        let id = device.host_id();
        self.meta
            .hostvars
            .insert(id.clone(), HostVars::Device(device.into()));

        match device.device_type {
            DeviceType::Switch => self.switches.push(id),
            DeviceType::AccessPoint => self.aps.push(id),
            DeviceType::Gateway => self.gateways.push(id),
            DeviceType::Other(_) => {}
        }
    }

    /// Record a client's hostvars and file it under wired or wireless.
    pub fn add_client(&mut self, client: &Client) {
        let id = client.host_id();
        self.meta
            .hostvars
            .insert(id.clone(), HostVars::Client(client.into()));

        if client.is_wired {
            self.wired_clients.push(id);
        } else {
            self.wireless_clients.push(id);
        }
    }

    /// Look up a host's variables.
    pub fn hostvars(&self, id: &HostId) -> Option<&HostVars> {
        self.meta.hostvars.get(id)
    }

    /// Number of distinct host identifiers.
    pub fn host_count(&self) -> usize {
        self.meta.hostvars.len()
    }

    /// Every leaf group, by name.
    pub fn leaf_groups(&self) -> [(&'static str, &Group); 5] {
        [
            ("switches", &self.switches),
            ("aps", &self.aps),
            ("gateways", &self.gateways),
            ("wired_clients", &self.wired_clients),
            ("wireless_clients", &self.wireless_clients),
        ]
    }
}
