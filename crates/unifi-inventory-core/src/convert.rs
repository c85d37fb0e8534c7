// ── Wire → domain conversion ──
//
// Applies the per-field default rules when turning legacy API records
// into domain records. Conversion never fails.
//
// An explicit JSON `null` is treated exactly like an absent key: `type`,
// `state` and `is_wired` all take their defaults rather than emitting
// `null` in hostvars.

use unifi_inventory_api::{LegacyClientEntry, LegacyDevice};

use crate::model::{Client, DEFAULT_ADOPTION_STATE, Device, DeviceType};

/// Missing or `null` `type` becomes `"unknown"`; missing or `null` `state`
/// becomes [`DEFAULT_ADOPTION_STATE`].
impl From<LegacyDevice> for Device {
    fn from(d: LegacyDevice) -> Self {
        Self {
            name: d.name,
            mac: d.mac,
            device_type: d
                .device_type
                .as_deref()
                .map(DeviceType::from_code)
                .unwrap_or_default(),
            ip: d.ip,
            model: d.model,
            version: d.version,
            adoption_state: d.state.unwrap_or(DEFAULT_ADOPTION_STATE),
        }
    }
}

/// Missing or `null` `is_wired` counts as wireless.
impl From<LegacyClientEntry> for Client {
    fn from(c: LegacyClientEntry) -> Self {
        Self {
            hostname: c.hostname,
            mac: c.mac,
            is_wired: c.is_wired.unwrap_or(false),
            ip: c.ip,
            last_seen: c.last_seen,
        }
    }
}
