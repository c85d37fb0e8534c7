// Legacy API response types
//
// Every field the inventory reads is optional: controllers omit fields
// freely across firmware versions, and a sparse record must still decode.
// Scalar fields go through `lenient`, so a mistyped value never costs the
// record.

use serde::{Deserialize, Serialize};

use super::lenient;

// ── Response Envelope ────────────────────────────────────────────────

/// Standard UniFi legacy API response envelope.
///
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
///
/// A body without `data` decodes as an empty list.
#[derive(Debug, Deserialize)]
pub struct LegacyResponse<T> {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Metadata from the legacy envelope. `rc` == `"ok"` means success.
#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub rc: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

// ── Device ───────────────────────────────────────────────────────────

/// Device object from `stat/device`.
///
/// The legacy API can return 100+ fields per device. The ones the
/// inventory reads are modelled explicitly; everything else lands in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyDevice {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub mac: Option<String>,
    /// Type code: `usw`, `uap`, `ugw`, `udm`, `uxg`, ...
    #[serde(default, deserialize_with = "lenient::opt_string", rename = "type")]
    pub device_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub ip: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub version: Option<String>,
    /// 0=offline, 1=online, 2=pending, 4=upgrading, 5=provisioning
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub state: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Client (Station) ─────────────────────────────────────────────────

/// Connected client from `stat/sta`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyClientEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub hostname: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub mac: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_wired: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub ip: Option<String>,
    /// Unix epoch seconds.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub last_seen: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
