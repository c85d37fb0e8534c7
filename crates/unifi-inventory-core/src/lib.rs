//! Inventory model and builder between `unifi-inventory-api` and the binary.
//!
//! - **[`Inventory`]** -- the Ansible dynamic inventory document.
//!   [`Inventory::build`] is a pure function of the device and client
//!   records; it never fails and never performs I/O.
//!
//! - **[`Controller`]** -- facade over the legacy API client:
//!   [`connect()`](Controller::connect) authenticates,
//!   [`inventory()`](Controller::inventory) fetches both record sets and
//!   builds the document, treating a failed fetch as an empty list.
//!
//! - **Domain model** ([`model`]) -- typed [`Device`] and [`Client`] records
//!   with explicit defaults, converted from the wire types in [`convert`].

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod inventory;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{Credentials, InventoryConfig, TlsVerification};
pub use controller::Controller;
pub use error::CoreError;
pub use inventory::{ClientVars, DeviceVars, Group, HostId, HostVars, Inventory};
pub use model::{Client, Device, DeviceType};

pub use unifi_inventory_api::{ControllerPlatform, UnknownPlatform};
