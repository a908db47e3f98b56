//! # Device State Record
//!
//! A discoverable or paired Bluetooth peripheral as the UI sees it.
//!
//! ## Lifecycle
//! - Materialized fresh on every scan: each scan replaces the whole list.
//! - `connected`/`connecting` change through connect/disconnect operations;
//!   the session always republishes a new list rather than mutating entries
//!   shared with readers.
//! - Never persisted. A process restart starts from an empty list.
//!
//! ## Invariant
//! At most one device has `connected == true` at any time: there is a
//! single active printer session, enforced by
//! [`crate::session::PrinterSession::connect_device`].

use serde::{Deserialize, Serialize};

use crate::driver::DiscoveredDevice;

/// A discoverable or paired Bluetooth peripheral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique hardware address (stable key).
    pub address: String,

    /// Display name.
    pub name: String,

    /// Bonded at OS level.
    pub paired: bool,

    /// Active printer session established with this device.
    pub connected: bool,

    /// Connect attempt in flight (transient, UI spinner state).
    pub connecting: bool,
}

impl Device {
    /// Builds a fresh entry from a discovery record.
    ///
    /// Connection flags start false; the session reconciles `connected`
    /// against the driver's connected-address query right after a scan.
    pub fn from_discovered(discovered: DiscoveredDevice, paired: bool) -> Self {
        Device {
            address: discovered.address,
            name: discovered.name,
            paired,
            connected: false,
            connecting: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_discovered() {
        let device = Device::from_discovered(
            DiscoveredDevice {
                address: "AA:BB:CC:DD:EE:FF".to_string(),
                name: "MTP-2".to_string(),
            },
            true,
        );

        assert_eq!(device.address, "AA:BB:CC:DD:EE:FF");
        assert!(device.paired);
        assert!(!device.connected);
        assert!(!device.connecting);
    }
}
