//! # Printer Driver Trait
//!
//! The seam between the session manager and the vendor Bluetooth/ESC-POS
//! SDK. Platform integrations (Android printer library, a USB bridge, a
//! test mock) implement [`PrinterDriver`]; the session only ever talks to
//! the trait.
//!
//! ## Capability Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PrinterDriver Capabilities                         │
//! │                                                                         │
//! │  Radio      is_enabled() / enable()                                     │
//! │  Discovery  scan() → found + paired lists                               │
//! │             connected_addresses() → currently connected peers           │
//! │  Session    connect(address) / disconnect(address)                      │
//! │  Health     is_ready() → printer accepts jobs                           │
//! │  Printing   print_line, set_align, print_divisor, feed, print_qr        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timeouts & Cancellation
//! None are imposed here. A hang inside an implementation propagates as an
//! indefinitely pending future, and an issued call runs to completion or
//! failure; implementations that need deadlines must enforce their own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PrintResult;

// =============================================================================
// Scan Output
// =============================================================================

/// A device as reported by discovery, before the session attaches state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    /// Unique hardware address (stable key).
    pub address: String,

    /// Display name. Some peripherals advertise an empty name.
    pub name: String,
}

/// Result of a discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutput {
    /// Devices newly found during the scan (not bonded at OS level).
    pub found: Vec<DiscoveredDevice>,

    /// Devices already paired with the OS.
    pub paired: Vec<DiscoveredDevice>,
}

// =============================================================================
// Alignment
// =============================================================================

/// Text alignment for subsequent print primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

// =============================================================================
// Driver Trait
// =============================================================================

/// External printer capability consumed by the session manager.
///
/// ## Contract
/// - Methods take `&self`; implementations handle their own interior
///   synchronization (the vendor SDKs are single-channel anyway).
/// - Print primitives apply to the currently connected device and fail
///   with [`crate::PrintError::NotConnected`] when there is none.
#[async_trait]
pub trait PrinterDriver: Send + Sync {
    /// Whether the Bluetooth radio is currently enabled.
    async fn is_enabled(&self) -> PrintResult<bool>;

    /// Requests the radio be enabled. May prompt the user on mobile.
    async fn enable(&self) -> PrintResult<()>;

    /// Runs device discovery and returns found + paired lists.
    async fn scan(&self) -> PrintResult<ScanOutput>;

    /// Addresses of devices the SDK currently holds a connection to.
    async fn connected_addresses(&self) -> PrintResult<Vec<String>>;

    /// Connects to the device with the given address.
    async fn connect(&self, address: &str) -> PrintResult<()>;

    /// Disconnects the device with the given address.
    async fn disconnect(&self, address: &str) -> PrintResult<()>;

    /// Whether the connected printer is ready to accept a job.
    async fn is_ready(&self) -> PrintResult<bool>;

    // -------------------------------------------------------------------------
    // Raw print primitives
    // -------------------------------------------------------------------------

    /// Prints one line of text followed by a line feed.
    async fn print_line(&self, text: &str) -> PrintResult<()>;

    /// Sets alignment for subsequent primitives.
    async fn set_align(&self, align: Align) -> PrintResult<()>;

    /// Prints a full-width divisor rule.
    async fn print_divisor(&self) -> PrintResult<()>;

    /// Feeds `lines` blank lines.
    async fn feed(&self, lines: u8) -> PrintResult<()>;

    /// Prints a QR code encoding the given URL.
    async fn print_qr(&self, url: &str) -> PrintResult<()>;
}
