//! # feira-print: Bluetooth Printer Session for Feira POS
//!
//! Owns the set of discovered/paired Bluetooth devices, the single active
//! printer connection, and the sequencing of print jobs against it.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Printer Session Control Flow                        │
//! │                                                                         │
//! │  UI trigger (scan / connect / print)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PrinterSession ──► PrinterDriver (vendor SDK behind a trait)           │
//! │       │                                                                 │
//! │       ├── updates its own state (devices, flags, active connection)     │
//! │       │                                                                 │
//! │       └── reports outcomes ──► NotificationSink (user-facing toasts)    │
//! │                                                                         │
//! │  No background scheduler, no retry loop, no persistence of the          │
//! │  connection across process restarts.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - The session manager itself
//! - [`driver`] - `PrinterDriver` trait: radio, scan, connect, raw printing
//! - [`notify`] - `NotificationSink` trait for user-facing messages
//! - [`device`] - The `Device` state record
//! - [`receipt`] - Receipt and report layout over the raw print primitives
//! - [`error`] - Driver error types
//!
//! ## Failure Semantics
//!
//! No operation is retried automatically, none is fatal to the process.
//! Driver failures surface as sink notifications and the in-flight flags
//! (`scanning`, `connecting`, `printing`) are reset on every path.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod device;
pub mod driver;
pub mod error;
pub mod notify;
pub mod receipt;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use device::Device;
pub use driver::{Align, DiscoveredDevice, PrinterDriver, ScanOutput};
pub use error::{PrintError, PrintResult};
pub use notify::{NoOpSink, NotificationSink};
pub use session::{PrinterSession, ReceiptJob, SessionConfig};
