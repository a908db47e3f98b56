//! # Printer Error Types
//!
//! Errors produced by `PrinterDriver` implementations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Vendor SDK failure (native call throws)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PrintError (this module) ← categorized by the driver implementation    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PrinterSession catches at the operation boundary                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  NotificationSink warning/error ← the user sees a toast, nothing more   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here ever crosses the session boundary as an `Err`: the session
//! converts every failure into a sink message and restores its flags.

use thiserror::Error;

/// Printer driver errors.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The Bluetooth radio is off or unavailable.
    ///
    /// ## When This Occurs
    /// - Radio disabled and the enable request was refused
    /// - Platform denies Bluetooth permission to the app
    #[error("Bluetooth radio unavailable: {0}")]
    RadioUnavailable(String),

    /// Device discovery failed.
    #[error("Scan failed: {0}")]
    ScanFailed(String),

    /// Could not establish a connection to the device.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A print primitive was called with no device connected.
    #[error("Printer not connected")]
    NotConnected,

    /// Sending data to the connected printer failed mid-job.
    ///
    /// ## When This Occurs
    /// - Printer powered off between lines
    /// - Out of paper, if the model reports it
    /// - Bluetooth link dropped during a write
    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Convenience type alias for Results with PrintError.
pub type PrintResult<T> = Result<T, PrintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PrintError::NotConnected.to_string(),
            "Printer not connected"
        );
        assert_eq!(
            PrintError::WriteFailed("link dropped".to_string()).to_string(),
            "Write failed: link dropped"
        );
    }
}
