//! # Printer Session Manager
//!
//! Owns the device list, the single active printer connection and the
//! sequencing of print jobs. One explicitly constructed instance is handed
//! to whatever UI layer needs it; there is no ambient global.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Printer Session Operations                           │
//! │                                                                         │
//! │  UI Action              Operation              State Change             │
//! │  ─────────              ─────────              ────────────             │
//! │  App start ───────────► bootstrap() ─────────► (radio enabled)          │
//! │  Tap "Search" ────────► scan_devices() ──────► devices replaced         │
//! │  Tap a device ────────► connect_device() ────► connected_device set     │
//! │  Tap "Disconnect" ────► disconnect() ────────► connected_device cleared │
//! │  Tap "Print" ─────────► print_purchase() ────► (paper comes out)        │
//! │  End of day ──────────► print_report() ──────► (paper comes out)        │
//! │                                                                         │
//! │  INVARIANT: at most one device is connected at any time.                │
//! │  FLAGS: scanning/printing signal "in flight" to the UI and reject       │
//! │  a second entry; `&mut self` makes overlap impossible anyway.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Every driver failure is caught at the operation boundary, reported
//! through the [`NotificationSink`], and the in-flight flags are reset.
//! Nothing here retries, times out, cancels, or crashes the process.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use feira_core::Purchase;

use crate::device::Device;
use crate::driver::PrinterDriver;
use crate::error::PrintResult;
use crate::notify::{NoOpSink, NotificationSink};
use crate::receipt;

// =============================================================================
// Configuration
// =============================================================================

/// Static context printed on every receipt.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Merchant name at the top of receipts and reports.
    pub merchant_name: String,

    /// Invitation line above the promotional QR code.
    pub promo_text: String,

    /// URL encoded in the promotional QR code.
    pub promo_qr_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            merchant_name: "Feira do Bairro".to_string(),
            promo_text: "Siga a feira no Insta:".to_string(),
            promo_qr_url: "https://www.instagram.com/feiradobairro.oficial".to_string(),
        }
    }
}

// =============================================================================
// Receipt Job
// =============================================================================

/// A purchase to be rendered as a receipt.
///
/// Transient: constructed, executed, discarded. Never queued or retried.
#[derive(Debug, Clone)]
pub struct ReceiptJob {
    /// The purchase to print.
    pub purchase: Purchase,

    /// Reprint of an earlier receipt; adds a marker line to the header so
    /// a second slip of paper can't pass as a second sale.
    pub reprint: bool,
}

impl ReceiptJob {
    /// Job for a freshly recorded purchase.
    pub fn new(purchase: Purchase) -> Self {
        ReceiptJob {
            purchase,
            reprint: false,
        }
    }

    /// Job for reprinting an existing purchase from history.
    pub fn reprint(purchase: Purchase) -> Self {
        ReceiptJob {
            purchase,
            reprint: true,
        }
    }
}

// =============================================================================
// Printer Session
// =============================================================================

/// Bluetooth printer session manager.
///
/// ## Ownership
/// Constructed once and passed by reference to consumers; the UI observes
/// state through the read accessors and never mutates it directly. All
/// mutating operations take `&mut self`, so two operations cannot
/// interleave on one session.
pub struct PrinterSession {
    /// Vendor SDK seam.
    driver: Arc<dyn PrinterDriver>,

    /// User-facing message seam.
    sink: Arc<dyn NotificationSink>,

    /// Receipt context.
    config: SessionConfig,

    /// Devices from the last scan. Replaced wholesale per scan; entries
    /// are republished as a new list on every flag change, never mutated
    /// in place under a shared reference.
    devices: Vec<Device>,

    /// Scan in flight.
    scanning: bool,

    /// Print job in flight.
    printing: bool,

    /// The device with the active printer session, if any.
    connected_device: Option<Device>,
}

impl PrinterSession {
    /// Creates a session with a silent notification sink.
    pub fn new(driver: Arc<dyn PrinterDriver>, config: SessionConfig) -> Self {
        Self::with_sink(driver, Arc::new(NoOpSink), config)
    }

    /// Creates a session with a custom notification sink.
    pub fn with_sink(
        driver: Arc<dyn PrinterDriver>,
        sink: Arc<dyn NotificationSink>,
        config: SessionConfig,
    ) -> Self {
        PrinterSession {
            driver,
            sink,
            config,
            devices: Vec::new(),
            scanning: false,
            printing: false,
            connected_device: None,
        }
    }

    // -------------------------------------------------------------------------
    // Read accessors (UI observes, read-only)
    // -------------------------------------------------------------------------

    /// Devices from the last scan.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Whether a scan is in flight.
    pub fn scanning(&self) -> bool {
        self.scanning
    }

    /// Whether a print job is in flight.
    pub fn printing(&self) -> bool {
        self.printing
    }

    /// The currently connected device, if any.
    pub fn connected_device(&self) -> Option<&Device> {
        self.connected_device.as_ref()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Ensures the Bluetooth radio is on.
    ///
    /// Called once at app start. Failure is a warning, not an error: the
    /// app stays usable without printing.
    pub async fn bootstrap(&mut self) {
        match self.ensure_radio().await {
            Ok(()) => debug!("bluetooth radio ready"),
            Err(err) => {
                warn!(error = %err, "bluetooth bootstrap failed");
                self.sink.warn(&format!("Bluetooth indisponível: {err}"));
            }
        }
    }

    async fn ensure_radio(&self) -> PrintResult<()> {
        if !self.driver.is_enabled().await? {
            debug!("bluetooth disabled, requesting enable");
            self.driver.enable().await?;
        }
        Ok(())
    }

    /// Scans for devices and replaces the device list wholesale.
    ///
    /// ## Steps
    /// 1. Busy-guard on `scanning`.
    /// 2. Best-effort radio check: warn if disabled, proceed regardless.
    /// 3. Driver scan; merge found (unpaired) + paired lists.
    /// 4. Reconcile `connected` flags against the driver's
    ///    connected-address query; an active session survives the rescan
    ///    only if the driver still reports it connected.
    ///
    /// `scanning` is reset on every path. On failure the previous list is
    /// left untouched.
    pub async fn scan_devices(&mut self) {
        if self.scanning {
            self.sink.warn("Busca já em andamento");
            return;
        }

        debug!("scanning for devices");
        match self.driver.is_enabled().await {
            Ok(true) => {}
            Ok(false) => self.sink.warn("Bluetooth desativado"),
            Err(err) => self.sink.warn(&format!("Bluetooth indisponível: {err}")),
        }

        self.scanning = true;
        let result = self.refresh_devices().await;
        self.scanning = false;

        if let Err(err) = result {
            warn!(error = %err, "scan failed");
            self.sink.warn(&format!("Falha na busca: {err}"));
        }
    }

    async fn refresh_devices(&mut self) -> PrintResult<()> {
        let output = self.driver.scan().await?;
        let connected = self.driver.connected_addresses().await?;

        let mut devices: Vec<Device> =
            Vec::with_capacity(output.found.len() + output.paired.len());
        devices.extend(
            output
                .found
                .into_iter()
                .map(|d| Device::from_discovered(d, false)),
        );
        devices.extend(
            output
                .paired
                .into_iter()
                .map(|d| Device::from_discovered(d, true)),
        );

        // A driver may report several connected addresses; the session
        // models a single active connection, so at most one list entry is
        // marked connected. The current session's address wins, otherwise
        // the first reported address present in the list.
        let active = self
            .connected_device
            .as_ref()
            .map(|d| d.address.clone())
            .filter(|a| connected.contains(a))
            .or_else(|| {
                connected
                    .iter()
                    .find(|a| devices.iter().any(|d| &d.address == *a))
                    .cloned()
            });

        if let Some(address) = active {
            if let Some(device) = devices.iter_mut().find(|d| d.address == address) {
                device.connected = true;
            }
        }

        self.connected_device = self.connected_device.take().and_then(|current| {
            devices
                .iter()
                .find(|d| d.address == current.address && d.connected)
                .cloned()
        });

        debug!(count = devices.len(), "scan complete");
        self.devices = devices;
        Ok(())
    }

    /// Connects to the device with the given address.
    ///
    /// ## Behavior
    /// - Address not in the list: NotFound warning, no driver call.
    /// - Target already connected: adopt it as the active device, no
    ///   driver call (idempotent reconnect-avoidance).
    /// - Another device connected: disconnect it first (single active
    ///   connection), then connect the target.
    ///
    /// The target's `connecting` flag is cleared on every path.
    pub async fn connect_device(&mut self, address: &str) {
        let Some(target) = self.devices.iter().find(|d| d.address == address).cloned() else {
            warn!(address, "connect requested for a device not in the list");
            self.sink.warn("Dispositivo não encontrado na lista");
            return;
        };

        if target.connected {
            debug!(address, "device already connected, adopting");
            self.connected_device = Some(target);
            return;
        }

        // Single active connection: drop the current session first.
        if let Some(current) = self.connected_device.take() {
            debug!(current = %current.address, "disconnecting previous device");
            if let Err(err) = self.driver.disconnect(&current.address).await {
                warn!(current = %current.address, error = %err, "disconnect failed");
                self.sink
                    .warn(&format!("Falha ao desconectar {}: {err}", current.name));
                self.connected_device = Some(current);
                return;
            }
            self.publish_device(&current.address, false, false);
        }

        self.publish_device(address, true, false);
        let result = self.driver.connect(address).await;

        match result {
            Ok(()) => {
                self.publish_device(address, false, true);
                self.connected_device =
                    self.devices.iter().find(|d| d.address == address).cloned();
                info!(address, "printer connected");
            }
            Err(err) => {
                self.publish_device(address, false, false);
                warn!(address, error = %err, "connect failed");
                self.sink.warn(&format!("Falha ao conectar: {err}"));
            }
        }
    }

    /// Disconnects the active device.
    ///
    /// With no device connected this is a single warning and no driver
    /// call. If the device vanished from the list (replaced by a scan in
    /// between), the disconnect still happens; the stale entry is warned
    /// about, not failed on.
    pub async fn disconnect(&mut self) {
        let Some(current) = self.connected_device.clone() else {
            self.sink.warn("Não há dispositivos conectados");
            return;
        };

        debug!(address = %current.address, "disconnecting");
        if let Err(err) = self.driver.disconnect(&current.address).await {
            warn!(address = %current.address, error = %err, "disconnect failed");
            self.sink.warn(&format!("Falha ao desconectar: {err}"));
            return;
        }

        self.connected_device = None;
        if self.devices.iter().any(|d| d.address == current.address) {
            self.publish_device(&current.address, false, false);
        } else {
            self.sink.warn("Dispositivo não encontrado na lista");
        }
    }

    /// Whether a print job can be attempted right now: driver-level
    /// ready-check AND an active connection. Pure read, no side effects.
    pub async fn validate_printer(&self) -> bool {
        if self.connected_device.is_none() {
            return false;
        }
        self.driver.is_ready().await.unwrap_or(false)
    }

    /// Prints a purchase receipt.
    ///
    /// Validates first: an invalid printer is one warning and zero print
    /// primitives. A mid-sequence failure is reported as an error (the
    /// paper is half-printed, worse than a skipped warning); output
    /// already fed is not rolled back. `printing` is reset on every path.
    pub async fn print_purchase(&mut self, job: &ReceiptJob) {
        if self.printing {
            self.sink.warn("Impressão já em andamento");
            return;
        }
        if !self.validate_printer().await {
            self.sink.warn("Impressora não conectada / Erro ao conectar");
            return;
        }

        debug!(purchase = %job.purchase.id, reprint = job.reprint, "printing receipt");
        self.printing = true;
        let result = receipt::emit_purchase(self.driver.as_ref(), &self.config, job).await;
        self.printing = false;

        match result {
            Ok(()) => debug!(purchase = %job.purchase.id, "receipt printed"),
            Err(err) => {
                error!(purchase = %job.purchase.id, error = %err, "print failed mid-sequence");
                self.sink.error(&format!("Erro ao imprimir: {err}"));
            }
        }
    }

    /// Prints the end-of-day sales report for the given purchases.
    ///
    /// Same validate-then-emit-then-cleanup discipline as
    /// [`print_purchase`](Self::print_purchase).
    pub async fn print_report(&mut self, purchases: &[Purchase]) {
        if self.printing {
            self.sink.warn("Impressão já em andamento");
            return;
        }
        if !self.validate_printer().await {
            self.sink.warn("Impressora não conectada / Erro ao conectar");
            return;
        }

        debug!(purchases = purchases.len(), "printing sales report");
        self.printing = true;
        let result = receipt::emit_report(self.driver.as_ref(), &self.config, purchases).await;
        self.printing = false;

        match result {
            Ok(()) => debug!("report printed"),
            Err(err) => {
                error!(error = %err, "report print failed mid-sequence");
                self.sink.error(&format!("Erro ao imprimir: {err}"));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    /// Republishes the device list with one entry's flags replaced.
    ///
    /// Produces a new vector instead of mutating entries in place:
    /// readers holding the previous list never see a half-applied update.
    fn publish_device(&mut self, address: &str, connecting: bool, connected: bool) {
        self.devices = self
            .devices
            .iter()
            .map(|device| {
                if device.address == address {
                    let mut updated = device.clone();
                    updated.connecting = connecting;
                    updated.connected = connected;
                    updated
                } else {
                    device.clone()
                }
            })
            .collect();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
