//! # feira-core: Pure Business Logic for Feira POS
//!
//! This crate is the heart of Feira POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Feira POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile Shell (UI)                            │   │
//! │  │    Catalog ──► Purchase ──► Receipt ──► History/Profile         │   │
//! │  └───────────────┬─────────────────────────────────┬───────────────┘   │
//! │                  │                                 │                   │
//! │  ┌───────────────▼───────────────┐ ┌───────────────▼───────────────┐   │
//! │  │         feira-print           │ │           feira-db            │   │
//! │  │  Bluetooth printer session    │ │  SQLite purchase history      │   │
//! │  └───────────────┬───────────────┘ └───────────────┬───────────────┘   │
//! │                  │                                 │                   │
//! │  ┌───────────────▼─────────────────────────────────▼───────────────┐   │
//! │  │               ★ feira-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  report   │  │ validation│   │   │
//! │  │   │ Purchase  │  │   Money   │  │ per-method│  │   rules   │   │   │
//! │  │   │ LineItem  │  │  (cents)  │  │  totals   │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO BLUETOOTH • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Purchase, LineItem, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`report`] - Sales report aggregation by payment method
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, Bluetooth, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use feira_core::Money` instead of
// `use feira_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use report::{MethodTotals, ReportSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single purchase.
///
/// ## Business Reason
/// Prevents runaway purchases and keeps receipts within one thermal roll.
pub const MAX_PURCHASE_ITEMS: usize = 100;

/// Maximum quantity of a single item in a purchase.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
