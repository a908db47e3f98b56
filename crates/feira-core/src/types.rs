//! # Domain Types
//!
//! Core domain types used throughout Feira POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Purchase     │   │    LineItem     │   │ PaymentMethod   │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (UUID)      │──►│  name           │   │  Cash           │        │
//! │  │  operator       │ 1:n  quantity       │   │  Card           │        │
//! │  │  method         │   │  unit_price     │   │  Pix            │        │
//! │  │  tendered_cents │   │  original_price │   └─────────────────┘        │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `LineItem` freezes the product name and price at the moment of sale.
//! Catalog edits after the fact never rewrite history or reprints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// How a purchase was paid.
///
/// Stored as snake_case TEXT in the database and serialized the same way
/// over JSON, so the two representations never drift.
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment ("Dinheiro").
    Cash,
    /// Card payment on external terminal ("Cartão").
    Card,
    /// Pix instant transfer.
    Pix,
}

impl PaymentMethod {
    /// All methods, in the order report sections are printed.
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Pix, PaymentMethod::Cash, PaymentMethod::Card];

    /// Receipt label for this method.
    ///
    /// Receipts are printed in Portuguese; thermal printers on the cheap
    /// end drop accented characters, so labels stay ASCII.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Card => "Cartao",
            PaymentMethod::Pix => "Pix",
        }
    }

    /// Uppercase section heading used on the sales report.
    pub const fn report_heading(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "DINHEIRO",
            PaymentMethod::Card => "CARTAO",
            PaymentMethod::Pix => "PIX",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A line item in a purchase.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product name at time of sale (frozen).
    pub name: String,

    /// Quantity sold.
    pub quantity: i64,

    /// Unit price in centavos at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Pre-promotion price in centavos, when the item was on offer.
    /// Drives the "de R$ X por R$ Y" receipt line.
    pub original_price_cents: Option<i64>,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total before any adjustment (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }

    /// Whether this item was sold at a promotional price.
    pub fn is_discounted(&self) -> bool {
        matches!(self.original_price_cents, Some(orig) if orig > self.unit_price_cents)
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// A completed purchase: the unit of history and of receipt printing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Unique identifier (UUID v4). Printed on the receipt so a purchase
    /// can be looked up from paper.
    pub id: String,

    /// Operator (cashier) who recorded the purchase.
    pub operator: String,

    /// How the purchase was paid.
    pub method: PaymentMethod,

    /// For cash: amount the customer handed over, in centavos.
    /// `None` for non-cash methods and for exact-amount cash sales.
    pub tendered_cents: Option<i64>,

    /// The products sold.
    pub items: Vec<LineItem>,

    /// When the purchase was recorded.
    pub created_at: DateTime<Utc>,
}

impl Purchase {
    /// Sum over all line items of unit price × quantity, in centavos.
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(LineItem::line_total_cents).sum()
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Change owed to the customer, in centavos.
    ///
    /// ## Rules
    /// - Only cash purchases with a recorded tendered amount have change.
    /// - Card/Pix never produce change, whatever `tendered_cents` says.
    pub fn change_cents(&self) -> Option<i64> {
        match (self.method, self.tendered_cents) {
            (PaymentMethod::Cash, Some(tendered)) => Some(tendered - self.total_cents()),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(qty: i64, price: i64) -> LineItem {
        LineItem {
            name: "Pastel".to_string(),
            quantity: qty,
            unit_price_cents: price,
            original_price_cents: None,
        }
    }

    fn purchase(method: PaymentMethod, tendered: Option<i64>, items: Vec<LineItem>) -> Purchase {
        Purchase {
            id: "7f9c41c8-9f2a-4b6e-9a6e-0f8d1f0a2b3c".to_string(),
            operator: "Maria".to_string(),
            method,
            tendered_cents: tendered,
            items,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item(3, 250).line_total_cents(), 750);
        assert_eq!(item(1, 0).line_total_cents(), 0);
    }

    #[test]
    fn test_purchase_total() {
        let p = purchase(PaymentMethod::Cash, None, vec![item(2, 500), item(1, 1000)]);
        assert_eq!(p.total_cents(), 2000);
    }

    #[test]
    fn test_change_for_cash_with_tender() {
        let p = purchase(PaymentMethod::Cash, Some(5000), vec![item(2, 1000)]);
        assert_eq!(p.change_cents(), Some(3000));
    }

    #[test]
    fn test_no_change_without_tender() {
        let p = purchase(PaymentMethod::Cash, None, vec![item(2, 1000)]);
        assert_eq!(p.change_cents(), None);
    }

    #[test]
    fn test_no_change_for_non_cash() {
        // Tendered amount on a Pix purchase is stale UI state; ignore it.
        let p = purchase(PaymentMethod::Pix, Some(5000), vec![item(2, 1000)]);
        assert_eq!(p.change_cents(), None);
    }

    #[test]
    fn test_discounted_item() {
        let mut i = item(1, 800);
        assert!(!i.is_discounted());
        i.original_price_cents = Some(1000);
        assert!(i.is_discounted());
        i.original_price_cents = Some(800);
        assert!(!i.is_discounted());
    }

    #[test]
    fn test_payment_method_serde_snake_case() {
        let json = serde_json::to_string(&PaymentMethod::Pix).unwrap();
        assert_eq!(json, "\"pix\"");
        let back: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(back, PaymentMethod::Cash);
    }
}
