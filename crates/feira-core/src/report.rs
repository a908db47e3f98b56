//! # Sales Report Aggregation
//!
//! Pure aggregation of a purchase history into the numbers the printed
//! end-of-day report needs: one overall block plus one block per payment
//! method.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  feira-db: get_purchases()                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReportSummary::from_purchases()   ← THIS MODULE (pure, no I/O)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  feira-print: print_report()       ← renders the summary                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keeping the math here means the printed numbers are testable without a
//! printer or a database in sight.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{PaymentMethod, Purchase};

// =============================================================================
// Method Totals
// =============================================================================

/// Count and total for one payment method's slice of the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodTotals {
    /// Number of purchases paid with this method.
    pub count: usize,

    /// Sum of those purchases' totals, in centavos.
    pub total_cents: i64,
}

impl MethodTotals {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Report Summary
// =============================================================================

/// Aggregated view of a purchase history for the sales report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// All purchases, regardless of method.
    pub overall: MethodTotals,

    /// Purchases paid with Pix.
    pub pix: MethodTotals,

    /// Purchases paid in cash.
    pub cash: MethodTotals,

    /// Purchases paid by card.
    pub card: MethodTotals,
}

impl ReportSummary {
    /// Partitions purchases by payment method and sums each subset.
    ///
    /// The per-method totals always add up to the overall total: every
    /// purchase lands in exactly one subset.
    pub fn from_purchases(purchases: &[Purchase]) -> Self {
        let mut summary = ReportSummary::default();

        for purchase in purchases {
            let total = purchase.total_cents();

            summary.overall.count += 1;
            summary.overall.total_cents += total;

            let bucket = match purchase.method {
                PaymentMethod::Pix => &mut summary.pix,
                PaymentMethod::Cash => &mut summary.cash,
                PaymentMethod::Card => &mut summary.card,
            };
            bucket.count += 1;
            bucket.total_cents += total;
        }

        summary
    }

    /// Totals for a given method.
    pub fn for_method(&self, method: PaymentMethod) -> MethodTotals {
        match method {
            PaymentMethod::Pix => self.pix,
            PaymentMethod::Cash => self.cash,
            PaymentMethod::Card => self.card,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;
    use chrono::Utc;

    fn purchase(method: PaymentMethod, items: &[(i64, i64)]) -> Purchase {
        Purchase {
            id: uuid::Uuid::new_v4().to_string(),
            operator: "Maria".to_string(),
            method,
            tendered_cents: None,
            items: items
                .iter()
                .map(|(qty, price)| LineItem {
                    name: "Item".to_string(),
                    quantity: *qty,
                    unit_price_cents: *price,
                    original_price_cents: None,
                })
                .collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_history() {
        let summary = ReportSummary::from_purchases(&[]);
        assert_eq!(summary.overall.count, 0);
        assert_eq!(summary.overall.total_cents, 0);
        assert_eq!(summary.pix, MethodTotals::default());
    }

    #[test]
    fn test_partition_by_method() {
        // Worked example: cash 2×5 + card 1×10 → overall 20, cash 10,
        // card 10, pix 0.
        let purchases = vec![
            purchase(PaymentMethod::Cash, &[(2, 5)]),
            purchase(PaymentMethod::Card, &[(1, 10)]),
        ];

        let summary = ReportSummary::from_purchases(&purchases);

        assert_eq!(summary.overall.count, 2);
        assert_eq!(summary.overall.total_cents, 20);
        assert_eq!(summary.cash.total_cents, 10);
        assert_eq!(summary.card.total_cents, 10);
        assert_eq!(summary.pix.total_cents, 0);
        assert_eq!(summary.pix.count, 0);
    }

    #[test]
    fn test_subsets_sum_to_overall() {
        let purchases = vec![
            purchase(PaymentMethod::Pix, &[(1, 350), (2, 125)]),
            purchase(PaymentMethod::Cash, &[(4, 99)]),
            purchase(PaymentMethod::Pix, &[(1, 1000)]),
            purchase(PaymentMethod::Card, &[(3, 200)]),
        ];

        let summary = ReportSummary::from_purchases(&purchases);

        assert_eq!(
            summary.overall.total_cents,
            summary.pix.total_cents + summary.cash.total_cents + summary.card.total_cents
        );
        assert_eq!(
            summary.overall.count,
            summary.pix.count + summary.cash.count + summary.card.count
        );
        assert_eq!(summary.pix.count, 2);
        assert_eq!(summary.pix.total_cents, 1600);
    }

    #[test]
    fn test_for_method() {
        let purchases = vec![purchase(PaymentMethod::Card, &[(1, 500)])];
        let summary = ReportSummary::from_purchases(&purchases);

        assert_eq!(summary.for_method(PaymentMethod::Card).count, 1);
        assert_eq!(summary.for_method(PaymentMethod::Cash).count, 0);
    }
}
