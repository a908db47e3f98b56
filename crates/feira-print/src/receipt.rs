//! # Receipt Rendering
//!
//! Layout of purchase receipts and sales reports over the raw driver
//! primitives. This module decides what the paper says; the driver decides
//! how the bytes get there.
//!
//! ## Purchase Receipt Layout
//! ```text
//! ┌──────────────────────────────┐
//! │        Feira do Bairro       │  ← header block (centered)
//! │       12/03/2026 14:05       │
//! │------------------------------│
//! │ 2x Pastel - R$ 16,00         │  ← one line per item
//! │ 1x Caldo de cana - R$ 6,00   │
//! │------------------------------│
//! │ Total: R$ 22,00 - Dinheiro   │
//! │ Dinheiro: R$ 50,00           │  ← only for cash with tendered amount
//! │ Troco: R$ 28,00              │
//! │------------------------------│
//! │ Operador: Maria              │
//! │ ID da compra:                │
//! │ 7f9c41c8-...                 │
//! │------------------------------│
//! │   Siga a feira no Insta:     │
//! │          [QR CODE]           │
//! └──────────────────────────────┘
//! ```
//!
//! A failure mid-sequence aborts the remaining primitives; paper already
//! fed is not rolled back (the physical printer has no undo).

use feira_core::{Money, PaymentMethod, Purchase, ReportSummary};

use crate::driver::{Align, PrinterDriver};
use crate::error::PrintResult;
use crate::session::{ReceiptJob, SessionConfig};

/// Receipt timestamp format (Brazilian day-first convention).
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

// =============================================================================
// Line Formatting
// =============================================================================

/// Formats one product line for the receipt.
///
/// ## Examples
/// - `2x Pastel - R$ 16,00`
/// - `1x Caldo de cana (de R$ 8,00 por R$ 6,00) - R$ 6,00` (promotion)
pub fn product_line(item: &feira_core::LineItem) -> String {
    if item.is_discounted() {
        // is_discounted guarantees original_price_cents is present
        let original = Money::from_cents(item.original_price_cents.unwrap_or_default());
        format!(
            "{}x {} (de {} por {}) - {}",
            item.quantity,
            item.name,
            original,
            item.unit_price(),
            item.line_total()
        )
    } else {
        format!("{}x {} - {}", item.quantity, item.name, item.line_total())
    }
}

// =============================================================================
// Purchase Receipt
// =============================================================================

/// Emits a full purchase receipt, in strict order.
///
/// ## Sequence
/// 1. Header block: merchant, timestamp, reprint marker
/// 2. One formatted line per product
/// 3. Divisor, total line with payment-method label
/// 4. Cash/change lines (cash with tendered amount only)
/// 5. Operator and purchase-id lines
/// 6. Promotional QR block, trailing feed
pub async fn emit_purchase(
    driver: &dyn PrinterDriver,
    config: &SessionConfig,
    job: &ReceiptJob,
) -> PrintResult<()> {
    let purchase = &job.purchase;

    // Header block
    driver.set_align(Align::Center).await?;
    driver.print_line(&config.merchant_name).await?;
    driver
        .print_line(&purchase.created_at.format(TIMESTAMP_FORMAT).to_string())
        .await?;
    if job.reprint {
        driver.print_line("** REIMPRESSAO **").await?;
    }
    driver.set_align(Align::Left).await?;
    driver.print_divisor().await?;

    // Items
    for item in &purchase.items {
        driver.print_line(&product_line(item)).await?;
    }

    driver.print_divisor().await?;
    driver
        .print_line(&format!(
            "Total: {} - {}",
            purchase.total(),
            purchase.method.label()
        ))
        .await?;

    // Change block: change_cents() is Some only for cash with a tendered
    // amount, so card/Pix purchases never reach these lines.
    if let (Some(tendered), Some(change)) = (purchase.tendered_cents, purchase.change_cents()) {
        driver
            .print_line(&format!("Dinheiro: {}", Money::from_cents(tendered)))
            .await?;
        driver
            .print_line(&format!("Troco: {}", Money::from_cents(change)))
            .await?;
    }

    driver.print_divisor().await?;
    driver
        .print_line(&format!("Operador: {}", purchase.operator))
        .await?;
    driver.print_line("ID da compra:").await?;
    driver.print_line(&purchase.id).await?;
    driver.print_divisor().await?;

    // Promotional QR block
    driver.set_align(Align::Center).await?;
    driver.print_line(&config.promo_text).await?;
    driver.print_qr(&config.promo_qr_url).await?;
    driver.feed(2).await?;

    Ok(())
}

// =============================================================================
// Sales Report
// =============================================================================

/// Emits the end-of-day sales report: an overall block, then one section
/// per payment method with a centered heading, divisor, count and total.
pub async fn emit_report(
    driver: &dyn PrinterDriver,
    config: &SessionConfig,
    purchases: &[Purchase],
) -> PrintResult<()> {
    let summary = ReportSummary::from_purchases(purchases);

    // Report header block
    driver.set_align(Align::Center).await?;
    driver.print_line(&config.merchant_name).await?;
    driver.print_line("RELATORIO DE VENDAS").await?;
    driver.set_align(Align::Left).await?;
    driver.print_divisor().await?;

    driver
        .print_line(&format!("Total de compras: {}", summary.overall.count))
        .await?;
    driver
        .print_line(&format!("Valor total: {}", summary.overall.total()))
        .await?;
    driver.feed(2).await?;

    for method in PaymentMethod::ALL {
        let totals = summary.for_method(method);

        driver.set_align(Align::Center).await?;
        driver.print_line(method.report_heading()).await?;
        driver.set_align(Align::Left).await?;
        driver.print_divisor().await?;
        driver
            .print_line(&format!("Total de compras: {}", totals.count))
            .await?;
        driver
            .print_line(&format!("Valor total: {}", totals.total()))
            .await?;
        driver.feed(2).await?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use feira_core::LineItem;

    #[test]
    fn test_product_line_plain() {
        let item = LineItem {
            name: "Pastel".to_string(),
            quantity: 2,
            unit_price_cents: 800,
            original_price_cents: None,
        };
        assert_eq!(product_line(&item), "2x Pastel - R$ 16,00");
    }

    #[test]
    fn test_product_line_promotion() {
        let item = LineItem {
            name: "Caldo de cana".to_string(),
            quantity: 1,
            unit_price_cents: 600,
            original_price_cents: Some(800),
        };
        assert_eq!(
            product_line(&item),
            "1x Caldo de cana (de R$ 8,00 por R$ 6,00) - R$ 6,00"
        );
    }

    #[test]
    fn test_product_line_original_price_not_lower() {
        // An "original" price equal to the sale price is not a promotion.
        let item = LineItem {
            name: "Pastel".to_string(),
            quantity: 1,
            unit_price_cents: 800,
            original_price_cents: Some(800),
        };
        assert_eq!(product_line(&item), "1x Pastel - R$ 8,00");
    }
}
