//! # Validation Module
//!
//! Input validation utilities for Feira POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Mobile shell (UI)                                             │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation before storage         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  ├── NOT NULL constraints                                               │
//! │  └── Foreign key constraints                                            │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use feira_core::validation::{validate_operator, validate_quantity};
//!
//! validate_operator("Maria").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Purchase;
use crate::{MAX_ITEM_QUANTITY, MAX_PURCHASE_ITEMS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an operator (cashier) name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
pub fn validate_operator(operator: &str) -> ValidationResult<()> {
    let operator = operator.trim();

    if operator.is_empty() {
        return Err(ValidationError::Required {
            field: "operator".to_string(),
        });
    }

    if operator.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "operator".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a product name snapshot.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a UUID string (purchase ids).
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|e| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item quantity.
///
/// ## Rules
/// - Must be positive (zero-quantity lines are UI bugs, reject them)
/// - Must not exceed `MAX_ITEM_QUANTITY`
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in centavos. Zero is allowed (giveaways), negative is not.
pub fn validate_price_cents(price_cents: i64) -> ValidationResult<()> {
    if price_cents < 0 {
        return Err(ValidationError::MustBePositive {
            field: "price_cents".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates a whole purchase before it is persisted.
///
/// Checks the id, operator, line-item bounds, and each item's fields.
pub fn validate_purchase(purchase: &Purchase) -> ValidationResult<()> {
    validate_uuid(&purchase.id)?;
    validate_operator(&purchase.operator)?;

    if purchase.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if purchase.items.len() > MAX_PURCHASE_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_PURCHASE_ITEMS as i64,
        });
    }

    for item in &purchase.items {
        validate_item_name(&item.name)?;
        validate_quantity(item.quantity)?;
        validate_price_cents(item.unit_price_cents)?;
        if let Some(original) = item.original_price_cents {
            validate_price_cents(original)?;
        }
    }

    if let Some(tendered) = purchase.tendered_cents {
        validate_price_cents(tendered)?;
    }

    Ok(())
}

/// Full pre-persistence check: field validation plus business rules.
///
/// On top of [`validate_purchase`], rejects cash purchases recorded with
/// less money than they cost. Negative change on a receipt is a
/// data-entry error, not a sale.
pub fn check_purchase(purchase: &Purchase) -> CoreResult<()> {
    validate_purchase(purchase)?;

    if let Some(change) = purchase.change_cents() {
        if change < 0 {
            return Err(CoreError::InsufficientTender {
                tendered_cents: purchase.tendered_cents.unwrap_or_default(),
                total_cents: purchase.total_cents(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, PaymentMethod};
    use chrono::Utc;

    fn valid_purchase() -> Purchase {
        Purchase {
            id: uuid::Uuid::new_v4().to_string(),
            operator: "Maria".to_string(),
            method: PaymentMethod::Cash,
            tendered_cents: Some(5000),
            items: vec![LineItem {
                name: "Pastel".to_string(),
                quantity: 2,
                unit_price_cents: 800,
                original_price_cents: None,
            }],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_operator() {
        assert!(validate_operator("Maria").is_ok());
        assert!(validate_operator("").is_err());
        assert!(validate_operator("   ").is_err());
        assert!(validate_operator(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_purchase() {
        assert!(validate_purchase(&valid_purchase()).is_ok());

        let mut no_items = valid_purchase();
        no_items.items.clear();
        assert!(validate_purchase(&no_items).is_err());

        let mut bad_qty = valid_purchase();
        bad_qty.items[0].quantity = 0;
        assert!(validate_purchase(&bad_qty).is_err());

        let mut bad_tender = valid_purchase();
        bad_tender.tendered_cents = Some(-1);
        assert!(validate_purchase(&bad_tender).is_err());
    }

    #[test]
    fn test_check_purchase_rejects_insufficient_tender() {
        // valid_purchase totals 1600 centavos
        let mut short = valid_purchase();
        short.tendered_cents = Some(1000);
        assert!(matches!(
            check_purchase(&short).unwrap_err(),
            CoreError::InsufficientTender {
                tendered_cents: 1000,
                total_cents: 1600,
            }
        ));
    }

    #[test]
    fn test_check_purchase_allows_exact_tender() {
        let mut exact = valid_purchase();
        exact.tendered_cents = Some(exact.total_cents());
        assert!(check_purchase(&exact).is_ok());
    }

    #[test]
    fn test_check_purchase_ignores_tender_on_non_cash() {
        // A stale tendered amount on a Pix purchase has no change math.
        let mut pix = valid_purchase();
        pix.method = PaymentMethod::Pix;
        pix.tendered_cents = Some(1);
        assert!(check_purchase(&pix).is_ok());
    }
}
