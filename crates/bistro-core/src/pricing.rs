//! # Pricing Calculator
//!
//! Maps cart contents to the [`Payment`] breakdown.
//!
//! ```text
//! subtotal    = Σ price × quantity
//! deliveryFee = $3.99
//! tax         = subtotal × 8%
//! total       = subtotal + deliveryFee + tax
//! ```
//!
//! No rounding happens here; `Money`'s `Display` rounds for the screens.

use serde::{Deserialize, Serialize};

use crate::money::{Money, TaxRate};
use crate::types::{CartItem, Payment};
use crate::{DELIVERY_FEE_CENTS, TAX_RATE_BPS};

/// Fee and tax applied to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    pub delivery_fee: Money,
    pub tax_rate: TaxRate,
}

impl PricingPolicy {
    /// Computes the breakdown for the given lines.
    pub fn calculate(&self, items: &[CartItem]) -> Payment {
        let subtotal: Money = items.iter().map(CartItem::line_total).sum();
        let tax = subtotal.calculate_tax(self.tax_rate);

        Payment {
            subtotal,
            delivery_fee: self.delivery_fee,
            tax,
            total: subtotal + self.delivery_fee + tax,
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            delivery_fee: Money::from_cents(DELIVERY_FEE_CENTS),
            tax_rate: TaxRate::from_bps(TAX_RATE_BPS),
        }
    }
}

/// Computes the breakdown with the storefront's fee and tax.
///
/// ## Example
/// ```rust
/// use bistro_core::{calculate_payment, CartItem, Money};
///
/// let items = vec![CartItem::new(1, "Shawarma", Money::from_cents(1000), 2)];
/// let payment = calculate_payment(&items);
///
/// assert_eq!(payment.subtotal, Money::from_cents(2000));
/// assert_eq!(payment.tax, Money::from_cents(160));
/// assert_eq!(payment.total, Money::from_cents(2559));
/// ```
pub fn calculate_payment(items: &[CartItem]) -> Payment {
    PricingPolicy::default().calculate(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_pays_only_delivery() {
        let payment = calculate_payment(&[]);
        assert_eq!(payment.subtotal, Money::zero());
        assert_eq!(payment.tax, Money::zero());
        assert_eq!(payment.delivery_fee, Money::from_cents(399));
        assert_eq!(payment.total, Money::from_cents(399));
    }

    #[test]
    fn test_mixed_lines() {
        let items = vec![
            CartItem::new(1, "Soup", Money::from_cents(499), 3),
            CartItem::new(2, "Bread", Money::from_cents(150), 1),
        ];
        let payment = calculate_payment(&items);

        // 14.97 + 1.50 = 16.47; tax 1.3176
        assert_eq!(payment.subtotal, Money::from_cents(1647));
        assert_eq!(payment.tax.to_string(), "$1.32");
        assert_eq!(
            payment.total,
            payment.subtotal + payment.delivery_fee + payment.tax
        );
    }

    #[test]
    fn test_total_identity_holds_as_f64() {
        let items = vec![
            CartItem::new(1, "Tea", Money::from_cents(333), 7),
            CartItem::new(2, "Cake", Money::from_cents(1099), 2),
        ];
        let p = calculate_payment(&items);

        let subtotal = p.subtotal.to_f64();
        let expected = subtotal + 3.99 + subtotal * 0.08;
        assert!((p.total.to_f64() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            delivery_fee: Money::zero(),
            tax_rate: TaxRate::zero(),
        };
        let items = vec![CartItem::new(1, "Tea", Money::from_cents(250), 2)];
        assert_eq!(policy.calculate(&items).total, Money::from_cents(500));
    }
}
