//! Order Totals

use crate::money::{self, Amount};

/// Amounts shown in the payment panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    /// Sum of line subtotals
    pub subtotal: Amount,

    /// Discount clamped to `[0, subtotal]`
    pub discount: Amount,

    /// `subtotal − discount`, never negative
    pub total: Amount,

    /// `max(amount paid − total, 0)`
    pub change: Amount,
}

impl OrderTotals {
    /// Compute totals from a cart subtotal, the requested discount and the
    /// amount received.
    pub fn compute(subtotal: Amount, discount: Amount, amount_paid: Amount) -> Self {
        let discount = money::clamp(discount, money::zero(), subtotal);
        let total = money::max_zero(money::difference(subtotal, discount));
        let change = money::max_zero(money::difference(amount_paid, total));

        Self {
            subtotal,
            discount,
            total,
            change,
        }
    }

    /// Whether the amount received covers the total.
    pub fn is_covered_by(&self, amount_paid: Amount) -> bool {
        amount_paid.to_minor_units() >= self.total.to_minor_units()
    }
}

#[cfg(test)]
mod tests {
    use crate::money::{pesos, zero};

    use super::*;

    #[test]
    fn worked_example() {
        let totals = OrderTotals::compute(pesos(14_000), pesos(2000), pesos(15_000));

        assert_eq!(totals.discount, pesos(2000));
        assert_eq!(totals.total, pesos(12_000));
        assert_eq!(totals.change, pesos(3000));
    }

    #[test]
    fn discount_is_clamped_to_subtotal() {
        let totals = OrderTotals::compute(pesos(5000), pesos(9000), zero());

        assert_eq!(totals.discount, pesos(5000));
        assert_eq!(totals.total, zero());
    }

    #[test]
    fn negative_discount_is_ignored() {
        let totals = OrderTotals::compute(pesos(5000), pesos(-300), zero());

        assert_eq!(totals.discount, zero());
        assert_eq!(totals.total, pesos(5000));
    }

    #[test]
    fn change_is_never_negative() {
        let totals = OrderTotals::compute(pesos(5000), zero(), pesos(1000));

        assert_eq!(totals.change, zero());
        assert!(!totals.is_covered_by(pesos(1000)));
        assert!(totals.is_covered_by(pesos(5000)));
    }

    #[test]
    fn clamp_and_change_hold_over_a_grid() {
        for subtotal in (0..=20_000).step_by(2500) {
            for discount in (-5000..=25_000).step_by(2500) {
                for paid in (0..=25_000).step_by(5000) {
                    let totals =
                        OrderTotals::compute(pesos(subtotal), pesos(discount), pesos(paid));

                    let expected_discount = discount.max(0).min(subtotal);

                    assert_eq!(totals.discount, pesos(expected_discount));
                    assert_eq!(totals.total, pesos(subtotal - expected_discount));
                    assert_eq!(
                        totals.change,
                        pesos((paid - (subtotal - expected_discount)).max(0))
                    );
                }
            }
        }
    }
}
