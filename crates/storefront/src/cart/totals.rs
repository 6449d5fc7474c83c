//! Cart arithmetic: line totals, subtotal, item count, discount percent.
//!
//! All money math is exact `Decimal` arithmetic; the only rounding is
//! the half-up rounding of the discount percentage.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::line::CartLineItem;

/// Total price of one line: effective unit price times quantity.
#[must_use]
pub fn line_total(line: &CartLineItem) -> Decimal {
    line.product.effective_price() * Decimal::from(line.quantity.get())
}

/// Sum of all line totals.
#[must_use]
pub fn cart_subtotal(lines: &[CartLineItem]) -> Decimal {
    lines.iter().map(line_total).sum()
}

/// Number of units in the cart (sum of quantities, not lines).
#[must_use]
pub fn total_item_count(lines: &[CartLineItem]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity.get())).sum()
}

/// Percentage saved when the promotional price undercuts the list price,
/// rounded half-up to a whole percent.
///
/// Zero when there is no promotion, the promotion does not actually
/// lower the price, or the list price is not positive.
#[must_use]
pub fn discount_percent(price: Decimal, promotional: Option<Decimal>) -> u32 {
    let Some(promo) = promotional else {
        return 0;
    };
    if price <= Decimal::ZERO || promo >= price {
        return 0;
    }

    let percent = ((price - promo) / price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    percent.to_u32().unwrap_or(0)
}
