//! Baht money display.
//!
//! The catalog API reports prices as plain decimal amounts in Thai baht.
//! [`Baht`] wraps an amount for display: `฿` followed by a
//! thousands-grouped integer part, with fractional digits only when the
//! amount actually has any (`฿1,990`, `฿1,234,567.5`).

use std::fmt;

use rust_decimal::Decimal;

/// A decimal amount rendered as a Thai baht price string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baht(pub Decimal);

impl fmt::Display for Baht {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0.normalize();
        let text = amount.abs().to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        if amount.is_sign_negative() && !amount.is_zero() {
            write!(f, "-")?;
        }
        write!(f, "\u{e3f}{}", group_thousands(int_part))?;
        if let Some(frac) = frac_part {
            write!(f, ".{frac}")?;
        }
        Ok(())
    }
}

impl From<Decimal> for Baht {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Insert comma separators every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
