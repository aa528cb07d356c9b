//! Price Handling
//!
//! Digit-only price input, tax-inclusive amounts and yen display.

use crate::config::{TAX_DENOMINATOR, TAX_NUMERATOR};

/// Keep only ASCII digits, in order
pub fn sanitize_price(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a raw price, treating empty or unparseable text as 0
pub fn parse_price(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// Price with tax applied, rounded half-up
pub fn tax_included(price: u64) -> u64 {
    let taxed = (price as u128 * TAX_NUMERATOR as u128 + (TAX_DENOMINATOR / 2) as u128)
        / TAX_DENOMINATOR as u128;
    u64::try_from(taxed).unwrap_or(u64::MAX)
}

/// Group digits by thousands: 1078 -> "1,078"
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
