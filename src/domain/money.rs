//! Display helpers for dollar amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents, with exact midpoints going away from zero.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as US dollars with thousands separators.
///
/// Whole amounts drop the cents (`$31,287`); anything else shows exactly two
/// decimals (`$1,234.50`).
pub fn format_usd(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = rounded.abs();

    let body = if magnitude.fract().is_zero() {
        group_thousands(&magnitude.trunc().normalize().to_string())
    } else {
        let fixed = format!("{magnitude:.2}");
        match fixed.split_once('.') {
            Some((whole, cents)) => format!("{}.{cents}", group_thousands(whole)),
            None => group_thousands(&fixed),
        }
    };

    format!("{sign}${body}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
