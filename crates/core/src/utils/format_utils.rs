//! Rupiah formatting for log output (Indonesian separators).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Formats an amount as whole Rupiah, e.g. `Rp 1.234.567`.
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}Rp {}", sign, group_thousands(&rounded.abs().trunc().to_string()))
}

/// Formats an amount in Miliar with two decimals, e.g. `Rp 15,00 Miliar`.
pub fn format_miliar(amount: Decimal) -> String {
    let miliar = (amount / dec!(1000000000))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", miliar.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if miliar.is_sign_negative() && !miliar.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}Rp {},{} Miliar", sign, group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
