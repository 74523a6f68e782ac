//! Money display helpers.
//!
//! Prices travel as integer minor units. Display converts to the decimal
//! amount, rounds to two places, drops trailing fractional zeros and groups
//! the integer part in thousands: `123456` minor USD renders as `$1,234.56`,
//! `2000` as `$20`.

use rust_decimal::prelude::*;

const CENT_PLACES: u32 = 2;

/// Symbols as shown by an English locale. Codes not listed render as themselves.
const SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("VND", "₫"),
    ("XAF", "FCFA"),
    ("XCD", "EC$"),
    ("XOF", "F\u{202f}CFA"),
    ("XPF", "CFPF"),
];

/// Display symbol for an ISO currency code, falling back to the code itself.
pub fn currency_symbol(code: &str) -> String {
    let upper = code.trim().to_ascii_uppercase();
    SYMBOLS
        .iter()
        .find(|(iso, _)| *iso == upper)
        .map(|(_, symbol)| symbol.to_string())
        .unwrap_or(upper)
}

pub fn minor_to_decimal(minor: f64) -> f64 {
    minor / 100.0
}

/// Two-decimal rounding without trailing zeros, integer part comma grouped.
pub fn format_amount(value: f64) -> String {
    let rounded = round_cents(value);
    let trimmed = rounded.as_str();

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(trimmed.len() + integer.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Rounds the exact binary value to cents, ties away from zero, trailing zeros dropped.
fn round_cents(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded = exact
                .round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            rounded.to_string()
        }
        // NaN and infinities
        None => value.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Symbol-prefixed display string for a minor-unit amount
pub fn format_price(minor: f64, currency: &str) -> String {
    format!("{}{}", currency_symbol(currency), format_amount(minor_to_decimal(minor)))
}
