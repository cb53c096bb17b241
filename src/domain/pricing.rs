// src/domain/pricing.rs

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Square footage must be a positive number, got {0}")]
pub struct InvalidAreaError(pub f64);

/// Renders a price the way an en-US locale does: `$`, comma grouping, and up to
/// three fraction digits with trailing zeros dropped.
///
/// `1234567.0` becomes `"$1,234,567"`, `194.44` becomes `"$194.44"`.
pub fn format_price(price: f64) -> String {
    let negative = price < 0.0;
    let rounded = (price.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc();
    let fraction = ((rounded - whole) * 1000.0).round() as u64;

    let mut out = String::from("$");
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(whole as u64));

    if fraction > 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Price divided by area, rounded to cents after the division.
pub fn price_per_area(price: f64, area: f64) -> Result<f64, InvalidAreaError> {
    // `!(area > 0.0)` also rejects NaN.
    if !(area > 0.0) {
        return Err(InvalidAreaError(area));
    }
    Ok(round_cents(price / area))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
