//! Price Component

use leptos::prelude::*;

const MAX_FRACTION_DIGITS: usize = 3;

/// Group digits by thousands: `388000` becomes `388,000`.
///
/// At most three fraction digits are kept and trailing zeros dropped, so
/// `12.5` stays `12.5`.
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (digits, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Current price, with the original price struck through when given
#[component]
pub fn Price(value: f64, original: Option<f64>) -> impl IntoView {
    view! {
        <div class="price">
            <span class="price-current">{format_price(value)}</span>
            {original.map(|original| view! {
                <span class="price-original">{format_price(original)}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(65000.0), "65,000");
        assert_eq!(format_price(388000.0), "388,000");
        assert_eq!(format_price(1234567.0), "1,234,567");
        assert_eq!(format_price(-1500.0), "-1,500");
    }

    #[test]
    fn test_format_price_fractions() {
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(1234.567), "1,234.567");
        assert_eq!(format_price(0.1 + 0.2), "0.3");
        assert_eq!(format_price(9.9999), "10");
        assert_eq!(format_price(-0.0001), "0");
    }
}
