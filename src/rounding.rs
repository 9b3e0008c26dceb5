//! Decimal rounding of monetary values
//!
//! Values are rounded from their exact binary representation, so a stored
//! 2.675 (really 2.67499999...) rounds to 2.67. Exact midpoints such as
//! 2652.25 round half to even.

/// Digits inspected past the rounding position to detect an exact midpoint
const TIE_DIGITS: usize = 25;

/// Round `value` to `decimals` decimal places
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let magnitude = value.abs();
    let target = match midpoint_parity(magnitude, decimals) {
        // Step one ulp off the midpoint so formatting rounds the way we want
        Some(true) => f64::from_bits(magnitude.to_bits() - 1),
        Some(false) => f64::from_bits(magnitude.to_bits() + 1),
        None => magnitude,
    };

    let rounded: f64 = format!("{:.*}", decimals, target).parse().unwrap_or(magnitude);
    rounded.copysign(value)
}

/// Round to cents
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// If `magnitude` sits exactly halfway between two `decimals`-place values,
/// returns whether the lower neighbour's last digit is even.
fn midpoint_parity(magnitude: f64, decimals: usize) -> Option<bool> {
    let wide = format!("{:.*}", decimals + TIE_DIGITS, magnitude);
    let (head, tail) = wide.split_at(wide.len() - TIE_DIGITS);

    let mut tail_digits = tail.bytes();
    if tail_digits.next() != Some(b'5') || !tail_digits.all(|b| b == b'0') {
        return None;
    }

    let last = head.trim_end_matches('.').bytes().last()?;
    Some((last - b'0') % 2 == 0)
}
