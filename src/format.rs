//! Number formatting for displayed values
//!
//! Both helpers follow browser number formatting so that every front-end
//! prints the same text for the same value.

/// Format `value` with exactly `digits` decimals, rounding exact ties away
/// from zero
///
/// `format!("{:.2}")` rounds a value that sits exactly halfway between two
/// candidates to the even one (`3.125` becomes `3.12`). Here it becomes
/// `3.13`. Values that only look like ties in decimal (`1.005` is stored
/// as `1.00499…`) still round down.
pub fn to_fixed(value: f64, digits: usize) -> String {
    // -0 prints as 0
    let value = value + 0.0;
    let text = format!("{:.*}", digits, value);
    if !is_exact_tie(value, digits) {
        return text;
    }

    let rounded: f64 = text.parse().unwrap_or(value);
    if rounded.abs() > value.abs() {
        return text;
    }
    let half_step = 0.5 / 10f64.powi(digits as i32);
    format!("{:.*}", digits, value + half_step.copysign(value))
}

/// Shortest text that reads back as `value`
///
/// Magnitudes from `1e-6` up to `1e21` print positionally (`6`, `7.45`,
/// `0.000001`). Outside that range they use exponent notation (`1e+21`,
/// `1.5e-7`). Negative zero prints as `0`.
pub fn to_display(value: f64) -> String {
    let value = value + 0.0;
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Whether `value` sits exactly halfway between two `digits`-decimal numbers
///
/// With `value = m * 2^e`, `value * 10^digits` has a fractional part of
/// exactly one half iff `m * 10^digits * 2^(e + 1)` is an odd integer.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    let bits = value.to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exponent_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent_bits - 1075)
    };

    // 10^digits contributes `digits` factors of two
    mantissa.trailing_zeros() as i64 + digits as i64 == -exponent - 1
}
