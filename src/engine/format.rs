//! Number formatting for the two display fields.
//!
//! Operand text (what lives inside a `Number` token) and result text (what the
//! result field shows) follow different rules:
//!
//! - operands use the shortest round-trip decimal, so negate and percent can
//!   re-serialize a value without losing precision; very small and very large
//!   magnitudes switch to exponent form (`1e-8`, `1e+21`) like `Number#toString`
//! - results are rounded half away from zero to a fixed number of fraction
//!   digits and grouped in thousands, like `toLocaleString()` in en-US

use crate::engine::config::DisplayConfig;

const INFINITY_SIGN: &str = "∞";

/// Decimal exponents outside this range serialize in exponent form.
const PLAIN_EXPONENTS: std::ops::RangeInclusive<i32> = -6..=20;

/// Parse operand text. Unparseable text yields NaN, which then propagates.
pub fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Serialize a value back into operand text.
pub fn serialize_operand(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        let sign = if value < 0.0 { "-" } else { "" };
        let magnitude = value.abs();
        let scientific = format!("{:e}", magnitude);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(exp) if !PLAIN_EXPONENTS.contains(&exp) => {
                    let exp_sign = if exp > 0 { "+" } else { "" };
                    format!("{}{}e{}{}", sign, mantissa, exp_sign, exp)
                }
                _ => format!("{}{}", sign, magnitude),
            },
            None => format!("{}{}", sign, magnitude),
        }
    }
}

/// Format a result for the result field.
pub fn format_display(value: f64, config: &DisplayConfig) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY_SIGN.to_string()
        } else {
            format!("-{}", INFINITY_SIGN)
        };
    }

    let (integer, fraction) = round_half_expand(value.abs(), config.max_fraction_digits);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(integer.len() + integer.len() / 3 + fraction.len() + 2);
    let is_zero = integer.chars().all(|c| c == '0') && fraction.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer, config.grouping_separator));
    if !fraction.is_empty() {
        out.push(config.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Turn result-field text back into operand text, as when chaining a new
/// computation onto the shown answer.
pub fn display_to_operand(display: &str, config: &DisplayConfig) -> String {
    if display == INFINITY_SIGN {
        return "Infinity".to_string();
    }
    if display.strip_prefix('-') == Some(INFINITY_SIGN) {
        return "-Infinity".to_string();
    }

    display
        .chars()
        .filter(|&c| c != config.grouping_separator)
        .map(|c| if c == config.decimal_separator { '.' } else { c })
        .collect()
}

/// Round the shortest decimal form of a non-negative `magnitude` to `digits`
/// fraction digits, ties away from zero. Returns the integer and fraction
/// digit strings.
fn round_half_expand(magnitude: f64, digits: usize) -> (String, String) {
    let shortest = format!("{}", magnitude);
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    if fraction.len() <= digits {
        return (integer.to_string(), fraction.to_string());
    }

    let round_up = fraction.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = integer.bytes().chain(fraction.bytes().take(digits)).collect();
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let fraction = kept.split_off(split);
    (
        String::from_utf8_lossy(&kept).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
