//! Display formatting
//!
//! [`format_display`] bounds the on-screen width of the display value;
//! [`number_to_display`] turns a numeric service reply into the text that
//! seeds the next expression.

/// Values longer than this many characters are shown as an approximation
pub const MAX_DISPLAY_LEN: usize = 15;

/// Significant digits used for the approximation
pub const DISPLAY_PRECISION: usize = 10;

/// Project a display value onto the screen.
///
/// Values up to [`MAX_DISPLAY_LEN`] characters are returned verbatim. Longer
/// values are rendered from their leading numeric prefix with
/// [`DISPLAY_PRECISION`] significant digits. A value with no numeric prefix
/// renders as `NaN`.
pub fn format_display(value: &str) -> String {
    if value.chars().count() > MAX_DISPLAY_LEN {
        to_precision(parse_leading_float(value), DISPLAY_PRECISION)
    } else {
        value.to_string()
    }
}

/// Stringify a numeric reply.
///
/// Integers are printed verbatim. Floats use the shortest representation
/// that round-trips, switching to exponent form (`1e+21`, `1e-7`) for very
/// large or very small magnitudes.
pub fn number_to_display(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }
    float_to_display(number.as_f64().unwrap_or(f64::NAN))
}

fn float_to_display(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let sci = format!("{:e}", value);
        match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        }
    } else {
        format!("{}", value)
    }
}

/// Render `value` with `precision` significant digits (1 to 100).
///
/// Uses fixed notation unless the decimal exponent is below -6 or at least
/// `precision`, in which case exponent notation is used. Trailing zeros are
/// kept. An exact tie at the last kept digit rounds away from zero.
pub fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.clamp(1, 100);

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", precision - 1, 0.0);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = significant_digits(value.abs(), precision);

    if exponent < -6 || exponent >= precision as i32 {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        if tail.is_empty() {
            format!("{sign}{head}e{exp_sign}{}", exponent.abs())
        } else {
            format!("{sign}{head}.{tail}e{exp_sign}{}", exponent.abs())
        }
    } else if exponent >= 0 {
        let (int, frac) = digits.split_at(exponent as usize + 1);
        if frac.is_empty() {
            format!("{sign}{int}")
        } else {
            format!("{sign}{int}.{frac}")
        }
    } else {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    }
}

/// First `precision` significant digits of a positive finite `magnitude`,
/// rounded half up, and the decimal exponent of the leading digit.
fn significant_digits(magnitude: f64, precision: usize) -> (String, i32) {
    // 1100 fractional digits hold the exact binary expansion of any f64
    let exact = format!("{:.1100e}", magnitude);
    let (mantissa, exp) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exp.parse().unwrap_or(0);

    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept = all[..precision].to_vec();

    if all[precision] >= b'5' {
        let mut i = precision;
        loop {
            if i == 0 {
                // 99..9 carried into a new leading digit
                kept.insert(0, b'1');
                kept.pop();
                exponent += 1;
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    (String::from_utf8(kept).unwrap_or_default(), exponent)
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Returns NaN when there is no numeric prefix.
pub fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    if s[i..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }
    let mut end = i;

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}
