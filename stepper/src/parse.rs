//! Lenient prefix parsing for free-form input text.
//!
//! Both parsers read the longest numeric prefix and ignore whatever follows,
//! so `"12 tickets"` reads as `12`. Text without a leading number yields
//! `None`.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

/// Parse the leading base-10 integer of `text`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted. Fractions are
/// truncated (`"3.9"` reads as `3`). Digit runs beyond the `i64` range
/// saturate.
#[must_use]
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let (negative, rest) = split_sign(text.trim_start());
    let digits = leading_digits(rest);
    if digits == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for byte in &rest.as_bytes()[..digits] {
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    Some(value)
}

/// Parse the leading decimal number of `text`, including fractions,
/// exponents, and `Infinity`.
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, rest) = split_sign(trimmed);

    if rest.starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let bytes = rest.as_bytes();
    let int_digits = leading_digits(rest);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&rest[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&rest[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let sign_len = trimmed.len() - rest.len();
    trimmed[..sign_len + end].parse::<f64>().ok()
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}
