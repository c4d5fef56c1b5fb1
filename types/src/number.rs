//! Operand parsing and display formatting.

/// Maximum number of fractional digits shown for a computed value.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Parse operand text into a number.
///
/// Operand text only ever holds digits, one decimal point and an optional
/// leading minus sign; anything else (including `inf`/`NaN` spellings that
/// `f64::from_str` would accept) is rejected.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if !unsigned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Format a number for display.
///
/// Uses the shortest decimal text that round-trips. When that text has more
/// than [`MAX_FRACTION_DIGITS`] fractional digits, it is rounded half away
/// from zero to exactly that many digits.
#[must_use]
pub fn format_number(value: f64) -> String {
    // -0.0 displays as "0"
    let value = if value == 0.0 { 0.0 } else { value };
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, fraction)) if fraction.len() > MAX_FRACTION_DIGITS => round_fraction(&text),
        _ => text,
    }
}

/// Round decimal text half away from zero at [`MAX_FRACTION_DIGITS`].
///
/// Works on the decimal digits directly so the result matches what the user
/// would get rounding the displayed value by hand.
fn round_fraction(text: &str) -> String {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(MAX_FRACTION_DIGITS))
        .map(|b| b - b'0')
        .collect();

    let round_up = fraction
        .as_bytes()
        .get(MAX_FRACTION_DIGITS)
        .is_some_and(|b| *b >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - MAX_FRACTION_DIGITS;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative && digits.iter().any(|d| *d != 0) {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == split {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}
