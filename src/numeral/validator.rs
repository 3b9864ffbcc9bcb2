// ============================================================================
// Numeral Validator
// Syntax gate for `[sign]digits[.digits]` tokens
// ============================================================================

/// Returns `true` if `text` is a syntactically valid signed decimal numeral.
///
/// Accepted: an optional leading `+` or `-`, at least one ASCII digit, and at
/// most one `.` which must have a digit on both sides.
///
/// # Examples
/// - `"5"`, `"+5"`, `"-5.0"`, `"007"` are valid
/// - `""`, `"+"`, `"++5"`, `".5"`, `"5."`, `"1.2.3"`, `"5-"` are not
pub fn is_valid_numeral(text: &str) -> bool {
    let body = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);

    match body.split_once('.') {
        Some((integer, fraction)) => is_digit_run(integer) && is_digit_run(fraction),
        None => is_digit_run(body),
    }
}

/// Non-empty and ASCII digits only.
#[inline]
fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
