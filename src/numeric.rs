//! Allocation-free numeric parsing for parameter and header values.
//!
//! Decimal, unsigned, no sign, no whitespace. Leading zeros are
//! permitted and ignored. Overflow of the 32-bit range on any
//! intermediate multiplication-by-ten or addition is a parse failure,
//! matching the reference implementation's `StringView::to_uint32`.

/// Parses `bytes` as an unsigned 32-bit decimal integer. Returns `None`
/// if `bytes` is empty, contains a non-digit, or the value overflows
/// `u32`.
pub fn parse_u32(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        let digit = u32::from(b - b'0');
        value = value.checked_mul(10)?.checked_add(digit)?;
    }
    Some(value)
}

/// Parses `bytes` as a 32-bit float using the usual dotted syntax. Loss
/// of precision is acceptable; anything that doesn't parse as a finite
/// `f32` (including out-of-range input, which is reported as an
/// infinity) is a parse failure.
pub fn parse_f32(bytes: &[u8]) -> Option<f32> {
    let text = core::str::from_utf8(bytes).ok()?;
    let value: f32 = text.parse().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Parses the literal boolean tokens `true`/`false`, matched
/// case-insensitively, as used by the Switch device's `State` parameter.
pub fn parse_bool(bytes: &[u8]) -> Option<bool> {
    if bytes.eq_ignore_ascii_case(b"true") {
        Some(true)
    } else if bytes.eq_ignore_ascii_case(b"false") {
        Some(false)
    } else {
        None
    }
}
