//! Integer literal values.

/// Parse digits in `radix`, skipping `_` separators.
///
/// Returns `None` on a digit outside the radix or on `u64` overflow.
#[inline]
pub(crate) fn parse_int_skip_underscores(digits: &[u8], radix: u32) -> Option<u64> {
    let mut result: u64 = 0;
    for &b in digits {
        if b == b'_' {
            continue;
        }
        let digit = char::from(b).to_digit(radix)?;
        result = result.checked_mul(u64::from(radix))?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

/// Split an integer lexeme into its digits and radix.
pub(crate) fn split_radix(lexeme: &[u8]) -> (&[u8], u32) {
    match lexeme {
        [b'0', b'x', rest @ ..] => (rest, 16),
        [b'0', b'b', rest @ ..] => (rest, 2),
        _ => (lexeme, 10),
    }
}
