//! String literal escape processing.
//!
//! Valid escapes: `\n` `\t` `\r` `\0` `\\` `\"` `\'` and `\u{X}` with one to
//! six hex digits naming a Unicode scalar value. Anything else after a
//! backslash invalidates the whole literal.

/// A piece of decoded string content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fragment<'a> {
    /// Bytes copied through unchanged.
    Raw(&'a [u8]),
    /// A decoded escape.
    Char(char),
}

/// The literal contains a bad escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InvalidEscape;

/// Walk `content` (the bytes between the quotes), handing each decoded
/// fragment to `emit`.
fn unescape_with<'a>(
    content: &'a [u8],
    mut emit: impl FnMut(Fragment<'a>),
) -> Result<(), InvalidEscape> {
    let mut rest = content;
    while let Some(backslash) = find_backslash(rest) {
        if backslash > 0 {
            emit(Fragment::Raw(&rest[..backslash]));
        }
        let escape = &rest[backslash + 1..];
        let (ch, consumed) = match escape.first() {
            Some(b'n') => ('\n', 1),
            Some(b't') => ('\t', 1),
            Some(b'r') => ('\r', 1),
            Some(b'0') => ('\0', 1),
            Some(b'\\') => ('\\', 1),
            Some(b'"') => ('"', 1),
            Some(b'\'') => ('\'', 1),
            Some(b'u') => unicode_escape(&escape[1..]).map(|(c, n)| (c, n + 1))?,
            _ => return Err(InvalidEscape),
        };
        emit(Fragment::Char(ch));
        rest = &escape[consumed..];
    }
    if !rest.is_empty() {
        emit(Fragment::Raw(rest));
    }
    Ok(())
}

fn find_backslash(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b == b'\\')
}

/// Parse `{X…}` after `\u`. Returns the scalar and the bytes consumed.
fn unicode_escape(bytes: &[u8]) -> Result<(char, usize), InvalidEscape> {
    if bytes.first() != Some(&b'{') {
        return Err(InvalidEscape);
    }
    let close = bytes
        .iter()
        .position(|&b| b == b'}')
        .ok_or(InvalidEscape)?;
    let digits = &bytes[1..close];
    if digits.is_empty() || digits.len() > 6 {
        return Err(InvalidEscape);
    }
    let mut value: u32 = 0;
    for &d in digits {
        let digit = char::from(d).to_digit(16).ok_or(InvalidEscape)?;
        value = value * 16 + digit;
    }
    let ch = char::from_u32(value).ok_or(InvalidEscape)?;
    Ok((ch, close + 1))
}

/// Check a string literal body without decoding it.
pub(crate) fn validate(content: &[u8]) -> Result<(), InvalidEscape> {
    unescape_with(content, |_| {})
}

/// Decode a string literal body. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD.
pub(crate) fn unescape(content: &[u8]) -> Result<String, InvalidEscape> {
    let mut bytes = Vec::with_capacity(content.len());
    unescape_with(content, |fragment| match fragment {
        Fragment::Raw(raw) => bytes.extend_from_slice(raw),
        Fragment::Char(ch) => {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
