//! Reserved keyword lookup.
//!
//! Keywords are 2-8 bytes long and lowercase ASCII. The lookup buckets by
//! length first, so most identifiers are rejected before any comparison.

use leo_ir::TokenKind;

/// Resolve an identifier's text to its keyword kind, if it is one.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=8).contains(&len) || !text[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            b"fn" => Some(TokenKind::Fn),
            b"if" => Some(TokenKind::If),
            b"in" => Some(TokenKind::In),
            _ => None,
        },
        3 => match text {
            b"for" => Some(TokenKind::For),
            b"let" => Some(TokenKind::Let),
            b"nil" => Some(TokenKind::Nil),
            _ => None,
        },
        4 => match text {
            b"else" => Some(TokenKind::Else),
            b"true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            b"break" => Some(TokenKind::Break),
            b"const" => Some(TokenKind::Const),
            b"false" => Some(TokenKind::False),
            b"while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            b"return" => Some(TokenKind::Return),
            _ => None,
        },
        8 => match text {
            b"continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}
