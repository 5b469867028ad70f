use std::borrow::Cow;
use crate::types::{quoted_by, Pair, QuoteType};

/// Split a raw `KEY=VALUE` token on its first separator.
///
/// The separator search starts at byte 1, so a key may itself begin with `=`
/// (Windows exposes entries such as `=::=::`). A value wrapped in a matching
/// pair of `'` or `"` has those two characters removed; nothing else is
/// unescaped or trimmed.
///
/// Returns `None` when the token has no separator after its first byte.
pub fn parse_pair(raw: &str) -> Option<Pair<'_>> {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    // '=' is ASCII, so its byte index is always a char boundary.
    let sep = 1 + bytes[1..].iter().position(|&b| b == b'=')?;
    let key = &raw[..sep];
    let value = &raw[sep + 1..];

    let quote = quoted_by(value);
    let value = match quote {
        QuoteType::None => value,
        _ => &value[1..value.len() - 1],
    };

    Some(Pair {
        key: Cow::Borrowed(key),
        value: Cow::Borrowed(value),
        quote,
    })
}
