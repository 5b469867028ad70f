use std::borrow::Cow;
use std::fmt;

// ==================================================================================
//  Quoting
// ==================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteType {
    Single, // '
    Double, // "
    #[default]
    None,   // No quotes
}

impl QuoteType {
    #[inline]
    pub fn from_byte(b: u8) -> Self {
        match b {
            b'\'' => QuoteType::Single,
            b'"' => QuoteType::Double,
            _ => QuoteType::None,
        }
    }
}

// ==================================================================================
//  Pair
// ==================================================================================

/// A single `KEY=VALUE` token split into its parts.
///
/// Key and value borrow from the raw token whenever possible. `quote` records
/// which pair of quotes, if any, was stripped from the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<'a> {
    pub key: Cow<'a, str>,
    pub value: Cow<'a, str>,
    pub quote: QuoteType,
}

impl<'a> Pair<'a> {
    #[inline]
    pub fn new(key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            quote: QuoteType::None,
        }
    }

    /// Both key and value are non-empty. Line and slice ingestion only store
    /// pairs that pass this check.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }

    /// Re-encode as a raw token that parses back to the same key and value.
    ///
    /// The value is wrapped in double quotes only when it would otherwise lose
    /// its own surrounding quotes on the next parse.
    pub fn to_raw(&self) -> String {
        let mut out = String::with_capacity(self.key.len() + self.value.len() + 3);
        out.push_str(&self.key);
        out.push('=');
        if needs_quotes(&self.value) {
            out.push('"');
            out.push_str(&self.value);
            out.push('"');
        } else {
            out.push_str(&self.value);
        }
        out
    }

    pub fn into_owned(self) -> Pair<'static> {
        Pair {
            key: Cow::Owned(self.key.into_owned()),
            value: Cow::Owned(self.value.into_owned()),
            quote: self.quote,
        }
    }

    pub fn into_tuple(self) -> (String, String) {
        (self.key.into_owned(), self.value.into_owned())
    }
}

impl fmt::Display for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_raw())
    }
}

/// A value whose first and last bytes form a matching quote pair.
#[inline]
pub(crate) fn quoted_by(value: &str) -> QuoteType {
    let bytes = value.as_bytes();
    if bytes.len() < 2 {
        return QuoteType::None;
    }
    let first = bytes[0];
    if first == bytes[bytes.len() - 1] {
        QuoteType::from_byte(first)
    } else {
        QuoteType::None
    }
}

#[inline]
fn needs_quotes(value: &str) -> bool {
    quoted_by(value) != QuoteType::None
}
