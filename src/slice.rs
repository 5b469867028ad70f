use crate::env::EnvMap;

/// Ingest clean `KEY=VALUE` tokens into `dest`.
///
/// Tokens are not trimmed and comments are not recognised. Only pairs with a
/// non-empty key and value are stored. Returns the number stored.
pub fn parse_slice<I>(tokens: I, dest: &mut EnvMap) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parsed = 0;
    for token in tokens {
        if dest.store_complete(token.as_ref()) {
            parsed += 1;
        }
    }
    parsed
}

/// Build a map from already-split variables, as delivered by the OS.
///
/// Each variable is re-joined as `KEY=VALUE` and goes through the same policy
/// as [`parse_slice`].
pub fn environ_from<I, K, V>(vars: I) -> (EnvMap, usize)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let tokens: Vec<String> = vars
        .into_iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
        .collect();

    let mut env = EnvMap::with_capacity(tokens.len());
    let parsed = parse_slice(&tokens, &mut env);
    tracing::debug!(parsed, total = tokens.len(), "ingested environment");
    (env, parsed)
}

/// Build a map from the current process environment.
pub fn environ() -> (EnvMap, usize) {
    environ_from(std::env::vars_os().map(|(k, v)| {
        (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned())
    }))
}
