use std::collections::hash_map;
use std::collections::HashMap;
use crate::parser::parse_pair;
use crate::types::Pair;

/// String-keyed environment map. Inserting an existing key overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    pub(crate) pairs: HashMap<String, String>,
}

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { pairs: HashMap::with_capacity(capacity) }
    }

    /// Get value by key (returns None if not found)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    /// Get value or default
    pub fn get_or<'b>(&'b self, key: &str, default: &'b str) -> &'b str {
        self.get(key).unwrap_or(default)
    }

    /// Check if key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.pairs.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.pairs.remove(key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    /// Iterate over all pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every entry of `source` into this map, overwriting existing keys.
    pub fn merge<I, K, V>(&mut self, source: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in source {
            self.pairs.insert(k.into(), v.into());
        }
    }

    /// Export to HashMap<String, String> (owned copies)
    pub fn to_map(&self) -> HashMap<String, String> {
        self.pairs.clone()
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.pairs
    }

    /// Store a parsed pair regardless of an empty value.
    pub(crate) fn store(&mut self, pair: Pair<'_>) {
        let (key, value) = pair.into_tuple();
        self.pairs.insert(key, value);
    }

    /// Parse `raw` and store it only when both key and value are non-empty.
    /// This is the storage policy of line and slice ingestion.
    pub(crate) fn store_complete(&mut self, raw: &str) -> bool {
        match parse_pair(raw) {
            Some(pair) if pair.is_complete() => {
                self.store(pair);
                true
            }
            Some(pair) => {
                tracing::trace!(key = %pair.key, "skipping pair with empty value");
                false
            }
            None => {
                tracing::trace!("skipping token without separator");
                false
            }
        }
    }
}

impl From<HashMap<String, String>> for EnvMap {
    fn from(pairs: HashMap<String, String>) -> Self {
        Self { pairs }
    }
}

impl From<EnvMap> for HashMap<String, String> {
    fn from(env: EnvMap) -> Self {
        env.pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = EnvMap::new();
        env.merge(iter);
        env
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for EnvMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

impl IntoIterator for EnvMap {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a EnvMap {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Search `maps` in order, then ask `fallback`. The first hit wins.
pub fn lookup_in<F>(key: &str, maps: &[&EnvMap], fallback: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    maps.iter()
        .find_map(|m| m.get(key))
        .map(str::to_owned)
        .or_else(|| fallback(key))
}

/// Search `maps` in order and fall back to the process environment.
pub fn lookup_env(key: &str, maps: &[&EnvMap]) -> Option<String> {
    lookup_in(key, maps, |k| std::env::var(k).ok())
}

/// Like [`lookup_env`] but returns an empty string when nothing matches.
pub fn getenv(key: &str, maps: &[&EnvMap]) -> String {
    lookup_env(key, maps).unwrap_or_default()
}
