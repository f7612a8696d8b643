//! Request parameters
//!
//! HitBTC accepts loosely-typed key/value arguments on every endpoint. They
//! travel as the query string on reads and as a form-encoded body on writes.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Parameter map attached to a request
///
/// Keys are kept sorted so encoded requests are deterministic. Values are
/// stored in their wire form; anything implementing [`Display`] can be
/// inserted.
///
/// # Example
///
/// ```
/// use hitbtc_types::{Params, Side};
///
/// let params = Params::new()
///     .with("symbol", "ETHBTC")
///     .with("side", Side::Sell)
///     .with("quantity", 0.5);
///
/// assert_eq!(params.get("side"), Some("sell"));
/// assert!(params.contains_key("quantity"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, consuming and returning the map
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys from `required` that are not present, in `required` order
    pub fn missing<'k>(&self, required: &[&'k str]) -> Vec<&'k str> {
        required
            .iter()
            .copied()
            .filter(|key| !self.contains_key(key))
            .collect()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy every entry of `other` into this map, overwriting duplicates
    pub fn extend_from(&mut self, other: &Params) {
        for (k, v) in other.iter() {
            self.0.insert(k.to_string(), v.to_string());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_stringified() {
        let params = Params::new()
            .with("s1", "v1")
            .with("s3", 0)
            .with("price", 0.25);

        assert_eq!(params.get("s1"), Some("v1"));
        assert_eq!(params.get("s3"), Some("0"));
        assert_eq!(params.get("price"), Some("0.25"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_missing_keeps_required_order() {
        let params = Params::new().with("side", "buy").with("extra", "x");
        let missing = params.missing(&["symbol", "side", "quantity", "price"]);
        assert_eq!(missing, vec!["symbol", "quantity", "price"]);
    }

    #[test]
    fn test_missing_empty_when_satisfied() {
        let params: Params = [("currency", "BTC"), ("amount", "1"), ("address", "a")]
            .into_iter()
            .collect();
        assert!(params.missing(&["currency", "amount", "address"]).is_empty());
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let params = Params::new().with("b", 2).with("a", "x");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"a":"x","b":"2"}"#);
    }

    #[test]
    fn test_extend_from_overwrites() {
        let mut base = Params::new().with("symbol", "ETHBTC").with("side", "buy");
        base.extend_from(&Params::new().with("side", "sell"));
        assert_eq!(base.get("side"), Some("sell"));
        assert_eq!(base.get("symbol"), Some("ETHBTC"));
    }
}
