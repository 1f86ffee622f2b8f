//! Request parameters and query-string encoding.
//!
//! The service expects list-valued parameters as repeated keys
//! (`hash=a&hash=b`), not the bracketed `hash[]=a` form that generic
//! serializers such as `serde_qs` produce, so encoding is done by hand over
//! [`url::form_urlencoded`].

use std::fmt;

use url::form_urlencoded;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

/// A parameter value: one scalar, or an ordered list sent as repeated keys.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Single(Scalar),
    Multi(Vec<Scalar>),
}

impl ParamValue {
    /// Iterate over the scalar values, one per emitted `key=value` pair.
    pub fn scalars(&self) -> std::slice::Iter<'_, Scalar> {
        match self {
            Self::Single(s) => std::slice::from_ref(s).iter(),
            Self::Multi(v) => v.iter(),
        }
    }

    /// The value as text, if it is a single textual scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty => |$v:ident| $conv:expr),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from($v: $ty) -> Self {
                    $conv
                }
            }

            impl From<$ty> for ParamValue {
                fn from(v: $ty) -> Self {
                    Self::Single(Scalar::from(v))
                }
            }
        )*
    };
}

impl_scalar_from! {
    &str => |v| Scalar::Text(v.to_string()),
    String => |v| Scalar::Text(v),
    &String => |v| Scalar::Text(v.clone()),
    i32 => |v| Scalar::Int(i64::from(v)),
    i64 => |v| Scalar::Int(v),
    u32 => |v| Scalar::Int(i64::from(v)),
    f64 => |v| Scalar::Float(v),
    bool => |v| Scalar::Bool(v),
}

impl<T: Into<Scalar>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Multi(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        Self::Multi(values.iter().map(|v| Scalar::from(*v)).collect())
    }
}

/// Ordered request parameters.
///
/// Keys are unique; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style [`insert_opt`](Self::insert_opt).
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Set `key` only when a value was supplied. `None` leaves the key absent.
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Add `value` under `key`, turning an existing value into a list.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                let mut values = match std::mem::replace(slot, ParamValue::Multi(Vec::new())) {
                    ParamValue::Single(first) => vec![first],
                    ParamValue::Multi(values) => values,
                };
                values.push(value);
                *slot = ParamValue::Multi(values);
            }
            None => self.pairs.push((key, ParamValue::Single(value))),
        }
    }

    /// Set `key` unless it is already present. Returns whether it was set.
    pub fn insert_if_absent(&mut self, key: &str, value: impl Into<ParamValue>) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.pairs.push((key.to_string(), value.into()));
        true
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, ParamValue)> {
        self.pairs.iter()
    }

    /// Replace every boolean scalar with the literal text `true` / `false`.
    pub fn normalize_booleans(&mut self) {
        fn normalize(s: &mut Scalar) {
            if let Scalar::Bool(b) = s {
                *s = Scalar::Text(b.to_string());
            }
        }

        for (_, value) in &mut self.pairs {
            match value {
                ParamValue::Single(s) => normalize(s),
                ParamValue::Multi(v) => v.iter_mut().for_each(normalize),
            }
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a (String, ParamValue);
    type IntoIter = std::slice::Iter<'a, (String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Encode parameters as an `application/x-www-form-urlencoded` string.
///
/// List values produce one `key=value` pair per element in list order.
/// Used for both GET query strings and POST bodies.
pub fn encode(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        for scalar in value.scalars() {
            serializer.append_pair(key, &scalar.to_string());
        }
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_values_repeat_key() {
        let params = Params::new().with("tag", vec!["a", "b", "c"]);
        assert_eq!(encode(&params), "tag=a&tag=b&tag=c");
    }

    #[test]
    fn test_no_bracket_keys() {
        let params = Params::new()
            .with("hash", vec!["x1", "x2"])
            .with("shortUrl", "http://bit.ly/y");
        let encoded = encode(&params);
        assert!(!encoded.contains("%5B%5D"));
        assert!(!encoded.contains("[]"));
        assert_eq!(encoded, "hash=x1&hash=x2&shortUrl=http%3A%2F%2Fbit.ly%2Fy");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let params = Params::new()
            .with("code", "c")
            .with("redirect_uri", "https://cb")
            .with("client_id", "id");
        assert_eq!(
            encode(&params),
            "code=c&redirect_uri=https%3A%2F%2Fcb&client_id=id"
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new().with("a", 1_i64).with("b", 2_i64);
        params.insert("a", 3_i64);
        assert_eq!(encode(&params), "a=3&b=2");
    }

    #[test]
    fn test_insert_opt_none_omits_key() {
        let params = Params::new()
            .with_opt("limit", None::<i64>)
            .with_opt("private", Some(false))
            .with_opt("offset", Some(0_i64));
        assert!(!params.contains_key("limit"));
        assert_eq!(encode(&params), "private=false&offset=0");
    }

    #[test]
    fn test_append_builds_list() {
        let mut params = Params::new();
        params.append("hash", "a");
        params.append("hash", "b");
        params.append("hash", "c");
        assert_eq!(encode(&params), "hash=a&hash=b&hash=c");
    }

    #[test]
    fn test_insert_if_absent_keeps_existing() {
        let mut params = Params::new().with("access_token", "mine");
        assert!(!params.insert_if_absent("access_token", "held"));
        assert_eq!(params.get("access_token").and_then(ParamValue::as_str), Some("mine"));
    }

    #[test]
    fn test_normalize_booleans() {
        let mut params = Params::new()
            .with("private", true)
            .with("flags", vec![Scalar::Bool(false), Scalar::Int(1)]);
        params.normalize_booleans();
        assert_eq!(params.get("private"), Some(&ParamValue::Single(Scalar::Text("true".into()))));
        assert_eq!(
            params.get("flags"),
            Some(&ParamValue::Multi(vec![Scalar::Text("false".into()), Scalar::Int(1)]))
        );
        assert_eq!(encode(&params), "private=true&flags=false&flags=1");
    }

    #[test]
    fn test_empty_params_encode_to_empty_string() {
        assert_eq!(encode(&Params::new()), "");
    }

    #[test]
    fn test_percent_encoding() {
        let params = Params::new().with("note", "a&b=c d");
        assert_eq!(encode(&params), "note=a%26b%3Dc+d");
    }
}
