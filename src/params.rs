//! Transformation parameter values and ordered parameter maps
//!
//! Parameter names and values are opaque pass-through strings for the CDN,
//! except `width`, `height`, `dpr` and `quality`, which drive srcset
//! expansion, and `signature`, which the builder computes itself.
//!
//! A value can be:
//! - a scalar (integer, float, boolean, string, timestamp),
//! - explicitly empty (`Value::Empty`, rendered as a bare query key),
//! - a list or a bounded inclusive range, multi-values that only make sense
//!   before srcset expansion splits them into per-candidate scalars.
//!
//! Absence is modeled by the key not being present in the map at all; an
//! absent key and an `Empty` value are distinct and both survive expansion
//! faithfully.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Present with no value; renders as a bare key
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// Multi-value list, split positionally during srcset expansion
    List(Vec<i64>),
    /// Bounded inclusive interval, expanded during srcset expansion;
    /// bounds may be given in either order
    Range(i64, i64),
}

impl Value {
    /// Whether this value expands into multiple srcset candidates.
    pub fn is_expandable(&self) -> bool {
        matches!(self, Value::List(_) | Value::Range(..))
    }

    /// Renders a scalar value for query serialization. Multi-values and
    /// `Empty` have no scalar rendering.
    pub(crate) fn render(&self) -> Option<String> {
        match self {
            Value::Int(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Str(s) => Some(s.clone()),
            Value::Empty | Value::List(_) | Value::Range(..) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Timestamps convert to their Unix epoch seconds, as expected by the CDN
/// for parameters like `expires`.
impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Int(t.timestamp())
    }
}

impl From<Vec<i64>> for Value {
    fn from(values: Vec<i64>) -> Self {
        Value::List(values)
    }
}

impl From<Vec<i32>> for Value {
    fn from(values: Vec<i32>) -> Self {
        Value::List(values.into_iter().map(i64::from).collect())
    }
}

impl From<RangeInclusive<i64>> for Value {
    fn from(range: RangeInclusive<i64>) -> Self {
        Value::Range(*range.start(), *range.end())
    }
}

impl From<RangeInclusive<i32>> for Value {
    fn from(range: RangeInclusive<i32>) -> Self {
        Value::Range(*range.start() as i64, *range.end() as i64)
    }
}

/// Insertion-ordered parameter map
///
/// Setting an existing key replaces its value in place, keeping the original
/// insertion position; the rendered query string preserves this order.
///
/// # Example
/// ```
/// use picdn::Params;
///
/// let params = Params::new().with("width", 200).with("format", "png");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(&key.into(), value.into());
        self
    }

    /// Inserts or replaces a value; an existing key keeps its position.
    pub fn set(&mut self, key: &str, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key.to_string(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonicalizes keys: underscores become hyphens, so `trim_color` and
    /// `"trim-color"` address the same parameter. When both spellings are
    /// supplied the later value wins, at the first spelling's position.
    pub(crate) fn dasherized(&self) -> Params {
        let mut normalized = Params::new();
        for (key, value) in self.iter() {
            normalized.set(&key.replace('_', "-"), value.clone());
        }
        normalized
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.set(&key.into(), value.into());
        }
        params
    }
}
