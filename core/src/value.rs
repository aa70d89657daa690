//! Parsed parameter values.
//!
//! A successful parse produces a [`Params`] mapping from declared names to
//! [`ParamValue`]s. Options that were not supplied are simply absent.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// A single resolved parameter.
///
/// Serializes untagged, so JSON output reads naturally:
/// `"x"`, `1.5`, `["a","b"]`, `[1,2]`, `true` or `null`.
///
/// # Examples
///
/// ```
/// use argschema_core::ParamValue;
///
/// let value = ParamValue::from("value1");
/// assert_eq!(value.as_str(), Some("value1"));
/// assert_eq!(value.as_number(), None);
///
/// assert_eq!(serde_json::to_string(&ParamValue::Null).unwrap(), "null");
/// assert_eq!(serde_json::to_string(&ParamValue::Number(123.5)).unwrap(), "123.5");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Option present with no values (zero-or-more arity).
    Null,
    /// Flag state.
    Bool(bool),
    /// Single numeric value.
    Number(f64),
    /// Single string value, or a matched command name.
    String(String),
    /// Several numeric values.
    NumberList(Vec<f64>),
    /// Several string values.
    StringList(Vec<String>),
}

impl ParamValue {
    /// Returns the string value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string list, if this is one.
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Self::StringList(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the number list, if this is one.
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            Self::NumberList(values) => Some(values),
            _ => None,
        }
    }

    /// Returns `true` for [`ParamValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::StringList(values)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(values: Vec<f64>) -> Self {
        Self::NumberList(values)
    }
}

/// Result mapping of one parse.
///
/// Keys are kept sorted so serialized output is deterministic.
///
/// # Examples
///
/// ```
/// use argschema_core::{ParamValue, Params};
///
/// let mut params = Params::new();
/// params.insert("test1", "value1");
/// params.insert("verbose", true);
///
/// assert_eq!(params.get_str("test1"), Some("value1"));
/// assert!(params.flag("verbose"));
/// assert!(!params.contains("missing"));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Copies every entry of `other` into `self`; later writes win.
    pub fn merge(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Gets a single string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    /// Gets a single numeric value.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ParamValue::as_number)
    }

    /// Gets a string list.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(ParamValue::as_strings)
    }

    /// Gets a number list.
    pub fn get_numbers(&self, key: &str) -> Option<&[f64]> {
        self.get(key).and_then(ParamValue::as_numbers)
    }

    /// Gets a flag state; anything that is not `true` reads as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(ParamValue::as_bool).unwrap_or(false)
    }

    /// Returns `true` if the key is present with an explicit null.
    pub fn is_null(&self, key: &str) -> bool {
        self.get(key).is_some_and(ParamValue::is_null)
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
