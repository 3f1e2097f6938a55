//! JSON value types and utilities.
//!
//! This module defines the [`Value`] enum, the tagged variant at every node
//! of a parsed document, along with the compact and indented serializers.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{array::ArrayList, table::ObjectTable};

/// A JSON value as defined by [RFC 8259].
///
/// Strings hold the *source form* of the literal: escape sequences pass
/// through undecoded, and the serializers emit them verbatim, so a parsed
/// document round-trips structurally. Ownership is strictly tree-shaped —
/// each value exclusively owns its children and releases them on drop.
///
/// # Examples
///
/// ```
/// use jsondom::{ObjectTable, Value};
///
/// let mut table = ObjectTable::new();
/// table.set("key".into(), Value::String("value".into()))?;
/// let v = Value::Object(table);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// # Ok::<(), jsondom::CapacityOverflow>(())
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A double-precision number.
    Number(f64),
    /// A string literal in source (still-escaped) form.
    String(String),
    /// An ordered sequence of values.
    Array(ArrayList),
    /// A keyed table of values.
    Object(ObjectTable),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v.into())
    }
}

impl From<ArrayList> for Value {
    fn from(v: ArrayList) -> Self {
        Self::Array(v)
    }
}

impl From<ObjectTable> for Value {
    fn from(v: ObjectTable) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if this is a [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The backing container, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayList> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable variant of [`as_array`](Self::as_array).
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut ArrayList> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The backing table, if this is an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectTable> {
        match self {
            Self::Object(table) => Some(table),
            _ => None,
        }
    }

    /// Mutable variant of [`as_object`](Self::as_object).
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut ObjectTable> {
        match self {
            Self::Object(table) => Some(table),
            _ => None,
        }
    }

    /// Looks up `key` in an object value; `None` for other shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// let doc = jsondom::parse(r#"{"a": {"b": true}}"#).unwrap();
    /// let inner = doc.get("a").and_then(|v| v.get("b"));
    /// assert_eq!(inner.and_then(jsondom::Value::as_bool), Some(true));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|table| table.get(key))
    }

    /// Indexes into an array value; `None` for other shapes or out of range.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Serializes with two-space indentation.
    ///
    /// The output re-parses to a structurally equal tree; only whitespace
    /// differs from the compact [`Display`](core::fmt::Display) form.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out)
            .expect("fmt::Write to String cannot fail");
        out
    }

    /// Writes the indented form to `f`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_pretty<W: fmt::Write>(&self, f: &mut W) -> fmt::Result {
        self.fmt_pretty(f, 0)
    }

    fn fmt_pretty<W: fmt::Write>(&self, f: &mut W, depth: usize) -> fmt::Result {
        fn indent<W: fmt::Write>(f: &mut W, depth: usize) -> fmt::Result {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            Ok(())
        }

        match self {
            Self::Object(table) if !table.is_empty() => {
                f.write_str("{\n")?;
                let mut first = true;
                for (key, value) in table {
                    if !first {
                        f.write_str(",\n")?;
                    }
                    first = false;
                    indent(f, depth + 1)?;
                    write!(f, "\"{key}\": ")?;
                    value.fmt_pretty(f, depth + 1)?;
                }
                f.write_str("\n")?;
                indent(f, depth)?;
                f.write_str("}")
            }
            Self::Array(items) if !items.is_empty() => {
                f.write_str("[\n")?;
                let mut first = true;
                for value in items {
                    if !first {
                        f.write_str(",\n")?;
                    }
                    first = false;
                    indent(f, depth + 1)?;
                    value.fmt_pretty(f, depth + 1)?;
                }
                f.write_str("\n")?;
                indent(f, depth)?;
                f.write_str("]")
            }
            // Scalars and empty containers render as in the compact form.
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            // Finite by construction when parsed; shortest round-trip
            // formatting keeps `parse(v.to_string()) == v` exact.
            Self::Number(n) => write!(f, "{n}"),
            // Source form passes through verbatim.
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for value in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Self::Object(table) => {
                f.write_str("{")?;
                let mut first = true;
                for (key, value) in table {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "\"{key}\":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    #[test]
    fn compact_display() {
        let mut table = ObjectTable::new();
        table
            .set("list".into(), Value::from(vec![Value::Number(1.0), Value::Null]))
            .unwrap();
        let value = Value::Object(table);
        assert_eq!(value.to_string(), r#"{"list":[1,null]}"#);
    }

    #[test]
    fn empty_containers_display_inline() {
        assert_eq!(Value::Object(ObjectTable::new()).to_string(), "{}");
        assert_eq!(Value::Array(ArrayList::new()).to_string(), "[]");
        assert_eq!(Value::Object(ObjectTable::new()).to_pretty_string(), "{}");
    }

    #[test]
    fn pretty_printing_indents_two_spaces() {
        let mut inner = ObjectTable::new();
        inner.set("b".into(), Value::Boolean(true)).unwrap();
        let mut table = ObjectTable::new();
        table.set("a".into(), Value::Object(inner)).unwrap();
        let value = Value::Object(table);
        assert_eq!(
            value.to_pretty_string(),
            "{\n  \"a\": {\n    \"b\": true\n  }\n}"
        );
    }

    #[test]
    fn accessors_match_the_active_tag() {
        let value = Value::Number(1.5);
        assert!(value.is_number());
        assert_eq!(value.as_f64(), Some(1.5));
        assert_eq!(value.as_str(), None);
        assert_eq!(value.as_bool(), None);
        assert!(!value.is_object());
    }

    #[test]
    fn query_surface_walks_the_tree() {
        let mut table = ObjectTable::new();
        table
            .set("xs".into(), Value::from(vec![Value::from("zero"), Value::from("one")]))
            .unwrap();
        let value = Value::Object(table);
        assert_eq!(
            value.get("xs").and_then(|xs| xs.get_index(1)),
            Some(&Value::from("one"))
        );
        assert_eq!(value.get("ys"), None);
        assert_eq!(value.get_index(0), None);
    }
}
