//! The parsed value tree.
//!
//! Strings and numbers keep their lexed bytes: strings with escape markers
//! removed, numbers exactly as written. Converting a number is left to the
//! caller; [`Value::as_f64`] and [`Value::as_i64`] cover the common cases.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use bstr::{BStr, BString, ByteSlice};

/// Object members in source order. Repeated names are kept as written.
pub type Members = Vec<(BString, Value)>;

/// A node of the value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `{ ... }`
    Object(Members),
    /// `[ ... ]`
    Array(Vec<Value>),
    /// A string, unescaped.
    String(BString),
    /// A number in its raw textual form.
    Number(BString),
    /// `true` or `false`
    Bool(bool),
    /// `null`
    Null,
}

impl Value {
    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is an [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is an [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns the text of a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(BStr::new(s)),
            _ => None,
        }
    }

    /// Returns the boolean of a [`Bool`](Value::Bool).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the raw text of a [`Number`](Value::Number).
    #[must_use]
    pub fn as_number_text(&self) -> Option<&BStr> {
        match self {
            Self::Number(n) => Some(BStr::new(n)),
            _ => None,
        }
    }

    /// Parses a [`Number`](Value::Number) as `f64`.
    ///
    /// Returns `None` for non-numbers and for text Rust's float grammar
    /// rejects (for example `1e` or a lone `-`).
    ///
    /// ```
    /// use jsoncursor::Value;
    ///
    /// assert_eq!(Value::Number("5.80975e3".into()).as_f64(), Some(5809.75));
    /// assert_eq!(Value::Number("1e".into()).as_f64(), None);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number_text()?.to_str().ok()?.parse().ok()
    }

    /// Parses a [`Number`](Value::Number) as `i64`. Fractions and exponents
    /// yield `None`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number_text()?.to_str().ok()?.parse().ok()
    }

    /// Returns the elements of an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the members of an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&[(BString, Value)]> {
        match self {
            Self::Object(members) => Some(members.as_slice()),
            _ => None,
        }
    }

    /// Looks up the first member called `name` in an
    /// [`Object`](Value::Object).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(key, _)| key.as_slice() == name.as_bytes())
            .map(|(_, value)| value)
    }

    /// Renders the indented debug dump of this value.
    ///
    /// One node per line, children indented by a tab. Object members are
    /// introduced by a `key: <name>` line with the value one level deeper.
    ///
    /// ```
    /// use jsoncursor::parse_slice;
    ///
    /// let root = parse_slice(br#"{"a":[1,null]}"#).unwrap();
    /// assert_eq!(
    ///     root.value().dump(),
    ///     "Object\n\tkey: a\n\t\tArray\n\t\t\tNumber 1\n\t\t\tNull"
    /// );
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String never fails.
        let _ = self.write_dump(&mut out, 0);
        out
    }

    pub(crate) fn write_dump<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        match self {
            Self::Object(members) => {
                out.write_str("Object")?;
                for (name, value) in members {
                    out.write_char('\n')?;
                    indent(out, depth + 1)?;
                    write!(out, "key: {name}")?;
                    out.write_char('\n')?;
                    value.write_dump(out, depth + 2)?;
                }
                Ok(())
            }
            Self::Array(items) => {
                out.write_str("Array")?;
                for item in items {
                    out.write_char('\n')?;
                    item.write_dump(out, depth + 1)?;
                }
                Ok(())
            }
            Self::String(s) => write!(out, "String {s}"),
            Self::Number(n) => write!(out, "Number {n}"),
            Self::Bool(b) => write!(out, "Bool {b}"),
            Self::Null => out.write_str("Null"),
        }
    }
}

fn indent<W: Write>(out: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_char('\t')?;
    }
    Ok(())
}

/// A complete document: exactly one value of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root(Value);

impl Root {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    /// The document's value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Unwraps the document's value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Root> for Value {
    fn from(root: Root) -> Self {
        root.0
    }
}

/// Writes the same dump as [`Value::dump`].
impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_dump(f, 0)
    }
}
