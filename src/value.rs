//! Dynamic value model
//!
//! [`Value`] is the tagged union every input collection is converted into
//! before it reaches the grid. Scalars carry their primitive payload; complex
//! values ([`Value::List`], [`Value::Map`], [`Value::Record`]) expose their
//! contents through the [`Properties`] capability trait instead of runtime
//! reflection.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

use crate::columns::parse_table_header;

/// A runtime value that can be rendered by the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    /// Text
    Text(String),
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// Double-precision float
    Double(f64),
    /// Single-precision float
    Single(f32),
    /// Boolean
    Bool(bool),
    /// Date-time with offset
    DateTime(DateTime<FixedOffset>),
    /// Fixed-point decimal
    Decimal(Decimal),
    /// Unsigned byte
    Byte(u8),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Associative mapping, keys in insertion order
    Map(Mapping),
    /// Structured record with named properties
    Record(Record),
}

/// Capability interface over values that carry named properties.
///
/// Implemented per input variant so callers never inspect types at runtime.
pub trait Properties {
    /// Property names in their native enumeration order
    fn list_properties(&self) -> Vec<&str>;

    /// Look up a property by name
    fn get_property(&self, name: &str) -> Option<&Value>;

    /// All property values in enumeration order
    fn property_values(&self) -> Vec<&Value> {
        self.list_properties()
            .into_iter()
            .filter_map(|name| self.get_property(name))
            .collect()
    }
}

/// Associative mapping with insertion-ordered keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, replacing the value in place if the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Mapping::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterate over entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

impl Properties for Mapping {
    fn list_properties(&self) -> Vec<&str> {
        self.keys().collect()
    }

    fn get_property(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn property_values(&self) -> Vec<&Value> {
        self.values().collect()
    }
}

/// Structured record: a runtime type name plus ordered named properties.
///
/// A record may declare a reduced default display set, the subset of its
/// properties shown when the grid runs in [`ViewMode::Default`](crate::ViewMode).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    properties: Vec<(String, Value)>,
    default_display: Option<Vec<String>>,
}

impl Record {
    /// Create an empty record of the given runtime type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: Vec::new(),
            default_display: None,
        }
    }

    /// Add or replace a property
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Declare the default display property set
    #[must_use]
    pub fn with_default_display<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_display = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Declare the default display set from a rendered table
    ///
    /// The header tokens of `text` become the display set. Text without a
    /// recognizable header leaves the record unchanged.
    #[must_use]
    pub fn with_default_display_from_table(self, text: &str) -> Self {
        match parse_table_header(text) {
            Some(names) => self.with_default_display(names),
            None => self,
        }
    }

    /// Set a property, replacing an existing value in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name, value)),
        }
    }

    /// Runtime type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Declared default display set, if any
    pub fn default_display_properties(&self) -> Option<&[String]> {
        self.default_display.as_deref()
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the record has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over properties
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Properties for Record {
    fn list_properties(&self) -> Vec<&str> {
        self.properties.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    fn property_values(&self) -> Vec<&Value> {
        self.properties.iter().map(|(_, v)| v).collect()
    }
}

impl Properties for Value {
    fn list_properties(&self) -> Vec<&str> {
        match self {
            Self::Record(record) => record.list_properties(),
            Self::Map(mapping) => mapping.list_properties(),
            _ => Vec::new(),
        }
    }

    fn get_property(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Record(record) => record.get_property(name),
            Self::Map(mapping) => mapping.get_property(name),
            _ => None,
        }
    }

    fn property_values(&self) -> Vec<&Value> {
        match self {
            Self::Record(record) => record.property_values(),
            Self::Map(mapping) => mapping.property_values(),
            _ => Vec::new(),
        }
    }
}

impl Value {
    /// Runtime type name, as reported by the summary panel
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "Null",
            Self::Text(_) => "String",
            Self::Int32(_) => "Int32",
            Self::Int64(_) => "Int64",
            Self::Double(_) => "Double",
            Self::Single(_) => "Single",
            Self::Bool(_) => "Boolean",
            Self::DateTime(_) => "DateTime",
            Self::Decimal(_) => "Decimal",
            Self::Byte(_) => "Byte",
            Self::List(_) => "Object[]",
            Self::Map(_) => "Hashtable",
            Self::Record(record) => record.type_name(),
        }
    }

    /// Check for [`Value::Null`]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the record payload
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Borrow the mapping payload
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Borrow the list payload
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Int32(n) => write!(f, "{n}"),
            Self::Int64(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::Single(n) => write!(f, "{n}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Byte(b) => write!(f, "{b}"),
            Self::List(_) | Self::Map(_) => f.write_str(self.type_name()),
            Self::Record(record) => {
                f.write_str("@{")?;
                for (i, (name, value)) in record.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{name}={value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int64(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Single(n)
    }
}

impl From<u8> for Value {
    fn from(b: u8) -> Self {
        Self::Byte(b)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Map(mapping)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
