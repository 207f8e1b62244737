//! Input loading
//!
//! Reads JSON, JSON Lines or YAML documents and converts them into
//! [`Value`]s. A top-level JSON or YAML array is unrolled into its elements,
//! so `[{...}, {...}]` becomes a two-row collection.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::DateTime;
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

use crate::error::{Error, Result};
use crate::value::{Record, Value};

/// Object key holding a record's runtime type name
pub const TYPE_KEY: &str = "$type";
/// Object key holding a record's default display property names
pub const DISPLAY_KEY: &str = "$display";
/// Type name of records without a [`TYPE_KEY`]
pub const DEFAULT_RECORD_TYPE: &str = "Object";

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputFormat {
    /// A single JSON document
    Json,
    /// One JSON document per line
    #[cfg_attr(feature = "cli", value(name = "jsonl"))]
    JsonLines,
    /// A single YAML document
    Yaml,
}

impl InputFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "jsonl" | "ndjson" => Ok(Self::JsonLines),
            "yaml" | "yml" => Ok(Self::Yaml),
            "" => Err(Error::unsupported_format("(no extension)")),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::JsonLines => f.write_str("jsonl"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// How objects in the input are represented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ObjectStyle {
    /// Structured records, typed by `$type`
    #[default]
    Record,
    /// Associative mappings
    Map,
}

/// Input loading options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Explicit format; detected from the extension when `None`
    pub format: Option<InputFormat>,
    /// Object representation
    pub objects: ObjectStyle,
}

/// Load values from a file, or from stdin when `path` is `-`.
///
/// Stdin defaults to JSON unless a format is given.
pub fn load_path(path: &Path, options: LoadOptions) -> Result<Vec<Value>> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(Error::io_no_path)?;
        let format = options.format.unwrap_or(InputFormat::Json);
        return load_str(&text, format, options.objects);
    }

    let format = match options.format {
        Some(format) => format,
        None => InputFormat::from_path(path)?,
    };
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
    let values = load_str(&text, format, options.objects)?;
    debug!(path = %path.display(), %format, count = values.len(), "loaded input");
    Ok(values)
}

/// Parse values from text
pub fn load_str(text: &str, format: InputFormat, objects: ObjectStyle) -> Result<Vec<Value>> {
    match format {
        InputFormat::Json => {
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            let doc: JsonValue = serde_json::from_str(text)?;
            Ok(unroll(doc, objects))
        }
        InputFormat::JsonLines => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let doc: JsonValue = serde_json::from_str(line)?;
                Ok(from_json(doc, objects))
            })
            .collect(),
        InputFormat::Yaml => {
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            let doc: JsonValue = serde_yaml::from_str(text)?;
            Ok(unroll(doc, objects))
        }
    }
}

fn unroll(doc: JsonValue, objects: ObjectStyle) -> Vec<Value> {
    match doc {
        JsonValue::Array(items) => items.into_iter().map(|v| from_json(v, objects)).collect(),
        JsonValue::Null => Vec::new(),
        other => vec![from_json(other, objects)],
    }
}

/// Convert a JSON value.
///
/// Integers that fit become `Int32`, larger ones `Int64`, everything else
/// numeric `Double`. Strings in RFC 3339 form become `DateTime`.
pub fn from_json(value: JsonValue, objects: ObjectStyle) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).map_or(Value::Int64(i), Value::Int32),
            None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => match DateTime::parse_from_rfc3339(&s) {
            Ok(dt) => Value::DateTime(dt),
            Err(_) => Value::Text(s),
        },
        JsonValue::Array(items) => {
            Value::List(items.into_iter().map(|v| from_json(v, objects)).collect())
        }
        JsonValue::Object(map) => match objects {
            ObjectStyle::Map => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, from_json(v, objects)))
                    .collect(),
            ),
            ObjectStyle::Record => Value::Record(record_from_json(map, objects)),
        },
    }
}

fn record_from_json(mut map: JsonMap<String, JsonValue>, objects: ObjectStyle) -> Record {
    let type_name = match map.shift_remove(TYPE_KEY) {
        Some(JsonValue::String(name)) => name,
        _ => DEFAULT_RECORD_TYPE.to_string(),
    };
    let display: Option<Vec<String>> = match map.shift_remove(DISPLAY_KEY) {
        Some(JsonValue::Array(names)) => Some(
            names
                .into_iter()
                .filter_map(|n| match n {
                    JsonValue::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    };

    let mut record = Record::new(type_name);
    for (key, value) in map {
        record.set(key, from_json(value, objects));
    }
    match display {
        Some(names) => record.with_default_display(names),
        None => record,
    }
}
