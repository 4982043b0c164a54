// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Dynamic field values carried by the form-state engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag used by tri-state checkboxes for the "neither" state.
pub const INDETERMINATE: &str = "indeterminate";

/// Value set of one form, keyed by field name.
pub type FormValues = BTreeMap<String, FieldValue>;

static UNDEFINED: FieldValue = FieldValue::Undefined;

/// A single field value.
///
/// `Undefined` is distinct from `Null`: it marks a field the user never filled
/// (or cleared, for number inputs), which optional schema slots accept.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Indeterminate,
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
    Object(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Build a list value from plain strings.
    pub fn from_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(|v| Self::Text(v.into())).collect())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// True for undefined, null and blank text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String shown inside text-like controls.
    ///
    /// Undefined and null render as an empty string, and non-finite numbers
    /// never leak a `NaN` into the input.
    pub fn display_string(&self) -> String {
        match self {
            Self::Undefined | Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Indeterminate => INDETERMINATE.to_string(),
            Self::Number(n) if n.is_finite() => n.to_string(),
            Self::Number(_) => String::new(),
            Self::Text(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(Self::display_string)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Object(_) => Value::from(self.clone()).to_string(),
        }
    }

    /// Text entries of a list value in order, with duplicates dropped.
    /// Anything that is not a list yields an empty selection.
    pub fn string_list(&self) -> Vec<String> {
        let Self::List(items) = self else {
            return Vec::new();
        };
        let mut out: Vec<String> = Vec::with_capacity(items.len());
        for item in items {
            let text = match item {
                Self::Text(s) => s.clone(),
                Self::Number(_) | Self::Bool(_) => item.display_string(),
                _ => continue,
            };
            if !out.contains(&text) {
                out.push(text);
            }
        }
        out
    }
}

/// Look up a field, treating a missing key as undefined.
pub fn value_of<'a>(values: &'a FormValues, name: &str) -> &'a FieldValue {
    values.get(name).unwrap_or(&UNDEFINED)
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::from_strings(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(s) if s == INDETERMINATE => Self::Indeterminate,
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Undefined | FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Indeterminate => Value::String(INDETERMINATE.to_string()),
            FieldValue::Number(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Text(s) => Value::String(s),
            FieldValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            FieldValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Build a [`FormValues`] map from JSON, e.g. defaults kept in a fixture file.
pub fn form_values_from_json(json: &str) -> anyhow::Result<FormValues> {
    use anyhow::Context;

    let raw: BTreeMap<String, Value> =
        serde_json::from_str(json).context("Failed to parse form values JSON")?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}
