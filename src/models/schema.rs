// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Entity schemas: ordered field declarations plus validation.
//!
//! A [`Schema`] is the caller-owned description of an entity. The dialog only
//! reads it to enumerate fields in declaration order, to ask whether a slot is
//! optional, and to validate/coerce a value set on submit.

use std::collections::BTreeMap;

use email_address::EmailAddress;
use url::Url;

use crate::models::value::{FieldValue, FormValues, value_of};

/// Message used when a non-optional field has no value.
pub const REQUIRED_MESSAGE: &str = "Required";

/// Value type of a schema slot.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    /// One of a fixed set of string values.
    Enum(Vec<String>),
    /// Homogeneous list; each item is validated against the inner slot.
    Array(Box<FieldSchema>),
    Object(Schema),
}

impl FieldType {
    fn name(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

/// Constraint attached to a slot. Rules that do not apply to the slot's type
/// are ignored.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    MinLength(usize),
    MaxLength(usize),
    Email,
    Url,
    Min(f64),
    Max(f64),
    Integer,
    MinItems(usize),
    MaxItems(usize),
}

impl Rule {
    fn default_message(&self) -> String {
        match self {
            Self::MinLength(n) => format!("String must contain at least {n} character(s)"),
            Self::MaxLength(n) => format!("String must contain at most {n} character(s)"),
            Self::Email => "Invalid email".to_string(),
            Self::Url => "Invalid url".to_string(),
            Self::Min(n) => format!("Number must be greater than or equal to {n}"),
            Self::Max(n) => format!("Number must be less than or equal to {n}"),
            Self::Integer => "Expected integer, received float".to_string(),
            Self::MinItems(n) => format!("Array must contain at least {n} element(s)"),
            Self::MaxItems(n) => format!("Array must contain at most {n} element(s)"),
        }
    }

    fn check_text(&self, text: &str) -> bool {
        let len = text.chars().count();
        match self {
            Self::MinLength(n) => len >= *n,
            Self::MaxLength(n) => len <= *n,
            Self::Email => EmailAddress::parse_with_options(text, Default::default()).is_ok(),
            Self::Url => Url::parse(text).is_ok(),
            _ => true,
        }
    }

    fn check_number(&self, n: f64) -> bool {
        match self {
            Self::Min(min) => n >= *min,
            Self::Max(max) => n <= *max,
            Self::Integer => n.fract() == 0.0,
            _ => true,
        }
    }

    fn check_len(&self, len: usize) -> bool {
        match self {
            Self::MinItems(n) => len >= *n,
            Self::MaxItems(n) => len <= *n,
            _ => true,
        }
    }
}

/// A rule plus an optional caller-supplied message.
#[derive(Clone, Debug, PartialEq)]
pub struct Check {
    pub rule: Rule,
    pub message: Option<String>,
}

impl Check {
    fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.rule.default_message())
    }
}

/// Declaration of one schema slot.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSchema {
    ty: FieldType,
    checks: Vec<Check>,
    optional: bool,
    nullable: bool,
    default: Option<FieldValue>,
}

impl FieldSchema {
    fn of(ty: FieldType) -> Self {
        Self {
            ty,
            checks: Vec::new(),
            optional: false,
            nullable: false,
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::of(FieldType::String)
    }

    pub fn number() -> Self {
        Self::of(FieldType::Number)
    }

    pub fn boolean() -> Self {
        Self::of(FieldType::Boolean)
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::of(FieldType::Enum(values.into_iter().map(Into::into).collect()))
    }

    pub fn array(item: FieldSchema) -> Self {
        Self::of(FieldType::Array(Box::new(item)))
    }

    pub fn object(schema: Schema) -> Self {
        Self::of(FieldType::Object(schema))
    }

    fn rule(mut self, rule: Rule) -> Self {
        self.checks.push(Check {
            rule,
            message: None,
        });
        self
    }

    pub fn min_len(self, n: usize) -> Self {
        self.rule(Rule::MinLength(n))
    }

    pub fn max_len(self, n: usize) -> Self {
        self.rule(Rule::MaxLength(n))
    }

    pub fn email(self) -> Self {
        self.rule(Rule::Email)
    }

    pub fn url(self) -> Self {
        self.rule(Rule::Url)
    }

    pub fn min(self, n: f64) -> Self {
        self.rule(Rule::Min(n))
    }

    pub fn max(self, n: f64) -> Self {
        self.rule(Rule::Max(n))
    }

    pub fn int(self) -> Self {
        self.rule(Rule::Integer)
    }

    pub fn min_items(self, n: usize) -> Self {
        self.rule(Rule::MinItems(n))
    }

    pub fn max_items(self, n: usize) -> Self {
        self.rule(Rule::MaxItems(n))
    }

    /// Replace the message of the most recently added rule.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.checks.last_mut() {
            last.message = Some(message.into());
        }
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Value substituted when the field is undefined at validation time.
    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn field_type(&self) -> &FieldType {
        &self.ty
    }

    /// Whether the slot accepts a missing or null value.
    pub fn is_optional(&self) -> bool {
        self.optional || self.nullable
    }

    /// Validate and coerce one value.
    ///
    /// Numbers typed as text are parsed, blank text in a number slot counts as
    /// undefined, and defaults fill undefined slots before anything else.
    pub fn parse(&self, value: &FieldValue) -> Result<FieldValue, Vec<String>> {
        let value = match (value, &self.ty) {
            (FieldValue::Text(s), FieldType::Number) if s.trim().is_empty() => {
                &FieldValue::Undefined
            }
            _ => value,
        };

        if value.is_undefined() {
            if let Some(default) = &self.default {
                return Ok(default.clone());
            }
            if self.optional {
                return Ok(FieldValue::Undefined);
            }
            return Err(vec![REQUIRED_MESSAGE.to_string()]);
        }

        if matches!(value, FieldValue::Null) {
            if self.nullable {
                return Ok(FieldValue::Null);
            }
            return Err(vec![format!("Expected {}, received null", self.ty.name())]);
        }

        let coerced = self.coerce(value)?;
        let errors = self.failed_checks(&coerced);
        if errors.is_empty() {
            Ok(coerced)
        } else {
            Err(errors)
        }
    }

    fn coerce(&self, value: &FieldValue) -> Result<FieldValue, Vec<String>> {
        let mismatch =
            || vec![format!("Expected {}, received {}", self.ty.name(), received(value))];
        match (&self.ty, value) {
            (FieldType::String, FieldValue::Text(_)) => Ok(value.clone()),
            (FieldType::Number, FieldValue::Number(n)) if n.is_finite() => Ok(value.clone()),
            (FieldType::Number, FieldValue::Number(_)) => {
                Err(vec!["Expected number, received nan".to_string()])
            }
            (FieldType::Number, FieldValue::Text(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(FieldValue::Number)
                .ok_or_else(mismatch),
            (FieldType::Boolean, FieldValue::Bool(_)) => Ok(value.clone()),
            (FieldType::Enum(allowed), FieldValue::Text(s)) => {
                if allowed.iter().any(|a| a == s) {
                    Ok(value.clone())
                } else {
                    let expected = allowed
                        .iter()
                        .map(|a| format!("'{a}'"))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    Err(vec![format!(
                        "Invalid enum value. Expected {expected}, received '{s}'"
                    )])
                }
            }
            (FieldType::Array(item), FieldValue::List(items)) => {
                let mut out = Vec::with_capacity(items.len());
                let mut errors = Vec::new();
                for (idx, entry) in items.iter().enumerate() {
                    match item.parse(entry) {
                        Ok(v) => out.push(v),
                        Err(msgs) => {
                            errors.extend(msgs.into_iter().map(|m| format!("[{idx}] {m}")));
                        }
                    }
                }
                if errors.is_empty() {
                    Ok(FieldValue::List(out))
                } else {
                    Err(errors)
                }
            }
            (FieldType::Object(schema), FieldValue::Object(map)) => schema
                .validate(map)
                .map(FieldValue::Object)
                .map_err(|errs| {
                    errs.iter()
                        .flat_map(|(field, msgs)| msgs.iter().map(move |m| format!("{field}: {m}")))
                        .collect()
                }),
            _ => Err(mismatch()),
        }
    }

    fn failed_checks(&self, value: &FieldValue) -> Vec<String> {
        self.checks
            .iter()
            .filter(|check| {
                let ok = match value {
                    FieldValue::Text(s) => check.rule.check_text(s),
                    FieldValue::Number(n) => check.rule.check_number(*n),
                    FieldValue::List(items) => check.rule.check_len(items.len()),
                    _ => true,
                };
                !ok
            })
            .map(Check::message)
            .collect()
    }
}

fn received(value: &FieldValue) -> &'static str {
    match value {
        FieldValue::Undefined => "undefined",
        FieldValue::Null => "null",
        FieldValue::Bool(_) => "boolean",
        FieldValue::Indeterminate | FieldValue::Text(_) => "string",
        FieldValue::Number(_) => "number",
        FieldValue::List(_) => "array",
        FieldValue::Object(_) => "object",
    }
}

/// Per-field validation messages produced by [`Schema::validate`].
#[derive(Clone, Debug, Default, PartialEq, thiserror::Error)]
#[error("{} field(s) failed validation", .fields.len())]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn insert(&mut self, field: impl Into<String>, messages: Vec<String>) {
        if !messages.is_empty() {
            self.fields.insert(field.into(), messages);
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// First message for a field; this is what the dialog displays.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|msgs| msgs.first())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.fields.iter()
    }
}

/// Ordered collection of named slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldSchema)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Redeclaring a name replaces the slot in place.
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, schema)| schema)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether the slot accepts an empty value; unknown names are not optional.
    pub fn is_optional(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldSchema::is_optional)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate one field against its slot. Unknown names pass through.
    pub fn validate_field(
        &self,
        name: &str,
        value: &FieldValue,
    ) -> Result<FieldValue, Vec<String>> {
        match self.get(name) {
            Some(slot) => slot.parse(value),
            None => Ok(value.clone()),
        }
    }

    /// Validate a whole value set.
    ///
    /// Returns the coerced values of declared fields (undeclared keys are
    /// stripped, undefined optional fields are omitted) or every failing
    /// field's messages.
    pub fn validate(&self, values: &FormValues) -> Result<FormValues, ValidationErrors> {
        let mut out = FormValues::new();
        let mut errors = ValidationErrors::default();

        for (name, slot) in &self.fields {
            match slot.parse(value_of(values, name)) {
                Ok(FieldValue::Undefined) => {}
                Ok(value) => {
                    out.insert(name.clone(), value);
                }
                Err(messages) => errors.insert(name.clone(), messages),
            }
        }

        if errors.is_empty() {
            Ok(out)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_schema() -> Schema {
        Schema::new()
            .field("name", FieldSchema::string().min_len(1).message("Name is required"))
            .field("email", FieldSchema::string().email())
            .field("age", FieldSchema::number().min(18.0).optional())
            .field("active", FieldSchema::boolean().default_value(true))
            .field("role", FieldSchema::enumeration(["admin", "user"]).optional())
    }

    fn values(pairs: &[(&str, FieldValue)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn field_names_keep_declaration_order() {
        let names: Vec<_> = user_schema().field_names().map(str::to_string).collect();
        assert_eq!(names, vec!["name", "email", "age", "active", "role"]);
    }

    #[test]
    fn numeric_text_is_coerced_and_empty_number_is_dropped() {
        let schema = user_schema();
        let ok = schema
            .validate(&values(&[
                ("name", "Ada".into()),
                ("email", "ada@example.com".into()),
                ("age", "42".into()),
            ]))
            .unwrap();
        assert_eq!(ok.get("age"), Some(&FieldValue::Number(42.0)));
        assert_eq!(ok.get("active"), Some(&FieldValue::Bool(true)));

        let blank = schema
            .validate(&values(&[
                ("name", "Ada".into()),
                ("email", "ada@example.com".into()),
                ("age", "".into()),
            ]))
            .unwrap();
        assert!(!blank.contains_key("age"));
    }

    #[test]
    fn errors_use_custom_messages_per_field() {
        let err = user_schema()
            .validate(&values(&[
                ("name", "".into()),
                ("email", "nope".into()),
                ("age", FieldValue::Number(12.0)),
                ("role", "root".into()),
            ]))
            .unwrap_err();

        assert_eq!(err.first("name"), Some("Name is required"));
        assert_eq!(err.first("email"), Some("Invalid email"));
        assert_eq!(
            err.first("age"),
            Some("Number must be greater than or equal to 18")
        );
        assert!(err.first("role").unwrap().starts_with("Invalid enum value"));
        assert_eq!(err.len(), 4);
    }

    #[test]
    fn required_field_rejects_undefined_and_null() {
        let slot = FieldSchema::string();
        assert_eq!(
            slot.parse(&FieldValue::Undefined).unwrap_err(),
            vec![REQUIRED_MESSAGE.to_string()]
        );
        assert!(slot.parse(&FieldValue::Null).is_err());
        assert_eq!(
            slot.clone().nullable().parse(&FieldValue::Null),
            Ok(FieldValue::Null)
        );
    }

    #[test]
    fn arrays_and_objects_validate_recursively() {
        let tags = FieldSchema::array(FieldSchema::enumeration(["a", "b"])).min_items(1);
        assert!(tags.parse(&FieldValue::from_strings(Vec::<String>::new())).is_err());
        assert!(tags.parse(&FieldValue::from_strings(["a", "z"])).is_err());
        assert!(tags.parse(&FieldValue::from_strings(["a", "b"])).is_ok());

        let address =
            FieldSchema::object(Schema::new().field("city", FieldSchema::string().min_len(2)));
        let bad = FieldValue::Object(values(&[("city", "X".into())]));
        let msgs = address.parse(&bad).unwrap_err();
        assert!(msgs[0].starts_with("city: "));
    }

    #[test]
    fn optional_lookup_covers_nullable_and_unknown() {
        let schema = Schema::new()
            .field("a", FieldSchema::string().optional())
            .field("b", FieldSchema::string().nullable())
            .field("c", FieldSchema::string());
        assert!(schema.is_optional("a"));
        assert!(schema.is_optional("b"));
        assert!(!schema.is_optional("c"));
        assert!(!schema.is_optional("zzz"));
    }
}
