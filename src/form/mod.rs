// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form-state engine: live values, per-field errors and submit interception.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::context::ValidationMode;
use crate::models::schema::{Schema, ValidationErrors};
use crate::models::value::{FieldValue, FormValues, value_of};

/// What caused a single-field revalidation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trigger {
    Change,
    Blur,
}

/// Live state of one form instance.
#[derive(Clone, Debug)]
pub struct FormState {
    schema: Rc<Schema>,
    mode: ValidationMode,
    values: FormValues,
    errors: BTreeMap<String, String>,
    touched: BTreeSet<String>,
    dirty: BTreeSet<String>,
    submit_count: u32,
    generation: u64,
}

impl FormState {
    pub fn new(schema: Rc<Schema>) -> Self {
        Self {
            schema,
            mode: ValidationMode::default(),
            values: FormValues::new(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            dirty: BTreeSet::new(),
            submit_count: 0,
            generation: 0,
        }
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Seeded with `defaults`, as if [`reset`](Self::reset) had been called.
    pub fn with_defaults(mut self, defaults: FormValues) -> Self {
        self.reset(defaults);
        self
    }

    pub fn set_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn schema_rc(&self) -> &Rc<Schema> {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> &FieldValue {
        value_of(&self.values, name)
    }

    /// Write a field value and revalidate it when the mode asks for it.
    pub fn set_value(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
        self.dirty.insert(name.to_string());
        if self.should_validate(name, Trigger::Change) {
            self.validate_field(name);
        }
    }

    /// Mark a field touched; blur-driven modes revalidate it.
    pub fn blur(&mut self, name: &str) {
        self.touched.insert(name.to_string());
        if self.should_validate(name, Trigger::Blur) {
            self.validate_field(name);
        }
    }

    /// Replace all values with `defaults` and forget errors, touched/dirty
    /// markers and the submit count.
    pub fn reset(&mut self, defaults: FormValues) {
        self.values = defaults;
        self.errors.clear();
        self.touched.clear();
        self.dirty.clear();
        self.submit_count = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Validate every field. On success returns the coerced values; on failure
    /// records the first message of each failing field and returns them all.
    pub fn handle_submit(&mut self) -> Result<FormValues, ValidationErrors> {
        self.submit_count = self.submit_count.saturating_add(1);
        match self.schema.validate(&self.values) {
            Ok(values) => {
                self.errors.clear();
                Ok(values)
            }
            Err(errors) => {
                self.errors = errors
                    .iter()
                    .filter_map(|(field, msgs)| msgs.first().map(|m| (field.clone(), m.clone())))
                    .collect();
                Err(errors)
            }
        }
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Bumped by every [`reset`](Self::reset). Widgets key per-session
    /// scratch memory on it so nothing carries over into the next session.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn should_validate(&self, name: &str, trigger: Trigger) -> bool {
        if self.submit_count > 0 {
            return match trigger {
                Trigger::Change => true,
                Trigger::Blur => matches!(
                    self.mode,
                    ValidationMode::OnBlur | ValidationMode::OnTouched | ValidationMode::All
                ),
            };
        }
        match (self.mode, trigger) {
            (ValidationMode::OnSubmit, _) => false,
            (ValidationMode::OnBlur, t) => t == Trigger::Blur,
            (ValidationMode::OnChange, t) => t == Trigger::Change,
            (ValidationMode::OnTouched, Trigger::Blur) => true,
            (ValidationMode::OnTouched, Trigger::Change) => self.touched.contains(name),
            (ValidationMode::All, _) => true,
        }
    }

    fn validate_field(&mut self, name: &str) {
        match self.schema.validate_field(name, value_of(&self.values, name)) {
            Ok(_) => {
                self.errors.remove(name);
            }
            Err(msgs) => {
                if let Some(first) = msgs.into_iter().next() {
                    self.errors.insert(name.to_string(), first);
                }
            }
        }
    }
}

/// Shared handle to a caller-owned [`FormState`].
///
/// Dialogs given a handle never reset it; the caller controls its lifecycle.
#[derive(Clone, Debug)]
pub struct FormHandle(Rc<RefCell<FormState>>);

impl FormHandle {
    pub fn new(state: FormState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn borrow(&self) -> Ref<'_, FormState> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, FormState> {
        self.0.borrow_mut()
    }

    /// Identity comparison: both handles point at the same form.
    pub fn ptr_eq(&self, other: &FormHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Who owns the form state a dialog drives.
#[derive(Debug)]
pub enum FormOwnership {
    /// Created and reset by the dialog.
    Owned(FormState),
    /// Supplied by the caller; the dialog only reads and writes values.
    Borrowed(FormHandle),
}

impl FormOwnership {
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    pub fn with<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        match self {
            Self::Owned(state) => f(state),
            Self::Borrowed(handle) => f(&handle.borrow()),
        }
    }

    pub fn with_mut<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R {
        match self {
            Self::Owned(state) => f(state),
            Self::Borrowed(handle) => f(&mut handle.borrow_mut()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::FieldSchema;

    fn schema() -> Rc<Schema> {
        Rc::new(
            Schema::new()
                .field("name", FieldSchema::string().min_len(1).message("Name is required"))
                .field("age", FieldSchema::number().optional()),
        )
    }

    fn defaults(name: &str) -> FormValues {
        FormValues::from([("name".to_string(), FieldValue::from(name))])
    }

    #[test]
    fn submit_mode_waits_for_first_submit_then_revalidates_on_change() {
        let mut form = FormState::new(schema()).with_defaults(defaults(""));

        form.set_value("name", "".into());
        form.blur("name");
        assert!(form.error("name").is_none());

        let err = form.handle_submit().unwrap_err();
        assert_eq!(err.first("name"), Some("Name is required"));
        assert_eq!(form.error("name"), Some("Name is required"));

        form.set_value("name", "Ada".into());
        assert!(form.error("name").is_none());
    }

    #[test]
    fn change_mode_validates_while_typing() {
        let mut form = FormState::new(schema()).with_mode(ValidationMode::OnChange);
        form.set_value("name", "".into());
        assert_eq!(form.error("name"), Some("Name is required"));
    }

    #[test]
    fn blur_and_touched_modes() {
        let mut blur = FormState::new(schema()).with_mode(ValidationMode::OnBlur);
        blur.set_value("name", "".into());
        assert!(blur.error("name").is_none());
        blur.blur("name");
        assert!(blur.error("name").is_some());

        let mut touched = FormState::new(schema()).with_mode(ValidationMode::OnTouched);
        touched.set_value("name", "".into());
        assert!(touched.error("name").is_none());
        touched.blur("name");
        assert!(touched.error("name").is_some());
        touched.set_value("name", "x".into());
        assert!(touched.error("name").is_none());
    }

    #[test]
    fn submit_returns_coerced_values_and_reset_clears_state() {
        let mut form = FormState::new(schema()).with_defaults(defaults("Ada"));
        form.set_value("age", "42".into());

        let values = form.handle_submit().unwrap();
        assert_eq!(values.get("age"), Some(&FieldValue::Number(42.0)));
        assert!(form.is_dirty());

        let generation = form.generation();
        form.reset(defaults("Bob"));
        assert_eq!(form.value("name"), &FieldValue::from("Bob"));
        assert!(!form.is_dirty());
        assert_eq!(form.submit_count(), 0);
        assert_ne!(form.generation(), generation);
    }

    #[test]
    fn handles_share_state_and_compare_by_identity() {
        let handle = FormHandle::new(FormState::new(schema()));
        let clone = handle.clone();
        let other = FormHandle::new(FormState::new(schema()));

        clone.borrow_mut().set_value("name", "Ada".into());

        assert_eq!(handle.borrow().value("name"), &FieldValue::from("Ada"));
        assert!(handle.ptr_eq(&clone));
        assert!(!handle.ptr_eq(&other));
    }
}
