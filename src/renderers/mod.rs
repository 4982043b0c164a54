// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Control dispatcher: maps a field kind to one of eight egui renderers.
//!
//! Renderers never touch the form state directly. They read the current value
//! from a [`FieldBinding`] and report edits through it; the dialog turns those
//! into messages and applies them in its update step.

pub mod checkbox;
pub mod custom;
pub mod image;
pub mod input;
pub mod multiselect;
pub mod number;
pub mod select;
pub mod textarea;

use eframe::egui;

use crate::form::FormState;
use crate::models::field_config::{FieldConfig, FieldKind};
use crate::models::value::FieldValue;

/// Text shown instead of a control that has nothing to offer.
pub const NO_OPTIONS_TEXT: &str = "No options available";

/// Two-way binding between one field and its control: the value at the
/// start of the frame plus a setter.
#[derive(Debug)]
pub struct FieldBinding<'a> {
    name: &'a str,
    value: &'a FieldValue,
    changed: Option<FieldValue>,
    blurred: bool,
}

impl<'a> FieldBinding<'a> {
    pub fn new(name: &'a str, value: &'a FieldValue) -> Self {
        Self {
            name,
            value,
            changed: None,
            blurred: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Latest value, including an edit made earlier in this frame.
    pub fn value(&self) -> &FieldValue {
        self.changed.as_ref().unwrap_or(self.value)
    }

    pub fn on_change(&mut self, value: FieldValue) {
        self.changed = Some(value);
    }

    pub fn on_blur(&mut self) {
        self.blurred = true;
    }

    /// The edit (if any) and whether the control lost focus.
    pub fn into_parts(self) -> (Option<FieldValue>, bool) {
        (self.changed, self.blurred)
    }
}

/// Collects writes requested by accessory widgets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueSetter {
    writes: Vec<(String, FieldValue)>,
}

impl ValueSetter {
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.writes.push((name.into(), value.into()));
    }

    pub fn into_writes(self) -> Vec<(String, FieldValue)> {
        self.writes
    }
}

/// Everything besides the binding and config that some renderers need.
pub struct ControlEnv<'a> {
    /// Read-only view of the whole form, handed to custom renderers.
    pub form: &'a FormState,
    /// The schema accepts an empty value for this field.
    pub optional: bool,
    pub setter: &'a mut ValueSetter,
}

/// One rendering strategy per supported kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlRenderer {
    Input,
    Number,
    Select,
    MultiSelect,
    Textarea,
    Checkbox,
    Custom,
    Image,
}

/// Select the strategy for `kind`.
pub fn dispatch(kind: FieldKind) -> ControlRenderer {
    match kind {
        FieldKind::Input => ControlRenderer::Input,
        FieldKind::Number => ControlRenderer::Number,
        FieldKind::Select => ControlRenderer::Select,
        FieldKind::MultiSelect => ControlRenderer::MultiSelect,
        FieldKind::Textarea => ControlRenderer::Textarea,
        FieldKind::Checkbox => ControlRenderer::Checkbox,
        FieldKind::Custom => ControlRenderer::Custom,
        FieldKind::Image => ControlRenderer::Image,
    }
}

/// Select the strategy for a raw kind tag; unknown tags render as inputs.
pub fn dispatch_tag(tag: &str) -> ControlRenderer {
    dispatch(FieldKind::parse(tag))
}

impl ControlRenderer {
    pub fn show(
        self,
        ui: &mut egui::Ui,
        binding: &mut FieldBinding<'_>,
        config: &FieldConfig,
        env: &mut ControlEnv<'_>,
    ) {
        match self {
            Self::Input => input::show(ui, binding, config, env.setter),
            Self::Number => number::show(ui, binding, config, env.setter),
            Self::Select => select::show(ui, binding, config, env.optional),
            Self::MultiSelect => multiselect::show(ui, binding, config, env.form.generation()),
            Self::Textarea => textarea::show(ui, binding, config),
            Self::Checkbox => checkbox::show(ui, binding, config),
            Self::Custom => custom::show(ui, binding, config, env.form),
            Self::Image => image::show(ui, binding, config),
        }
    }
}

/// Muted italic note used for empty states.
pub(crate) fn placeholder_note(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .italics()
            .color(egui::Color32::from_gray(110)),
    );
}

/// Lay out a single-line control with the optional accessory beside it.
///
/// `control` receives the width it may use.
pub(crate) fn with_accessory(
    ui: &mut egui::Ui,
    config: &FieldConfig,
    setter: &mut ValueSetter,
    control: impl FnOnce(&mut egui::Ui, f32),
) {
    match &config.render_accessory {
        Some(accessory) => {
            ui.horizontal(|ui| {
                let width = (ui.available_width() - ACCESSORY_RESERVE).max(MIN_CONTROL_WIDTH);
                control(ui, width);
                accessory(ui, setter);
            });
        }
        None => {
            let width = ui.available_width();
            control(ui, width);
        }
    }
}

const ACCESSORY_RESERVE: f32 = 120.0;
const MIN_CONTROL_WIDTH: f32 = 80.0;

/// Headless egui harness shared by renderer tests.
#[cfg(test)]
pub(crate) fn run_headless(mut add_contents: impl FnMut(&mut egui::Ui)) {
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
    });
}
