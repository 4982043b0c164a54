// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Per-field rendering directives and their global/local merge.

use std::fmt;
use std::rc::Rc;

use eframe::egui;
use serde::Deserialize;

use crate::form::FormState;
use crate::models::value::FieldValue;
use crate::renderers::{FieldBinding, ValueSetter};

/// Control kinds the dispatcher knows how to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum FieldKind {
    #[default]
    Input,
    Number,
    Select,
    MultiSelect,
    Textarea,
    Checkbox,
    Custom,
    Image,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        Self::Input,
        Self::Number,
        Self::Select,
        Self::MultiSelect,
        Self::Textarea,
        Self::Checkbox,
        Self::Custom,
        Self::Image,
    ];

    /// Parse a kind tag. Unknown tags fall back to [`FieldKind::Input`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "input" | "text" => Self::Input,
            "number" => Self::Number,
            "select" => Self::Select,
            "multiselect" => Self::MultiSelect,
            "textarea" => Self::Textarea,
            "checkbox" => Self::Checkbox,
            "custom" => Self::Custom,
            "image" => Self::Image,
            other => {
                log::debug!("unknown field kind {other:?}, rendering as input");
                Self::Input
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Number => "number",
            Self::Select => "select",
            Self::MultiSelect => "multiselect",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Custom => "custom",
            Self::Image => "image",
        }
    }
}

impl From<String> for FieldKind {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value/label pair offered by select-like controls.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Notification fired after a control changed its field.
pub type ChangeCallback = Rc<dyn Fn(&FieldValue)>;

/// Render function for [`FieldKind::Custom`] fields.
pub type CustomRender = Rc<dyn Fn(&mut egui::Ui, &mut FieldBinding<'_>, &FieldConfig, &FormState)>;

/// Extra widget drawn beside input/number controls. The setter can write any field.
pub type AccessoryRender = Rc<dyn Fn(&mut egui::Ui, &mut ValueSetter)>;

/// How a named field should render.
///
/// Every key is optional so the same type serves as a global partial config
/// and as a dialog-local override. Callbacks cannot come from config files.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    #[serde(rename = "type")]
    pub kind: Option<FieldKind>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub options: Option<Vec<SelectOption>>,
    pub disabled: Option<bool>,
    pub hide_label: Option<bool>,
    #[serde(skip)]
    pub on_change: Option<ChangeCallback>,
    #[serde(skip)]
    pub render: Option<CustomRender>,
    #[serde(skip)]
    pub render_accessory: Option<AccessoryRender>,
    /// Alt text for image previews.
    pub alt: Option<String>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl FieldConfig {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set options from `(value, label)` pairs.
    pub fn options<I, V, L>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        self.options = Some(
            options
                .into_iter()
                .map(|(v, l)| SelectOption::new(v, l))
                .collect(),
        );
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn hide_label(mut self, hide: bool) -> Self {
        self.hide_label = Some(hide);
        self
    }

    pub fn on_change(mut self, callback: impl Fn(&FieldValue) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    pub fn render(
        mut self,
        render: impl Fn(&mut egui::Ui, &mut FieldBinding<'_>, &FieldConfig, &FormState) + 'static,
    ) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    pub fn render_accessory(
        mut self,
        render: impl Fn(&mut egui::Ui, &mut ValueSetter) + 'static,
    ) -> Self {
        self.render_accessory = Some(Rc::new(render));
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Resolved kind; unset means a plain input.
    pub fn kind(&self) -> FieldKind {
        self.kind.unwrap_or_default()
    }

    pub fn option_list(&self) -> &[SelectOption] {
        self.options.as_deref().unwrap_or_default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    pub fn is_label_hidden(&self) -> bool {
        self.hide_label.unwrap_or(false)
    }

    /// Label to show for `key`, falling back to the field name.
    pub fn display_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.label.as_deref().filter(|l| !l.is_empty()).unwrap_or(key)
    }

    /// Shallow merge: every key set on `over` wins, the rest comes from `self`.
    pub fn merged(&self, over: &FieldConfig) -> FieldConfig {
        FieldConfig {
            kind: over.kind.or(self.kind),
            label: over.label.clone().or_else(|| self.label.clone()),
            placeholder: over.placeholder.clone().or_else(|| self.placeholder.clone()),
            options: over.options.clone().or_else(|| self.options.clone()),
            disabled: over.disabled.or(self.disabled),
            hide_label: over.hide_label.or(self.hide_label),
            on_change: over.on_change.clone().or_else(|| self.on_change.clone()),
            render: over.render.clone().or_else(|| self.render.clone()),
            render_accessory: over
                .render_accessory
                .clone()
                .or_else(|| self.render_accessory.clone()),
            alt: over.alt.clone().or_else(|| self.alt.clone()),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
        }
    }

    /// Build the effective config of one field: input kind, then the global
    /// entry, then the dialog-local entry. The result always carries a kind.
    pub fn resolve(global: Option<&FieldConfig>, local: Option<&FieldConfig>) -> FieldConfig {
        let base = FieldConfig::new(FieldKind::Input);
        let with_global = match global {
            Some(g) => base.merged(g),
            None => base,
        };
        match local {
            Some(l) => with_global.merged(l),
            None => with_global,
        }
    }

    /// Fire the `on_change` notification, if any.
    pub fn notify_change(&self, value: &FieldValue) {
        if let Some(callback) = &self.on_change {
            callback(value);
        }
    }
}

fn same_callback<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for FieldConfig {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.label == other.label
            && self.placeholder == other.placeholder
            && self.options == other.options
            && self.disabled == other.disabled
            && self.hide_label == other.hide_label
            && same_callback(&self.on_change, &other.on_change)
            && same_callback(&self.render, &other.render)
            && same_callback(&self.render_accessory, &other.render_accessory)
            && self.alt == other.alt
            && self.width == other.width
            && self.height == other.height
    }
}

// Debug written by hand because the callbacks are not Debug.
impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("placeholder", &self.placeholder)
            .field("options", &self.options)
            .field("disabled", &self.disabled)
            .field("hide_label", &self.hide_label)
            .field("on_change", &self.on_change.is_some())
            .field("render", &self.render.is_some())
            .field("render_accessory", &self.render_accessory.is_some())
            .field("alt", &self.alt)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
