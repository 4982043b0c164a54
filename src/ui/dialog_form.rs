// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Modal create/edit dialog rendered from a schema.
//!
//! The dialog follows the same model/view/update split as the rest of the
//! crate: [`DialogForm::view`] draws one frame and returns [`DialogMsg`]s,
//! [`DialogForm::update`] applies them to the form state and fires the
//! caller's callbacks. [`DialogForm::show`] runs both for a frame.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;
use std::rc::Rc;

use eframe::egui;

use crate::context::{FormProvider, GlobalConfig, ValidationMode, resolve_config};
use crate::form::{FormHandle, FormOwnership, FormState};
use crate::models::field_config::FieldConfig;
use crate::models::schema::Schema;
use crate::models::value::{FieldValue, FormValues};
use crate::renderers::{ControlEnv, FieldBinding, ValueSetter, dispatch};

/// Vertical room kept for the title bar and footer when sizing the body.
const CHROME_HEIGHT: f32 = 120.0;
const MIN_BODY_HEIGHT: f32 = 120.0;

type OpenChangeFn<'a> = Box<dyn FnMut(bool) + 'a>;
type SubmitFn<'a> = Box<dyn FnMut(FormValues) + 'a>;
type CancelFn<'a> = Box<dyn FnMut() + 'a>;
type FooterFn<'a> = Box<dyn FnMut(&mut egui::Ui, &mut FooterActions) + 'a>;

/// Per-frame inputs of a dialog.
pub struct DialogFormProps<'a> {
    pub title: String,
    pub description: Option<String>,
    pub open: bool,
    pub on_open_change: OpenChangeFn<'a>,
    pub schema: Rc<Schema>,
    pub default_values: FormValues,
    /// Caller-owned form state. When set, the dialog never resets it.
    pub form_methods: Option<FormHandle>,
    pub field_configs: BTreeMap<String, FieldConfig>,
    pub on_submit: SubmitFn<'a>,
    pub submit_button_text: Option<String>,
    pub cancel_button_text: Option<String>,
    pub show_cancel_button: Option<bool>,
    pub on_cancel: Option<CancelFn<'a>>,
    /// Replaces the default submit/cancel row.
    pub footer: Option<FooterFn<'a>>,
    pub hide_fields: Vec<String>,
    pub field_order: Option<Vec<String>>,
}

impl<'a> DialogFormProps<'a> {
    pub fn new(title: impl Into<String>, open: bool, schema: Rc<Schema>) -> Self {
        Self {
            title: title.into(),
            description: None,
            open,
            on_open_change: Box::new(|_| {}),
            schema,
            default_values: FormValues::new(),
            form_methods: None,
            field_configs: BTreeMap::new(),
            on_submit: Box::new(|_| {}),
            submit_button_text: None,
            cancel_button_text: None,
            show_cancel_button: None,
            on_cancel: None,
            footer: None,
            hide_fields: Vec::new(),
            field_order: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn on_open_change(mut self, f: impl FnMut(bool) + 'a) -> Self {
        self.on_open_change = Box::new(f);
        self
    }

    pub fn default_values(mut self, values: FormValues) -> Self {
        self.default_values = values;
        self
    }

    pub fn form_methods(mut self, handle: FormHandle) -> Self {
        self.form_methods = Some(handle);
        self
    }

    pub fn field_config(mut self, name: impl Into<String>, config: FieldConfig) -> Self {
        self.field_configs.insert(name.into(), config);
        self
    }

    pub fn on_submit(mut self, f: impl FnMut(FormValues) + 'a) -> Self {
        self.on_submit = Box::new(f);
        self
    }

    pub fn submit_button_text(mut self, text: impl Into<String>) -> Self {
        self.submit_button_text = Some(text.into());
        self
    }

    pub fn cancel_button_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_button_text = Some(text.into());
        self
    }

    pub fn show_cancel_button(mut self, show: bool) -> Self {
        self.show_cancel_button = Some(show);
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub fn footer(mut self, f: impl FnMut(&mut egui::Ui, &mut FooterActions) + 'a) -> Self {
        self.footer = Some(Box::new(f));
        self
    }

    pub fn hide_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hide_fields = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn field_order<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_order = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Messages produced by the dialog view.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogMsg {
    /// A control edited its own field.
    FieldChanged { name: String, value: FieldValue },
    FieldBlurred(String),
    /// An accessory wrote a field through its setter.
    ValueSet { name: String, value: FieldValue },
    SubmitRequested,
    CancelRequested,
    /// Title-bar close button.
    CloseRequested,
}

/// Handle given to a custom footer so it can trigger the default actions.
#[derive(Debug, Default)]
pub struct FooterActions {
    submit_text: String,
    cancel_text: String,
    requested: Vec<DialogMsg>,
}

impl FooterActions {
    fn new(submit_text: String, cancel_text: String) -> Self {
        Self {
            submit_text,
            cancel_text,
            requested: Vec::new(),
        }
    }

    /// Validate and submit, same as the default submit button.
    pub fn submit(&mut self) {
        self.requested.push(DialogMsg::SubmitRequested);
    }

    pub fn cancel(&mut self) {
        self.requested.push(DialogMsg::CancelRequested);
    }

    pub fn close(&mut self) {
        self.requested.push(DialogMsg::CloseRequested);
    }

    pub fn submit_text(&self) -> &str {
        &self.submit_text
    }

    pub fn cancel_text(&self) -> &str {
        &self.cancel_text
    }
}

/// Visible fields in render order.
///
/// With an explicit order, only the listed names that are declared and not
/// hidden are rendered, each once. Without one, declaration order is used.
pub fn ordered_fields(schema: &Schema, hide: &[String], order: Option<&[String]>) -> Vec<String> {
    let hidden: BTreeSet<&str> = hide.iter().map(String::as_str).collect();
    let visible = |name: &str| schema.contains(name) && !hidden.contains(name);

    match order {
        Some(order) => {
            let mut seen = BTreeSet::new();
            order
                .iter()
                .filter(|name| visible(name) && seen.insert(name.as_str()))
                .cloned()
                .collect()
        }
        None => schema
            .field_names()
            .filter(|name| visible(name))
            .map(str::to_string)
            .collect(),
    }
}

/// First non-empty text of prop, global default and built-in fallback.
pub fn resolve_text(prop: Option<&str>, global: Option<&str>, fallback: &str) -> String {
    prop.filter(|t| !t.is_empty())
        .or_else(|| global.filter(|t| !t.is_empty()))
        .unwrap_or(fallback)
        .to_string()
}

pub fn resolve_show_cancel(prop: Option<bool>, global: Option<bool>) -> bool {
    prop.or(global).unwrap_or(false)
}

fn submit_text(props: &DialogFormProps<'_>, config: &GlobalConfig) -> String {
    resolve_text(
        props.submit_button_text.as_deref(),
        config.default_submit_text.as_deref(),
        crate::context::DEFAULT_SUBMIT_TEXT,
    )
}

fn cancel_text(props: &DialogFormProps<'_>, config: &GlobalConfig) -> String {
    resolve_text(
        props.cancel_button_text.as_deref(),
        config.default_cancel_text.as_deref(),
        crate::context::DEFAULT_CANCEL_TEXT,
    )
}

/// Retained state of one dialog across frames.
#[derive(Debug)]
pub struct DialogForm {
    id: egui::Id,
    form: Option<FormOwnership>,
    was_open: bool,
    seeded_defaults: Option<FormValues>,
}

impl DialogForm {
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: egui::Id::new(("dialog-form", id_salt)),
            form: None,
            was_open: false,
            seeded_defaults: None,
        }
    }

    /// Run the dialog for one frame.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        provider: Option<&FormProvider>,
        mut props: DialogFormProps<'_>,
    ) {
        let config = resolve_config(provider);
        self.sync(&props, config.validation_mode());
        if !props.open {
            return;
        }
        let msgs = self.view(ctx, &mut props, &config);
        for msg in msgs {
            self.update(msg, &mut props, &config);
        }
    }

    /// Current values, if a form has been set up.
    pub fn values(&self) -> Option<FormValues> {
        self.form.as_ref().map(|f| f.with(|state| state.values().clone()))
    }

    pub fn with_form<R>(&self, f: impl FnOnce(&FormState) -> R) -> Option<R> {
        self.form.as_ref().map(|form| form.with(f))
    }

    /// Bring the form in line with this frame's props.
    ///
    /// Caller-owned handles are adopted as-is. An internal form is rebuilt
    /// when the schema changes or no internal form exists yet, and reset to
    /// the defaults when the dialog opens or the defaults change while open.
    pub fn sync(&mut self, props: &DialogFormProps<'_>, mode: ValidationMode) {
        if let Some(handle) = &props.form_methods {
            let same = matches!(&self.form, Some(FormOwnership::Borrowed(h)) if h.ptr_eq(handle));
            if !same {
                log::debug!("dialog form {:?} now drives a caller-owned form", self.id);
                self.form = Some(FormOwnership::Borrowed(handle.clone()));
                self.seeded_defaults = None;
            }
            self.was_open = props.open;
            return;
        }

        let rebuild = match &self.form {
            Some(FormOwnership::Owned(state)) => !Rc::ptr_eq(state.schema_rc(), &props.schema),
            _ => true,
        };
        if rebuild {
            let state = FormState::new(props.schema.clone())
                .with_mode(mode)
                .with_defaults(props.default_values.clone());
            self.form = Some(FormOwnership::Owned(state));
            self.seeded_defaults = Some(props.default_values.clone());
        } else if props.open {
            let opened = !self.was_open;
            let defaults_changed = self.seeded_defaults.as_ref() != Some(&props.default_values);
            if opened || defaults_changed {
                if let Some(FormOwnership::Owned(state)) = &mut self.form {
                    state.reset(props.default_values.clone());
                }
                self.seeded_defaults = Some(props.default_values.clone());
            }
        }

        if let Some(FormOwnership::Owned(state)) = &mut self.form {
            state.set_mode(mode);
        }
        self.was_open = props.open;
    }

    /// Apply one message: write values, validate, and fire callbacks.
    pub fn update(
        &mut self,
        msg: DialogMsg,
        props: &mut DialogFormProps<'_>,
        config: &GlobalConfig,
    ) {
        let Some(form) = &mut self.form else {
            log::debug!("dialog form {:?} got {msg:?} before it was synced", self.id);
            return;
        };

        match msg {
            DialogMsg::FieldChanged { name, value } => {
                form.with_mut(|state| state.set_value(&name, value.clone()));
                let local = props.field_configs.get(&name);
                let field = FieldConfig::resolve(config.field_config(&name), local);
                field.notify_change(&value);
            }
            DialogMsg::FieldBlurred(name) => {
                form.with_mut(|state| state.blur(&name));
            }
            DialogMsg::ValueSet { name, value } => {
                form.with_mut(|state| state.set_value(&name, value));
            }
            DialogMsg::SubmitRequested => match form.with_mut(FormState::handle_submit) {
                Ok(values) => (props.on_submit)(values),
                Err(errors) => {
                    log::debug!("dialog form {:?}: {errors}", self.id);
                }
            },
            DialogMsg::CancelRequested => match props.on_cancel.as_mut() {
                Some(on_cancel) => on_cancel(),
                None => (props.on_open_change)(false),
            },
            DialogMsg::CloseRequested => (props.on_open_change)(false),
        }
    }

    /// Draw the dialog and collect the messages produced this frame.
    pub fn view(
        &self,
        ctx: &egui::Context,
        props: &mut DialogFormProps<'_>,
        config: &GlobalConfig,
    ) -> Vec<DialogMsg> {
        let mut msgs = Vec::new();
        let Some(form) = &self.form else {
            return msgs;
        };

        let theme = config.theme();
        let screen = ctx.screen_rect();
        let max_width = (screen.width() * theme.max_width_fraction()).max(theme.min_width());
        let max_height = screen.height() * theme.max_height_fraction();
        let body_height = (max_height - CHROME_HEIGHT).max(MIN_BODY_HEIGHT);

        let fields =
            ordered_fields(&props.schema, &props.hide_fields, props.field_order.as_deref());
        let submit_label = submit_text(props, config);
        let cancel_label = cancel_text(props, config);
        let show_cancel =
            resolve_show_cancel(props.show_cancel_button, config.default_show_cancel_button);

        let mut open = true;
        egui::Window::new(props.title.as_str())
            .id(self.id)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .min_width(theme.min_width())
            .max_width(max_width)
            .max_height(max_height)
            .show(ctx, |ui| {
                if let Some(description) = &props.description {
                    ui.label(egui::RichText::new(description).color(egui::Color32::from_gray(120)));
                    ui.add_space(8.0);
                }

                egui::ScrollArea::vertical()
                    .id_salt(self.id.with("body"))
                    .max_height(body_height)
                    .show(ui, |ui| {
                        form.with(|state| {
                            render_fields(
                                ui,
                                state,
                                &fields,
                                props,
                                config,
                                theme.field_spacing(),
                                &mut msgs,
                            )
                        });
                    });

                ui.separator();
                match props.footer.as_mut() {
                    Some(footer) => {
                        let mut actions =
                            FooterActions::new(submit_label.clone(), cancel_label.clone());
                        footer(ui, &mut actions);
                        msgs.extend(actions.requested);
                    }
                    None => {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(submit_label.as_str()).clicked() {
                                msgs.push(DialogMsg::SubmitRequested);
                            }
                            if show_cancel && ui.button(cancel_label.as_str()).clicked() {
                                msgs.push(DialogMsg::CancelRequested);
                            }
                        });
                    }
                }
            });

        if !open {
            msgs.push(DialogMsg::CloseRequested);
        }
        msgs
    }
}

fn render_fields(
    ui: &mut egui::Ui,
    state: &FormState,
    fields: &[String],
    props: &DialogFormProps<'_>,
    config: &GlobalConfig,
    spacing: f32,
    msgs: &mut Vec<DialogMsg>,
) {
    let mut setter = ValueSetter::default();

    for name in fields {
        let field = FieldConfig::resolve(config.field_config(name), props.field_configs.get(name));
        let optional = state.schema().is_optional(name);

        ui.push_id(name, |ui| {
            if !field.is_label_hidden() {
                let mut label = field.display_label(name).to_string();
                if !optional {
                    label.push_str(" *");
                }
                ui.label(label);
                ui.add_space(4.0);
            }

            let mut binding = FieldBinding::new(name, state.value(name));
            let mut env = ControlEnv {
                form: state,
                optional,
                setter: &mut setter,
            };
            dispatch(field.kind()).show(ui, &mut binding, &field, &mut env);

            let (changed, blurred) = binding.into_parts();
            if let Some(value) = changed {
                msgs.push(DialogMsg::FieldChanged {
                    name: name.clone(),
                    value,
                });
            }
            if blurred {
                msgs.push(DialogMsg::FieldBlurred(name.clone()));
            }

            if let Some(error) = state.error(name) {
                ui.label(
                    egui::RichText::new(error)
                        .small()
                        .color(ui.visuals().error_fg_color),
                );
            }
        });
        ui.add_space(spacing);
    }

    msgs.extend(
        setter
            .into_writes()
            .into_iter()
            .map(|(name, value)| DialogMsg::ValueSet { name, value }),
    );
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::models::field_config::FieldKind;
    use crate::models::schema::FieldSchema;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn user_schema() -> Rc<Schema> {
        Rc::new(
            Schema::new()
                .field("name", FieldSchema::string().min_len(1))
                .field("age", FieldSchema::number().optional()),
        )
    }

    fn defaults(name: &str) -> FormValues {
        FormValues::from([("name".to_string(), FieldValue::from(name))])
    }

    fn builtin() -> GlobalConfig {
        GlobalConfig::builtin()
    }

    #[test]
    fn explicit_order_intersects_visible_fields() {
        let schema = Schema::new()
            .field("x", FieldSchema::string())
            .field("y", FieldSchema::string())
            .field("z", FieldSchema::string());
        let hide = names(&["y"]);

        let order = names(&["z", "y", "missing", "x", "z"]);
        assert_eq!(ordered_fields(&schema, &hide, Some(&order)), names(&["z", "x"]));
        assert_eq!(ordered_fields(&schema, &hide, None), names(&["x", "z"]));
        assert!(ordered_fields(&schema, &names(&["x", "y", "z"]), None).is_empty());
    }

    #[test]
    fn texts_fall_back_through_prop_global_builtin() {
        assert_eq!(resolve_text(Some("Save"), Some("Apply"), "Submit"), "Save");
        assert_eq!(resolve_text(Some(""), Some("Apply"), "Submit"), "Apply");
        assert_eq!(resolve_text(None, None, "Submit"), "Submit");
        assert!(resolve_show_cancel(None, Some(true)));
        assert!(!resolve_show_cancel(Some(false), Some(true)));
        assert!(!resolve_show_cancel(None, None));
    }

    #[test]
    fn reopening_resets_to_new_defaults() {
        let schema = user_schema();
        let mut dialog = DialogForm::new("user");
        let mode = ValidationMode::OnSubmit;

        let props =
            DialogFormProps::new("Edit", true, schema.clone()).default_values(defaults("A"));
        dialog.sync(&props, mode);
        dialog.update(
            DialogMsg::FieldChanged {
                name: "name".into(),
                value: "edited".into(),
            },
            &mut DialogFormProps::new("Edit", true, schema.clone()),
            &builtin(),
        );
        assert_eq!(dialog.with_form(|s| s.value("name").clone()), Some("edited".into()));
        let first_session = dialog.with_form(FormState::generation);

        let closed =
            DialogFormProps::new("Edit", false, schema.clone()).default_values(defaults("A"));
        dialog.sync(&closed, mode);
        let reopened =
            DialogFormProps::new("Edit", true, schema.clone()).default_values(defaults("B"));
        dialog.sync(&reopened, mode);

        assert_eq!(dialog.with_form(|s| s.value("name").clone()), Some("B".into()));
        // Widget scratch memory is keyed per session.
        assert_ne!(dialog.with_form(FormState::generation), first_session);
    }

    #[test]
    fn open_dialog_keeps_edits_until_defaults_change() {
        let schema = user_schema();
        let mut dialog = DialogForm::new("user");
        let mode = ValidationMode::OnSubmit;
        let props =
            || DialogFormProps::new("Edit", true, schema.clone()).default_values(defaults("A"));

        dialog.sync(&props(), mode);
        dialog.update(
            DialogMsg::FieldChanged {
                name: "name".into(),
                value: "typed".into(),
            },
            &mut props(),
            &builtin(),
        );
        dialog.sync(&props(), mode);
        assert_eq!(dialog.with_form(|s| s.value("name").clone()), Some("typed".into()));

        let changed =
            DialogFormProps::new("Edit", true, schema.clone()).default_values(defaults("C"));
        dialog.sync(&changed, mode);
        assert_eq!(dialog.with_form(|s| s.value("name").clone()), Some("C".into()));
    }

    #[test]
    fn caller_owned_form_is_never_reset() {
        let schema = user_schema();
        let handle =
            FormHandle::new(FormState::new(schema.clone()).with_defaults(defaults("kept")));
        let mut dialog = DialogForm::new("external");

        for open in [true, false, true] {
            let props = DialogFormProps::new("Edit", open, schema.clone())
                .default_values(defaults("ignored"))
                .form_methods(handle.clone());
            dialog.sync(&props, ValidationMode::OnChange);
        }

        assert_eq!(handle.borrow().value("name"), &FieldValue::from("kept"));
        assert_eq!(handle.borrow().mode(), ValidationMode::OnSubmit);
    }

    #[test]
    fn submit_passes_coerced_values_only_when_valid() {
        let schema = user_schema();
        let submitted = RefCell::new(Vec::new());
        let mut props = DialogFormProps::new("Create", true, schema.clone())
            .default_values(defaults("Ada"))
            .on_submit(|values| submitted.borrow_mut().push(values));
        let mut dialog = DialogForm::new("create");
        dialog.sync(&props, ValidationMode::OnSubmit);

        dialog.update(
            DialogMsg::FieldChanged {
                name: "age".into(),
                value: "42".into(),
            },
            &mut props,
            &builtin(),
        );
        dialog.update(DialogMsg::SubmitRequested, &mut props, &builtin());

        dialog.update(
            DialogMsg::FieldChanged {
                name: "name".into(),
                value: "".into(),
            },
            &mut props,
            &builtin(),
        );
        dialog.update(DialogMsg::SubmitRequested, &mut props, &builtin());
        drop(props);

        let submitted = submitted.into_inner();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].get("age"), Some(&FieldValue::Number(42.0)));
        assert_eq!(dialog.with_form(|s| s.error("name").is_some()), Some(true));
    }

    #[test]
    fn empty_optional_number_is_omitted() {
        let schema = user_schema();
        let submitted = RefCell::new(None);
        let mut props = DialogFormProps::new("Create", true, schema)
            .default_values(defaults("Ada"))
            .on_submit(|values| *submitted.borrow_mut() = Some(values));
        let mut dialog = DialogForm::new("create");
        dialog.sync(&props, ValidationMode::OnSubmit);

        dialog.update(
            DialogMsg::FieldChanged {
                name: "age".into(),
                value: FieldValue::Undefined,
            },
            &mut props,
            &builtin(),
        );
        dialog.update(DialogMsg::SubmitRequested, &mut props, &builtin());
        drop(props);

        let values = submitted.into_inner().unwrap();
        assert!(!values.contains_key("age"));
    }

    #[test]
    fn cancel_prefers_callback_and_falls_back_to_closing() {
        let schema = user_schema();
        let closed = Cell::new(None);
        let cancelled = Cell::new(0);
        let mut dialog = DialogForm::new("cancel");

        let mut plain = DialogFormProps::new("Edit", true, schema.clone())
            .on_open_change(|open| closed.set(Some(open)));
        dialog.sync(&plain, ValidationMode::OnSubmit);
        dialog.update(DialogMsg::CancelRequested, &mut plain, &builtin());
        drop(plain);
        assert_eq!(closed.take(), Some(false));

        let mut with_cancel = DialogFormProps::new("Edit", true, schema)
            .on_open_change(|open| closed.set(Some(open)))
            .on_cancel(|| cancelled.set(cancelled.get() + 1));
        dialog.update(DialogMsg::CancelRequested, &mut with_cancel, &builtin());
        dialog.update(DialogMsg::CloseRequested, &mut with_cancel, &builtin());
        drop(with_cancel);

        assert_eq!(cancelled.get(), 1);
        assert_eq!(closed.take(), Some(false));
    }

    #[test]
    fn field_change_notifies_config_callback_and_accessory_writes_do_not() {
        let schema = user_schema();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut props = DialogFormProps::new("Edit", true, schema).field_config(
            "age",
            FieldConfig::new(FieldKind::Number)
                .on_change(move |v| sink.borrow_mut().push(v.clone())),
        );
        let mut dialog = DialogForm::new("notify");
        dialog.sync(&props, ValidationMode::OnSubmit);

        dialog.update(
            DialogMsg::FieldChanged {
                name: "age".into(),
                value: FieldValue::Number(7.0),
            },
            &mut props,
            &builtin(),
        );
        dialog.update(
            DialogMsg::ValueSet {
                name: "age".into(),
                value: FieldValue::Number(8.0),
            },
            &mut props,
            &builtin(),
        );

        assert_eq!(*seen.borrow(), vec![FieldValue::Number(7.0)]);
        assert_eq!(dialog.with_form(|s| s.value("age").clone()), Some(FieldValue::Number(8.0)));
    }

    #[test]
    fn headless_frame_renders_without_messages() {
        let schema = Rc::new(
            Schema::new()
                .field("name", FieldSchema::string())
                .field("role", FieldSchema::string().optional())
                .field("tags", FieldSchema::array(FieldSchema::string()).optional()),
        );
        let provider = FormProvider::default();
        let mut dialog = DialogForm::new("headless");
        let ctx = egui::Context::default();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let props = DialogFormProps::new("Create", true, schema.clone())
                .field_config("role", FieldConfig::new(FieldKind::Select))
                .field_config("tags", FieldConfig::new(FieldKind::MultiSelect));
            let config = resolve_config(Some(&provider));
            dialog.sync(&props, config.validation_mode());
            let mut props = props;
            let msgs = dialog.view(ctx, &mut props, &config);
            assert!(msgs.is_empty());
        });
    }
}
