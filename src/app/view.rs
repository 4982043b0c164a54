// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Demo egui shell: user table plus create, edit and note dialogs.

use std::cell::Cell;
use std::rc::Rc;

use eframe::egui;

use dialog_form::{
    DialogForm, DialogFormProps, FieldConfig, FieldKind, FieldSchema, FieldValue, FormHandle,
    FormProvider, FormState, FormValues, Schema,
};

use super::model::{self, DemoModel, Msg, ROLES, SKILLS};

const SWATCHES: [(&str, egui::Color32); 4] = [
    ("red", egui::Color32::from_rgb(220, 70, 70)),
    ("green", egui::Color32::from_rgb(70, 170, 90)),
    ("blue", egui::Color32::from_rgb(70, 120, 220)),
    ("amber", egui::Color32::from_rgb(230, 170, 40)),
];

fn note_schema() -> Schema {
    Schema::new().field(
        "note",
        FieldSchema::string().min_len(3).message("Notes need at least 3 characters"),
    )
}

fn note_defaults() -> FormValues {
    FormValues::from([("note".to_string(), FieldValue::from(""))])
}

/// Field configs shared by the create and edit dialogs.
fn user_field_configs() -> Vec<(&'static str, FieldConfig)> {
    vec![
        ("name", FieldConfig::default().label("Full name").placeholder("Ada Lovelace")),
        ("age", FieldConfig::new(FieldKind::Number).label("Age").placeholder("Optional")),
        (
            "role",
            FieldConfig::new(FieldKind::Select)
                .label("Role")
                .options(ROLES)
                .on_change(|value| log::info!("role changed to {}", value.display_string())),
        ),
        ("skills", FieldConfig::new(FieldKind::MultiSelect).label("Skills").options(SKILLS)),
        (
            "website",
            FieldConfig::default()
                .label("Website")
                .placeholder("https://")
                .render_accessory(|ui, setter| {
                    if ui.small_button("Use example").clicked() {
                        setter.set_value("website", "https://example.com");
                    }
                }),
        ),
        (
            "color",
            FieldConfig::new(FieldKind::Custom)
                .label("Favourite colour")
                .render(render_color_picker),
        ),
        (
            "bio",
            FieldConfig::new(FieldKind::Textarea)
                .label("Biography")
                .placeholder("A few words about this person"),
        ),
        ("active", FieldConfig::new(FieldKind::Checkbox).label("Active account")),
        (
            "avatar",
            FieldConfig::new(FieldKind::Image)
                .label("Avatar")
                .alt("User avatar")
                .size(64.0, 64.0),
        ),
    ]
}

fn render_color_picker(
    ui: &mut egui::Ui,
    binding: &mut dialog_form::FieldBinding<'_>,
    config: &FieldConfig,
    _form: &FormState,
) {
    let current = binding.value().display_string();
    ui.add_enabled_ui(!config.is_disabled(), |ui| {
        ui.horizontal(|ui| {
            for (name, color) in SWATCHES {
                let selected = current == name;
                let label = egui::RichText::new(egui_phosphor::regular::CIRCLE).color(color);
                if ui.selectable_label(selected, label).on_hover_text(name).clicked() {
                    binding.on_change(FieldValue::from(name));
                    binding.on_blur();
                }
            }
            if !current.is_empty() && ui.small_button("Clear").clicked() {
                binding.on_change(FieldValue::Undefined);
            }
        });
    });
}

/// Demo application state outside the MVU model: dialogs and channels.
pub struct DemoApp {
    model: DemoModel,
    inbox: Vec<Msg>,
    msg_tx: crossbeam_channel::Sender<Msg>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
    provider: FormProvider,
    user_schema: Rc<Schema>,
    note_schema: Rc<Schema>,
    create_dialog: DialogForm,
    edit_dialog: DialogForm,
    note_dialog: DialogForm,
    note_form: FormHandle,
}

impl DemoApp {
    pub fn new(provider: FormProvider) -> Self {
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();
        let note_schema = Rc::new(note_schema());
        let note_form =
            FormHandle::new(FormState::new(note_schema.clone()).with_defaults(note_defaults()));

        Self {
            model: DemoModel::from_config(&provider.read()),
            inbox: Vec::new(),
            msg_tx,
            msg_rx,
            provider,
            user_schema: Rc::new(model::user_schema()),
            note_schema,
            create_dialog: DialogForm::new("create-user"),
            edit_dialog: DialogForm::new("edit-user"),
            note_dialog: DialogForm::new("quick-note"),
            note_form,
        }
    }

    fn sender(&self, wrap: fn(FormValues) -> Msg) -> impl FnMut(FormValues) + 'static {
        let tx = self.msg_tx.clone();
        move |values| {
            let _ = tx.send(wrap(values));
        }
    }

    fn open_sender(&self, wrap: fn(bool) -> Msg) -> impl FnMut(bool) + 'static {
        let tx = self.msg_tx.clone();
        move |open| {
            let _ = tx.send(wrap(open));
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Users");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} New user", egui_phosphor::regular::USER_PLUS))
                    .clicked()
                {
                    self.inbox.push(Msg::OpenCreate);
                }
                if ui
                    .button(format!("{} Quick note", egui_phosphor::regular::NOTE_PENCIL))
                    .clicked()
                {
                    self.inbox.push(Msg::SetNoteOpen(true));
                }
                ui.separator();
                let mut compact = self.model.compact;
                if ui.checkbox(&mut compact, "Compact dialogs").changed() {
                    self.inbox.push(Msg::ToggleCompact);
                }
                let mut live = self.model.live_validation;
                if ui.checkbox(&mut live, "Validate while typing").changed() {
                    self.inbox.push(Msg::ToggleLiveValidation);
                }
            });
        });
    }

    fn render_users(&mut self, ui: &mut egui::Ui) {
        if self.model.users.is_empty() {
            ui.label(
                egui::RichText::new("No users yet. Use \"New user\" to add one.")
                    .color(egui::Color32::from_gray(140)),
            );
            return;
        }

        egui::Grid::new("users")
            .num_columns(5)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in ["Name", "E-mail", "Role", "Skills", ""] {
                    ui.strong(header);
                }
                ui.end_row();

                for user in &self.model.users {
                    ui.label(user.name.as_str());
                    ui.label(user.email.as_str());
                    ui.label(user.role.as_str());
                    ui.label(user.skills.join(", "));
                    ui.horizontal(|ui| {
                        if ui
                            .small_button(egui_phosphor::regular::PENCIL_SIMPLE)
                            .on_hover_text("Edit user")
                            .clicked()
                        {
                            self.inbox.push(Msg::OpenEdit(user.id));
                        }
                        if ui
                            .small_button(egui_phosphor::regular::TRASH_SIMPLE)
                            .on_hover_text("Delete user")
                            .clicked()
                        {
                            self.inbox.push(Msg::Delete(user.id));
                        }
                    });
                    ui.end_row();
                }
            });
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        let configs = user_field_configs();

        let schema = self.user_schema.clone();
        let mut create = DialogFormProps::new("Create user", self.model.create_open, schema)
            .description("Fields marked with * are required.")
            .default_values(model::user_defaults(None))
            .hide_fields(["avatar"])
            .submit_button_text("Create")
            .show_cancel_button(true)
            .on_open_change(self.open_sender(Msg::SetCreateOpen))
            .on_submit(self.sender(Msg::Created));
        for (name, config) in &configs {
            create = create.field_config(*name, config.clone());
        }
        self.create_dialog.show(ctx, Some(&self.provider), create);

        let editing = self
            .model
            .editing
            .and_then(|id| self.model.users.iter().find(|u| u.id == id));
        let schema = self.user_schema.clone();
        let mut edit = DialogFormProps::new("Edit user", editing.is_some(), schema)
            .default_values(model::user_defaults(editing))
            .field_order(["avatar", "name", "email", "role", "skills", "active"])
            .submit_button_text("Save")
            .on_open_change(self.open_sender(Msg::SetEditOpen))
            .on_submit(self.sender(Msg::Updated));
        for (name, config) in configs {
            edit = edit.field_config(name, config);
        }
        self.edit_dialog.show(ctx, Some(&self.provider), edit);

        let clear = Cell::new(false);
        let note_field = FieldConfig::new(FieldKind::Textarea)
            .hide_label(true)
            .placeholder("Write a note");
        let schema = self.note_schema.clone();
        let note = DialogFormProps::new("Quick note", self.model.note_open, schema)
            .form_methods(self.note_form.clone())
            .field_config("note", note_field)
            .on_open_change(self.open_sender(Msg::SetNoteOpen))
            .on_submit(self.sender(Msg::NoteSaved))
            .footer(|ui, actions| {
                ui.horizontal(|ui| {
                    if ui.button(actions.submit_text()).clicked() {
                        actions.submit();
                    }
                    if ui.button("Clear").clicked() {
                        clear.set(true);
                    }
                    if ui.button("Close").clicked() {
                        actions.close();
                    }
                });
            });
        self.note_dialog.show(ctx, Some(&self.provider), note);
        if clear.get() {
            self.note_form.borrow_mut().reset(note_defaults());
        }
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match &self.model.status {
                Some(status) => {
                    ui.label(status.as_str());
                    if ui.small_button(egui_phosphor::regular::X).clicked() {
                        self.inbox.push(Msg::DismissStatus);
                    }
                }
                None => {
                    ui.label(egui::RichText::new("Ready").color(egui::Color32::from_gray(140)));
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} notes", self.model.notes.len()));
            });
        });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Callbacks from last frame's dialogs.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let saved_note = matches!(msg, Msg::NoteSaved(_));
            if let Some(patch) = model::update(&mut self.model, msg) {
                self.provider.update(patch);
            }
            if saved_note {
                self.note_form.borrow_mut().reset(note_defaults());
            }
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_toolbar(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| self.render_status(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.render_users(ui));
        });

        self.render_dialogs(ctx);

        if !self.inbox.is_empty() || !self.msg_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}
