// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Demo model-view-update kernel: a small user directory.

use anyhow::{Context, Result};
use uuid::Uuid;

use dialog_form::{FieldSchema, FieldValue, FormValues, GlobalConfig, Schema, Theme, ValidationMode};

pub const ROLES: [(&str, &str); 3] = [
    ("admin", "Administrator"),
    ("editor", "Editor"),
    ("viewer", "Viewer"),
];
pub const SKILLS: [(&str, &str); 4] = [
    ("rust", "Rust"),
    ("design", "Design"),
    ("ops", "Operations"),
    ("writing", "Technical writing"),
];

/// A directory entry.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<f64>,
    pub role: String,
    pub skills: Vec<String>,
    pub website: Option<String>,
    pub color: Option<String>,
    pub bio: String,
    pub active: bool,
    pub avatar: Option<String>,
}

pub fn user_schema() -> Schema {
    Schema::new()
        .field("name", FieldSchema::string().min_len(2).message("Name needs at least 2 characters"))
        .field("email", FieldSchema::string().email().message("Enter a valid e-mail address"))
        .field("age", FieldSchema::number().int().min(18.0).optional())
        .field("role", FieldSchema::enumeration(ROLES.map(|(value, _)| value)))
        .field(
            "skills",
            FieldSchema::array(FieldSchema::string())
                .min_items(1)
                .message("Pick at least one skill"),
        )
        .field("website", FieldSchema::string().url().optional())
        .field("color", FieldSchema::string().optional())
        .field("bio", FieldSchema::string().max_len(500).optional())
        .field("active", FieldSchema::boolean().default_value(true))
        .field("avatar", FieldSchema::string().optional())
}

/// Form defaults for creating (`None`) or editing a user.
pub fn user_defaults(user: Option<&User>) -> FormValues {
    let Some(user) = user else {
        return FormValues::from([
            ("name".to_string(), FieldValue::from("")),
            ("email".to_string(), FieldValue::from("")),
            ("role".to_string(), FieldValue::from("viewer")),
            ("skills".to_string(), FieldValue::List(Vec::new())),
            ("active".to_string(), FieldValue::Bool(true)),
        ]);
    };

    FormValues::from([
        ("name".to_string(), FieldValue::from(user.name.as_str())),
        ("email".to_string(), FieldValue::from(user.email.as_str())),
        ("age".to_string(), FieldValue::from(user.age)),
        ("role".to_string(), FieldValue::from(user.role.as_str())),
        ("skills".to_string(), FieldValue::from(user.skills.clone())),
        ("website".to_string(), FieldValue::from(user.website.clone())),
        ("color".to_string(), FieldValue::from(user.color.clone())),
        ("bio".to_string(), FieldValue::from(user.bio.as_str())),
        ("active".to_string(), FieldValue::Bool(user.active)),
        ("avatar".to_string(), FieldValue::from(user.avatar.clone())),
    ])
}

fn text(values: &FormValues, key: &str) -> Option<String> {
    values.get(key).and_then(FieldValue::as_str).map(str::to_string)
}

/// Build a user from validated form output.
pub fn user_from_values(id: Uuid, values: &FormValues) -> Result<User> {
    Ok(User {
        id,
        name: text(values, "name").context("Submitted user has no name")?,
        email: text(values, "email").context("Submitted user has no e-mail")?,
        age: values.get("age").and_then(FieldValue::as_f64),
        role: text(values, "role").context("Submitted user has no role")?,
        skills: values.get("skills").map(FieldValue::string_list).unwrap_or_default(),
        website: text(values, "website").filter(|w| !w.is_empty()),
        color: text(values, "color"),
        bio: text(values, "bio").unwrap_or_default(),
        active: values.get("active").and_then(FieldValue::as_bool).unwrap_or(true),
        avatar: text(values, "avatar").filter(|a| !a.is_empty()),
    })
}

/// Demo state.
#[derive(Default)]
pub struct DemoModel {
    pub users: Vec<User>,
    pub create_open: bool,
    /// User currently shown in the edit dialog.
    pub editing: Option<Uuid>,
    pub note_open: bool,
    pub notes: Vec<String>,
    pub live_validation: bool,
    pub compact: bool,
    /// Theme the provider started with; compact mode overrides on top of it.
    pub base_theme: Theme,
    pub status: Option<String>,
}

impl DemoModel {
    /// Toggles mirror the provider's startup config.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            live_validation: config.validation_mode == Some(ValidationMode::OnChange),
            base_theme: config.theme.unwrap_or_default(),
            ..Default::default()
        }
    }
}

/// Messages routed through [`update`].
#[derive(Debug)]
pub enum Msg {
    OpenCreate,
    SetCreateOpen(bool),
    Created(FormValues),
    OpenEdit(Uuid),
    SetEditOpen(bool),
    Updated(FormValues),
    Delete(Uuid),
    SetNoteOpen(bool),
    NoteSaved(FormValues),
    ToggleLiveValidation,
    ToggleCompact,
    DismissStatus,
}

/// Apply a message. Returns a provider patch when global settings changed.
pub fn update(model: &mut DemoModel, msg: Msg) -> Option<GlobalConfig> {
    match msg {
        Msg::OpenCreate => model.create_open = true,
        Msg::SetCreateOpen(open) => model.create_open = open,
        Msg::Created(values) => match user_from_values(Uuid::new_v4(), &values) {
            Ok(user) => {
                model.status = Some(format!("Created {}", user.name));
                model.users.push(user);
                model.create_open = false;
            }
            Err(err) => {
                log::warn!("Rejected new user: {err:#}");
                model.status = Some(format!("Could not create user: {err}"));
            }
        },
        Msg::OpenEdit(id) => {
            if model.users.iter().any(|u| u.id == id) {
                model.editing = Some(id);
            }
        }
        Msg::SetEditOpen(open) => {
            if !open {
                model.editing = None;
            }
        }
        Msg::Updated(values) => {
            let Some(id) = model.editing else {
                return None;
            };
            match user_from_values(id, &values) {
                Ok(user) => {
                    model.status = Some(format!("Updated {}", user.name));
                    if let Some(slot) = model.users.iter_mut().find(|u| u.id == id) {
                        *slot = user;
                    }
                    model.editing = None;
                }
                Err(err) => {
                    log::warn!("Rejected user update: {err:#}");
                    model.status = Some(format!("Could not update user: {err}"));
                }
            }
        }
        Msg::Delete(id) => {
            model.users.retain(|u| u.id != id);
            if model.editing == Some(id) {
                model.editing = None;
            }
        }
        Msg::SetNoteOpen(open) => model.note_open = open,
        Msg::NoteSaved(values) => {
            if let Some(note) = text(&values, "note") {
                model.notes.push(note);
            }
        }
        Msg::ToggleLiveValidation => {
            model.live_validation = !model.live_validation;
            return Some(validation_patch(model));
        }
        Msg::ToggleCompact => {
            model.compact = !model.compact;
            return Some(theme_patch(model));
        }
        Msg::DismissStatus => model.status = None,
    }
    None
}

/// Provider patch for the live-validation toggle. Touches no other key.
pub fn validation_patch(model: &DemoModel) -> GlobalConfig {
    GlobalConfig {
        validation_mode: Some(if model.live_validation {
            ValidationMode::OnChange
        } else {
            ValidationMode::OnSubmit
        }),
        ..Default::default()
    }
}

/// Provider patch for the compact toggle, layered over the startup theme.
pub fn theme_patch(model: &DemoModel) -> GlobalConfig {
    let theme = if model.compact {
        Theme {
            dialog_max_width: Some(0.45),
            field_spacing: Some(6.0),
            ..model.base_theme
        }
    } else {
        model.base_theme
    };
    GlobalConfig {
        theme: Some(theme),
        ..Default::default()
    }
}
