// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Schema-driven create/edit dialogs for egui.
//!
//! Declare a [`Schema`], optionally describe how fields render with
//! [`FieldConfig`], and show a [`DialogForm`] every frame. Values are
//! validated against the schema before they reach the submit callback.
//!
//! Chip remove buttons use Phosphor glyphs and image previews go through
//! egui's loaders, so hosts should register `egui_phosphor` fonts and call
//! `egui_extras::install_image_loaders` at startup.
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use dialog_form::{DialogForm, DialogFormProps, FieldConfig, FieldKind, FieldSchema, Schema};
//!
//! fn frame(
//!     ctx: &eframe::egui::Context,
//!     dialog: &mut DialogForm,
//!     schema: &Rc<Schema>,
//!     open: &mut bool,
//! ) {
//!     let props = DialogFormProps::new("Create user", *open, schema.clone())
//!         .field_config("bio", FieldConfig::new(FieldKind::Textarea).label("Biography"))
//!         .on_open_change(|o| *open = o)
//!         .on_submit(|values| println!("{values:?}"));
//!     dialog.show(ctx, None, props);
//! }
//!
//! let schema = Rc::new(
//!     Schema::new()
//!         .field("name", FieldSchema::string().min_len(1))
//!         .field("bio", FieldSchema::string().optional()),
//! );
//! # let _ = schema;
//! ```

pub mod context;
pub mod form;
pub mod models;
pub mod renderers;
pub mod ui;

pub use context::{
    FormProvider, GlobalConfig, Theme, ValidationMode, resolve_config, resolve_field_config,
};
pub use form::{FormHandle, FormOwnership, FormState};
pub use models::field_config::{FieldConfig, FieldKind, SelectOption};
pub use models::schema::{FieldSchema, Schema, ValidationErrors};
pub use models::value::{FieldValue, FormValues};
pub use renderers::{ControlRenderer, FieldBinding, ValueSetter, dispatch};
pub use ui::dialog_form::{DialogForm, DialogFormProps, DialogMsg, FooterActions};
