// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single-choice dropdown.

use eframe::egui;

use crate::models::field_config::FieldConfig;
use crate::models::value::FieldValue;
use crate::renderers::{FieldBinding, NO_OPTIONS_TEXT, placeholder_note};

/// Collapsed-box text when nothing is selected.
pub fn placeholder_text(config: &FieldConfig, key: &str) -> String {
    match config.placeholder.as_deref().filter(|p| !p.is_empty()) {
        Some(p) => p.to_string(),
        None => format!("Select {}", config.display_label(key)),
    }
}

/// Optional fields without options show an inert note instead of a dropdown.
pub fn shows_placeholder(config: &FieldConfig, optional: bool) -> bool {
    optional && config.option_list().is_empty()
}

/// A pick emits the new value and also marks the field as left, since the
/// combo header never reports losing focus.
fn commit_choice(binding: &mut FieldBinding<'_>, current: &str, choice: String) {
    if choice != current {
        binding.on_change(FieldValue::Text(choice));
        binding.on_blur();
    }
}

pub fn show(
    ui: &mut egui::Ui,
    binding: &mut FieldBinding<'_>,
    config: &FieldConfig,
    optional: bool,
) {
    if shows_placeholder(config, optional) {
        placeholder_note(ui, NO_OPTIONS_TEXT);
        return;
    }

    let current = binding.value().display_string();
    let selected_text = config
        .option_list()
        .iter()
        .find(|opt| opt.value == current)
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| {
            if current.is_empty() {
                placeholder_text(config, binding.name())
            } else {
                current.clone()
            }
        });

    let mut choice = current.clone();
    let width = config.width.unwrap_or_else(|| ui.available_width());
    ui.add_enabled_ui(!config.is_disabled(), |ui| {
        egui::ComboBox::from_id_salt(("dialog-form-select", binding.name()))
            .width(width)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for opt in config.option_list() {
                    ui.selectable_value(&mut choice, opt.value.clone(), opt.label.as_str());
                }
            });
        commit_choice(binding, &current, choice);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field_config::FieldKind;
    use crate::renderers::run_headless;

    #[test]
    fn placeholder_falls_back_to_label_then_key() {
        let labelled = FieldConfig::new(FieldKind::Select).label("Role");
        assert_eq!(placeholder_text(&labelled, "role"), "Select Role");
        assert_eq!(placeholder_text(&FieldConfig::default(), "role"), "Select role");
        let custom = labelled.placeholder("Pick a role");
        assert_eq!(placeholder_text(&custom, "role"), "Pick a role");
    }

    #[test]
    fn optional_select_without_options_is_inert() {
        let config = FieldConfig::new(FieldKind::Select);
        assert!(shows_placeholder(&config, true));
        assert!(!shows_placeholder(&config, false));
        assert!(!shows_placeholder(&config.clone().options([("a", "A")]), true));

        let value = FieldValue::Undefined;
        for _ in 0..3 {
            let mut emitted = None;
            run_headless(|ui| {
                let mut binding = FieldBinding::new("role", &value);
                show(ui, &mut binding, &config, true);
                emitted = Some(binding.into_parts());
            });
            assert_eq!(emitted, Some((None, false)));
        }
    }

    #[test]
    fn picking_an_option_touches_the_field() {
        let value = FieldValue::from("viewer");

        let mut binding = FieldBinding::new("role", &value);
        commit_choice(&mut binding, "viewer", "admin".to_string());
        assert_eq!(binding.into_parts(), (Some(FieldValue::from("admin")), true));

        let mut binding = FieldBinding::new("role", &value);
        commit_choice(&mut binding, "viewer", "viewer".to_string());
        assert_eq!(binding.into_parts(), (None, false));
    }
}
