// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Multi-choice list with chips and a select-all toggle.
//!
//! The selection logic lives in pure functions so the view only maps clicks
//! to new lists. Every mutation emits the complete new list.

use eframe::egui;

use crate::models::field_config::{FieldConfig, SelectOption};
use crate::models::value::FieldValue;
use crate::renderers::{FieldBinding, NO_OPTIONS_TEXT, placeholder_note};

pub const SELECT_ALL_TEXT: &str = "Select all";
pub const DESELECT_ALL_TEXT: &str = "Deselect all";
pub const DEFAULT_PLACEHOLDER: &str = "Select options";

const LIST_MAX_HEIGHT: f32 = 180.0;

/// Selection captured when the select-all toggle filled the list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectAllMemory {
    /// Selection before the toggle.
    pub before: Vec<String>,
    /// Selection the toggle produced.
    pub after: Vec<String>,
}

/// Result of pressing the select-all toggle.
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleOutcome {
    pub values: Vec<String>,
    pub memory: Option<SelectAllMemory>,
}

/// Current selection, deduplicated, in stored order.
pub fn selected_values(value: &FieldValue) -> Vec<String> {
    value.string_list()
}

/// Full when the selection covers as many entries as there are options.
pub fn is_all_selected(selected: &[String], options: &[SelectOption]) -> bool {
    !options.is_empty() && selected.len() >= options.len()
}

/// Add `option` if absent, otherwise remove it.
pub fn toggle_option(selected: &[String], option: &str) -> Vec<String> {
    if selected.iter().any(|v| v == option) {
        remove_value(selected, option)
    } else {
        let mut next = selected.to_vec();
        next.push(option.to_string());
        next
    }
}

pub fn remove_value(selected: &[String], value: &str) -> Vec<String> {
    selected.iter().filter(|v| *v != value).cloned().collect()
}

/// Compute the list after pressing the select-all toggle.
///
/// A partial selection becomes every option in option order. A full
/// selection clears, unless the toggle itself produced it and nothing changed
/// since, in which case the earlier selection comes back.
pub fn toggle_select_all(
    selected: &[String],
    options: &[SelectOption],
    memory: Option<&SelectAllMemory>,
) -> ToggleOutcome {
    if is_all_selected(selected, options) {
        let values = match memory {
            Some(mem) if mem.after == selected => mem.before.clone(),
            _ => Vec::new(),
        };
        return ToggleOutcome {
            values,
            memory: None,
        };
    }

    let values: Vec<String> = options.iter().map(|opt| opt.value.clone()).collect();
    ToggleOutcome {
        memory: Some(SelectAllMemory {
            before: selected.to_vec(),
            after: values.clone(),
        }),
        values,
    }
}

fn option_label<'a>(options: &'a [SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|opt| opt.value == value)
        .map(|opt| opt.label.as_str())
        .unwrap_or(value)
}

/// Temp-memory slot for a field's select-all memory within one form session.
fn memory_id(base: egui::Id, name: &str, generation: u64) -> egui::Id {
    base.with(("dialog-form-select-all", name, generation))
}

pub fn show(
    ui: &mut egui::Ui,
    binding: &mut FieldBinding<'_>,
    config: &FieldConfig,
    generation: u64,
) {
    let options = config.option_list();
    if options.is_empty() {
        placeholder_note(ui, NO_OPTIONS_TEXT);
        return;
    }

    let memory_id = memory_id(ui.id(), binding.name(), generation);
    let memory: Option<SelectAllMemory> = ui.data(|d| d.get_temp(memory_id));
    let selected = selected_values(binding.value());
    let mut next: Option<Vec<String>> = None;
    let mut next_memory: Option<SelectAllMemory> = None;

    ui.add_enabled_ui(!config.is_disabled(), |ui| {
        ui.horizontal_wrapped(|ui| {
            if selected.is_empty() {
                let hint = config.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER);
                placeholder_note(ui, hint);
            }
            for value in &selected {
                let label = option_label(options, value);
                let chip = format!("{label} {}", egui_phosphor::regular::X);
                if ui.small_button(chip).on_hover_text("Remove").clicked() {
                    next = Some(remove_value(&selected, value));
                }
            }
        });

        let toggle_text = if is_all_selected(&selected, options) {
            DESELECT_ALL_TEXT
        } else {
            SELECT_ALL_TEXT
        };
        if ui.small_button(toggle_text).clicked() {
            let outcome = toggle_select_all(&selected, options, memory.as_ref());
            next_memory = outcome.memory;
            next = Some(outcome.values);
        }

        egui::ScrollArea::vertical()
            .id_salt(("dialog-form-multiselect", binding.name()))
            .max_height(LIST_MAX_HEIGHT)
            .show(ui, |ui| {
                for opt in options {
                    let mut on = selected.contains(&opt.value);
                    if ui.checkbox(&mut on, opt.label.as_str()).changed() {
                        next = Some(toggle_option(&selected, &opt.value));
                    }
                }
            });
    });

    if let Some(values) = next {
        ui.data_mut(|d| match next_memory {
            Some(mem) => {
                d.insert_temp(memory_id, mem);
            }
            None => {
                d.remove::<SelectAllMemory>(memory_id);
            }
        });
        binding.on_change(FieldValue::from_strings(values));
        binding.on_blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::run_headless;

    fn abc() -> Vec<SelectOption> {
        ["a", "b", "c"]
            .into_iter()
            .map(|v| SelectOption::new(v, v.to_uppercase()))
            .collect()
    }

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn select_all_twice_restores_prior_selection() {
        let options = abc();
        let start = list(&["a", "b"]);

        let first = toggle_select_all(&start, &options, None);
        assert_eq!(first.values, list(&["a", "b", "c"]));

        let second = toggle_select_all(&first.values, &options, first.memory.as_ref());
        assert_eq!(second.values, start);
        assert!(second.memory.is_none());
    }

    #[test]
    fn full_selection_from_individual_toggles_clears() {
        let options = abc();
        let mut selected = Vec::new();
        for v in ["c", "a", "b"] {
            selected = toggle_option(&selected, v);
        }
        assert!(is_all_selected(&selected, &options));

        let outcome = toggle_select_all(&selected, &options, None);
        assert!(outcome.values.is_empty());
    }

    #[test]
    fn stale_memory_is_ignored() {
        let options = abc();
        let memory = SelectAllMemory {
            before: list(&["a"]),
            after: list(&["a", "b", "c"]),
        };
        let reordered = list(&["c", "b", "a"]);
        let outcome = toggle_select_all(&reordered, &options, Some(&memory));
        assert!(outcome.values.is_empty());
    }

    #[test]
    fn memory_does_not_survive_a_form_reset() {
        let options = abc();
        let memory = SelectAllMemory {
            before: list(&["a"]),
            after: list(&["a", "b", "c"]),
        };

        run_headless(|ui| {
            let old_slot = memory_id(ui.id(), "skills", 0);
            ui.data_mut(|d| d.insert_temp(old_slot, memory.clone()));

            let same_session: Option<SelectAllMemory> = ui.data(|d| d.get_temp(old_slot));
            assert_eq!(same_session.as_ref(), Some(&memory));

            // Next session opens with the old `after` as its value.
            let next_slot = memory_id(ui.id(), "skills", 1);
            let carried: Option<SelectAllMemory> = ui.data(|d| d.get_temp(next_slot));
            assert!(carried.is_none());

            let outcome = toggle_select_all(&memory.after, &options, carried.as_ref());
            assert!(outcome.values.is_empty());
            assert!(outcome.memory.is_none());
        });
    }

    #[test]
    fn toggle_and_remove_keep_order() {
        let selected = list(&["b", "a"]);
        assert_eq!(toggle_option(&selected, "c"), list(&["b", "a", "c"]));
        assert_eq!(toggle_option(&selected, "b"), list(&["a"]));
        assert_eq!(remove_value(&selected, "a"), list(&["b"]));
        assert_eq!(remove_value(&selected, "z"), selected);
    }

    #[test]
    fn reading_dedupes_malformed_lists() {
        let value = FieldValue::from_strings(["a", "a", "b"]);
        assert_eq!(selected_values(&value), list(&["a", "b"]));
        assert!(selected_values(&FieldValue::Undefined).is_empty());
        assert!(!is_all_selected(&[], &[]));
    }
}
