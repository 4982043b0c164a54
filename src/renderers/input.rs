// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single-line text input.

use eframe::egui;

use crate::models::field_config::FieldConfig;
use crate::models::value::FieldValue;
use crate::renderers::{FieldBinding, ValueSetter, with_accessory};

pub fn show(
    ui: &mut egui::Ui,
    binding: &mut FieldBinding<'_>,
    config: &FieldConfig,
    setter: &mut ValueSetter,
) {
    let mut text = binding.value().display_string();
    let hint = config.placeholder.clone().unwrap_or_default();

    with_accessory(ui, config, setter, |ui, width| {
        let resp = ui.add_enabled(
            !config.is_disabled(),
            egui::TextEdit::singleline(&mut text)
                .hint_text(hint)
                .desired_width(width),
        );
        if resp.changed() {
            binding.on_change(FieldValue::Text(text.clone()));
        }
        if resp.lost_focus() {
            binding.on_blur();
        }
    });
}
