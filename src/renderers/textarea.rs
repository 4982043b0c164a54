// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Fixed-height multi-line text.

use eframe::egui;

use crate::models::field_config::FieldConfig;
use crate::models::value::FieldValue;
use crate::renderers::FieldBinding;

const TEXTAREA_HEIGHT: f32 = 200.0;
const TEXTAREA_MAX_HEIGHT: f32 = 400.0;
const TEXTAREA_ROWS: usize = 8;

pub fn show(ui: &mut egui::Ui, binding: &mut FieldBinding<'_>, config: &FieldConfig) {
    let mut text = binding.value().display_string();
    let height = config
        .height
        .unwrap_or(TEXTAREA_HEIGHT)
        .min(TEXTAREA_MAX_HEIGHT);
    let hint = config.placeholder.clone().unwrap_or_default();

    egui::ScrollArea::vertical()
        .id_salt(("dialog-form-textarea", binding.name()))
        .max_height(height)
        .show(ui, |ui| {
            let resp = ui.add_enabled(
                !config.is_disabled(),
                egui::TextEdit::multiline(&mut text)
                    .hint_text(hint)
                    .desired_rows(TEXTAREA_ROWS)
                    .desired_width(f32::INFINITY)
                    .min_size(egui::vec2(0.0, height)),
            );
            if resp.changed() {
                binding.on_change(FieldValue::Text(text.clone()));
            }
            if resp.lost_focus() {
                binding.on_blur();
            }
        });
}
