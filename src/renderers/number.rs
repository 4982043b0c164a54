// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Numeric input with float parsing.

use eframe::egui;

use crate::models::field_config::FieldConfig;
use crate::models::value::FieldValue;
use crate::renderers::{FieldBinding, ValueSetter, with_accessory};

/// Coerce raw input text.
///
/// Empty input is undefined (never `NaN`), finite floats become numbers, and
/// anything else is kept verbatim so a half-typed value such as `-` survives
/// until the schema rejects it on submit.
pub fn parse_number(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValue::Undefined;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => FieldValue::Number(n),
        _ => FieldValue::Text(raw.to_string()),
    }
}

pub fn show(
    ui: &mut egui::Ui,
    binding: &mut FieldBinding<'_>,
    config: &FieldConfig,
    setter: &mut ValueSetter,
) {
    // Keep the typed text while it still parses to the bound value so that
    // inputs like "1." are not normalised away mid-edit.
    let buffer_id = ui.id().with(("dialog-form-number", binding.name()));
    let current = binding.value().clone();
    let mut text = ui
        .data(|d| d.get_temp::<String>(buffer_id))
        .filter(|buf| parse_number(buf) == current)
        .unwrap_or_else(|| current.display_string());
    let hint = config.placeholder.clone().unwrap_or_default();

    with_accessory(ui, config, setter, |ui, width| {
        let resp = ui.add_enabled(
            !config.is_disabled(),
            egui::TextEdit::singleline(&mut text)
                .hint_text(hint)
                .desired_width(width),
        );
        if resp.changed() {
            ui.data_mut(|d| d.insert_temp(buffer_id, text.clone()));
            binding.on_change(parse_number(&text));
        }
        if resp.lost_focus() {
            binding.on_blur();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_floats_and_empty_input() {
        assert_eq!(parse_number("42"), FieldValue::Number(42.0));
        assert_eq!(parse_number(" 3.5 "), FieldValue::Number(3.5));
        assert_eq!(parse_number("-1e3"), FieldValue::Number(-1000.0));
        assert_eq!(parse_number(""), FieldValue::Undefined);
        assert_eq!(parse_number("   "), FieldValue::Undefined);
    }

    #[test]
    fn keeps_unparseable_text_instead_of_nan() {
        assert_eq!(parse_number("-"), FieldValue::Text("-".into()));
        assert_eq!(parse_number("NaN"), FieldValue::Text("NaN".into()));
        assert_eq!(parse_number("inf"), FieldValue::Text("inf".into()));
    }
}
