// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Tri-state aware checkbox.

use eframe::egui;

use crate::models::field_config::FieldConfig;
use crate::models::value::FieldValue;
use crate::renderers::FieldBinding;

/// `(checked, indeterminate)` for the widget.
///
/// An indeterminate value draws the mixed marker but counts as unchecked; the
/// stored value stays `Indeterminate` until the user clicks.
pub fn checked_state(value: &FieldValue) -> (bool, bool) {
    match value {
        FieldValue::Bool(b) => (*b, false),
        FieldValue::Indeterminate => (false, true),
        FieldValue::Text(s) if s == "true" => (true, false),
        _ => (false, false),
    }
}

pub fn show(ui: &mut egui::Ui, binding: &mut FieldBinding<'_>, config: &FieldConfig) {
    let (mut checked, indeterminate) = checked_state(binding.value());
    // The form label sits above the control, so the box carries no text.
    let resp = ui.add_enabled(
        !config.is_disabled(),
        egui::Checkbox::without_text(&mut checked).indeterminate(indeterminate),
    );
    if resp.changed() {
        binding.on_change(FieldValue::Bool(checked));
        binding.on_blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indeterminate_renders_unchecked() {
        assert_eq!(checked_state(&FieldValue::Indeterminate), (false, true));
        assert_eq!(checked_state(&FieldValue::Bool(true)), (true, false));
        assert_eq!(checked_state(&FieldValue::Bool(false)), (false, false));
        assert_eq!(checked_state(&FieldValue::Undefined), (false, false));
    }
}
