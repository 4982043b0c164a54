// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Caller-supplied controls.

use eframe::egui;

use crate::form::FormState;
use crate::models::field_config::FieldConfig;
use crate::renderers::FieldBinding;

/// Hand the binding to the configured render function; without one nothing is drawn.
pub fn show(
    ui: &mut egui::Ui,
    binding: &mut FieldBinding<'_>,
    config: &FieldConfig,
    form: &FormState,
) {
    if let Some(render) = &config.render {
        render(ui, binding, config, form);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::models::field_config::FieldKind;
    use crate::models::schema::Schema;
    use crate::models::value::FieldValue;
    use crate::renderers::run_headless;

    #[test]
    fn delegates_to_render_function() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let config =
            FieldConfig::new(FieldKind::Custom).render(move |_ui, binding, _config, _form| {
                seen.set(seen.get() + 1);
                binding.on_change(FieldValue::from("picked"));
            });
        let form = FormState::new(Rc::new(Schema::new()));
        let value = FieldValue::Undefined;

        let mut changed = None;
        run_headless(|ui| {
            let mut binding = FieldBinding::new("color", &value);
            show(ui, &mut binding, &config, &form);
            changed = binding.into_parts().0;
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(changed, Some(FieldValue::from("picked")));
    }
}
