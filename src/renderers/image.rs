// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only image preview.
//!
//! Images go through egui's loader chain, so the host must call
//! `egui_extras::install_image_loaders` once at startup.

use eframe::egui;

use crate::models::field_config::FieldConfig;
use crate::renderers::{FieldBinding, placeholder_note};

pub const DEFAULT_IMAGE_SIZE: f32 = 100.0;

/// Turn a stored value into a loader URI. Plain paths get a `file://` prefix.
pub fn image_uri(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if url::Url::parse(trimmed).is_ok_and(|u| u.scheme().len() > 1) {
        return Some(trimmed.to_string());
    }
    Some(format!("file://{trimmed}"))
}

pub fn preview_size(config: &FieldConfig) -> egui::Vec2 {
    egui::vec2(
        config.width.unwrap_or(DEFAULT_IMAGE_SIZE),
        config.height.unwrap_or(DEFAULT_IMAGE_SIZE),
    )
}

fn warned_id(uri: &str) -> egui::Id {
    egui::Id::new(("dialog-form-image-warned", uri))
}

/// Marks `uri` as reported. True only the first time per context.
fn first_failure(ui: &egui::Ui, uri: &str) -> bool {
    let id = warned_id(uri);
    if ui.data(|d| d.get_temp::<bool>(id)).is_some() {
        return false;
    }
    ui.data_mut(|d| d.insert_temp(id, true));
    true
}

pub fn show(ui: &mut egui::Ui, binding: &mut FieldBinding<'_>, config: &FieldConfig) {
    let size = preview_size(config);
    let alt = config.alt.as_deref().unwrap_or_default();
    let Some(uri) = binding.value().as_str().and_then(image_uri) else {
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
        return;
    };

    let image = egui::Image::new(uri.clone()).fit_to_exact_size(size);
    match image.load_for_size(ui.ctx(), size) {
        Ok(_) => {
            let resp = ui.add(image);
            if !alt.is_empty() {
                resp.on_hover_text(alt);
            }
        }
        Err(err) => {
            if first_failure(ui, &uri) {
                log::warn!("Failed to load image preview for {}: {err}", binding.name());
            }
            ui.allocate_ui(size, |ui| {
                placeholder_note(ui, if alt.is_empty() { "Image unavailable" } else { alt });
            });
        }
    }
}
