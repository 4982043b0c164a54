// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Demo entry point wiring eframe, the dialog provider and the demo app.

mod model;
mod view;

use std::collections::BTreeMap;
use std::path::Path;

use dialog_form::{FieldConfig, FormProvider, GlobalConfig};
use eframe::egui;
use egui_phosphor::Variant;

use self::view::DemoApp;

/// Provider defaults: an optional JSON file, plus the demo's own field hints.
fn load_provider(config_path: Option<&Path>) -> FormProvider {
    let mut config = match config_path {
        Some(path) => GlobalConfig::load(path).unwrap_or_else(|err| {
            log::warn!("Ignoring dialog config: {err:#}");
            GlobalConfig::default()
        }),
        None => GlobalConfig::default(),
    };

    let fields = config.global_field_configs.get_or_insert_with(BTreeMap::new);
    fields
        .entry("email".to_string())
        .or_insert_with(|| FieldConfig::default().label("E-mail").placeholder("name@example.com"));

    FormProvider::new(config)
}

/// Bootstrap the demo and run the egui event loop.
///
/// The first command-line argument, if any, names a JSON file with provider
/// defaults such as `{"defaultCancelText": "Dismiss"}`.
pub fn run() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let provider = load_provider(config_path.as_deref());

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dialog form demo",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DemoApp::new(provider)))
        }),
    )
}
