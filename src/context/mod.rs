// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Provider-scoped defaults shared by every dialog mounted under a provider.
//!
//! A [`FormProvider`] is an explicit context object: the host creates one,
//! hands a reference to each dialog, and drops it when the scope ends. Dialogs
//! without a provider fall back to [`GlobalConfig::builtin`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::field_config::FieldConfig;

pub const DEFAULT_SUBMIT_TEXT: &str = "Submit";
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";
/// Vertical gap between fields, in points.
pub const DEFAULT_FIELD_SPACING: f32 = 16.0;
/// Dialog bounds as fractions of the screen.
pub const DEFAULT_DIALOG_MAX_WIDTH: f32 = 0.6;
pub const DEFAULT_DIALOG_MAX_HEIGHT: f32 = 0.8;
pub const DEFAULT_DIALOG_MIN_WIDTH: f32 = 360.0;

/// When per-field errors are computed before and after the first submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Validate on submit; afterwards revalidate on every change.
    #[default]
    OnSubmit,
    OnBlur,
    OnChange,
    /// First validation on blur, then on every change.
    OnTouched,
    All,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnSubmit => "onSubmit",
            Self::OnBlur => "onBlur",
            Self::OnChange => "onChange",
            Self::OnTouched => "onTouched",
            Self::All => "all",
        }
    }
}

/// Layout tokens for dialogs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub dialog_max_width: Option<f32>,
    pub dialog_max_height: Option<f32>,
    pub dialog_min_width: Option<f32>,
    pub field_spacing: Option<f32>,
}

impl Theme {
    pub fn max_width_fraction(&self) -> f32 {
        self.dialog_max_width
            .filter(|f| *f > 0.0)
            .unwrap_or(DEFAULT_DIALOG_MAX_WIDTH)
    }

    pub fn max_height_fraction(&self) -> f32 {
        self.dialog_max_height
            .filter(|f| *f > 0.0)
            .unwrap_or(DEFAULT_DIALOG_MAX_HEIGHT)
    }

    pub fn min_width(&self) -> f32 {
        self.dialog_min_width.unwrap_or(DEFAULT_DIALOG_MIN_WIDTH)
    }

    pub fn field_spacing(&self) -> f32 {
        self.field_spacing.unwrap_or(DEFAULT_FIELD_SPACING)
    }
}

/// Defaults applied to every dialog under a provider.
///
/// All keys are optional: the same type is both the stored config and the
/// partial patch passed to [`FormProvider::update`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalConfig {
    pub global_field_configs: Option<BTreeMap<String, FieldConfig>>,
    pub default_submit_text: Option<String>,
    pub default_cancel_text: Option<String>,
    pub default_show_cancel_button: Option<bool>,
    pub validation_mode: Option<ValidationMode>,
    pub theme: Option<Theme>,
}

impl GlobalConfig {
    /// Config used when no provider is in scope.
    pub fn builtin() -> Self {
        Self {
            global_field_configs: None,
            default_submit_text: Some(DEFAULT_SUBMIT_TEXT.to_string()),
            default_cancel_text: Some(DEFAULT_CANCEL_TEXT.to_string()),
            default_show_cancel_button: Some(false),
            validation_mode: Some(ValidationMode::OnSubmit),
            theme: Some(Theme {
                field_spacing: Some(DEFAULT_FIELD_SPACING),
                ..Default::default()
            }),
        }
    }

    /// Parse a JSON config file body.
    ///
    /// Keys follow the camelCase option names, e.g.
    /// `{"defaultSubmitText": "Save", "globalFieldConfigs": {"email": {"label": "E-mail"}}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse dialog form config JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dialog form config {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// Replace every key set in `patch`; keys left unset keep their value.
    pub fn merge_from(&mut self, patch: GlobalConfig) {
        let GlobalConfig {
            global_field_configs,
            default_submit_text,
            default_cancel_text,
            default_show_cancel_button,
            validation_mode,
            theme,
        } = patch;

        if global_field_configs.is_some() {
            self.global_field_configs = global_field_configs;
        }
        if default_submit_text.is_some() {
            self.default_submit_text = default_submit_text;
        }
        if default_cancel_text.is_some() {
            self.default_cancel_text = default_cancel_text;
        }
        if default_show_cancel_button.is_some() {
            self.default_show_cancel_button = default_show_cancel_button;
        }
        if validation_mode.is_some() {
            self.validation_mode = validation_mode;
        }
        if theme.is_some() {
            self.theme = theme;
        }
    }

    pub fn field_config(&self, key: &str) -> Option<&FieldConfig> {
        self.global_field_configs.as_ref()?.get(key)
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode.unwrap_or_default()
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

struct ProviderState {
    config: GlobalConfig,
    revision: u64,
}

/// Shared store for [`GlobalConfig`].
///
/// Clones share the same store, so any dialog holding a clone can read or
/// update it. Updates are whole-store partial merges; the last write wins.
#[derive(Clone)]
pub struct FormProvider {
    inner: Rc<RefCell<ProviderState>>,
}

impl Default for FormProvider {
    fn default() -> Self {
        Self::new(GlobalConfig::default())
    }
}

impl FormProvider {
    pub fn new(config: GlobalConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ProviderState {
                config,
                revision: 0,
            })),
        }
    }

    /// Snapshot of the current config.
    pub fn read(&self) -> GlobalConfig {
        self.inner.borrow().config.clone()
    }

    /// Merge `patch` into the stored config and bump the revision.
    pub fn update(&self, patch: GlobalConfig) {
        let mut state = self.inner.borrow_mut();
        state.config.merge_from(patch);
        state.revision += 1;
        log::debug!("dialog form config updated (revision {})", state.revision);
    }

    /// Increments on every [`update`](Self::update); dependents compare it to
    /// notice changes.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }
}

/// Effective config: the provider's, or the built-in defaults without one.
pub fn resolve_config(provider: Option<&FormProvider>) -> GlobalConfig {
    provider
        .map(FormProvider::read)
        .unwrap_or_else(GlobalConfig::builtin)
}

/// Effective field config for `key`: input kind, then the provider's global
/// entry, then `local`.
pub fn resolve_field_config(
    provider: Option<&FormProvider>,
    key: &str,
    local: Option<&FieldConfig>,
) -> FieldConfig {
    let global = resolve_config(provider);
    FieldConfig::resolve(global.field_config(key), local)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::field_config::FieldKind;

    #[test]
    fn reading_without_provider_is_stable() {
        let first = resolve_config(None);
        let second = resolve_config(None);
        assert_eq!(first, second);
        assert_eq!(first.default_submit_text.as_deref(), Some(DEFAULT_SUBMIT_TEXT));
        assert_eq!(first.default_show_cancel_button, Some(false));
        assert_eq!(first.validation_mode(), ValidationMode::OnSubmit);
        assert_eq!(first.theme().field_spacing(), DEFAULT_FIELD_SPACING);
    }

    #[test]
    fn update_replaces_only_supplied_keys() {
        let provider = FormProvider::new(GlobalConfig {
            default_submit_text: Some("Save".into()),
            validation_mode: Some(ValidationMode::OnChange),
            theme: Some(Theme {
                field_spacing: Some(8.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        provider.update(GlobalConfig {
            default_cancel_text: Some("Dismiss".into()),
            ..Default::default()
        });

        let config = provider.read();
        assert_eq!(config.default_cancel_text.as_deref(), Some("Dismiss"));
        assert_eq!(config.default_submit_text.as_deref(), Some("Save"));
        assert_eq!(config.validation_mode(), ValidationMode::OnChange);
        assert_eq!(config.theme().field_spacing(), 8.0);
        assert_eq!(provider.revision(), 1);
    }

    #[test]
    fn provider_clones_share_one_store() {
        let provider = FormProvider::default();
        let other = provider.clone();

        other.update(GlobalConfig {
            default_show_cancel_button: Some(true),
            ..Default::default()
        });

        assert_eq!(provider.read().default_show_cancel_button, Some(true));
    }

    #[test]
    fn field_config_resolution_uses_provider_entries() {
        let mut globals = BTreeMap::new();
        globals.insert(
            "email".to_string(),
            FieldConfig::default().label("E-mail").placeholder("name@example.com"),
        );
        let provider = FormProvider::new(GlobalConfig {
            global_field_configs: Some(globals),
            ..Default::default()
        });
        let local = FieldConfig::default().label("Work e-mail");

        let resolved = resolve_field_config(Some(&provider), "email", Some(&local));

        assert_eq!(resolved.kind(), FieldKind::Input);
        assert_eq!(resolved.label.as_deref(), Some("Work e-mail"));
        assert_eq!(resolved.placeholder.as_deref(), Some("name@example.com"));
        assert!(resolve_field_config(None, "email", None).label.is_none());
    }

    #[test]
    fn loads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"defaultSubmitText":"Save","validationMode":"onBlur","theme":{{"dialogMaxWidth":0.5}},"globalFieldConfigs":{{"bio":{{"type":"textarea"}}}}}}"#
        )
        .unwrap();

        let config = GlobalConfig::load(file.path()).unwrap();

        assert_eq!(config.default_submit_text.as_deref(), Some("Save"));
        assert_eq!(config.validation_mode(), ValidationMode::OnBlur);
        assert_eq!(config.theme().max_width_fraction(), 0.5);
        assert_eq!(
            config.field_config("bio").map(FieldConfig::kind),
            Some(FieldKind::Textarea)
        );
        assert!(config.default_cancel_text.is_none());
    }

    #[test]
    fn malformed_config_reports_context() {
        let err = GlobalConfig::from_json_str("{not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse dialog form config JSON"));
    }
}
