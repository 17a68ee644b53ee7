// src/context.rs

use std::path::{Path, PathBuf};

pub const APP_TITLE: &str = "Haptic Experience Study";

pub const ENV_SUBMIT_URL: &str = "HAPTIC_SURVEY_SUBMIT_URL";
pub const ENV_I18N_DIR: &str = "HAPTIC_SURVEY_I18N_DIR";
pub const ENV_LANG: &str = "HAPTIC_SURVEY_LANG";
pub const ENV_SKIP_VALIDATION: &str = "HAPTIC_SURVEY_SKIP_VALIDATION";
pub const ENV_DEBUG: &str = "HAPTIC_SURVEY_DEBUG";
pub const ENV_ASSETS_DIR: &str = "HAPTIC_SURVEY_ASSETS_DIR";

/// Google Apps Script web app (`/exec`) collecting the study responses.
pub const DEFAULT_SUBMIT_URL: &str = "https://script.google.com/macros/s/AKfycbwQKUJRGxe_nGZCXp99DDSFEJWnVCPHfX9wReThoEBNCNyz6oZ7rhsFDvBSvgrG_C8H/exec";

pub const DEFAULT_I18N_DIR: &str = "i18n";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_ASSETS_DIR: &str = ".";

#[derive(Debug, Clone)]
pub struct AppCtx {
    /// `None` means submissions fail fast without touching the network.
    pub submit_url: Option<String>,
    /// <i18n_dir>/<lang>.json
    pub i18n_dir: PathBuf,
    /// Root that catalog image paths are relative to.
    pub assets_dir: PathBuf,
    pub initial_language: String,
    /// Test/debug escape hatch: every stage gate passes.
    pub skip_validation: bool,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(i18n_dir: PathBuf, submit_url: Option<String>) -> Self {
        Self {
            submit_url: normalize_url(submit_url),
            i18n_dir,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            initial_language: DEFAULT_LANGUAGE.to_string(),
            skip_validation: false,
            debug_ui: false,
        }
    }

    pub fn from_env() -> Self {
        let submit_url = match std::env::var(ENV_SUBMIT_URL) {
            Ok(v) => Some(v),
            Err(_) => Some(DEFAULT_SUBMIT_URL.to_string()),
        };

        let i18n_dir = std::env::var(ENV_I18N_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_I18N_DIR));

        let assets_dir = std::env::var(ENV_ASSETS_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSETS_DIR));

        let initial_language = std::env::var(ENV_LANG)
            .ok()
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Self {
            submit_url: normalize_url(submit_url),
            i18n_dir,
            assets_dir,
            initial_language,
            skip_validation: env_flag(ENV_SKIP_VALIDATION),
            debug_ui: env_flag(ENV_DEBUG),
        }
    }

    pub fn with_skip_validation(mut self, skip: bool) -> Self {
        self.skip_validation = skip;
        self
    }

    pub fn with_initial_language(mut self, lang: impl Into<String>) -> Self {
        self.initial_language = lang.into();
        self
    }

    pub fn with_assets_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.assets_dir = dir.as_ref().to_path_buf();
        self
    }

    /// `file://` URI of an asset, or `None` when the file is not there.
    pub fn asset_uri(&self, relative: &str) -> Option<String> {
        let path = std::fs::canonicalize(self.assets_dir.join(relative)).ok()?;
        if !path.is_file() {
            return None;
        }
        Some(format!("file://{}", path.display()))
    }
}

fn normalize_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
