// src/i18n/load.rs

use crate::catalog::{ALL_DIMENSIONS, OBJECTS};
use crate::error::AppError;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

use super::resolver::Translations;

/// `(code, display name)` for the language switcher.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("it", "Italiano")];

pub const GENDER_OPTION_KEYS: [&str; 5] = ["female", "male", "nonbinary", "prefer_not", "other"];

pub const EDUCATION_OPTIONS: &str = "background.educationOptions";
pub const FAMILIARITY_OPTIONS: &str = "background.familiarityOptions";
pub const RELATED_OPTIONS: &str = "background.relatedOptions";

const BUILTIN_ENGLISH: &str = include_str!("../../i18n/en.json");

/// Keys every table must define as strings.
const REQUIRED_KEYS: &[&str] = &[
    "common.select",
    "common.close",
    "nav.back",
    "nav.next",
    "nav.finish",
    "nav.sending",
    "validation.required",
    "validation.slidersRequired",
    "welcome.title",
    "welcome.ageCheck",
    "welcome.consentCheck",
    "welcome.start",
    "background.title",
    "background.age",
    "background.gender",
    "background.country",
    "background.educationQ",
    "background.familiarityQ",
    "background.relatedQ",
    "definitions.title",
    "definitions.exampleTitle",
    "case.title",
    "case.physicalTitle",
    "case.emotionalTitle",
    "case.instruction",
    "scale.low",
    "scale.high",
    "final.thanksTitle",
    "final.instructions",
    "final.sentFail",
    "final.submittedTitle",
    "final.submittedText",
];

#[derive(Debug)]
pub enum TranslationLoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for TranslationLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationLoadError::Io(e) => write!(f, "I/O error: {e}"),
            TranslationLoadError::Parse(e) => write!(f, "Translation parse error: {e}"),
            TranslationLoadError::Validation(msg) => {
                write!(f, "Translation validation error: {msg}")
            }
        }
    }
}

impl std::error::Error for TranslationLoadError {}

impl From<std::io::Error> for TranslationLoadError {
    fn from(e: std::io::Error) -> Self {
        TranslationLoadError::Io(e)
    }
}

impl From<serde_json::Error> for TranslationLoadError {
    fn from(e: serde_json::Error) -> Self {
        TranslationLoadError::Parse(e)
    }
}

impl From<TranslationLoadError> for AppError {
    fn from(e: TranslationLoadError) -> Self {
        match e {
            TranslationLoadError::Io(e) => AppError::TranslationIo(e.to_string()),
            TranslationLoadError::Parse(e) => AppError::TranslationParse(e.to_string()),
            TranslationLoadError::Validation(msg) => AppError::TranslationSchema(msg),
        }
    }
}

pub fn is_supported_language(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang)
}

pub fn load_translations_from_path(
    lang: &str,
    path: impl AsRef<Path>,
) -> Result<Translations, TranslationLoadError> {
    let s = fs::read_to_string(path)?;
    parse_translations_str(lang, &s)
}

/// Reads `<dir>/<lang>.json`.
pub fn load_translations(dir: &Path, lang: &str) -> Result<Translations, AppError> {
    if !is_supported_language(lang) {
        return Err(AppError::UnsupportedLanguage(lang.to_string()));
    }

    let path = dir.join(format!("{lang}.json"));
    let tr = load_translations_from_path(lang, &path)?;
    tracing::info!(language = lang, path = %path.display(), "translations loaded");
    Ok(tr)
}

pub fn parse_translations_str(lang: &str, json: &str) -> Result<Translations, TranslationLoadError> {
    let root = match serde_json::from_str::<JsonValue>(json)? {
        JsonValue::Object(m) => m,
        _ => {
            return Err(TranslationLoadError::Validation(
                "top-level value must be an object".to_string(),
            ))
        }
    };

    let tr = Translations::new(lang, root);
    let problems = schema_problems(&tr);
    if !problems.is_empty() {
        return Err(TranslationLoadError::Validation(problems.join(" | ")));
    }

    Ok(tr)
}

/// English table compiled into the binary. Used when nothing else loads.
pub fn builtin_english() -> Translations {
    match parse_translations_str("en", BUILTIN_ENGLISH) {
        Ok(tr) => tr,
        Err(e) => {
            tracing::error!(error = %e, "built-in English table is invalid");
            Translations::empty("en")
        }
    }
}

fn schema_problems(tr: &Translations) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();

    let mut require = |path: String| {
        if !tr.has_string(&path) {
            missing.push(path);
        }
    };

    for key in REQUIRED_KEYS {
        require(key.to_string());
    }
    for d in ALL_DIMENSIONS {
        require(d.label_key());
        require(d.definition_key());
        require(d.example_key());
    }
    for o in OBJECTS.iter() {
        require(o.name_key.to_string());
    }
    for g in GENDER_OPTION_KEYS {
        require(format!("background.genderOptions.{g}"));
    }

    let mut problems = Vec::new();
    if !missing.is_empty() {
        problems.push(format!("missing string keys: {}", missing.join(", ")));
    }

    for table in [EDUCATION_OPTIONS, FAMILIARITY_OPTIONS, RELATED_OPTIONS] {
        match tr.lookup(table) {
            Some(JsonValue::Object(m)) if !m.is_empty() => {
                if m.values().any(|v| !v.is_string()) {
                    problems.push(format!("option table {table} has non-string labels"));
                }
            }
            _ => problems.push(format!("option table {table} missing or empty")),
        }
    }

    problems
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_english_passes_schema() {
        let tr = parse_translations_str("en", BUILTIN_ENGLISH).unwrap();
        assert_eq!(tr.language(), "en");
        assert_eq!(tr.t("nav.next", "?"), "Next");
        assert!(!tr.options(EDUCATION_OPTIONS).is_empty());
    }

    #[test]
    fn bundled_italian_passes_schema() {
        let it = include_str!("../../i18n/it.json");
        let tr = parse_translations_str("it", it).unwrap();
        assert_eq!(tr.language(), "it");
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = parse_translations_str("en", "[1, 2]").unwrap_err();
        assert!(matches!(err, TranslationLoadError::Validation(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_translations_str("en", "{ nav: ").unwrap_err();
        assert!(matches!(err, TranslationLoadError::Parse(_)));
    }

    #[test]
    fn missing_keys_are_listed() {
        let err = parse_translations_str("en", r#"{ "nav": { "next": "Next" } }"#).unwrap_err();
        let TranslationLoadError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("nav.back"));
        assert!(msg.contains("dimensions.roughness.definition"));
        assert!(msg.contains("objects.obj10"));
        assert!(msg.contains(EDUCATION_OPTIONS));
        assert!(!msg.contains("nav.next,"));
    }

    #[test]
    fn unsupported_language_is_rejected_before_io() {
        let err = load_translations(Path::new("/nonexistent"), "xx").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(_)));
    }
}
