// src/i18n/mod.rs

mod load;
mod resolver;

pub use load::{
    builtin_english, is_supported_language, load_translations, load_translations_from_path,
    parse_translations_str, TranslationLoadError, EDUCATION_OPTIONS, FAMILIARITY_OPTIONS,
    GENDER_OPTION_KEYS, RELATED_OPTIONS, SUPPORTED_LANGUAGES,
};

pub use resolver::Translations;
