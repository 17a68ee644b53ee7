// src/types.rs

use crate::i18n::Translations;
use crate::survey::{SubmissionClient, SurveyState};

/// Everything one running study session owns. Lives on the UI thread.
pub struct AppState {
    pub survey: SurveyState,
    pub translations: Translations,
    pub client: SubmissionClient,
}

impl AppState {
    pub fn language(&self) -> &str {
        self.translations.language()
    }
}
