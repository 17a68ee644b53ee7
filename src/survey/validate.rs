// src/survey/validate.rs

use super::types::{
    Background, BackgroundField, Consent, Stage, SurveyState, BACKGROUND_FIELDS,
    MIN_PARTICIPANT_AGE,
};

pub fn consent_complete(c: &Consent) -> bool {
    c.age_confirmed && c.consent_given
}

/// Age as typed; numeric, finite, at least 18.
pub fn age_is_adult(age: &str) -> bool {
    let age = age.trim();
    if age.is_empty() {
        return false;
    }
    age.parse::<f64>()
        .map(|n| n.is_finite() && n >= MIN_PARTICIPANT_AGE)
        .unwrap_or(false)
}

pub fn missing_background_fields(b: &Background) -> Vec<BackgroundField> {
    BACKGROUND_FIELDS
        .iter()
        .copied()
        .filter(|f| match f {
            BackgroundField::Age => !age_is_adult(&b.age),
            other => b.get(*other).trim().is_empty(),
        })
        .collect()
}

pub fn background_complete(b: &Background) -> bool {
    missing_background_fields(b).is_empty()
}

/// Every slider of the current object touched. No record yet means not rated.
pub fn current_case_complete(state: &SurveyState) -> bool {
    let Some(obj) = state.order.get(state.case_index) else {
        return false;
    };
    state
        .document
        .cases
        .get(obj.key)
        .map(|c| c.all_touched())
        .unwrap_or(false)
}

/// Gate for leaving the current stage. Pure.
pub fn can_advance(state: &SurveyState) -> bool {
    if state.skip_validation {
        return true;
    }

    match Stage::from_index(state.stage_index) {
        Some(Stage::Welcome) => consent_complete(&state.document.consent),
        Some(Stage::Background) => background_complete(&state.document.background),
        Some(Stage::Definitions) => true,
        Some(Stage::Case(_)) => current_case_complete(state),
        Some(Stage::Final) => true,
        None => false,
    }
}
