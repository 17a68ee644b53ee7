// src/survey/ops.rs

use crate::catalog::{presentation_order, Dimension};
use crate::error::{AppError, AppResult};
use chrono::{SecondsFormat, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use std::collections::BTreeMap;

use super::case_state::set_slider_value;
use super::nav::{advance, retreat, Advance};
use super::submit::SubmissionTicket;
use super::types::{
    Background, BackgroundField, Consent, Meta, ResponseDocument, SurveyState, WELCOME_STAGE,
};

/// Random RFC 4122 v4 identifier, e.g. `1b4e28ba-2fa1-41d2-883f-0016d3cca427`.
pub fn new_session_id() -> String {
    let mut b = [0u8; 16];
    OsRng.fill_bytes(&mut b);
    b[6] = (b[6] & 0x0f) | 0x40;
    b[8] = (b[8] & 0x3f) | 0x80;

    format!(
        "{}-{}-{}-{}-{}",
        hex::encode(&b[0..4]),
        hex::encode(&b[4..6]),
        hex::encode(&b[6..8]),
        hex::encode(&b[8..10]),
        hex::encode(&b[10..16])
    )
}

/// UTC, millisecond precision, `Z` suffix.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn start_session(language: &str, skip_validation: bool) -> SurveyState {
    start_session_with_id(new_session_id(), language, skip_validation)
}

pub fn start_session_with_id(
    session_id: String,
    language: &str,
    skip_validation: bool,
) -> SurveyState {
    let order = presentation_order(&session_id);

    tracing::info!(
        session_id = %session_id,
        language,
        skip_validation,
        "survey session started"
    );
    if skip_validation {
        tracing::warn!("stage validation is bypassed for this session");
    }

    SurveyState {
        document: ResponseDocument {
            meta: Meta {
                session_id,
                started_at: now_timestamp(),
                language: language.to_string(),
            },
            consent: Consent::default(),
            background: Background::default(),
            cases: BTreeMap::new(),
            completed_at: None,
        },
        order,
        stage_index: WELCOME_STAGE,
        case_index: 0,
        is_submitting: false,
        has_submitted: false,
        required_hint: false,
        skip_validation,
    }
}

pub(crate) fn ensure_open(state: &SurveyState) -> AppResult<()> {
    if state.has_submitted {
        return Err(AppError::SurveyClosed);
    }
    Ok(())
}

pub fn set_age_confirmed(state: &mut SurveyState, v: bool) -> AppResult<()> {
    ensure_open(state)?;
    state.document.consent.age_confirmed = v;
    Ok(())
}

pub fn set_consent_given(state: &mut SurveyState, v: bool) -> AppResult<()> {
    ensure_open(state)?;
    state.document.consent.consent_given = v;
    Ok(())
}

pub fn set_background_field(
    state: &mut SurveyState,
    field: BackgroundField,
    value: impl Into<String>,
) -> AppResult<()> {
    ensure_open(state)?;
    *state.document.background.get_mut(field) = value.into();
    Ok(())
}

/// Records the display language in the answers. Frozen documents keep the
/// language they were submitted with.
pub fn set_language(state: &mut SurveyState, language: &str) {
    if state.has_submitted {
        tracing::debug!(language, "language switch after submission; document unchanged");
        return;
    }
    state.document.meta.language = language.to_string();
}

/// Input captured by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SetAgeConfirmed(bool),
    SetConsentGiven(bool),
    SetBackground(BackgroundField, String),
    SetSlider {
        object_key: String,
        dimension: Dimension,
        value: f64,
    },
    Next,
    Back,
}

/// Routes one input event. `Ok(Some(ticket))` means the finish sequence
/// started and the ticket must be sent, then handed to `complete_submission`.
pub fn apply_event(
    state: &mut SurveyState,
    event: UiEvent,
) -> AppResult<Option<SubmissionTicket>> {
    match event {
        UiEvent::SetAgeConfirmed(v) => set_age_confirmed(state, v).map(|_| None),
        UiEvent::SetConsentGiven(v) => set_consent_given(state, v).map(|_| None),
        UiEvent::SetBackground(field, value) => {
            set_background_field(state, field, value).map(|_| None)
        }
        UiEvent::SetSlider {
            object_key,
            dimension,
            value,
        } => set_slider_value(state, &object_key, dimension, value).map(|_| None),
        UiEvent::Next => match advance(state)? {
            Advance::Moved => Ok(None),
            Advance::Finish(ticket) => Ok(Some(ticket)),
        },
        UiEvent::Back => {
            retreat(state);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_looks_like_uuid_v4() {
        let id = new_session_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(
            parts.iter().map(|p| p.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(parts[2].starts_with('4'));
        assert_ne!(id, new_session_id());
    }

    #[test]
    fn timestamp_is_utc_millis() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2026-01-01T00:00:00.000Z".len());
    }

    #[test]
    fn fresh_session_starts_empty_at_welcome() {
        let s = start_session_with_id("sid".to_string(), "en", false);
        assert_eq!(s.stage_index, 0);
        assert_eq!(s.case_index, 0);
        assert!(s.document.cases.is_empty());
        assert!(s.document.completed_at.is_none());
        assert_eq!(s.document.meta.session_id, "sid");
        assert_eq!(s.order.len(), 10);
    }

    #[test]
    fn setters_are_refused_after_submission() {
        let mut s = start_session_with_id("sid".to_string(), "en", false);
        s.has_submitted = true;
        let err = set_background_field(&mut s, BackgroundField::Country, "Italy").unwrap_err();
        assert!(matches!(err, AppError::SurveyClosed));
        assert_eq!(s.document.background.country, "");
    }

    #[test]
    fn language_is_not_rewritten_after_submission() {
        let mut s = start_session_with_id("sid".to_string(), "en", false);
        set_language(&mut s, "it");
        assert_eq!(s.document.meta.language, "it");

        s.has_submitted = true;
        set_language(&mut s, "en");
        assert_eq!(s.document.meta.language, "it");
    }

    #[test]
    fn apply_event_routes_consent_and_background() {
        let mut s = start_session_with_id("sid".to_string(), "en", false);
        apply_event(&mut s, UiEvent::SetAgeConfirmed(true)).unwrap();
        apply_event(&mut s, UiEvent::SetConsentGiven(true)).unwrap();
        apply_event(
            &mut s,
            UiEvent::SetBackground(BackgroundField::Gender, "female".to_string()),
        )
        .unwrap();

        assert!(s.document.consent.age_confirmed);
        assert!(s.document.consent.consent_given);
        assert_eq!(s.document.background.gender, "female");
    }
}
