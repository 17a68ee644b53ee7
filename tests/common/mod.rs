// tests/common/mod.rs

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use haptic_survey_lib::catalog::ALL_DIMENSIONS;
use haptic_survey_lib::context::AppCtx;
use haptic_survey_lib::error::{AppError, AppResult};
use haptic_survey_lib::i18n::builtin_english;
use haptic_survey_lib::survey::{
    apply_event, start_session_with_id, BackgroundField, FormPoster, SubmissionClient,
    SurveyState, UiEvent, FINAL_STAGE,
};
use haptic_survey_lib::view::render;

pub const EN_JSON: &str = include_str!("../../i18n/en.json");
pub const IT_JSON: &str = include_str!("../../i18n/it.json");

pub const TEST_URL: &str = "http://collector.test/exec";

/// One captured form post.
#[derive(Clone, Debug)]
pub struct PostedForm {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl PostedForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport double: records every call and answers with a scripted result.
pub struct RecordingPoster {
    calls: Mutex<Vec<PostedForm>>,
    replies: Mutex<Vec<AppResult<u16>>>,
}

impl RecordingPoster {
    /// Replies are used in order; once exhausted every call gets 200.
    pub fn with_replies(replies: Vec<AppResult<u16>>) -> Arc<Self> {
        let mut replies = replies;
        replies.reverse();
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(replies),
        })
    }

    pub fn ok() -> Arc<Self> {
        Self::with_replies(Vec::new())
    }

    pub fn calls(&self) -> Vec<PostedForm> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl FormPoster for RecordingPoster {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> AppResult<u16> {
        self.calls.lock().expect("calls lock").push(PostedForm {
            url: url.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.replies
            .lock()
            .expect("replies lock")
            .pop()
            .unwrap_or(Ok(200))
    }
}

pub fn client_with(poster: Arc<RecordingPoster>) -> SubmissionClient {
    SubmissionClient::new(Some(TEST_URL.to_string()), poster)
}

pub fn transport_error() -> AppResult<u16> {
    Err(AppError::SubmitTransport("connection refused".to_string()))
}

/// i18n dir holding the bundled tables.
pub fn i18n_dir_with_bundled() -> tempfile::TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    write_table(td.path(), "en", EN_JSON);
    write_table(td.path(), "it", IT_JSON);
    td
}

pub fn write_table(dir: &Path, lang: &str, body: &str) {
    std::fs::write(dir.join(format!("{lang}.json")), body).expect("write translation table");
}

pub fn ctx_for(dir: &Path) -> AppCtx {
    AppCtx::new(dir.to_path_buf(), Some(TEST_URL.to_string()))
}

pub fn fresh_session() -> SurveyState {
    start_session_with_id("integration-session".to_string(), "en", false)
}

pub fn send(state: &mut SurveyState, ev: UiEvent) {
    apply_event(state, ev).expect("event accepted");
}

pub fn next(state: &mut SurveyState) {
    let ticket = apply_event(state, UiEvent::Next).expect("advance allowed");
    assert!(ticket.is_none(), "unexpected finish");
}

pub fn accept_consent(state: &mut SurveyState) {
    send(state, UiEvent::SetAgeConfirmed(true));
    send(state, UiEvent::SetConsentGiven(true));
}

pub fn fill_background(state: &mut SurveyState) {
    for (field, value) in [
        (BackgroundField::Age, "34"),
        (BackgroundField::Gender, "female"),
        (BackgroundField::Country, "Italy"),
        (BackgroundField::Education, "master"),
        (BackgroundField::MaterialsFamiliarity, "medium"),
        (BackgroundField::RelatedBackground, "work"),
    ] {
        send(state, UiEvent::SetBackground(field, value.to_string()));
    }
}

/// Draws the current stage the way the window does every frame.
pub fn show_stage(state: &mut SurveyState) {
    render(state, &builtin_english());
}

/// Shows the current case stage, then touches every slider on it.
pub fn rate_current_case(state: &mut SurveyState, value: f64) {
    show_stage(state);
    let key = state.order[state.case_index].key.to_string();
    for d in ALL_DIMENSIONS {
        send(
            state,
            UiEvent::SetSlider {
                object_key: key.clone(),
                dimension: d,
                value,
            },
        );
    }
}

/// Welcome through the last case with valid answers; ends on the final stage.
pub fn walk_to_final(state: &mut SurveyState) {
    accept_consent(state);
    next(state);
    fill_background(state);
    next(state);
    next(state);

    for i in 0..10 {
        rate_current_case(state, (i as f64) / 10.0);
        next(state);
    }

    assert_eq!(state.stage_index, FINAL_STAGE);
}
