// src/error.rs

use std::fmt;

use crate::survey::Stage;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    InvalidState(String),

    // --------------------------------------------------
    // navigation / validation
    // --------------------------------------------------
    ValidationBlocked { stage: Stage },
    SurveyClosed,

    // --------------------------------------------------
    // case records
    // --------------------------------------------------
    UnknownObject(String),
    CaseNotShown(String),
    InvalidSliderValue(f64),

    // --------------------------------------------------
    // translations
    // --------------------------------------------------
    UnsupportedLanguage(String),
    TranslationIo(String),
    TranslationParse(String),
    TranslationSchema(String),

    // --------------------------------------------------
    // submission
    // --------------------------------------------------
    SubmissionInFlight,
    AlreadySubmitted,
    NoSubmitEndpoint,
    PayloadSerialize(String),
    SubmitTransport(String),
    SubmitStatus(u16),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            InvalidState(_) => "Internal survey state error.",

            ValidationBlocked { .. } => {
                kind = UserMsgKind::Warn;
                "Please complete all required fields."
            }
            SurveyClosed => {
                kind = UserMsgKind::Info;
                "Responses were already sent."
            }

            UnknownObject(_) => "Unknown study object.",
            CaseNotShown(_) => "This object is not on screen.",
            InvalidSliderValue(_) => "Invalid slider value.",

            UnsupportedLanguage(_) => "Language not supported.",
            TranslationIo(_) => "Failed to read translation file.",
            TranslationParse(_) => "Translation file is corrupted.",
            TranslationSchema(_) => "Translation file is incomplete.",

            SubmissionInFlight => {
                kind = UserMsgKind::Info;
                "Submission already in progress."
            }
            AlreadySubmitted => {
                kind = UserMsgKind::Info;
                "Responses were already sent."
            }
            NoSubmitEndpoint => "No submission endpoint configured.",
            PayloadSerialize(_) => "Failed to prepare responses.",
            SubmitTransport(_) | SubmitStatus(_) => {
                "Submission failed. Please try again or check your connection."
            }
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            InvalidState(s) => write!(f, "invalid survey state: {s}"),

            ValidationBlocked { stage } => {
                write!(f, "validation blocked at stage {}", stage.label())
            }
            SurveyClosed => write!(f, "survey already submitted"),

            UnknownObject(key) => write!(f, "unknown object key: {key}"),
            CaseNotShown(key) => write!(f, "case for {key} is not the one on screen"),
            InvalidSliderValue(v) => write!(f, "invalid slider value: {v}"),

            UnsupportedLanguage(lang) => write!(f, "unsupported language: {lang}"),
            TranslationIo(s) => write!(f, "translation read failed: {s}"),
            TranslationParse(s) => write!(f, "translation parse failed: {s}"),
            TranslationSchema(s) => write!(f, "translation schema invalid: {s}"),

            SubmissionInFlight => write!(f, "submission already in flight"),
            AlreadySubmitted => write!(f, "responses already submitted"),
            NoSubmitEndpoint => write!(f, "no submit endpoint configured"),
            PayloadSerialize(s) => write!(f, "payload serialize failed: {s}"),
            SubmitTransport(s) => write!(f, "submit transport error: {s}"),
            SubmitStatus(code) => write!(f, "submit failed with http status {code}"),
        }
    }
}

impl std::error::Error for AppError {}
