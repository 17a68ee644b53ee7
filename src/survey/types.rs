// src/survey/types.rs

use crate::catalog::{Dimension, SurveyObject};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// welcome, background, definitions, ten cases, final.
pub const TOTAL_STAGES: usize = 14;
pub const WELCOME_STAGE: usize = 0;
pub const BACKGROUND_STAGE: usize = 1;
pub const DEFINITIONS_STAGE: usize = 2;
pub const FIRST_CASE_STAGE: usize = 3;
pub const LAST_CASE_STAGE: usize = 12;
pub const FINAL_STAGE: usize = TOTAL_STAGES - 1;
pub const CASE_COUNT: usize = LAST_CASE_STAGE - FIRST_CASE_STAGE + 1;

pub const SLIDER_DEFAULT: f64 = 0.5;
pub const MIN_PARTICIPANT_AGE: f64 = 18.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Welcome,
    Background,
    Definitions,
    /// Position in the session's presentation order, not the object key.
    Case(usize),
    Final,
}

impl Stage {
    pub fn from_index(stage_index: usize) -> Option<Stage> {
        match stage_index {
            WELCOME_STAGE => Some(Stage::Welcome),
            BACKGROUND_STAGE => Some(Stage::Background),
            DEFINITIONS_STAGE => Some(Stage::Definitions),
            FIRST_CASE_STAGE..=LAST_CASE_STAGE => Some(Stage::Case(stage_index - FIRST_CASE_STAGE)),
            FINAL_STAGE => Some(Stage::Final),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Welcome => "welcome",
            Stage::Background => "background",
            Stage::Definitions => "definitions",
            Stage::Case(_) => "case",
            Stage::Final => "final",
        }
    }
}

/// Wire format of the submitted answers.
///
/// {
///   "meta": { "sessionId", "startedAt", "language" },
///   "consent": { "age18", "consent" },
///   "background": { "age", "gender", "country", "education",
///                   "materialsFamiliarity", "relatedBackground" },
///   "cases": { "<objKey>": { "sliders": { "<dimension>": { "value", "touched" } } } },
///   "completedAt": null | "<rfc3339>"
/// }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDocument {
    pub meta: Meta,
    pub consent: Consent,
    pub background: Background,
    pub cases: BTreeMap<String, CaseRecord>,
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub session_id: String,
    pub started_at: String,
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Consent {
    #[serde(rename = "age18")]
    pub age_confirmed: bool,
    #[serde(rename = "consent")]
    pub consent_given: bool,
}

/// Raw form values. Select fields hold option keys, empty = unselected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub age: String,
    pub gender: String,
    pub country: String,
    pub education: String,
    pub materials_familiarity: String,
    pub related_background: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundField {
    Age,
    Gender,
    Country,
    Education,
    MaterialsFamiliarity,
    RelatedBackground,
}

pub const BACKGROUND_FIELDS: [BackgroundField; 6] = [
    BackgroundField::Age,
    BackgroundField::Gender,
    BackgroundField::Country,
    BackgroundField::Education,
    BackgroundField::MaterialsFamiliarity,
    BackgroundField::RelatedBackground,
];

impl Background {
    pub fn get(&self, field: BackgroundField) -> &str {
        match field {
            BackgroundField::Age => &self.age,
            BackgroundField::Gender => &self.gender,
            BackgroundField::Country => &self.country,
            BackgroundField::Education => &self.education,
            BackgroundField::MaterialsFamiliarity => &self.materials_familiarity,
            BackgroundField::RelatedBackground => &self.related_background,
        }
    }

    pub fn get_mut(&mut self, field: BackgroundField) -> &mut String {
        match field {
            BackgroundField::Age => &mut self.age,
            BackgroundField::Gender => &mut self.gender,
            BackgroundField::Country => &mut self.country,
            BackgroundField::Education => &mut self.education,
            BackgroundField::MaterialsFamiliarity => &mut self.materials_familiarity,
            BackgroundField::RelatedBackground => &mut self.related_background,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub sliders: BTreeMap<Dimension, SliderState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderState {
    pub value: f64,
    /// Monotonic: never reset once set.
    pub touched: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            value: SLIDER_DEFAULT,
            touched: false,
        }
    }
}

/// Whole session: answers, wizard position and submission flags.
#[derive(Debug, Clone)]
pub struct SurveyState {
    pub document: ResponseDocument,

    /// Case stage n shows `order[n]`.
    pub order: Vec<&'static SurveyObject>,

    pub stage_index: usize,
    pub case_index: usize,

    pub is_submitting: bool,
    pub has_submitted: bool,

    /// Raised by a blocked advance, cleared by the next successful move.
    pub required_hint: bool,

    pub skip_validation: bool,
}
