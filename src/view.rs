// src/view.rs

//! Stage view model. Everything the egui layer draws comes from here, already
//! resolved against the active translation table.

use crate::catalog::{Dimension, ALL_DIMENSIONS, EMOTIONAL_DIMENSIONS, PHYSICAL_DIMENSIONS};
use crate::i18n::{
    Translations, EDUCATION_OPTIONS, FAMILIARITY_OPTIONS, GENDER_OPTION_KEYS, RELATED_OPTIONS,
};
use crate::survey::{
    can_advance, current_object, ensure_case, progress_percent, Background, Stage, SurveyState,
    CASE_COUNT, FINAL_STAGE, SLIDER_DEFAULT, WELCOME_STAGE,
};

/// Shared by the definitions stage and the slider help dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionText {
    pub dimension: Dimension,
    pub label: String,
    pub definition: String,
    pub example_title: String,
    pub example: String,
}

pub fn dimension_text(tr: &Translations, dimension: Dimension) -> DimensionText {
    DimensionText {
        dimension,
        label: tr
            .t(&dimension.label_key(), dimension.key())
            .to_string(),
        definition: tr.t(&dimension.definition_key(), "").to_string(),
        example_title: tr.t("definitions.exampleTitle", "Examples").to_string(),
        example: tr.t(&dimension.example_key(), "").to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageView {
    pub stage_index: usize,
    pub progress_percent: u8,
    pub body: StageBody,
    pub nav: NavBarView,
    /// Shown after a blocked advance.
    pub required_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StageBody {
    Welcome(WelcomeView),
    Background(BackgroundView),
    Definitions(DefinitionsView),
    Case(CaseView),
    Final(FinalView),
    Submitted(SubmittedView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavBarView {
    pub visible: bool,
    pub back_enabled: bool,
    pub next_enabled: bool,
    pub back_label: String,
    pub next_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeView {
    pub title: String,
    pub intro: String,
    pub what: String,
    pub privacy: String,
    pub age_label: String,
    pub consent_label: String,
    pub start_label: String,
    pub age_confirmed: bool,
    pub consent_given: bool,
    pub start_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundView {
    pub title: String,
    pub intro: String,
    pub select_placeholder: String,
    pub age_label: String,
    pub gender_label: String,
    pub country_label: String,
    pub country_placeholder: String,
    pub education_label: String,
    pub familiarity_label: String,
    pub related_label: String,
    pub gender_options: Vec<(String, String)>,
    pub education_options: Vec<(String, String)>,
    pub familiarity_options: Vec<(String, String)>,
    pub related_options: Vec<(String, String)>,
    pub values: Background,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionsView {
    pub title: String,
    pub intro: String,
    pub how_to_use: String,
    pub dimensions: Vec<DimensionText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    pub text: DimensionText,
    pub value: f64,
    pub touched: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseView {
    pub title: String,
    pub subtitle: String,
    pub instruction: String,
    pub object_key: String,
    pub object_name: String,
    pub image: String,
    pub physical_title: String,
    pub emotional_title: String,
    pub scale_low: String,
    pub scale_high: String,
    /// Close button of the slider help dialog.
    pub help_close_label: String,
    pub physical: Vec<SliderView>,
    pub emotional: Vec<SliderView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalView {
    pub title: String,
    pub text: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedView {
    pub title: String,
    pub text: String,
}

/// Builds the view for the current position. On a case stage the object's
/// record is created first, so a rendered case always has data.
pub fn render(state: &mut SurveyState, tr: &Translations) -> StageView {
    if let Some(obj) = current_object(state) {
        if let Err(e) = ensure_case(state, obj.key) {
            tracing::error!(error = %e, "case record unavailable");
        }
    }

    let progress = progress_percent(state.stage_index);

    if state.has_submitted {
        return StageView {
            stage_index: state.stage_index,
            progress_percent: progress,
            body: StageBody::Submitted(submitted_view(tr)),
            nav: nav_bar(state, tr),
            required_hint: None,
        };
    }

    let stage = Stage::from_index(state.stage_index).unwrap_or(Stage::Final);

    let body = match stage {
        Stage::Welcome => StageBody::Welcome(welcome_view(state, tr)),
        Stage::Background => StageBody::Background(background_view(state, tr)),
        Stage::Definitions => StageBody::Definitions(definitions_view(tr)),
        Stage::Case(_) => match case_view(state, tr) {
            Some(v) => StageBody::Case(v),
            None => StageBody::Final(final_view(tr)),
        },
        Stage::Final => StageBody::Final(final_view(tr)),
    };

    let required_hint = state.required_hint.then(|| {
        let (key, fallback) = if matches!(stage, Stage::Case(_)) {
            (
                "validation.slidersRequired",
                "Please move every slider at least once.",
            )
        } else {
            ("validation.required", "Please complete all required fields.")
        };
        tr.t(key, fallback).to_string()
    });

    StageView {
        stage_index: state.stage_index,
        progress_percent: progress,
        body,
        nav: nav_bar(state, tr),
        required_hint,
    }
}

pub fn nav_bar(state: &SurveyState, tr: &Translations) -> NavBarView {
    let visible = !state.has_submitted && state.stage_index != WELCOME_STAGE;

    let next_label = if state.stage_index == FINAL_STAGE {
        if state.is_submitting {
            tr.t("nav.sending", "Sending...")
        } else {
            tr.t("nav.finish", "Finish")
        }
    } else {
        tr.t("nav.next", "Next")
    };

    NavBarView {
        visible,
        back_enabled: state.stage_index != WELCOME_STAGE && !state.is_submitting,
        next_enabled: can_advance(state) && !state.is_submitting,
        back_label: tr.t("nav.back", "Back").to_string(),
        next_label: next_label.to_string(),
    }
}

fn welcome_view(state: &SurveyState, tr: &Translations) -> WelcomeView {
    WelcomeView {
        title: tr.t("welcome.title", "Welcome").to_string(),
        intro: tr.t("welcome.intro", "").to_string(),
        what: tr.t("welcome.what", "").to_string(),
        privacy: tr.t("welcome.privacy", "").to_string(),
        age_label: tr
            .t(
                "welcome.ageCheck",
                "I confirm that I am at least 18 years old.",
            )
            .to_string(),
        consent_label: tr
            .t(
                "welcome.consentCheck",
                "I consent to participate in this study.",
            )
            .to_string(),
        start_label: tr.t("welcome.start", "Start").to_string(),
        age_confirmed: state.document.consent.age_confirmed,
        consent_given: state.document.consent.consent_given,
        start_enabled: can_advance(state),
    }
}

fn background_view(state: &SurveyState, tr: &Translations) -> BackgroundView {
    let gender_fallbacks = ["Female", "Male", "Non-binary", "Prefer not to say", "Other"];
    let gender_options = GENDER_OPTION_KEYS
        .iter()
        .zip(gender_fallbacks)
        .map(|(k, fb)| {
            (
                k.to_string(),
                tr.t(&format!("background.genderOptions.{k}"), fb).to_string(),
            )
        })
        .collect();

    BackgroundView {
        title: tr
            .t("background.title", "Background information")
            .to_string(),
        intro: tr.t("background.intro", "").to_string(),
        select_placeholder: tr.t("common.select", "Select").to_string(),
        age_label: tr.t("background.age", "Age").to_string(),
        gender_label: tr.t("background.gender", "Gender").to_string(),
        country_label: tr
            .t("background.country", "Country of residence")
            .to_string(),
        country_placeholder: tr
            .t("background.countryPlaceholder", "e.g., Italy")
            .to_string(),
        education_label: tr
            .t(
                "background.educationQ",
                "What is your highest completed level of education?",
            )
            .to_string(),
        familiarity_label: tr
            .t(
                "background.familiarityQ",
                "How familiar are you with materials?",
            )
            .to_string(),
        related_label: tr
            .t(
                "background.relatedQ",
                "Do you have any background or experience in design, materials, engineering, or related fields?",
            )
            .to_string(),
        gender_options,
        education_options: tr.options(EDUCATION_OPTIONS),
        familiarity_options: tr.options(FAMILIARITY_OPTIONS),
        related_options: tr.options(RELATED_OPTIONS),
        values: state.document.background.clone(),
    }
}

fn definitions_view(tr: &Translations) -> DefinitionsView {
    DefinitionsView {
        title: tr.t("definitions.title", "Definitions").to_string(),
        intro: tr.t("definitions.intro", "").to_string(),
        how_to_use: tr.t("definitions.howToUse", "").to_string(),
        dimensions: ALL_DIMENSIONS
            .iter()
            .map(|d| dimension_text(tr, *d))
            .collect(),
    }
}

fn case_view(state: &SurveyState, tr: &Translations) -> Option<CaseView> {
    let obj = current_object(state)?;
    let record = state.document.cases.get(obj.key);

    let slider_view = |d: &Dimension| {
        let s = record.and_then(|r| r.sliders.get(d)).copied();
        SliderView {
            text: dimension_text(tr, *d),
            value: s.map(|s| s.value).unwrap_or(SLIDER_DEFAULT),
            touched: s.map(|s| s.touched).unwrap_or(false),
        }
    };

    Some(CaseView {
        title: format!(
            "{} {}/{}",
            tr.t("case.title", "Case study"),
            state.case_index + 1,
            CASE_COUNT
        ),
        subtitle: tr.t("case.subtitle", "").to_string(),
        instruction: tr
            .t(
                "case.instruction",
                "Move each slider at least once. All answers are required.",
            )
            .to_string(),
        object_key: obj.key.to_string(),
        object_name: tr.t(obj.name_key, "Object").to_string(),
        image: obj.image.to_string(),
        physical_title: tr
            .t("case.physicalTitle", "Physical Properties")
            .to_string(),
        emotional_title: tr
            .t("case.emotionalTitle", "Emotional Reactions")
            .to_string(),
        scale_low: tr.t("scale.low", "low").to_string(),
        scale_high: tr.t("scale.high", "high").to_string(),
        help_close_label: tr.t("common.close", "Close").to_string(),
        physical: PHYSICAL_DIMENSIONS.iter().map(slider_view).collect(),
        emotional: EMOTIONAL_DIMENSIONS.iter().map(slider_view).collect(),
    })
}

fn final_view(tr: &Translations) -> FinalView {
    FinalView {
        title: tr.t("final.thanksTitle", "Thank you!").to_string(),
        text: tr
            .t(
                "final.thanksText",
                "Your answers are valuable for our research.",
            )
            .to_string(),
        instructions: tr
            .t(
                "final.instructions",
                "Click Finish to submit your responses, or Back to review and change your answers.",
            )
            .to_string(),
    }
}

fn submitted_view(tr: &Translations) -> SubmittedView {
    SubmittedView {
        title: tr
            .t("final.submittedTitle", "Responses sent. Thank you!")
            .to_string(),
        text: tr
            .t(
                "final.submittedText",
                "Your responses have been successfully recorded. You may now close this window.",
            )
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::builtin_english;
    use crate::survey::{start_session_with_id, FIRST_CASE_STAGE};

    fn mk_state() -> SurveyState {
        start_session_with_id("view-tests".to_string(), "en", false)
    }

    #[test]
    fn welcome_hides_bottom_nav() {
        let mut s = mk_state();
        let v = render(&mut s, &builtin_english());
        assert!(!v.nav.visible);
        assert!(matches!(v.body, StageBody::Welcome(ref w) if !w.start_enabled));
        assert_eq!(v.progress_percent, 0);
    }

    #[test]
    fn rendering_a_case_stage_creates_its_record() {
        let mut s = mk_state();
        s.stage_index = FIRST_CASE_STAGE;
        let key = s.order[0].key;
        assert!(!s.document.cases.contains_key(key));

        let v = render(&mut s, &builtin_english());
        assert!(s.document.cases.contains_key(key));
        let StageBody::Case(c) = v.body else {
            panic!("expected case body");
        };
        assert_eq!(c.object_key, key);
        assert_eq!(c.physical.len(), 6);
        assert_eq!(c.emotional.len(), 2);
        assert!(c.title.ends_with("1/10"));
    }

    #[test]
    fn non_case_stages_create_no_records() {
        let mut s = mk_state();
        for i in 0..FIRST_CASE_STAGE {
            s.stage_index = i;
            render(&mut s, &builtin_english());
        }
        s.stage_index = FINAL_STAGE;
        render(&mut s, &builtin_english());
        assert!(s.document.cases.is_empty());
    }

    #[test]
    fn hint_text_depends_on_stage() {
        let tr = builtin_english();
        let mut s = mk_state();
        s.required_hint = true;
        assert_eq!(
            render(&mut s, &tr).required_hint.as_deref(),
            Some(tr.t("validation.required", ""))
        );

        s.stage_index = FIRST_CASE_STAGE;
        assert_eq!(
            render(&mut s, &tr).required_hint.as_deref(),
            Some(tr.t("validation.slidersRequired", ""))
        );
    }

    #[test]
    fn final_stage_next_label_tracks_submission() {
        let tr = builtin_english();
        let mut s = mk_state();
        s.stage_index = FINAL_STAGE;
        assert_eq!(nav_bar(&s, &tr).next_label, "Finish");

        s.is_submitting = true;
        let nav = nav_bar(&s, &tr);
        assert_eq!(nav.next_label, "Sending...");
        assert!(!nav.next_enabled);
        assert!(!nav.back_enabled);
    }

    #[test]
    fn background_options_come_from_translation_tables() {
        let tr = builtin_english();
        let mut s = mk_state();
        s.stage_index = 1;
        let StageBody::Background(b) = render(&mut s, &tr).body else {
            panic!("expected background body");
        };
        assert_eq!(b.gender_options.len(), 5);
        assert_eq!(b.education_options, tr.options(EDUCATION_OPTIONS));
        assert_eq!(b.education_options[0].0, "primary");
    }

    #[test]
    fn welcome_carries_study_notice_and_privacy_note() {
        let tr = builtin_english();
        let mut s = mk_state();
        let StageBody::Welcome(w) = render(&mut s, &tr).body else {
            panic!("expected welcome body");
        };
        assert_eq!(w.what, tr.t("welcome.what", "?"));
        assert_eq!(w.privacy, tr.t("welcome.privacy", "?"));
        assert!(!w.what.is_empty());
        assert!(!w.privacy.is_empty());
    }

    #[test]
    fn help_dialog_close_label_is_translated() {
        let tr = builtin_english();
        let mut s = mk_state();
        s.stage_index = FIRST_CASE_STAGE;
        let StageBody::Case(c) = render(&mut s, &tr).body else {
            panic!("expected case body");
        };
        assert_eq!(c.help_close_label, tr.t("common.close", ""));
        assert_eq!(c.help_close_label, "Close");
    }

    #[test]
    fn dimension_text_falls_back_to_key() {
        let tr = Translations::empty("en");
        let t = dimension_text(&tr, Dimension::Arousal);
        assert_eq!(t.label, "arousal");
        assert_eq!(t.definition, "");
        assert_eq!(t.example_title, "Examples");
    }
}
