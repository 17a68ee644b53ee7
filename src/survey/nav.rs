// src/survey/nav.rs

use crate::catalog::SurveyObject;
use crate::error::{AppError, AppResult};

use super::submit::{begin_submission, SubmissionTicket};
use super::types::{
    Stage, SurveyState, FINAL_STAGE, FIRST_CASE_STAGE, LAST_CASE_STAGE, TOTAL_STAGES,
    WELCOME_STAGE,
};
use super::validate::can_advance;

#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Position changed; re-render.
    Moved,
    /// Final stage confirmed; the ticket must be sent.
    Finish(SubmissionTicket),
}

pub fn current_stage(state: &SurveyState) -> Result<Stage, AppError> {
    Stage::from_index(state.stage_index).ok_or_else(|| {
        AppError::InvalidState(format!("stage_index {} out of range", state.stage_index))
    })
}

pub fn is_case_stage(stage_index: usize) -> bool {
    (FIRST_CASE_STAGE..=LAST_CASE_STAGE).contains(&stage_index)
}

/// Object rated on the current stage, if it is a case stage.
pub fn current_object(state: &SurveyState) -> Option<&'static SurveyObject> {
    if !is_case_stage(state.stage_index) {
        return None;
    }
    state.order.get(state.case_index).copied()
}

pub fn progress_percent(stage_index: usize) -> u8 {
    let ratio = stage_index.min(FINAL_STAGE) as f64 / (TOTAL_STAGES - 1) as f64;
    (ratio * 100.0).round() as u8
}

pub fn advance(state: &mut SurveyState) -> AppResult<Advance> {
    if state.has_submitted {
        return Err(AppError::SurveyClosed);
    }

    let stage = current_stage(state)?;

    if !can_advance(state) {
        state.required_hint = true;
        tracing::debug!(stage = stage.label(), case_index = state.case_index, "advance blocked");
        return Err(AppError::ValidationBlocked { stage });
    }

    if state.stage_index >= FINAL_STAGE {
        let ticket = begin_submission(state)?;
        state.required_hint = false;
        return Ok(Advance::Finish(ticket));
    }

    state.required_hint = false;

    if is_case_stage(state.stage_index) && state.stage_index < LAST_CASE_STAGE {
        state.case_index += 1;
    }
    state.stage_index += 1;

    tracing::debug!(
        stage_index = state.stage_index,
        case_index = state.case_index,
        "advanced"
    );

    Ok(Advance::Moved)
}

/// Steps back one stage. Returns false when nothing moved.
pub fn retreat(state: &mut SurveyState) -> bool {
    if state.has_submitted || state.is_submitting || state.stage_index == WELCOME_STAGE {
        return false;
    }

    state.required_hint = false;

    if state.stage_index > FIRST_CASE_STAGE && state.stage_index <= LAST_CASE_STAGE {
        state.case_index = state.case_index.saturating_sub(1);
    } else if state.stage_index == FIRST_CASE_STAGE {
        state.case_index = 0;
    }
    state.stage_index -= 1;

    tracing::debug!(
        stage_index = state.stage_index,
        case_index = state.case_index,
        "retreated"
    );

    true
}

// ======================================================
// Unit Tests
// ======================================================
