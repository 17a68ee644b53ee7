// src/survey/case_state.rs

use crate::catalog::{find_object, Dimension, ALL_DIMENSIONS};
use crate::error::{AppError, AppResult};

use super::nav::current_object;
use super::ops::ensure_open;
use super::types::{CaseRecord, SliderState, SurveyState};

impl CaseRecord {
    pub fn new() -> Self {
        Self {
            sliders: ALL_DIMENSIONS
                .iter()
                .map(|d| (*d, SliderState::default()))
                .collect(),
        }
    }

    pub fn all_touched(&self) -> bool {
        ALL_DIMENSIONS
            .iter()
            .all(|d| self.sliders.get(d).map(|s| s.touched).unwrap_or(false))
    }
}

impl Default for CaseRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the record for `object_key` on first call; later calls leave it alone.
/// Only the stage renderer calls this: a record exists once its case was shown.
pub fn ensure_case<'a>(state: &'a mut SurveyState, object_key: &str) -> AppResult<&'a mut CaseRecord> {
    if find_object(object_key).is_none() {
        return Err(AppError::UnknownObject(object_key.to_string()));
    }

    let record = state
        .document
        .cases
        .entry(object_key.to_string())
        .or_insert_with(|| {
            tracing::debug!(object_key, "case record created");
            CaseRecord::new()
        });

    Ok(record)
}

/// The only mutator of slider data. Any accepted value marks the dimension touched.
///
/// Writes only into the record of the object on screen, and only after that
/// record was created by rendering its case stage.
pub fn set_slider_value(
    state: &mut SurveyState,
    object_key: &str,
    dimension: Dimension,
    value: f64,
) -> AppResult<()> {
    ensure_open(state)?;

    if !value.is_finite() {
        return Err(AppError::InvalidSliderValue(value));
    }
    if find_object(object_key).is_none() {
        return Err(AppError::UnknownObject(object_key.to_string()));
    }
    if current_object(state).map(|o| o.key) != Some(object_key) {
        return Err(AppError::CaseNotShown(object_key.to_string()));
    }

    let Some(record) = state.document.cases.get_mut(object_key) else {
        return Err(AppError::CaseNotShown(object_key.to_string()));
    };
    let slider = record.sliders.entry(dimension).or_default();
    slider.value = value.clamp(0.0, 1.0);
    slider.touched = true;

    Ok(())
}

pub fn slider(state: &SurveyState, object_key: &str, dimension: Dimension) -> Option<SliderState> {
    state
        .document
        .cases
        .get(object_key)
        .and_then(|c| c.sliders.get(&dimension))
        .copied()
}

// ======================================================
// Unit Tests
// ======================================================
