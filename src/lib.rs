// src/lib.rs

pub mod catalog;
pub mod context;
pub mod error;
pub mod i18n;
pub mod survey;
pub mod types;
pub mod view;

use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use crate::survey::{start_session, SubmissionClient};
use crate::types::AppState;

/// Starts a fresh session. A translation problem never blocks start-up: the
/// built-in English table is used instead and the error is handed back so the
/// UI can show it.
pub fn init_state(ctx: &AppCtx) -> (AppState, Option<AppError>) {
    init_state_with_client(ctx, SubmissionClient::from_ctx(ctx))
}

pub fn init_state_with_client(
    ctx: &AppCtx,
    client: SubmissionClient,
) -> (AppState, Option<AppError>) {
    let (translations, warning) =
        match i18n::load_translations(&ctx.i18n_dir, &ctx.initial_language) {
            Ok(tr) => (tr, None),
            Err(e) => {
                tracing::warn!(
                    language = %ctx.initial_language,
                    error = %e,
                    "falling back to built-in English translations"
                );
                (i18n::builtin_english(), Some(e))
            }
        };

    let survey = start_session(translations.language(), ctx.skip_validation);

    (
        AppState {
            survey,
            translations,
            client,
        },
        warning,
    )
}

/// Loads `lang` and makes it active. On failure the previous language stays
/// active and nothing in the session changes.
pub fn switch_language(state: &mut AppState, ctx: &AppCtx, lang: &str) -> AppResult<()> {
    let tr = match i18n::load_translations(&ctx.i18n_dir, lang) {
        Ok(tr) => tr,
        Err(e) => {
            tracing::warn!(
                language = lang,
                keeping = state.translations.language(),
                error = %e,
                "language switch failed"
            );
            return Err(e);
        }
    };

    state.translations = tr;
    survey::set_language(&mut state.survey, lang);
    Ok(())
}
