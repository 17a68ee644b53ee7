// src/ui/mod.rs

pub mod nav;
pub mod panel_background;
pub mod panel_case;
pub mod panel_definitions;
pub mod panel_final;
pub mod panel_welcome;

pub mod message;
pub mod widgets;

use eframe::egui;
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use haptic_survey_lib::context::AppCtx;
use haptic_survey_lib::error::{AppError, AppResult};
use haptic_survey_lib::survey::{apply_event, complete_submission, SubmissionTicket, UiEvent};
use haptic_survey_lib::types::AppState;
use haptic_survey_lib::view::{self, DimensionText, StageBody};
use haptic_survey_lib::switch_language;

use message::PanelMsgState;

pub struct UiApp {
    state: AppState,
    ctx: AppCtx,

    msg: PanelMsgState,

    // Result of the in-flight submission, if any.
    pending: Option<Receiver<AppResult<()>>>,

    help: Option<DimensionText>,

    // (stage_index, has_submitted) of the last frame; a change scrolls to top.
    last_stage: Option<(usize, bool)>,

    // Catalog image path -> resolved file:// URI, checked once per path.
    image_uris: HashMap<String, Option<String>>,
}

impl UiApp {
    pub fn new(state: AppState, ctx: AppCtx, startup_warning: Option<AppError>) -> Self {
        let mut msg = PanelMsgState::default();
        if let Some(e) = startup_warning {
            msg.set_warn(format!(
                "Translations for '{}' could not be loaded; using English.",
                ctx.initial_language
            ));
            tracing::warn!(error = %e, "startup translation warning shown");
        }

        Self {
            state,
            ctx,
            msg,
            pending: None,
            help: None,
            last_stage: None,
            image_uris: HashMap::new(),
        }
    }

    fn image_uri(&mut self, relative: &str) -> Option<String> {
        let ctx = &self.ctx;
        self.image_uris
            .entry(relative.to_string())
            .or_insert_with(|| {
                let uri = ctx.asset_uri(relative);
                if uri.is_none() {
                    tracing::warn!(image = relative, "object image not found; showing name");
                }
                uri
            })
            .clone()
    }

    fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_ref() else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(AppError::SubmitTransport(
                "submission worker exited without a result".to_string(),
            )),
        };

        self.pending = None;
        self.finish_submission(outcome);
    }

    fn finish_submission(&mut self, outcome: AppResult<()>) {
        complete_submission(&mut self.state.survey, &outcome);

        match outcome {
            Ok(()) => self.msg.clear(),
            Err(e) => {
                let short = self
                    .state
                    .translations
                    .t("final.sentFail", e.user_msg().short)
                    .to_string();
                self.msg.set_error_with_detail(short, e.to_string());
            }
        }
    }

    fn start_send(&mut self, ticket: SubmissionTicket, egui_ctx: &egui::Context) {
        let (tx, rx) = mpsc::channel();
        let client = self.state.client.clone();
        let repaint = egui_ctx.clone();

        std::thread::spawn(move || {
            let outcome = client.send(&ticket);
            // Receiver gone means the window closed; nothing left to report to.
            let _ = tx.send(outcome);
            repaint.request_repaint();
        });

        self.pending = Some(rx);
    }

    fn dispatch(&mut self, events: Vec<UiEvent>, egui_ctx: &egui::Context) {
        for ev in events {
            let moves = matches!(ev, UiEvent::Next | UiEvent::Back);

            match apply_event(&mut self.state.survey, ev) {
                Ok(Some(ticket)) => {
                    self.msg.clear();
                    self.start_send(ticket, egui_ctx);
                }
                Ok(None) => {
                    if moves {
                        self.msg.clear();
                    }
                }
                // The stage shows its own required hint.
                Err(AppError::ValidationBlocked { .. }) => {}
                Err(e) => self.msg.from_app_error(&e),
            }
        }
    }

    fn change_language(&mut self, lang: &str) {
        if lang == self.state.language() {
            return;
        }

        match switch_language(&mut self.state, &self.ctx, lang) {
            Ok(()) => self.msg.clear(),
            Err(e) => {
                let short = format!(
                    "Could not load language '{lang}'; keeping '{}'.",
                    self.state.language()
                );
                self.msg.set_warn(short);
                tracing::debug!(error = %e, "language switch rejected");
            }
        }
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let debug_ui = self.ctx.debug_ui || cfg!(debug_assertions);

        self.poll_submission();

        if self.help.is_some() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.help = None;
        }

        let stage = view::render(&mut self.state.survey, &self.state.translations);

        let stage_key = (stage.stage_index, self.state.survey.has_submitted);
        let stage_changed = self.last_stage != Some(stage_key);
        if stage_changed {
            self.last_stage = Some(stage_key);
            self.help = None;
        }

        let (image_uri, close_label) = match &stage.body {
            StageBody::Case(v) => (self.image_uri(&v.image), v.help_close_label.as_str()),
            _ => (None, ""),
        };

        let mut events: Vec<UiEvent> = Vec::new();
        let mut requested_lang: Option<String> = None;

        nav::top_bar(
            ctx,
            stage.progress_percent,
            self.state.language(),
            self.state.translations.t("nav.language", "Language"),
            &mut requested_lang,
        );

        nav::bottom_nav(ctx, &stage.nav, &mut events);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.msg.show(ui, debug_ui);

            let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if stage_changed {
                scroll = scroll.vertical_scroll_offset(0.0);
            }

            scroll.show(ui, |ui| {
                ui.add_space(8.0);

                match &stage.body {
                    StageBody::Welcome(v) => panel_welcome::ui(ui, v, &mut events),
                    StageBody::Background(v) => panel_background::ui(ui, v, &mut events),
                    StageBody::Definitions(v) => panel_definitions::ui(ui, v),
                    StageBody::Case(v) => panel_case::ui(
                        ui,
                        v,
                        image_uri.as_deref(),
                        &mut events,
                        &mut self.help,
                    ),
                    StageBody::Final(v) => panel_final::ui(ui, v),
                    StageBody::Submitted(v) => panel_final::ui_submitted(ui, v),
                }

                if let Some(hint) = stage.required_hint.as_deref() {
                    widgets::required_hint(ui, hint);
                }

                ui.add_space(16.0);
            });
        });

        widgets::definition_dialog(ctx, &mut self.help, close_label);

        if !events.is_empty() {
            self.dispatch(events, ctx);
        }

        if let Some(lang) = requested_lang {
            self.change_language(&lang);
        }

        if self.pending.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
