// src/ui/message.rs

use haptic_survey_lib::error::{AppError, UserMsgKind};

use super::egui;
use super::egui::{Color32, Ui};

#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
    detail: Option<String>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
        self.detail = None;
    }

    fn set(&mut self, kind: UserMsgKind, short: String, detail: Option<String>) {
        self.kind = Some(kind);
        self.short = Some(short);
        self.detail = detail;
    }

    pub fn set_warn(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Warn, short.into(), None);
    }

    pub fn set_error_with_detail(&mut self, short: impl Into<String>, detail: String) {
        self.set(UserMsgKind::Error, short.into(), Some(detail));
    }

    /// Kind and short text come from the error's user message.
    pub fn from_app_error(&mut self, err: &AppError) {
        let m = err.user_msg();
        self.set(m.kind, m.short.to_string(), m.detail);
    }

    pub fn show(&self, ui: &mut Ui, debug_ui: bool) {
        let (Some(kind), Some(short)) = (self.kind, self.short.as_deref()) else {
            return;
        };

        let text = if debug_ui {
            match self.detail.as_deref() {
                Some(d) => format!("{short} ({d})"),
                None => short.to_string(),
            }
        } else {
            short.to_string()
        };

        let (stroke, fill) = match kind {
            UserMsgKind::Warn => (Color32::from_rgb(255, 170, 0), Color32::from_rgb(90, 60, 0)),
            UserMsgKind::Error => (Color32::from_rgb(255, 60, 60), Color32::from_rgb(90, 0, 0)),
            UserMsgKind::Info => (
                Color32::from_rgb(80, 180, 255),
                Color32::from_rgb(10, 40, 80),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(8u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, text);
            });
    }
}
