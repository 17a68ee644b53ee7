// src/ui/panel_welcome.rs

use eframe::egui;
use haptic_survey_lib::survey::UiEvent;
use haptic_survey_lib::view::WelcomeView;

use crate::ui::widgets::{stage_title, ui_notice};

pub fn ui(ui: &mut egui::Ui, view: &WelcomeView, events: &mut Vec<UiEvent>) {
    stage_title(ui, &view.title);

    ui.label(&view.intro);
    ui.add_space(8.0);
    ui_notice(ui, &view.what);
    ui.add_space(12.0);

    let mut age = view.age_confirmed;
    if ui.checkbox(&mut age, &view.age_label).changed() {
        events.push(UiEvent::SetAgeConfirmed(age));
    }

    let mut consent = view.consent_given;
    if ui.checkbox(&mut consent, &view.consent_label).changed() {
        events.push(UiEvent::SetConsentGiven(consent));
    }

    ui.add_space(6.0);
    if !view.privacy.trim().is_empty() {
        ui.label(egui::RichText::new(&view.privacy).small().weak());
    }

    ui.add_space(16.0);

    let start = egui::Button::new(egui::RichText::new(&view.start_label).size(18.0))
        .min_size(egui::vec2(160.0, 36.0));
    if ui.add_enabled(view.start_enabled, start).clicked() {
        events.push(UiEvent::Next);
    }
}
