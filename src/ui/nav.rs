// src/ui/nav.rs

use eframe::egui;
use haptic_survey_lib::i18n::SUPPORTED_LANGUAGES;
use haptic_survey_lib::survey::UiEvent;
use haptic_survey_lib::view::NavBarView;

/// Progress + language switcher. Pure view; a new language choice is written
/// to `requested_lang`.
pub fn top_bar(
    ctx: &egui::Context,
    progress_percent: u8,
    current_lang: &str,
    language_label: &str,
    requested_lang: &mut Option<String>,
) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let bar = egui::ProgressBar::new(f32::from(progress_percent) / 100.0)
                .desired_width((ui.available_width() - 180.0).max(80.0))
                .text(format!("{progress_percent}%"));
            ui.add(bar);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let selected = SUPPORTED_LANGUAGES
                    .iter()
                    .find(|(code, _)| *code == current_lang)
                    .map(|(_, name)| *name)
                    .unwrap_or(current_lang);

                egui::ComboBox::from_id_salt("language_switcher")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (code, name) in SUPPORTED_LANGUAGES {
                            if ui.selectable_label(*code == current_lang, *name).clicked() {
                                *requested_lang = Some(code.to_string());
                            }
                        }
                    });
                ui.label(language_label);
            });
        });
        ui.add_space(4.0);
    });
}

/// Back / Next bar. Hidden on the welcome stage and after submission.
pub fn bottom_nav(ctx: &egui::Context, model: &NavBarView, events: &mut Vec<UiEvent>) {
    if !model.visible {
        return;
    }

    egui::TopBottomPanel::bottom("bottom_nav").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let button_height = 32.0;

            let back_btn = egui::Button::new(egui::RichText::new(&model.back_label).size(16.0))
                .min_size(egui::vec2(100.0, button_height));

            if ui.add_enabled(model.back_enabled, back_btn).clicked() {
                events.push(UiEvent::Back);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next_btn =
                    egui::Button::new(egui::RichText::new(&model.next_label).size(16.0))
                        .min_size(egui::vec2(120.0, button_height));

                if ui.add_enabled(model.next_enabled, next_btn).clicked() {
                    events.push(UiEvent::Next);
                }
            });
        });
        ui.add_space(6.0);
    });
}
