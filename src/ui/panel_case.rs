// src/ui/panel_case.rs

use eframe::egui;
use haptic_survey_lib::survey::UiEvent;
use haptic_survey_lib::view::{CaseView, DimensionText, SliderView};

use crate::ui::widgets::{info_dot, muted, stage_title, ui_notice, TOUCHED, UNTOUCHED};

/// Draws one case study. A click on a "?" sets `help`. Without `image_uri`
/// the object name stands in for the photo.
pub fn ui(
    ui: &mut egui::Ui,
    view: &CaseView,
    image_uri: Option<&str>,
    events: &mut Vec<UiEvent>,
    help: &mut Option<DimensionText>,
) {
    stage_title(ui, &view.title);
    muted(ui, &view.subtitle);
    ui.add_space(6.0);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                match image_uri {
                    Some(uri) => {
                        ui.add(
                            egui::Image::new(uri)
                                .max_height(280.0)
                                .maintain_aspect_ratio(true),
                        );
                        ui.add_space(4.0);
                        ui.label(egui::RichText::new(&view.object_name).strong().size(18.0));
                    }
                    None => {
                        ui.add_space(24.0);
                        ui.label(egui::RichText::new(&view.object_name).strong().size(22.0));
                        ui.add_space(24.0);
                    }
                }
            });
        });

    ui.add_space(8.0);
    ui_notice(ui, &view.instruction);
    ui.add_space(10.0);

    section(ui, view, &view.physical_title, &view.physical, events, help);
    ui.add_space(10.0);
    section(ui, view, &view.emotional_title, &view.emotional, events, help);
}

fn section(
    ui: &mut egui::Ui,
    view: &CaseView,
    title: &str,
    sliders: &[SliderView],
    events: &mut Vec<UiEvent>,
    help: &mut Option<DimensionText>,
) {
    ui.label(egui::RichText::new(title).strong().size(16.0));
    ui.add_space(4.0);

    for s in sliders {
        slider_row(ui, view, s, events, help);
    }
}

fn slider_row(
    ui: &mut egui::Ui,
    view: &CaseView,
    s: &SliderView,
    events: &mut Vec<UiEvent>,
    help: &mut Option<DimensionText>,
) {
    let accent = if s.touched { TOUCHED } else { UNTOUCHED };

    egui::Frame::NONE
        .stroke(egui::Stroke::new(1.0, accent))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&s.text.label).strong());
                if info_dot(ui, &s.text) {
                    *help = Some(s.text.clone());
                }
            });

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&view.scale_low).small());

                let mut value = s.value;
                let resp = ui.add(
                    egui::Slider::new(&mut value, 0.0..=1.0)
                        .step_by(0.01)
                        .show_value(false),
                );

                // A plain click on the current position still counts as an answer.
                if resp.changed() || resp.drag_stopped() || resp.clicked() {
                    events.push(UiEvent::SetSlider {
                        object_key: view.object_key.clone(),
                        dimension: s.text.dimension,
                        value,
                    });
                }

                ui.label(egui::RichText::new(&view.scale_high).small());
            });
        });

    ui.add_space(4.0);
}
