// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use haptic_survey_lib::context::{AppCtx, APP_TITLE};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let ctx = AppCtx::from_env();
    tracing::info!(
        i18n_dir = %ctx.i18n_dir.display(),
        language = %ctx.initial_language,
        submit = ctx.submit_url.is_some(),
        skip_validation = ctx.skip_validation,
        "starting survey"
    );

    let (state, warning) = haptic_survey_lib::init_state(&ctx);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([880.0, 760.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            // file:// URIs for the object photos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ui::UiApp::new(state, ctx, warning)))
        }),
    )
}
