// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use nifty_stats::{
    config::{
        consts::{APP_TITLE, WINDOW_H, WINDOW_W},
        options::AppOptions,
        state::AppState,
    },
    gui, log,
};

fn main() {
    log::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppState::new(AppOptions::default())) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
