// src/gui/components/export_bar.rs
//
// Output path + "Download CSV File" (writes the filtered view) +
// "Copy link" (data-URI anchor to clipboard) + status line.

use eframe::egui;
use tracing::{debug, error, info};

use crate::config::consts::EXPORT_LINK_TEXT;
use crate::export;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            debug!("UI: out_path_text → {}", app.state.gui.out_path_text);
        }
    });

    ui.horizontal(|ui| {
        if ui.button(EXPORT_LINK_TEXT.trim()).clicked() {
            write_file(app);
        }
        if ui
            .button("Copy link")
            .on_hover_text("Copy an HTML download link for the filtered rows")
            .clicked()
        {
            copy_link(app, ui.ctx());
        }
        ui.label(app.status_text());
    });
}

fn write_file(app: &mut App) {
    let text = app.state.gui.out_path_text.clone();
    app.state.options.export.set_path(&text);

    let Some(view) = app.view() else { return };
    match export::write_csv(&app.state.options.export, &view) {
        Ok(path) => app.status(format!("Export: wrote {} rows → {}", view.len(), path.display())),
        Err(e) => {
            error!("Export: failed: {e}");
            app.status(format!("Export failed: {e}"));
        }
    }
}

fn copy_link(app: &App, ctx: &egui::Context) {
    let Some(view) = app.view() else { return };
    match export::download_link(&view) {
        Ok(link) => {
            info!(bytes = link.len(), "Copy: download link");
            ctx.copy_text(link);
            app.status(format!("Copied download link ({} rows)", view.len()));
        }
        Err(e) => {
            error!("Copy: failed: {e}");
            app.status(format!("Copy failed: {e}"));
        }
    }
}
