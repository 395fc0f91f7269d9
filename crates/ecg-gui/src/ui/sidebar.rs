//! Left panel: model artifact path, CSV file picker, classify button.

use eframe::egui;

use crate::app::EcgApp;

pub fn draw_sidebar(ctx: &egui::Context, app: &mut EcgApp) {
    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("ECG CLASSIFIER");
                ui.label("v0.1.0");
                ui.separator();

                // Model artifact picker
                ui.label("MODEL");
                if ui.button("Select Model...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Model Bundle", &["json"])
                        .pick_file()
                    {
                        app.model_path = path;
                    }
                }
                ui.small(
                    app.model_path
                        .file_name()
                        .map(|f| f.to_string_lossy().to_string())
                        .unwrap_or_else(|| "?".into()),
                );
                ui.add_space(4.0);
                ui.separator();

                // ECG data upload
                ui.label("ECG DATA");
                if ui.button("Choose CSV...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                    {
                        app.load_csv(path);
                    }
                }
                if let Some(p) = &app.csv_path {
                    ui.small(
                        p.file_name()
                            .map(|f| f.to_string_lossy().to_string())
                            .unwrap_or_else(|| "?".into()),
                    );
                }
                if let Some(table) = &app.table {
                    ui.small(format!("{} rows loaded", table.num_rows()));
                }

                ui.add_space(8.0);

                // Classify button, gated behind the disclaimer
                let ready = app.acknowledged() && app.table.is_some();
                ui.add_enabled_ui(ready, |ui| {
                    if ui
                        .add_sized([ui.available_width(), 32.0], egui::Button::new("CLASSIFY"))
                        .clicked()
                    {
                        app.classify();
                    }
                });
                if !app.acknowledged() {
                    ui.small("Accept the disclaimer to begin.");
                }

                // Error message
                if let Some(err) = &app.error_message {
                    ui.add_space(4.0);
                    ui.colored_label(super::theme::COLOR_ERROR, err);
                }
            });
        });
}
