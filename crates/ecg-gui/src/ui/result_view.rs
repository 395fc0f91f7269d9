//! Main panel: disclaimer gate, uploaded data preview, prediction result.

use ecg_core::report::guidance;
use eframe::egui;

use crate::app::{EcgApp, FlowState};
use crate::ui::theme;

/// Rows shown in the data preview before it is cut off.
const PREVIEW_ROWS: usize = 50;

pub fn draw_result_view(ctx: &egui::Context, app: &mut EcgApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if !app.acknowledged() {
            draw_disclaimer(ui, app);
            return;
        }

        match app.state {
            FlowState::Idle => {
                if app.table.is_some() {
                    draw_preview(ui, app);
                } else {
                    ui.centered_and_justified(|ui| {
                        ui.label("Choose a CSV file of extracted ECG features, then click CLASSIFY.");
                    });
                }
            }
            FlowState::Complete => {
                draw_preview(ui, app);
                ui.add_space(8.0);
                draw_result(ui, app);
            }
        }
    });
}

fn draw_disclaimer(ui: &mut egui::Ui, app: &mut EcgApp) {
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.heading("ECG Classification");
    });
    ui.add_space(8.0);

    ui.label(
        "This tool takes a CSV file of extracted ECG features and predicts \
         whether the recording is Normal or Abnormal (Arrhythmia), using a \
         pre-trained model.",
    );
    ui.add_space(8.0);

    ui.strong("Before you continue");
    ui.label(
        "The prediction is informational only and is not a medical diagnosis. \
         It is not a substitute for professional medical advice, diagnosis, or \
         treatment. Always seek the advice of your physician or other qualified \
         health provider with any questions about a medical condition.",
    );
    ui.add_space(12.0);

    if ui
        .add_sized([160.0, 32.0], egui::Button::new("I Understand"))
        .clicked()
    {
        app.acknowledge();
    }
}

fn draw_preview(ui: &mut egui::Ui, app: &EcgApp) {
    let Some(table) = &app.table else {
        return;
    };

    egui::CollapsingHeader::new("Show Uploaded Data")
        .default_open(false)
        .show(ui, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, true])
                .max_height(220.0)
                .show(ui, |ui| {
                    for row in table.rows().iter().take(PREVIEW_ROWS) {
                        let line = row
                            .iter()
                            .map(|v| format!("{v:.3}"))
                            .collect::<Vec<_>>()
                            .join(", ");
                        ui.monospace(line);
                    }
                    if table.num_rows() > PREVIEW_ROWS {
                        ui.small(format!("... {} more rows", table.num_rows() - PREVIEW_ROWS));
                    }
                });
        });
}

fn draw_result(ui: &mut egui::Ui, app: &EcgApp) {
    let Some(result) = &app.result else {
        return;
    };

    ui.heading("Prediction Result");
    ui.add_space(4.0);

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(result.label.as_str())
                .color(theme::label_color(result.label))
                .size(26.0)
                .strong(),
        );
        ui.label(format!("Confidence: {:.2}%", result.confidence));
    });

    ui.add_space(8.0);
    ui.separator();
    ui.label(guidance(result.label));
}
