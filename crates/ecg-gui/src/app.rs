//! Application state: disclaimer gate, uploaded table, classification flow.

use std::path::PathBuf;

use ecg_core::classify::validate_and_classify;
use ecg_core::model::{ModelBundle, DEFAULT_MODEL_PATH};
use ecg_core::report::PredictionResult;
use ecg_core::table::FeatureTable;

/// One-time disclaimer acknowledgment, scoped to this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckState {
    NeedsAck,
    Acknowledged,
}

/// Classification flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Complete,
}

pub struct EcgApp {
    pub model_path: PathBuf,
    pub csv_path: Option<PathBuf>,
    pub table: Option<FeatureTable>,

    pub ack: AckState,
    pub state: FlowState,
    pub result: Option<PredictionResult>,
    pub error_message: Option<String>,

    // Loaded bundle, keyed by the path it came from so a newly picked
    // artifact replaces it.
    bundle: Option<(PathBuf, ModelBundle)>,
}

impl EcgApp {
    pub fn new() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            csv_path: None,
            table: None,
            ack: AckState::NeedsAck,
            state: FlowState::Idle,
            result: None,
            error_message: None,
            bundle: None,
        }
    }

    pub fn acknowledged(&self) -> bool {
        self.ack == AckState::Acknowledged
    }

    /// The single gate transition. Terminal: nothing ever reverts it.
    pub fn acknowledge(&mut self) {
        self.ack = AckState::Acknowledged;
    }

    /// Read and parse the chosen CSV, clearing any previous result.
    pub fn load_csv(&mut self, path: PathBuf) {
        self.result = None;
        self.state = FlowState::Idle;

        match std::fs::read(&path) {
            Ok(bytes) => match FeatureTable::from_csv_bytes(&bytes) {
                Ok(table) => {
                    self.table = Some(table);
                    self.csv_path = Some(path);
                    self.error_message = None;
                }
                Err(e) => {
                    self.table = None;
                    self.csv_path = Some(path);
                    self.error_message = Some(e.to_string());
                }
            },
            Err(e) => {
                self.table = None;
                self.error_message = Some(format!("failed to read {}: {e}", path.display()));
            }
        }
    }

    /// Load the bundle for the current model path, replacing a previously
    /// loaded one when the picker chose a different artifact.
    fn ensure_bundle(&mut self) -> bool {
        if matches!(&self.bundle, Some((p, _)) if p == &self.model_path) {
            return true;
        }
        match ModelBundle::load(&self.model_path) {
            Ok(bundle) => {
                self.bundle = Some((self.model_path.clone(), bundle));
                true
            }
            Err(e) => {
                self.error_message = Some(format!("{e:#}"));
                false
            }
        }
    }

    /// Run the full pipeline on the uploaded table.
    ///
    /// Unreachable until the disclaimer has been acknowledged.
    pub fn classify(&mut self) {
        if self.ack != AckState::Acknowledged {
            return;
        }
        if self.table.is_none() {
            self.error_message = Some("No CSV file loaded".into());
            return;
        }
        if !self.ensure_bundle() {
            return;
        }

        let (Some(table), Some((_, bundle))) = (&self.table, &self.bundle) else {
            return;
        };

        match validate_and_classify(table, bundle) {
            Ok(result) => {
                self.result = Some(result);
                self.error_message = None;
                self.state = FlowState::Complete;
            }
            Err(e) => {
                self.result = None;
                self.error_message = Some(e.to_string());
                self.state = FlowState::Idle;
            }
        }
    }
}

impl eframe::App for EcgApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::sidebar::draw_sidebar(ctx, self);
        crate::ui::result_view::draw_result_view(ctx, self);
    }
}
