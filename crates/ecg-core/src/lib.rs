//! ecg-core — shared library for ECG feature classification.
//!
//! Provides CSV table loading, shape validation, feature scaling,
//! classifier inference, and result reporting used by both the CLI
//! and GUI frontends.

pub mod classify;
pub mod error;
pub mod model;
pub mod report;
pub mod scaler;
pub mod table;

/// Number of feature columns the model was trained on.
pub const FEATURE_COUNT: usize = 32;
