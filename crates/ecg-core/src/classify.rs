//! Classification pipeline: validate shape, scale, infer, map labels.
//!
//! The order is fixed: validation short-circuits before any scaling or
//! inference, and scaling always precedes the classifier.

use ndarray::Array2;

use crate::error::ValidationError;
use crate::model::ModelBundle;
use crate::report::{PredictionResult, RowPrediction};
use crate::table::FeatureTable;
use crate::FEATURE_COUNT;

/// Check every row against the trained feature width.
pub fn validate_shape(table: &FeatureTable) -> Result<(), ValidationError> {
    if table.num_rows() == 0 {
        return Err(ValidationError::EmptyTable);
    }
    for (i, row) in table.rows().iter().enumerate() {
        if row.len() != FEATURE_COUNT {
            return Err(ValidationError::ColumnCount {
                row: i + 1,
                expected: FEATURE_COUNT,
                found: row.len(),
            });
        }
    }
    Ok(())
}

fn to_matrix(table: &FeatureTable) -> Array2<f32> {
    let mut data = Array2::zeros((table.num_rows(), FEATURE_COUNT));
    for (i, row) in table.rows().iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            data[[i, j]] = v;
        }
    }
    data
}

/// Classify every row of the uploaded table.
pub fn classify_rows(
    table: &FeatureTable,
    model: &ModelBundle,
) -> Result<Vec<RowPrediction>, ValidationError> {
    validate_shape(table)?;

    let scaled = model.scaler.transform(&to_matrix(table));

    let mut predictions = Vec::with_capacity(scaled.nrows());
    for (i, row) in scaled.rows().into_iter().enumerate() {
        let proba = model.classifier.predict_proba(row);
        let result = PredictionResult::from_proba(proba);
        predictions.push(RowPrediction {
            row: i + 1,
            label: result.label,
            confidence: result.confidence,
        });
    }
    Ok(predictions)
}

/// The headline prediction for an upload: the first row's result.
///
/// This is the seam the UI layer calls.
pub fn validate_and_classify(
    table: &FeatureTable,
    model: &ModelBundle,
) -> Result<PredictionResult, ValidationError> {
    let rows = classify_rows(table, model)?;
    // validate_shape rejects empty tables, so the first row exists
    Ok(PredictionResult::from(&rows[0]))
}
