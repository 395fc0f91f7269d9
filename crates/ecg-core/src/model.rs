//! Model bundle loading and logistic-regression inference.
//!
//! The artifact is a single JSON file holding the trained (classifier,
//! scaler) pair exported after training. It is loaded at most once per
//! process and shared read-only across all requests.

use std::path::Path;
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use ndarray::ArrayView1;
use serde::Deserialize;

use crate::scaler::ScalerParameters;
use crate::FEATURE_COUNT;

/// Relative path the serving process loads the artifact from.
pub const DEFAULT_MODEL_PATH: &str = "ecg_model/trained_model.json";

/// Trained binary classifier: one weight per feature plus an intercept.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierParameters {
    pub weights: Vec<f32>,
    pub intercept: f32,
}

impl ClassifierParameters {
    /// Two-class probability vector for one scaled feature row.
    ///
    /// Index 0 is Normal, index 1 is Abnormal. Deterministic: the same row
    /// always yields the same vector.
    pub fn predict_proba(&self, row: ArrayView1<f32>) -> [f32; 2] {
        let z: f32 = row
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f32>()
            + self.intercept;
        let p_abnormal = 1.0 / (1.0 + (-z).exp());
        [1.0 - p_abnormal, p_abnormal]
    }
}

/// The (classifier, scaler) pair from the serialized artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelBundle {
    pub classifier: ClassifierParameters,
    pub scaler: ScalerParameters,
}

impl ModelBundle {
    /// Load and sanity-check a bundle from a JSON artifact.
    ///
    /// Any failure here is fatal for the serving process, not a
    /// per-request error.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact {}", path.display()))?;
        let bundle: ModelBundle = serde_json::from_str(&data)
            .with_context(|| format!("corrupt model artifact {}", path.display()))?;
        bundle.check()?;
        Ok(bundle)
    }

    fn check(&self) -> Result<()> {
        if self.classifier.weights.len() != FEATURE_COUNT {
            bail!(
                "model artifact has {} classifier weights, expected {FEATURE_COUNT}",
                self.classifier.weights.len()
            );
        }
        if self.scaler.mean.len() != FEATURE_COUNT || self.scaler.scale.len() != FEATURE_COUNT {
            bail!(
                "model artifact has scaler parameters for {} / {} features, expected {FEATURE_COUNT}",
                self.scaler.mean.len(),
                self.scaler.scale.len()
            );
        }
        if self.scaler.scale.iter().any(|s| *s == 0.0) {
            bail!("model artifact has a zero scale entry");
        }
        Ok(())
    }
}

static SHARED: OnceLock<ModelBundle> = OnceLock::new();

/// Process-wide bundle: the first caller loads, later callers reuse.
///
/// A load failure is not cached, so fixing the artifact on disk lets a
/// later call succeed.
pub fn shared(path: &Path) -> Result<&'static ModelBundle> {
    if let Some(bundle) = SHARED.get() {
        return Ok(bundle);
    }
    let bundle = ModelBundle::load(path)?;
    Ok(SHARED.get_or_init(|| bundle))
}
