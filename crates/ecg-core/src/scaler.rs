//! Pre-fitted standardization applied to every row before inference.

use ndarray::Array2;
use serde::Deserialize;

/// Per-feature mean and scale fitted during training.
///
/// Loaded once as part of the model bundle and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerParameters {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

impl ScalerParameters {
    /// Standardize each value as `(x - mean_i) / scale_i` for its column `i`.
    ///
    /// Pure transform: same-shape output, input left untouched. Callers must
    /// validate the column count first; the bundle loader guarantees the
    /// parameter vectors match the trained feature width.
    pub fn transform(&self, data: &Array2<f32>) -> Array2<f32> {
        debug_assert_eq!(data.ncols(), self.mean.len());

        let mut out = data.clone();
        for mut row in out.rows_mut() {
            for (i, v) in row.iter_mut().enumerate() {
                *v = (*v - self.mean[i]) / self.scale[i];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn identity_scaler_passes_values_through() {
        let scaler = ScalerParameters {
            mean: vec![0.0; 4],
            scale: vec![1.0; 4],
        };
        let data = array![[0.1f32, 0.2, 0.3, 0.4]];
        assert_eq!(scaler.transform(&data), data);
    }

    #[test]
    fn standardizes_per_column() {
        let scaler = ScalerParameters {
            mean: vec![1.0, 2.0],
            scale: vec![2.0, 4.0],
        };
        let data = array![[3.0f32, 6.0], [1.0, 2.0]];
        let scaled = scaler.transform(&data);
        assert_eq!(scaled, array![[1.0f32, 1.0], [0.0, 0.0]]);
    }

    #[test]
    fn input_is_not_mutated() {
        let scaler = ScalerParameters {
            mean: vec![5.0, 5.0],
            scale: vec![2.0, 2.0],
        };
        let data = array![[7.0f32, 3.0]];
        let copy = data.clone();
        let _ = scaler.transform(&data);
        assert_eq!(data, copy);
    }
}
