use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::error::ClassifierError;
use super::features::{TitleFeatures, NUM_FEATURES};

/// Maps each engineered feature onto [0, 1] using the bounds seen during fitting.
///
/// Constant columns get a unit range so they map to 0. Values outside the
/// fitted bounds are not clipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    data_min: Array1<f64>,
    data_max: Array1<f64>,
}

impl MinMaxScaler {
    pub fn fit(rows: &[TitleFeatures]) -> Result<Self, ClassifierError> {
        if rows.is_empty() {
            return Err(ClassifierError::Build("Cannot fit scaler on zero rows".into()));
        }

        let mut data_min = Array1::from_elem(NUM_FEATURES, f64::INFINITY);
        let mut data_max = Array1::from_elem(NUM_FEATURES, f64::NEG_INFINITY);
        for row in rows {
            for (j, x) in row.to_array().into_iter().enumerate() {
                data_min[j] = data_min[j].min(x);
                data_max[j] = data_max[j].max(x);
            }
        }

        Ok(Self { data_min, data_max })
    }

    pub fn transform(&self, features: &TitleFeatures) -> [f64; NUM_FEATURES] {
        let mut scaled = features.to_array();
        for (j, x) in scaled.iter_mut().enumerate() {
            let range = self.data_max[j] - self.data_min[j];
            let range = if range == 0.0 { 1.0 } else { range };
            *x = (*x - self.data_min[j]) / range;
        }
        scaled
    }

    pub fn data_min(&self) -> &Array1<f64> {
        &self.data_min
    }

    pub fn data_max(&self) -> &Array1<f64> {
        &self.data_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::features::extract;

    #[test]
    fn test_scales_to_unit_interval() {
        let rows = vec![extract("ab"), extract("abcd efgh 12")];
        let scaler = MinMaxScaler::fit(&rows).unwrap();

        let low = scaler.transform(&rows[0]);
        let high = scaler.transform(&rows[1]);
        assert_eq!(low[0], 0.0);
        assert_eq!(high[0], 1.0);
        assert_eq!(high[2], 1.0);
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let rows = vec![extract("lamp"), extract("desk")];
        let scaler = MinMaxScaler::fit(&rows).unwrap();
        assert_eq!(scaler.transform(&rows[0]), [0.0; NUM_FEATURES]);
    }

    #[test]
    fn test_does_not_clip() {
        let rows = vec![extract("ab"), extract("abcd")];
        let scaler = MinMaxScaler::fit(&rows).unwrap();
        let scaled = scaler.transform(&extract("abcdef"));
        assert_eq!(scaled[0], 2.0);
    }

    #[test]
    fn test_empty_fit_fails() {
        assert!(MinMaxScaler::fit(&[]).is_err());
    }
}
