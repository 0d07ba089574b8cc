use std::collections::BTreeMap;

use log::{info, warn};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::error::ClassifierError;
use super::utils::{sparse_dot, squared_norm, SparseRow};
use crate::config::SvmConfig;

/// One-vs-rest linear SVM with L2 regularization and squared hinge loss.
///
/// Each binary problem is solved in the dual by coordinate descent. The bias
/// is learned as the weight of an implicit constant feature equal to 1, so it
/// is regularized along with the other weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSvc {
    classes: Vec<String>,
    weights: Vec<Array1<f64>>,
    intercepts: Vec<f64>,
}

/// Per-sample penalty for one binary sub-problem.
struct BinaryProblem<'a> {
    rows: &'a [SparseRow],
    y: Vec<f64>,
    cost: Vec<f64>,
}

impl LinearSvc {
    /// Fits the classifier on `rows` (each with columns below `n_features`) and their labels.
    ///
    /// # Errors
    /// - `Validation` if rows and labels differ in length, a row exceeds `n_features`,
    ///   or `C` is not a positive finite number
    /// - `Build` if fewer than two distinct classes are present
    pub fn fit<S: AsRef<str>>(
        config: &SvmConfig,
        n_features: usize,
        rows: &[SparseRow],
        labels: &[S],
    ) -> Result<Self, ClassifierError> {
        if rows.len() != labels.len() {
            return Err(ClassifierError::Validation(format!(
                "Got {} rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }
        if rows.iter().flatten().any(|&(j, _)| j >= n_features) {
            return Err(ClassifierError::Validation(
                "Row contains a column outside the feature space".into(),
            ));
        }
        if !(config.c > 0.0 && config.c.is_finite()) {
            return Err(ClassifierError::Validation(format!(
                "C must be positive and finite, got {}",
                config.c
            )));
        }

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for label in labels {
            *counts.entry(label.as_ref()).or_insert(0) += 1;
        }
        if counts.len() < 2 {
            return Err(ClassifierError::Build(format!(
                "Need samples of at least 2 classes, got {}",
                counts.len()
            )));
        }

        let classes: Vec<String> = counts.keys().map(|c| c.to_string()).collect();
        let class_of: Vec<usize> = labels
            .iter()
            .map(|l| classes.binary_search_by(|c| c.as_str().cmp(l.as_ref())).unwrap_or(0))
            .collect();
        let class_weight: Vec<f64> = if config.balanced {
            let n = labels.len() as f64;
            let k = classes.len() as f64;
            counts.values().map(|&n_c| n / (k * n_c as f64)).collect()
        } else {
            vec![1.0; classes.len()]
        };

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut weights = Vec::new();
        let mut intercepts = Vec::new();

        let positives: Vec<usize> = if classes.len() == 2 {
            vec![1]
        } else {
            (0..classes.len()).collect()
        };
        for &positive in &positives {
            let binary = classes.len() == 2;
            let problem = BinaryProblem {
                rows,
                y: class_of
                    .iter()
                    .map(|&c| if c == positive { 1.0 } else { -1.0 })
                    .collect(),
                cost: class_of
                    .iter()
                    .map(|&c| {
                        if c == positive || binary {
                            config.c * class_weight[c]
                        } else {
                            config.c
                        }
                    })
                    .collect(),
            };
            let (w, b) = solve_dual_cd(&problem, n_features, config, &mut rng, &classes[positive]);
            weights.push(w);
            intercepts.push(b);
        }
        info!(
            "Fitted linear SVM on {} samples, {} features, {} classes",
            rows.len(),
            n_features,
            classes.len()
        );

        Ok(Self {
            classes,
            weights,
            intercepts,
        })
    }

    /// Raw margins, one per binary problem.
    pub fn decision_function(&self, row: &[(usize, f64)]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(w, b)| sparse_dot(w, row) + b)
            .collect()
    }

    pub fn predict(&self, row: &[(usize, f64)]) -> &str {
        let scores = self.decision_function(row);
        let idx = if self.classes.len() == 2 {
            if scores[0] > 0.0 {
                1
            } else {
                0
            }
        } else {
            scores
                .iter()
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |best, (i, &s)| if s > best.1 { (i, s) } else { best })
                .0
        };
        &self.classes[idx]
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.weights.first().map(|w| w.len()).unwrap_or(0)
    }
}

/// Dual coordinate descent for the squared-hinge SVM.
///
/// Minimizes `0.5 a'Qa - e'a` with `Q = yy'(XX' + 1) + diag(0.5 / C_i)` and
/// `a >= 0`, keeping `w = sum a_i y_i x_i` updated as coordinates move.
fn solve_dual_cd(
    problem: &BinaryProblem<'_>,
    n_features: usize,
    config: &SvmConfig,
    rng: &mut StdRng,
    label: &str,
) -> (Array1<f64>, f64) {
    let l = problem.rows.len();
    let mut w = Array1::<f64>::zeros(n_features);
    let mut bias = 0.0;
    let mut alpha = vec![0.0; l];

    let diag: Vec<f64> = problem.cost.iter().map(|&c| 0.5 / c).collect();
    let qd: Vec<f64> = problem
        .rows
        .iter()
        .zip(&diag)
        .map(|(row, d)| squared_norm(row) + 1.0 + d)
        .collect();
    let mut order: Vec<usize> = (0..l).collect();

    let mut converged = false;
    for _ in 0..config.max_iter {
        let mut pg_max = f64::NEG_INFINITY;
        let mut pg_min = f64::INFINITY;
        order.shuffle(rng);

        for &i in &order {
            let yi = problem.y[i];
            let row = &problem.rows[i];
            let g = yi * (sparse_dot(&w, row) + bias) - 1.0 + alpha[i] * diag[i];

            let pg = if alpha[i] == 0.0 { g.min(0.0) } else { g };
            pg_max = pg_max.max(pg);
            pg_min = pg_min.min(pg);

            if pg.abs() > 1e-12 {
                let old = alpha[i];
                alpha[i] = (alpha[i] - g / qd[i]).max(0.0);
                let d = (alpha[i] - old) * yi;
                for &(j, x) in row {
                    w[j] += d * x;
                }
                bias += d;
            }
        }

        if pg_max - pg_min <= config.tol {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            "Solver for class {:?} did not converge within {} iterations; consider raising max_iter",
            label, config.max_iter
        );
    }
    (w, bias)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> (Vec<SparseRow>, Vec<&'static str>) {
        let rows = vec![
            vec![(0, 1.0)],
            vec![(0, 0.9), (3, 0.1)],
            vec![(1, 1.0)],
            vec![(1, 0.8), (3, 0.2)],
            vec![(2, 1.0)],
            vec![(2, 0.7), (3, 0.3)],
        ];
        let labels = vec!["a", "a", "b", "b", "c", "c"];
        (rows, labels)
    }

    #[test]
    fn test_multiclass_fits_training_data() {
        let (rows, labels) = toy();
        let svm = LinearSvc::fit(&SvmConfig::default(), 4, &rows, &labels).unwrap();
        assert_eq!(svm.classes(), ["a", "b", "c"]);
        assert_eq!(svm.decision_function(&rows[0]).len(), 3);
        for (row, label) in rows.iter().zip(&labels) {
            assert_eq!(svm.predict(row), *label);
        }
    }

    #[test]
    fn test_binary_uses_single_hyperplane() {
        let (rows, labels) = toy();
        let svm = LinearSvc::fit(&SvmConfig::default(), 4, &rows[..4], &labels[..4]).unwrap();
        assert_eq!(svm.decision_function(&rows[0]).len(), 1);
        assert_eq!(svm.predict(&rows[0]), "a");
        assert_eq!(svm.predict(&rows[2]), "b");
    }

    #[test]
    fn test_same_seed_same_model() {
        let (rows, labels) = toy();
        let first = LinearSvc::fit(&SvmConfig::default(), 4, &rows, &labels).unwrap();
        let second = LinearSvc::fit(&SvmConfig::default(), 4, &rows, &labels).unwrap();
        assert_eq!(first.weights, second.weights);
        assert_eq!(first.intercepts, second.intercepts);
    }

    #[test]
    fn test_single_class_fails() {
        let rows = vec![vec![(0, 1.0)], vec![(1, 1.0)]];
        let result = LinearSvc::fit(&SvmConfig::default(), 2, &rows, &["a", "a"]);
        assert!(matches!(result, Err(ClassifierError::Build(_))));
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let rows = vec![vec![(0, 1.0)]];
        let result = LinearSvc::fit(&SvmConfig::default(), 1, &rows, &["a", "b"]);
        assert!(matches!(result, Err(ClassifierError::Validation(_))));
    }

    #[test]
    fn test_rejects_non_positive_or_nan_c() {
        let (rows, labels) = toy();
        for c in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SvmConfig { c, ..SvmConfig::default() };
            let result = LinearSvc::fit(&config, 4, &rows, &labels);
            assert!(matches!(result, Err(ClassifierError::Validation(_))), "C = {} accepted", c);
        }
    }
}
