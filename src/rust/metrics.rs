//! Held-out evaluation: accuracy and a per-class precision/recall/F1 report.

use std::collections::BTreeSet;
use std::fmt;

/// Fraction of predictions equal to the truth; 0 for empty input.
pub fn accuracy<S: AsRef<str>, T: AsRef<str>>(y_true: &[S], y_pred: &[T]) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true
        .iter()
        .zip(y_pred)
        .filter(|(t, p)| {
            let (t, p): (&str, &str) = (t.as_ref(), p.as_ref());
            t == p
        })
        .count();
    correct as f64 / y_true.len() as f64
}

/// Precision, recall, F1 and support for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Per-class scores plus accuracy, macro and support-weighted averages.
///
/// Ratios with a zero denominator are reported as 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_avg: (f64, f64, f64),
    pub weighted_avg: (f64, f64, f64),
    pub total_support: usize,
}

impl ClassificationReport {
    /// Scores `y_pred` against `y_true` over the sorted union of their labels.
    pub fn new<S: AsRef<str>, T: AsRef<str>>(y_true: &[S], y_pred: &[T]) -> Self {
        let labels: BTreeSet<&str> = y_true
            .iter()
            .map(|t| AsRef::<str>::as_ref(t))
            .chain(y_pred.iter().map(|p| AsRef::<str>::as_ref(p)))
            .collect();

        let classes: Vec<ClassMetrics> = labels
            .into_iter()
            .map(|label| {
                let mut tp = 0usize;
                let mut predicted = 0usize;
                let mut support = 0usize;
                for (t, p) in y_true.iter().zip(y_pred) {
                    let (t, p): (&str, &str) = (t.as_ref(), p.as_ref());
                    let (t, p) = (t == label, p == label);
                    tp += (t && p) as usize;
                    predicted += p as usize;
                    support += t as usize;
                }
                let precision = ratio(tp, predicted);
                let recall = ratio(tp, support);
                let f1 = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };
                ClassMetrics {
                    label: label.to_string(),
                    precision,
                    recall,
                    f1,
                    support,
                }
            })
            .collect();

        let total_support = y_true.len();
        let k = classes.len().max(1) as f64;
        let macro_avg = (
            classes.iter().map(|c| c.precision).sum::<f64>() / k,
            classes.iter().map(|c| c.recall).sum::<f64>() / k,
            classes.iter().map(|c| c.f1).sum::<f64>() / k,
        );
        let weighted = |f: fn(&ClassMetrics) -> f64| {
            if total_support == 0 {
                0.0
            } else {
                classes.iter().map(|c| f(c) * c.support as f64).sum::<f64>() / total_support as f64
            }
        };
        let weighted_avg = (
            weighted(|c| c.precision),
            weighted(|c| c.recall),
            weighted(|c| c.f1),
        );

        Self {
            accuracy: accuracy(y_true, y_pred),
            classes,
            macro_avg,
            weighted_avg,
            total_support,
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WEIGHTED: &str = "weighted avg";
        let width = self
            .classes
            .iter()
            .map(|c| c.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(WEIGHTED.len());

        writeln!(f, "{:>width$}  {:>9} {:>9} {:>9} {:>9}", "", "precision", "recall", "f1-score", "support")?;
        writeln!(f)?;
        for c in &self.classes {
            writeln!(
                f,
                "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
                c.label, c.precision, c.recall, c.f1, c.support
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:>width$}  {:>9} {:>9} {:>9.2} {:>9}", "accuracy", "", "", self.accuracy, self.total_support)?;
        let (p, r, f1) = self.macro_avg;
        writeln!(f, "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}", "macro avg", p, r, f1, self.total_support)?;
        let (p, r, f1) = self.weighted_avg;
        writeln!(f, "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}", WEIGHTED, p, r, f1, self.total_support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&["a", "b", "a", "c"], &["a", "b", "c", "c"]), 0.75);
        assert_eq!(accuracy::<&str, &str>(&[], &[]), 0.0);
    }

    #[test]
    fn test_report_scores() {
        let report = ClassificationReport::new(&["a", "a", "b", "b"], &["a", "b", "b", "b"]);
        let a = &report.classes[0];
        assert_eq!(a.label, "a");
        assert_eq!(a.precision, 1.0);
        assert_eq!(a.recall, 0.5);
        assert!((a.f1 - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(a.support, 2);

        let b = &report.classes[1];
        assert!((b.precision - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(b.recall, 1.0);
        assert_eq!(report.accuracy, 0.75);
    }

    #[test]
    fn test_predicted_only_label_has_zero_scores() {
        let report = ClassificationReport::new(&["a", "a"], &["a", "z"]);
        let z = report.classes.iter().find(|c| c.label == "z").unwrap();
        assert_eq!(z.precision, 0.0);
        assert_eq!(z.recall, 0.0);
        assert_eq!(z.f1, 0.0);
        assert_eq!(z.support, 0);
    }

    #[test]
    fn test_report_rendering() {
        let report = ClassificationReport::new(&["Shoes", "Bags"], &["Shoes", "Bags"]);
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].ends_with("precision    recall  f1-score   support"));
        assert!(lines[2].trim_start().starts_with("Bags"));
        assert!(text.contains("accuracy"));
        assert!(lines.last().unwrap().trim_start().starts_with("weighted avg"));
        assert!(lines.last().unwrap().ends_with("2"));
    }
}
