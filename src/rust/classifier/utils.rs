use ndarray::Array1;

/// A sparse feature row as `(column, value)` pairs sorted by column.
pub type SparseRow = Vec<(usize, f64)>;

/// Scales a sparse row to unit L2 norm in place; all-zero rows are left untouched.
pub(crate) fn normalize_row(row: &mut SparseRow) {
    let norm: f64 = row.iter().map(|&(_, x)| x * x).sum::<f64>().sqrt();
    if norm > 1e-10 {
        for (_, x) in row.iter_mut() {
            *x /= norm;
        }
    }
}

pub(crate) fn sparse_dot(weights: &Array1<f64>, row: &[(usize, f64)]) -> f64 {
    row.iter().map(|&(i, x)| weights[i] * x).sum()
}

pub(crate) fn squared_norm(row: &[(usize, f64)]) -> f64 {
    row.iter().map(|&(_, x)| x * x).sum()
}
