//! Loading the product CSV and splitting it into train and test partitions.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::classifier::ClassifierError;
use crate::config::SplitConfig;

pub const TITLE_COLUMN: &str = "Product Title";
pub const LABEL_COLUMN: &str = "Category_Label";

/// Header as it appears in the CSV; renamed to [`LABEL_COLUMN`] on load.
const RAW_LABEL_COLUMN: &str = "Category Label";

/// Cell values treated as missing, matching the usual spreadsheet/pandas markers.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parallel columns of product titles and their category labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub titles: Vec<String>,
    pub labels: Vec<String>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Number of rows per label, keyed in sorted label order.
    pub fn class_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for label in &self.labels {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
        counts
    }

    fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            titles: indices.iter().map(|&i| self.titles[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i].clone()).collect(),
        }
    }
}

/// Reads a product CSV from disk.
///
/// # Errors
/// - `Io` if the file cannot be opened
/// - `Csv` if the file is not valid CSV
/// - `MissingColumn` if "Product Title" or "Category Label" is absent
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Dataset, ClassifierError> {
    let path = path.as_ref();
    info!("Loading products from {:?}", path);
    let file = File::open(path)?;
    read_products(file)
}

/// Reads product rows from any CSV source.
///
/// Header names are trimmed, extra columns are ignored and rows with a
/// missing title or label are dropped.
pub fn read_products<R: Read>(reader: R) -> Result<Dataset, ClassifierError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| {
            let h = h.trim_start_matches('\u{feff}').trim();
            if h == RAW_LABEL_COLUMN {
                LABEL_COLUMN.to_string()
            } else {
                h.to_string()
            }
        })
        .collect();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ClassifierError::MissingColumn(name.to_string()))
    };
    let title_idx = column(TITLE_COLUMN)?;
    let label_idx = column(LABEL_COLUMN)?;

    let mut dataset = Dataset::default();
    let mut dropped = 0usize;
    for record in rdr.records() {
        let record = record?;
        match (present(record.get(title_idx)), present(record.get(label_idx))) {
            (Some(title), Some(label)) => {
                dataset.titles.push(title.to_string());
                dataset.labels.push(label.to_string());
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("Dropped {} rows with a missing title or label", dropped);
    }
    info!("Loaded {} rows across {} classes", dataset.len(), dataset.class_counts().len());
    Ok(dataset)
}

fn present(cell: Option<&str>) -> Option<&str> {
    cell.filter(|c| !NA_VALUES.contains(c))
}

/// Splits `dataset` into `(train, test)` while preserving label proportions.
///
/// The test partition holds `ceil(test_size * n)` rows. Per-class test counts
/// are proportional to class frequency, with leftover rows going to the
/// classes with the largest fractional share. Both partitions are shuffled
/// with a generator seeded from `config.seed`.
///
/// # Errors
/// `Split` if `test_size` is outside (0, 1), any class has fewer than 2 rows,
/// or either partition would be smaller than the number of classes.
pub fn stratified_split(dataset: &Dataset, config: &SplitConfig) -> Result<(Dataset, Dataset), ClassifierError> {
    if !(config.test_size > 0.0 && config.test_size < 1.0) {
        return Err(ClassifierError::Split(format!(
            "test_size must lie strictly between 0 and 1, got {}",
            config.test_size
        )));
    }

    let n = dataset.len();
    let counts = dataset.class_counts();
    let n_classes = counts.len();
    if let Some((label, &smallest)) = counts.iter().min_by_key(|&(_, c)| *c) {
        if smallest < 2 {
            return Err(ClassifierError::Split(format!(
                "The least populated class {:?} has only {} member(s); every class needs at least 2",
                label, smallest
            )));
        }
    } else {
        return Err(ClassifierError::Split("Cannot split an empty dataset".into()));
    }

    let n_test = (config.test_size * n as f64).ceil() as usize;
    let n_train = n - n_test;
    if n_train < n_classes {
        return Err(ClassifierError::Split(format!(
            "Train size {} is smaller than the number of classes {}",
            n_train, n_classes
        )));
    }
    if n_test < n_classes {
        return Err(ClassifierError::Split(format!(
            "Test size {} is smaller than the number of classes {}",
            n_test, n_classes
        )));
    }

    let class_sizes: Vec<usize> = counts.values().copied().collect();
    let test_sizes = approximate_mode(&class_sizes, n, n_test);

    let mut members: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, label) in dataset.labels.iter().enumerate() {
        members.entry(label.as_str()).or_default().push(i);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut train_idx = Vec::with_capacity(n_train);
    let mut test_idx = Vec::with_capacity(n_test);
    for (mut indices, take) in members.into_values().zip(test_sizes) {
        indices.shuffle(&mut rng);
        test_idx.extend_from_slice(&indices[..take]);
        train_idx.extend_from_slice(&indices[take..]);
    }
    train_idx.shuffle(&mut rng);
    test_idx.shuffle(&mut rng);

    info!("Split {} rows into {} train / {} test", n, train_idx.len(), test_idx.len());
    Ok((dataset.select(&train_idx), dataset.select(&test_idx)))
}

/// Distributes `draws` over classes proportionally to `counts`, rounding by
/// largest remainder and never exceeding a class's size.
fn approximate_mode(counts: &[usize], total: usize, draws: usize) -> Vec<usize> {
    let exact: Vec<f64> = counts
        .iter()
        .map(|&c| draws as f64 * c as f64 / total as f64)
        .collect();
    let mut alloc: Vec<usize> = exact.iter().map(|x| x.floor() as usize).collect();
    let mut remaining = draws.saturating_sub(alloc.iter().sum());

    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
    });
    while remaining > 0 {
        let before = remaining;
        for &i in &order {
            if remaining == 0 {
                break;
            }
            if alloc[i] < counts[i] {
                alloc[i] += 1;
                remaining -= 1;
            }
        }
        if remaining == before {
            break;
        }
    }
    alloc
}
