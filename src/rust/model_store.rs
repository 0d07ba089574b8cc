//! Saving and loading fitted classifiers.
//!
//! A model file is a bincode-encoded [`ModelFile`] envelope. The envelope
//! records which feature definition the classifier was trained against and a
//! SHA-256 of the encoded classifier, and both are checked before the payload
//! is decoded.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::classifier::{Classifier, FEATURE_NAMES, FEATURE_SCHEMA_VERSION};

/// Identifies prodcat model files.
pub const MAGIC: &str = "PRODCAT";

/// Version of the envelope layout itself.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("Not a model file: {0}")]
    InvalidFormat(String),
    #[error("Unsupported model format version {found} (expected {expected})")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("Model was trained with feature schema {found:?}, this build uses {expected:?}")]
    SchemaMismatch { expected: String, found: String },
    #[error("Hash mismatch: expected {expected}, got {actual} for model payload")]
    HashMismatch { expected: String, actual: String },
}

/// On-disk envelope around an encoded classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub magic: String,
    pub format_version: u32,
    pub feature_schema_version: u32,
    pub feature_names: Vec<String>,
    /// Hex SHA-256 of `payload`
    pub checksum: String,
    pub payload: Vec<u8>,
}

impl ModelFile {
    pub fn wrap(classifier: &Classifier) -> Result<Self, ModelError> {
        let payload = bincode::serialize(classifier)?;
        Ok(Self {
            magic: MAGIC.to_string(),
            format_version: FORMAT_VERSION,
            feature_schema_version: FEATURE_SCHEMA_VERSION,
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            checksum: sha256_hex(&payload),
            payload,
        })
    }

    /// Checks the envelope against this build and decodes the classifier.
    pub fn unwrap_classifier(&self) -> Result<Classifier, ModelError> {
        if self.magic != MAGIC {
            return Err(ModelError::InvalidFormat(format!("unexpected magic {:?}", self.magic)));
        }
        if self.format_version != FORMAT_VERSION {
            return Err(ModelError::VersionMismatch {
                expected: FORMAT_VERSION,
                found: self.format_version,
            });
        }
        if self.feature_schema_version != FEATURE_SCHEMA_VERSION || self.feature_names != FEATURE_NAMES {
            return Err(ModelError::SchemaMismatch {
                expected: format!("v{} {:?}", FEATURE_SCHEMA_VERSION, FEATURE_NAMES),
                found: format!("v{} {:?}", self.feature_schema_version, self.feature_names),
            });
        }

        let actual = sha256_hex(&self.payload);
        if actual != self.checksum {
            return Err(ModelError::HashMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }

        Ok(bincode::deserialize(&self.payload)?)
    }
}

/// Writes `classifier` to `path`, creating parent directories as needed.
pub fn save_classifier<P: AsRef<Path>>(path: P, classifier: &Classifier) -> Result<(), ModelError> {
    let path = path.as_ref();
    let bytes = bincode::serialize(&ModelFile::wrap(classifier)?)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    log::info!("Writing {} bytes to {:?}", bytes.len(), path);
    fs::write(path, bytes)?;
    Ok(())
}

/// Reads and verifies a classifier written by [`save_classifier`].
pub fn load_classifier<P: AsRef<Path>>(path: P) -> Result<Classifier, ModelError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    log::info!("Read {} bytes from {:?}", bytes.len(), path);

    let file: ModelFile = bincode::deserialize(&bytes).map_err(|e| {
        log::error!("Failed to decode model envelope: {}", e);
        ModelError::InvalidFormat(e.to_string())
    })?;
    let classifier = file.unwrap_classifier().map_err(|e| {
        log::error!("Rejected model file {:?}: {}", path, e);
        e
    })?;

    log::info!("Loaded classifier with {} classes", classifier.classes().len());
    Ok(classifier)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
