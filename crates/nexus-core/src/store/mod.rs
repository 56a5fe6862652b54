//! In-memory hospital dataset.
//!
//! The dataset is loaded once from a JSON array and never mutated afterwards,
//! so a single `Dataset` can be shared by every request handler.

mod queries;

pub use queries::*;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Hospital;

/// Dataset store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only snapshot of all hospital records, in source order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    hospitals: Vec<Hospital>,
}

impl Dataset {
    /// Build a dataset from records already in memory.
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        let dataset = Self { hospitals };
        dataset.check_capacity();
        dataset
    }

    /// Parse a dataset from a JSON array of hospital objects.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let hospitals: Vec<Hospital> = serde_json::from_str(json)?;
        Ok(Self::new(hospitals))
    }

    /// Load a dataset from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;
        log::info!(
            "Loaded {} hospitals from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Load a dataset, falling back to the executable's directory when a
    /// relative path does not exist under the working directory.
    pub fn locate_and_load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        if path.exists() || path.is_absolute() {
            return Self::load(path);
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(path)))
            .filter(|candidate| candidate.exists());

        match beside_exe {
            Some(candidate) => {
                log::debug!(
                    "{} not found in working directory, using {}",
                    path.display(),
                    candidate.display()
                );
                Self::load(candidate)
            }
            None => Self::load(path),
        }
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hospital> {
        self.hospitals.iter()
    }

    /// Available beds are trusted input; inconsistent records are only reported.
    fn check_capacity(&self) {
        for hospital in self.hospitals.iter().filter(|h| !h.is_capacity_consistent()) {
            log::warn!(
                "Hospital {} ({}) reports {} available beds above its total capacity of {}",
                hospital.id,
                hospital.name,
                hospital.available_beds,
                hospital.bed_capacity("total")
            );
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Hospital;
    type IntoIter = std::slice::Iter<'a, Hospital>;

    fn into_iter(self) -> Self::IntoIter {
        self.hospitals.iter()
    }
}

impl From<Vec<Hospital>> for Dataset {
    fn from(hospitals: Vec<Hospital>) -> Self {
        Self::new(hospitals)
    }
}
