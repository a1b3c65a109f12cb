use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::bounding_box::BoundingBox;

#[derive(Debug, Error)]
pub enum HazardSourceError {
    #[error("Failed to read hazard file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse hazard file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything able to list the hazard regions that are active right now.
pub trait HazardSource: Send + Sync {
    fn fetch_hazards(&self) -> Result<Vec<BoundingBox>, HazardSourceError>;
}

/// Hazards read from a JSON file of `[lon1, lat1, lon2, lat2]` arrays.
///
/// The file is read again on every call so updates are picked up without a
/// restart.
pub struct FileHazardSource {
    path: PathBuf,
}

impl FileHazardSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HazardSource for FileHazardSource {
    fn fetch_hazards(&self) -> Result<Vec<BoundingBox>, HazardSourceError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| HazardSourceError::Read {
                path: self.path.clone(),
                source,
            })?;

        let hazards: Vec<BoundingBox> =
            serde_json::from_str(&content).map_err(|source| HazardSourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded {} hazards from {:?}", hazards.len(), self.path);

        Ok(hazards)
    }
}

/// Fixed set of hazards, held in memory.
#[derive(Default)]
pub struct StaticHazardSource {
    hazards: Vec<BoundingBox>,
}

impl StaticHazardSource {
    pub fn new(hazards: Vec<BoundingBox>) -> Self {
        Self { hazards }
    }
}

impl HazardSource for StaticHazardSource {
    fn fetch_hazards(&self) -> Result<Vec<BoundingBox>, HazardSourceError> {
        Ok(self.hazards.clone())
    }
}
