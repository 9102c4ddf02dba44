use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Visit;
use crate::utils::{self, PathExt};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read \"{}\"", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid toml")]
    Toml(#[from] toml::de::Error),
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("unsupported file \"{}\", expected a .toml or .json file", .path.display())]
    UnsupportedExtension { path: PathBuf },
}

/// A list of visits as they are submitted for scheduling.
///
/// ```toml
/// [[visits]]
/// id = 1
/// pet_id = 7
/// date = "2024-01-08"
/// description = "rabies shot"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VisitsFile {
    #[serde(default)]
    visits: Vec<Visit>,
}

impl VisitsFile {
    pub fn from_toml_str(input: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Reads the file, the format is chosen by its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let parse: fn(&str) -> Result<Self, LoadError> = {
            if path.has_extension("toml") {
                Self::from_toml_str
            } else if path.has_extension("json") {
                Self::from_json_str
            } else {
                return Err(LoadError::UnsupportedExtension {
                    path: path.to_path_buf(),
                });
            }
        };

        let contents = utils::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file = parse(&contents)?;
        info!("loaded {} visits from \"{}\"", file.len(), path.display());

        Ok(file)
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    #[must_use]
    pub fn into_visits(self) -> Vec<Visit> {
        self.visits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}
