use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// File name of the bundled dataset.
const DATASET: &str = "verb_conjugations.db";

/// Directories helper.
pub struct Dirs {
    project_dirs: ProjectDirs,
}

impl Dirs {
    /// Open directories for this project.
    pub fn open() -> Result<Dirs> {
        Ok(Dirs {
            project_dirs: directories::ProjectDirs::from("cat", "conjucat", "conjucat")
                .context("Could not figure out base directories")?,
        })
    }

    /// Get the path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.project_dirs.config_dir().join("config.toml")
    }

    /// Get the default path of the dataset.
    pub fn dataset_path(&self) -> PathBuf {
        self.project_dirs.data_dir().join(DATASET)
    }
}
