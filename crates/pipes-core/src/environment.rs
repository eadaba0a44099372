use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::PipesError;
use crate::locate::find_binary;
use crate::name::get_project_name;

/// A pipenv environment found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub envpath: PathBuf,
    pub envname: String,
    pub project_name: String,
    pub binpath: PathBuf,
}

impl Environment {
    /// Case-insensitive substring match against the project name.
    pub fn matches(&self, query: &str) -> bool {
        self.project_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// List the environments under `root`, sorted by folder name.
///
/// Folders whose names don't carry a pipenv hash suffix are skipped. A folder
/// that does but has no recognizable interpreter fails the whole scan.
pub fn find_environments(root: &Path) -> Result<Vec<Environment>, PipesError> {
    if !std::fs::metadata(root)?.is_dir() {
        return Err(PipesError::NotADirectory(root.to_path_buf()));
    }

    let mut environments = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let envpath = entry.path();
        if !envpath.is_dir() {
            continue;
        }

        let Some(envname) = entry.file_name().to_str() else {
            log::debug!("skipping non-utf8 folder {}", envpath.display());
            continue;
        };
        let Some(project_name) = get_project_name(envname) else {
            log::debug!("skipping {envname}: not a pipenv environment name");
            continue;
        };

        let binpath = find_binary(envpath)?;
        environments.push(Environment {
            envpath: envpath.to_path_buf(),
            envname: envname.to_string(),
            project_name: project_name.to_string(),
            binpath,
        });
    }

    log::debug!(
        "found {} environments in {}",
        environments.len(),
        root.display()
    );
    Ok(environments)
}

/// Environments whose project name contains `query`, in scan order.
pub fn filter_environments<'a>(
    environments: &'a [Environment],
    query: &str,
) -> Vec<&'a Environment> {
    environments.iter().filter(|e| e.matches(query)).collect()
}
