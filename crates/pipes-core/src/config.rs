use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::error::PipesError;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PIPES_CONFIG";

/// User configuration loaded from `~/.config/pipes/config.toml`.
///
/// All fields are optional; a missing file is the same as an empty one.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding pipenv environments. `WORKON_HOME` wins over this.
    pub workon_home: Option<PathBuf>,
    /// Command line used to start shells, e.g. `"zsh -l"`.
    pub shell: Option<String>,
    /// Ask `pipenv --venv` when linking before falling back to the name hash.
    #[serde(default = "default_use_pipenv")]
    pub use_pipenv: bool,
}

fn default_use_pipenv() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workon_home: None,
            shell: None,
            use_pipenv: default_use_pipenv(),
        }
    }
}

impl Config {
    /// Load the config from `PIPES_CONFIG` or the platform config directory.
    pub fn load<F>(var: F) -> Result<Self, PipesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match var(CONFIG_ENV).map(PathBuf::from).or_else(Self::config_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, PipesError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        log::debug!("loading config from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| PipesError::ConfigRead(Box::new(e)))?;
        toml::from_str(&content).map_err(|e| PipesError::ConfigRead(Box::new(e)))
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pipes").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolve the environments directory: `WORKON_HOME`, then the config
    /// value, then pipenv's platform default.
    pub fn environments_dir<F>(&self, var: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = var("WORKON_HOME").filter(|d| !d.is_empty()) {
            return Some(PathBuf::from(dir));
        }
        if let Some(dir) = &self.workon_home {
            return Some(dir.clone());
        }
        default_environments_dir(&var)
    }
}

fn default_environments_dir<F>(var: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let home = BaseDirs::new()?.home_dir().to_path_buf();
    if cfg!(windows) {
        return Some(home.join(".virtualenvs"));
    }
    let data_home = var("XDG_DATA_HOME")
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join(".local").join("share"));
    Some(data_home.join("virtualenvs"))
}
