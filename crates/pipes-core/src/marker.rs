//! The `.project` marker file.
//!
//! pipenv records the project directory an environment belongs to in a
//! single-line file at the environment root. `pipes` reads it to know where to
//! start a shell, writes it on `--link` and removes it on `--unlink`. A missing
//! marker is the normal "not linked yet" state, so reads and deletes report it
//! as `None` instead of failing.

use std::io;
use std::path::{Path, PathBuf};

/// Name of the marker file inside an environment.
pub const PROJECT_FILENAME: &str = ".project";

/// Location of the marker file for an environment.
pub fn project_dir_filepath(envpath: &Path) -> PathBuf {
    envpath.join(PROJECT_FILENAME)
}

/// Read the linked project directory, trimmed. `None` when there is no
/// readable marker.
pub fn read(envpath: &Path) -> Option<String> {
    let path = project_dir_filepath(envpath);
    match std::fs::read_to_string(&path) {
        Ok(content) => Some(content.trim().to_string()),
        Err(e) => {
            log::debug!("no project dir for {}: {e}", envpath.display());
            None
        }
    }
}

/// Link an environment to `project_dir`, replacing any previous link.
pub fn write(envpath: &Path, project_dir: &str) -> io::Result<()> {
    std::fs::write(project_dir_filepath(envpath), project_dir)
}

/// Remove the link, returning the marker path if one was removed.
pub fn delete(envpath: &Path) -> Option<PathBuf> {
    let path = project_dir_filepath(envpath);
    match std::fs::remove_file(&path) {
        Ok(()) => Some(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("could not remove {}: {e}", path.display());
            None
        }
    }
}
