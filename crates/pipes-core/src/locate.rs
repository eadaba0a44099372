use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{LocateFailure, PipesError};

/// An interpreter layout inside an environment: the folder whose presence
/// identifies the layout and the interpreter's file name within it.
struct Layout {
    folder: &'static str,
    binary: &'static str,
}

/// Layouts in priority order. The first folder present decides the candidate.
const LAYOUTS: &[Layout] = &[
    Layout {
        folder: "bin",
        binary: "python",
    },
    Layout {
        folder: "Scripts",
        binary: "python.exe",
    },
];

/// Find the python interpreter inside an environment.
pub fn find_binary(envpath: &Path) -> Result<PathBuf, PipesError> {
    let entries = std::fs::read_dir(envpath)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<Result<HashSet<OsString>, _>>()?;

    let layout = LAYOUTS
        .iter()
        .find(|l| entries.contains(OsStr::new(l.folder)))
        .ok_or_else(|| PipesError::BinaryNotLocatable {
            envpath: envpath.to_path_buf(),
            reason: LocateFailure::UnrecognizedLayout,
        })?;

    let binpath = envpath.join(layout.folder).join(layout.binary);
    if binpath.exists() {
        Ok(binpath)
    } else {
        Err(PipesError::BinaryNotLocatable {
            envpath: envpath.to_path_buf(),
            reason: LocateFailure::MissingBinary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn reason(err: PipesError) -> LocateFailure {
        match err {
            PipesError::BinaryNotLocatable { reason, .. } => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn finds_posix_layout() {
        let env = tempfile::tempdir().unwrap();
        fs::create_dir(env.path().join("bin")).unwrap();
        fs::write(env.path().join("bin/python"), "").unwrap();

        let binpath = find_binary(env.path()).unwrap();
        assert_eq!(binpath, env.path().join("bin").join("python"));
    }

    #[test]
    fn finds_windows_layout() {
        let env = tempfile::tempdir().unwrap();
        fs::create_dir(env.path().join("Scripts")).unwrap();
        fs::write(env.path().join("Scripts").join("python.exe"), "").unwrap();

        let binpath = find_binary(env.path()).unwrap();
        assert_eq!(binpath, env.path().join("Scripts").join("python.exe"));
    }

    #[test]
    fn posix_layout_takes_priority() {
        let env = tempfile::tempdir().unwrap();
        fs::create_dir(env.path().join("bin")).unwrap();
        fs::create_dir(env.path().join("Scripts")).unwrap();
        fs::write(env.path().join("Scripts").join("python.exe"), "").unwrap();

        // `bin` wins even though only the Windows binary exists.
        let err = find_binary(env.path()).unwrap_err();
        assert_eq!(reason(err), LocateFailure::MissingBinary);
    }

    #[test]
    fn unknown_layout_is_reported() {
        let env = tempfile::tempdir().unwrap();
        fs::create_dir(env.path().join("lib")).unwrap();

        let err = find_binary(env.path()).unwrap_err();
        assert!(err.to_string().contains("could not find python binary path"));
        assert_eq!(reason(err), LocateFailure::UnrecognizedLayout);
    }

    #[test]
    fn missing_binary_is_reported() {
        let env = tempfile::tempdir().unwrap();
        fs::create_dir(env.path().join("bin")).unwrap();

        let err = find_binary(env.path()).unwrap_err();
        assert_eq!(reason(err), LocateFailure::MissingBinary);
    }

    #[test]
    fn missing_envpath_is_an_io_error() {
        let env = tempfile::tempdir().unwrap();
        let err = find_binary(&env.path().join("gone")).unwrap_err();
        assert!(matches!(err, PipesError::Io(_)));
    }
}
