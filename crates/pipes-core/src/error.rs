use std::path::PathBuf;

/// Why the interpreter could not be located inside an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocateFailure {
    #[error("could not find python binary path")]
    UnrecognizedLayout,

    #[error("could not find python binary")]
    MissingBinary,
}

/// Errors produced by core `pipes` operations.
#[derive(Debug, thiserror::Error)]
pub enum PipesError {
    #[error("{reason}: {}", envpath.display())]
    BinaryNotLocatable {
        envpath: PathBuf,
        reason: LocateFailure,
    },

    #[error("could not get binary version")]
    VersionProbeFailed,

    #[error("could not find environments directory: {}", .0.display())]
    EnvironmentsDirNotFound(PathBuf),

    #[error("no pipenv environments found in {}", .0.display())]
    NoEnvironments(PathBuf),

    #[error("a pipenv shell is already active")]
    ShellAlreadyActive,

    #[error("a virtual environment is already active: {0}")]
    VirtualEnvActive(String),

    #[error("PIPENV_VENV_IN_PROJECT is not supported by pipes")]
    VenvInProjectUnsupported,

    #[error("no virtualenv has been created for {}", .0.display())]
    NoAssociatedEnvironment(PathBuf),

    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read config: {0}")]
    ConfigRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to scan environments: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
