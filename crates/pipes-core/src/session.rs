use std::path::Path;

use crate::environment::{Environment, find_environments};
use crate::error::PipesError;

/// Refuse to run from inside an active environment or with in-project
/// environments enabled.
pub fn check_session<F>(var: F) -> Result<(), PipesError>
where
    F: Fn(&str) -> Option<String>,
{
    let set = |key: &str| var(key).filter(|v| !v.is_empty());

    if set("PIPENV_ACTIVE").is_some() {
        return Err(PipesError::ShellAlreadyActive);
    }
    if let Some(venv) = set("VIRTUAL_ENV") {
        return Err(PipesError::VirtualEnvActive(venv));
    }
    if set("PIPENV_VENV_IN_PROJECT").is_some() {
        return Err(PipesError::VenvInProjectUnsupported);
    }
    Ok(())
}

/// Scan `root`, requiring it to exist and hold at least one environment.
pub fn load_environments(root: &Path) -> Result<Vec<Environment>, PipesError> {
    if !root.is_dir() {
        return Err(PipesError::EnvironmentsDirNotFound(root.to_path_buf()));
    }
    let environments = find_environments(root)?;
    if environments.is_empty() {
        return Err(PipesError::NoEnvironments(root.to_path_buf()));
    }
    Ok(environments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(key: &'static str, value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |k| (k == key).then(|| value.to_string())
    }

    #[test]
    fn clean_session_passes() {
        assert!(check_session(|_| None).is_ok());
    }

    #[test]
    fn pipenv_shell_is_rejected() {
        let err = check_session(only("PIPENV_ACTIVE", "1")).unwrap_err();
        assert!(err.to_string().contains("shell is already active"));
    }

    #[test]
    fn active_virtualenv_is_rejected() {
        let err = check_session(only("VIRTUAL_ENV", "/envs/x")).unwrap_err();
        assert!(matches!(err, PipesError::VirtualEnvActive(ref v) if v == "/envs/x"));
        assert!(err.to_string().contains("environment is already active"));
    }

    #[test]
    fn venv_in_project_is_rejected() {
        let err = check_session(only("PIPENV_VENV_IN_PROJECT", "1")).unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn empty_values_are_ignored() {
        assert!(check_session(only("VIRTUAL_ENV", "")).is_ok());
    }

    #[test]
    fn missing_root_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_environments(&dir.path().join("fake")).unwrap_err();
        assert!(matches!(err, PipesError::EnvironmentsDirNotFound(_)));
        assert!(err.to_string().contains("could not find"));
    }

    #[test]
    fn empty_root_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("not-an-env")).unwrap();

        let err = load_environments(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no pipenv environments found"));
    }
}
