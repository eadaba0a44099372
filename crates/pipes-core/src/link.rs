use std::path::Path;

use crate::environment::Environment;
use crate::name::resolve_envname;
use crate::process::ProcessRunner;

/// Find the environment pipenv created for `project_dir`.
///
/// With `use_pipenv`, `pipenv --venv` is asked first. If pipenv is missing,
/// fails, or names a folder that isn't among `environments`, the folder name
/// is recomputed from the project path instead.
pub fn find_associated<'a>(
    project_dir: &Path,
    environments: &'a [Environment],
    runner: &dyn ProcessRunner,
    use_pipenv: bool,
) -> Option<&'a Environment> {
    if use_pipenv {
        match runner.call_pipenv_venv(project_dir) {
            Ok(out) if out.code == 0 => {
                let venv = Path::new(out.output.trim());
                let found = venv
                    .file_name()
                    .and_then(|name| environments.iter().find(|e| e.envname.as_str() == name));
                if found.is_some() {
                    return found;
                }
                log::debug!("pipenv --venv returned unknown environment {}", venv.display());
            }
            Ok(out) => log::debug!("pipenv --venv exited with {}", out.code),
            Err(e) => log::debug!("could not run pipenv: {e}"),
        }
    }

    let envname = resolve_envname(project_dir);
    log::debug!("looking for {envname} by project hash");
    environments.iter().find(|e| e.envname == envname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessOutput;
    use std::io;
    use std::path::PathBuf;

    struct FakePipenv(Option<ProcessOutput>);

    impl ProcessRunner for FakePipenv {
        fn call_python_version(&self, _binpath: &Path) -> io::Result<ProcessOutput> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "not used"))
        }

        fn call_pipenv_venv(&self, _project_dir: &Path) -> io::Result<ProcessOutput> {
            self.0
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "pipenv"))
        }
    }

    fn env(envname: &str) -> Environment {
        let envpath = PathBuf::from("/envs").join(envname);
        Environment {
            binpath: envpath.join("bin").join("python"),
            envpath,
            envname: envname.to_string(),
            project_name: crate::name::get_project_name(envname)
                .unwrap_or_default()
                .to_string(),
        }
    }

    #[test]
    fn uses_pipenv_answer() {
        let envs = vec![env("alpha-AAAAAAAA"), env("beta-BBBBBBBB")];
        let runner = FakePipenv(Some(ProcessOutput {
            output: "/somewhere/else/beta-BBBBBBBB\n".to_string(),
            code: 0,
        }));

        let found = find_associated(Path::new("/work/beta"), &envs, &runner, true);
        assert_eq!(found.map(|e| e.envname.as_str()), Some("beta-BBBBBBBB"));
    }

    #[test]
    fn falls_back_to_hash_when_pipenv_missing() {
        let project = Path::new("/work/myproj");
        let envs = vec![env("alpha-AAAAAAAA"), env(&resolve_envname(project))];

        let found = find_associated(project, &envs, &FakePipenv(None), true);
        assert_eq!(found.map(|e| e.project_name.as_str()), Some("myproj"));
    }

    #[test]
    fn falls_back_to_hash_when_pipenv_fails() {
        let project = Path::new("/work/myproj");
        let envs = vec![env(&resolve_envname(project))];
        let runner = FakePipenv(Some(ProcessOutput {
            output: String::new(),
            code: 1,
        }));

        assert!(find_associated(project, &envs, &runner, true).is_some());
    }

    #[test]
    fn skips_pipenv_when_disabled() {
        let envs = vec![env("beta-BBBBBBBB")];
        let runner = FakePipenv(Some(ProcessOutput {
            output: "/envs/beta-BBBBBBBB".to_string(),
            code: 0,
        }));

        assert!(find_associated(Path::new("/work/beta"), &envs, &runner, false).is_none());
    }

    #[test]
    fn nothing_associated() {
        let envs = vec![env("alpha-AAAAAAAA")];
        assert!(find_associated(Path::new("/work/zzz"), &envs, &FakePipenv(None), true).is_none());
    }
}
