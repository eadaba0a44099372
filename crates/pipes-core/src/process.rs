use std::io;
use std::path::Path;
use std::process::Command;

/// Captured text and exit code of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub output: String,
    pub code: i32,
}

/// Subprocess calls the core depends on.
///
/// Kept behind a trait so the version probe and environment association can
/// be exercised without a python or pipenv installation.
pub trait ProcessRunner {
    /// Run `<binpath> --version`.
    fn call_python_version(&self, binpath: &Path) -> io::Result<ProcessOutput>;

    /// Run `pipenv --venv` from `project_dir`.
    fn call_pipenv_venv(&self, project_dir: &Path) -> io::Result<ProcessOutput>;
}

/// Runs the real executables with [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn call_python_version(&self, binpath: &Path) -> io::Result<ProcessOutput> {
        let out = Command::new(binpath).arg("--version").output()?;
        // Python 2 reports its version on stderr.
        let text = if out.stdout.is_empty() {
            out.stderr
        } else {
            out.stdout
        };
        Ok(ProcessOutput {
            output: String::from_utf8_lossy(&text).into_owned(),
            code: out.status.code().unwrap_or(-1),
        })
    }

    fn call_pipenv_venv(&self, project_dir: &Path) -> io::Result<ProcessOutput> {
        let out = Command::new("pipenv")
            .arg("--venv")
            .current_dir(project_dir)
            .env("PIPENV_IGNORE_VIRTUALENVS", "1")
            .output()?;
        Ok(ProcessOutput {
            output: String::from_utf8_lossy(&out.stdout).trim().to_string(),
            code: out.status.code().unwrap_or(-1),
        })
    }
}
