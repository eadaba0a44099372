use std::path::Path;

use crate::error::PipesError;
use crate::locate::find_binary;
use crate::process::ProcessRunner;

/// Ask an environment's interpreter for its version string, e.g.
/// `Python 3.12.1`. The output is returned untouched.
pub fn get_binary_version(
    envpath: &Path,
    runner: &dyn ProcessRunner,
) -> Result<String, PipesError> {
    let binpath = find_binary(envpath)?;
    let probe = runner.call_python_version(&binpath)?;
    if probe.code == 0 {
        Ok(probe.output)
    } else {
        log::debug!(
            "{} --version exited with {}",
            binpath.display(),
            probe.code
        );
        Err(PipesError::VersionProbeFailed)
    }
}
