use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use color_eyre::eyre::bail;
use colored::Colorize;

use pipes_core::config::Config;
use pipes_core::environment::Environment;

fn default_shell() -> &'static str {
    if cfg!(windows) { "cmd.exe" } else { "sh" }
}

/// Pick the shell command line: config, then `$SHELL`, then the platform
/// default.
fn shell_command(configured: Option<&str>, login_shell: Option<&str>) -> String {
    [configured, login_shell]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(default_shell())
        .to_string()
}

/// `dir` followed by the entries of `current`.
fn prepend_path(dir: &Path, current: Option<OsString>) -> Result<OsString, env::JoinPathsError> {
    let mut paths = vec![dir.to_path_buf()];
    if let Some(current) = current {
        paths.extend(env::split_paths(&current));
    }
    env::join_paths(paths)
}

/// Run an interactive shell with `environment` activated, starting in
/// `project_dir`. Returns once the user exits the shell.
pub fn launch_shell(
    environment: &Environment,
    project_dir: &Path,
    config: &Config,
) -> color_eyre::Result<()> {
    let login_shell = env::var("SHELL").ok();
    let command = shell_command(config.shell.as_deref(), login_shell.as_deref());
    let words = shell_words::split(&command)?;
    let Some((program, args)) = words.split_first() else {
        bail!("empty shell command: {command:?}");
    };

    let bin_dir = environment
        .binpath
        .parent()
        .unwrap_or(environment.envpath.as_path());
    let path = prepend_path(bin_dir, env::var_os("PATH"))?;

    eprintln!(
        "{} {} in {}",
        "Starting pipes shell for".green(),
        environment.project_name.bold(),
        project_dir.display()
    );
    log::debug!("running {program} {args:?} with VIRTUAL_ENV={}", environment.envpath.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(project_dir)
        .env("VIRTUAL_ENV", &environment.envpath)
        .env("PIPENV_ACTIVE", "1")
        .env("PATH", path)
        .env_remove("PYTHONHOME")
        .status()?;

    if !status.success() {
        log::warn!("shell exited with code: {:?}", status.code());
    }

    eprintln!("{}", "Terminating pipes shell...".dimmed());
    Ok(())
}
