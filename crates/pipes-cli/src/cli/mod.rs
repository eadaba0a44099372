pub mod args;

use std::io::IsTerminal;
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use pipes_core::config::Config;
use pipes_core::environment::{Environment, filter_environments};
use pipes_core::error::PipesError;
use pipes_core::link;
use pipes_core::marker;
use pipes_core::process::SystemRunner;
use pipes_core::session;
use pipes_core::version;

use self::args::Cli;

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    session::check_session(var)?;
    let config = Config::load(var)?;

    let home = config
        .environments_dir(var)
        .ok_or_else(|| color_eyre::eyre::eyre!("could not determine the environments directory"))?;
    if cli.verbose {
        eprintln!("PIPENV_HOME: {}", home.display());
    }

    let environments = session::load_environments(&home)?;
    log::debug!("loaded {} environments", environments.len());

    if cli.link {
        return cmd_link(&config, &environments, cli.query.as_deref());
    }

    let candidates = match cli.query.as_deref() {
        Some(query) => filter_environments(&environments, query),
        None => environments.iter().collect(),
    };

    if cli.list || cli.json {
        return cmd_list(&candidates, cli.verbose, cli.json);
    }

    match (cli.query.as_deref(), candidates.as_slice()) {
        (Some(query), []) => {
            eprintln!("No matches for '{query}'.");
            Ok(())
        }
        (Some(_), [env]) => activate(&config, env, cli.unlink),
        (query, many) => {
            if let Some(query) = query {
                eprintln!("More than one match for '{query}':");
            }
            if !is_interactive() {
                return cmd_list(many, cli.verbose, false);
            }
            match crate::picker::pick(many)? {
                Some(env) => activate(&config, env, cli.unlink),
                None => Ok(()),
            }
        }
    }
}

fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Start a shell for `env`, or clear its link when `unlink` is set.
fn activate(config: &Config, env: &Environment, unlink: bool) -> color_eyre::Result<()> {
    if unlink {
        match marker::delete(&env.envpath) {
            Some(path) => eprintln!(
                "{} for {} ({} removed)",
                "Project directory cleared".green(),
                env.project_name,
                path.display()
            ),
            None => eprintln!(
                "{} for {} (no link was set)",
                "Project directory cleared".green(),
                env.project_name
            ),
        }
        return Ok(());
    }

    let Some(project_dir) = marker::read(&env.envpath).filter(|d| !d.is_empty()) else {
        eprintln!(
            "Environment {} is not linked to a project directory.",
            env.envname.yellow()
        );
        eprintln!("Link it by running `pipes --link <project-dir>` once.");
        return Ok(());
    };

    let project_dir = PathBuf::from(project_dir);
    if !project_dir.is_dir() {
        return Err(PipesError::PathNotFound(project_dir).into());
    }

    crate::shell::launch_shell(env, &project_dir, config)
}

fn cmd_link(
    config: &Config,
    environments: &[Environment],
    dir: Option<&str>,
) -> color_eyre::Result<()> {
    let dir = match dir {
        Some(d) => PathBuf::from(d),
        None => std::env::current_dir()?,
    };
    let dir = dunce::canonicalize(&dir).map_err(|_| PipesError::PathNotFound(dir.clone()))?;
    if !dir.is_dir() {
        return Err(PipesError::NotADirectory(dir).into());
    }

    eprintln!(
        "Looking for associated environment for {}...",
        dir.display()
    );
    let env = link::find_associated(&dir, environments, &SystemRunner, config.use_pipenv)
        .ok_or_else(|| PipesError::NoAssociatedEnvironment(dir.clone()))?;

    marker::write(&env.envpath, &dir.to_string_lossy())?;
    eprintln!(
        "{}: {} -> {}",
        "Project directory set".green(),
        env.project_name.bold(),
        dir.display()
    );
    Ok(())
}

#[derive(Serialize)]
struct ListEntry<'a> {
    project_name: &'a str,
    envname: &'a str,
    envpath: &'a std::path::Path,
    binpath: &'a std::path::Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

fn list_entry(env: &Environment, probe_version: bool) -> ListEntry<'_> {
    let version = if probe_version {
        version::get_binary_version(&env.envpath, &SystemRunner)
            .map(|v| v.trim().to_string())
            .map_err(|e| log::debug!("{}: {e}", env.envname))
            .ok()
    } else {
        None
    };

    ListEntry {
        project_name: &env.project_name,
        envname: &env.envname,
        envpath: &env.envpath,
        binpath: &env.binpath,
        project_dir: marker::read(&env.envpath),
        version,
    }
}

fn cmd_list(environments: &[&Environment], verbose: bool, json: bool) -> color_eyre::Result<()> {
    let entries: Vec<ListEntry<'_>> = environments
        .iter()
        .map(|env| list_entry(env, verbose))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        eprintln!("No matching environments.");
        return Ok(());
    }

    for e in &entries {
        if verbose {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                e.project_name,
                e.version.as_deref().unwrap_or("-"),
                e.envpath.display(),
                e.binpath.display(),
                e.project_dir.as_deref().unwrap_or("-"),
            );
        } else {
            println!("{}\t{}", e.project_name, e.envpath.display());
        }
    }

    Ok(())
}
