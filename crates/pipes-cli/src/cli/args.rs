use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pipes",
    about = "Find pipenv environments and jump into their projects",
    version
)]
pub struct Cli {
    /// Project name to match (any part of it). With --link, the project
    /// directory to link instead (defaults to the current directory)
    pub query: Option<String>,

    /// List environments instead of starting a shell
    #[arg(long, short)]
    pub list: bool,

    /// Show the environments directory, interpreter versions and linked
    /// project directories
    #[arg(long, short)]
    pub verbose: bool,

    /// Output the listing as JSON (implies --list)
    #[arg(long)]
    pub json: bool,

    /// Link a project directory to the environment pipenv created for it
    #[arg(long, conflicts_with_all = ["unlink", "list", "json"])]
    pub link: bool,

    /// Remove the project directory link of the matched environment
    #[arg(long, requires = "query", conflicts_with_all = ["list", "json"])]
    pub unlink: bool,
}
