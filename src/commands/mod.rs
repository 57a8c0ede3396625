//! Command-line interface and orchestration.

mod color_mode;
mod common;
mod fetch;
mod generate;
mod host;
mod init;
mod sync;
mod update;

pub use color_mode::ColorMode;
pub use host::Host;

use crate::Result;
use crate::config::Config;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use common::Session;
use fetch::FetchArgs;
use generate::GenerateArgs;
use init::InitArgs;
use std::ffi::OsString;
use std::io::Write;
use update::UpdateArgs;

#[derive(Parser, Debug)]
#[command(name = "ghstats", version, about = "Snapshot GitHub issues and pull requests and chart them over time")]
struct Cli {
    #[command(subcommand)]
    command: GhstatsCommand,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(clap::Args, Debug)]
struct GlobalArgs {
    /// Path to the configuration file (defaults to `ghstats.toml` in the current directory)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<Utf8PathBuf>,

    /// GitHub API key or personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Base URL of the GitHub API, for GitHub Enterprise installations
    #[arg(long, value_name = "URL", env = "GHSTATS_API_URL", global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// When to use colored output
    #[arg(long, value_name = "WHEN", value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,
}

#[derive(Subcommand, Debug)]
enum GhstatsCommand {
    /// Fetch every issue and pull request of a repository into a new data file
    Fetch(FetchArgs),

    /// Bring existing data files up to date
    Update(UpdateArgs),

    /// Generate a chart series file from a data file
    Generate(GenerateArgs),

    /// Fetch or update the data of every configured repository
    FetchIssueData,

    /// Generate the configured views of every configured repository
    GenerateGhstatsData,

    /// Print the directory data files are kept in
    BasePath,

    /// Write a default configuration file
    Init(InitArgs),
}

/// Parse `args` and run the selected command, reporting the outcome through `host`.
pub async fn run<H, I, T>(host: &mut H, args: I)
where
    H: Host,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            if e.use_stderr() {
                let _ = write!(host.error(), "{e}");
                host.exit(2);
            } else {
                let _ = write!(host.output(), "{e}");
                host.exit(0);
            }
            return;
        }
    };

    init_logging(cli.global.verbose);

    match dispatch(host, cli).await {
        Ok(()) => host.exit(0),
        Err(e) => {
            let _ = writeln!(host.error(), "error: {e:#}");
            host.exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };

    // a second initialization only happens when `run` is called repeatedly in-process
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

async fn dispatch<H: Host>(host: &mut H, cli: Cli) -> Result<()> {
    let GlobalArgs {
        config, api_key, api_url, color, ..
    } = cli.global;

    let session = || -> Result<Session> { Ok(Session::new(Config::load(config.as_deref())?, api_key, api_url, color)) };

    match cli.command {
        GhstatsCommand::Init(args) => init::init_config(host, &args),
        GhstatsCommand::Fetch(args) => fetch::fetch(host, &session()?, &args).await,
        GhstatsCommand::Update(args) => update::update(host, &session()?, &args).await,
        GhstatsCommand::Generate(args) => generate::generate(host, &session()?, &args),
        GhstatsCommand::FetchIssueData => sync::fetch_issue_data(host, &session()?).await,
        GhstatsCommand::GenerateGhstatsData => sync::generate_ghstats_data(host, &session()?),
        GhstatsCommand::BasePath => {
            writeln!(host.output(), "{}", session()?.config.base_path)?;
            Ok(())
        }
    }
}
