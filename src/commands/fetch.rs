use super::Host;
use super::common::{Session, ensure_parent_dir, fetch_start};
use crate::Result;
use crate::codec;
use crate::github::{Fetcher, GitHubClient};
use crate::model::Repo;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Repository to fetch, as `owner/name`
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Repo,

    /// Where to save the data file
    #[arg(value_name = "OUTPUT")]
    pub output: Utf8PathBuf,
}

pub async fn fetch<H: Host>(host: &mut H, session: &Session, args: &FetchArgs) -> Result<()> {
    let client = session.client()?;
    let fetcher = Fetcher::new(&client, session.progress(), session.config.concurrency);

    fetch_into(host, &fetcher, &args.repo, &args.output).await?;
    session.print_footer(&mut host.output(), &client).await
}

/// Fully fetch `repo` and save the snapshot to `output`.
pub async fn fetch_into<H: Host>(host: &mut H, fetcher: &Fetcher<'_, GitHubClient>, repo: &Repo, output: &Utf8Path) -> Result<()> {
    writeln!(host.output(), "Fetching all issues and pull requests of {repo}")?;

    let snapshot = fetcher.full_fetch(repo, fetch_start()).await?;

    ensure_parent_dir(output)?;
    codec::save(output, &snapshot).with_context(|| format!("saving snapshot '{output}'"))?;

    writeln!(
        host.output(),
        "Saved {} issues and pull requests to '{output}'",
        snapshot.issues().len()
    )?;

    Ok(())
}
