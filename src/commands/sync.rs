//! Commands that walk every repository named in the configuration.

use super::Host;
use super::common::Session;
use super::fetch::fetch_into;
use super::generate::write_view;
use super::update::update_file;
use crate::Result;
use crate::aggregate::{View, ViewOptions};
use crate::codec;
use crate::github::Fetcher;
use anyhow::Context;
use chrono::Utc;
use std::io::Write;

pub async fn fetch_issue_data<H: Host>(host: &mut H, session: &Session) -> Result<()> {
    let repos = session.config.repos()?;
    let client = session.client()?;
    let fetcher = Fetcher::new(&client, session.progress(), session.config.concurrency);

    for (repo, _) in &repos {
        let data_path = session.config.data_path(repo);

        if data_path.exists() {
            update_file(host, session, &fetcher, &data_path).await?;
        } else {
            fetch_into(host, &fetcher, repo, &data_path).await?;
        }
    }

    session.print_footer(&mut host.output(), &client).await
}

pub fn generate_ghstats_data<H: Host>(host: &mut H, session: &Session) -> Result<()> {
    let today = Utc::now().date_naive();

    for (repo, repo_config) in session.config.repos()? {
        let data_path = session.config.data_path(&repo);
        if !data_path.exists() {
            writeln!(host.output(), "Skipping {repo} because there's no data saved")?;
            continue;
        }

        let snapshot = codec::load(&data_path).with_context(|| format!("loading snapshot '{data_path}'"))?;

        for &view in &repo_config.views {
            let mut options = ViewOptions::new(today);
            options.month_bound = session.config.month_bound();
            if view == View::IssueCounts {
                options.groups = repo_config.group_pairs();
            }

            let output = data_path.with_file_name(format!("{view}.json"));
            let count = write_view(view, &snapshot, &options, &output)?;
            writeln!(host.output(), "{repo}: wrote {count} series to '{output}'")?;
        }
    }

    Ok(())
}
