use super::Host;
use super::common::{Session, fetch_start};
use crate::Result;
use crate::codec;
use crate::github::{Fetcher, GitHubClient, UpdateOutcome};
use crate::reconcile::{Change, ChangeKind};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Data files to bring up to date
    #[arg(value_name = "DATA_FILES", required = true)]
    pub data_files: Vec<Utf8PathBuf>,
}

pub async fn update<H: Host>(host: &mut H, session: &Session, args: &UpdateArgs) -> Result<()> {
    let client = session.client()?;
    let fetcher = Fetcher::new(&client, session.progress(), session.config.concurrency);

    for data_file in &args.data_files {
        update_file(host, session, &fetcher, data_file).await?;
    }

    session.print_footer(&mut host.output(), &client).await
}

/// Update the snapshot stored at `data_file` in place.
pub async fn update_file<H: Host>(host: &mut H, session: &Session, fetcher: &Fetcher<'_, GitHubClient>, data_file: &Utf8Path) -> Result<()> {
    let snapshot = codec::load(data_file).with_context(|| format!("loading snapshot '{data_file}'"))?;
    writeln!(
        host.output(),
        "Updating {} from '{data_file}' (last updated {})",
        snapshot.repo(),
        snapshot.last_updated()
    )?;

    match fetcher.update(snapshot, fetch_start()).await? {
        UpdateOutcome::UpToDate(snapshot) => {
            writeln!(host.output(), "No changes since {}", snapshot.last_updated())?;
        }

        UpdateOutcome::Updated(reconciliation) => {
            let colored = session.color.enabled();
            let mut out = host.output();
            for change in &reconciliation.changes {
                writeln!(out, "  {}", describe(change, colored))?;
            }

            codec::save(data_file, &reconciliation.snapshot).with_context(|| format!("saving snapshot '{data_file}'"))?;
            writeln!(out, "Saved {} change(s) to '{data_file}'", reconciliation.changes.len())?;
        }
    }

    Ok(())
}

fn describe(change: &Change, colored: bool) -> String {
    let kind = if change.is_pr { "pull request" } else { "issue" };
    let tag = change.kind.to_string();

    let tag = if colored {
        match change.kind {
            ChangeKind::New => tag.green().to_string(),
            ChangeKind::Closed => tag.red().to_string(),
            ChangeKind::Updated => tag.yellow().to_string(),
        }
    } else {
        tag
    };

    format!("{tag} - {kind} {} '{}'", change.number, change.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(kind: ChangeKind, is_pr: bool) -> Change {
        Change {
            number: 7,
            title: "Crash on start".to_string(),
            is_pr,
            kind,
        }
    }

    #[test]
    fn test_describe_plain() {
        assert_eq!(describe(&change(ChangeKind::New, false), false), "NEW - issue 7 'Crash on start'");
        assert_eq!(
            describe(&change(ChangeKind::Closed, true), false),
            "CLOSED - pull request 7 'Crash on start'"
        );
    }

    #[test]
    fn test_describe_colored_wraps_tag_only() {
        let line = describe(&change(ChangeKind::Updated, false), true);
        assert!(line.contains("\u{1b}["));
        assert!(line.ends_with(" - issue 7 'Crash on start'"));
    }
}
