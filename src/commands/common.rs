use super::ColorMode;
use crate::Result;
use crate::config::Config;
use crate::github::{GitHubClient, IssueSource, ProgressReporter};
use anyhow::{Context, bail};
use camino::Utf8Path;
use chrono::{DateTime, SubsecRound, Utc};
use core::time::Duration;
use std::fs;
use std::io::{IsTerminal, Write};
use std::time::Instant;

const LOG_TARGET: &str = "commands";

/// How long a fetch runs before a progress bar appears.
const PROGRESS_DELAY: Duration = Duration::from_millis(500);

/// State shared by every command of one invocation.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub color: ColorMode,
    started: Instant,
}

impl Session {
    #[must_use]
    pub fn new(config: Config, api_key: Option<String>, api_url: Option<String>, color: ColorMode) -> Self {
        Self {
            config,
            api_key,
            api_url,
            color,
            started: Instant::now(),
        }
    }

    /// A GitHub client. Network commands refuse to run without a token.
    pub fn client(&self) -> Result<GitHubClient> {
        let Some(api_key) = self.api_key.clone().filter(|key| !key.is_empty()) else {
            bail!("GitHub API key or personal access token unavailable, pass --api-key or set GITHUB_API_KEY");
        };

        GitHubClient::new(Some(api_key), self.api_url.as_deref())
    }

    #[must_use]
    pub fn progress(&self) -> ProgressReporter {
        ProgressReporter::new(PROGRESS_DELAY, std::io::stderr().is_terminal())
    }

    /// Print the remaining API quota and how long the command took.
    pub async fn print_footer(&self, out: &mut impl Write, client: &impl IssueSource) -> Result<()> {
        match client.rate_limit().await {
            Ok(rate_limit) => writeln!(out, "{rate_limit}")?,
            Err(e) => log::warn!(target: LOG_TARGET, "Could not query the rate limit: {e:#}"),
        }

        writeln!(out, "Command took {:.3} seconds to complete.", self.started.elapsed().as_secs_f64())?;
        Ok(())
    }
}

/// The current time at second precision, taken right before a fetch starts.
#[must_use]
pub fn fetch_start() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Utf8Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating directory '{parent}'"))?;
    }

    Ok(())
}
