//! Talking to GitHub: listing and fetching issues, and the fetch/update workflows built on top.

mod client;
mod orchestrator;
mod progress_reporter;
mod source;

pub use client::GitHubClient;
pub use orchestrator::{Fetcher, UpdateOutcome};
pub use progress_reporter::ProgressReporter;
pub use source::{IssueSource, RateLimit};
