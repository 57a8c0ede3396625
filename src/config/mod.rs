#[expect(clippy::module_inception, reason = "I like it this way")]
mod config;
mod repo_config;

pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TOML};
pub use repo_config::RepoConfig;
