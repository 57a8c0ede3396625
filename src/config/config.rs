use super::RepoConfig;
use crate::Result;
use crate::aggregate::{MonthBound, TOTAL_GROUP};
use crate::model::Repo;
use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the current directory when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ghstats.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding `<owner>/<name>/issues.json` for every tracked repository
    #[serde(default = "default_base_path")]
    pub base_path: Utf8PathBuf,

    /// Maximum number of issues fetched at the same time
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Enumerate one month past the current one in month-based views
    #[serde(default)]
    pub include_trailing_month: bool,

    /// Tracked repositories, keyed by `owner/name`
    #[serde(default)]
    pub repos: BTreeMap<String, RepoConfig>,
}

fn default_base_path() -> Utf8PathBuf {
    Utf8PathBuf::from("data")
}

const fn default_concurrency() -> usize {
    4
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit path must exist. Otherwise `ghstats.toml` in the current directory is used,
    /// then the same file in the user's configuration directory, and finally the defaults.
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        if let Some(path) = config_path {
            let text = fs::read_to_string(path).with_context(|| format!("reading ghstats configuration file '{path}'"))?;
            return Self::parse(&text, path);
        }

        for path in [Some(Utf8PathBuf::from(DEFAULT_CONFIG_FILE)), user_config_path()].into_iter().flatten() {
            match fs::read_to_string(&path) {
                Ok(text) => return Self::parse(&text, &path),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e).with_context(|| format!("reading ghstats configuration file '{path}'")),
            }
        }

        Ok(Self::default())
    }

    fn parse(text: &str, path: &Utf8Path) -> Result<Self> {
        let config: Self = toml::from_str(text).with_context(|| format!("parsing configuration file '{path}'"))?;
        config.validate().with_context(|| format!("validating configuration file '{path}'"))?;
        log::debug!("Loaded configuration from '{path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).with_context(|| format!("writing default configuration to '{output_path}'"))?;
        Ok(())
    }

    /// Tracked repositories with their settings, ordered by `owner/name`
    pub fn repos(&self) -> Result<Vec<(Repo, &RepoConfig)>> {
        self.repos
            .iter()
            .map(|(key, repo_config)| {
                let repo: Repo = key.parse().map_err(anyhow::Error::msg)?;
                Ok((repo, repo_config))
            })
            .collect()
    }

    /// Where the snapshot for `repo` lives
    #[must_use]
    pub fn data_path(&self, repo: &Repo) -> Utf8PathBuf {
        self.base_path.join(&repo.owner).join(&repo.name).join("issues.json")
    }

    #[must_use]
    pub const fn month_bound(&self) -> MonthBound {
        if self.include_trailing_month {
            MonthBound::Trailing
        } else {
            MonthBound::Current
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            bail!("concurrency must be at least 1");
        }

        for (key, repo_config) in &self.repos {
            let _: Repo = key.parse().map_err(anyhow::Error::msg)?;

            if repo_config.groups.contains_key(TOTAL_GROUP) {
                bail!("{key}: the group name '{TOTAL_GROUP}' is used internally, please use a different group name");
            }
        }

        Ok(())
    }
}

fn user_config_path() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "ghstats")?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().join(DEFAULT_CONFIG_FILE)).ok()
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
