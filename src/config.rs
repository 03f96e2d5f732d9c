use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{OsuError, Result};

/// Largest page the ranking endpoint will serve.
pub const MAX_PER_PAGE: u32 = 50;

/// OAuth client registered at <https://osu.ppy.sh/home/account/edit#oauth>.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read `OSU_CLIENT_ID` and `OSU_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(require_var("OSU_CLIENT_ID")?, require_var("OSU_CLIENT_SECRET")?))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Parameters of one leaderboard export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// First leaderboard rank to export, 1-based and inclusive.
    pub start_rank: u32,
    /// Last leaderboard rank to export, inclusive.
    pub end_rank: u32,
    pub per_page: u32,
    /// Maximum number of profile requests in flight at once.
    pub concurrency: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            start_rank: 1,
            end_rank: 10_000,
            per_page: MAX_PER_PAGE,
            concurrency: 10,
        }
    }
}

impl ExportConfig {
    /// Defaults overridden by `OSU_START_RANK`, `OSU_END_RANK`, `OSU_PER_PAGE`
    /// and `OSU_CONCURRENCY` where set. The result is validated.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            start_rank: parse_var("OSU_START_RANK")?.unwrap_or(defaults.start_rank),
            end_rank: parse_var("OSU_END_RANK")?.unwrap_or(defaults.end_rank),
            per_page: parse_var("OSU_PER_PAGE")?.unwrap_or(defaults.per_page),
            concurrency: parse_var("OSU_CONCURRENCY")?.unwrap_or(defaults.concurrency),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_rank == 0 {
            return Err(OsuError::InvalidConfig("start_rank must be at least 1".into()));
        }
        if self.start_rank > self.end_rank {
            return Err(OsuError::InvalidConfig(format!(
                "start_rank {} is after end_rank {}",
                self.start_rank, self.end_rank
            )));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(OsuError::InvalidConfig(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.per_page
            )));
        }
        if self.concurrency == 0 {
            return Err(OsuError::InvalidConfig("concurrency must be at least 1".into()));
        }
        Ok(())
    }

    /// Page holding `start_rank`.
    pub fn start_page(&self) -> u32 {
        (self.start_rank - 1) / self.per_page + 1
    }

    /// Page holding `end_rank`.
    pub fn end_page(&self) -> u32 {
        (self.end_rank - 1) / self.per_page + 1
    }

    pub fn contains(&self, rank: u32) -> bool {
        (self.start_rank..=self.end_rank).contains(&rank)
    }

    /// `OSU_OUTPUT`, or a file name derived from the rank range.
    pub fn output_path(&self) -> PathBuf {
        env::var_os("OSU_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.default_output_path())
    }

    pub fn default_output_path(&self) -> PathBuf {
        PathBuf::from(format!("osu_top_{}_{}.csv", self.start_rank, self.end_rank))
    }
}

fn require_var(key: &str) -> Result<String> {
    env::var(key).map_err(|_| OsuError::InvalidConfig(format!("{key} is not set")))
}

fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| OsuError::InvalidConfig(format!("{key} has an invalid value: {raw}"))),
        Err(_) => Ok(None),
    }
}
