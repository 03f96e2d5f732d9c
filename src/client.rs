use std::io::Write;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::api;
use crate::config::{Credentials, ExportConfig};
use crate::error::{OsuError, Result};
use crate::model::{OutputRecord, RankedEntry, UserProfile};
use crate::pipeline::{self, ExportSummary};
use crate::projection;
use crate::sink::RecordSink;

/// The two reads a leaderboard export needs from the API.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    /// One page of the performance leaderboard. Empty once past the last user.
    async fn top_users(&self, page: u32, per_page: u32) -> Result<Vec<RankedEntry>>;

    /// A single user's full profile.
    async fn user_profile(&self, user_id: u32) -> Result<UserProfile>;
}

/// The main entry point for talking to the osu! API.
///
/// `OsuClient` wraps a [`reqwest::Client`] together with the OAuth client
/// credentials. Call [`OsuClient::authenticate`] to obtain a [`Session`]
/// that can read rankings and profiles.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> osu_rankings::Result<()> {
/// use osu_rankings::{Credentials, ExportConfig, OsuClient, RecordSink};
///
/// let client = OsuClient::new(Credentials::new("40897", "secret"));
/// let config = ExportConfig { start_rank: 1, end_rank: 100, ..Default::default() };
/// let mut sink = RecordSink::create("top100.csv")?;
/// let summary = client.export_range(&config, &mut sink).await?;
/// println!("wrote {} users", summary.written);
/// # Ok(())
/// # }
/// ```
pub struct OsuClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl OsuClient {
    /// Create a new client with default settings.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_client(reqwest::Client::new(), credentials)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, credentials: Credentials) -> Self {
        Self {
            http: client,
            base_url: api::BASE_URL.to_string(),
            credentials,
        }
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Exchange the client credentials for an access token.
    #[instrument(skip(self))]
    pub async fn authenticate(&self) -> Result<Session<'_>> {
        let token = api::auth::get_access_token(&self.http, &self.base_url, &self.credentials)
            .await
            .map_err(|e| OsuError::Authentication(Box::new(e)))?;
        Ok(Session {
            client: self,
            token,
        })
    }

    /// Authenticate, then export the configured rank range into `sink`.
    pub async fn export_range<W: Write>(
        &self,
        config: &ExportConfig,
        sink: &mut RecordSink<W>,
    ) -> Result<ExportSummary> {
        config.validate()?;
        let session = self.authenticate().await?;
        pipeline::export_range(&session, config, sink).await
    }

    /// Authenticate and fetch a single profile as an export row.
    #[instrument(skip(self))]
    pub async fn get_user_record(&self, user_id: u32) -> Result<OutputRecord> {
        let session = self.authenticate().await?;
        let profile = session.user_profile(user_id).await?;
        info!(user_id, username = ?profile.username, "fetched user");
        Ok(projection::single_user_record(&profile))
    }
}

/// An authenticated view of an [`OsuClient`].
///
/// The token is not refreshed; a session lives as long as the token is valid.
pub struct Session<'a> {
    client: &'a OsuClient,
    token: String,
}

impl Session<'_> {
    /// Fetch one page of the performance leaderboard.
    pub async fn get_top_users(&self, page: u32, per_page: u32) -> Result<Vec<RankedEntry>> {
        api::rankings::get_top_users(
            &self.client.http,
            &self.client.base_url,
            &self.token,
            page,
            per_page,
        )
        .await
    }

    /// Fetch a user's full profile.
    pub async fn get_user(&self, user_id: u32) -> Result<UserProfile> {
        api::users::get_user(&self.client.http, &self.client.base_url, &self.token, user_id).await
    }
}

#[async_trait]
impl LeaderboardSource for Session<'_> {
    async fn top_users(&self, page: u32, per_page: u32) -> Result<Vec<RankedEntry>> {
        self.get_top_users(page, per_page).await
    }

    async fn user_profile(&self, user_id: u32) -> Result<UserProfile> {
        self.get_user(user_id).await
    }
}
