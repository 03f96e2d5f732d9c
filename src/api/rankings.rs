use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{RankedEntry, RankingResponse};

/// Fetch one page of the osu! standard performance leaderboard.
///
/// An empty result means the leaderboard has no users past this page.
#[instrument(skip(client, token))]
pub(crate) async fn get_top_users(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    page: u32,
    per_page: u32,
) -> Result<Vec<RankedEntry>> {
    let url = format!("{base_url}/api/v2/rankings/osu/performance?page={page}&per_page={per_page}");
    let response: RankingResponse = api::get_json(client, &url, token).await?;
    let entries = response.into_entries(page, per_page);
    debug!(count = entries.len(), page, "parsed ranking page");
    Ok(entries)
}
