use tracing::instrument;

use crate::api;
use crate::error::Result;
use crate::model::UserProfile;

/// Fetch a user's full profile with osu! standard statistics.
#[instrument(skip(client, token))]
pub(crate) async fn get_user(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    user_id: u32,
) -> Result<UserProfile> {
    let url = format!("{base_url}/api/v2/users/{user_id}/osu");
    api::get_json(client, &url, token).await
}
