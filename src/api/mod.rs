pub(crate) mod auth;
pub(crate) mod rankings;
pub(crate) mod users;

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{OsuError, Result};

pub(crate) const BASE_URL: &str = "https://osu.ppy.sh";

/// Send an authorized GET and decode the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    token: &str,
) -> Result<T> {
    debug!(url, "fetching");

    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| OsuError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    decode(url, response).await
}

/// Check the status of `response` and decode its JSON body.
pub(crate) async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(OsuError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|e| OsuError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

static USER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/users/(\d+)").expect("user id pattern is valid"));

/// Extract the numeric user id from a profile link such as
/// `https://osu.ppy.sh/users/2/osu`.
pub fn parse_user_id_from_url(url: &str) -> Result<u32> {
    USER_ID_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| OsuError::InvalidProfileUrl(url.to_owned()))
}
