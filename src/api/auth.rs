use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api;
use crate::config::Credentials;
use crate::error::{OsuError, Result};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange the client credentials for a bearer token with `public` scope.
#[instrument(skip(client, credentials), fields(client_id = %credentials.client_id))]
pub(crate) async fn get_access_token(
    client: &reqwest::Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<String> {
    let url = format!("{base_url}/oauth/token");
    let form = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "client_credentials"),
        ("scope", "public"),
    ];

    let response = client
        .post(&url)
        .form(&form)
        .send()
        .await
        .map_err(|e| OsuError::Http {
            url: url.clone(),
            source: e,
        })?;
    let token: TokenResponse = api::decode(&url, response).await?;

    debug!("obtained access token");
    Ok(token.access_token)
}
