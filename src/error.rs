/// All errors that can occur while talking to the osu! API or writing the export.
#[derive(thiserror::Error, Debug)]
pub enum OsuError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the JSON response body.
    #[error("failed to decode response body from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// The client-credentials token exchange failed.
    #[error("authentication failed: {0}")]
    Authentication(#[source] Box<OsuError>),

    /// A ranking page could not be fetched.
    #[error("failed to fetch ranking page {page}: {source}")]
    PageFetch { page: u32, source: Box<OsuError> },

    /// Writing a CSV row failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Run parameters are out of range or missing.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The given string is not an osu! profile link.
    #[error("not an osu! profile url: {0}")]
    InvalidProfileUrl(String),
}

pub type Result<T> = std::result::Result<T, OsuError>;
