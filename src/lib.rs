//! Export the osu! performance leaderboard, with each player's full profile,
//! to a CSV file.
//!
//! The export walks the leaderboard one page at a time, fetches every listed
//! profile with a bounded number of requests in flight, and appends one row
//! per player as soon as the page completes.

pub use api::parse_user_id_from_url;
pub use client::{LeaderboardSource, OsuClient, Session};
pub use config::{Credentials, ExportConfig, MAX_PER_PAGE};
pub use error::{OsuError, Result};
pub use fetcher::fetch_details;
pub use model::*;
pub use pipeline::{export_range, ExportSummary, StopReason};
pub use projection::{project, single_user_record};
pub use sink::RecordSink;

mod api;
mod client;
mod config;
mod error;
mod fetcher;
mod model;
mod pipeline;
mod projection;
mod sink;
