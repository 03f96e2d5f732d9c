use std::io::Write;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::client::LeaderboardSource;
use crate::config::ExportConfig;
use crate::error::{OsuError, Result};
use crate::fetcher::fetch_details;
use crate::model::RankedEntry;
use crate::projection::project;
use crate::sink::RecordSink;

/// Why an export stopped walking the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// Every page up to the one holding `end_rank` was processed.
    RangeCovered,
    /// The ranking returned an empty page.
    Exhausted { page: u32 },
    /// A page yielded no exportable users, either because every in-range
    /// profile fetch failed or no listed rank fell in the requested range.
    ZeroProgress { page: u32 },
}

/// Outcome of [`export_range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub pages_fetched: u32,
    pub written: usize,
    /// Users listed in range whose profile could not be fetched.
    pub failed: Vec<u32>,
    pub stop: StopReason,
}

/// Walk the leaderboard page by page and write every user ranked within
/// `[config.start_rank, config.end_rank]` to `sink`.
///
/// Pages are processed strictly one after another; within a page, profiles
/// are fetched concurrently and written in rank order. A ranking page that
/// cannot be fetched aborts the export with [`OsuError::PageFetch`], leaving
/// the rows already written in place.
#[instrument(skip_all, fields(start_rank = config.start_rank, end_rank = config.end_rank))]
pub async fn export_range<S, W>(
    source: &S,
    config: &ExportConfig,
    sink: &mut RecordSink<W>,
) -> Result<ExportSummary>
where
    S: LeaderboardSource + ?Sized,
    W: Write,
{
    config.validate()?;

    let mut pages_fetched = 0;
    let mut written = 0;
    let mut failed = Vec::new();
    let mut stop = StopReason::RangeCovered;

    for page in config.start_page()..=config.end_page() {
        let entries = source
            .top_users(page, config.per_page)
            .await
            .map_err(|e| OsuError::PageFetch {
                page,
                source: Box::new(e),
            })?;
        pages_fetched += 1;

        if entries.is_empty() {
            info!(page, "no more ranking data");
            stop = StopReason::Exhausted { page };
            break;
        }

        let wanted = entries
            .into_iter()
            .filter(|e| config.contains(e.rank))
            .collect_vec();
        let user_ids = wanted.iter().map(|e| e.user_id).collect_vec();
        let details = fetch_details(source, &user_ids, config.concurrency).await;

        let mut added = 0;
        for (RankedEntry { rank, .. }, (user_id, profile)) in wanted.iter().zip(details) {
            match profile {
                Some(profile) => {
                    sink.write(&project(*rank, &profile))?;
                    info!(rank, user_id, username = ?profile.username, "exported user");
                    added += 1;
                }
                None => failed.push(user_id),
            }
        }

        if added == 0 {
            warn!(page, "page produced no records, stopping");
            stop = StopReason::ZeroProgress { page };
            break;
        }

        written += added;
        debug!(page, added, written, "finished page");
    }

    info!(written, failed = failed.len(), ?stop, "export finished");
    Ok(ExportSummary {
        pages_fetched,
        written,
        failed,
        stop,
    })
}
