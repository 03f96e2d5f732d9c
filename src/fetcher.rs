use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::client::LeaderboardSource;
use crate::model::UserProfile;

/// Fetch the profiles of `user_ids` with at most `concurrency` requests in flight.
///
/// Returns one entry per input id, in input order, once every request has
/// settled. A failed request is logged and yields `None` for that id; it never
/// fails the batch.
pub async fn fetch_details<S>(
    source: &S,
    user_ids: &[u32],
    concurrency: usize,
) -> Vec<(u32, Option<UserProfile>)>
where
    S: LeaderboardSource + ?Sized,
{
    let permits = Semaphore::new(concurrency.max(1));

    let fetches = user_ids.iter().map(|&user_id| {
        let permits = &permits;
        async move {
            // The semaphore is never closed, so acquiring only waits.
            let Ok(_permit) = permits.acquire().await else {
                return (user_id, None);
            };
            match source.user_profile(user_id).await {
                Ok(profile) => (user_id, Some(profile)),
                Err(e) => {
                    warn!(user_id, error = %e, "failed to fetch user details");
                    (user_id, None)
                }
            }
        }
    });

    let details = join_all(fetches).await;
    debug!(
        requested = user_ids.len(),
        resolved = details.iter().filter(|(_, p)| p.is_some()).count(),
        "fetched user details"
    );
    details
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{OsuError, Result};
    use crate::model::RankedEntry;

    /// In-memory leaderboard that records how many profile requests overlap.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub pages: HashMap<u32, Vec<RankedEntry>>,
        pub failing_pages: HashSet<u32>,
        pub failing_users: HashSet<u32>,
        /// Simulated latency per user id, in milliseconds.
        pub delays: HashMap<u32, u64>,
        pub in_flight: AtomicUsize,
        pub max_in_flight: AtomicUsize,
        pub requested_pages: Mutex<Vec<u32>>,
    }

    impl FakeSource {
        /// A leaderboard of `total` users whose ids are `rank * 100`.
        pub(crate) fn with_users(total: u32, per_page: u32) -> Self {
            let mut pages: HashMap<u32, Vec<RankedEntry>> = HashMap::new();
            for rank in 1..=total {
                let page = (rank - 1) / per_page + 1;
                pages.entry(page).or_default().push(RankedEntry {
                    rank,
                    user_id: rank * 100,
                });
            }
            Self {
                pages,
                ..Default::default()
            }
        }
    }

    fn unavailable(url: String) -> OsuError {
        OsuError::UnexpectedStatus {
            url,
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    #[async_trait]
    impl LeaderboardSource for FakeSource {
        async fn top_users(&self, page: u32, _per_page: u32) -> Result<Vec<RankedEntry>> {
            self.requested_pages.lock().unwrap().push(page);
            if self.failing_pages.contains(&page) {
                return Err(unavailable(format!("fake://rankings/{page}")));
            }
            Ok(self.pages.get(&page).cloned().unwrap_or_default())
        }

        async fn user_profile(&self, user_id: u32) -> Result<UserProfile> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            let delay = self.delays.get(&user_id).copied().unwrap_or(5);
            tokio::time::sleep(Duration::from_millis(delay)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            if self.failing_users.contains(&user_id) {
                return Err(unavailable(format!("fake://users/{user_id}")));
            }
            Ok(UserProfile {
                id: user_id,
                username: Some(format!("player{user_id}")),
                ..Default::default()
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrency_ceiling() {
        let mut source = FakeSource::default();
        let ids: Vec<u32> = (1..=50).collect();
        for &id in &ids {
            source.delays.insert(id, u64::from(id % 7) * 10 + 1);
        }

        let details = fetch_details(&source, &ids, 10).await;

        assert_eq!(details.len(), 50);
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 10);
        assert_eq!(source.in_flight.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ceiling_of_one_serializes() {
        let source = FakeSource::default();
        let ids: Vec<u32> = (1..=8).collect();

        fetch_details(&source, &ids, 1).await;

        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_keep_input_order() {
        let mut source = FakeSource::default();
        // Earlier ids finish last.
        let ids: Vec<u32> = (1..=12).collect();
        for &id in &ids {
            source.delays.insert(id, u64::from(13 - id) * 10);
        }

        let details = fetch_details(&source, &ids, 4).await;
        let order: Vec<u32> = details.iter().map(|(id, _)| *id).collect();

        assert_eq!(order, ids);
        assert!(details.iter().all(|(id, p)| p.as_ref().unwrap().id == *id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_is_absent() {
        let mut source = FakeSource::default();
        source.failing_users.insert(3);
        let ids = [1, 2, 3, 4];

        let details = fetch_details(&source, &ids, 2).await;

        assert_eq!(details.len(), 4);
        assert_eq!(details[2], (3, None));
        assert_eq!(details.iter().filter(|(_, p)| p.is_some()).count(), 3);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let source = FakeSource::default();
        assert!(fetch_details(&source, &[], 10).await.is_empty());
    }
}
