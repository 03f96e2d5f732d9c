use serde::{Deserialize, Serialize};

/// A user's position on the performance leaderboard, as listed by a ranking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub user_id: u32,
}

/// Raw body of `GET /api/v2/rankings/{mode}/performance`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RankingResponse {
    #[serde(default)]
    pub ranking: Vec<RankingItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankingItem {
    #[serde(default)]
    pub user: Option<RankingUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankingUser {
    #[serde(default)]
    pub id: Option<u32>,
}

impl RankingResponse {
    /// Assign each item its global rank from its position on `page`.
    ///
    /// Items without a user id are dropped after numbering, leaving a gap in the
    /// ranks instead of shifting the users that follow.
    pub(crate) fn into_entries(self, page: u32, per_page: u32) -> Vec<RankedEntry> {
        let first_rank = (page - 1) * per_page + 1;
        self.ranking
            .into_iter()
            .zip(first_rank..)
            .filter_map(|(item, rank)| {
                item.user
                    .and_then(|u| u.id)
                    .map(|user_id| RankedEntry { rank, user_id })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_page_offset() {
        let body = serde_json::json!({
            "ranking": [
                { "user": { "id": 7562902 }, "pp": 25000.5 },
                { "user": { "id": 4504101 } },
                { "user": { "id": 124493 } }
            ],
            "cursor": { "page": 4 }
        });
        let response: RankingResponse = serde_json::from_value(body).unwrap();
        let entries = response.into_entries(3, 50);

        assert_eq!(
            entries,
            vec![
                RankedEntry { rank: 101, user_id: 7562902 },
                RankedEntry { rank: 102, user_id: 4504101 },
                RankedEntry { rank: 103, user_id: 124493 },
            ]
        );
    }

    #[test]
    fn test_missing_user_id_leaves_gap() {
        let body = serde_json::json!({
            "ranking": [
                { "user": { "id": 1 } },
                { "user": {} },
                {},
                { "user": { "id": 4 } }
            ]
        });
        let response: RankingResponse = serde_json::from_value(body).unwrap();
        let entries = response.into_entries(1, 50);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].rank, 4);
    }

    #[test]
    fn test_missing_ranking_key_is_empty() {
        let response: RankingResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_entries(1, 50).is_empty());
    }
}
