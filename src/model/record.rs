use serde::Serialize;

/// One row of the leaderboard export.
///
/// Field order is the column order of the CSV file and must stay in sync with
/// [`OutputRecord::HEADER`]. Missing values serialize as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutputRecord {
    pub rank: Option<u32>,
    pub user_id: u32,
    pub username: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub global_rank: Option<u32>,
    pub country_rank: Option<u32>,
    pub pp: Option<f64>,
    pub level: Option<u32>,
    pub accuracy: Option<f64>,
    pub play_count: Option<u64>,
    pub play_time_hours: u64,
    pub total_score: Option<u64>,
    pub ranked_score: Option<u64>,
    pub playstyle: String,
    pub join_date: Option<String>,
    pub supporter: Option<bool>,
    pub profile_colour: Option<String>,
    pub avatar_url: Option<String>,
    pub profile_url: String,
    pub twitter: Option<String>,
    pub discord: Option<String>,
    pub youtube: Option<String>,
    pub twitch: Option<String>,
    pub website: Option<String>,
}

impl OutputRecord {
    /// Column names, in output order. Downstream consumers depend on these.
    pub const HEADER: [&'static str; 25] = [
        "rank",
        "user_id",
        "username",
        "country_code",
        "country_name",
        "global_rank",
        "country_rank",
        "pp",
        "level",
        "accuracy",
        "play_count",
        "play_time_hours",
        "total_score",
        "ranked_score",
        "playstyle",
        "join_date",
        "supporter",
        "profile_colour",
        "avatar_url",
        "profile_url",
        "twitter",
        "discord",
        "youtube",
        "twitch",
        "website",
    ];
}
