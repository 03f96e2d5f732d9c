use crate::model::{OutputRecord, Playstyle, UserProfile};

const PROFILE_URL: &str = "https://osu.ppy.sh/users";
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Flatten a profile into an export row at the given leaderboard `rank`.
pub fn project(rank: u32, profile: &UserProfile) -> OutputRecord {
    project_with_rank(Some(rank), profile)
}

/// Flatten a profile looked up on its own, outside of a leaderboard walk.
///
/// The row's rank is taken from the profile's own global rank.
pub fn single_user_record(profile: &UserProfile) -> OutputRecord {
    let rank = profile.statistics.as_ref().and_then(|s| s.global_rank);
    project_with_rank(rank, profile)
}

fn project_with_rank(rank: Option<u32>, profile: &UserProfile) -> OutputRecord {
    let stats = profile.statistics.clone().unwrap_or_default();
    let country = profile.country.clone().unwrap_or_default();

    OutputRecord {
        rank,
        user_id: profile.id,
        username: profile.username.clone(),
        country_code: country.code,
        country_name: country.name,
        global_rank: stats.global_rank,
        country_rank: stats.country_rank,
        pp: stats.pp,
        level: stats.level.and_then(|l| l.current),
        accuracy: stats.hit_accuracy,
        play_count: stats.play_count,
        play_time_hours: play_time_hours(stats.play_time.unwrap_or_default()),
        total_score: stats.total_score,
        ranked_score: stats.ranked_score,
        playstyle: format_playstyle(&profile.playstyle),
        join_date: profile.join_date.clone(),
        supporter: profile.is_supporter,
        profile_colour: profile.profile_colour.clone(),
        avatar_url: profile.avatar_url.clone(),
        profile_url: format!("{PROFILE_URL}/{}", profile.id),
        twitter: profile.twitter_url.clone(),
        discord: profile.discord.clone(),
        youtube: profile.youtube_url.clone(),
        twitch: profile.twitch_url.clone(),
        website: profile.website.clone(),
    }
}

/// Whole hours, rounding half to even.
pub(crate) fn play_time_hours(seconds: u64) -> u64 {
    (seconds as f64 / SECONDS_PER_HOUR).round_ties_even() as u64
}

pub(crate) fn format_playstyle(playstyle: &Playstyle) -> String {
    match playstyle {
        Playstyle::List(devices) => devices.join(", "),
        Playstyle::Text(device) => device.clone(),
        Playstyle::Absent => String::new(),
    }
}
