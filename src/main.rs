use std::io;
use std::process::ExitCode;

use osu_rankings::{
    parse_user_id_from_url, Credentials, ExportConfig, OsuClient, RecordSink, Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let result = match std::env::args().nth(1) {
        Some(profile_url) => export_one(&profile_url).await,
        None => export_leaderboard().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "export failed");
            ExitCode::FAILURE
        }
    }
}

/// Export the configured rank range to a CSV file.
async fn export_leaderboard() -> Result<()> {
    let config = ExportConfig::from_env()?;
    let client = OsuClient::new(Credentials::from_env()?);
    let path = config.output_path();
    let mut sink = RecordSink::create(&path)?;

    info!(
        path = %path.display(),
        start_rank = config.start_rank,
        end_rank = config.end_rank,
        "starting export"
    );
    let summary = client.export_range(&config, &mut sink).await?;
    info!(
        written = summary.written,
        failed = summary.failed.len(),
        stop = ?summary.stop,
        "done"
    );
    Ok(())
}

/// Print the header and a single row for the user behind `profile_url`.
async fn export_one(profile_url: &str) -> Result<()> {
    let user_id = parse_user_id_from_url(profile_url.trim())?;
    let client = OsuClient::new(Credentials::from_env()?);
    let record = client.get_user_record(user_id).await?;

    let mut sink = RecordSink::from_writer(io::stdout().lock())?;
    sink.write(&record)
}
