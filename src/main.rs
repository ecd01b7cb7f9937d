use std::process::ExitCode;
use streak_tracker::{build_report_at, load_snapshot, persist_snapshot, MemoryStore, Settings};
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    let now = settings.now();
    info!("computing streaks from {} as of {now}", settings.data_path.display());

    let mut snapshot = load_snapshot(&settings.data_path).await?;
    let mut store = MemoryStore::new(std::mem::take(&mut snapshot.best));
    let report = build_report_at(now, &snapshot, &mut store)?;

    let records = report
        .activities
        .iter()
        .filter(|activity| activity.new_record.is_some())
        .count();
    info!(today = %report.today, records, "report ready");

    if records > 0 {
        snapshot.best = store.into_inner();
        persist_snapshot(&settings.data_path, &snapshot).await?;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
