/*
[INPUT]:  CLI arguments, persisted activity list, terminal key events
[OUTPUT]: Running activity-list TUI with file-backed persistence
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or logging setup
*/

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use activity_list::{tui, ActivityListController, ActivityStore};

const LOG_FILE_NAME: &str = "activity-list.log";

#[derive(Parser, Debug)]
#[command(name = "activity-list", version, about = "Terminal activity list with persistent storage")]
struct Cli {
    /// Directory holding the activity file and log file. Defaults to the
    /// platform data directory.
    #[arg(long = "data-dir", value_name = "PATH")]
    data_dir: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let data_dir = resolve_data_dir(args.data_dir)?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("create data directory {}", data_dir.display()))?;

    // The guard flushes buffered log lines on drop; keep it for the whole run.
    let _log_guard = init_tracing(&args.log_level, &data_dir)?;

    info!(data_dir = %data_dir.display(), "starting activity-list");

    let store = ActivityStore::in_dir(&data_dir);
    let controller = ActivityListController::load(store).await;
    info!(records = controller.records().len(), "activity list loaded");

    tui::run(controller).await?;

    info!("shutdown complete");
    Ok(())
}

fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    let dir = dirs::data_dir()
        .context("could not determine data directory; pass --data-dir")?
        .join("activity-list");
    Ok(dir)
}

// The TUI owns stdout, so log output goes to a file in the data directory.
fn init_tracing(log_level: &str, data_dir: &std::path::Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
