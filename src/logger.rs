/// Logging setup: file target in the configured directory, `[HH:MM:SS LEVEL] target - message`
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;

pub const LOG_FILE_NAME: &str = "flowboard.log";

pub fn init(log_dir: &Path) -> anyhow::Result<PathBuf> {
    let mut builder = env_logger::Builder::new();

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Dependencies are too chatty at info
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
    }

    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    let dir = resolve_log_dir(log_dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    builder
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;

    log::info!("Logging initialised ✓ ({})", path.display());
    Ok(path)
}

/// Uses `preferred` when it can be created, else the platform data directory
fn resolve_log_dir(preferred: &Path) -> anyhow::Result<PathBuf> {
    let fallback = dirs::data_local_dir().map(|dir| dir.join("flowboard").join("logs"));
    resolve_log_dir_with(preferred, fallback)
}

fn resolve_log_dir_with(preferred: &Path, fallback: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match std::fs::create_dir_all(preferred) {
        Ok(()) => Ok(preferred.to_path_buf()),
        Err(err) => {
            let fallback = fallback.with_context(|| {
                format!("cannot create {} ({err}) and no data directory is known", preferred.display())
            })?;
            log::debug!("Log directory {} unusable ({err}), using {}", preferred.display(), fallback.display());
            std::fs::create_dir_all(&fallback)
                .with_context(|| format!("creating log directory {}", fallback.display()))?;
            Ok(fallback)
        }
    }
}
