use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Flowboard".to_string(),
            // Enough for the legend to fit on one row next to the buttons
            window_width: 420.0,
            window_height: 220.0,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Defaults, then the optional JSON file from `FLOWBOARD_CONFIG`, then individual env vars
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as `load`, with variables looked up through `var`
    pub fn load_with(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = match var("FLOWBOARD_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(var)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        check_dimension("window_width", config.window_width)?;
        check_dimension("window_height", config.window_height)?;
        Ok(config)
    }

    /// Applies `FLOWBOARD_*` overrides looked up through `var`
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(title) = var("FLOWBOARD_TITLE") {
            self.title = title;
        }
        if let Some(width) = var("FLOWBOARD_WINDOW_WIDTH") {
            self.window_width = parse_dimension("FLOWBOARD_WINDOW_WIDTH", &width)?;
        }
        if let Some(height) = var("FLOWBOARD_WINDOW_HEIGHT") {
            self.window_height = parse_dimension("FLOWBOARD_WINDOW_HEIGHT", &height)?;
        }
        if let Some(dir) = var("FLOWBOARD_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        Ok(())
    }
}

fn parse_dimension(key: &str, value: &str) -> anyhow::Result<f32> {
    let parsed = value
        .trim()
        .parse::<f32>()
        .with_context(|| format!("{key} must be a number, got '{value}'"))?;
    check_dimension(key, parsed)?;
    Ok(parsed)
}

fn check_dimension(key: &str, value: f32) -> anyhow::Result<()> {
    anyhow::ensure!(value.is_finite() && value > 0.0, "{key} must be positive, got '{value}'");
    Ok(())
}
