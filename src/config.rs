use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;
use tracing::debug;

use crate::constants::*;

/// Present a directory of slide images.
#[derive(Parser, Debug)]
#[command(name = "slidedeck", version, about)]
pub struct Cli {
    /// Directory holding the slide images, shown in file name order
    pub dir: PathBuf,

    /// Config file (defaults to slidedeck.toml inside the deck directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Slide to open on (1-based)
    #[arg(short, long)]
    pub start: Option<i64>,

    /// Start in fullscreen
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Window title
    #[arg(short, long)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title: Option<String>,
    pub window_width: i32,
    pub window_height: i32,
    pub start_slide: i64,
    pub fullscreen: bool,
    pub swipe_threshold: f32,
    pub click_zone: f32,
    pub idle_hide_secs: f32,
    pub copy_feedback_secs: f32,
    pub transition_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            start_slide: 1,
            fullscreen: false,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            click_zone: DEFAULT_CLICK_ZONE,
            idle_hide_secs: DEFAULT_IDLE_HIDE_SECS,
            copy_feedback_secs: DEFAULT_COPY_FEEDBACK_SECS,
            transition_secs: DEFAULT_TRANSITION_SECS,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("invalid config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Config file (explicit or found in the deck directory) with CLI flags on top.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let default_path = cli.dir.join(CONFIG_FILE_NAME);
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None if default_path.is_file() => Self::load(&default_path)?,
            None => Self::default(),
        };
        debug!(?config, "config loaded");

        if let Some(start) = cli.start {
            config.start_slide = start;
        }
        if cli.fullscreen {
            config.fullscreen = true;
        }
        if let Some(title) = &cli.title {
            config.title = Some(title.clone());
        }
        Ok(config)
    }

    /// Explicit title, else the deck directory name.
    pub fn window_title(&self, dir: &Path) -> String {
        self.title.clone().unwrap_or_else(|| {
            dir.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "slidedeck".to_string())
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_width <= 0 || self.window_height <= 0 {
            bail!("window size must be positive, got {}x{}", self.window_width, self.window_height);
        }
        if !(self.click_zone > 0.0 && self.click_zone <= 0.5) {
            bail!("click_zone must be in (0, 0.5], got {}", self.click_zone);
        }
        for (name, value) in [
            ("swipe_threshold", self.swipe_threshold),
            ("idle_hide_secs", self.idle_hide_secs),
            ("copy_feedback_secs", self.copy_feedback_secs),
            ("transition_secs", self.transition_secs),
        ] {
            if !(value >= 0.0) {
                bail!("{name} must not be negative, got {value}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let config = Config::from_toml("title = \"Briefing\"\nidle_hide_secs = 5.0\nstart_slide = 4\n").unwrap();
        assert_eq!(config.title.as_deref(), Some("Briefing"));
        assert_eq!(config.idle_hide_secs, 5.0);
        assert_eq!(config.start_slide, 4);
        assert_eq!(config.click_zone, DEFAULT_CLICK_ZONE);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_toml("click_zone = 0.8").is_err());
        assert!(Config::from_toml("window_width = 0").is_err());
        assert!(Config::from_toml("transition_secs = -1.0").is_err());
        assert!(Config::from_toml("unknown_key = 1").is_err());
    }

    #[test]
    fn deck_config_is_picked_up_and_cli_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "start_slide = 2\ntitle = \"From file\"\n").unwrap();

        let cli = Cli::parse_from(["slidedeck", dir.path().to_str().unwrap(), "--fullscreen", "--start", "5"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.start_slide, 5);
        assert!(config.fullscreen);
        assert_eq!(config.window_title(dir.path()), "From file");
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let cli = Cli::parse_from([
            "slidedeck",
            dir.path().to_str().unwrap(),
            "--config",
            missing.to_str().unwrap(),
        ]);
        assert!(Config::from_cli(&cli).is_err());
    }

    #[test]
    fn title_falls_back_to_directory_name() {
        let config = Config::default();
        assert_eq!(config.window_title(Path::new("/talks/ai-briefing")), "ai-briefing");
    }
}
