//! ourday configuration at ~/.config/ourday/config.toml

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use config::{Config, Environment, File};
use ourday_core::{ComposeOptions, UserId, WeekStart};
use serde::{Deserialize, Serialize};

static DEFAULT_COUPLE_ID: &str = "default";
static DEFAULT_COOLDOWN: &str = "5m";
static DEFAULT_COUNTRY: &str = "KR";
const DEFAULT_MAX_VISIBLE_LANES: usize = 3;

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("ourday"))
        .unwrap_or_else(|| PathBuf::from("~/.ourday"))
}

fn default_couple_id() -> String {
    DEFAULT_COUPLE_ID.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_visible_lanes() -> usize {
    DEFAULT_MAX_VISIBLE_LANES
}

fn default_cooldown() -> String {
    DEFAULT_COOLDOWN.to_string()
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OurdayConfig {
    /// Where schedules.json and holidays.json live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Who is looking at the calendar
    pub viewer_id: Option<String>,

    #[serde(default = "default_couple_id")]
    pub couple_id: String,

    /// Day 1 of the relationship; anniversaries count from here
    pub anniversary_date: Option<NaiveDate>,

    #[serde(default = "default_true")]
    pub show_holidays: bool,

    #[serde(default = "default_true")]
    pub show_anniversaries: bool,

    #[serde(default)]
    pub week_start: WeekStart,

    /// Lanes drawn per week row before collapsing into "+N"
    #[serde(default = "default_max_visible_lanes")]
    pub max_visible_lanes: usize,

    /// Minimum time between holiday refreshes, e.g. "5m"
    #[serde(default = "default_cooldown")]
    pub holiday_refresh_cooldown: String,

    /// ISO country code passed to the holiday API
    #[serde(default = "default_country")]
    pub holiday_country: String,
}

impl OurdayConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("ourday");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (created with defaults on first run), then apply
    /// `OURDAY_*` environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config: OurdayConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("OURDAY").try_parsing(true))
            .build()
            .context("Could not read config")?
            .try_deserialize()
            .context("Invalid config")?;

        Ok(config)
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            show_holidays: self.show_holidays,
            show_anniversaries: self.show_anniversaries,
        }
    }

    pub fn refresh_cooldown(&self) -> Result<Duration> {
        humantime::parse_duration(&self.holiday_refresh_cooldown).with_context(|| {
            format!(
                "Invalid holiday_refresh_cooldown '{}'",
                self.holiday_refresh_cooldown
            )
        })
    }

    /// The viewer: `--as` wins over the configured `viewer_id`.
    pub fn viewer(&self, override_id: Option<&str>) -> Result<UserId> {
        match override_id.or(self.viewer_id.as_deref()) {
            Some(id) => Ok(UserId::new(id)),
            None => anyhow::bail!(
                "No viewer configured.\n\n\
                Set viewer_id in {} or pass --as <id>",
                Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "config.toml".into())
            ),
        }
    }

    /// Create a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# ourday configuration

# Who you are (the other person uses their own id):
# viewer_id = \"alice\"
# couple_id = \"{DEFAULT_COUPLE_ID}\"

# Day 1 of your relationship, YYYY-MM-DD:
# anniversary_date = \"2024-01-01\"

# show_holidays = true
# show_anniversaries = true
# week_start = \"sunday\"
# max_visible_lanes = {DEFAULT_MAX_VISIBLE_LANES}

# holiday_refresh_cooldown = \"{DEFAULT_COOLDOWN}\"
# holiday_country = \"{DEFAULT_COUNTRY}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
