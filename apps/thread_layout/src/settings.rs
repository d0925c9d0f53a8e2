use std::path::Path;

use anyhow::{ensure, Context};
use bubble_policy::BubbleMetrics;
use chrono::FixedOffset;
use config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use shared::calendar::ZonedCalendar;

pub const DEFAULT_CONFIG_FILE: &str = "thread_layout.toml";
pub const ENV_PREFIX: &str = "APP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub corner_radius: u32,
    pub corner_collapse_radius: u32,
    pub spacing_default: u32,
    pub spacing_collapse: u32,
    pub group_gutter: u32,
    pub individual_gutter: u32,
    pub utc_offset_minutes: i32,
}

impl Default for Settings {
    fn default() -> Self {
        let metrics = BubbleMetrics::default();
        Self {
            corner_radius: metrics.default_radius,
            corner_collapse_radius: metrics.collapse_radius,
            spacing_default: metrics.spacing_default,
            spacing_collapse: metrics.spacing_collapsed,
            group_gutter: metrics.group_gutter,
            individual_gutter: metrics.individual_gutter,
            utc_offset_minutes: 0,
        }
    }
}

impl Settings {
    pub fn metrics(&self) -> BubbleMetrics {
        BubbleMetrics {
            default_radius: self.corner_radius,
            collapse_radius: self.corner_collapse_radius,
            spacing_default: self.spacing_default,
            spacing_collapsed: self.spacing_collapse,
            group_gutter: self.group_gutter,
            individual_gutter: self.individual_gutter,
        }
    }

    pub fn calendar(&self) -> anyhow::Result<ZonedCalendar<FixedOffset>> {
        ZonedCalendar::with_offset_minutes(self.utc_offset_minutes).with_context(|| {
            format!(
                "utc_offset_minutes {} is not a valid time zone offset",
                self.utc_offset_minutes
            )
        })
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.corner_collapse_radius <= self.corner_radius,
            "corner_collapse_radius {} exceeds corner_radius {}",
            self.corner_collapse_radius,
            self.corner_radius
        );
        self.calendar()?;
        Ok(())
    }
}

/// Defaults, then `path` (or `thread_layout.toml` when present), then `APP__*`
/// environment variables.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_from(path, None)
}

fn load_settings_from(
    path: Option<&Path>,
    env_override: Option<Map<String, String>>,
) -> anyhow::Result<Settings> {
    let defaults =
        Config::try_from(&Settings::default()).context("failed to encode default settings")?;

    let file = match path {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE)
            .format(FileFormat::Toml)
            .required(false),
    };

    let env = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .source(env_override);

    let settings: Settings = Config::builder()
        .add_source(defaults)
        .add_source(file)
        .add_source(env)
        .build()
        .context("failed to load layout settings")?
        .try_deserialize()
        .context("invalid layout settings")?;

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
