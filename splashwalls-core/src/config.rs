use anyhow::{Context, Result};
use directories::{ProjectDirs, UserDirs};
use std::fs;
use std::path::PathBuf;

use crate::gesture::DoubleTapConfig;

pub const DEFAULT_LIST_URL: &str = "https://picsum.photos/v2/list";
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    pub gallery_dir: PathBuf,
    pub settings_file: PathBuf,
    pub saved_metadata_file: PathBuf,
}

impl Config {
    pub fn new() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "splashwalls", "splashwalls")
            .context("Failed to get project directories")?;

        let config_dir = proj_dirs.config_dir().to_path_buf();
        let gallery_dir = UserDirs::new()
            .and_then(|dirs| dirs.picture_dir().map(|p| p.join("SplashWalls")))
            .unwrap_or_else(|| config_dir.join("gallery"));
        let settings_file = config_dir.join("settings.conf");
        let saved_metadata_file = config_dir.join("saved.metadata.conf");

        // Create directories if they don't exist
        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&gallery_dir)?;

        // Create saved.metadata.conf if it doesn't exist
        if !saved_metadata_file.exists() {
            fs::write(&saved_metadata_file, "")?;
        }

        Ok(Config {
            config_dir,
            gallery_dir,
            settings_file,
            saved_metadata_file,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub list_url: String,
    pub sample_size: usize,
    pub double_tap_window_ms: u64,
    pub double_tap_radius: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            list_url: DEFAULT_LIST_URL.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            double_tap_window_ms: 300,
            double_tap_radius: 20.0,
        }
    }
}

impl Settings {
    /// Loads settings.conf, writing the defaults there first when the file is missing.
    pub fn load_or_init(config: &Config) -> Result<Self> {
        if !config.settings_file.exists() {
            let settings = Settings::default();
            save_settings(config, &settings)?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&config.settings_file)?;
        let mut settings = Settings::default();

        for line in content.lines() {
            if let Some((key, value)) = line.split_once('|') {
                match key.trim() {
                    "list_url" => settings.list_url = value.trim().to_string(),
                    "sample_size" => {
                        if let Ok(n) = value.trim().parse::<usize>() {
                            settings.sample_size = n;
                        }
                    }
                    "double_tap_window_ms" => {
                        if let Ok(ms) = value.trim().parse::<u64>() {
                            settings.double_tap_window_ms = ms;
                        }
                    }
                    "double_tap_radius" => {
                        if let Ok(radius) = value.trim().parse::<f64>() {
                            settings.double_tap_radius = radius;
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(settings)
    }

    pub fn double_tap(&self) -> DoubleTapConfig {
        DoubleTapConfig {
            window_ms: self.double_tap_window_ms,
            radius: self.double_tap_radius,
        }
    }
}

pub fn save_settings(config: &Config, settings: &Settings) -> Result<()> {
    let mut content = String::new();
    content.push_str(&format!("list_url|{}\n", settings.list_url));
    content.push_str(&format!("sample_size|{}\n", settings.sample_size));
    content.push_str(&format!("double_tap_window_ms|{}\n", settings.double_tap_window_ms));
    content.push_str(&format!("double_tap_radius|{}\n", settings.double_tap_radius));
    fs::write(&config.settings_file, content)?;
    Ok(())
}
