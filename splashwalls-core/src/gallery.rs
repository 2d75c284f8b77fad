use std::fs;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::request::{self, WallpaperRecord};

/// One line of `saved.metadata.conf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWallpaper {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub saved_at: DateTime<Utc>,
}

pub fn sanitize_filename(filename: &str) -> String {
    let sanitized = filename
        .chars()
        .map(|c| if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' { c } else { '_' })
        .collect::<String>()
        .trim()
        .to_string();

    // Limit filename length to avoid filesystem issues
    if sanitized.len() > 100 {
        sanitized.chars().take(100).collect()
    } else {
        sanitized
    }
}

/// Downloads the full-resolution image into the gallery directory and records
/// it in the metadata file. Saving a wallpaper that is already on disk skips
/// the download; the metadata line is recorded on both paths.
pub fn save_to_gallery(config: &Config, record: &WallpaperRecord) -> Result<PathBuf> {
    let stem = sanitize_filename(&format!("{}_{}", record.author, record.id));
    let filepath = config.gallery_dir.join(format!("{}.jpg", stem));

    // The exists check skips only the download, never the metadata record
    if filepath.exists() {
        info!("{} already in gallery, skipping download", filepath.display());
    } else {
        let bytes = request::download_image_bytes(&record.full_image_url())?;
        fs::write(&filepath, bytes)
            .with_context(|| format!("Failed to write {}", filepath.display()))?;
        info!("Saved {} to gallery", filepath.display());
    }

    let entry = SavedWallpaper {
        id: record.id.clone(),
        author: record.author.clone(),
        width: record.width,
        height: record.height,
        saved_at: Utc::now(),
    };
    save_wallpaper_metadata(config, &entry)?;

    Ok(filepath)
}

pub fn save_wallpaper_metadata(config: &Config, entry: &SavedWallpaper) -> Result<()> {
    let metadata = fs::read_to_string(&config.saved_metadata_file).unwrap_or_default();

    // One JSON object per line, keyed by image id
    let mut lines: Vec<String> = metadata
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|s| s.to_string())
        .collect();

    let new_line = serde_json::to_string(entry)?;
    let mut found = false;

    for line in &mut lines {
        let same_id = serde_json::from_str::<SavedWallpaper>(line)
            .map(|old| old.id == entry.id)
            .unwrap_or(false);
        if same_id {
            *line = new_line.clone();
            found = true;
            break;
        }
    }

    if !found {
        lines.push(new_line);
    }

    fs::write(&config.saved_metadata_file, lines.join("\n") + "\n")?;
    Ok(())
}

/// Reads the gallery metadata back in saved order. A missing file is an
/// empty gallery, a file that cannot be read is an error, and unparsable
/// lines are skipped.
pub fn load_saved_metadata(config: &Config) -> Result<Vec<SavedWallpaper>> {
    if !config.saved_metadata_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&config.saved_metadata_file)?;
    Ok(content
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect())
}

pub fn open_gallery_directory(config: &Config) -> Result<()> {
    let gallery_path = &config.gallery_dir;

    #[cfg(target_os = "windows")]
    {
        Command::new("explorer")
            .arg(gallery_path)
            .spawn()?;
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open")
            .arg(gallery_path)
            .spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        // Try different file managers in order of preference
        let file_managers = ["xdg-open", "nautilus", "dolphin", "thunar", "pcmanfm", "nemo"];
        let mut opened = false;

        for fm in &file_managers {
            if let Ok(_child) = Command::new(fm)
                .arg(gallery_path)
                .spawn()
            {
                opened = true;
                break;
            }
        }

        if !opened {
            eprintln!("Could not find a suitable file manager to open {}", gallery_path.display());
        }
    }

    Ok(())
}
