use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// One entry of the picsum.photos list response. Extra fields in the payload
/// (url, download_url, ...) are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallpaperRecord {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub author: String,
}

impl WallpaperRecord {
    /// Image URL scaled to the given dimensions.
    pub fn image_url(&self, width: u32, height: u32) -> String {
        format!("https://picsum.photos/id/{}/{}/{}", self.id, width, height)
    }

    /// Image URL at the record's own resolution.
    pub fn full_image_url(&self) -> String {
        self.image_url(self.width, self.height)
    }
}

pub fn fetch_wallpaper_list(list_url: &str) -> Result<Vec<WallpaperRecord>> {
    info!("Fetching wallpaper list from {}", list_url);
    let response = attohttpc::get(list_url).send()?;
    let text = response.text()?;
    let records: Vec<WallpaperRecord> = serde_json::from_str(&text)
        .with_context(|| format!("Unexpected list payload from {}", list_url))?;
    info!("Fetched {} wallpaper records", records.len());
    Ok(records)
}

pub fn download_image_bytes(url: &str) -> Result<Vec<u8>> {
    // An error page must not end up on disk as a .jpg
    let response = attohttpc::get(url).send()?.error_for_status()?;
    let bytes = response.bytes()?;
    Ok(bytes)
}
