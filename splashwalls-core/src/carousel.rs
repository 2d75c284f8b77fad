use anyhow::{bail, Result};
use log::{info, warn};

use crate::config::Settings;
use crate::gesture::{DoubleTapConfig, TapTracker, TouchSample};
use crate::request::{self, WallpaperRecord};
use crate::sample::unique_random_indices;

/// The randomly sampled wallpaper set the user swipes through.
pub struct Carousel {
    walls: Vec<WallpaperRecord>,
    current: usize,
    taps: TapTracker,
}

impl Carousel {
    pub fn new(double_tap: DoubleTapConfig) -> Self {
        Carousel {
            walls: Vec::new(),
            current: 0,
            taps: TapTracker::new(double_tap),
        }
    }

    /// Fetches the wallpaper list and replaces the deck with a fresh random
    /// draw. This is also what a shake-to-refresh shell calls.
    pub fn refresh(&mut self, settings: &Settings) -> Result<usize> {
        let list = request::fetch_wallpaper_list(&settings.list_url)?;
        self.replace_from(list, settings.sample_size)
    }

    /// Samples `sample_size` records out of `list` (clamped to the list
    /// length) and resets position and tap state.
    pub fn replace_from(&mut self, list: Vec<WallpaperRecord>, sample_size: usize) -> Result<usize> {
        if list.is_empty() {
            bail!("wallpaper list is empty, nothing to sample");
        }

        let count = if sample_size > list.len() {
            warn!(
                "Requested {} wallpapers but the list only has {}, clamping",
                sample_size,
                list.len()
            );
            list.len()
        } else {
            sample_size
        };

        let indices = unique_random_indices(count, list.len())?;
        self.walls = indices.into_iter().map(|index| list[index].clone()).collect();
        self.current = 0;
        self.taps.reset();
        info!("Carousel now holds {} of {} wallpapers", self.walls.len(), list.len());
        Ok(self.walls.len())
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Zero-based position of the wallpaper currently on screen.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&WallpaperRecord> {
        self.walls.get(self.current)
    }

    /// Advances with wraparound and returns the new current record.
    pub fn next(&mut self) -> Option<&WallpaperRecord> {
        if self.walls.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.walls.len();
        self.current()
    }

    /// Steps back with wraparound and returns the new current record.
    pub fn prev(&mut self) -> Option<&WallpaperRecord> {
        if self.walls.is_empty() {
            return None;
        }
        if self.current == 0 {
            self.current = self.walls.len() - 1;
        } else {
            self.current -= 1;
        }
        self.current()
    }

    /// Gesture-grant boundary: records the touch-down and, when it completes
    /// a double tap, hands back the record the caller should save.
    pub fn touch(&mut self, sample: TouchSample) -> Option<&WallpaperRecord> {
        if self.taps.observe(sample) {
            self.current()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> WallpaperRecord {
        WallpaperRecord {
            id: id.to_string(),
            width: 400,
            height: 300,
            author: format!("Author {}", id),
        }
    }

    fn records(count: usize) -> Vec<WallpaperRecord> {
        (0..count).map(|i| record(&i.to_string())).collect()
    }

    fn touch(x: f64, y: f64, timestamp_ms: u64) -> TouchSample {
        TouchSample { x, y, timestamp_ms }
    }

    #[test]
    fn replace_from_draws_the_requested_sample() {
        let mut carousel = Carousel::new(DoubleTapConfig::default());
        let list = records(30);
        assert_eq!(carousel.replace_from(list.clone(), 5).unwrap(), 5);
        assert_eq!(carousel.len(), 5);
        assert_eq!(carousel.position(), 0);

        let source_ids: Vec<String> = list.iter().map(|r| r.id.clone()).collect();
        let mut sampled: Vec<String> = Vec::new();
        for _ in 0..carousel.len() {
            sampled.push(carousel.current().unwrap().id.clone());
            carousel.next();
        }
        let mut deduped = sampled.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 5);
        for id in &sampled {
            assert!(source_ids.contains(id));
        }
    }

    #[test]
    fn short_list_is_clamped() {
        let mut carousel = Carousel::new(DoubleTapConfig::default());
        assert_eq!(carousel.replace_from(records(3), 5).unwrap(), 3);
        assert_eq!(carousel.len(), 3);
    }

    #[test]
    fn empty_list_is_an_error() {
        let mut carousel = Carousel::new(DoubleTapConfig::default());
        assert!(carousel.replace_from(Vec::new(), 5).is_err());
        assert!(carousel.is_empty());
        assert!(carousel.current().is_none());
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut carousel = Carousel::new(DoubleTapConfig::default());
        carousel.replace_from(records(3), 3).unwrap();

        let first = carousel.current().unwrap().id.clone();
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current().unwrap().id, first);

        carousel.prev();
        assert_eq!(carousel.position(), 2);
    }

    #[test]
    fn empty_carousel_has_nothing_to_navigate() {
        let mut carousel = Carousel::new(DoubleTapConfig::default());
        assert!(carousel.next().is_none());
        assert!(carousel.prev().is_none());
        assert!(carousel.touch(touch(0.0, 0.0, 1000)).is_none());
    }

    #[test]
    fn double_tap_hands_back_the_current_record() {
        let mut carousel = Carousel::new(DoubleTapConfig::default());
        carousel.replace_from(records(4), 4).unwrap();
        let expected = carousel.current().unwrap().id.clone();

        assert!(carousel.touch(touch(100.0, 200.0, 1000)).is_none());
        let saved = carousel.touch(touch(103.0, 201.0, 1180)).map(|r| r.id.clone());
        assert_eq!(saved, Some(expected));
    }

    #[test]
    fn slow_taps_do_not_save() {
        let mut carousel = Carousel::new(DoubleTapConfig::default());
        carousel.replace_from(records(4), 4).unwrap();

        assert!(carousel.touch(touch(100.0, 200.0, 1000)).is_none());
        assert!(carousel.touch(touch(100.0, 200.0, 1400)).is_none());
    }

    #[test]
    fn refresh_discards_the_pending_tap() {
        let mut carousel = Carousel::new(DoubleTapConfig::default());
        carousel.replace_from(records(4), 4).unwrap();

        assert!(carousel.touch(touch(100.0, 200.0, 1000)).is_none());
        carousel.replace_from(records(4), 4).unwrap();
        // First touch of the new deck must not pair with the old one.
        assert!(carousel.touch(touch(100.0, 200.0, 1100)).is_none());
    }
}
