pub mod carousel;
pub mod config;
pub mod gallery;
pub mod gesture;
pub mod request;
pub mod sample;

pub use carousel::Carousel;
pub use config::{Config, Settings};
pub use gallery::{load_saved_metadata, open_gallery_directory, save_to_gallery, SavedWallpaper};
pub use gesture::{is_double_tap, DoubleTapConfig, TapTracker, TouchSample};
pub use request::{fetch_wallpaper_list, WallpaperRecord};
pub use sample::{unique_random_indices, SampleError};
