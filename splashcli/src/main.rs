use anyhow::Result;
use clap::Parser;
use splashwalls_core::*;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "splashcli")]
#[command(about = "SplashWalls - Random wallpaper browser")]
#[command(version)]
struct Cli {
    /// How many wallpapers to sample per refresh
    #[arg(long)]
    count: Option<usize>,

    /// Override the wallpaper list endpoint
    #[arg(long)]
    list_url: Option<String>,
}

struct SplashCliApp {
    config: Config,
    settings: Settings,
    carousel: Carousel,
}

impl SplashCliApp {
    fn new(cli: &Cli) -> Result<Self> {
        let config = Config::new()?;
        let mut settings = Settings::load_or_init(&config)?;

        if let Some(count) = cli.count {
            settings.sample_size = count;
        }
        if let Some(ref list_url) = cli.list_url {
            settings.list_url = list_url.clone();
        }

        let carousel = Carousel::new(settings.double_tap());

        Ok(Self {
            config,
            settings,
            carousel,
        })
    }

    fn initialize(&mut self) -> Result<()> {
        self.refresh_wallpapers()
    }

    fn refresh_wallpapers(&mut self) -> Result<()> {
        println!("Contacting image service...");
        let count = self.carousel.refresh(&self.settings)?;
        println!("Picked {} fresh wallpapers", count);
        self.show_current();
        Ok(())
    }

    fn next_wallpaper(&mut self) {
        self.carousel.next();
        self.show_current();
    }

    fn previous_wallpaper(&mut self) {
        self.carousel.prev();
        self.show_current();
    }

    fn save_current(&self) -> Result<()> {
        if let Some(record) = self.carousel.current() {
            let path = save_to_gallery(&self.config, record)?;
            println!("Saved to gallery: {}", path.display());
        } else {
            println!("No wallpaper to save. Refresh first.");
        }
        Ok(())
    }

    fn show_saved(&self) -> Result<()> {
        let saved = load_saved_metadata(&self.config)?;

        if saved.is_empty() {
            println!("No wallpapers saved yet.");
            return Ok(());
        }

        println!("Saved wallpapers ({}):", saved.len());
        for item in &saved {
            println!(
                "  {} by {} ({}x{}), saved {}",
                item.id,
                item.author,
                item.width,
                item.height,
                item.saved_at.format("%Y-%m-%d %H:%M")
            );
        }
        Ok(())
    }

    fn open_gallery(&self) -> Result<()> {
        open_gallery_directory(&self.config)?;
        println!("Opening gallery folder: {}", self.config.gallery_dir.display());
        Ok(())
    }

    fn show_current(&self) {
        match self.carousel.current() {
            Some(record) => println!(
                "Now showing: {} ({}x{}, id {})",
                record.author, record.width, record.height, record.id
            ),
            None => println!("No wallpapers loaded. Refresh to fetch a new set."),
        }
    }

    fn current_wallpaper_label(&self) -> String {
        match self.carousel.current() {
            Some(record) => {
                if record.author.chars().count() > 30 {
                    let short: String = record.author.chars().take(30).collect();
                    format!("{}...", short)
                } else {
                    record.author.clone()
                }
            }
            None => "(no wallpaper)".to_string(),
        }
    }

    fn show_menu(&self) {
        let label = self.current_wallpaper_label();
        let saved_count = load_saved_metadata(&self.config)
            .map(|saved| saved.len())
            .unwrap_or(0);

        println!("\n=== SplashWalls - Random Wallpaper Browser ===");
        if self.carousel.is_empty() {
            println!("Current wallpaper: {}", label);
        } else {
            println!(
                "Current wallpaper ({}/{}): {}",
                self.carousel.position() + 1,
                self.carousel.len(),
                label
            );
        }
        println!("Saved in gallery: {} | List: {}", saved_count, self.settings.list_url);
        println!();
        println!("1. Next wallpaper");
        println!("2. Previous wallpaper");
        println!("3. Save \"{}\" to gallery", label);
        println!("4. Refresh wallpapers");
        println!("5. Show saved wallpapers");
        println!("6. Open gallery folder");
        println!("7. Exit");
        print!("\nSelect an option (1-7): ");
        io::stdout().flush().unwrap();
    }

    fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu();

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            match input.trim() {
                "1" => {
                    self.next_wallpaper();
                }
                "2" => {
                    self.previous_wallpaper();
                }
                "3" => {
                    if let Err(e) = self.save_current() {
                        eprintln!("Failed to save wallpaper: {}", e);
                    }
                }
                "4" => {
                    if let Err(e) = self.refresh_wallpapers() {
                        eprintln!("Failed to refresh wallpapers: {}", e);
                    }
                }
                "5" => {
                    if let Err(e) = self.show_saved() {
                        eprintln!("Failed to list saved wallpapers: {}", e);
                    }
                }
                "6" => {
                    if let Err(e) = self.open_gallery() {
                        eprintln!("Failed to open gallery folder: {}", e);
                    }
                }
                "7" => {
                    println!("Exiting SplashWalls...");
                    break;
                }
                _ => {
                    println!("Invalid option. Please select 1-7.");
                }
            }
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let cli = Cli::parse();

    let mut app = SplashCliApp::new(&cli)?;
    app.initialize()?;

    println!("SplashWalls started successfully!");

    app.run()?;

    Ok(())
}
