use std::path::PathBuf;

use clap::Parser;
use nebulabun_config::WindowConfig;

/// Nebulabun: open HTML, a local file or a URL in a native WebView window.
#[derive(Parser, Debug)]
#[command(
    name = "nebulabun",
    version,
    about,
    after_help = "Examples:\n  nebulabun --file ./app.html --width 800 --height 600\n  nebulabun --url https://example.com --transparent\n  nebulabun --file ./overlay.html --click-through --transparency 200"
)]
pub struct Args {
    /// Open a local HTML file (takes precedence over --url).
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Open a URL. Local URLs need their server running already.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Window title.
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Window width in pixels.
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Window height in pixels.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Create a transparent window.
    #[arg(long)]
    pub transparent: bool,

    /// Let mouse input pass through the window.
    #[arg(long)]
    pub click_through: bool,

    /// Window alpha, 0-255 (clamped).
    #[arg(long, value_name = "0-255", allow_negative_numbers = true)]
    pub transparency: Option<i32>,

    /// Verbose logging plus a dump of the effective settings.
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Config file path override.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Native WebView library path override.
    #[arg(long, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Log level override (e.g. debug, nebulabun=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Layer the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut WindowConfig) {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.transparent {
            config.transparent = true;
        }
        if self.click_through {
            config.click_through = true;
        }
        if let Some(level) = self.transparency {
            config.transparency = level;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
