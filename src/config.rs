//! Command line arguments and the resolved app configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use base64::Engine;
use chrono::Datelike;
use clap::Parser;
use surat_natal_core::CardContent;

/// Surat Natal - Christmas greeting card maker
#[derive(Parser, Debug)]
#[command(name = "surat-natal-desktop")]
#[command(about = "Surat Natal - make a Christmas card from a family photo")]
pub struct Args {
    /// Where exported card images are saved (default: your Downloads folder)
    #[arg(long)]
    pub downloads_dir: Option<PathBuf>,

    /// Directory for JSONL log files
    #[arg(long)]
    pub logs_dir: Option<PathBuf>,

    /// Background music played when the card opens (mp3, ogg, wav)
    #[arg(long)]
    pub music: Option<PathBuf>,

    /// Link placed in share messages (default: the app page URL)
    #[arg(long)]
    pub share_url: Option<String>,

    /// Year shown on the photo tag (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Log filter, e.g. "surat_natal_core=debug" (overrides RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Only log to file
    #[arg(long)]
    pub no_console: bool,

    /// Instance name used in the log file name
    #[arg(short, long, default_value = "card")]
    pub instance: String,
}

/// Music embedded into the page as a data URI.
#[derive(Debug, Clone, PartialEq)]
pub struct MusicTrack {
    pub data_uri: String,
}

impl MusicTrack {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mime = music_mime(path)?;
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read music file {}", path.display()))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(Self {
            data_uri: format!("data:{};base64,{}", mime, encoded),
        })
    }
}

fn music_mime(path: &Path) -> anyhow::Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp3" => Ok("audio/mpeg"),
        "ogg" | "oga" => Ok("audio/ogg"),
        "wav" => Ok("audio/wav"),
        other => bail!("Unsupported music format '{}' ({})", other, path.display()),
    }
}

/// Everything the app needs from the command line, resolved.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub downloads_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub music: Option<MusicTrack>,
    pub share_url: Option<String>,
    pub year: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            downloads_dir: default_downloads_dir(),
            logs_dir: default_logs_dir(),
            music: None,
            share_url: None,
            year: chrono::Local::now().year(),
        }
    }
}

impl AppConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let music = args.music.as_deref().map(MusicTrack::load).transpose()?;

        Ok(Self {
            downloads_dir: args.downloads_dir.clone().unwrap_or(defaults.downloads_dir),
            logs_dir: args.logs_dir.clone().unwrap_or(defaults.logs_dir),
            music,
            share_url: args.share_url.clone(),
            year: args.year.unwrap_or(defaults.year),
        })
    }

    /// Card text with this config's year.
    pub fn content(&self) -> CardContent {
        CardContent::default().with_year(self.year)
    }
}

fn default_downloads_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_logs_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("surat-natal")
        .join("logs")
}
