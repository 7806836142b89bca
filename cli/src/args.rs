use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use img2ascii::ConversionOptions;

/// Convert an image into ASCII art.
#[derive(Parser, Debug)]
#[command(name = "img2ascii", version, about, long_about = None)]
pub struct Args {
    /// Image path, file:// URL or http(s) URL
    pub source: String,

    /// Output width in characters [default: 100]
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Output height in characters [default: derived from the aspect ratio]
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Characters from darkest to lightest [default: "@%#*+=-:. "]
    #[arg(short, long)]
    pub ramp: Option<String>,

    /// Reverse the ramp, for light text on a dark terminal
    #[arg(short, long, default_value_t = false)]
    pub invert: bool,

    /// TOML file with `width`, `height` and `ascii_ramp` keys
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the art to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Merge defaults, the config file and explicit flags, in that order
    pub fn options(&self) -> Result<ConversionOptions> {
        let mut options = match &self.config {
            Some(path) => load_config(path)?,
            None => ConversionOptions::default(),
        };

        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = Some(height);
        }
        if let Some(ramp) = &self.ramp {
            options.ascii_ramp = ramp.clone();
        }
        if self.invert {
            options.ascii_ramp = options.ascii_ramp.chars().rev().collect();
        }

        Ok(options)
    }
}

/// Parse a TOML config file; missing keys keep their defaults
pub fn load_config(path: &Path) -> Result<ConversionOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("img2ascii").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["cat.png"]);
        assert_eq!(args.source, "cat.png");
        assert_eq!(args.options().unwrap(), ConversionOptions::default());
    }

    #[test]
    fn test_source_is_required() {
        assert!(Args::try_parse_from(["img2ascii"]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&["cat.png", "-w", "40", "-H", "12", "--ramp", "#. "]);
        let options = args.options().unwrap();
        assert_eq!(options.width, 40);
        assert_eq!(options.height, Some(12));
        assert_eq!(options.ascii_ramp, "#. ");
    }

    #[test]
    fn test_invert_reverses_ramp() {
        let args = parse(&["cat.png", "--ramp", "@. ", "--invert"]);
        assert_eq!(args.options().unwrap().ascii_ramp, " .@");
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascii.toml");
        std::fs::write(&path, "width = 60\nheight = 20\nascii_ramp = \"#=-\"\n").unwrap();

        let args = parse(&["cat.png", "--config", path.to_str().unwrap(), "-w", "30"]);
        let options = args.options().unwrap();
        assert_eq!(options.width, 30);
        assert_eq!(options.height, Some(20));
        assert_eq!(options.ascii_ramp, "#=-");
    }

    #[test]
    fn test_missing_config_file() {
        let args = parse(&["cat.png", "--config", "/no/such/ascii.toml"]);
        assert!(args.options().is_err());
    }
}
