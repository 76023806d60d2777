use std::path::PathBuf;

use clap::Parser;

/// fourcolor — differential four-level ASCII canvas.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Visual source: path to an image (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Procedural generator: "plasma".
    #[arg(long)]
    pub procedural: Option<String>,

    /// TOML configuration file. Default: config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Canvas width in pixels (terminal columns).
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels (two per terminal row, must be even).
    #[arg(long)]
    pub height: Option<u32>,

    /// Palette: "white-on-black" (dark terminal) or "black-on-white".
    #[arg(long)]
    pub palette: Option<String>,

    /// Number of frames to paint from an animated source.
    #[arg(long, default_value_t = 300)]
    pub frames: u64,

    /// Target FPS for animated sources.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that exactly one visual source is provided.
    ///
    /// # Errors
    /// Returns an error if zero or more than one source is specified.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        match (self.image.is_some(), self.procedural.is_some()) {
            (true, true) => {
                anyhow::bail!("One visual source at a time: --image OR --procedural.")
            }
            (false, false) => {
                anyhow::bail!("No visual source given. Use --image or --procedural.")
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_source() {
        let cli = Cli::parse_from(["fourcolor", "--procedural", "plasma"]);
        assert!(cli.validate_source().is_ok());

        let cli = Cli::parse_from(["fourcolor"]);
        assert!(cli.validate_source().is_err());

        let cli = Cli::parse_from(["fourcolor", "--image", "a.png", "--procedural", "plasma"]);
        assert!(cli.validate_source().is_err());
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::parse_from([
            "fourcolor",
            "--image",
            "a.png",
            "--width",
            "40",
            "--height",
            "20",
            "--palette",
            "black-on-white",
        ]);
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.height, Some(20));
        assert_eq!(cli.palette.as_deref(), Some("black-on-white"));
        assert_eq!(cli.frames, 300);
    }
}
