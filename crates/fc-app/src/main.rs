use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use fc_core::config::{CanvasConfig, load_config};
use fc_core::palette::Palette;
use fc_core::traits::Source;
use fc_render::canvas::FourColorCanvas;
use fc_render::writer::AnsiWriter;

pub mod cli;
mod player;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Validate source
    cli.validate_source()?;

    // 4. Config + CLI overrides
    let config = resolve_config(&cli)?;
    log::info!(
        "Canvas {}×{} ({}), {} fps",
        config.width,
        config.height,
        config.palette.name(),
        config.target_fps
    );

    // 5. Canvas and source
    let mut canvas = FourColorCanvas::from_config(&config)?;
    let mut source = open_source(&cli, &config)?;

    // 6. Paint loop
    let mut out = AnsiWriter::stdout();
    execute!(std::io::stdout(), Clear(ClearType::All)).context("Cannot clear terminal")?;

    let frames = if source.is_live() { cli.frames } else { 1 };
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(config.target_fps));
    let report = player::play(&mut canvas, source.as_mut(), &mut out, frames, frame_time)?;

    // Leave the prompt below the canvas.
    let mut stdout = std::io::stdout();
    writeln!(stdout)?;
    stdout.flush()?;
    log::info!(
        "Painted {} frame(s), {} bytes sent.",
        report.frames_painted,
        report.bytes_sent
    );
    Ok(())
}

/// Load the config file if present, then apply CLI overrides.
fn resolve_config(cli: &cli::Cli) -> Result<CanvasConfig> {
    let mut config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        log::warn!(
            "Config not found: {}. Using defaults.",
            cli.config.display()
        );
        CanvasConfig::default()
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(ref name) = cli.palette {
        config.palette = Palette::from_name(name);
    }
    if let Some(fps) = cli.fps {
        config.target_fps = fps;
    }

    config.clamp_all();
    config.validate()?;
    Ok(config)
}

/// Build the visual source selected on the command line.
fn open_source(cli: &cli::Cli, config: &CanvasConfig) -> Result<Box<dyn Source>> {
    if let Some(ref path) = cli.image {
        let source = fc_source::image::ImageSource::new(path, config.width, config.height)?;
        Ok(Box::new(source))
    } else if let Some(ref name) = cli.procedural {
        fc_source::create_procedural_source(name, config.width, config.height)
    } else {
        anyhow::bail!("No visual source given.")
    }
}
