use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, ValueEnum};
use solar_viewer::export::tour::{Record, write_header};
use solar_viewer::export::writer_for_path;
use solar_viewer::tour::{TourConfig, TourKind};
use solar_viewer::view::camera::HOME_POSITION;
use solar_viewer::view::{UiAction, UiState};
use tracing_subscriber::EnvFilter;

/// Play an eclipse tour at a fixed frame step and dump every frame as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about = "Eclipse tour frame generator")]
struct Cli {
    /// Which eclipse to narrate
    #[arg(long, value_enum, default_value_t = Kind::Solar)]
    kind: Kind,

    /// Frame step in seconds
    #[arg(long, default_value_t = 1.0)]
    dt: f64,

    /// Length of each of the five phases in seconds
    #[arg(long, default_value_t = 12.0)]
    phase_seconds: f64,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Kind {
    Solar,
    Lunar,
}

impl From<Kind> for TourKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Solar => TourKind::Solar,
            Kind::Lunar => TourKind::Lunar,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if !(cli.dt > 0.0 && cli.dt.is_finite()) {
        bail!("--dt must be a positive number of seconds");
    }
    let config = TourConfig::new(
        cli.phase_seconds,
        TourConfig::default().first_phase_smoothing,
    )?;
    let kind = TourKind::from(cli.kind);
    let kind_label = kind.to_string();

    let mut writer = writer_for_path(&cli.output)?;
    write_header(writer.as_mut())?;

    let mut ui = UiState::default().reduce(UiAction::StartEclipseTour(kind));
    let mut camera = HOME_POSITION;
    let mut time_s = 0.0;
    let mut frames = 0usize;
    let mut last_phase = 0usize;

    while ui.tour_active() {
        time_s += cli.dt;
        let (next, frame) = ui.advance_tour(cli.dt, camera, &config);
        ui = next;
        let Some(frame) = frame else {
            continue;
        };
        if frame.phase != last_phase {
            tracing::debug!(phase = frame.phase, time_s, "tour phase change");
            last_phase = frame.phase;
        }
        camera = frame.camera.position;
        Record {
            time_s,
            kind: &kind_label,
            phase: frame.phase,
            progress_pct: frame.progress,
            camera: frame.camera.position,
            target: frame.camera.target,
            blend: frame.blend,
            corona_opacity: frame.corona_opacity,
            title: frame.text.title,
        }
        .write_to(writer.as_mut())?;
        frames += 1;
    }
    writer.flush()?;

    tracing::info!(kind = %kind_label, frames, completed_at_s = time_s, "eclipse tour finished");
    Ok(())
}
