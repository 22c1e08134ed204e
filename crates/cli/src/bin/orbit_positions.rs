use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use solar_viewer::config::{filter_records, load_small_body_records};
use solar_viewer::export::positions::{self, BodyPosition, PositionSet};
use solar_viewer::export::writer_for_path;
use tracing_subscriber::EnvFilter;

/// Solve catalogued small-body elements into heliocentric positions.
#[derive(Parser, Debug)]
#[command(author, version, about = "Small-body position solver (Keplerian elements)")]
struct Cli {
    /// Small-body catalog (YAML file, TOML file, or directory of TOML files)
    #[arg(long, default_value = "data/small_bodies.yaml")]
    catalog: PathBuf,

    /// Report positions in AU instead of scene units
    #[arg(long, default_value_t = false)]
    au: bool,

    /// Output JSON file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let records = load_small_body_records(&cli.catalog)?;
    let total = records.len();
    let bodies = filter_records(records);
    let skipped = total - bodies.len();

    let solved: Vec<BodyPosition> = bodies
        .iter()
        .map(|body| {
            let au = body.elements.to_cartesian();
            let p = if cli.au { au } else { au.to_scene() };
            BodyPosition {
                name: body.name.clone(),
                x: p.x,
                y: p.y,
                z: p.z,
                radius: p.magnitude(),
            }
        })
        .collect();

    tracing::info!(
        catalog = %cli.catalog.display(),
        solved = solved.len(),
        skipped,
        "solved small-body positions"
    );

    let mut writer = writer_for_path(&cli.output)?;
    positions::write_json(
        writer.as_mut(),
        &PositionSet {
            unit: if cli.au { "au" } else { "scene" },
            skipped,
            bodies: &solved,
        },
    )?;
    writer.flush()?;
    Ok(())
}
