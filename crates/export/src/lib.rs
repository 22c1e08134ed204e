//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod tour {
    use std::io::{self, Write};

    const HEADER: &str = "time_s,kind,phase,progress_pct,cam_x,cam_y,cam_z,target_x,target_y,target_z,blend,corona_opacity,title";

    /// Write the tour-frame CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row for one rendered tour frame.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub time_s: f64,
        pub kind: &'a str,
        pub phase: usize,
        pub progress_pct: f64,
        pub camera: [f64; 3],
        pub target: [f64; 3],
        pub blend: f64,
        pub corona_opacity: f64,
        pub title: &'a str,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.3},{},{},{:.3},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.4},{}",
                self.time_s,
                self.kind,
                self.phase,
                self.progress_pct,
                self.camera[0],
                self.camera[1],
                self.camera[2],
                self.target[0],
                self.target[1],
                self.target[2],
                self.blend,
                self.corona_opacity,
                quote(self.title),
            )
        }
    }

    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }
}

pub mod positions {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};

    /// One solved body position.
    #[derive(Debug, Clone, Serialize)]
    pub struct BodyPosition {
        pub name: String,
        pub x: f64,
        pub y: f64,
        pub z: f64,
        /// Distance from the Sun, same unit as the coordinates.
        pub radius: f64,
    }

    /// Document written by the position exporter.
    #[derive(Debug, Serialize)]
    pub struct PositionSet<'a> {
        /// `"au"` or `"scene"`.
        pub unit: &'a str,
        pub skipped: usize,
        pub bodies: &'a [BodyPosition],
    }

    /// Write a position set as pretty JSON followed by a newline.
    pub fn write_json(writer: &mut dyn Write, set: &PositionSet<'_>) -> io::Result<()> {
        to_writer_pretty(&mut *writer, set)?;
        writeln!(writer)
    }
}
