//! Catalog models and loaders for the solar system viewer.
//!
//! Two catalogs exist: the hand-tuned body table (planets, dwarfs and their moons on
//! decorative circular orbits) and small-body element records as published by
//! planetary-data services, where every element arrives as a numeric string.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use solar_orbits::{CircularOrbit, OrbitalElements};
use thiserror::Error;

/// Category of a catalogued body.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Planet,
    Dwarf,
    Asteroid,
    Tno,
    Comet,
}

/// Natural satellite of a catalogued body.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MoonConfig {
    pub name: String,
    pub size: f64,
    /// Distance from the parent's surface (scene units).
    pub dist: f64,
    pub speed: f64,
    #[serde(default)]
    pub initial_angle: f64,
    #[serde(default)]
    pub info: String,
}

/// Planet-like body parsed from the body catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BodyKind,
    pub size: f64,
    /// Distance from the Sun (scene units).
    pub dist: f64,
    pub speed: f64,
    #[serde(default)]
    pub initial_angle: f64,
    #[serde(default)]
    pub has_rings: bool,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub discovery_year: Option<String>,
    #[serde(default)]
    pub orbital_period: Option<String>,
    #[serde(default)]
    pub moons: Vec<MoonConfig>,
}

impl BodyConfig {
    pub fn orbit(&self) -> CircularOrbit {
        CircularOrbit::new(self.dist, self.speed, self.initial_angle)
    }

    /// Orbit of `moon` around this body.
    pub fn moon_orbit(&self, moon: &MoonConfig) -> CircularOrbit {
        CircularOrbit::moon(moon.dist, moon.speed, moon.initial_angle, self.size)
    }
}

/// Element value as delivered upstream: usually a string, occasionally a bare number.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn parse(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(v) => *v,
            RawNumber::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Raw element block of a small-body record.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawElements {
    pub a: RawNumber,
    pub e: RawNumber,
    pub i: RawNumber,
    pub om: RawNumber,
    pub w: RawNumber,
    pub ma: RawNumber,
}

/// Small-body record; `orb` is missing when the lookup found no solution.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SmallBodyRecord {
    pub name: String,
    #[serde(default)]
    pub orb: Option<RawElements>,
}

/// A validated element set ready for the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedElements {
    pub name: String,
    pub elements: OrbitalElements,
}

/// Why a small-body record was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has no orbital elements")]
    MissingElements,
    #[error("element `{0}` is not a finite number")]
    NotANumber(&'static str),
    #[error("eccentricity must lie in [0, 1)")]
    NotElliptical,
    #[error("semi-major axis must be positive")]
    NonPositiveAxis,
}

impl SmallBodyRecord {
    /// Parse and validate the element block.
    pub fn elements(&self) -> Result<OrbitalElements, RecordError> {
        let orb = self.orb.as_ref().ok_or(RecordError::MissingElements)?;
        let field = |raw: &RawNumber, name: &'static str| {
            raw.parse().ok_or(RecordError::NotANumber(name))
        };
        let elements = OrbitalElements::new(
            field(&orb.a, "a")?,
            field(&orb.e, "e")?,
            field(&orb.i, "i")?,
            field(&orb.om, "om")?,
            field(&orb.w, "w")?,
            field(&orb.ma, "ma")?,
        );
        if !(0.0..1.0).contains(&elements.e) {
            return Err(RecordError::NotElliptical);
        }
        if elements.a <= 0.0 {
            return Err(RecordError::NonPositiveAxis);
        }
        Ok(elements)
    }
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load body configurations from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let bodies: Vec<BodyConfig> = load_records(path)?;
    tracing::debug!(count = bodies.len(), "loaded body catalog");
    Ok(bodies)
}

/// Load small-body records, keeping only those with usable elliptical elements.
pub fn load_small_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<NamedElements>, ConfigError> {
    Ok(filter_records(load_small_body_records(path)?))
}

/// Load small-body records as published, without validation.
pub fn load_small_body_records<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<SmallBodyRecord>, ConfigError> {
    load_records(path)
}

/// Drop records the solver cannot handle, logging each rejection.
pub fn filter_records(records: Vec<SmallBodyRecord>) -> Vec<NamedElements> {
    let total = records.len();
    let kept: Vec<NamedElements> = records
        .into_iter()
        .filter_map(|record| match record.elements() {
            Ok(elements) => Some(NamedElements {
                name: record.name,
                elements,
            }),
            Err(err) => {
                tracing::warn!(name = %record.name, %err, "skipping small body");
                None
            }
        })
        .collect();
    tracing::debug!(total, kept = kept.len(), "filtered small-body records");
    kept
}

/// Find a body by name, ignoring case.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Option<&'a BodyConfig> {
    bodies.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
