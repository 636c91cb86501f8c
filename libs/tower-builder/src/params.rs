//! # Tower Parameters
//!
//! The input configuration: pole dimensions, top-ring radius, antenna size,
//! per-sector antenna counts and the number of levels.
//!
//! ## JSON format
//!
//! ```json
//! {
//!   "pole_height": 20,
//!   "pole_radius": 0.1,
//!   "antenna_distance_from_pole": 1.4,
//!   "antenna_height": 0.2,
//!   "antennas": { "a": 2, "B": 0, "C": 5 },
//!   "num_levels": 4
//! }
//! ```
//!
//! Sector keys are case-insensitive, missing sectors count as zero and keys
//! other than A, B or C are ignored with a warning. Dimensions may also be
//! numeric strings (`"20"`); counts and `num_levels` may be integral floats
//! (`5.0`) but not fractional ones. `num_levels` is optional.

use crate::error::{BuildError, BuildResult};
use config::constants::{
    DEFAULT_ANTENNA_DISTANCE, DEFAULT_ANTENNA_HEIGHT, DEFAULT_NUM_LEVELS, DEFAULT_POLE_HEIGHT,
    DEFAULT_POLE_RADIUS,
};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

// =============================================================================
// SECTORS
// =============================================================================

/// One of the three faces of the tower.
///
/// Sector `i` owns edge `i` of the top triangle (vertex `i` to vertex `i+1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sector {
    A,
    B,
    C,
}

impl Sector {
    /// All sectors in their fixed cyclic order.
    pub const ALL: [Sector; 3] = [Sector::A, Sector::B, Sector::C];

    /// Index of the triangle edge this sector is mounted on.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Sector::A => 0,
            Sector::B => 1,
            Sector::C => 2,
        }
    }

    /// Upper-case label.
    pub fn label(self) -> &'static str {
        match self {
            Sector::A => "A",
            Sector::B => "B",
            Sector::C => "C",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Sector::A),
            "B" => Ok(Sector::B),
            "C" => Ok(Sector::C),
            _ => Err(BuildError::UnknownSector(s.to_string())),
        }
    }
}

/// Antenna count for every sector.
///
/// # Example
///
/// ```rust
/// use tower_builder::{Sector, SectorCounts};
///
/// let counts = SectorCounts::new(2, 0, 5);
/// assert_eq!(counts[Sector::C], 5);
/// assert_eq!(counts.total(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectorCounts([u32; 3]);

impl SectorCounts {
    /// Creates counts for sectors A, B and C.
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self([a, b, c])
    }

    /// Sum over all sectors.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Iterates `(sector, count)` in sector order.
    pub fn iter(&self) -> impl Iterator<Item = (Sector, u32)> + '_ {
        Sector::ALL.iter().map(move |&s| (s, self[s]))
    }
}

impl Index<Sector> for SectorCounts {
    type Output = u32;

    fn index(&self, sector: Sector) -> &u32 {
        &self.0[sector.index()]
    }
}

impl IndexMut<Sector> for SectorCounts {
    fn index_mut(&mut self, sector: Sector) -> &mut u32 {
        &mut self.0[sector.index()]
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Validated tower configuration.
///
/// # Example
///
/// ```rust
/// use tower_builder::{Sector, TowerConfig};
///
/// let config = TowerConfig::from_json_str(r#"{
///     "pole_height": 20, "pole_radius": 0.1,
///     "antenna_distance_from_pole": 1.4, "antenna_height": 0.2,
///     "antennas": {"a": 2, "C": 5}
/// }"#).unwrap();
/// assert_eq!(config.antenna_counts[Sector::A], 2);
/// assert_eq!(config.antenna_counts[Sector::B], 0);
/// assert_eq!(config.num_levels, 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TowerConfig {
    pub pole_height: f64,
    pub pole_radius: f64,
    /// Radius of the top triangular rings.
    pub antenna_distance_from_pole: f64,
    pub antenna_height: f64,
    pub antenna_counts: SectorCounts,
    pub num_levels: u32,
}

/// On-disk shape of a configuration, before validation.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(deserialize_with = "lenient_f64")]
    pole_height: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pole_radius: f64,
    #[serde(deserialize_with = "lenient_f64")]
    antenna_distance_from_pole: f64,
    #[serde(deserialize_with = "lenient_f64")]
    antenna_height: f64,
    #[serde(deserialize_with = "lenient_counts")]
    antennas: BTreeMap<String, i64>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    num_levels: Option<i64>,
}

/// A JSON number or a string holding one.
#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    fn into_f64(self) -> Result<f64, String> {
        match self {
            Numeric::Int(n) => Ok(n as f64),
            Numeric::Float(v) => Ok(v),
            Numeric::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("expected a number, found {s:?}")),
        }
    }

    /// Integers and integral floats; fractional values are rejected.
    fn into_i64(self) -> Result<i64, String> {
        match self {
            Numeric::Int(n) => Ok(n),
            Numeric::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(v as i64),
            Numeric::Float(v) => Err(format!("expected an integer, found {v}")),
            Numeric::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("expected an integer, found {s:?}")),
        }
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Numeric::deserialize(deserializer)?
        .into_f64()
        .map_err(D::Error::custom)
}

fn lenient_opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Option::<Numeric>::deserialize(deserializer)?
        .map(Numeric::into_i64)
        .transpose()
        .map_err(D::Error::custom)
}

fn lenient_counts<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, i64>, D::Error> {
    BTreeMap::<String, Numeric>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, value)| {
            value
                .into_i64()
                .map(|count| (key.clone(), count))
                .map_err(|e| D::Error::custom(format!("antennas.{key}: {e}")))
        })
        .collect()
}

impl TowerConfig {
    /// Configuration with the default dimensions and the given counts.
    pub fn with_counts(antenna_counts: SectorCounts) -> Self {
        Self {
            pole_height: DEFAULT_POLE_HEIGHT,
            pole_radius: DEFAULT_POLE_RADIUS,
            antenna_distance_from_pole: DEFAULT_ANTENNA_DISTANCE,
            antenna_height: DEFAULT_ANTENNA_HEIGHT,
            antenna_counts,
            num_levels: DEFAULT_NUM_LEVELS,
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> BuildResult<Self> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> BuildResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Serializes to pretty-printed JSON with upper-case sector keys.
    pub fn to_json_string(&self) -> BuildResult<String> {
        let file = ConfigFile {
            pole_height: self.pole_height,
            pole_radius: self.pole_radius,
            antenna_distance_from_pole: self.antenna_distance_from_pole,
            antenna_height: self.antenna_height,
            antennas: self
                .antenna_counts
                .iter()
                .map(|(sector, count)| (sector.label().to_string(), i64::from(count)))
                .collect(),
            num_levels: Some(i64::from(self.num_levels)),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Checks every dimension is finite and positive and at least one level
    /// is requested.
    pub fn validate(&self) -> BuildResult<()> {
        let dimensions = [
            ("pole_height", self.pole_height),
            ("pole_radius", self.pole_radius),
            ("antenna_distance_from_pole", self.antenna_distance_from_pole),
            ("antenna_height", self.antenna_height),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(BuildError::invalid(name, value, "must be positive"));
            }
        }

        if self.num_levels < 1 {
            return Err(BuildError::invalid(
                "num_levels",
                f64::from(self.num_levels),
                "must be at least 1",
            ));
        }

        Ok(())
    }
}

impl TryFrom<ConfigFile> for TowerConfig {
    type Error = BuildError;

    fn try_from(file: ConfigFile) -> BuildResult<Self> {
        let mut counts = SectorCounts::default();
        let mut seen = [false; 3];
        for (key, count) in file.antennas {
            let Ok(sector) = key.parse::<Sector>() else {
                warn!(key = %key, count, "Ignoring unknown antenna sector");
                continue;
            };
            if std::mem::replace(&mut seen[sector.index()], true) {
                return Err(BuildError::DuplicateSector { sector });
            }
            counts[sector] =
                u32::try_from(count).map_err(|_| BuildError::NegativeCount { sector, count })?;
        }

        let num_levels = match file.num_levels {
            None => DEFAULT_NUM_LEVELS,
            Some(n) => u32::try_from(n)
                .ok()
                .filter(|&n| n >= 1)
                .ok_or_else(|| BuildError::invalid("num_levels", n as f64, "must be at least 1"))?,
        };

        let config = Self {
            pole_height: file.pole_height,
            pole_radius: file.pole_radius,
            antenna_distance_from_pole: file.antenna_distance_from_pole,
            antenna_height: file.antenna_height,
            antenna_counts: counts,
            num_levels,
        };
        config.validate()?;
        Ok(config)
    }
}
