use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod demo;

/// A single captured body dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub confidence: f64, // 0.0 - 1.0, not validated
    pub grade: Grade,
}

impl Measurement {
    pub fn new(name: &str, value: f64, unit: &str, confidence: f64, grade: Grade) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            confidence,
            grade,
        }
    }
}

/// Priority classification of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Primary measurement
    P0,
    /// Secondary measurement
    P1,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::P0 => write!(f, "P0"),
            Grade::P1 => write!(f, "P1"),
        }
    }
}

/// Scan-wide scale correction data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    #[serde(rename = "scaleFactor")]
    pub scale_factor: f64,
}

impl Calibration {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }
}

/// Workflow step of the scanning application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStep {
    #[default]
    Welcome,
    Results,
}

impl ScanStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStep::Welcome => "welcome",
            ScanStep::Results => "results",
        }
    }
}

impl fmt::Display for ScanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanStep {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "welcome" => Ok(ScanStep::Welcome),
            "results" => Ok(ScanStep::Results),
            other => Err(anyhow::anyhow!("Unknown scan step: {}", other)),
        }
    }
}

/// Errors raised while reading a scan snapshot file
#[derive(Debug, thiserror::Error)]
pub enum ScanFileError {
    #[error("failed to read scan file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scan file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Output of an upstream scan: measurements plus optional calibration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSnapshot {
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    #[serde(default)]
    pub calibration: Option<Calibration>,
}

impl ScanSnapshot {
    /// Parse a snapshot from a JSON file on disk
    pub fn from_json_file(path: &Path) -> Result<Self, ScanFileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScanFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ScanFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Configuration for the application
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub scan_results_path: Option<PathBuf>,
    pub show_confidences: bool,
    pub scale_factor: Option<f64>,
    pub start_step: ScanStep,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_results_path: None,
            show_confidences: false,
            scale_factor: None,
            start_step: ScanStep::Results,
            log_filter: "body_scan_results=error".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let show_confidences = match lookup("SHOW_CONFIDENCES") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow::anyhow!("SHOW_CONFIDENCES must be true or false, got '{}'", raw))?,
            None => defaults.show_confidences,
        };

        let scale_factor = match lookup("SCAN_SCALE_FACTOR") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<f64>()
                    .map_err(|_| anyhow::anyhow!("SCAN_SCALE_FACTOR must be a number, got '{}'", raw))?,
            ),
            None => None,
        };

        let start_step = match lookup("SCAN_START_STEP") {
            Some(raw) => raw.parse::<ScanStep>()?,
            None => defaults.start_step,
        };

        Ok(Config {
            scan_results_path: lookup("SCAN_RESULTS_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            show_confidences,
            scale_factor,
            start_step,
            log_filter: lookup("LOG_FILTER").unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Arithmetic mean of the confidences, 0.0 for an empty list
pub fn overall_confidence(measurements: &[Measurement]) -> f64 {
    if measurements.is_empty() {
        return 0.0;
    }

    let total: f64 = measurements.iter().map(|m| m.confidence).sum();
    total / measurements.len() as f64
}
