use chrono::{DateTime, Utc};
use ratatui::style::Color;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::models::{Calibration, Measurement, ScanSnapshot, ScanStep};
use crate::ui::components::format_fixed;

/// Change notifications published by the scan store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreUpdate {
    MeasurementsReplaced { count: usize },
    CalibrationChanged { scale_factor: Option<f64> },
    StepChanged { step: ScanStep },
    Reset,
}

impl StoreUpdate {
    /// Short human readable description for the status bar
    pub fn describe(&self) -> String {
        match self {
            StoreUpdate::MeasurementsReplaced { count } => format!("{} measurements loaded", count),
            StoreUpdate::CalibrationChanged { scale_factor: Some(scale) } => {
                format!("calibration set ({})", format_fixed(*scale, 4))
            }
            StoreUpdate::CalibrationChanged { scale_factor: None } => "calibration cleared".to_string(),
            StoreUpdate::StepChanged { step } => format!("step -> {}", step),
            StoreUpdate::Reset => "scan state reset".to_string(),
        }
    }
}

/// Read/mutate contract of the shared scan state.
///
/// Screens receive the store by reference and never reach for global state.
pub trait ScanStore {
    fn measurements(&self) -> &[Measurement];

    fn set_measurements(&mut self, measurements: Vec<Measurement>);

    fn calibration(&self) -> Option<&Calibration>;

    fn set_calibration(&mut self, calibration: Option<Calibration>);

    fn step(&self) -> ScanStep;

    fn set_step(&mut self, step: ScanStep);

    /// Clear all scan related state
    fn reset(&mut self);

    /// Populate the store with `fallback` only when it holds no measurements.
    /// Returns true when the fallback was applied.
    fn ensure_seeded(&mut self, fallback: &[Measurement]) -> bool {
        if !self.measurements().is_empty() {
            return false;
        }
        self.set_measurements(fallback.to_vec());
        true
    }
}

/// In-process scan store that broadcasts every mutation
#[derive(Debug)]
pub struct InMemoryScanStore {
    measurements: Vec<Measurement>,
    calibration: Option<Calibration>,
    step: ScanStep,
    broadcast_sender: broadcast::Sender<StoreUpdate>,
}

impl Default for InMemoryScanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryScanStore {
    /// Create an empty store on the welcome step
    pub fn new() -> Self {
        let (broadcast_sender, _) = broadcast::channel::<StoreUpdate>(100);

        Self {
            measurements: Vec::new(),
            calibration: None,
            step: ScanStep::default(),
            broadcast_sender,
        }
    }

    /// Create a store preloaded with an upstream scan snapshot
    pub fn from_snapshot(snapshot: ScanSnapshot) -> Self {
        let mut store = Self::new();
        store.measurements = snapshot.measurements;
        store.calibration = snapshot.calibration;
        store
    }

    /// Subscribe to store updates
    pub fn subscribe(&self) -> broadcast::Receiver<StoreUpdate> {
        self.broadcast_sender.subscribe()
    }

    fn publish(&self, update: StoreUpdate) {
        debug!("Store update: {:?}", update);
        // No subscribers is fine
        let _ = self.broadcast_sender.send(update);
    }
}

impl ScanStore for InMemoryScanStore {
    fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    fn set_measurements(&mut self, measurements: Vec<Measurement>) {
        self.measurements = measurements;
        self.publish(StoreUpdate::MeasurementsReplaced {
            count: self.measurements.len(),
        });
    }

    fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    fn set_calibration(&mut self, calibration: Option<Calibration>) {
        self.calibration = calibration;
        self.publish(StoreUpdate::CalibrationChanged {
            scale_factor: calibration.map(|c| c.scale_factor),
        });
    }

    fn step(&self) -> ScanStep {
        self.step
    }

    fn set_step(&mut self, step: ScanStep) {
        info!("Scan step {} -> {}", self.step, step);
        self.step = step;
        self.publish(StoreUpdate::StepChanged { step });
    }

    fn reset(&mut self) {
        info!("Resetting scan state ({} measurements dropped)", self.measurements.len());
        self.measurements.clear();
        self.calibration = None;
        self.publish(StoreUpdate::Reset);
    }
}

/// Severity of a status line entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

impl LogLevel {
    pub fn color(&self) -> Color {
        match self {
            LogLevel::Info => Color::Cyan,
            LogLevel::Success => Color::Green,
            LogLevel::Warning => Color::Yellow,
        }
    }
}

/// Status line entry with timestamp
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

impl StatusMessage {
    pub fn new(level: LogLevel, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
        }
    }

    /// Text for display, prefixed by the wall clock time
    pub fn display_text(&self) -> String {
        format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}
