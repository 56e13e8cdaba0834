//! Export and share capabilities for captured measurements.
//!
//! Neither has a wire contract yet, so the shipped implementations report
//! `ActionError::NotImplemented` instead of silently doing nothing.

use crate::models::Measurement;

/// Failure of a results screen action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("{action} is not available yet")]
    NotImplemented { action: &'static str },
}

pub trait MeasurementExporter {
    fn export(&self, measurements: &[Measurement]) -> Result<(), ActionError>;
}

pub trait MeasurementSharer {
    fn share(&self, measurements: &[Measurement]) -> Result<(), ActionError>;
}

/// Exporter placeholder until a file format is decided
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableExporter;

impl MeasurementExporter for UnavailableExporter {
    fn export(&self, _measurements: &[Measurement]) -> Result<(), ActionError> {
        Err(ActionError::NotImplemented { action: "Export" })
    }
}

/// Sharer placeholder until a share target exists
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableSharer;

impl MeasurementSharer for UnavailableSharer {
    fn share(&self, _measurements: &[Measurement]) -> Result<(), ActionError> {
        Err(ActionError::NotImplemented { action: "Share" })
    }
}
