//! Physical Layer Library for NR Random Access
//!
//! This crate implements PRACH preamble detection according to 3GPP TS 38.211:
//! a receiver that, given a baseband waveform, decides which random-access
//! preamble (if any) was transmitted and estimates its arrival time.

pub mod ofdm;
pub mod prach;

use thiserror::Error;

// Re-export the public detection surface
pub use prach::config::{
    PrachConfig, PrachFormat, PrachSubcarrierSpacing, RestrictedSetConfig,
};
pub use prach::detector::{detect, DetectionOutcome, PrachDetector, ThresholdPolicy};

/// Common errors for physical-layer processing
#[derive(Error, Debug)]
pub enum PhyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}
