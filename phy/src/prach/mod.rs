//! PRACH (Physical Random Access Channel) Receiver
//!
//! Implements PRACH preamble detection according to 3GPP TS 38.211.
//! The detector correlates the received occasion against the root Zadoff-Chu
//! sequences touched by the candidate preamble set, applies an adaptive noise
//! threshold, and decodes the winning correlation peak into a preamble index
//! and a fractional timing offset.

pub mod config;
pub mod detector;
pub mod metadata;
pub mod sequence;
pub mod waveform;

use num_complex::Complex32;
use rustfft::Fft;
use std::sync::Arc;

/// PRACH constants according to 3GPP
pub mod constants {
    /// Long sequence length (formats 0-3)
    pub const LONG_SEQUENCE_LENGTH: usize = 839;
    /// Short sequence length (formats A1-C2)
    pub const SHORT_SEQUENCE_LENGTH: usize = 139;
    /// Maximum number of preambles per cell
    pub const MAX_NUM_PREAMBLES: usize = 64;
    /// First subcarrier of the preamble within the PRACH transform
    pub const FREQ_OFFSET_BINS: usize = 12;
}

/// Inverse transform with 1/N normalization, in place.
pub(crate) fn inverse_fft_normalized(ifft: &Arc<dyn Fft<f32>>, buffer: &mut [Complex32]) {
    ifft.process(buffer);
    let scale = 1.0 / buffer.len() as f32;
    for value in buffer.iter_mut() {
        *value *= scale;
    }
}
