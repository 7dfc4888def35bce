//! Common Types for the NR PRACH Receiver
//!
//! Defines the carrier numerology types shared across the receiver

use serde::{Deserialize, Serialize};
use num_derive::{FromPrimitive, ToPrimitive};

/// Subcarrier spacing values in kHz
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Serialize, Deserialize)]
pub enum SubcarrierSpacing {
    /// 15 kHz
    Scs15 = 15,
    /// 30 kHz
    Scs30 = 30,
    /// 60 kHz
    Scs60 = 60,
    /// 120 kHz
    Scs120 = 120,
}

impl SubcarrierSpacing {
    /// Subcarrier spacing in Hz
    pub fn as_hz(&self) -> f64 {
        (*self as u32 as f64) * 1e3
    }
}

/// Cyclic prefix type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CyclicPrefix {
    Normal,
    Extended,
}

/// Uplink carrier numerology
///
/// Carries the subcarrier spacing, cyclic prefix type and resource grid size
/// of the carrier the PRACH occasion is received on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarrierConfig {
    /// Carrier subcarrier spacing
    pub subcarrier_spacing: SubcarrierSpacing,
    /// Cyclic prefix type (normal/extended)
    pub cyclic_prefix: CyclicPrefix,
    /// Resource grid size in resource blocks
    pub grid_size_rb: u16,
}

impl CarrierConfig {
    /// FFT size for this carrier: next power of two covering the grid
    pub fn fft_size(&self) -> usize {
        let min_fft = self.grid_size_rb as usize * 12;
        min_fft.next_power_of_two()
    }

    /// Natural sample rate in Hz (FFT size x SCS)
    pub fn sample_rate(&self) -> f64 {
        self.fft_size() as f64 * self.subcarrier_spacing.as_hz()
    }

    /// Cyclic prefix length in samples of a regular carrier symbol
    pub fn cyclic_prefix_length(&self) -> usize {
        // Scaled from the 2048-FFT nominal lengths of TS 38.211
        match self.cyclic_prefix {
            CyclicPrefix::Normal => self.fft_size() * 144 / 2048,
            CyclicPrefix::Extended => self.fft_size() * 512 / 2048,
        }
    }

    /// Carrier OFDM symbol length in samples including cyclic prefix
    pub fn symbol_length(&self) -> usize {
        self.fft_size() + self.cyclic_prefix_length()
    }
}
