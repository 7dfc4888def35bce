//! PRACH Configuration
//!
//! Preamble formats, PRACH numerology and the configuration-index table
//! entries used by the receiver (3GPP TS 38.211 tables 6.3.3.1-1/-2 and
//! 6.3.3.2-2).

use super::constants;
use serde::{Deserialize, Serialize};

/// PRACH preamble format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrachFormat {
    /// Format 0: 839 sequence length, single occasion symbol
    Format0,
    /// Format 1: 839 sequence length, 2 repeated symbols
    Format1,
    /// Format 2: 839 sequence length, 4 repeated symbols
    Format2,
    /// Format 3: 839 sequence length, 5 kHz numerology
    Format3,
    /// Format A1: 139 sequence length (short)
    FormatA1,
    /// Format A2: 139 sequence length (short)
    FormatA2,
    /// Format A3: 139 sequence length (short)
    FormatA3,
    /// Format B1: 139 sequence length (short)
    FormatB1,
    /// Format B4: 139 sequence length (short)
    FormatB4,
    /// Format C0: 139 sequence length (short)
    FormatC0,
    /// Format C2: 139 sequence length (short)
    FormatC2,
}

impl PrachFormat {
    /// Check if this is a long preamble format
    pub fn is_long(&self) -> bool {
        matches!(self, Self::Format0 | Self::Format1 | Self::Format2 | Self::Format3)
    }

    /// Sequence length L_RA for this format
    pub fn sequence_length(&self) -> usize {
        if self.is_long() {
            constants::LONG_SEQUENCE_LENGTH
        } else {
            constants::SHORT_SEQUENCE_LENGTH
        }
    }

    /// Number of repeated occasion symbols (N_u expressed in useful symbols)
    pub fn num_repetitions(&self) -> usize {
        match self {
            Self::Format0 => 1,
            Self::Format1 => 2,
            Self::Format2 => 4,
            Self::Format3 => 4,
            Self::FormatA1 => 2,
            Self::FormatA2 => 4,
            Self::FormatA3 => 6,
            Self::FormatB1 => 2,
            Self::FormatB4 => 12,
            Self::FormatC0 => 1,
            Self::FormatC2 => 4,
        }
    }

    /// Nominal cyclic prefix length, in samples of the nominal transform
    /// returned by [`Self::nominal_transform_size`]
    pub fn nominal_cyclic_prefix(&self) -> usize {
        match self {
            Self::Format0 => 3168,
            Self::Format1 => 21024,
            Self::Format2 => 4688,
            Self::Format3 => 3168,
            Self::FormatA1 => 288,
            Self::FormatA2 => 576,
            Self::FormatA3 => 864,
            Self::FormatB1 => 216,
            Self::FormatB4 => 936,
            Self::FormatC0 => 1240,
            Self::FormatC2 => 2048,
        }
    }

    /// Nominal transform size the CP lengths of TS 38.211 are quoted against
    pub fn nominal_transform_size(&self) -> usize {
        match self {
            Self::Format0 | Self::Format1 | Self::Format2 => 24576,
            Self::Format3 => 6144,
            _ => 2048,
        }
    }

    /// B formats shorten the trailing symbol into a guard period; the
    /// detector drops it from the coherent accumulation.
    pub fn has_trailing_guard(&self) -> bool {
        matches!(self, Self::FormatB1 | Self::FormatB4)
    }
}

/// Restricted set configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestrictedSetConfig {
    UnrestrictedSet,
    RestrictedSetTypeA,
    RestrictedSetTypeB,
}

impl RestrictedSetConfig {
    /// True for either restricted set type
    pub fn is_restricted(&self) -> bool {
        !matches!(self, Self::UnrestrictedSet)
    }
}

/// PRACH subcarrier spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrachSubcarrierSpacing {
    /// 1.25 kHz (long sequences)
    Khz1_25,
    /// 5 kHz (long sequences, format 3)
    Khz5,
    /// 15 kHz (short sequences)
    Khz15,
    /// 30 kHz (short sequences)
    Khz30,
}

impl PrachSubcarrierSpacing {
    /// Subcarrier spacing in Hz
    pub fn as_hz(&self) -> f64 {
        match self {
            Self::Khz1_25 => 1_250.0,
            Self::Khz5 => 5_000.0,
            Self::Khz15 => 15_000.0,
            Self::Khz30 => 30_000.0,
        }
    }

    /// Whether this spacing belongs to the long-sequence numerology
    pub fn is_long(&self) -> bool {
        matches!(self, Self::Khz1_25 | Self::Khz5)
    }
}

/// One row of the PRACH configuration-index table
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PrachConfigurationRow {
    /// PRACH format
    pub format: PrachFormat,
    /// Starting symbol within the slot
    pub starting_symbol: u8,
    /// Occasion duration in (repeated) PRACH symbols
    pub duration: u8,
}

/// PRACH configuration selected by RRC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrachConfig {
    /// PRACH configuration index (0-255)
    pub config_index: u8,
    /// Logical root sequence start index
    pub root_sequence_index: u16,
    /// Zero correlation zone config (N_CS table row)
    pub zero_correlation_zone: u8,
    /// Restricted set configuration
    pub restricted_set: RestrictedSetConfig,
    /// PRACH subcarrier spacing
    pub subcarrier_spacing: PrachSubcarrierSpacing,
}

/// Configuration-index table lookup.
///
/// Subset of TS 38.211 Table 6.3.3.2-2 covering the rows this receiver is
/// exercised with; frame/subframe periodicity columns are omitted because the
/// receiver is handed one occasion at a time.
pub fn get_prach_configuration(index: u8) -> Option<PrachConfigurationRow> {
    match index {
        0..=2 => Some(PrachConfigurationRow {
            format: PrachFormat::Format0,
            starting_symbol: 0,
            duration: 1,
        }),
        16 => Some(PrachConfigurationRow {
            format: PrachFormat::Format1,
            starting_symbol: 0,
            duration: 2,
        }),
        24 => Some(PrachConfigurationRow {
            format: PrachFormat::Format2,
            starting_symbol: 0,
            duration: 4,
        }),
        27 => Some(PrachConfigurationRow {
            format: PrachFormat::FormatA1,
            starting_symbol: 0,
            duration: 2,
        }),
        30 => Some(PrachConfigurationRow {
            format: PrachFormat::FormatA2,
            starting_symbol: 0,
            duration: 4,
        }),
        34 => Some(PrachConfigurationRow {
            format: PrachFormat::FormatA3,
            starting_symbol: 0,
            duration: 6,
        }),
        40 => Some(PrachConfigurationRow {
            format: PrachFormat::FormatB1,
            starting_symbol: 2,
            duration: 2,
        }),
        44 => Some(PrachConfigurationRow {
            format: PrachFormat::FormatB4,
            starting_symbol: 0,
            duration: 12,
        }),
        50 => Some(PrachConfigurationRow {
            format: PrachFormat::FormatC0,
            starting_symbol: 0,
            duration: 1,
        }),
        55 => Some(PrachConfigurationRow {
            format: PrachFormat::FormatC2,
            starting_symbol: 0,
            duration: 4,
        }),
        _ => None,
    }
}
