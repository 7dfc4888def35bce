//! PRACH OFDM Timing Information
//!
//! Derives the time-domain layout of one PRACH occasion from the carrier and
//! PRACH configurations: transform size, sample rate, cyclic prefix and
//! symbol lengths, and the leading offset of the occasion within the slot.

use crate::PhyError;
use crate::prach::config::{get_prach_configuration, PrachConfig};
use common::types::CarrierConfig;

/// Time-domain layout of one PRACH occasion
#[derive(Debug, Clone)]
pub struct PrachOfdmInfo {
    /// Length of each repeated occasion symbol in samples
    pub symbol_lengths: Vec<usize>,
    /// Cyclic prefix length preceding each symbol in samples
    /// (only the first symbol of an occasion carries a CP)
    pub cyclic_prefix_lengths: Vec<usize>,
    /// Samples before the occasion starts (starting-symbol offset)
    pub leading_offset_length: usize,
    /// PRACH transform size D = sample_rate / prach_scs
    pub transform_size: usize,
    /// Receive sample rate in Hz
    pub sample_rate: f64,
}

impl PrachOfdmInfo {
    /// Sample offset of the first useful part within the waveform
    pub fn useful_part_offset(&self) -> usize {
        self.leading_offset_length + self.cyclic_prefix_lengths.first().copied().unwrap_or(0)
    }

    /// Total occasion span in samples
    pub fn occasion_length(&self) -> usize {
        self.leading_offset_length
            + self.cyclic_prefix_lengths.iter().sum::<usize>()
            + self.symbol_lengths.iter().sum::<usize>()
    }
}

/// Compute the PRACH OFDM layout for one occasion
pub fn prach_ofdm_info(
    carrier: &CarrierConfig,
    prach: &PrachConfig,
) -> Result<PrachOfdmInfo, PhyError> {
    let row = get_prach_configuration(prach.config_index).ok_or_else(|| {
        PhyError::InvalidConfiguration(format!(
            "unsupported PRACH configuration index {}",
            prach.config_index
        ))
    })?;

    if row.format.is_long() != prach.subcarrier_spacing.is_long() {
        return Err(PhyError::InvalidConfiguration(format!(
            "PRACH SCS {:?} does not match format {:?}",
            prach.subcarrier_spacing, row.format
        )));
    }

    let sample_rate = carrier.sample_rate();
    let prach_scs_hz = prach.subcarrier_spacing.as_hz();
    if prach_scs_hz <= 0.0 || sample_rate <= 0.0 {
        return Err(PhyError::InvalidConfiguration(
            "non-positive subcarrier spacing or sample rate".to_string(),
        ));
    }

    let ratio = sample_rate / prach_scs_hz;
    let transform_size = ratio.round() as usize;
    if transform_size == 0 || (ratio - transform_size as f64).abs() > 1e-9 {
        return Err(PhyError::InvalidConfiguration(format!(
            "sample rate {} is not an integer multiple of PRACH SCS {}",
            sample_rate, prach_scs_hz
        )));
    }

    // Scale the nominal 3GPP CP length to the configured transform size
    let cp_length =
        row.format.nominal_cyclic_prefix() * transform_size / row.format.nominal_transform_size();

    let repetitions = row.duration as usize;
    let mut cyclic_prefix_lengths = vec![0usize; repetitions];
    cyclic_prefix_lengths[0] = cp_length;

    Ok(PrachOfdmInfo {
        symbol_lengths: vec![transform_size; repetitions],
        cyclic_prefix_lengths,
        leading_offset_length: row.starting_symbol as usize * carrier.symbol_length(),
        transform_size,
        sample_rate,
    })
}
