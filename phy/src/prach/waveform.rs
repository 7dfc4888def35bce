//! Reference Preamble Waveform Generation
//!
//! Produces the time-domain PRACH preamble for one preamble index: the DFT
//! of the cyclically shifted Zadoff-Chu sequence is mapped onto the PRACH
//! subcarriers with unit-modulus bins, inverse transformed, and assembled as
//! cyclic prefix plus repeated useful symbols.

use crate::PhyError;
use crate::ofdm::prach_ofdm_info;
use super::config::{get_prach_configuration, PrachConfig};
use super::constants::{FREQ_OFFSET_BINS, MAX_NUM_PREAMBLES};
use super::inverse_fft_normalized;
use super::metadata::build_preamble_metadata;
use super::sequence::zadoff_chu;
use common::types::CarrierConfig;
use num_complex::Complex32;
use rustfft::FftPlanner;
use tracing::trace;

/// Generate the time-domain waveform of one preamble.
///
/// The returned vector spans the full occasion: leading offset, cyclic
/// prefix, then the useful symbol repeated per the format duration.
pub fn generate(
    carrier: &CarrierConfig,
    prach: &PrachConfig,
    preamble_index: u8,
) -> Result<Vec<Complex32>, PhyError> {
    if preamble_index as usize >= MAX_NUM_PREAMBLES {
        return Err(PhyError::InvalidInput(format!(
            "preamble index {} out of range 0-63",
            preamble_index
        )));
    }

    let info = prach_ofdm_info(carrier, prach)?;
    let row = get_prach_configuration(prach.config_index).ok_or_else(|| {
        PhyError::InvalidConfiguration(format!(
            "unsupported PRACH configuration index {}",
            prach.config_index
        ))
    })?;
    let metadata = build_preamble_metadata(prach)?[preamble_index as usize];

    let l_ra = row.format.sequence_length();
    let transform_size = info.transform_size;
    if FREQ_OFFSET_BINS + l_ra > transform_size {
        return Err(PhyError::InvalidConfiguration(format!(
            "transform size {} cannot carry a length-{} preamble",
            transform_size, l_ra
        )));
    }

    trace!(
        "Generating preamble {}: root u={}, C_v={}",
        preamble_index, metadata.root, metadata.cyclic_shift
    );

    // Frequency-domain preamble: DFT of the shifted root sequence,
    // normalized to unit-modulus bins (the ZC spectrum is flat)
    let mut spectrum = zadoff_chu(metadata.root, metadata.cyclic_shift, l_ra);
    let mut planner = FftPlanner::new();
    let fft_l = planner.plan_fft_forward(l_ra);
    fft_l.process(&mut spectrum);
    let scale = 1.0 / (l_ra as f32).sqrt();

    let mut symbol = vec![Complex32::new(0.0, 0.0); transform_size];
    for (k, value) in spectrum.iter().enumerate() {
        symbol[FREQ_OFFSET_BINS + k] = *value * scale;
    }
    let ifft_d = planner.plan_fft_inverse(transform_size);
    inverse_fft_normalized(&ifft_d, &mut symbol);

    // Assemble leading offset, cyclic prefix, repeated useful symbols
    let cp_length = info.cyclic_prefix_lengths[0];
    let mut waveform = Vec::with_capacity(info.occasion_length());
    waveform.resize(info.leading_offset_length, Complex32::new(0.0, 0.0));
    waveform.extend_from_slice(&symbol[transform_size - cp_length..]);
    for _ in 0..info.symbol_lengths.len() {
        waveform.extend_from_slice(&symbol);
    }

    Ok(waveform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prach::config::{PrachSubcarrierSpacing, RestrictedSetConfig};
    use common::types::{CyclicPrefix, SubcarrierSpacing};

    fn carrier() -> CarrierConfig {
        CarrierConfig {
            subcarrier_spacing: SubcarrierSpacing::Scs15,
            cyclic_prefix: CyclicPrefix::Normal,
            grid_size_rb: 52,
        }
    }

    fn prach() -> PrachConfig {
        PrachConfig {
            config_index: 27,
            root_sequence_index: 0,
            zero_correlation_zone: 11,
            restricted_set: RestrictedSetConfig::UnrestrictedSet,
            subcarrier_spacing: PrachSubcarrierSpacing::Khz15,
        }
    }

    #[test]
    fn test_waveform_layout() {
        let wave = generate(&carrier(), &prach(), 0).unwrap();
        let info = prach_ofdm_info(&carrier(), &prach()).unwrap();

        assert_eq!(wave.len(), info.occasion_length());

        // cyclic prefix equals the tail of the first useful symbol
        let cp = info.cyclic_prefix_lengths[0];
        let d = info.transform_size;
        for i in 0..cp {
            let from_cp = wave[info.leading_offset_length + i];
            let from_tail = wave[info.leading_offset_length + cp + d - cp + i];
            assert!((from_cp - from_tail).norm() < 1e-6);
        }

        // repeated symbols are identical
        let first = &wave[info.useful_part_offset()..info.useful_part_offset() + d];
        let second = &wave[info.useful_part_offset() + d..info.useful_part_offset() + 2 * d];
        for (a, b) in first.iter().zip(second) {
            assert!((*a - *b).norm() < 1e-6);
        }
    }

    #[test]
    fn test_waveform_carries_energy() {
        let wave = generate(&carrier(), &prach(), 5).unwrap();
        let energy: f32 = wave.iter().map(|s| s.norm_sqr()).sum();
        assert!(energy > 0.0);
    }

    #[test]
    fn test_waveforms_differ_per_preamble() {
        let a = generate(&carrier(), &prach(), 0).unwrap();
        let b = generate(&carrier(), &prach(), 1).unwrap();
        let diff: f32 = a.iter().zip(&b).map(|(x, y)| (*x - *y).norm_sqr()).sum();
        assert!(diff > 1e-3);
    }

    #[test]
    fn test_out_of_range_preamble_rejected() {
        assert!(matches!(
            generate(&carrier(), &prach(), 64),
            Err(PhyError::InvalidInput(_))
        ));
    }
}
