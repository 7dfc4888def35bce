//! PRACH Preamble Detection
//!
//! Frequency-domain correlation of the received occasion against each root
//! sequence touched by the candidate preamble set, adaptive noise
//! thresholding, Doppler side-peak folding for restricted sets, and decoding
//! of the winning peak into a preamble index plus a fractional timing offset.

use crate::PhyError;
use crate::ofdm::prach_ofdm_info;
use super::config::{get_prach_configuration, PrachConfig};
use super::inverse_fft_normalized;
use super::metadata::{build_preamble_metadata, group_by_root};
use super::waveform;
use common::types::CarrierConfig;
use ndarray::Array2;
use num_complex::Complex32;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Empirical gain applied to the in-band noise variance estimate
const THRESHOLD_GAIN: f32 = 100.0;

/// Fraction of the reference-spectrum peak above which a bin counts as an
/// active preamble subcarrier
const ACTIVE_BIN_FRACTION: f32 = 0.1;

/// Which repetition windows feed the noise threshold estimate.
///
/// The reference receiver estimates from the last repetition's spectrum
/// only; whether that narrowing was intended is unresolved, so the policy is
/// configurable and defaults to the observed behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdPolicy {
    /// Estimate from the last repetition window only (default)
    #[default]
    LastWindow,
    /// Average the estimate across all repetition windows
    Averaged,
}

/// Detection outcome for one PRACH occasion.
///
/// Index and timing offset are either both present or both absent; at most
/// one preamble is reported per occasion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionOutcome {
    preamble_index: Option<u8>,
    timing_offset: Option<f32>,
}

impl DetectionOutcome {
    /// No preamble detected (an expected outcome, not an error)
    pub fn none() -> Self {
        Self {
            preamble_index: None,
            timing_offset: None,
        }
    }

    /// A detected preamble with its timing offset in samples
    pub fn detected(preamble_index: u8, timing_offset: f32) -> Self {
        Self {
            preamble_index: Some(preamble_index),
            timing_offset: Some(timing_offset),
        }
    }

    /// Detected preamble index (0-63), if any
    pub fn preamble_index(&self) -> Option<u8> {
        self.preamble_index
    }

    /// Timing offset in samples, if a preamble was detected
    pub fn timing_offset(&self) -> Option<f32> {
        self.timing_offset
    }

    /// True when a preamble was detected
    pub fn is_detected(&self) -> bool {
        self.preamble_index.is_some()
    }
}

/// PRACH detector for one carrier/PRACH configuration
pub struct PrachDetector {
    carrier: CarrierConfig,
    prach: PrachConfig,
    threshold_policy: ThresholdPolicy,
    /// FFT planner reused across calls (plan cache only, no detection state)
    planner: FftPlanner<f32>,
}

impl PrachDetector {
    /// Create a new PRACH detector, validating the configuration
    pub fn new(carrier: CarrierConfig, prach: PrachConfig) -> Result<Self, PhyError> {
        prach_ofdm_info(&carrier, &prach)?;
        build_preamble_metadata(&prach)?;

        Ok(Self {
            carrier,
            prach,
            threshold_policy: ThresholdPolicy::default(),
            planner: FftPlanner::new(),
        })
    }

    /// Select the threshold estimation policy
    pub fn with_threshold_policy(mut self, policy: ThresholdPolicy) -> Self {
        self.threshold_policy = policy;
        self
    }

    /// Detect at most one preamble in the received occasion.
    ///
    /// `waveform` is the received baseband matrix [samples x antennas];
    /// `candidates` is the preamble subset the caller is interested in.
    /// Groups are scanned in ascending representative index and antennas are
    /// accumulated in ascending antenna index, so results are reproducible.
    pub fn detect(
        &mut self,
        waveform: &Array2<Complex32>,
        candidates: &[u8],
    ) -> Result<DetectionOutcome, PhyError> {
        let info = prach_ofdm_info(&self.carrier, &self.prach)?;
        let row = get_prach_configuration(self.prach.config_index).ok_or_else(|| {
            PhyError::InvalidConfiguration(format!(
                "unsupported PRACH configuration index {}",
                self.prach.config_index
            ))
        })?;
        let l_ra = row.format.sequence_length();
        let transform_size = info.transform_size;

        // Repetitions to accumulate; B formats reserve a trailing guard
        // symbol that is left out of the accumulation
        let repetitions = info.symbol_lengths.len();
        let num_windows = if row.format.has_trailing_guard() {
            repetitions.saturating_sub(1).max(1)
        } else {
            repetitions
        };

        let num_antennas = waveform.ncols();
        if num_antennas == 0 {
            return Err(PhyError::InvalidInput(
                "waveform has no receive antennas".to_string(),
            ));
        }
        let required = info.useful_part_offset() + num_windows * transform_size;
        if waveform.nrows() < required {
            return Err(PhyError::InvalidInput(format!(
                "waveform has {} samples, occasion needs {}",
                waveform.nrows(),
                required
            )));
        }

        let metadata = build_preamble_metadata(&self.prach)?;
        let groups = group_by_root(&metadata, candidates)?;
        let restricted = self.prach.restricted_set.is_restricted();
        debug!(
            "PRACH detection: {} group(s), {} window(s), D={}, {} antenna(s)",
            groups.len(),
            num_windows,
            transform_size,
            num_antennas
        );

        let fft = self.planner.plan_fft_forward(transform_size);
        let ifft = self.planner.plan_fft_inverse(transform_size);

        let numerology_gain = ((self.carrier.subcarrier_spacing.as_hz()
            / self.prach.subcarrier_spacing.as_hz())
            / 12.0) as f32;

        let mut threshold = 0.0f32;
        let mut correlations: Vec<Vec<f32>> = Vec::with_capacity(groups.len());

        for (group_idx, group) in groups.iter().enumerate() {
            let reference = waveform::generate(&self.carrier, &self.prach, group.representative)?;
            let useful_offset = info.useful_part_offset();
            let mut ref_spectrum: Vec<Complex32> =
                reference[useful_offset..useful_offset + transform_size].to_vec();
            fft.process(&mut ref_spectrum);

            let mut corr = vec![0.0f32; transform_size];
            let mut antenna_thresholds = Vec::with_capacity(num_antennas);

            for antenna in 0..num_antennas {
                let column = waveform.column(antenna);
                let mut acc = vec![0.0f32; transform_size];
                let mut window_variances = Vec::with_capacity(num_windows);

                for window in 0..num_windows {
                    let start = useful_offset + window * transform_size;
                    let mut spectrum: Vec<Complex32> =
                        (0..transform_size).map(|t| column[start + t]).collect();
                    fft.process(&mut spectrum);

                    // The threshold uses the first group only; the window
                    // selection follows the configured policy
                    let estimate_window = group_idx == 0
                        && match self.threshold_policy {
                            ThresholdPolicy::LastWindow => window + 1 == num_windows,
                            ThresholdPolicy::Averaged => true,
                        };
                    if estimate_window {
                        window_variances.push(masked_noise_variance(
                            &spectrum,
                            &ref_spectrum,
                            &ifft,
                        ));
                    }

                    let mut product: Vec<Complex32> = spectrum
                        .iter()
                        .zip(&ref_spectrum)
                        .map(|(r, s)| *r * s.conj())
                        .collect();
                    inverse_fft_normalized(&ifft, &mut product);
                    for (a, x) in acc.iter_mut().zip(&product) {
                        *a += x.norm_sqr();
                    }
                }

                let window_scale = 1.0 / (num_windows as f32).sqrt();
                for (c, a) in corr.iter_mut().zip(&acc) {
                    *c += a * window_scale;
                }

                if group_idx == 0 {
                    let variance = window_variances.iter().sum::<f32>()
                        / window_variances.len() as f32;
                    antenna_thresholds.push(variance * THRESHOLD_GAIN * numerology_gain);
                }
            }

            for c in corr.iter_mut() {
                *c /= num_antennas as f32;
            }

            if group_idx == 0 {
                threshold = antenna_thresholds.iter().sum::<f32>()
                    / num_antennas as f32
                    / (num_antennas as f32).sqrt();
                debug!("detection threshold {:.3e}", threshold);
            }

            if restricted {
                let guard = metadata[group.representative as usize].doppler_cyclic_offset;
                let cyclic_offset = doppler_cyclic_offset_samples(guard, l_ra, transform_size);
                fold_doppler_side_peak(&mut corr, cyclic_offset);
            }

            correlations.push(corr);
        }

        // Global best peak across groups; ties keep the first group in
        // ascending representative order
        let mut best: Option<(usize, usize, f32)> = None;
        for (group_idx, corr) in correlations.iter().enumerate() {
            let (position, value) = arg_max(corr);
            trace!(
                "group {} (root u={}): peak {:.3e} at {}",
                group_idx, groups[group_idx].root, value, position
            );
            if value > threshold && best.map_or(true, |(_, _, b)| value > b) {
                best = Some((group_idx, position, value));
            }
        }
        let Some((group_idx, position, value)) = best else {
            debug!("no correlation peak above threshold {:.3e}", threshold);
            return Ok(DetectionOutcome::none());
        };

        let group = &groups[group_idx];
        let rep_meta = metadata[group.representative as usize];
        let d_f = transform_size as f64;
        let l_f = l_ra as f64;

        // One cyclic-shift window in output samples, and the trailing
        // fraction of it folded into the next window
        let zcz = rep_meta.ncs as f64 / l_f * d_f;
        let deadzone = if zcz != 0.0 { (d_f / l_f) / zcz } else { 0.0 };
        let guard_span = deadzone * zcz;

        // A peak just before a window boundary wraps to a small negative
        // offset of the next window
        let maxpos = (position as f64 + guard_span).rem_euclid(d_f) - guard_span;

        let decoded = if rep_meta.sibling_count <= 1 {
            // Whole root maps to one preamble: position is the offset
            Some((group.representative, maxpos))
        } else {
            let doppler_offset =
                doppler_cyclic_offset_samples(rep_meta.doppler_cyclic_offset, l_ra, transform_size)
                    as f64;
            let mut decoded = None;
            'shifts: for v in 0..rep_meta.sibling_count {
                let shift =
                    metadata[group.representative as usize + v as usize].cyclic_shift as f64;
                let shift_offset = (l_f - shift).rem_euclid(l_f) / l_f * d_f;
                let candidate = maxpos - shift_offset;

                let hypotheses = if restricted {
                    vec![candidate, candidate - doppler_offset, candidate + doppler_offset]
                } else {
                    vec![candidate]
                };
                for hypothesis in hypotheses {
                    if zcz != 0.0 && (hypothesis / zcz + deadzone).floor() == 0.0 {
                        let index = group.representative + v % rep_meta.sibling_count;
                        decoded = Some((index, hypothesis.max(0.0)));
                        break 'shifts;
                    }
                }
            }
            decoded
        };

        let Some((index, offset)) = decoded else {
            debug!("peak at {} matched no cyclic-shift window", position);
            return Ok(DetectionOutcome::none());
        };

        // Never report a preamble the caller did not ask about
        if !candidates.contains(&index) {
            debug!("decoded preamble {} is outside the candidate set", index);
            return Ok(DetectionOutcome::none());
        }

        info!(
            "PRACH preamble {} detected: timing offset {:.2} samples (peak {:.3e}, threshold {:.3e})",
            index, offset, value, threshold
        );
        Ok(DetectionOutcome::detected(index, offset as f32))
    }
}

/// One-shot detection with a fresh detector
pub fn detect(
    carrier: &CarrierConfig,
    prach: &PrachConfig,
    waveform: &Array2<Complex32>,
    candidates: &[u8],
) -> Result<DetectionOutcome, PhyError> {
    PrachDetector::new(*carrier, *prach)?.detect(waveform, candidates)
}

/// Doppler cyclic offset in output samples: floor((d_u / L_RA) * D)
fn doppler_cyclic_offset_samples(doppler_guard: u32, l_ra: usize, transform_size: usize) -> usize {
    (doppler_guard as u64 * transform_size as u64 / l_ra as u64) as usize
}

/// Fold the Doppler side peak back into the main lobe, shortening the
/// correlation vector by the cyclic offset
fn fold_doppler_side_peak(corr: &mut Vec<f32>, cyclic_offset: usize) {
    if cyclic_offset == 0 || cyclic_offset >= corr.len() {
        return;
    }
    let keep = corr.len() - cyclic_offset;
    for i in 0..keep {
        corr[i] = (corr[i] + corr[i + cyclic_offset]) * std::f32::consts::FRAC_1_SQRT_2;
    }
    corr.truncate(keep);
}

/// Explicit arg-max: position and value together, no float-equality search
fn arg_max(values: &[f32]) -> (usize, f32) {
    let mut position = 0;
    let mut max = f32::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > max {
            max = v;
            position = i;
        }
    }
    (position, max)
}

/// In-band noise variance of one received spectrum: keep only the active
/// preamble subcarriers, inverse transform, take the sample variance
fn masked_noise_variance(
    spectrum: &[Complex32],
    reference_spectrum: &[Complex32],
    ifft: &Arc<dyn Fft<f32>>,
) -> f32 {
    let peak = reference_spectrum
        .iter()
        .map(|s| s.norm())
        .fold(0.0f32, f32::max);
    let gate = peak * ACTIVE_BIN_FRACTION;

    let mut masked: Vec<Complex32> = spectrum
        .iter()
        .zip(reference_spectrum)
        .map(|(r, s)| {
            if s.norm() > gate {
                *r
            } else {
                Complex32::new(0.0, 0.0)
            }
        })
        .collect();
    inverse_fft_normalized(ifft, &mut masked);
    sample_variance(&masked)
}

/// Sample variance with N-1 normalization
fn sample_variance(samples: &[Complex32]) -> f32 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<Complex32>() / n as f32;
    samples.iter().map(|s| (*s - mean).norm_sqr()).sum::<f32>() / (n - 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prach::config::{PrachSubcarrierSpacing, RestrictedSetConfig};
    use common::types::{CyclicPrefix, SubcarrierSpacing};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn test_carrier() -> CarrierConfig {
        CarrierConfig {
            subcarrier_spacing: SubcarrierSpacing::Scs15,
            cyclic_prefix: CyclicPrefix::Normal,
            grid_size_rb: 52,
        }
    }

    fn short_prach(zero_correlation_zone: u8) -> PrachConfig {
        PrachConfig {
            config_index: 27,
            root_sequence_index: 0,
            zero_correlation_zone,
            restricted_set: RestrictedSetConfig::UnrestrictedSet,
            subcarrier_spacing: PrachSubcarrierSpacing::Khz15,
        }
    }

    fn long_prach() -> PrachConfig {
        PrachConfig {
            config_index: 0,
            root_sequence_index: 0,
            zero_correlation_zone: 12,
            restricted_set: RestrictedSetConfig::UnrestrictedSet,
            subcarrier_spacing: PrachSubcarrierSpacing::Khz1_25,
        }
    }

    fn restricted_prach() -> PrachConfig {
        PrachConfig {
            config_index: 0,
            root_sequence_index: 0,
            zero_correlation_zone: 6, // N_CS = 46 for restricted type A
            restricted_set: RestrictedSetConfig::RestrictedSetTypeA,
            subcarrier_spacing: PrachSubcarrierSpacing::Khz1_25,
        }
    }

    fn all_preambles() -> Vec<u8> {
        (0..64).collect()
    }

    /// Received matrix with the preamble delayed by `delay` samples
    fn delayed_waveform(samples: &[Complex32], delay: usize, antennas: usize) -> Array2<Complex32> {
        Array2::from_shape_fn((samples.len() + delay, antennas), |(t, _)| {
            if t < delay {
                Complex32::new(0.0, 0.0)
            } else {
                samples[t - delay]
            }
        })
    }

    fn apply_frequency_offset(rx: &mut Array2<Complex32>, cfo_hz: f32, sample_rate: f32) {
        for (t, mut row) in rx.outer_iter_mut().enumerate() {
            let phase = 2.0 * std::f32::consts::PI * cfo_hz * t as f32 / sample_rate;
            let rotation = Complex32::from_polar(1.0, phase);
            for value in row.iter_mut() {
                *value *= rotation;
            }
        }
    }

    #[test]
    fn test_noiseless_exact_match() {
        let carrier = test_carrier();
        let prach = short_prach(11);
        let wave = waveform::generate(&carrier, &prach, 2).unwrap();
        let rx = delayed_waveform(&wave, 0, 1);

        let outcome = detect(&carrier, &prach, &rx, &all_preambles()).unwrap();
        assert_eq!(outcome.preamble_index(), Some(2));
        assert!(outcome.timing_offset().unwrap().abs() < 0.5);
    }

    #[test]
    fn test_integer_delay_recovery() {
        let carrier = test_carrier();
        let prach = short_prach(11);
        let mut detector = PrachDetector::new(carrier, prach).unwrap();

        // preambles from two root groups and three cyclic-shift values
        for &(preamble, delay) in &[
            (0u8, 0usize),
            (0, 20),
            (2, 3),
            (2, 11),
            (7, 5),
            (7, 11),
        ] {
            let wave = waveform::generate(&carrier, &prach, preamble).unwrap();
            let rx = delayed_waveform(&wave, delay, 1);
            let outcome = detector.detect(&rx, &all_preambles()).unwrap();

            assert_eq!(
                outcome.preamble_index(),
                Some(preamble),
                "preamble {} at delay {}",
                preamble,
                delay
            );
            let offset = outcome.timing_offset().unwrap();
            assert!(
                (offset - delay as f32).abs() < 0.5,
                "preamble {}: offset {} vs delay {}",
                preamble,
                offset,
                delay
            );
        }
    }

    #[test]
    fn test_concrete_short_scenario() {
        // L_RA = 139, configuration index 27, N_CS = 0, preamble 44,
        // injected delay of 7 samples
        let carrier = test_carrier();
        let prach = short_prach(0);
        let wave = waveform::generate(&carrier, &prach, 44).unwrap();
        let rx = delayed_waveform(&wave, 7, 1);

        let outcome = detect(&carrier, &prach, &rx, &[44]).unwrap();
        assert_eq!(outcome.preamble_index(), Some(44));
        assert!((outcome.timing_offset().unwrap() - 7.0).abs() < 0.5);
    }

    #[test]
    fn test_candidate_filtering() {
        let carrier = test_carrier();
        let prach = short_prach(11);
        let wave = waveform::generate(&carrier, &prach, 2).unwrap();
        let rx = delayed_waveform(&wave, 0, 1);
        let mut detector = PrachDetector::new(carrier, prach).unwrap();

        // preamble 3 shares the root of 2: the correlation peak is found
        // but decodes to an index the caller did not ask about
        let outcome = detector.detect(&rx, &[3]).unwrap();
        assert!(!outcome.is_detected());

        // with 2 in the set, the same waveform is detected
        let outcome = detector.detect(&rx, &[1, 2, 3]).unwrap();
        assert_eq!(outcome.preamble_index(), Some(2));
    }

    #[test]
    fn test_noise_only_yields_no_detection() {
        let carrier = test_carrier();
        let prach = long_prach();
        let required = crate::ofdm::prach_ofdm_info(&carrier, &prach)
            .unwrap()
            .occasion_length();
        let mut detector = PrachDetector::new(carrier, prach).unwrap();

        let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
        for _ in 0..20 {
            let rx = Array2::from_shape_fn((required, 1), |_| {
                Complex32::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5)
            });
            let outcome = detector.detect(&rx, &[0, 1, 2, 3]).unwrap();
            assert!(!outcome.is_detected());
        }
    }

    #[test]
    fn test_detection_under_noise() {
        let carrier = test_carrier();
        let prach = long_prach();
        let wave = waveform::generate(&carrier, &prach, 9).unwrap();
        let mut rx = delayed_waveform(&wave, 12, 1);

        // mild additive noise relative to the preamble amplitude
        let mut rng = StdRng::seed_from_u64(0x0dd5_eed5);
        let amplitude = wave
            .iter()
            .map(|s| s.norm())
            .fold(0.0f32, f32::max);
        for value in rx.iter_mut() {
            *value += Complex32::new(
                (rng.gen::<f32>() - 0.5) * amplitude * 0.2,
                (rng.gen::<f32>() - 0.5) * amplitude * 0.2,
            );
        }

        let outcome = detect(&carrier, &prach, &rx, &all_preambles()).unwrap();
        assert_eq!(outcome.preamble_index(), Some(9));
        assert!((outcome.timing_offset().unwrap() - 12.0).abs() < 0.5);
    }

    #[test]
    fn test_restricted_folding_invariant() {
        // u = 3 has d_u = 280; the folded vector loses the cyclic offset
        let cyclic_offset = doppler_cyclic_offset_samples(280, 839, 12288);
        assert_eq!(cyclic_offset, 4100);

        let mut corr = vec![1.0f32; 12288];
        fold_doppler_side_peak(&mut corr, cyclic_offset);
        assert_eq!(corr.len(), 12288 - cyclic_offset);
        // merged samples are scaled by 1/sqrt(2)
        assert!((corr[0] - 2.0 * std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_restricted_set_detection() {
        let carrier = test_carrier();
        let prach = restricted_prach();
        let mut detector = PrachDetector::new(carrier, prach).unwrap();

        for &(preamble, delay) in &[(1u8, 0usize), (1, 9), (3, 4)] {
            let wave = waveform::generate(&carrier, &prach, preamble).unwrap();
            let rx = delayed_waveform(&wave, delay, 1);
            let outcome = detector.detect(&rx, &all_preambles()).unwrap();

            assert_eq!(outcome.preamble_index(), Some(preamble));
            assert!((outcome.timing_offset().unwrap() - delay as f32).abs() < 0.5);
        }
    }

    #[test]
    fn test_restricted_set_detection_under_frequency_offset() {
        let carrier = test_carrier();
        let prach = restricted_prach();
        let wave = waveform::generate(&carrier, &prach, 1).unwrap();
        let mut rx = delayed_waveform(&wave, 5, 1);

        // 300 Hz offset, about a quarter of the 1.25 kHz PRACH subcarrier
        let sample_rate = carrier.sample_rate() as f32;
        apply_frequency_offset(&mut rx, 300.0, sample_rate);

        let outcome = detect(&carrier, &prach, &rx, &all_preambles()).unwrap();
        assert_eq!(outcome.preamble_index(), Some(1));
        assert!((outcome.timing_offset().unwrap() - 5.0).abs() < 1.0);
    }

    #[test]
    fn test_two_antenna_detection() {
        let carrier = test_carrier();
        let prach = short_prach(11);
        let wave = waveform::generate(&carrier, &prach, 7).unwrap();
        let rx = Array2::from_shape_fn((wave.len() + 5, 2), |(t, _)| {
            if t < 5 {
                Complex32::new(0.0, 0.0)
            } else {
                wave[t - 5]
            }
        });

        let outcome = detect(&carrier, &prach, &rx, &all_preambles()).unwrap();
        assert_eq!(outcome.preamble_index(), Some(7));
        assert!((outcome.timing_offset().unwrap() - 5.0).abs() < 0.5);
    }

    #[test]
    fn test_averaged_threshold_policy() {
        let carrier = test_carrier();
        let prach = short_prach(11);
        let wave = waveform::generate(&carrier, &prach, 4).unwrap();
        let rx = delayed_waveform(&wave, 3, 1);

        let mut detector = PrachDetector::new(carrier, prach)
            .unwrap()
            .with_threshold_policy(ThresholdPolicy::Averaged);
        let outcome = detector.detect(&rx, &all_preambles()).unwrap();
        assert_eq!(outcome.preamble_index(), Some(4));
    }

    #[test]
    fn test_input_validation() {
        let carrier = test_carrier();
        let prach = short_prach(11);
        let wave = waveform::generate(&carrier, &prach, 0).unwrap();
        let rx = delayed_waveform(&wave, 0, 1);
        let mut detector = PrachDetector::new(carrier, prach).unwrap();

        assert!(matches!(
            detector.detect(&rx, &[]),
            Err(PhyError::InvalidInput(_))
        ));
        assert!(matches!(
            detector.detect(&rx, &[12, 64]),
            Err(PhyError::InvalidInput(_))
        ));

        let short_rx = Array2::from_elem((64, 1), Complex32::new(0.0, 0.0));
        assert!(matches!(
            detector.detect(&short_rx, &[0]),
            Err(PhyError::InvalidInput(_))
        ));

        let no_antennas = Array2::from_elem((wave.len(), 0), Complex32::new(0.0, 0.0));
        assert!(matches!(
            detector.detect(&no_antennas, &[0]),
            Err(PhyError::InvalidInput(_))
        ));

        // unknown configuration index is rejected at construction
        let mut bad = short_prach(11);
        bad.config_index = 200;
        assert!(matches!(
            PrachDetector::new(carrier, bad),
            Err(PhyError::InvalidConfiguration(_))
        ));
    }
}
