//! Zadoff-Chu Sequence Machinery
//!
//! Root sequence generation, logical-to-physical root mapping, N_CS tables
//! and cyclic-shift set computation (including the restricted sets used for
//! high-Doppler cells) according to 3GPP TS 38.211 section 6.3.3.1.

use crate::PhyError;
use super::config::{PrachSubcarrierSpacing, RestrictedSetConfig};
use num_complex::Complex32;

/// N_CS values for 1.25 kHz PRACH SCS, unrestricted set (Table 6.3.3.1-5)
const NCS_LONG_UNRESTRICTED: [u16; 16] =
    [0, 13, 15, 18, 22, 26, 32, 38, 46, 59, 76, 93, 119, 167, 279, 419];

/// N_CS values for 1.25 kHz PRACH SCS, restricted set type A (Table 6.3.3.1-5)
const NCS_LONG_RESTRICTED_A: [u16; 15] =
    [15, 18, 22, 26, 32, 38, 46, 55, 68, 82, 100, 128, 158, 202, 237];

/// N_CS values for 1.25 kHz PRACH SCS, restricted set type B (Table 6.3.3.1-5)
const NCS_LONG_RESTRICTED_B: [u16; 13] =
    [15, 18, 22, 26, 32, 38, 46, 55, 68, 82, 100, 118, 137];

/// N_CS values for short sequences, unrestricted set (Table 6.3.3.1-7)
const NCS_SHORT_UNRESTRICTED: [u16; 16] =
    [0, 2, 4, 6, 8, 10, 12, 13, 15, 17, 19, 23, 27, 34, 46, 69];

/// Generate a Zadoff-Chu sequence with cyclic shift applied
/// x_{u,v}(n) = x_u((n + C_v) mod L_RA), x_u(n) = exp(-j pi u n (n+1) / L_RA)
pub fn zadoff_chu(root: u16, cyclic_shift: u32, length: usize) -> Vec<Complex32> {
    let l_ra = length as f64;
    let u = root as f64;

    let mut sequence = vec![Complex32::new(0.0, 0.0); length];
    for n in 0..length {
        let m = ((n + cyclic_shift as usize) % length) as f64;
        let phase = -std::f64::consts::PI * u * m * (m + 1.0) / l_ra;
        sequence[n] = Complex32::from_polar(1.0, phase as f32);
    }

    sequence
}

/// Map a logical root sequence index to the physical root u.
///
/// Consecutive logical indices alternate between u and L_RA - u
/// (the pairing structure of TS 38.211 Table 6.3.3.1-4).
pub fn physical_root(logical_index: u16, l_ra: usize) -> u16 {
    let i = logical_index as usize % (l_ra - 1);
    if i % 2 == 0 {
        (i / 2 + 1) as u16
    } else {
        (l_ra - (i + 1) / 2) as u16
    }
}

/// N_CS lookup from the zero-correlation-zone config
pub fn ncs_value(
    scs: PrachSubcarrierSpacing,
    restricted_set: RestrictedSetConfig,
    zero_correlation_zone: u8,
) -> Result<u16, PhyError> {
    let zcz = zero_correlation_zone as usize;
    let table: &[u16] = match (scs, restricted_set) {
        (PrachSubcarrierSpacing::Khz1_25, RestrictedSetConfig::UnrestrictedSet) => {
            &NCS_LONG_UNRESTRICTED
        }
        (PrachSubcarrierSpacing::Khz1_25, RestrictedSetConfig::RestrictedSetTypeA) => {
            &NCS_LONG_RESTRICTED_A
        }
        (PrachSubcarrierSpacing::Khz1_25, RestrictedSetConfig::RestrictedSetTypeB) => {
            &NCS_LONG_RESTRICTED_B
        }
        (
            PrachSubcarrierSpacing::Khz15 | PrachSubcarrierSpacing::Khz30,
            RestrictedSetConfig::UnrestrictedSet,
        ) => &NCS_SHORT_UNRESTRICTED,
        _ => {
            return Err(PhyError::InvalidConfiguration(format!(
                "no N_CS table for {:?} with {:?}",
                scs, restricted_set
            )))
        }
    };

    table.get(zcz).copied().ok_or_else(|| {
        PhyError::InvalidConfiguration(format!(
            "zero correlation zone config {} out of range",
            zero_correlation_zone
        ))
    })
}

/// Doppler cyclic-offset guard d_u for the restricted sets.
///
/// p is the smallest non-negative integer with (p * u) mod L_RA = 1;
/// d_u = p when 2p < L_RA, else L_RA - p.
pub fn doppler_guard(root: u16, l_ra: usize) -> u32 {
    let u = root as usize;
    let mut p = 0usize;
    for candidate in 0..l_ra {
        if (candidate * u) % l_ra == 1 {
            p = candidate;
            break;
        }
    }

    if 2 * p < l_ra {
        p as u32
    } else {
        (l_ra - p) as u32
    }
}

/// Cyclic shift values C_v available on one root sequence.
///
/// Returns the ordered shift set; empty when the root supports no preamble
/// under the given restricted-set constraints.
pub fn cyclic_shift_set(
    l_ra: usize,
    ncs: u16,
    restricted_set: RestrictedSetConfig,
    doppler_guard: u32,
) -> Vec<u32> {
    let l = l_ra as u64;
    let ncs = ncs as u64;
    let d_u = doppler_guard as u64;

    match restricted_set {
        RestrictedSetConfig::UnrestrictedSet => {
            if ncs == 0 {
                vec![0]
            } else {
                (0..l / ncs).map(|v| (v * ncs) as u32).collect()
            }
        }
        RestrictedSetConfig::RestrictedSetTypeA => {
            if ncs == 0 {
                return Vec::new();
            }
            let (n_shift, d_start, n_group, n_shift_bar) = if ncs <= d_u && 3 * d_u < l {
                let n_shift = d_u / ncs;
                let d_start = 2 * d_u + n_shift * ncs;
                let n_group = l / d_start;
                let n_shift_bar =
                    ((l as i64 - 2 * d_u as i64 - (n_group * d_start) as i64) / ncs as i64).max(0)
                        as u64;
                (n_shift, d_start, n_group, n_shift_bar)
            } else if 3 * d_u >= l && 2 * d_u <= l - ncs {
                let n_shift = (l - 2 * d_u) / ncs;
                let d_start = l - 2 * d_u + n_shift * ncs;
                let n_group = d_u / d_start;
                let n_shift_bar = (((d_u as i64 - (n_group * d_start) as i64) / ncs as i64).max(0)
                    as u64)
                    .min(n_shift);
                (n_shift, d_start, n_group, n_shift_bar)
            } else {
                return Vec::new();
            };
            shift_values(n_shift, d_start, n_group, n_shift_bar, ncs)
        }
        RestrictedSetConfig::RestrictedSetTypeB => {
            if ncs == 0 {
                return Vec::new();
            }
            // First two d_u ranges of the type B definition; the remaining
            // ranges are not exercised by the supported configurations.
            let (n_shift, d_start, n_group, n_shift_bar) = if ncs <= d_u && 5 * d_u < l {
                let n_shift = d_u / ncs;
                let d_start = 4 * d_u + n_shift * ncs;
                let n_group = l / d_start;
                let n_shift_bar =
                    ((l as i64 - 4 * d_u as i64 - (n_group * d_start) as i64) / ncs as i64).max(0)
                        as u64;
                (n_shift, d_start, n_group, n_shift_bar)
            } else if 5 * d_u >= l && 4 * d_u <= l - ncs {
                let n_shift = (l - 4 * d_u) / ncs;
                let d_start = l - 4 * d_u + n_shift * ncs;
                let n_group = d_u / d_start;
                let n_shift_bar = (((d_u as i64 - (n_group * d_start) as i64) / ncs as i64).max(0)
                    as u64)
                    .min(n_shift);
                (n_shift, d_start, n_group, n_shift_bar)
            } else {
                return Vec::new();
            };
            shift_values(n_shift, d_start, n_group, n_shift_bar, ncs)
        }
    }
}

/// C_v = d_start * floor(v / n_shift) + (v mod n_shift) * N_CS
fn shift_values(n_shift: u64, d_start: u64, n_group: u64, n_shift_bar: u64, ncs: u64) -> Vec<u32> {
    if n_shift == 0 {
        return Vec::new();
    }
    let total = n_shift * n_group + n_shift_bar;
    (0..total)
        .map(|v| (d_start * (v / n_shift) + (v % n_shift) * ncs) as u32)
        .collect()
}
