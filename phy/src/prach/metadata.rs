//! Preamble Metadata and Root-Sequence Grouping
//!
//! Builds the fixed 64-entry preamble metadata table for one PRACH
//! configuration and partitions a candidate preamble set by shared root
//! sequence. One correlation is later run per distinct root, not per
//! preamble index.

use crate::PhyError;
use super::config::PrachConfig;
use super::constants::MAX_NUM_PREAMBLES;
use super::sequence::{cyclic_shift_set, doppler_guard, ncs_value, physical_root};
use super::config::get_prach_configuration;
use tracing::debug;

/// Per-preamble metadata derived from the PRACH configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreambleMetadata {
    /// Physical root sequence u
    pub root: u16,
    /// Cyclic shift C_v of this preamble on its root
    pub cyclic_shift: u32,
    /// Number of preambles sharing this root sequence
    pub sibling_count: u8,
    /// N_CS of the configuration (cyclic-shift window spacing)
    pub ncs: u16,
    /// Doppler cyclic-offset guard d_u (0 for the unrestricted set)
    pub doppler_cyclic_offset: u32,
}

/// Candidate preambles that share one root sequence
#[derive(Debug, Clone)]
pub struct RootSequenceGroup {
    /// Physical root sequence u
    pub root: u16,
    /// Lowest preamble index carrying this root among all 64
    pub representative: u8,
    /// All preamble indices on this root, ascending
    pub members: Vec<u8>,
}

/// Build the 64-entry preamble metadata table.
///
/// Preamble indices are assigned by walking consecutive logical root indices
/// from the configured start, taking every cyclic shift a root offers before
/// moving to the next root. Roots that offer no shift under the restricted
/// set are skipped.
pub fn build_preamble_metadata(
    prach: &PrachConfig,
) -> Result<[PreambleMetadata; MAX_NUM_PREAMBLES], PhyError> {
    let row = get_prach_configuration(prach.config_index).ok_or_else(|| {
        PhyError::InvalidConfiguration(format!(
            "unsupported PRACH configuration index {}",
            prach.config_index
        ))
    })?;
    let l_ra = row.format.sequence_length();
    let ncs = ncs_value(
        prach.subcarrier_spacing,
        prach.restricted_set,
        prach.zero_correlation_zone,
    )?;

    let mut table = [PreambleMetadata::default(); MAX_NUM_PREAMBLES];
    let mut count = 0usize;
    let mut logical = prach.root_sequence_index;
    let mut scanned = 0usize;

    while count < MAX_NUM_PREAMBLES {
        if scanned >= l_ra - 1 {
            return Err(PhyError::InvalidConfiguration(format!(
                "only {} preambles available for N_CS {} with {:?}",
                count, ncs, prach.restricted_set
            )));
        }

        let u = physical_root(logical, l_ra);
        let d_u = if prach.restricted_set.is_restricted() {
            doppler_guard(u, l_ra)
        } else {
            0
        };
        let shifts = cyclic_shift_set(l_ra, ncs, prach.restricted_set, d_u);

        let take = shifts.len().min(MAX_NUM_PREAMBLES - count);
        for (v, &shift) in shifts.iter().take(take).enumerate() {
            table[count + v] = PreambleMetadata {
                root: u,
                cyclic_shift: shift,
                sibling_count: take as u8,
                ncs,
                doppler_cyclic_offset: d_u,
            };
        }
        count += take;

        logical = logical.wrapping_add(1);
        scanned += 1;
    }

    debug!(
        "Preamble metadata built: N_CS={}, first root u={}, {} shifts per root",
        ncs, table[0].root, table[0].sibling_count
    );

    Ok(table)
}

/// Partition the candidate preamble set by shared root sequence.
///
/// Each distinct root touched by any candidate yields one group; the
/// representative is the lowest index among ALL 64 preambles carrying that
/// root, so the correlation always covers the full root sequence. Groups are
/// returned in ascending representative order.
pub fn group_by_root(
    metadata: &[PreambleMetadata; MAX_NUM_PREAMBLES],
    candidates: &[u8],
) -> Result<Vec<RootSequenceGroup>, PhyError> {
    if candidates.is_empty() {
        return Err(PhyError::InvalidInput(
            "candidate preamble set is empty".to_string(),
        ));
    }
    if let Some(&bad) = candidates.iter().find(|&&c| c as usize >= MAX_NUM_PREAMBLES) {
        return Err(PhyError::InvalidInput(format!(
            "candidate preamble index {} out of range 0-63",
            bad
        )));
    }

    let mut groups: Vec<RootSequenceGroup> = Vec::with_capacity(MAX_NUM_PREAMBLES);
    for &candidate in candidates {
        let root = metadata[candidate as usize].root;
        if groups.iter().any(|g| g.root == root) {
            continue;
        }

        let members: Vec<u8> = (0..MAX_NUM_PREAMBLES as u8)
            .filter(|&i| metadata[i as usize].root == root)
            .collect();
        groups.push(RootSequenceGroup {
            root,
            representative: members[0],
            members,
        });
    }
    groups.sort_by_key(|g| g.representative);

    Ok(groups)
}
