//! Dashboard counters and household aggregation.

use std::collections::HashSet;

use crate::model::resident::{Gender, Resident, VoterStatus};

/// Male/female split of the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenderBreakdown {
    pub male: usize,
    pub female: usize,
}

/// All dashboard counters, produced in one pass by [`aggregate_stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentStats {
    pub total: usize,
    pub by_gender: GenderBreakdown,
    pub voters_registered: usize,
    pub senior_count: usize,
    pub pwd_count: usize,
    pub indigent_count: usize,
    pub household_count: usize,
}

/// Number of distinct households among records flagged as household head.
///
/// A head without a household id counts as its own singleton household.
pub fn household_count(residents: &[Resident]) -> usize {
    residents
        .iter()
        .filter(|r| r.household_head)
        .map(Resident::household_key)
        .collect::<HashSet<_>>()
        .len()
}

/// Computes every dashboard counter in a single pass.
pub fn aggregate_stats(residents: &[Resident]) -> ResidentStats {
    let mut stats = ResidentStats {
        total: residents.len(),
        ..ResidentStats::default()
    };
    let mut households = HashSet::new();

    for resident in residents {
        match resident.gender {
            Gender::Male => stats.by_gender.male += 1,
            Gender::Female => stats.by_gender.female += 1,
        }
        if resident.voter_status == VoterStatus::Registered {
            stats.voters_registered += 1;
        }
        if resident.senior_citizen {
            stats.senior_count += 1;
        }
        if resident.pwd_status {
            stats.pwd_count += 1;
        }
        if resident.indigent {
            stats.indigent_count += 1;
        }
        if resident.household_head {
            households.insert(resident.household_key());
        }
    }

    stats.household_count = households.len();
    stats
}

/// The `limit` most recently added records, newest first.
pub fn recent(residents: &[Resident], limit: usize) -> Vec<Resident> {
    residents.iter().rev().take(limit).cloned().collect()
}
