//! Free-text search and multi-predicate filtering.
//!
//! # Responsibility
//! - Narrow a loaded collection by search term or filter criteria.
//! - Provide the distinct-purok listing used by filter controls.
//!
//! # Invariants
//! - Predicates combine with logical AND.
//! - Results keep the relative order of the input sequence.

use std::collections::BTreeSet;

use crate::model::resident::{Gender, Resident, VoterStatus};

/// Tri-state predicate over one boolean status flag.
///
/// `Any` places no constraint, `Only` keeps flagged records, `Exclude`
/// keeps unflagged ones. Keeping `Exclude` distinct from `Any` makes
/// "only non-PWD residents" expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagFilter {
    #[default]
    Any,
    Only,
    Exclude,
}

impl FlagFilter {
    fn accepts(self, value: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Only => value,
            Self::Exclude => !value,
        }
    }
}

/// Household position requested by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseholdRole {
    Head,
    Member,
}

/// Optional predicates combined with logical AND by [`filter`].
///
/// Every field defaults to "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentFilter {
    pub gender: Option<Gender>,
    /// Exact purok name match.
    pub purok: Option<String>,
    pub household_role: Option<HouseholdRole>,
    pub voter_status: Option<VoterStatus>,
    pub pwd: FlagFilter,
    pub senior: FlagFilter,
    pub indigent: FlagFilter,
}

impl ResidentFilter {
    /// Whether `resident` satisfies every requested predicate.
    pub fn matches(&self, resident: &Resident) -> bool {
        if let Some(gender) = self.gender {
            if resident.gender != gender {
                return false;
            }
        }
        if let Some(purok) = self.purok.as_deref() {
            if resident.purok != purok {
                return false;
            }
        }
        if let Some(role) = self.household_role {
            let matches_role = match role {
                HouseholdRole::Head => resident.household_head,
                HouseholdRole::Member => !resident.household_head,
            };
            if !matches_role {
                return false;
            }
        }
        if let Some(status) = self.voter_status {
            if resident.voter_status != status {
                return false;
            }
        }

        self.pwd.accepts(resident.pwd_status)
            && self.senior.accepts(resident.senior_citizen)
            && self.indigent.accepts(resident.indigent)
    }
}

/// Applies `criteria` over `residents`, keeping input order.
pub fn filter(residents: &[Resident], criteria: &ResidentFilter) -> Vec<Resident> {
    residents
        .iter()
        .filter(|resident| criteria.matches(resident))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over names and address.
///
/// An empty term matches every record.
pub fn search(residents: &[Resident], term: &str) -> Vec<Resident> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return residents.to_vec();
    }

    residents
        .iter()
        .filter(|resident| {
            resident.first_name.to_lowercase().contains(&needle)
                || resident.middle_name.to_lowercase().contains(&needle)
                || resident.last_name.to_lowercase().contains(&needle)
                || resident.address.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Distinct purok names, sorted ascending (case-sensitive).
pub fn distinct_puroks(residents: &[Resident]) -> Vec<String> {
    let unique: BTreeSet<&str> = residents.iter().map(|r| r.purok.as_str()).collect();
    unique.into_iter().map(str::to_string).collect()
}
