use crate::models::{Clinic, SearchParams};

/// Check if a clinic name satisfies the name constraint
///
/// Matching is case-sensitive substring containment; an empty constraint
/// always passes.
#[inline]
pub fn matches_name(clinic: &Clinic, name: &str) -> bool {
    name.is_empty() || clinic.name.contains(name)
}

/// Check if a clinic state satisfies the state constraint
#[inline]
pub fn matches_state(clinic: &Clinic, state: &str) -> bool {
    state.is_empty() || clinic.state.contains(state)
}

/// Check if a clinic's availability window covers the requested window
///
/// The window constraint only applies when both bounds are supplied; a
/// single-sided constraint behaves like no constraint at all. Bounds are
/// compared lexicographically, which is sufficient for "HH:MM" strings.
#[inline]
pub fn matches_availability(clinic: &Clinic, from: &str, to: &str) -> bool {
    if from.is_empty() || to.is_empty() {
        return true;
    }

    clinic.availability.from.as_str() <= from && clinic.availability.to.as_str() >= to
}

/// Apply all search constraints conjunctively over the merged clinic list
///
/// Only non-empty parameters constrain the result; no match yields an empty
/// list, never an error. Input order is preserved.
pub fn filter_clinics(clinics: Vec<Clinic>, params: &SearchParams) -> Vec<Clinic> {
    clinics
        .into_iter()
        .filter(|clinic| {
            matches_name(clinic, &params.name)
                && matches_state(clinic, &params.state)
                && matches_availability(clinic, &params.from, &params.to)
        })
        .collect()
}
