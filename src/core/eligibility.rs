use crate::models::UserProfile;

/// Check whether a candidate passes the hard pre-conditions for a requester
///
/// This is the first stage of the matching pipeline. A candidate is eligible
/// when it is not the requester, both budgets are set and equal ignoring case,
/// and the two travellers share at least one available date.
#[inline]
pub fn is_eligible(requester: &UserProfile, candidate: &UserProfile) -> bool {
    if requester.id == candidate.id {
        return false;
    }

    budgets_match(requester.budget.as_deref(), candidate.budget.as_deref())
        && has_overlapping_dates(requester, candidate)
}

/// Case-insensitive budget comparison, unset on either side never matches
#[inline]
pub fn budgets_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

/// True when at least one exact date appears in both availability lists
#[inline]
pub fn has_overlapping_dates(a: &UserProfile, b: &UserProfile) -> bool {
    a.available_travel_dates
        .iter()
        .any(|date| b.available_travel_dates.contains(date))
}
