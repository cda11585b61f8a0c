use crate::models::UserProfile;
use std::collections::HashSet;

/// Number of equally weighted sub-scores
const FACTORS: f64 = 4.0;

/// Calculate the similarity (0-100) between two travellers
///
/// Scoring formula:
/// score = (
///     travel_style_score +         # 100 on a case-insensitive match
///     destination_score +          # 100 on a case-insensitive match
///     hobbies_score +              # shared share of the smaller hobby set
///     interests_score              # shared share of the smaller interest set
/// ) / 4
pub fn similarity(a: &UserProfile, b: &UserProfile) -> f64 {
    let travel_style_score = tag_score(a.travel_style.as_deref(), b.travel_style.as_deref());
    let destination_score = tag_score(
        a.preferred_destination.as_deref(),
        b.preferred_destination.as_deref(),
    );
    let hobbies_score = list_similarity(&a.hobbies, &b.hobbies);
    let interests_score = list_similarity(&a.interests, &b.interests);

    (travel_style_score + destination_score + hobbies_score + interests_score) / FACTORS
}

/// 100 if both tags are present and equal ignoring case, otherwise 0
#[inline]
pub fn tag_score(a: Option<&str>, b: Option<&str>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if a.to_lowercase() == b.to_lowercase() => 100.0,
        _ => 0.0,
    }
}

/// Overlap of two tag lists relative to the smaller one, as a percentage
pub fn list_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<String> = a.iter().map(|s| s.to_lowercase()).collect();
    let set_b: HashSet<String> = b.iter().map(|s| s.to_lowercase()).collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 100.0;
    }
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let shared = set_a.intersection(&set_b).count() as f64;
    shared / set_a.len().min(set_b.len()) as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_profile(
        id: i64,
        style: Option<&str>,
        destination: Option<&str>,
        hobbies: &[&str],
        interests: &[&str],
    ) -> UserProfile {
        let mut profile = UserProfile::new(id, format!("user{}", id));
        profile.travel_style = style.map(str::to_string);
        profile.preferred_destination = destination.map(str::to_string);
        profile.hobbies = tags(hobbies);
        profile.interests = tags(interests);
        profile
    }

    #[test]
    fn test_list_similarity_scenario() {
        let score = list_similarity(&tags(&["Hiking", "Diving"]), &tags(&["diving", "Skiing"]));
        assert_eq!(score, 50.0);
    }

    #[test]
    fn test_list_similarity_uses_smaller_set() {
        let score = list_similarity(&tags(&["a", "b", "c", "d"]), &tags(&["A"]));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_list_similarity_duplicates_collapse() {
        let score = list_similarity(&tags(&["Surf", "surf", "SURF"]), &tags(&["surf", "yoga"]));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_list_similarity_empty() {
        assert_eq!(list_similarity(&[], &tags(&["a"])), 0.0);
        assert_eq!(list_similarity(&tags(&["a"]), &[]), 0.0);
        assert_eq!(list_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_tag_score() {
        assert_eq!(tag_score(Some("Backpacking"), Some("backpacking")), 100.0);
        assert_eq!(tag_score(Some("Luxury"), Some("backpacking")), 0.0);
        assert_eq!(tag_score(None, Some("backpacking")), 0.0);
        assert_eq!(tag_score(None, None), 0.0);
    }

    #[test]
    fn test_identical_profiles_score_full() {
        let a = create_test_profile(1, Some("Relaxed"), Some("Jeju"), &["Hiking"], &["Food"]);
        let b = create_test_profile(2, Some("relaxed"), Some("JEJU"), &["hiking"], &["food"]);

        assert_eq!(similarity(&a, &b), 100.0);
    }

    #[test]
    fn test_factors_weighted_equally() {
        let a = create_test_profile(1, Some("Relaxed"), Some("Busan"), &["Hiking", "Diving"], &[]);
        let b = create_test_profile(2, Some("Relaxed"), Some("Seoul"), &["diving", "Skiing"], &["Art"]);

        // (100 + 0 + 50 + 0) / 4
        assert_eq!(similarity(&a, &b), 37.5);
    }

    #[test]
    fn test_similarity_symmetric_and_bounded() {
        let profiles = vec![
            create_test_profile(1, Some("Relaxed"), Some("Jeju"), &["Hiking", "Diving"], &["Food"]),
            create_test_profile(2, Some("relaxed"), None, &["diving", "Skiing", "Golf"], &["food", "Art"]),
            create_test_profile(3, None, Some("jeju"), &[], &["ART"]),
            create_test_profile(4, Some("Active"), Some("Tokyo"), &["golf"], &[]),
        ];

        for a in &profiles {
            for b in &profiles {
                let ab = similarity(a, b);
                let ba = similarity(b, a);
                assert_eq!(ab, ba, "{} vs {}", a.id, b.id);
                assert!((0.0..=100.0).contains(&ab), "Score {} out of range", ab);
            }
        }
    }
}
