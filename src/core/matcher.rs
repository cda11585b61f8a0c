use crate::models::{MatchCandidate, UserProfile};
use crate::core::{eligibility::is_eligible, similarity::similarity};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub candidates: Vec<MatchCandidate>,
    pub total_users: usize,
}

/// Candidate ranking pipeline
///
/// # Pipeline Stages
/// 1. Eligibility filter (self exclusion, budget, shared travel date)
/// 2. Similarity scoring
/// 3. Ranking by descending score
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Rank every eligible user against the requester
    ///
    /// # Arguments
    /// * `requester` - The traveller asking for matches
    /// * `users` - Every known traveller, the requester may be among them
    ///
    /// # Returns
    /// MatchResult with candidates sorted best first, none carrying a match id
    pub fn find_matches(&self, requester: &UserProfile, users: Vec<UserProfile>) -> MatchResult {
        let total_users = users.len();

        let mut candidates: Vec<MatchCandidate> = users
            .into_iter()
            .filter(|user| is_eligible(requester, user))
            .map(|user| {
                let similarity_score = similarity(requester, &user);
                MatchCandidate {
                    user,
                    similarity_score,
                    match_id: None,
                }
            })
            .collect();

        // Stable sort, ties keep store order
        candidates.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        MatchResult {
            candidates,
            total_users,
        }
    }
}
