//! Travel Match - pairs compatible travellers and manages match requests
//!
//! This library provides the matching pipeline (eligibility, similarity,
//! ranking) and the match lifecycle that opens a chat channel once a request
//! is accepted. Storage and channel creation sit behind traits in
//! [`services::store`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{channel_id, is_eligible, similarity, MatchError, MatchService, Matcher};
pub use models::{Match, MatchCandidate, MatchStatus, UserProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(channel_id(7, 3), "chat_3_7");
        let profile = UserProfile::new(1, "solo");
        assert!(!is_eligible(&profile, &profile));
    }
}
