use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a traveller
pub type UserId = i64;

/// Identifier of a match record
pub type MatchId = i64;

/// Traveller profile used for eligibility and similarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(rename = "availableTravelDates", default)]
    pub available_travel_dates: Vec<NaiveDate>,
    #[serde(rename = "travelStyle", default)]
    pub travel_style: Option<String>,
    #[serde(rename = "preferredDestination", default)]
    pub preferred_destination: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl UserProfile {
    /// Bare profile with only an id and a username
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            profile_picture: None,
            budget: None,
            available_travel_dates: Vec::new(),
            travel_style: None,
            preferred_destination: None,
            hobbies: Vec::new(),
            interests: Vec::new(),
        }
    }
}

/// Lifecycle state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Rejected,
}

impl MatchStatus {
    /// Accepted and rejected matches can no longer be acted on
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::Pending)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Accepted => "accepted",
            MatchStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Proposed pairing between two travellers
///
/// Participant A is the user who initiated the request, participant B the one
/// who receives it. The slot order never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    #[serde(rename = "participantA")]
    pub participant_a: UserId,
    #[serde(rename = "participantB")]
    pub participant_b: UserId,
    pub status: MatchStatus,
}

/// A match that has not been persisted yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMatch {
    pub participant_a: UserId,
    pub participant_b: UserId,
    pub status: MatchStatus,
}

impl NewMatch {
    pub fn pending(participant_a: UserId, participant_b: UserId) -> Self {
        Self {
            participant_a,
            participant_b,
            status: MatchStatus::Pending,
        }
    }
}

/// Scored candidate returned by discovery and notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub user: UserProfile,
    #[serde(rename = "similarityScore")]
    pub similarity_score: f64,
    #[serde(rename = "matchId")]
    pub match_id: Option<MatchId>,
}
