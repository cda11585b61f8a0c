use serde::{Deserialize, Serialize};
use crate::models::domain::{Match, MatchCandidate, UserId};

/// Response for candidate discovery and notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatesResponse {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub candidates: Vec<MatchCandidate>,
    pub total_results: usize,
}

/// Response for a match transition that created a channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptMatchResponse {
    #[serde(rename = "match")]
    pub matched: Match,
    #[serde(rename = "channelId")]
    pub channel_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
