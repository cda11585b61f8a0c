use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MatchStatus, UserId};

/// Request to propose a match between two travellers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "participant_a", alias = "user1Id", rename = "participantA")]
    pub participant_a: UserId,
    #[validate(range(min = 1))]
    #[serde(alias = "participant_b", alias = "user2Id", rename = "participantB")]
    pub participant_b: UserId,
}

/// Request to overwrite the status of a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: MatchStatus,
}
