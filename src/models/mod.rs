// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Match, MatchCandidate, MatchId, MatchStatus, NewMatch, UserId, UserProfile};
pub use requests::{CreateMatchRequest, UpdateStatusRequest};
pub use responses::{AcceptMatchResponse, CandidatesResponse, ErrorResponse, HealthResponse};
