use crate::models::{Match, MatchId, MatchStatus, NewMatch, UserId, UserProfile};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised by the channel service
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Channel already exists: {0}")]
    AlreadyExists(String),

    #[error("Channel API returned error: {0}")]
    Api(String),
}

/// Read access to traveller profiles
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserProfile>, StoreError>;

    async fn find_all(&self) -> Result<Vec<UserProfile>, StoreError>;
}

/// Persistence of match records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn find_by_id(&self, id: MatchId) -> Result<Option<Match>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Match>, StoreError>;

    /// Pending matches whose second participant is `user_id`
    async fn find_pending_for_participant_b(&self, user_id: UserId) -> Result<Vec<Match>, StoreError>;

    /// Persist a new match and return it with its assigned id
    async fn insert(&self, new_match: NewMatch) -> Result<Match, StoreError>;

    /// Overwrite an existing match
    async fn save(&self, record: Match) -> Result<Match, StoreError>;

    /// Atomically move a match from `expected` to `next`
    ///
    /// Returns `None` when the match is gone or its stored status is no
    /// longer `expected`. Implementations must perform the check and the
    /// write as one step.
    async fn transition_status(
        &self,
        id: MatchId,
        expected: MatchStatus,
        next: MatchStatus,
    ) -> Result<Option<Match>, StoreError>;
}

/// The communication-channel subsystem
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelService: Send + Sync {
    async fn create_channel(
        &self,
        channel_id: &str,
        participant_a: UserId,
        participant_b: UserId,
    ) -> Result<(), ChannelError>;
}
