use crate::core::{matcher::Matcher, similarity::similarity};
use crate::models::{Match, MatchCandidate, MatchId, MatchStatus, NewMatch, UserId, UserProfile};
use crate::services::store::{ChannelError, ChannelService, MatchStore, StoreError, UserStore};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors surfaced by the match lifecycle
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Match {match_id} was already processed (status: {status})")]
    InvalidState { match_id: MatchId, status: MatchStatus },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Coarse classification of a [`MatchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    CollaboratorFailure,
}

impl MatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::UserNotFound(_) | MatchError::MatchNotFound(_) => ErrorKind::NotFound,
            MatchError::InvalidState { .. } => ErrorKind::InvalidState,
            MatchError::Store(_) | MatchError::Channel(_) => ErrorKind::CollaboratorFailure,
        }
    }
}

/// Derive the channel id for a pair of travellers
///
/// The smaller id always comes first so both slot orders give the same id.
pub fn channel_id(a: UserId, b: UserId) -> String {
    format!("chat_{}_{}", a.min(b), a.max(b))
}

/// Match lifecycle manager
///
/// Owns candidate discovery and the `Pending -> Accepted | Rejected`
/// transitions. Accepting a match asks the channel service for a shared
/// channel exactly once per successful transition.
#[derive(Clone)]
pub struct MatchService {
    users: Arc<dyn UserStore>,
    matches: Arc<dyn MatchStore>,
    channels: Arc<dyn ChannelService>,
    matcher: Matcher,
}

impl MatchService {
    pub fn new(
        users: Arc<dyn UserStore>,
        matches: Arc<dyn MatchStore>,
        channels: Arc<dyn ChannelService>,
    ) -> Self {
        Self {
            users,
            matches,
            channels,
            matcher: Matcher::new(),
        }
    }

    /// Every stored match
    pub async fn all_matches(&self) -> Result<Vec<Match>, MatchError> {
        Ok(self.matches.find_all().await?)
    }

    /// Propose a match; duplicates between the same pair are allowed
    pub async fn create(
        &self,
        participant_a: UserId,
        participant_b: UserId,
    ) -> Result<Match, MatchError> {
        let created = self
            .matches
            .insert(NewMatch::pending(participant_a, participant_b))
            .await?;

        info!(
            "Created match {} ({} -> {})",
            created.id, created.participant_a, created.participant_b
        );

        Ok(created)
    }

    /// Overwrite the status of a match without any transition check
    pub async fn update_status(
        &self,
        match_id: MatchId,
        status: MatchStatus,
    ) -> Result<Match, MatchError> {
        let mut record = self.load_match(match_id).await?;
        let previous = record.status;
        record.status = status;

        let saved = self.matches.save(record).await?;
        info!("Match {} status overwritten: {} -> {}", match_id, previous, status);

        Ok(saved)
    }

    /// Accept a pending match and open a channel for the pair
    ///
    /// The status change is persisted before the channel is requested. If the
    /// channel service fails, the error is returned and the match stays
    /// accepted.
    pub async fn accept(&self, match_id: MatchId) -> Result<Match, MatchError> {
        let accepted = self.transition(match_id, MatchStatus::Accepted).await?;

        let first = accepted.participant_a.min(accepted.participant_b);
        let second = accepted.participant_a.max(accepted.participant_b);
        let channel = channel_id(first, second);

        if let Err(e) = self.channels.create_channel(&channel, first, second).await {
            error!(
                "Match {} accepted but channel {} could not be created: {}",
                match_id, channel, e
            );
            return Err(e.into());
        }

        info!("Match {} accepted, channel {} created", match_id, channel);

        Ok(accepted)
    }

    /// Reject a pending match
    pub async fn reject(&self, match_id: MatchId) -> Result<Match, MatchError> {
        let rejected = self.transition(match_id, MatchStatus::Rejected).await?;
        info!("Match {} rejected", match_id);

        Ok(rejected)
    }

    /// Rank eligible travellers for a user, best first
    pub async fn find_matches(&self, user_id: UserId) -> Result<Vec<MatchCandidate>, MatchError> {
        let requester = self.load_user(user_id).await?;
        let users = self.users.find_all().await?;

        let result = self.matcher.find_matches(&requester, users);

        debug!(
            "Found {} candidates for user {} (from {} users)",
            result.candidates.len(),
            user_id,
            result.total_users
        );

        Ok(result.candidates)
    }

    /// Incoming pending requests for a user, each scored against them
    ///
    /// Only matches where the user is the second participant are listed, so
    /// requests the user sent are not included.
    pub async fn notifications_for(
        &self,
        user_id: UserId,
    ) -> Result<Vec<MatchCandidate>, MatchError> {
        let pending = self.matches.find_pending_for_participant_b(user_id).await?;
        let mut notifications = Vec::with_capacity(pending.len());

        for record in pending {
            let requester = self.load_user(record.participant_a).await?;
            let target = self.load_user(user_id).await?;

            notifications.push(MatchCandidate {
                similarity_score: similarity(&requester, &target),
                user: requester,
                match_id: Some(record.id),
            });
        }

        debug!("User {} has {} pending requests", user_id, notifications.len());

        Ok(notifications)
    }

    async fn transition(&self, match_id: MatchId, next: MatchStatus) -> Result<Match, MatchError> {
        let current = self.load_match(match_id).await?;
        if current.status != MatchStatus::Pending {
            return Err(MatchError::InvalidState {
                match_id,
                status: current.status,
            });
        }

        match self
            .matches
            .transition_status(match_id, MatchStatus::Pending, next)
            .await?
        {
            Some(updated) => Ok(updated),
            None => {
                // Lost a race with another transition; report what is stored now
                let status = self.load_match(match_id).await?.status;
                warn!(
                    "Match {} changed concurrently, wanted {} but found {}",
                    match_id, next, status
                );
                Err(MatchError::InvalidState { match_id, status })
            }
        }
    }

    async fn load_match(&self, match_id: MatchId) -> Result<Match, MatchError> {
        self.matches
            .find_by_id(match_id)
            .await?
            .ok_or(MatchError::MatchNotFound(match_id))
    }

    async fn load_user(&self, user_id: UserId) -> Result<UserProfile, MatchError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(MatchError::UserNotFound(user_id))
    }
}
