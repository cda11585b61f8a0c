use crate::models::{Match, MatchId, MatchStatus, NewMatch, UserId, UserProfile};
use crate::services::store::{MatchStore, StoreError, UserStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, UserProfile>,
    matches: BTreeMap<MatchId, Match>,
    next_match_id: MatchId,
}

/// In-process store for users and matches
///
/// Rows are kept in id order, so `find_all` is deterministic. Conditional
/// status transitions run under the write lock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with users
    pub fn with_users(users: impl IntoIterator<Item = UserProfile>) -> Self {
        let tables = Tables {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
            ..Tables::default()
        };
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Insert or replace a user profile
    pub async fn upsert_user(&self, user: UserProfile) {
        self.tables.write().await.users.insert(user.id, user);
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserProfile>, StoreError> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }
}

#[async_trait]
impl MatchStore for InMemoryStore {
    async fn find_by_id(&self, id: MatchId) -> Result<Option<Match>, StoreError> {
        Ok(self.tables.read().await.matches.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Match>, StoreError> {
        Ok(self.tables.read().await.matches.values().cloned().collect())
    }

    async fn find_pending_for_participant_b(&self, user_id: UserId) -> Result<Vec<Match>, StoreError> {
        Ok(self
            .tables
            .read()
            .await
            .matches
            .values()
            .filter(|m| m.participant_b == user_id && m.status == MatchStatus::Pending)
            .cloned()
            .collect())
    }

    async fn insert(&self, new_match: NewMatch) -> Result<Match, StoreError> {
        let mut tables = self.tables.write().await;
        tables.next_match_id += 1;

        let record = Match {
            id: tables.next_match_id,
            participant_a: new_match.participant_a,
            participant_b: new_match.participant_b,
            status: new_match.status,
        };
        tables.matches.insert(record.id, record.clone());

        Ok(record)
    }

    async fn save(&self, record: Match) -> Result<Match, StoreError> {
        let mut tables = self.tables.write().await;
        match tables.matches.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(record)
            }
            None => Err(StoreError::InvalidInput(format!(
                "Cannot save unknown match {}",
                record.id
            ))),
        }
    }

    async fn transition_status(
        &self,
        id: MatchId,
        expected: MatchStatus,
        next: MatchStatus,
    ) -> Result<Option<Match>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .matches
            .get_mut(&id)
            .filter(|m| m.status == expected)
            .map(|m| {
                m.status = next;
                m.clone()
            }))
    }
}
