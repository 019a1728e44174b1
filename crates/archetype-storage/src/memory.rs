//! In-memory result store backed by `DashMap`. Same semantics as the SQLite
//! engine, nothing survives the process.

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use archetype_core::errors::{ArchetypeResult, StorageError};
use archetype_core::models::{ArchetypeId, QuizResult, UserId};
use archetype_core::traits::IResultStorage;

use crate::engine::check_claim;

#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    results: DashMap<String, QuizResult>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IResultStorage for InMemoryResultStore {
    fn insert(&self, result: &QuizResult) -> ArchetypeResult<()> {
        match self.results.entry(result.session_id.clone()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateSession {
                session_id: result.session_id.clone(),
            }
            .into()),
            Entry::Vacant(slot) => {
                slot.insert(result.clone());
                Ok(())
            }
        }
    }

    fn get(&self, session_id: &str) -> ArchetypeResult<Option<QuizResult>> {
        Ok(self.results.get(session_id).map(|r| r.value().clone()))
    }

    fn claim(&self, session_id: &str, user_id: &UserId) -> ArchetypeResult<QuizResult> {
        // The shard lock is held for the whole check-then-set.
        let Some(mut entry) = self.results.get_mut(session_id) else {
            return Err(StorageError::NotFound {
                session_id: session_id.to_string(),
            }
            .into());
        };
        if let Some(done) = check_claim(Some(entry.value()), session_id, user_id)? {
            return Ok(done);
        }
        entry.user_id = Some(user_id.clone());
        entry.claimed_at = Some(Utc::now());
        Ok(entry.value().clone())
    }

    fn results_for_user(&self, user_id: &UserId) -> ArchetypeResult<Vec<QuizResult>> {
        let mut owned: Vec<QuizResult> = self
            .results
            .iter()
            .filter(|r| r.is_owned_by(user_id))
            .map(|r| r.value().clone())
            .collect();
        owned.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.session_id.cmp(&b.session_id))
        });
        Ok(owned)
    }

    fn archetype_distribution(&self) -> ArchetypeResult<Vec<(ArchetypeId, usize)>> {
        let mut counts = [0usize; ArchetypeId::COUNT];
        for r in self.results.iter() {
            counts[r.archetype() as usize] += 1;
        }
        Ok(ArchetypeId::ALL.into_iter().zip(counts).collect())
    }

    fn count(&self) -> ArchetypeResult<usize> {
        Ok(self.results.len())
    }
}
