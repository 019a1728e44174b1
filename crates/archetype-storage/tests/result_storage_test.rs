//! IResultStorage behaviour, run against both the SQLite engine and the
//! in-memory store.

mod common;

use archetype_core::errors::{ArchetypeError, StorageError};
use archetype_core::models::{ArchetypeId, UserId};
use archetype_core::traits::IResultStorage;
use archetype_storage::{InMemoryResultStore, StorageEngine};
use test_fixtures::uniform_answers;

use common::{golden_results, make_result};

fn stores() -> Vec<(&'static str, Box<dyn IResultStorage>)> {
    vec![
        ("sqlite", Box::new(StorageEngine::open_in_memory().unwrap())),
        ("memory", Box::new(InMemoryResultStore::new())),
    ]
}

#[test]
fn insert_then_get_returns_identical_result() {
    for (name, store) in stores() {
        for result in golden_results() {
            store.insert(&result).unwrap();
            let loaded = store.get(&result.session_id).unwrap().unwrap();
            assert_eq!(loaded, result, "{name}: {}", result.session_id);
            assert_eq!(loaded.answers, result.answers);
            assert_eq!(loaded.scores.as_array(), result.scores.as_array());
        }
        assert_eq!(store.count().unwrap(), golden_results().len(), "{name}");
    }
}

#[test]
fn missing_session_is_none() {
    for (name, store) in stores() {
        assert!(store.get("no-such-session").unwrap().is_none(), "{name}");
    }
}

#[test]
fn duplicate_session_is_rejected_and_original_kept() {
    for (name, store) in stores() {
        let first = make_result("session-dup-01", uniform_answers(3));
        store.insert(&first).unwrap();

        let second = make_result("session-dup-01", uniform_answers(5));
        let err = store.insert(&second).unwrap_err();
        assert!(
            matches!(
                err,
                ArchetypeError::Storage(StorageError::DuplicateSession { ref session_id })
                    if session_id == "session-dup-01"
            ),
            "{name}: {err}"
        );

        let kept = store.get("session-dup-01").unwrap().unwrap();
        assert_eq!(kept.answers, first.answers, "{name}");
        assert_eq!(store.count().unwrap(), 1, "{name}");
    }
}

#[test]
fn claim_sets_owner_once() {
    for (name, store) in stores() {
        let result = make_result("session-claim-01", uniform_answers(2));
        store.insert(&result).unwrap();

        let alice = UserId::new("user-alice");
        let claimed = store.claim("session-claim-01", &alice).unwrap();
        assert!(claimed.is_owned_by(&alice), "{name}");
        assert!(claimed.claimed_at.is_some(), "{name}");
        assert_eq!(claimed.scores, result.scores, "{name}");
        assert_eq!(claimed.classification, result.classification, "{name}");
        assert_eq!(claimed.created_at, result.created_at, "{name}");

        // Same user again: no change.
        let again = store.claim("session-claim-01", &alice).unwrap();
        assert_eq!(again, claimed, "{name}");

        // Different user: rejected, owner unchanged.
        let err = store
            .claim("session-claim-01", &UserId::new("user-bob"))
            .unwrap_err();
        assert!(
            matches!(err, ArchetypeError::Storage(StorageError::AlreadyClaimed { .. })),
            "{name}: {err}"
        );
        let stored = store.get("session-claim-01").unwrap().unwrap();
        assert!(stored.is_owned_by(&alice), "{name}");
    }
}

#[test]
fn claim_of_unknown_session_is_not_found() {
    for (name, store) in stores() {
        let err = store.claim("ghost-session", &UserId::new("u1")).unwrap_err();
        assert!(
            matches!(err, ArchetypeError::Storage(StorageError::NotFound { .. })),
            "{name}: {err}"
        );
    }
}

#[test]
fn results_for_user_lists_only_owned_results() {
    for (name, store) in stores() {
        for (i, value) in [1u8, 2, 3, 4].into_iter().enumerate() {
            store
                .insert(&make_result(&format!("session-user-{i:02}"), uniform_answers(value)))
                .unwrap();
        }
        let u = UserId::new("user-1");
        store.claim("session-user-00", &u).unwrap();
        store.claim("session-user-02", &u).unwrap();
        store.claim("session-user-03", &UserId::new("user-2")).unwrap();

        let owned = store.results_for_user(&u).unwrap();
        let ids: Vec<&str> = owned.iter().map(|r| r.session_id.as_str()).collect();
        assert_eq!(ids, ["session-user-00", "session-user-02"], "{name}");
        assert!(store
            .results_for_user(&UserId::new("nobody"))
            .unwrap()
            .is_empty());
    }
}

#[test]
fn distribution_covers_every_archetype() {
    for (name, store) in stores() {
        let empty = store.archetype_distribution().unwrap();
        assert_eq!(empty.len(), ArchetypeId::COUNT, "{name}");
        assert!(empty.iter().all(|(_, n)| *n == 0), "{name}");

        for result in golden_results() {
            store.insert(&result).unwrap();
        }
        let dist = store.archetype_distribution().unwrap();
        let ids: Vec<ArchetypeId> = dist.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, ArchetypeId::ALL.to_vec(), "{name}");
        assert_eq!(
            dist.iter().map(|(_, n)| n).sum::<usize>(),
            golden_results().len(),
            "{name}"
        );

        let count_of = |id| dist.iter().find(|(a, _)| *a == id).map(|(_, n)| *n);
        assert_eq!(count_of(ArchetypeId::StrategicVisionary), Some(3), "{name}");
        assert_eq!(count_of(ArchetypeId::ScatteredStarter), Some(0), "{name}");
    }
}
