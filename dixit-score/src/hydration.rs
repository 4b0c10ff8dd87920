//! Load-on-start: seed a [`ScoreStore`] from its backend.
//!
//! Each of the three documents is read on its own. A document that is
//! missing, unreadable or fails to decode falls back to the compiled-in
//! default for that field only; the other fields still load.
use serde::de::DeserializeOwned;

use crate::constants::{
    DEFAULT_WINNING_SCORE, PLAYERS_KEY, SCORING_RULES_KEY, WINNING_SCORE_KEY,
};
use crate::model::{ScoreBoard, ScoringRules, default_players};
use crate::storage::{DocumentRead, KeyValueStore, read_document};
use crate::store::ScoreStore;

/// Where a hydrated field's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    Persisted,
    Missing,
    Malformed,
    Unreadable,
}

impl FieldSource {
    #[must_use]
    pub const fn used_default(self) -> bool {
        !matches!(self, Self::Persisted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrationReport {
    pub players: FieldSource,
    pub winning_score: FieldSource,
    pub scoring_rules: FieldSource,
    /// True when this run raised the ready signal; false on a repeat run.
    pub first_run: bool,
}

impl HydrationReport {
    /// Nothing was persisted yet, so the board is entirely defaults.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.players.used_default()
            && self.winning_score.used_default()
            && self.scoring_rules.used_default()
    }
}

/// Read the three documents and seed `store` with them.
///
/// Does not write to the backend. Running it again re-reads whatever is
/// currently stored; the ready signal only transitions on the first run.
pub fn hydrate<S: KeyValueStore>(store: &mut ScoreStore<S>) -> HydrationReport {
    let first_run = !store.is_hydrated();
    let (players, players_src) = load_field(store.backend(), PLAYERS_KEY, default_players);
    let (winning_score, winning_src) =
        load_field(store.backend(), WINNING_SCORE_KEY, || DEFAULT_WINNING_SCORE);
    let (scoring_rules, rules_src) =
        load_field(store.backend(), SCORING_RULES_KEY, ScoringRules::default);

    let report = HydrationReport {
        players: players_src,
        winning_score: winning_src,
        scoring_rules: rules_src,
        first_run,
    };
    log::info!(
        "hydrated board: {} players ({:?}), winning score {} ({:?}), rules {:?}",
        players.len(),
        report.players,
        winning_score,
        report.winning_score,
        report.scoring_rules
    );

    store.seed(ScoreBoard {
        winning_score,
        players,
        scoring_rules,
    });
    report
}

fn load_field<T, S, F>(backend: &S, key: &str, fallback: F) -> (T, FieldSource)
where
    T: DeserializeOwned,
    S: KeyValueStore,
    F: FnOnce() -> T,
{
    match read_document::<T, S>(backend, key) {
        DocumentRead::Found(value) => (value, FieldSource::Persisted),
        DocumentRead::Missing => (fallback(), FieldSource::Missing),
        DocumentRead::Malformed(err) => {
            log::warn!("stored `{key}` is malformed, using default: {err}");
            (fallback(), FieldSource::Malformed)
        }
        DocumentRead::Unreadable(err) => {
            log::error!("could not read `{key}`, using default: {err}");
            (fallback(), FieldSource::Unreadable)
        }
    }
}

/// Convenience for hosts that construct and hydrate in one step.
pub fn hydrated<S: KeyValueStore>(backend: S) -> (ScoreStore<S>, HydrationReport) {
    let mut store = ScoreStore::new(backend);
    let report = hydrate(&mut store);
    (store, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Player;
    use crate::storage::{MemoryStore, StorageError};

    struct OfflineStore;

    impl KeyValueStore for OfflineStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("private browsing".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("private browsing".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn empty_backend_yields_defaults() {
        let (store, report) = hydrated(MemoryStore::new());
        assert!(store.is_hydrated());
        assert!(report.is_fresh());
        assert!(report.first_run);
        assert_eq!(store.board(), &ScoreBoard::default());
    }

    #[test]
    fn hydration_is_per_field() {
        let backend = MemoryStore::with_entries([
            (WINNING_SCORE_KEY, "12"),
            (SCORING_RULES_KEY, "[1,2,3]"),
        ]);
        let (store, report) = hydrated(backend);
        assert_eq!(report.players, FieldSource::Missing);
        assert_eq!(report.winning_score, FieldSource::Persisted);
        assert_eq!(report.scoring_rules, FieldSource::Malformed);
        assert_eq!(store.winning_score(), 12);
        assert_eq!(store.scoring_rules(), ScoringRules::default());
        assert_eq!(store.players().len(), 4);
    }

    #[test]
    fn malformed_players_fall_back_to_default_seats() {
        let backend = MemoryStore::with_entries([(PLAYERS_KEY, "not json at all")]);
        let (store, report) = hydrated(backend);
        assert_eq!(report.players, FieldSource::Malformed);
        assert_eq!(store.players(), default_players().as_slice());
    }

    #[test]
    fn positional_player_records_are_malformed() {
        let backend = MemoryStore::with_entries([(PLAYERS_KEY, r#"[[1,"a",[]]]"#)]);
        let (store, report) = hydrated(backend);
        assert_eq!(report.players, FieldSource::Malformed);
        assert_eq!(store.players(), default_players().as_slice());
    }

    #[test]
    fn player_without_scores_field_is_malformed() {
        let backend = MemoryStore::with_entries([(PLAYERS_KEY, r#"[{"id":1,"name":"Ana"}]"#)]);
        let (_, report) = hydrated(backend);
        assert_eq!(report.players, FieldSource::Malformed);
    }

    #[test]
    fn unreadable_backend_still_becomes_ready() {
        let (store, report) = hydrated(OfflineStore);
        assert!(store.is_hydrated());
        assert_eq!(report.players, FieldSource::Unreadable);
        assert_eq!(store.board(), &ScoreBoard::default());
    }

    #[test]
    fn hydration_does_not_write_back() {
        let backend = MemoryStore::new();
        let _ = hydrated(backend.clone());
        assert!(backend.is_empty());
    }

    #[test]
    fn second_run_rereads_without_new_transition() {
        let backend = MemoryStore::new();
        let (mut store, first) = hydrated(backend.clone());
        assert!(first.first_run);
        backend.set(WINNING_SCORE_KEY, "50").unwrap();
        let second = hydrate(&mut store);
        assert!(!second.first_run);
        assert!(store.is_hydrated());
        assert_eq!(store.winning_score(), 50);
    }

    #[test]
    fn persisted_players_keep_display_order() {
        let players = vec![
            Player {
                id: 3,
                name: "Cleo".into(),
                scores: vec![1],
            },
            Player {
                id: 1,
                name: "Ana".into(),
                scores: vec![],
            },
        ];
        let backend =
            MemoryStore::with_entries([(PLAYERS_KEY, serde_json::to_string(&players).unwrap())]);
        let (store, _) = hydrated(backend);
        assert_eq!(store.players(), players.as_slice());
    }
}
