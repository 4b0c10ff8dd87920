//! Dixit Score Engine
//!
//! Platform-agnostic scorekeeping for the Dixit scoreboard: players and their
//! score history, the scoring rules, the winning threshold, and the store that
//! keeps them in sync with a durable key-value backend.
//! This crate has no UI or platform-specific dependencies; frontends provide a
//! [`KeyValueStore`] and render the [`ScoreBoard`].

pub mod constants;
pub mod hydration;
pub mod model;
pub mod storage;
pub mod store;

pub use constants::{PLAYERS_KEY, SCORING_RULES_KEY, WINNING_SCORE_KEY};
pub use hydration::{FieldSource, HydrationReport, hydrate, hydrated};
pub use model::{GuessOutcome, Player, PlayerId, ScoreBoard, ScoringRules, default_players};
pub use storage::{
    DocumentRead, KeyValueStore, MemoryStore, PersistError, StorageError, read_document,
    write_document,
};
pub use store::{ScoreStore, StoreEvent, SubscriptionId};
