//! The authoritative in-memory board with write-through persistence.
use std::fmt;

use crate::constants::{PLAYERS_KEY, SCORING_RULES_KEY, WINNING_SCORE_KEY};
use crate::model::{GuessOutcome, Player, PlayerId, ScoreBoard, ScoringRules};
use crate::storage::{KeyValueStore, PersistError, write_document};

/// Which transition an observer is being told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// First hydration; the ready signal went up.
    Hydrated,
    /// A later hydration re-read the backend.
    Reloaded,
    ScoreAdded { player_id: PlayerId, delta: i64 },
    ScoresReset,
    PlayerRenamed { player_id: PlayerId },
    RulesUpdated,
    WinningScoreUpdated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ScoreBoard, &StoreEvent)>;

/// Single writer for the board.
///
/// Every mutator updates the in-memory board, writes the affected document
/// to the backend, then notifies observers, all before returning. Mutators
/// never fail: a rejected write is logged, the in-memory change stands and
/// the error is kept for [`ScoreStore::take_persist_error`].
pub struct ScoreStore<S: KeyValueStore> {
    backend: S,
    board: ScoreBoard,
    hydrated: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    persist_error: Option<PersistError>,
}

impl<S: KeyValueStore> fmt::Debug for ScoreStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreStore")
            .field("board", &self.board)
            .field("hydrated", &self.hydrated)
            .field("observers", &self.observers.len())
            .field("persist_error", &self.persist_error)
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> ScoreStore<S> {
    /// A store holding the compiled-in defaults. Nothing is read from the
    /// backend until [`crate::hydrate`] runs.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            board: ScoreBoard::default(),
            hydrated: false,
            observers: Vec::new(),
            next_subscription: 0,
            persist_error: None,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &ScoreBoard {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.board.players
    }

    #[must_use]
    pub const fn winning_score(&self) -> i64 {
        self.board.winning_score
    }

    #[must_use]
    pub const fn scoring_rules(&self) -> ScoringRules {
        self.board.scoring_rules
    }

    /// Ready signal. False until the first hydration has seeded the board.
    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// The most recent write failure since the last call, if any.
    pub fn take_persist_error(&mut self) -> Option<PersistError> {
        self.persist_error.take()
    }

    /// Register an observer, invoked after every state transition.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ScoreBoard, &StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` when the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Append `delta` to the player's scores. Unknown ids leave the players
    /// untouched.
    pub fn add_score(&mut self, player_id: PlayerId, delta: i64) {
        let matched = self.update_players(player_id, |p| p.scores.push(delta));
        if matched {
            log::debug!("player {player_id} scored {delta}");
        } else {
            log::debug!("add_score ignored unknown player {player_id}");
        }
        self.persist_players();
        self.notify(&StoreEvent::ScoreAdded { player_id, delta });
    }

    /// Add the points the current rules give for `outcome`.
    pub fn award(&mut self, player_id: PlayerId, outcome: GuessOutcome) {
        let delta = self.board.scoring_rules.points_for(outcome);
        self.add_score(player_id, delta);
    }

    /// Empty every player's scores, keeping ids, names and order.
    pub fn reset_scores(&mut self) {
        for player in &mut self.board.players {
            player.scores.clear();
        }
        log::debug!("scores reset for {} players", self.board.players.len());
        self.persist_players();
        self.notify(&StoreEvent::ScoresReset);
    }

    /// Replace a player's name verbatim; the empty string is allowed.
    pub fn update_player_name(&mut self, player_id: PlayerId, new_name: &str) {
        let matched = self.update_players(player_id, |p| p.name = new_name.to_string());
        if !matched {
            log::debug!("update_player_name ignored unknown player {player_id}");
        }
        self.persist_players();
        self.notify(&StoreEvent::PlayerRenamed { player_id });
    }

    /// Replace the rules record wholesale.
    pub fn update_scoring_rules(&mut self, rules: ScoringRules) {
        self.board.scoring_rules = rules;
        log::debug!("scoring rules now {rules:?}");
        let written = write_document(&self.backend, SCORING_RULES_KEY, &rules);
        self.record_write(SCORING_RULES_KEY, written);
        self.notify(&StoreEvent::RulesUpdated);
    }

    /// Replace the winning threshold. Zero and negative values are accepted.
    pub fn update_winning_score(&mut self, score: i64) {
        self.board.winning_score = score;
        log::debug!("winning score now {score}");
        let written = write_document(&self.backend, WINNING_SCORE_KEY, &score);
        self.record_write(WINNING_SCORE_KEY, written);
        self.notify(&StoreEvent::WinningScoreUpdated);
    }

    /// Install a hydrated board and raise the ready signal. The backend is
    /// not written: the board came from it.
    pub(crate) fn seed(&mut self, board: ScoreBoard) {
        let event = if self.hydrated {
            StoreEvent::Reloaded
        } else {
            StoreEvent::Hydrated
        };
        self.board = board;
        self.hydrated = true;
        self.notify(&event);
    }

    fn update_players(&mut self, player_id: PlayerId, mut apply: impl FnMut(&mut Player)) -> bool {
        let mut matched = false;
        for player in self.board.players.iter_mut().filter(|p| p.id == player_id) {
            apply(player);
            matched = true;
        }
        matched
    }

    fn persist_players(&mut self) {
        let written = write_document(&self.backend, PLAYERS_KEY, &self.board.players);
        self.record_write(PLAYERS_KEY, written);
    }

    fn record_write(&mut self, key: &str, written: Result<(), PersistError>) {
        if let Err(err) = written {
            log::error!("failed to persist `{key}`: {err}");
            self.persist_error = Some(err);
        }
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, observer) in &mut self.observers {
            observer(&self.board, event);
        }
    }
}
