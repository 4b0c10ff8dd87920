//! Storage keys and compiled-in defaults for the scoreboard.
//!
//! The keys match the documents written by earlier browser builds, so an
//! existing `localStorage` keeps loading after an upgrade.

// Backing-store keys -------------------------------------------------------
pub const PLAYERS_KEY: &str = "dixitScores";
pub const WINNING_SCORE_KEY: &str = "winningScore";
pub const SCORING_RULES_KEY: &str = "dixitRules";

// Defaults -----------------------------------------------------------------
pub const DEFAULT_WINNING_SCORE: i64 = 30;
pub const DEFAULT_PLAYER_COUNT: u32 = 4;
pub const DEFAULT_CORRECT_GUESS: i64 = 3;
pub const DEFAULT_PARTIAL_GUESS: i64 = 2;
pub const DEFAULT_INCORRECT_GUESS: i64 = 0;
