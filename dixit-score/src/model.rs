//! Players, scoring rules and the aggregate board state.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_CORRECT_GUESS, DEFAULT_INCORRECT_GUESS, DEFAULT_PARTIAL_GUESS, DEFAULT_PLAYER_COUNT,
    DEFAULT_WINNING_SCORE,
};

pub type PlayerId = u32;

/// Stored records are JSON objects. Deserializing through a map rejects the
/// positional array form serde would otherwise accept for structs.
type JsonObject = Map<String, Value>;

/// A seat at the table and the points it has been awarded so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Every delta entered for this player, oldest first.
    pub scores: Vec<i64>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            scores: Vec::new(),
        }
    }

    /// Sum of all recorded deltas. Saturates instead of overflowing.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.scores
            .iter()
            .fold(0_i64, |acc, delta| acc.saturating_add(*delta))
    }

    #[must_use]
    pub fn has_reached(&self, winning_score: i64) -> bool {
        self.total() >= winning_score
    }
}

/// Point deltas offered for the three guess outcomes of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "JsonObject")]
pub struct ScoringRules {
    pub correct_guess: i64,
    pub partial_guess: i64,
    pub incorrect_guess: i64,
}

#[derive(Deserialize)]
struct PlayerFields {
    id: PlayerId,
    name: String,
    scores: Vec<i64>,
}

impl TryFrom<JsonObject> for Player {
    type Error = serde_json::Error;

    fn try_from(object: JsonObject) -> Result<Self, Self::Error> {
        let PlayerFields { id, name, scores } = serde_json::from_value(Value::Object(object))?;
        Ok(Self { id, name, scores })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RulesFields {
    correct_guess: i64,
    partial_guess: i64,
    incorrect_guess: i64,
}

impl TryFrom<JsonObject> for ScoringRules {
    type Error = serde_json::Error;

    fn try_from(object: JsonObject) -> Result<Self, Self::Error> {
        let fields: RulesFields = serde_json::from_value(Value::Object(object))?;
        Ok(Self {
            correct_guess: fields.correct_guess,
            partial_guess: fields.partial_guess,
            incorrect_guess: fields.incorrect_guess,
        })
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            correct_guess: DEFAULT_CORRECT_GUESS,
            partial_guess: DEFAULT_PARTIAL_GUESS,
            incorrect_guess: DEFAULT_INCORRECT_GUESS,
        }
    }
}

impl ScoringRules {
    #[must_use]
    pub const fn points_for(&self, outcome: GuessOutcome) -> i64 {
        match outcome {
            GuessOutcome::Correct => self.correct_guess,
            GuessOutcome::Partial => self.partial_guess,
            GuessOutcome::Incorrect => self.incorrect_guess,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessOutcome {
    Correct,
    Partial,
    Incorrect,
}

impl GuessOutcome {
    pub const ALL: [Self; 3] = [Self::Correct, Self::Partial, Self::Incorrect];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Partial => "partial",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuessOutcome {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "correct" => Ok(Self::Correct),
            "partial" => Ok(Self::Partial),
            "incorrect" => Ok(Self::Incorrect),
            _ => Err(()),
        }
    }
}

/// Everything the board shows: players in display order, rules and the
/// threshold that triggers the win notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    pub winning_score: i64,
    pub players: Vec<Player>,
    pub scoring_rules: ScoringRules,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            players: default_players(),
            scoring_rules: ScoringRules::default(),
        }
    }
}

/// The four seats a fresh board starts with.
#[must_use]
pub fn default_players() -> Vec<Player> {
    (1..=DEFAULT_PLAYER_COUNT)
        .map(|id| Player::new(id, format!("Player {id}")))
        .collect()
}

impl ScoreBoard {
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// `(id, total)` for every player, in display order.
    #[must_use]
    pub fn totals(&self) -> Vec<(PlayerId, i64)> {
        self.players.iter().map(|p| (p.id, p.total())).collect()
    }

    /// Players whose total meets or exceeds the winning score. Several
    /// players may qualify at once; reaching the threshold does not end
    /// the game.
    #[must_use]
    pub fn winners(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.has_reached(self.winning_score))
            .collect()
    }

    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.players
            .iter()
            .any(|p| p.has_reached(self.winning_score))
    }

    /// Players ordered by total, highest first. Ties keep display order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by_key(|p| std::cmp::Reverse(p.total()));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> ScoreBoard {
        ScoreBoard {
            winning_score: 10,
            players: vec![
                Player {
                    id: 1,
                    name: "Player 1".into(),
                    scores: vec![5, 6],
                },
                Player {
                    id: 2,
                    name: "Player 2".into(),
                    scores: vec![3, 4],
                },
            ],
            scoring_rules: ScoringRules::default(),
        }
    }

    #[test]
    fn default_board_seeds_four_empty_players() {
        let board = ScoreBoard::default();
        assert_eq!(board.winning_score, 30);
        assert_eq!(board.players.len(), 4);
        for (idx, player) in board.players.iter().enumerate() {
            let id = u32::try_from(idx + 1).unwrap();
            assert_eq!(player.id, id);
            assert_eq!(player.name, format!("Player {id}"));
            assert!(player.scores.is_empty());
        }
        assert_eq!(
            board.scoring_rules,
            ScoringRules {
                correct_guess: 3,
                partial_guess: 2,
                incorrect_guess: 0,
            }
        );
    }

    #[test]
    fn totals_and_winners_follow_threshold() {
        let board = sample_board();
        assert_eq!(board.totals(), vec![(1, 11), (2, 7)]);
        let winners: Vec<PlayerId> = board.winners().iter().map(|p| p.id).collect();
        assert_eq!(winners, vec![1]);
        assert!(board.has_winner());
    }

    #[test]
    fn winners_include_exact_threshold_and_ties() {
        let mut board = sample_board();
        board.winning_score = 7;
        let winners: Vec<PlayerId> = board.winners().iter().map(|p| p.id).collect();
        assert_eq!(winners, vec![1, 2]);
    }

    #[test]
    fn total_saturates_on_overflow() {
        let player = Player {
            id: 9,
            name: String::new(),
            scores: vec![i64::MAX, 5],
        };
        assert_eq!(player.total(), i64::MAX);
    }

    #[test]
    fn standings_rank_by_total_and_keep_ties_stable() {
        let mut board = sample_board();
        board.players.push(Player {
            id: 3,
            name: "Player 3".into(),
            scores: vec![7],
        });
        let order: Vec<PlayerId> = board.standings().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn rules_serialize_with_camel_case_keys() {
        let json = serde_json::to_string(&ScoringRules::default()).unwrap();
        assert_eq!(json, r#"{"correctGuess":3,"partialGuess":2,"incorrectGuess":0}"#);
    }

    #[test]
    fn records_only_load_from_objects() {
        assert!(serde_json::from_str::<ScoringRules>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<Vec<Player>>(r#"[[1,"a",[]]]"#).is_err());
        let rules: ScoringRules =
            serde_json::from_str(r#"{"correctGuess":1,"partialGuess":2,"incorrectGuess":3}"#)
                .unwrap();
        assert_eq!(rules.incorrect_guess, 3);
        let players: Vec<Player> =
            serde_json::from_str(r#"[{"id":1,"name":"a","scores":[2]}]"#).unwrap();
        let mut expected = Player::new(1, "a");
        expected.scores.push(2);
        assert_eq!(players, vec![expected]);
    }

    #[test]
    fn outcome_parses_case_insensitively() {
        assert_eq!("Correct".parse(), Ok(GuessOutcome::Correct));
        assert_eq!(" partial ".parse(), Ok(GuessOutcome::Partial));
        assert_eq!("INCORRECT".parse(), Ok(GuessOutcome::Incorrect));
        assert!("bogus".parse::<GuessOutcome>().is_err());
    }

    #[test]
    fn points_for_reads_matching_rule() {
        let rules = ScoringRules {
            correct_guess: 15,
            partial_guess: 5,
            incorrect_guess: -5,
        };
        assert_eq!(rules.points_for(GuessOutcome::Correct), 15);
        assert_eq!(rules.points_for(GuessOutcome::Partial), 5);
        assert_eq!(rules.points_for(GuessOutcome::Incorrect), -5);
    }
}
