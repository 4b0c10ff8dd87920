use std::io::{self, Write};

use colored::Colorize;
use dixit_score::{GuessOutcome, Player, ScoreBoard, ScoringRules};
use serde::Serialize;

/// The three persisted documents side by side, under their storage keys.
#[derive(Debug, Serialize)]
pub struct BoardExport<'a> {
    #[serde(rename = "dixitScores")]
    pub players: &'a [Player],
    #[serde(rename = "winningScore")]
    pub winning_score: i64,
    #[serde(rename = "dixitRules")]
    pub scoring_rules: ScoringRules,
}

impl<'a> From<&'a ScoreBoard> for BoardExport<'a> {
    fn from(board: &'a ScoreBoard) -> Self {
        Self {
            players: &board.players,
            winning_score: board.winning_score,
            scoring_rules: board.scoring_rules,
        }
    }
}

pub fn write_export(out: &mut dyn Write, board: &ScoreBoard) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &BoardExport::from(board))?;
    writeln!(out)?;
    Ok(())
}

fn rules_line(rules: ScoringRules) -> String {
    GuessOutcome::ALL
        .iter()
        .map(|outcome| format!("{outcome} {:+}", rules.points_for(*outcome)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sentence naming every winner, or `None` while nobody has reached the threshold.
pub fn win_message(board: &ScoreBoard) -> Option<String> {
    let winners = board.winners();
    if winners.is_empty() {
        return None;
    }
    let names = winners
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "{names} reached the winning score of {} and won!",
        board.winning_score
    ))
}

pub fn write_board(out: &mut dyn Write, board: &ScoreBoard) -> io::Result<()> {
    writeln!(out, "{}", "Dixit Scoreboard".bright_cyan().bold())?;
    writeln!(out, "{}", "================".cyan())?;
    writeln!(out, "Rules: {}", rules_line(board.scoring_rules))?;
    writeln!(out, "Winning score: {}", board.winning_score)?;
    writeln!(out)?;

    for (rank, player) in board.standings().into_iter().enumerate() {
        let total = player.total();
        let line = format!(
            "{:>2}. [{}] {:<20} {:>5}  ({} rounds)",
            rank + 1,
            player.id,
            player.name,
            total,
            player.scores.len()
        );
        if player.has_reached(board.winning_score) {
            writeln!(out, "{}", line.green().bold())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }

    if let Some(message) = win_message(board) {
        writeln!(out)?;
        writeln!(out, "{}", format!("🏆 {message}").yellow().bold())?;
    }
    Ok(())
}
