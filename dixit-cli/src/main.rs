mod file_store;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dixit_score::{GuessOutcome, KeyValueStore, PlayerId, ScoreStore, ScoringRules, hydrated};
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use thiserror::Error;

use file_store::FileStore;

#[derive(Debug, Error)]
#[error("unknown outcome `{0}` (expected correct, partial or incorrect)")]
struct UnknownOutcome(String);

fn parse_outcome(raw: &str) -> Result<GuessOutcome, UnknownOutcome> {
    raw.parse().map_err(|()| UnknownOutcome(raw.trim().to_string()))
}

#[derive(Debug, Parser)]
#[command(name = "dixit", version)]
#[command(about = "Keep score for a game of Dixit from the terminal")]
struct Args {
    /// Directory holding the persisted scoreboard documents
    #[arg(long, global = true, default_value = ".dixit")]
    data_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show standings, totals, rules and the winning score
    Show,
    /// Add a signed number of points to a player
    Add {
        player_id: PlayerId,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Award the points the current rules give for a guess outcome
    Award {
        player_id: PlayerId,
        #[arg(value_parser = parse_outcome)]
        outcome: GuessOutcome,
    },
    /// Clear every player's score history
    Reset,
    /// Rename a player
    Rename { player_id: PlayerId, name: String },
    /// Replace the scoring rules
    Rules {
        #[arg(allow_negative_numbers = true)]
        correct: i64,
        #[arg(allow_negative_numbers = true)]
        partial: i64,
        #[arg(allow_negative_numbers = true)]
        incorrect: i64,
    },
    /// Set the score needed to win
    Winning {
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },
    /// Print the stored documents as one JSON object
    Export {
        /// Optional path to write the export to instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Command {
    const fn mutates(&self) -> bool {
        !matches!(self, Self::Show | Self::Export { .. })
    }

    const fn player_id(&self) -> Option<PlayerId> {
        match self {
            Self::Add { player_id, .. }
            | Self::Award { player_id, .. }
            | Self::Rename { player_id, .. } => Some(*player_id),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.command.mutates() {
        fs::create_dir_all(&args.data_dir)
            .with_context(|| format!("failed to create {}", args.data_dir.display()))?;
    }

    let (mut store, report) = hydrated(FileStore::open(&args.data_dir));
    if report.is_fresh() {
        log::info!(
            "no saved board in {}, starting from defaults",
            store.backend().root().display()
        );
    }

    run(&mut store, args.command)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run<S: KeyValueStore>(store: &mut ScoreStore<S>, command: Command) -> Result<()> {
    if let Some(player_id) = command.player_id()
        && !store.board().contains_player(player_id)
    {
        warn_unknown_player(player_id);
    }

    match command {
        Command::Show => {}
        Command::Add { player_id, delta } => store.add_score(player_id, delta),
        Command::Award { player_id, outcome } => store.award(player_id, outcome),
        Command::Reset => store.reset_scores(),
        Command::Rename { player_id, name } => store.update_player_name(player_id, &name),
        Command::Rules {
            correct,
            partial,
            incorrect,
        } => store.update_scoring_rules(ScoringRules {
            correct_guess: correct,
            partial_guess: partial,
            incorrect_guess: incorrect,
        }),
        Command::Winning { score } => store.update_winning_score(score),
        Command::Export { output } => {
            let mut target = OutputTarget::new(output)?;
            report::write_export(&mut target, store.board())?;
            target.flush()?;
            return Ok(());
        }
    }

    if let Some(err) = store.take_persist_error() {
        return Err(err).context("failed to save the board; nothing was changed on disk");
    }

    let mut out = stdout().lock();
    report::write_board(&mut out, store.board())?;
    out.flush()?;
    Ok(())
}

fn warn_unknown_player(player_id: PlayerId) {
    log::warn!("no player with id {player_id}");
    eprintln!(
        "{} no player with id {player_id}; the board is unchanged",
        "warning:".yellow().bold()
    );
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}
