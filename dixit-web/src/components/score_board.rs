use dixit_score::{GuessOutcome, PlayerId, ScoreBoard, ScoringRules};
use yew::prelude::*;

use super::modal::Modal;
use super::player_score::PlayerScore;
use super::score_settings::ScoreSettings;

/// Who crossed the threshold, captured when the notification was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinNotice {
    pub names: Vec<String>,
    pub winning_score: i64,
}

impl WinNotice {
    /// `None` while nobody has reached the winning score.
    #[must_use]
    pub fn from_board(board: &ScoreBoard) -> Option<Self> {
        let names: Vec<String> = board.winners().iter().map(|p| p.name.clone()).collect();
        if names.is_empty() {
            return None;
        }
        Some(Self {
            names,
            winning_score: board.winning_score,
        })
    }

    #[must_use]
    pub fn message(&self) -> String {
        let who = self.names.join(", ");
        format!(
            "{who} reached the winning score of {} and won!",
            self.winning_score
        )
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub board: ScoreBoard,
    #[prop_or_default]
    pub notice: Option<WinNotice>,
    #[prop_or_default]
    pub status: Option<AttrValue>,
    pub on_add_score: Callback<(PlayerId, i64)>,
    pub on_award: Callback<(PlayerId, GuessOutcome)>,
    pub on_rename: Callback<(PlayerId, String)>,
    pub on_reset: Callback<()>,
    pub on_rules: Callback<ScoringRules>,
    pub on_winning_score: Callback<i64>,
    #[prop_or_default]
    pub on_dismiss_notice: Callback<()>,
}

/// Stateless board layout; the dashboard page owns the store and feeds it
/// snapshots.
#[function_component(ScoreBoardView)]
pub fn score_board_view(p: &Props) -> Html {
    let board = &p.board;

    let rows = board.players.iter().map(|player| {
        html! {
            <PlayerScore
                key={player.id}
                player_id={player.id}
                name={AttrValue::from(player.name.clone())}
                rules={board.scoring_rules}
                on_add_score={p.on_add_score.clone()}
                on_award={p.on_award.clone()}
                on_rename={p.on_rename.clone()}
            />
        }
    });

    let totals = board.players.iter().map(|player| {
        let reached = player.has_reached(board.winning_score);
        html! {
            <div key={player.id} class={classes!("totals__row", reached.then_some("totals__row--winner"))}>
                <p class="totals__name">{ format!("{}:", player.name) }</p>
                <span class="totals__value">{ player.total().to_string() }</span>
            </div>
        }
    });

    let on_reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="score-board">
            <h2 class="score-board__title">{ "Dixit Scoreboard" }</h2>
            <ScoreSettings
                rules={board.scoring_rules}
                winning_score={board.winning_score}
                on_rules={p.on_rules.clone()}
                on_winning_score={p.on_winning_score.clone()}
            />
            { p.status.as_ref().map(|msg| html! {
                <p class="score-board__status" role="status">{ msg.clone() }</p>
            }).unwrap_or_default() }
            <section class="score-board__entries">
                <h3>{ "Score entry" }</h3>
                { for rows }
            </section>
            <section class="score-board__totals">
                <h3>{ "Totals" }</h3>
                <div class="totals">
                    { for totals }
                </div>
            </section>
            <button id="reset-scores-btn" class="btn btn-danger" onclick={on_reset}>
                { "Reset scores" }
            </button>
            <Modal
                open={p.notice.is_some()}
                title={AttrValue::from("We have a winner!")}
                description={p.notice.as_ref().map(|n| AttrValue::from(n.message()))}
                on_close={p.on_dismiss_notice.clone()}
            />
        </div>
    }
}
