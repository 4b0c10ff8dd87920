//! Rules and threshold editor.
//!
//! Rule edits are staged locally and applied together with the Apply button;
//! the winning score is applied on every change.
use dixit_score::{GuessOutcome, ScoringRules};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::input::{coerce_int, coerce_winning_score, digits_only};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rules: ScoringRules,
    pub winning_score: i64,
    pub on_rules: Callback<ScoringRules>,
    pub on_winning_score: Callback<i64>,
}

const fn rule_label(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::Correct => "Correct guess:",
        GuessOutcome::Partial => "Partial guess:",
        GuessOutcome::Incorrect => "Incorrect guess:",
    }
}

const fn rule_field(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::Correct => "correctGuess",
        GuessOutcome::Partial => "partialGuess",
        GuessOutcome::Incorrect => "incorrectGuess",
    }
}

fn with_rule(rules: ScoringRules, outcome: GuessOutcome, value: i64) -> ScoringRules {
    let mut next = rules;
    match outcome {
        GuessOutcome::Correct => next.correct_guess = value,
        GuessOutcome::Partial => next.partial_guess = value,
        GuessOutcome::Incorrect => next.incorrect_guess = value,
    }
    next
}

#[function_component(ScoreSettings)]
pub fn score_settings(p: &Props) -> Html {
    let draft = use_state(|| p.rules);
    let winning_text = use_state(|| p.winning_score.to_string());

    let rule_inputs = GuessOutcome::ALL.iter().map(|&outcome| {
        let oninput = {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                draft.set(with_rule(*draft, outcome, coerce_int(&input.value())));
            })
        };
        html! {
            <label class="settings__rule">
                <span>{ rule_label(outcome) }</span>
                <input
                    type="text"
                    name={rule_field(outcome)}
                    value={draft.points_for(outcome).to_string()}
                    {oninput}
                />
            </label>
        }
    });

    let on_apply = {
        let draft = draft.clone();
        let on_rules = p.on_rules.clone();
        Callback::from(move |_: MouseEvent| on_rules.emit(*draft))
    };

    let on_winning_input = {
        let winning_text = winning_text.clone();
        let on_winning_score = p.on_winning_score.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            winning_text.set(digits_only(&raw));
            on_winning_score.emit(coerce_winning_score(&raw));
        })
    };

    html! {
        <>
            <section class="settings settings--rules">
                <h3>{ "Scoring rules" }</h3>
                <div class="settings__grid">
                    { for rule_inputs }
                </div>
                <button id="apply-rules-btn" class="btn btn-primary" onclick={on_apply}>
                    { "Apply" }
                </button>
            </section>
            <section class="settings settings--game">
                <h3>{ "Game settings" }</h3>
                <label for="winningScore">{ "Winning score:" }</label>
                <input
                    type="text"
                    id="winningScore"
                    value={(*winning_text).clone()}
                    oninput={on_winning_input}
                />
                <span class="settings__hint">
                    { "* The winning score is applied as soon as it changes." }
                </span>
            </section>
        </>
    }
}
