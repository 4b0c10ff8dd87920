use dixit_score::{GuessOutcome, PlayerId, ScoringRules};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::input::parse_score_entry;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub player_id: PlayerId,
    pub name: AttrValue,
    pub rules: ScoringRules,
    pub on_add_score: Callback<(PlayerId, i64)>,
    pub on_award: Callback<(PlayerId, GuessOutcome)>,
    pub on_rename: Callback<(PlayerId, String)>,
}

/// One row of score entry: editable name, a free-form delta and quick
/// buttons for the configured rule values.
#[function_component(PlayerScore)]
pub fn player_score(p: &Props) -> Html {
    let score = use_state(String::new);
    let name = use_state(|| p.name.to_string());
    let id = p.player_id;

    let on_name_input = {
        let name = name.clone();
        let on_rename = p.on_rename.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            name.set(value.clone());
            on_rename.emit((id, value));
        })
    };

    let on_score_input = {
        let score = score.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            score.set(input.value());
        })
    };

    let entry = parse_score_entry(&score);
    let on_add = {
        let score = score.clone();
        let on_add_score = p.on_add_score.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(delta) = entry {
                on_add_score.emit((id, delta));
                score.set(String::new());
            }
        })
    };

    let quick_buttons = GuessOutcome::ALL.iter().map(|&outcome| {
        let on_award = p.on_award.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_award.emit((id, outcome)));
        let points = p.rules.points_for(outcome);
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-quick", format!("btn-quick--{outcome}"))}
                title={format!("{outcome} guess")}
                {onclick}
            >
                { format!("{points:+}") }
            </button>
        }
    });

    html! {
        <div class="player-score" data-player={id.to_string()}>
            <input
                type="text"
                class="player-score__name"
                value={(*name).clone()}
                oninput={on_name_input}
            />
            <input
                type="number"
                class="player-score__delta"
                value={(*score).clone()}
                oninput={on_score_input}
            />
            <button
                type="button"
                class={classes!("btn", "btn-primary", entry.is_none().then_some("btn-disabled"))}
                disabled={entry.is_none()}
                onclick={on_add}
            >
                { "Add" }
            </button>
            { for quick_buttons }
        </div>
    }
}
