use dixit_score::{GuessOutcome, PlayerId, ScoringRules};
use yew::prelude::*;

use crate::app::bootstrap::use_bootstrap;
use crate::app::state::{BoardHandle, SharedBackend, use_board_state};
use crate::components::score_board::ScoreBoardView;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub backend: SharedBackend,
}

fn with_store<T: 'static>(
    store: &BoardHandle,
    apply: impl Fn(&mut crate::app::state::BoardStore, T) + 'static,
) -> Callback<T> {
    let store = store.clone();
    Callback::from(move |arg: T| apply(&mut store.borrow_mut(), arg))
}

/// Owns the score store for the session and renders it once hydrated.
#[function_component(DashboardPage)]
pub fn dashboard_page(p: &Props) -> Html {
    let state = use_board_state(&p.backend);
    use_bootstrap(&state);

    if !*state.ready {
        return html! { <div class="loading">{ "loading..." }</div> };
    }

    let on_add_score = with_store(&state.store, |store, (id, delta): (PlayerId, i64)| {
        store.add_score(id, delta);
    });
    let on_award = with_store(&state.store, |store, (id, outcome): (PlayerId, GuessOutcome)| {
        store.award(id, outcome);
    });
    let on_rename = with_store(&state.store, |store, (id, name): (PlayerId, String)| {
        store.update_player_name(id, &name);
    });
    let on_reset = with_store(&state.store, |store, (): ()| store.reset_scores());
    let on_winning_score = with_store(&state.store, |store, score: i64| {
        store.update_winning_score(score);
    });
    let on_rules = {
        let status = state.status.clone();
        with_store(&state.store, move |store, rules: ScoringRules| {
            store.update_scoring_rules(rules);
            status.set(Some(AttrValue::from("Scoring rules updated!")));
        })
    };
    let on_dismiss_notice = {
        let notice = state.notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    html! {
        <main class="dashboard">
            <ScoreBoardView
                board={(*state.snapshot).clone()}
                notice={(*state.notice).clone()}
                status={(*state.status).clone()}
                {on_add_score}
                {on_award}
                {on_rename}
                {on_reset}
                {on_rules}
                {on_winning_score}
                {on_dismiss_notice}
            />
        </main>
    }
}
