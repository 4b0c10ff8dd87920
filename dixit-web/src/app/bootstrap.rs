use dixit_score::{ScoreBoard, StoreEvent, hydrate};
use yew::prelude::*;

use crate::app::state::BoardState;
use crate::components::score_board::WinNotice;

/// Notice to show after any transition. `notice` is an eq-state, so a repeat
/// of the notice already on screen does not re-render it.
fn notice_for(board: &ScoreBoard) -> Option<WinNotice> {
    WinNotice::from_board(board)
}

fn on_store_event(state: &BoardState, board: &ScoreBoard, event: &StoreEvent) {
    log::debug!("board changed: {event:?}");
    state.snapshot.set(board.clone());
    state.notice.set(notice_for(board));
}

/// Subscribe to the store and hydrate it once, on mount.
#[hook]
pub fn use_bootstrap(state: &BoardState) {
    let state = state.clone();
    use_effect_with((), move |_| {
        let subscription = {
            let observer_state = state.clone();
            state
                .store
                .borrow_mut()
                .subscribe(move |board, event| on_store_event(&observer_state, board, event))
        };
        let ready = {
            let mut store = state.store.borrow_mut();
            let report = hydrate(&mut *store);
            if report.is_fresh() {
                log::info!("no saved board found, starting with defaults");
            }
            store.is_hydrated()
        };
        state.ready.set(ready);

        let store = state.store.clone();
        move || {
            store.borrow_mut().unsubscribe(subscription);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use dixit_score::{MemoryStore, ScoreStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Notices = Rc<RefCell<Vec<Option<WinNotice>>>>;

    fn recorded_notices(store: &mut ScoreStore<MemoryStore>) -> Notices {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |board, _| sink.borrow_mut().push(notice_for(board)));
        seen
    }

    #[test]
    fn lowering_threshold_raises_notice() {
        let mut store = ScoreStore::new(MemoryStore::new());
        store.add_score(2, 6);
        let seen = recorded_notices(&mut store);
        store.update_winning_score(5);
        let notice = seen.borrow()[0].clone().expect("winner after threshold change");
        assert_eq!(notice.names, vec!["Player 2".to_string()]);
        assert_eq!(notice.winning_score, 5);
    }

    #[test]
    fn renaming_a_winner_updates_notice() {
        let mut store = ScoreStore::new(MemoryStore::new());
        store.update_winning_score(5);
        store.add_score(1, 5);
        let seen = recorded_notices(&mut store);
        store.update_player_name(1, "Ana");
        store.update_scoring_rules(dixit_score::ScoringRules::default());
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        for notice in seen.iter() {
            let notice = notice.as_ref().expect("winner still present");
            assert_eq!(notice.message(), "Ana reached the winning score of 5 and won!");
        }
    }

    #[test]
    fn reset_clears_notice() {
        let mut store = ScoreStore::new(MemoryStore::new());
        store.update_winning_score(1);
        store.add_score(3, 2);
        let seen = recorded_notices(&mut store);
        store.reset_scores();
        assert_eq!(*seen.borrow(), vec![None]);
    }
}
