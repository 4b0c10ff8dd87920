use dixit_score::{KeyValueStore, ScoreBoard, ScoreStore};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::score_board::WinNotice;

/// Backend injected into the dashboard. Equality is pointer identity so a
/// re-render with the same backend does not rebuild the store.
#[derive(Clone)]
pub struct SharedBackend(pub Rc<dyn KeyValueStore>);

impl SharedBackend {
    pub fn new<S: KeyValueStore + 'static>(backend: S) -> Self {
        Self(Rc::new(backend))
    }
}

impl PartialEq for SharedBackend {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

pub type BoardStore = ScoreStore<Rc<dyn KeyValueStore>>;
pub type BoardHandle = Rc<RefCell<BoardStore>>;

/// Everything the dashboard renders from. The view only ever reads these
/// snapshots, never the store itself, so observers may fire while the store
/// is mutably borrowed.
#[derive(Clone)]
pub struct BoardState {
    pub store: BoardHandle,
    pub ready: UseStateHandle<bool>,
    pub snapshot: UseStateHandle<ScoreBoard>,
    pub notice: UseStateHandle<Option<WinNotice>>,
    pub status: UseStateHandle<Option<AttrValue>>,
}

#[hook]
pub fn use_board_state(backend: &SharedBackend) -> BoardState {
    let backend = backend.0.clone();
    BoardState {
        store: use_mut_ref(move || ScoreStore::new(backend)),
        ready: use_state(|| false),
        snapshot: use_state(ScoreBoard::default),
        notice: use_state_eq(|| None::<WinNotice>),
        status: use_state(|| None::<AttrValue>),
    }
}
