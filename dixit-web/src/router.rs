use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Both the root and `/dashboard` show the score board.
    #[must_use]
    pub const fn shows_board(&self) -> bool {
        matches!(self, Self::Home | Self::Dashboard)
    }
}
