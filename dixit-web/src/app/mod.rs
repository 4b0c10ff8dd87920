use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::not_found::NotFound;
use crate::router::Route;

pub mod bootstrap;
pub mod state;

pub use state::SharedBackend;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub backend: SharedBackend,
}

#[function_component(App)]
pub fn app(p: &Props) -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppRoutes backend={p.backend.clone()} />
        </BrowserRouter>
    }
}

/// Route switch, split from [`App`] so it can render under any router.
#[function_component(AppRoutes)]
pub fn app_routes(p: &Props) -> Html {
    let backend = p.backend.clone();
    html! {
        <Switch<Route> render={move |route: Route| switch(&route, &backend)} />
    }
}

fn switch(route: &Route, backend: &SharedBackend) -> Html {
    if route.shows_board() {
        html! { <DashboardPage backend={backend.clone()} /> }
    } else {
        html! { <NotFound /> }
    }
}
