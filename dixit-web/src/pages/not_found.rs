use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h2>{ "Page not found" }</h2>
            <Link<Route> to={Route::Dashboard}>{ "Back to the scoreboard" }</Link<Route>>
        </main>
    }
}
