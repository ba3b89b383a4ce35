use crate::{app::Route, components::icon::{Icon, IconView}};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h2><IconView icon={Icon::Error} />{" Page not found"}</h2>
            <Link<Route> to={Route::Home}>{"Back to search"}</Link<Route>>
        </section>
    }
}
