use crate::{app::Route, components::icon::{Icon, IconView}};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
}

#[function_component(Header)]
pub fn header(HeaderProps { title }: &HeaderProps) -> Html {
    html! {
        <header>
            <nav>
                <Link<Route> to={Route::Home}>
                    <IconView icon={Icon::Search} />
                    {" "}
                    {title.clone()}
                </Link<Route>>
            </nav>
        </header>
    }
}
