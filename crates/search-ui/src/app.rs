use crate::{
    bootstrap::{Capabilities, Capability},
    components::{header::Header, home_page::HomePage, not_found::NotFound},
    config::{ClientConfig, TITLE_VAR},
};
use yew::prelude::*;
use yew_router::prelude::*;

const DEFAULT_TITLE: &str = "Search";

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn render(route: Route) -> Html {
        match route {
            Route::Home => html! { <HomePage /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct AppProps {
    pub config: ClientConfig,
    pub capabilities: Capabilities,
}

#[function_component(App)]
pub fn app(
    AppProps {
        config,
        capabilities,
    }: &AppProps,
) -> Html {
    let title = AttrValue::from(config.exposed(TITLE_VAR).unwrap_or(DEFAULT_TITLE));
    let class = classes!(
        "container",
        capabilities
            .contains(Capability::StyledComponents)
            .then_some("themed")
    );

    html! {
        <ContextProvider<ClientConfig> context={config.clone()}>
            <ContextProvider<Capabilities> context={capabilities.clone()}>
                <div {class}>
                    <BrowserRouter basename={config.router_basename()}>
                        <Header {title} />
                        <main>
                            <Switch<Route> render={Route::render} />
                        </main>
                    </BrowserRouter>
                </div>
            </ContextProvider<Capabilities>>
        </ContextProvider<ClientConfig>>
    }
}
