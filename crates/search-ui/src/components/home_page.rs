use crate::{
    components::icon::{Icon, IconView},
    config::ClientConfig,
};
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let Some(config) = use_context::<ClientConfig>() else {
        return html! { <p><IconView icon={Icon::Error} />{" Missing client configuration"}</p> };
    };
    html! {
        <section class="home">
            <p>
                <IconView icon={Icon::Globe} />
                {" Search backend: "}
                <code>{config.backend_api_url.clone()}</code>
            </p>
            <p>
                <IconView icon={Icon::Cog} />
                {" Environment: "}
                <code>{config.environment.clone()}</code>
            </p>
        </section>
    }
}
