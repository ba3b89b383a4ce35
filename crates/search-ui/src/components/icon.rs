//! Icon component using Unicode characters.
//!
//! Icons only render when the icon plugin was registered.

use crate::bootstrap::{Capabilities, Capability};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    Blank,
    Cog,
    Error,
    Globe,
    Search,
}

impl Icon {
    #[must_use]
    pub fn as_char(self) -> &'static str {
        match self {
            Icon::Blank => " ",
            Icon::Cog => "⚙",
            Icon::Error => "⚠",
            Icon::Globe => "🌐",
            Icon::Search => "🔍",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    let icons_enabled = use_context::<Capabilities>()
        .is_some_and(|capabilities| capabilities.contains(Capability::Icons));
    if !icons_enabled {
        return Html::default();
    }
    let mut classes = props.class.clone();
    classes.push("icon");
    html! {
        <span class={classes} aria-hidden="true">
            { props.icon.as_char() }
        </span>
    }
}
