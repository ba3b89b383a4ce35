use super::application::MountTarget;
use log::warn;
use yew::BaseComponent;

/// The host page an application is mounted on.
pub trait Page {
    type Element;

    /// Returns the first element matching `target`.
    fn select(&self, target: &MountTarget) -> Option<Self::Element>;

    /// Replaces the content of `root` with the rendered component `C`.
    fn render<C: BaseComponent>(&self, root: Self::Element, props: C::Properties);
}

/// The browser document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPage;

impl Page for DomPage {
    type Element = web_sys::Element;

    fn select(&self, target: &MountTarget) -> Option<web_sys::Element> {
        gloo::utils::document()
            .query_selector(target.selector())
            .inspect_err(|err| warn!("Invalid selector `{}`: {err:?}", target.selector()))
            .ok()
            .flatten()
    }

    fn render<C: BaseComponent>(&self, root: web_sys::Element, props: C::Properties) {
        yew::Renderer::<C>::with_root_and_props(root, props).render();
    }
}
