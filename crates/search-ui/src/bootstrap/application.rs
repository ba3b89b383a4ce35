use super::{
    page::Page,
    plugin::{Capabilities, PluginId},
};
use indexmap::IndexSet;
use log::{debug, error};
use std::borrow::Cow;
use yew::BaseComponent;

/// Selector of the element the application renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTarget(Cow<'static, str>);

impl MountTarget {
    pub const APP: MountTarget = MountTarget(Cow::Borrowed("#app"));

    pub fn new(selector: impl Into<Cow<'static, str>>) -> Self {
        Self(selector.into())
    }

    pub fn selector(&self) -> &str {
        &self.0
    }
}

impl Default for MountTarget {
    fn default() -> Self {
        Self::APP
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no element matches the mount target `{selector}`")]
    TargetNotFound { selector: String },
    #[error("the application is already mounted")]
    DoubleMount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    #[default]
    Unmounted,
    Mounted,
}

/// The root application object, bound to the root component `C`.
pub struct Application<C: BaseComponent> {
    plugins: IndexSet<PluginId>,
    capabilities: Capabilities,
    /// Present until the application is mounted.
    props: Option<C::Properties>,
}

impl<C: BaseComponent> Application<C> {
    pub(super) fn new(
        plugins: IndexSet<PluginId>,
        capabilities: Capabilities,
        props: C::Properties,
    ) -> Self {
        Self {
            plugins,
            capabilities,
            props: Some(props),
        }
    }

    pub fn state(&self) -> MountState {
        if self.props.is_some() {
            MountState::Unmounted
        } else {
            MountState::Mounted
        }
    }

    pub fn plugins(&self) -> impl Iterator<Item = PluginId> + '_ {
        self.plugins.iter().copied()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Renders the root component into the element matched by `target`.
    ///
    /// Fails without side effects when nothing matches, so the call may be
    /// repeated once the element exists. Any call after a successful mount
    /// fails with [`MountError::DoubleMount`].
    pub fn mount<P: Page>(&mut self, page: &P, target: &MountTarget) -> Result<(), MountError> {
        let Some(props) = self.props.take() else {
            error!("Refusing to mount the application a second time");
            return Err(MountError::DoubleMount);
        };
        let Some(root) = page.select(target) else {
            self.props = Some(props);
            error!("Mount target `{}` not found", target.selector());
            return Err(MountError::TargetNotFound {
                selector: target.selector().to_string(),
            });
        };
        page.render::<C>(root, props);
        debug!("Mounted application on `{}`", target.selector());
        Ok(())
    }
}
