use derive_more::Display;
use indexmap::IndexSet;

/// Identity used to de-duplicate plugin registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct PluginId(&'static str);

impl PluginId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

/// Something a registered plugin makes available to the component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Themed container and component styling.
    StyledComponents,
    /// Rendering of [`crate::components::icon::Icon`]s.
    Icons,
}

/// Ordered set of capabilities, provided to components as a context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities(IndexSet<Capability>);

impl Capabilities {
    pub fn insert(&mut self, capability: Capability) {
        self.0.insert(capability);
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub trait Plugin {
    fn id(&self) -> PluginId;

    /// Adds the plugin's capabilities. Called once per framework instance.
    fn install(&self, capabilities: &mut Capabilities);
}

pub struct StylePlugin;

impl Plugin for StylePlugin {
    fn id(&self) -> PluginId {
        PluginId::new("style")
    }

    fn install(&self, capabilities: &mut Capabilities) {
        capabilities.insert(Capability::StyledComponents);
    }
}

pub struct IconPlugin;

impl Plugin for IconPlugin {
    fn id(&self) -> PluginId {
        PluginId::new("icons")
    }

    fn install(&self, capabilities: &mut Capabilities) {
        capabilities.insert(Capability::Icons);
    }
}

/// Plugins every application needs, in registration order.
pub fn default_plugins() -> [&'static dyn Plugin; 2] {
    [&StylePlugin, &IconPlugin]
}
