use super::{
    application::Application,
    plugin::{Capabilities, Plugin, PluginId},
};
use indexmap::IndexSet;
use log::debug;
use yew::BaseComponent;

/// The framework instance plugins are registered against.
///
/// Lives from page load until [`Framework::create_app`] consumes it, so no
/// plugin can be registered after the application exists.
#[derive(Debug, Default)]
pub struct Framework {
    plugins: IndexSet<PluginId>,
    capabilities: Capabilities,
}

impl Framework {
    pub fn init() -> Self {
        Self::default()
    }

    /// Registers `plugin`. Registering the same plugin again is a no-op.
    pub fn use_plugin(&mut self, plugin: &dyn Plugin) -> &mut Self {
        let id = plugin.id();
        if self.plugins.insert(id) {
            plugin.install(&mut self.capabilities);
            debug!("Registered plugin `{id}`");
        } else {
            debug!("Plugin `{id}` is already registered");
        }
        self
    }

    pub fn is_registered(&self, id: PluginId) -> bool {
        self.plugins.contains(&id)
    }

    pub fn plugins(&self) -> impl Iterator<Item = PluginId> + '_ {
        self.plugins.iter().copied()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Builds the single root application. `props` receives the final
    /// capability set.
    pub fn create_app<C: BaseComponent>(
        self,
        props: impl FnOnce(&Capabilities) -> C::Properties,
    ) -> Application<C> {
        let props = props(&self.capabilities);
        debug!(
            "Created application with plugins {:?}",
            self.plugins.iter().collect::<Vec<_>>()
        );
        Application::new(self.plugins, self.capabilities, props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::plugin::{Capability, IconPlugin, StylePlugin, default_plugins};

    #[test]
    fn registering_twice_equals_registering_once() {
        let mut once = Framework::init();
        once.use_plugin(&IconPlugin);

        let mut twice = Framework::init();
        twice.use_plugin(&IconPlugin).use_plugin(&IconPlugin);

        assert_eq!(once.capabilities(), twice.capabilities());
        assert_eq!(1, twice.plugins().count());
        assert!(twice.is_registered(IconPlugin.id()));
    }

    #[test]
    fn default_plugins_in_order() {
        let mut framework = Framework::init();
        for plugin in default_plugins() {
            framework.use_plugin(plugin);
        }
        assert_eq!(
            vec![StylePlugin.id(), IconPlugin.id()],
            framework.plugins().collect::<Vec<_>>()
        );
        assert_eq!(
            vec![Capability::StyledComponents, Capability::Icons],
            framework.capabilities().iter().collect::<Vec<_>>()
        );
    }

    struct Counting(std::cell::Cell<u32>);

    impl Plugin for Counting {
        fn id(&self) -> PluginId {
            PluginId::new("counting")
        }

        fn install(&self, _capabilities: &mut Capabilities) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn install_runs_once_per_identity() {
        let plugin = Counting(std::cell::Cell::new(0));
        let mut framework = Framework::init();
        framework.use_plugin(&plugin).use_plugin(&plugin);
        assert_eq!(1, plugin.0.get());
        assert!(framework.capabilities().is_empty());
    }

    #[test]
    fn create_app_sees_all_capabilities() {
        #[yew::function_component]
        fn Blank() -> yew::Html {
            yew::Html::default()
        }

        let mut framework = Framework::init();
        framework.use_plugin(&StylePlugin).use_plugin(&IconPlugin);
        let mut seen = None;
        let app = framework.create_app::<Blank>(|capabilities| {
            seen = Some(capabilities.clone());
        });
        assert_eq!(Some(app.capabilities().clone()), seen);
        assert_eq!(2, app.capabilities().len());
    }
}
