//! Page-load sequence: register plugins, build the application, mount it.
//!
//! All three steps run synchronously, without yielding, so the root
//! component never observes a partially registered framework.

pub mod application;
pub mod framework;
pub mod page;
pub mod plugin;

pub use application::{Application, MountError, MountState, MountTarget};
pub use framework::Framework;
pub use page::{DomPage, Page};
pub use plugin::{Capabilities, Capability, Plugin, PluginId, default_plugins};

use crate::{
    app::{App, AppProps},
    config::ClientConfig,
};

/// Mounts [`App`] configured with `config` onto the `#app` element of `page`.
pub fn run<P: Page>(page: &P, config: ClientConfig) -> Result<Application<App>, MountError> {
    let mut framework = Framework::init();
    for plugin in default_plugins() {
        framework.use_plugin(plugin);
    }
    let mut app = framework.create_app::<App>(|capabilities| AppProps {
        config,
        capabilities: capabilities.clone(),
    });
    app.mount(page, &MountTarget::APP)?;
    Ok(app)
}
