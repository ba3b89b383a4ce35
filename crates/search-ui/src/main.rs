use log::error;
use search_ui::{
    bootstrap::{self, DomPage},
    config::ClientConfig,
};

fn main() {
    init_logging();
    if let Err(err) = bootstrap::run(&DomPage, ClientConfig::from_build()) {
        error!("Bootstrap failed: {err}");
        wasm_bindgen::throw_str(&err.to_string());
    }
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // trace level for debug builds, warn level for release builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
