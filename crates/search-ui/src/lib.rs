pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
