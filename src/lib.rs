//! Server-rendered greeting page with per-language message catalogs.

pub mod bundle;
pub mod config;
pub mod i18n;
pub mod render;
pub mod server;
