//! Write `bundle_<tag>.js` for every registered language.
//!
//! Usage: `bundle [OUT_DIR]` (defaults to `STATIC_DIR`, then `build`).

use anyhow::Result;
use ssr_greeter::{bundle::write_bundles, config::Config, i18n::LanguageRegistry};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ssr_greeter=info".parse()?),
        )
        .init();

    let out_dir = match std::env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(Config::from_env()?.static_dir),
    };

    let registry = LanguageRegistry::builtin()?;
    let written = write_bundles(&registry, &out_dir)?;

    info!("✓ Wrote {} bundles to {}", written.len(), out_dir.display());
    Ok(())
}
