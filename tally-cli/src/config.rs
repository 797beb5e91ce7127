//! Environment configuration loading from .env files
//!
//! `.env` is loaded into the process environment before arguments are
//! parsed, so every env-backed flag in `main.rs` sees its values.

use once_cell::sync::Lazy;

// Load .env the first time configuration is touched
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
pub fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "tally=info";
