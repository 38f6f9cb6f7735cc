//! Tracing setup for hosts embedding the game

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVES: &str = "wordle_game=info";

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_directives`.
///
/// # Errors
/// Returns an error if the directives don't parse or a global subscriber is already set.
pub fn init_tracing(default_directives: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives)
            .with_context(|| format!("invalid log directives '{default_directives}'"))?,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()
        .context("tracing subscriber already installed")?;

    tracing::trace!("tracing initialized");
    Ok(())
}
