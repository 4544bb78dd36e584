// SPDX-License-Identifier: MPL-2.0
//! Logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "iced_toast=info,patch_locales=info,warn";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// `verbose` raises the fallback level to `debug`. A second call is a no-op.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { DEFAULT_DIRECTIVE };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
