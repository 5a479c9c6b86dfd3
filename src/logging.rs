// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Tracing subscriber setup for the CLI.

use std::io;

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a formatting subscriber that writes to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(default_filter: &str,)
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter,),);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter,)
        .with_writer(io::stderr,)
        .with_target(false,)
        .try_init();
}
