use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::Environment;

/// Install color-eyre so startup errors print with file:line context.
///
/// Call early in main(), before anything fallible. Repeated calls are
/// harmless; the environment section is suppressed to keep reports short.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global tracing subscriber for the given environment.
///
/// Production gets flattened JSON events for log aggregation; development
/// gets pretty human-readable output. Both attach an `ErrorLayer` so eyre
/// reports carry span traces. `RUST_LOG` overrides the default filter
/// ("info,tower_http=info" in production, "debug" otherwise).
///
/// If a subscriber is already installed, which happens under `cargo test`,
/// the call is a no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,tower_http=info")
        } else {
            EnvFilter::new("debug")
        }
    });

    let registry = tracing_subscriber::registry()
        .with(tracing_error::ErrorLayer::default())
        .with(filter);

    let result = if environment.is_production() {
        let json = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true);
        registry.with(json).try_init()
    } else {
        let pretty = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .pretty();
        registry.with(pretty).try_init()
    };

    match result {
        Ok(()) => info!("Tracing initialized. Environment: {:?}", environment),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
