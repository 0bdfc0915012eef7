//! Tracing Setup
//!
//! Console logging through `tracing-subscriber`. Filtering follows
//! `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Initialize the global tracing subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(settings: &LoggingSettings) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(!settings.ansi)
        .with_ansi(settings.ansi)
        .try_init()
        .is_ok();

    if !installed {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        let settings = LoggingSettings::default();
        init_tracing(&settings);
        init_tracing(&settings);
        tracing::info!("still logging");
    }
}
