use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the log filter for `log_level`; a `RUST_LOG` directive in the environment wins.
pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install a formatting subscriber writing to stderr. Does nothing if one is already set.
pub fn init_logger(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod logging_test {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init_logger(get_log_env("DEBUG".to_string()));
        init_logger(get_log_env("INFO".to_string()));
        tracing::debug!("logger installed");
    }
}
