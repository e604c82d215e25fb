use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// Only warnings and errors are shown unless `RUST_LOG` says otherwise; the
/// game owns the terminal while it runs, so anything chattier belongs behind
/// the environment filter.
pub fn init() {
    let env = Env::default().default_filter_or(LevelFilter::Warn.to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}
