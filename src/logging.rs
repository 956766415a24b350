//! Diagnostic logging to stderr. Quiet unless `RUST_LOG` asks for more.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .try_init();
}
