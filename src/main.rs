use machmon::commands::Cli;
use tracing_subscriber::filter::EnvFilter;

/// Logs go to stderr so tables on stdout stay pipeable. `MACHMON_DEBUG`
/// without `RUST_LOG` enables debug output for this crate only.
fn init_logging() {
    let fallback = if std::env::var("MACHMON_DEBUG").is_ok() {
        "machmon=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    Cli::menu()
}
