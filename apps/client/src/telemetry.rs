use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber so logs never interleave with the game screen.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over warn.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug,reqwest=info,hyper=info"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
