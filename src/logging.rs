use tracing_subscriber::EnvFilter;

pub fn init_logging(level: &str) {
    // Base level from settings/CLI, still overridable via RUST_LOG.
    let default = format!("{level},quantum_sentence_generator={level},reqwest=warn");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the sentences, diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}
