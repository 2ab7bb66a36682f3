use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use quantum_sentence_generator::app::{load_builder, select_source};
use quantum_sentence_generator::config::settings::GeneratorSettings;
use quantum_sentence_generator::config::settings_io::{load_settings, save_settings};
use quantum_sentence_generator::engine::cluster::ClusterGenerator;
use quantum_sentence_generator::engine::session::Session;
use quantum_sentence_generator::logging::init_logging;
use quantum_sentence_generator::model::template::GrammarOptions;

/// Print clusters of random sentences drawn with quantum randomness.
#[derive(Debug, Parser)]
#[command(name = "quantum-sentences", version)]
struct Cli {
    /// Directory containing the word list files
    #[arg(long)]
    words: Option<PathBuf>,

    /// Use local pseudo-randomness only
    #[arg(long)]
    offline: bool,

    /// Seed for the local generator
    #[arg(long)]
    seed: Option<u64>,

    /// QRNG endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Values requested per QRNG call
    #[arg(long)]
    batch_size: Option<usize>,

    /// Seconds to wait for the QRNG before falling back
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Canonical template, no commas, no shuffling, always a full stop
    #[arg(long)]
    plain: bool,

    /// Prompt for clusters until told to quit
    #[arg(long)]
    interactive: bool,

    /// Log filter level (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Persist the effective settings before running
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    fn apply(&self, settings: &mut GeneratorSettings) {
        if let Some(dir) = &self.words {
            settings.words_dir = dir.clone();
        }
        if self.offline {
            settings.offline = true;
        }
        if let Some(endpoint) = &self.endpoint {
            settings.qrng_endpoint = endpoint.clone();
        }
        if let Some(n) = self.batch_size {
            settings.batch_size = n;
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout_secs = secs;
        }
        if self.plain {
            settings.grammar = GrammarOptions::plain();
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (mut settings, settings_error) = match load_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (GeneratorSettings::default(), Some(e)),
    };
    cli.apply(&mut settings);

    init_logging(&settings.log_level);
    if let Some(e) = settings_error {
        warn!(error = %e, "ignoring settings file");
    }

    if cli.save_settings {
        match save_settings(&settings) {
            Ok(path) => info!(path = %path.display(), "settings saved"),
            Err(e) => warn!(error = %e, "could not save settings"),
        }
    }

    let builder = load_builder(&settings).with_context(|| {
        format!("loading word lists from {}", settings.words_dir.display())
    })?;
    let generator = ClusterGenerator::new(&builder);
    let mut source = select_source(&settings, cli.seed);

    if cli.interactive {
        let stdin = io::stdin();
        let mut session = Session::new(generator, stdin.lock(), io::stdout());
        session.run(source.as_mut()).context("interactive session")?;
        return Ok(());
    }

    let cluster = generator.generate_cluster(source.as_mut());
    let mut out = io::stdout().lock();
    for sentence in &cluster {
        writeln!(out, "{}", sentence)?;
    }
    out.flush()?;

    Ok(())
}
