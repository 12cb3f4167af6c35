mod cli;
mod commands;

use std::io;
use std::process::ExitCode;

use memokeys_config::schema::MemoKeysConfig;
use memokeys_config::validation::validate_settings;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "memokeys=info";

fn init_logging(directive: &str) {
    let filter = match directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("invalid log level '{directive}' ({e}), using {DEFAULT_DIRECTIVE}");
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Settings are read before logging starts so the configured level applies.
    let (settings, load_error) = match memokeys_config::load_settings(args.config.as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => (MemoKeysConfig::default(), Some(e)),
    };

    let directive = match &args.log_level {
        Some(level) => cli::log_directive(level),
        None => settings.logging.level.directive(),
    };
    init_logging(&directive);

    tracing::debug!("memokeys v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("config load failed, using defaults: {e}");
    }
    if let Err(e) = validate_settings(&settings) {
        tracing::warn!("{e}");
    }

    let ctx = commands::Context::new(settings, args.data_dir.as_deref());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    match commands::run(&ctx, args.command, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
