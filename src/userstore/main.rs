use std::io;
use std::path::PathBuf;
use userstore::api::perform;
use userstore::config::UserStoreConfig;
use userstore::error::Result;
use userstore::logging;
use userstore::store::fs::ensure_file;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, config_error) = match UserStoreConfig::load(&cwd) {
        Ok(config) => (config, None),
        Err(e) => (UserStoreConfig::default(), Some(e)),
    };

    // Created before flags are parsed, independent of -fileName.
    let created = ensure_file(cwd.join(&config.bootstrap_file))?;

    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
    }
    if created {
        tracing::info!(file = %config.bootstrap_file, "created empty store file");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    perform(&cli.arguments(), &config, &mut out)
}
