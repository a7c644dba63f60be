use charset_builder::cli::{self, Args, Command, ConfigAction, LogLevel};
use charset_builder::config::Config;
use charset_builder::session::{self, resolve_blocks, SessionError, SessionOptions, SessionOutcome};
use charset_builder::terminal::TerminalDialog;
use charset_builder::unicode::SystemDatabase;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::PathBuf;

/// Start file logging. The terminal belongs to the TUI, so nothing is
/// duplicated to stderr.
fn init_logging(level: LogLevel) -> Option<LoggerHandle> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("charset-builder");
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: could not create log directory {}: {}", log_dir.display(), e);
        return None;
    }

    let started = Logger::try_with_env_or_str(level.as_str()).and_then(|logger| {
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(&log_dir)
                    .basename("charset-builder")
                    .suffix("log")
                    .suppress_timestamp(),
            )
            .rotate(
                Criterion::Size(64 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start()
    });
    match started {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    }
}

/// Load config: an explicit --config path must exist, the default path may
/// be absent. A file that is present but malformed is fatal either way.
fn load_config(explicit: Option<&std::path::Path>) -> Config {
    let loaded = match explicit {
        Some(path) => Config::load_from_explicit(path),
        None => Config::load(),
    };
    match loaded {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_session(args: &Args, cfg: &Config) -> Result<SessionOutcome, SessionError> {
    // Merge settings: CLI args > config file > built-in defaults
    let options = SessionOptions {
        common_blocks: resolve_blocks(cfg.blocks.common.as_slice()),
        default_output: args
            .output
            .clone()
            .unwrap_or_else(|| cfg.output.default_path.clone()),
        default_count: args.count.or(cfg.charset.default_count),
    };

    let mut dialog = TerminalDialog::new(!args.no_hints && cfg.ui.key_hints)?;
    let outcome = session::run(&mut dialog, &SystemDatabase, options);
    dialog.restore()?;
    outcome
}

fn main() {
    let args = Args::parse();
    let _logger = init_logging(args.log_level);
    log::info!("Starting charset-builder {}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Some(Command::Config {
            action: ConfigAction::Init,
        }) => {
            cli::handle_config_action(ConfigAction::Init, args.config.as_deref(), &Config::default());
        }
        Some(Command::Config { ref action }) => {
            let cfg = load_config(args.config.as_deref());
            cli::handle_config_action(action.clone(), args.config.as_deref(), &cfg);
        }
        Some(Command::Blocks { common }) => {
            let cfg = load_config(args.config.as_deref());
            cli::list_blocks(common, &cfg);
        }
        None => {
            let cfg = load_config(args.config.as_deref());
            match run_session(&args, &cfg) {
                Ok(SessionOutcome::Saved(path)) => {
                    println!("Wrote charset to {}.", path.display());
                }
                Ok(SessionOutcome::SaveFailed(path)) => {
                    eprintln!("Error: could not write charset to {}.", path.display());
                    std::process::exit(1);
                }
                Ok(SessionOutcome::Discarded) | Ok(SessionOutcome::Aborted) => {
                    println!("Quit without saving.");
                }
                Err(e) => {
                    log::error!("Session failed: {}", e);
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
