//! Subcommand handlers for blocks and config actions.

use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG_TOML};
use crate::session::resolve_blocks;
use crate::unicode::{all_block_ids, UnicodeBlock};

/// One line of the `blocks` listing.
pub fn format_block(block: &UnicodeBlock) -> String {
    format!(
        "  {:<40} U+{:04X}..U+{:04X}  {}",
        block.id(),
        block.start,
        block.end - 1,
        block.name
    )
}

/// Print block ids, ranges and names to stdout.
pub fn list_blocks(common: bool, config: &Config) {
    let ids = if common {
        config.blocks.common.clone()
    } else {
        all_block_ids()
    };
    let blocks = resolve_blocks(ids.as_slice());

    if blocks.is_empty() {
        println!("No blocks configured.");
        return;
    }
    for block in blocks {
        println!("{}", format_block(block));
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, explicit_path: Option<&Path>, config: &Config) {
    let config_path: PathBuf = explicit_path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            match config.charset.default_count {
                Some(count) => println!("  Default count: {}", count),
                None => println!("  Default count: (none)"),
            }
            println!("  Common blocks: {}", config.blocks.common.join(", "));
            println!("  Output: {}", config.output.default_path.display());
            println!(
                "  Key hints: {}",
                if config.ui.key_hints { "yes" } else { "no" }
            );
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'charset-builder config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG_TOML) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            log::info!("Created config file {}", config_path.display());
            println!("Created config file: {}", config_path.display());
        }
    }
}
