//! Charset export format.
//!
//! Each slot becomes a two-line record:
//!
//! ```text
//! U+0041
//! # U+0041:	LATIN CAPITAL LETTER A
//! ```
//!
//! Empty slots are written as `U+0000` followed by `# Filler character`.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::charset::{CharacterSlot, Charset};
use crate::unicode::UnicodeDatabase;

/// Comment written for empty slots.
pub const FILLER_COMMENT: &str = "Filler character";

/// Destination suggested when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "char.set";

/// Errors that can occur while writing a charset file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write charset to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render one slot as its two-line record.
pub fn slot_record(slot: CharacterSlot, db: &impl UnicodeDatabase) -> String {
    match slot {
        CharacterSlot::Empty => format!("U+0000\n# {}\n", FILLER_COMMENT),
        CharacterSlot::Occupied(c) => {
            let value = c as u32;
            format!("U+{:04x}\n# U+{:04x}:\t{}\n", value, value, db.name(c))
        }
    }
}

/// Serialize `charset` and write it to `path`, replacing any existing file.
///
/// The file is created, written in full and closed before returning.
pub fn write_charset(
    path: &Path,
    charset: &Charset,
    db: &impl UnicodeDatabase,
) -> Result<(), ExportError> {
    let table = charset.serialize(db);
    let wrap = |source: std::io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(table.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;

    log::info!(
        "Wrote {} slots ({} bytes) to {}",
        charset.size(),
        table.len(),
        path.display()
    );
    Ok(())
}
