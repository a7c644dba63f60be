//! Interactive session: a menu-driven state machine over one [`Charset`].
//!
//! Setup asks for the charset size and whether to pre-load ASCII, then the
//! session cycles through [`SessionState`] until it reaches
//! [`SessionState::Terminated`]. Every sub-flow returns to the main menu when
//! it finishes or when the user cancels; cancelling never mutates the charset.

mod input;
mod report;

pub use input::{parse_char_input, parse_count, CharInputError};
pub use report::{ascii_warning, insert_warning, placed_message};

use std::path::PathBuf;

use crate::charset::{Charset, CharsetError};
use crate::dialog::{Dialog, DialogError};
use crate::export::{self, DEFAULT_OUTPUT_PATH};
use crate::unicode::{self, describe, printable_candidates, UnicodeBlock, UnicodeDatabase};

const COUNT_PROMPT: &str = "Number of characters in charset: ";
const CHAR_PROMPT: &str = "Paste a single Unicode character, or type a codepoint as \"U+[hex]\".\n\
    Please note that multi-character sequences are not supported at this time.";
/// Last entry of the block shortlist; expands to the full table.
pub const OTHER_BLOCK_LABEL: &str = "Choose a different Unicode block...";
/// First entry of the character list; selects every candidate.
pub const ALL_CHARS_LABEL: &str = "Add all characters from block";

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    BlockSelect,
    CharSelect(&'static UnicodeBlock),
    SingleCharEntry,
    EditView,
    Saving,
    Terminated,
}

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Block,
    Char,
    Edit,
    Save,
    Cancel,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Block,
        MenuAction::Char,
        MenuAction::Edit,
        MenuAction::Save,
        MenuAction::Cancel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Block => "Add characters from a Unicode block",
            MenuAction::Char => "Add an individual character",
            MenuAction::Edit => "View/edit current charset",
            MenuAction::Save => "Save charset to a file",
            MenuAction::Cancel => "Quit without saving",
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user cancelled the size prompt; no charset was created.
    Aborted,
    /// The user quit without saving.
    Discarded,
    /// The charset was written to this path.
    Saved(PathBuf),
    /// Writing to this path failed; the user was told.
    SaveFailed(PathBuf),
}

/// Fatal session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Dialog(#[from] DialogError),
    #[error("internal error: {0}")]
    Charset(#[from] CharsetError),
}

/// Tunables that come from configuration and the command line.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Curated block shortlist, in display order.
    pub common_blocks: Vec<&'static UnicodeBlock>,
    /// Suggested destination file.
    pub default_output: PathBuf,
    /// Pre-filled answer for the size prompt.
    pub default_count: Option<usize>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            common_blocks: resolve_blocks(unicode::COMMON_BLOCK_IDS),
            default_output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            default_count: None,
        }
    }
}

/// Look up block ids, skipping (and logging) unknown ones.
pub fn resolve_blocks<S: AsRef<str>>(ids: &[S]) -> Vec<&'static UnicodeBlock> {
    ids.iter()
        .filter_map(|id| {
            let id = id.as_ref();
            let block = unicode::lookup(id);
            if block.is_none() {
                log::warn!("Ignoring unknown Unicode block id '{}'", id);
            }
            block
        })
        .collect()
}

/// Ask for the charset size and optional ASCII pre-load.
///
/// Returns `None` if the user cancels the size prompt.
pub fn setup<D: Dialog>(
    dialog: &mut D,
    default_count: Option<usize>,
) -> Result<Option<Charset>, DialogError> {
    let default = default_count.map(|n| n.to_string());
    let mut prompt = COUNT_PROMPT.to_string();
    let size = loop {
        let Some(answer) = dialog.ask_text("Character count", &prompt, default.as_deref())? else {
            log::info!("Size prompt cancelled, nothing to do");
            return Ok(None);
        };
        match parse_count(&answer) {
            Ok(size) => break size,
            Err(e) => {
                log::debug!("Rejected charset size '{}': {}", answer, e);
                prompt = format!(
                    "Your input could not be parsed as an integer. Try again.\n{}",
                    COUNT_PROMPT
                );
            }
        }
    };

    let mut charset = Charset::new(size);
    let include_ascii = dialog
        .ask_yes_no(
            "Add ASCII characters?",
            "Add ASCII characters to character set?",
        )?
        .unwrap_or(false);
    if include_ascii {
        let report = charset.insert_ascii();
        if let Some(warning) = ascii_warning(&report) {
            dialog.show_message("Warning", &warning)?;
        }
    }
    Ok(Some(charset))
}

/// Run setup and then the session loop.
pub fn run<D, U>(
    dialog: &mut D,
    db: &U,
    options: SessionOptions,
) -> Result<SessionOutcome, SessionError>
where
    D: Dialog,
    U: UnicodeDatabase,
{
    let Some(charset) = setup(dialog, options.default_count)? else {
        return Ok(SessionOutcome::Aborted);
    };
    Session::new(dialog, db, options, charset).run()
}

/// The menu loop over an owned charset.
pub struct Session<'a, D, U> {
    dialog: &'a mut D,
    db: &'a U,
    options: SessionOptions,
    charset: Charset,
    outcome: SessionOutcome,
}

impl<'a, D, U> Session<'a, D, U>
where
    D: Dialog,
    U: UnicodeDatabase,
{
    pub fn new(dialog: &'a mut D, db: &'a U, options: SessionOptions, charset: Charset) -> Self {
        Self {
            dialog,
            db,
            options,
            charset,
            outcome: SessionOutcome::Discarded,
        }
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Drive the state machine from the main menu until it terminates.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        let mut state = SessionState::MainMenu;
        while state != SessionState::Terminated {
            let next = self.step(state)?;
            log::debug!("Session state {:?} -> {:?}", state, next);
            state = next;
        }
        log::info!("Session ended: {:?}", self.outcome);
        Ok(self.outcome.clone())
    }

    /// Handle one state and return the next.
    pub fn step(&mut self, state: SessionState) -> Result<SessionState, SessionError> {
        match state {
            SessionState::MainMenu => self.main_menu(),
            SessionState::BlockSelect => self.block_select(),
            SessionState::CharSelect(block) => self.char_select(block),
            SessionState::SingleCharEntry => self.single_char_entry(),
            SessionState::EditView => self.edit_view(),
            SessionState::Saving => self.saving(),
            SessionState::Terminated => Ok(SessionState::Terminated),
        }
    }

    fn main_menu(&mut self) -> Result<SessionState, SessionError> {
        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.label().to_string()).collect();
        let prompt = format!(
            "{} entries left in character set.\nChoose an action:",
            self.charset.free_count()
        );
        let action = self
            .dialog
            .ask_single_choice("Main menu", &prompt, &labels)?
            .and_then(|i| MenuAction::ALL.get(i).copied())
            .unwrap_or(MenuAction::Cancel);

        Ok(match action {
            MenuAction::Block => SessionState::BlockSelect,
            MenuAction::Char => SessionState::SingleCharEntry,
            MenuAction::Edit => SessionState::EditView,
            MenuAction::Save => SessionState::Saving,
            MenuAction::Cancel => {
                self.outcome = SessionOutcome::Discarded;
                SessionState::Terminated
            }
        })
    }

    fn block_select(&mut self) -> Result<SessionState, SessionError> {
        const TITLE: &str = "Unicode block selection";
        const PROMPT: &str = "Pick a Unicode block to add characters from.";

        let mut labels: Vec<String> = self
            .options
            .common_blocks
            .iter()
            .map(|b| b.name.to_string())
            .collect();
        labels.push(OTHER_BLOCK_LABEL.to_string());

        let Some(choice) = self.dialog.ask_single_choice(TITLE, PROMPT, &labels)? else {
            return Ok(SessionState::MainMenu);
        };
        if let Some(&block) = self.options.common_blocks.get(choice) {
            return Ok(SessionState::CharSelect(block));
        }

        let all = unicode::blocks::all_blocks();
        let labels: Vec<String> = all.iter().map(|b| b.name.to_string()).collect();
        let block = self
            .dialog
            .ask_single_choice(TITLE, PROMPT, &labels)?
            .and_then(|i| all.get(i));
        Ok(match block {
            Some(block) => SessionState::CharSelect(block),
            None => SessionState::MainMenu,
        })
    }

    fn char_select(&mut self, block: &'static UnicodeBlock) -> Result<SessionState, SessionError> {
        let candidates = printable_candidates(block, self.db);
        if candidates.is_empty() {
            self.dialog.show_message(
                "Nothing to add",
                &format!("The {} block has no printable characters.", block.name),
            )?;
            return Ok(SessionState::MainMenu);
        }

        let mut labels = Vec::with_capacity(candidates.len() + 1);
        labels.push(ALL_CHARS_LABEL.to_string());
        labels.extend(candidates.iter().map(|c| describe(self.db, *c)));

        let Some(selected) = self.dialog.ask_multi_choice(
            "Add characters from Unicode block",
            "Choose characters to add.",
            &labels,
        )?
        else {
            return Ok(SessionState::MainMenu);
        };

        let to_add: Vec<char> = if selected.contains(&0) {
            candidates
        } else {
            selected
                .iter()
                .filter_map(|i| candidates.get(i.checked_sub(1)?).copied())
                .collect()
        };
        log::info!("Adding {} characters from {}", to_add.len(), block.name);

        let report = self.charset.insert(to_add, self.db);
        if let Some(warning) = insert_warning(&report, self.db) {
            self.dialog.show_message("Warning", &warning)?;
        }
        Ok(SessionState::MainMenu)
    }

    fn single_char_entry(&mut self) -> Result<SessionState, SessionError> {
        let c = loop {
            let Some(answer) = self
                .dialog
                .ask_text("Add single character", CHAR_PROMPT, None)?
            else {
                return Ok(SessionState::MainMenu);
            };
            match parse_char_input(&answer) {
                Ok(c) => break c,
                Err(e) => {
                    log::debug!("Rejected character input {:?}: {}", answer, e);
                    let text = if e.is_codepoint_error() {
                        "Sorry, I couldn't parse your Unicode codepoint as a hexadecimal number. \
                         Check what you typed and try again."
                    } else {
                        "Sorry, I couldn't parse your input as a Unicode character. \
                         You may have better luck writing it out as U+[hex]."
                    };
                    self.dialog.show_message("Error", text)?;
                }
            }
        };

        match unicode::block_of(c) {
            Some(block) => log::info!("Adding U+{:04X} from {}", c as u32, block.name),
            None => log::info!("Adding U+{:04X} from an unallocated range", c as u32),
        }
        let report = self.charset.insert([c], self.db);
        if let Some(warning) = insert_warning(&report, self.db) {
            self.dialog.show_message("Warning", &warning)?;
        } else if let Some(message) = placed_message(&report, self.db) {
            self.dialog.show_message("Character added", &message)?;
        }
        Ok(SessionState::MainMenu)
    }

    fn edit_view(&mut self) -> Result<SessionState, SessionError> {
        let entries: Vec<(usize, char)> = self.charset.occupied().collect();
        if entries.is_empty() {
            self.dialog.show_message(
                "No characters selected",
                "You haven't added any characters to your charset yet. Please add some first!",
            )?;
            return Ok(SessionState::MainMenu);
        }

        let labels: Vec<String> = entries
            .iter()
            .map(|(index, c)| format!("{:>5}  {}", index, describe(self.db, *c)))
            .collect();
        let Some(selected) = self.dialog.ask_multi_choice(
            "View/edit character set",
            "Select entries from the list to delete them:",
            &labels,
        )?
        else {
            return Ok(SessionState::MainMenu);
        };
        if selected.is_empty() {
            return Ok(SessionState::MainMenu);
        }

        let confirmed = self
            .dialog
            .ask_yes_no(
                "Confirm deletion",
                &format!("Delete these {} characters?", selected.len()),
            )?
            .unwrap_or(false);
        if confirmed {
            let slots = selected
                .iter()
                .filter_map(|i| entries.get(*i).map(|(slot, _)| *slot));
            self.charset.delete(slots)?;
        }
        Ok(SessionState::MainMenu)
    }

    fn saving(&mut self) -> Result<SessionState, SessionError> {
        let default = self.options.default_output.display().to_string();
        let Some(answer) = self.dialog.ask_text(
            "Write charset to file",
            "Destination file: ",
            Some(&default),
        )?
        else {
            return Ok(SessionState::MainMenu);
        };

        let answer = answer.trim();
        let path = if answer.is_empty() {
            self.options.default_output.clone()
        } else {
            PathBuf::from(answer)
        };

        match export::write_charset(&path, &self.charset, self.db) {
            Ok(()) => {
                self.dialog
                    .show_message("Done", &format!("Wrote charset to {}.", path.display()))?;
                self.outcome = SessionOutcome::Saved(path);
            }
            Err(e) => {
                log::error!("{}", e);
                self.dialog.show_message("Error", &format!("Could not save: {}", e))?;
                self.outcome = SessionOutcome::SaveFailed(path);
            }
        }
        Ok(SessionState::Terminated)
    }
}
