//! End-to-end session flows driven by a scripted dialog.
//!
//! The scripted dialog answers prompts from a queue and records every
//! message it is shown, so a whole session can run without a terminal.

use std::collections::VecDeque;
use std::path::PathBuf;

use charset_builder::charset::{CharacterSlot, Charset};
use charset_builder::dialog::{Dialog, DialogError};
use charset_builder::session::{
    self, Session, SessionOptions, SessionOutcome, ALL_CHARS_LABEL, OTHER_BLOCK_LABEL,
};
use charset_builder::unicode::{describe, SystemDatabase};
use tempfile::TempDir;

/// One scripted answer.
#[derive(Debug)]
enum Answer {
    Text(Option<&'static str>),
    YesNo(Option<bool>),
    /// Single choice by exact label.
    Pick(&'static str),
    CancelPick,
    /// Multi choice: rows whose label ends with the character's description.
    Chars(Vec<char>),
    /// Multi choice by raw index.
    Rows(Vec<usize>),
    CancelMulti,
}

#[derive(Default)]
struct ScriptedDialog {
    answers: VecDeque<Answer>,
    messages: Vec<(String, String)>,
    prompts: Vec<String>,
    /// Option lists of every choice dialog, in order.
    choices: Vec<Vec<String>>,
}

impl ScriptedDialog {
    fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Default::default()
        }
    }

    fn next(&mut self, title: &str) -> Answer {
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for '{}'", title))
    }

    fn message_titles(&self) -> Vec<&str> {
        self.messages.iter().map(|(t, _)| t.as_str()).collect()
    }

    fn assert_done(&self) {
        assert!(self.answers.is_empty(), "unused answers: {:?}", self.answers);
    }
}

impl Dialog for ScriptedDialog {
    fn ask_text(
        &mut self,
        title: &str,
        prompt: &str,
        _default: Option<&str>,
    ) -> Result<Option<String>, DialogError> {
        self.prompts.push(prompt.to_string());
        match self.next(title) {
            Answer::Text(text) => Ok(text.map(str::to_string)),
            other => panic!("'{}' asked for text, script has {:?}", title, other),
        }
    }

    fn ask_yes_no(&mut self, title: &str, prompt: &str) -> Result<Option<bool>, DialogError> {
        self.prompts.push(prompt.to_string());
        match self.next(title) {
            Answer::YesNo(answer) => Ok(answer),
            other => panic!("'{}' asked yes/no, script has {:?}", title, other),
        }
    }

    fn ask_single_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<usize>, DialogError> {
        self.prompts.push(prompt.to_string());
        self.choices.push(options.to_vec());
        match self.next(title) {
            Answer::Pick(label) => {
                let index = options
                    .iter()
                    .position(|o| o == label)
                    .unwrap_or_else(|| panic!("'{}' has no option '{}'", title, label));
                Ok(Some(index))
            }
            Answer::CancelPick => Ok(None),
            other => panic!("'{}' asked single choice, script has {:?}", title, other),
        }
    }

    fn ask_multi_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<Vec<usize>>, DialogError> {
        self.prompts.push(prompt.to_string());
        self.choices.push(options.to_vec());
        match self.next(title) {
            Answer::Chars(chars) => Ok(Some(
                options
                    .iter()
                    .enumerate()
                    .filter(|(_, o)| chars.iter().any(|c| o.ends_with(&describe(&SystemDatabase, *c))))
                    .map(|(i, _)| i)
                    .collect(),
            )),
            Answer::Rows(rows) => Ok(Some(rows)),
            Answer::CancelMulti => Ok(None),
            other => panic!("'{}' asked multi choice, script has {:?}", title, other),
        }
    }

    fn show_message(&mut self, title: &str, text: &str) -> Result<(), DialogError> {
        self.messages.push((title.to_string(), text.to_string()));
        Ok(())
    }
}

const BLOCK: &str = "Add characters from a Unicode block";
const CHAR: &str = "Add an individual character";
const EDIT: &str = "View/edit current charset";
const SAVE: &str = "Save charset to a file";
const QUIT: &str = "Quit without saving";

fn run_script(answers: Vec<Answer>) -> (SessionOutcome, ScriptedDialog) {
    let mut dialog = ScriptedDialog::new(answers);
    let outcome = session::run(&mut dialog, &SystemDatabase, SessionOptions::default())
        .expect("session runs");
    dialog.assert_done();
    (outcome, dialog)
}

/// Run the menu loop on an existing charset and hand it back.
fn run_on(charset: Charset, answers: Vec<Answer>) -> (SessionOutcome, Charset, ScriptedDialog) {
    let mut dialog = ScriptedDialog::new(answers);
    let db = SystemDatabase;
    let mut session = Session::new(&mut dialog, &db, SessionOptions::default(), charset);
    let outcome = session.run().expect("session runs");
    let charset = session.charset().clone();
    drop(session);
    dialog.assert_done();
    (outcome, charset, dialog)
}

fn filled(size: usize, chars: &str) -> Charset {
    let mut cs = Charset::new(size);
    cs.insert(chars.chars(), &SystemDatabase);
    cs
}

// ==================== Setup ====================

#[test]
fn test_cancel_size_prompt_aborts() {
    let (outcome, dialog) = run_script(vec![Answer::Text(None)]);
    assert_eq!(outcome, SessionOutcome::Aborted);
    assert!(dialog.messages.is_empty());
}

#[test]
fn test_bad_size_reprompts() {
    let (outcome, dialog) = run_script(vec![
        Answer::Text(Some("lots")),
        Answer::Text(Some("-4")),
        Answer::Text(Some(" 3 ")),
        Answer::YesNo(Some(false)),
        Answer::Pick(QUIT),
    ]);
    assert_eq!(outcome, SessionOutcome::Discarded);
    assert!(!dialog.prompts[0].contains("could not be parsed"));
    assert!(dialog.prompts[1].starts_with("Your input could not be parsed as an integer."));
    assert!(dialog.prompts[2].starts_with("Your input could not be parsed as an integer."));
    assert!(dialog.prompts[4].starts_with("3 entries left in character set."));
}

#[test]
fn test_ascii_on_small_charset_warns() {
    let (outcome, dialog) = run_script(vec![
        Answer::Text(Some("100")),
        Answer::YesNo(Some(true)),
        Answer::Pick(QUIT),
    ]);
    assert_eq!(outcome, SessionOutcome::Discarded);
    assert_eq!(dialog.message_titles(), vec!["Warning"]);
    assert!(dialog.messages[0]
        .1
        .starts_with("27 printable ASCII characters didn't fit"));
    // 100 slots, 68 of them taken by ASCII
    assert!(dialog.prompts[2].starts_with("32 entries left"));
}

#[test]
fn test_cancelled_ascii_question_means_no() {
    let (_, dialog) = run_script(vec![
        Answer::Text(Some("256")),
        Answer::YesNo(None),
        Answer::Pick(QUIT),
    ]);
    assert!(dialog.prompts[2].starts_with("256 entries left"));
}

#[test]
fn test_cancel_main_menu_discards() {
    let (outcome, _) = run_script(vec![
        Answer::Text(Some("8")),
        Answer::YesNo(Some(false)),
        Answer::CancelPick,
    ]);
    assert_eq!(outcome, SessionOutcome::Discarded);
}

// ==================== Block flow ====================

#[test]
fn test_three_slot_scenario_through_block_menu() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.set");
    let path_str: &'static str = Box::leak(path.display().to_string().into_boxed_str());

    let (outcome, dialog) = run_script(vec![
        Answer::Text(Some("3")),
        Answer::YesNo(Some(false)),
        Answer::Pick(CHAR),
        Answer::Text(Some("A")),
        Answer::Pick(BLOCK),
        Answer::Pick(OTHER_BLOCK_LABEL),
        Answer::Pick("Basic Latin"),
        Answer::Chars(vec!['A', 'B']),
        Answer::Pick(BLOCK),
        Answer::Pick(OTHER_BLOCK_LABEL),
        Answer::Pick("Basic Latin"),
        Answer::Chars(vec!['C', 'D']),
        Answer::Pick(SAVE),
        Answer::Text(Some(path_str)),
    ]);

    assert_eq!(outcome, SessionOutcome::Saved(path.clone()));
    assert_eq!(
        dialog.message_titles(),
        vec!["Character added", "Warning", "Warning", "Done"]
    );
    assert!(dialog.messages[1]
        .1
        .starts_with("1 selected characters are already in your character set."));
    assert!(dialog.messages[1].1.contains("LATIN CAPITAL LETTER A"));
    assert!(dialog.messages[2]
        .1
        .starts_with("1 selected characters didn't fit in your character set."));
    assert!(dialog.messages[2].1.contains("LATIN CAPITAL LETTER D"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "U+0041\n# U+0041:\tLATIN CAPITAL LETTER A\n\
         U+0042\n# U+0042:\tLATIN CAPITAL LETTER B\n\
         U+0043\n# U+0043:\tLATIN CAPITAL LETTER C\n"
    );
}

#[test]
fn test_select_all_adds_whole_block() {
    let (_, charset, dialog) = run_on(
        Charset::new(200),
        vec![
            Answer::Pick(BLOCK),
            Answer::Pick("Box Drawing"),
            Answer::Rows(vec![0, 3]),
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(charset.occupied_count(), 128);
    assert_eq!(charset.get(0), Some(CharacterSlot::Occupied('\u{2500}')));
    assert_eq!(charset.get(127), Some(CharacterSlot::Occupied('\u{257F}')));
    assert!(dialog.messages.is_empty());
}

#[test]
fn test_character_list_starts_with_select_all() {
    let (_, charset, dialog) = run_on(
        Charset::new(4),
        vec![
            Answer::Pick(BLOCK),
            Answer::Pick("Arrows"),
            Answer::Rows(vec![]),
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(charset.occupied_count(), 0);
    assert_eq!(dialog.prompts[2], "Choose characters to add.");

    let shortlist = &dialog.choices[1];
    assert_eq!(shortlist.last().map(String::as_str), Some(OTHER_BLOCK_LABEL));

    let options = &dialog.choices[2];
    assert_eq!(options[0], ALL_CHARS_LABEL);
    assert_eq!(options[1], describe(&SystemDatabase, '\u{2190}'));
    assert_eq!(options[1], "\u{2190}    LEFTWARDS ARROW");
    assert_eq!(options.len(), 1 + 0x70);
}

#[test]
fn test_full_block_table_reaches_supplementary_planes() {
    let (_, charset, dialog) = run_on(
        Charset::new(8),
        vec![
            Answer::Pick(BLOCK),
            Answer::Pick(OTHER_BLOCK_LABEL),
            Answer::Pick("Chess Symbols"),
            Answer::Chars(vec!['\u{1FA00}']),
            Answer::Pick(QUIT),
        ],
    );
    assert!(dialog.choices[2].iter().any(|name| name == "Tags"));
    assert_eq!(charset.get(0), Some(CharacterSlot::Occupied('\u{1FA00}')));
}

#[test]
fn test_cancelling_block_selection_changes_nothing() {
    let before = filled(4, "xy");
    let (outcome, charset, dialog) = run_on(
        before.clone(),
        vec![
            Answer::Pick(BLOCK),
            Answer::CancelPick,
            Answer::Pick(BLOCK),
            Answer::Pick(OTHER_BLOCK_LABEL),
            Answer::CancelPick,
            Answer::Pick(BLOCK),
            Answer::Pick("Arrows"),
            Answer::CancelMulti,
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(outcome, SessionOutcome::Discarded);
    assert_eq!(charset, before);
    assert!(dialog.messages.is_empty());
}

#[test]
fn test_block_without_printable_characters() {
    let (_, charset, dialog) = run_on(
        Charset::new(4),
        vec![
            Answer::Pick(BLOCK),
            Answer::Pick(OTHER_BLOCK_LABEL),
            Answer::Pick("High Surrogates"),
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(charset.occupied_count(), 0);
    assert_eq!(dialog.message_titles(), vec!["Nothing to add"]);
}

// ==================== Single character flow ====================

#[test]
fn test_single_char_errors_then_success() {
    let (_, charset, dialog) = run_on(
        Charset::new(4),
        vec![
            Answer::Pick(CHAR),
            Answer::Text(Some("AB")),
            Answer::Text(Some("U+zz")),
            Answer::Text(Some("u+e9")),
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(charset.get(0), Some(CharacterSlot::Occupied('é')));
    assert_eq!(
        dialog.message_titles(),
        vec!["Error", "Error", "Character added"]
    );
    assert!(dialog.messages[0].1.contains("writing it out as U+[hex]"));
    assert!(dialog.messages[1].1.contains("hexadecimal number"));
    assert!(dialog.messages[2].1.contains("LATIN SMALL LETTER E WITH ACUTE"));
}

#[test]
fn test_single_char_duplicate_and_full() {
    let (_, charset, dialog) = run_on(
        filled(1, "q"),
        vec![
            Answer::Pick(CHAR),
            Answer::Text(Some("q")),
            Answer::Pick(CHAR),
            Answer::Text(Some("r")),
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(charset.occupied().collect::<Vec<_>>(), vec![(0, 'q')]);
    assert_eq!(dialog.message_titles(), vec!["Warning", "Warning"]);
    assert!(dialog.messages[0].1.contains("already in your character set"));
    assert!(dialog.messages[1].1.contains("didn't fit"));
}

#[test]
fn test_single_char_cancel_returns_to_menu() {
    let (outcome, charset, _) = run_on(
        Charset::new(2),
        vec![Answer::Pick(CHAR), Answer::Text(None), Answer::Pick(QUIT)],
    );
    assert_eq!(outcome, SessionOutcome::Discarded);
    assert_eq!(charset.occupied_count(), 0);
}

#[test]
fn test_single_non_printable_is_skipped_silently() {
    let (_, charset, dialog) = run_on(
        Charset::new(2),
        vec![Answer::Pick(CHAR), Answer::Text(Some("U+7")), Answer::Pick(QUIT)],
    );
    assert_eq!(charset.occupied_count(), 0);
    assert!(dialog.messages.is_empty());
}

// ==================== Edit flow ====================

#[test]
fn test_edit_empty_charset_shows_message() {
    let (_, _, dialog) = run_on(
        Charset::new(4),
        vec![Answer::Pick(EDIT), Answer::Pick(QUIT)],
    );
    assert_eq!(dialog.message_titles(), vec!["No characters selected"]);
}

#[test]
fn test_edit_delete_confirmed() {
    let (_, charset, dialog) = run_on(
        filled(4, "abc"),
        vec![
            Answer::Pick(EDIT),
            Answer::Chars(vec!['a', 'c']),
            Answer::YesNo(Some(true)),
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(charset.occupied().collect::<Vec<_>>(), vec![(1, 'b')]);
    assert_eq!(dialog.prompts[2], "Delete these 2 characters?");
}

#[test]
fn test_edit_empty_selection_skips_confirmation() {
    let mut cs = Charset::new(128);
    cs.insert_ascii();
    let (_, charset, dialog) = run_on(
        cs,
        vec![Answer::Pick(EDIT), Answer::Rows(vec![]), Answer::Pick(QUIT)],
    );
    assert_eq!(charset.occupied_count(), 95);
    assert!(dialog.prompts.iter().all(|p| !p.starts_with("Delete")));
}

#[test]
fn test_edit_delete_declined_or_cancelled() {
    let before = filled(4, "abc");
    let (_, charset, _) = run_on(
        before.clone(),
        vec![
            Answer::Pick(EDIT),
            Answer::Chars(vec!['b']),
            Answer::YesNo(Some(false)),
            Answer::Pick(EDIT),
            Answer::Chars(vec!['b']),
            Answer::YesNo(None),
            Answer::Pick(EDIT),
            Answer::CancelMulti,
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(charset, before);
}

#[test]
fn test_deleted_slot_is_refilled_first() {
    let (_, charset, _) = run_on(
        filled(3, "abc"),
        vec![
            Answer::Pick(EDIT),
            Answer::Chars(vec!['b']),
            Answer::YesNo(Some(true)),
            Answer::Pick(CHAR),
            Answer::Text(Some("z")),
            Answer::Pick(QUIT),
        ],
    );
    assert_eq!(
        charset.occupied().collect::<Vec<_>>(),
        vec![(0, 'a'), (1, 'z'), (2, 'c')]
    );
}

// ==================== Saving ====================

#[test]
fn test_save_cancel_returns_to_menu() {
    let (outcome, _, _) = run_on(
        filled(2, "a"),
        vec![Answer::Pick(SAVE), Answer::Text(None), Answer::Pick(QUIT)],
    );
    assert_eq!(outcome, SessionOutcome::Discarded);
}

#[test]
fn test_save_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.set");
    let path_str: &'static str = Box::leak(path.display().to_string().into_boxed_str());

    let (outcome, _, dialog) = run_on(
        filled(2, "a"),
        vec![Answer::Pick(SAVE), Answer::Text(Some(path_str))],
    );
    assert_eq!(outcome, SessionOutcome::SaveFailed(PathBuf::from(path_str)));
    assert_eq!(dialog.message_titles(), vec!["Error"]);
    assert!(dialog.messages[0].1.starts_with("Could not save:"));
    assert!(!path.exists());
}

#[test]
fn test_save_with_empty_answer_uses_default_path() {
    let dir = TempDir::new().unwrap();
    let default_output = dir.path().join("default.set");
    let options = SessionOptions {
        default_output: default_output.clone(),
        ..SessionOptions::default()
    };

    let mut dialog = ScriptedDialog::new(vec![Answer::Pick(SAVE), Answer::Text(Some("  "))]);
    let db = SystemDatabase;
    let outcome = Session::new(&mut dialog, &db, options, filled(1, "a"))
        .run()
        .unwrap();
    assert_eq!(outcome, SessionOutcome::Saved(default_output.clone()));
    assert_eq!(
        std::fs::read_to_string(default_output).unwrap(),
        "U+0061\n# U+0061:\tLATIN SMALL LETTER A\n"
    );
}
