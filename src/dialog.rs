//! Dialog surface used by the session.
//!
//! Every call blocks until the user answers. `Ok(None)` means the user
//! cancelled; that is navigation, not an error. `Err` is reserved for the
//! surface itself failing (for example the terminal going away).

/// Errors raised by a dialog implementation.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Blocking prompts shown to the user.
///
/// Choice dialogs take the option labels and answer with indices into them.
pub trait Dialog {
    /// Free-form text, optionally pre-filled with `default`.
    fn ask_text(
        &mut self,
        title: &str,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, DialogError>;

    fn ask_yes_no(&mut self, title: &str, prompt: &str) -> Result<Option<bool>, DialogError>;

    /// Pick exactly one option.
    fn ask_single_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<usize>, DialogError>;

    /// Pick any number of options, in ascending index order. An empty
    /// selection is `Ok(Some(vec![]))`, distinct from cancelling.
    fn ask_multi_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<Vec<usize>>, DialogError>;

    fn show_message(&mut self, title: &str, text: &str) -> Result<(), DialogError>;
}
