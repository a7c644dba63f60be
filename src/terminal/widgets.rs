//! Key handling for the dialog bodies.
//!
//! Each body owns its own input state and turns key presses into a
//! [`KeyOutcome`]. Rendering lives in `rendering`; nothing here touches the
//! terminal, so these types are tested with synthetic key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of feeding one key press to a dialog body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome<T> {
    /// Keep the dialog open.
    Continue,
    /// The user answered.
    Submit(T),
    /// The user backed out.
    Cancel,
}

/// Which key hints apply to a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Text,
    YesNo,
    SingleChoice,
    MultiChoice,
    Message,
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Single-line text entry.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn new(default: Option<&str>) -> Self {
        Self {
            value: default.unwrap_or_default().to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome<String> {
        if is_interrupt(&key) {
            return KeyOutcome::Cancel;
        }
        match key.code {
            KeyCode::Enter => KeyOutcome::Submit(self.value.clone()),
            KeyCode::Esc => KeyOutcome::Cancel,
            KeyCode::Backspace => {
                self.value.pop();
                KeyOutcome::Continue
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                KeyOutcome::Continue
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(c);
                KeyOutcome::Continue
            }
            _ => KeyOutcome::Continue,
        }
    }
}

/// Two-button yes/no question. Starts on "Yes".
#[derive(Debug, Clone)]
pub struct YesNo {
    yes: bool,
}

impl Default for YesNo {
    fn default() -> Self {
        Self { yes: true }
    }
}

impl YesNo {
    pub fn is_yes(&self) -> bool {
        self.yes
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome<bool> {
        if is_interrupt(&key) {
            return KeyOutcome::Cancel;
        }
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.yes = !self.yes;
                KeyOutcome::Continue
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => KeyOutcome::Submit(true),
            KeyCode::Char('n') | KeyCode::Char('N') => KeyOutcome::Submit(false),
            KeyCode::Enter => KeyOutcome::Submit(self.yes),
            KeyCode::Esc => KeyOutcome::Cancel,
            _ => KeyOutcome::Continue,
        }
    }
}

/// Scrollable list with a cursor, optionally with a checkbox per row.
#[derive(Debug, Clone)]
pub struct ChoiceList {
    len: usize,
    cursor: usize,
    /// First visible row; kept in sync with the cursor during rendering.
    pub(crate) offset: usize,
    /// Rows visible at the last render; drives PageUp/PageDown.
    pub(crate) page: usize,
    /// `Some` for multi-select lists.
    checked: Option<Vec<bool>>,
}

impl ChoiceList {
    pub fn single(len: usize) -> Self {
        Self {
            len,
            cursor: 0,
            offset: 0,
            page: 10,
            checked: None,
        }
    }

    pub fn multi(len: usize) -> Self {
        Self {
            checked: Some(vec![false; len]),
            ..Self::single(len)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_multi(&self) -> bool {
        self.checked.is_some()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked
            .as_ref()
            .and_then(|c| c.get(index).copied())
            .unwrap_or(false)
    }

    /// Checked rows, ascending.
    pub fn selection(&self) -> Vec<usize> {
        match &self.checked {
            Some(checked) => checked
                .iter()
                .enumerate()
                .filter_map(|(i, on)| on.then_some(i))
                .collect(),
            None => vec![self.cursor],
        }
    }

    fn move_to(&mut self, index: usize) {
        self.cursor = index.min(self.len.saturating_sub(1));
    }

    /// Adjust `offset` so the cursor is inside a window of `height` rows.
    pub(crate) fn scroll_into_view(&mut self, height: usize) {
        self.page = height.max(1);
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.page {
            self.offset = self.cursor + 1 - self.page;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome<Vec<usize>> {
        if is_interrupt(&key) {
            return KeyOutcome::Cancel;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_to(self.cursor.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.move_to(self.cursor + 1),
            KeyCode::PageUp => self.move_to(self.cursor.saturating_sub(self.page)),
            KeyCode::PageDown => self.move_to(self.cursor + self.page),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.len),
            KeyCode::Char(' ') => {
                let cursor = self.cursor;
                if let Some(on) = self.checked.as_mut().and_then(|c| c.get_mut(cursor)) {
                    *on = !*on;
                }
            }
            KeyCode::Enter => {
                if self.checked.is_none() && self.is_empty() {
                    return KeyOutcome::Cancel;
                }
                return KeyOutcome::Submit(self.selection());
            }
            KeyCode::Esc => return KeyOutcome::Cancel,
            _ => {}
        }
        KeyOutcome::Continue
    }
}

/// Dismiss-only message.
#[derive(Debug, Clone, Default)]
pub struct MessageBox;

impl MessageBox {
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => KeyOutcome::Submit(()),
            _ if is_interrupt(&key) => KeyOutcome::Submit(()),
            _ => KeyOutcome::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_text_input_typing_and_submit() {
        let mut input = TextInput::new(None);
        for c in "U+41".chars() {
            assert_eq!(input.handle_key(key(KeyCode::Char(c))), KeyOutcome::Continue);
        }
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "U+4");
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            KeyOutcome::Submit("U+4".to_string())
        );
    }

    #[test]
    fn test_text_input_default_and_clear() {
        let mut input = TextInput::new(Some("char.set"));
        assert_eq!(input.value(), "char.set");
        input.handle_key(ctrl('u'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_text_input_cancel() {
        let mut input = TextInput::new(Some("x"));
        assert_eq!(input.handle_key(key(KeyCode::Esc)), KeyOutcome::Cancel);
        assert_eq!(input.handle_key(ctrl('c')), KeyOutcome::Cancel);
    }

    #[test]
    fn test_yes_no_toggle() {
        let mut yn = YesNo::default();
        assert!(yn.is_yes());
        yn.handle_key(key(KeyCode::Right));
        assert!(!yn.is_yes());
        assert_eq!(yn.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(false));
        assert_eq!(yn.handle_key(key(KeyCode::Char('y'))), KeyOutcome::Submit(true));
        assert_eq!(yn.handle_key(key(KeyCode::Esc)), KeyOutcome::Cancel);
    }

    #[test]
    fn test_single_choice_navigation() {
        let mut list = ChoiceList::single(5);
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Up));
        assert_eq!(list.cursor(), 1);
        list.handle_key(key(KeyCode::End));
        assert_eq!(list.cursor(), 4);
        list.handle_key(key(KeyCode::Down));
        assert_eq!(list.cursor(), 4);
        assert_eq!(list.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(vec![4]));
    }

    #[test]
    fn test_single_choice_empty_list_cancels() {
        let mut list = ChoiceList::single(0);
        assert_eq!(list.handle_key(key(KeyCode::Enter)), KeyOutcome::Cancel);
    }

    #[test]
    fn test_multi_choice_toggle() {
        let mut list = ChoiceList::multi(4);
        list.handle_key(key(KeyCode::Char(' ')));
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Char(' ')));
        list.handle_key(key(KeyCode::Up));
        list.handle_key(key(KeyCode::Up));
        list.handle_key(key(KeyCode::Char(' ')));
        assert!(!list.is_checked(0));
        assert!(list.is_checked(2));
        assert_eq!(list.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(vec![2]));
    }

    #[test]
    fn test_multi_choice_empty_selection_is_not_cancel() {
        let mut list = ChoiceList::multi(3);
        assert_eq!(list.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(vec![]));
    }

    #[test]
    fn test_paging_and_scroll() {
        let mut list = ChoiceList::single(100);
        list.scroll_into_view(10);
        list.handle_key(key(KeyCode::PageDown));
        assert_eq!(list.cursor(), 10);
        list.scroll_into_view(10);
        assert_eq!(list.offset, 1);
        list.handle_key(key(KeyCode::Home));
        list.scroll_into_view(10);
        assert_eq!(list.offset, 0);
    }

    #[test]
    fn test_message_dismiss() {
        let mut msg = MessageBox;
        assert_eq!(msg.handle_key(key(KeyCode::Char('x'))), KeyOutcome::Continue);
        assert_eq!(msg.handle_key(key(KeyCode::Enter)), KeyOutcome::Submit(()));
    }
}
