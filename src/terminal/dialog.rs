//! [`Dialog`] implementation on the terminal.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;

use super::rendering::{self, Body};
use super::status_bar::KeyHintBar;
use super::tui::Tui;
use super::widgets::{BodyKind, ChoiceList, KeyOutcome, MessageBox, TextInput, YesNo};
use crate::dialog::{Dialog, DialogError};

/// Full-screen dialogs drawn with ratatui.
pub struct TerminalDialog {
    tui: Tui,
    hints: KeyHintBar,
}

impl TerminalDialog {
    /// Take over the terminal.
    pub fn new(show_hints: bool) -> Result<Self, DialogError> {
        Ok(Self {
            tui: Tui::new()?,
            hints: KeyHintBar::with_visibility(show_hints),
        })
    }

    /// Give the terminal back. Also happens on drop.
    pub fn restore(&mut self) -> Result<(), DialogError> {
        self.tui.restore()?;
        Ok(())
    }

    /// Redraw and feed key presses to `on_key` until it settles.
    fn event_loop<'o, T, S>(
        &mut self,
        title: &str,
        prompt: &str,
        kind: BodyKind,
        state: &mut S,
        mut body: impl FnMut(&mut S) -> Body<'_, 'o>,
        mut on_key: impl FnMut(&mut S, KeyEvent) -> KeyOutcome<T>,
    ) -> Result<Option<T>, DialogError> {
        let hints = self.hints.format(kind);
        loop {
            draw_frame(
                self.tui.terminal(),
                title,
                prompt,
                hints.as_deref(),
                state,
                &mut body,
            )?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match on_key(state, key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit(value) => return Ok(Some(value)),
                KeyOutcome::Cancel => return Ok(None),
            }
        }
    }
}

/// Draw one dialog frame, building the body from the current widget state.
fn draw_frame<'o, B, S>(
    terminal: &mut Terminal<B>,
    title: &str,
    prompt: &str,
    hints: Option<&str>,
    state: &mut S,
    body: &mut impl FnMut(&mut S) -> Body<'_, 'o>,
) -> io::Result<()>
where
    B: Backend,
{
    terminal.draw(|frame| rendering::render_dialog(frame, title, prompt, body(state), hints))?;
    Ok(())
}

impl Dialog for TerminalDialog {
    fn ask_text(
        &mut self,
        title: &str,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, DialogError> {
        let mut input = TextInput::new(default);
        self.event_loop(
            title,
            prompt,
            BodyKind::Text,
            &mut input,
            |input| Body::Text(input),
            |input, key| input.handle_key(key),
        )
    }

    fn ask_yes_no(&mut self, title: &str, prompt: &str) -> Result<Option<bool>, DialogError> {
        let mut yes_no = YesNo::default();
        self.event_loop(
            title,
            prompt,
            BodyKind::YesNo,
            &mut yes_no,
            |yes_no| Body::YesNo(yes_no),
            |yes_no, key| yes_no.handle_key(key),
        )
    }

    fn ask_single_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<usize>, DialogError> {
        let mut list = ChoiceList::single(options.len());
        let picked = self.event_loop(
            title,
            prompt,
            BodyKind::SingleChoice,
            &mut list,
            |list| Body::Choices(list, options),
            |list, key| list.handle_key(key),
        )?;
        Ok(picked.and_then(|selection| selection.first().copied()))
    }

    fn ask_multi_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<Vec<usize>>, DialogError> {
        let mut list = ChoiceList::multi(options.len());
        self.event_loop(
            title,
            prompt,
            BodyKind::MultiChoice,
            &mut list,
            |list| Body::Choices(list, options),
            |list, key| list.handle_key(key),
        )
    }

    fn show_message(&mut self, title: &str, text: &str) -> Result<(), DialogError> {
        let mut message = MessageBox;
        self.event_loop(
            title,
            text,
            BodyKind::Message,
            &mut message,
            |_| Body::Message,
            |message, key| message.handle_key(key),
        )?;
        Ok(())
    }
}
