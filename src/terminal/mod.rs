//! Terminal dialog surface: TUI lifecycle, widgets, rendering and key hints.

mod dialog;
mod raw_mode;
mod rendering;
mod status_bar;
mod tui;
mod widgets;

pub use dialog::TerminalDialog;
pub use rendering::{centered_rect, render_dialog, wrapped_height, Body};
pub use status_bar::KeyHintBar;
pub use tui::Tui;
pub use widgets::{BodyKind, ChoiceList, KeyOutcome, MessageBox, TextInput, YesNo};
