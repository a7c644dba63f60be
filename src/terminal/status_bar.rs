//! Key hint bar shown on the bottom line of the screen.

use super::widgets::BodyKind;

/// Bottom-line hints for the keys the active dialog understands.
#[derive(Debug, Clone)]
pub struct KeyHintBar {
    /// Whether the hint bar is drawn
    pub visible: bool,
}

impl KeyHintBar {
    pub fn with_visibility(visible: bool) -> Self {
        Self { visible }
    }

    /// Hint text for `kind`, or `None` when hidden.
    pub fn format(&self, kind: BodyKind) -> Option<String> {
        if !self.visible {
            return None;
        }
        let keys = match kind {
            BodyKind::Text => "Enter: accept | Backspace: delete | Ctrl+U: clear | Esc: cancel",
            BodyKind::YesNo => "y/n: answer | ←/→: switch | Enter: accept | Esc: cancel",
            BodyKind::SingleChoice => "↑/↓ PgUp/PgDn: move | Enter: choose | Esc: cancel",
            BodyKind::MultiChoice => {
                "↑/↓ PgUp/PgDn: move | Space: toggle | Enter: confirm | Esc: cancel"
            }
            BodyKind::Message => "Enter: OK",
        };
        Some(format!(" {} ", keys))
    }
}
