//! Rendering of dialog frames.
//!
//! Pure drawing on a ratatui `Frame`; terminal lifecycle lives in `tui`.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::widgets::{ChoiceList, TextInput, YesNo};

/// Widest a dialog box gets, borders included.
const MAX_DIALOG_WIDTH: u16 = 100;

/// What is drawn under the prompt.
///
/// `'s` borrows the widget state, `'o` the option labels; the two are kept
/// apart so labels can outlive each per-frame borrow of the state.
pub enum Body<'s, 'o> {
    Text(&'s TextInput),
    YesNo(&'s YesNo),
    Choices(&'s mut ChoiceList, &'o [String]),
    Message,
}

impl Body<'_, '_> {
    fn preferred_height(&self) -> u16 {
        match self {
            Body::Text(_) | Body::YesNo(_) => 1,
            Body::Choices(_, labels) => labels.len().clamp(1, u16::MAX as usize) as u16,
            Body::Message => 0,
        }
    }
}

/// Center a `width` x `height` box in `container`, shrinking it to fit.
pub fn centered_rect(container: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(container.width);
    let height = height.min(container.height);
    Rect {
        x: container.x + (container.width - width) / 2,
        y: container.y + (container.height - height) / 2,
        width,
        height,
    }
}

/// Number of rows `text` occupies when wrapped at `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let rows: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}

/// Draw a complete dialog: box, prompt, body, and the optional hint bar.
pub fn render_dialog(
    frame: &mut Frame,
    title: &str,
    prompt: &str,
    body: Body<'_, '_>,
    hints: Option<&str>,
) {
    let area = frame.area();
    let main_area = if hints.is_some() {
        Rect {
            height: area.height.saturating_sub(1),
            ..area
        }
    } else {
        area
    };

    let width = main_area.width.saturating_sub(4).min(MAX_DIALOG_WIDTH);
    let prompt_height = wrapped_height(prompt, width.saturating_sub(2));
    let body_height = body.preferred_height();
    let gap = if body_height > 0 { 1 } else { 0 };
    let height = prompt_height
        .saturating_add(gap)
        .saturating_add(body_height)
        .saturating_add(2);
    let dialog_rect = centered_rect(main_area, width, height);

    frame.render_widget(Clear, dialog_rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(dialog_rect);
    frame.render_widget(block, dialog_rect);

    let chunks = Layout::vertical([
        Constraint::Length(prompt_height),
        Constraint::Length(gap),
        Constraint::Min(0),
    ])
    .split(inner);
    frame.render_widget(
        Paragraph::new(prompt).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let body_area = chunks[2];
    match body {
        Body::Text(input) => render_text_input(frame, input, body_area),
        Body::YesNo(yes_no) => render_yes_no(frame, yes_no, body_area),
        Body::Choices(list, labels) => render_choices(frame, list, labels, body_area),
        Body::Message => {}
    }

    if let Some(hints) = hints {
        render_hint_bar(frame, hints, area);
    }
}

fn render_text_input(frame: &mut Frame, input: &TextInput, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    // Keep the tail visible when the text is wider than the box.
    let room = area.width.saturating_sub(1) as usize;
    let total = input.value().chars().count();
    let shown: String = input.value().chars().skip(total.saturating_sub(room)).collect();
    let cursor_x = area.x + shown.chars().count() as u16;

    frame.render_widget(
        Paragraph::new(shown).style(Style::default().add_modifier(Modifier::UNDERLINED)),
        area,
    );
    frame.set_cursor_position((cursor_x, area.y));
}

fn render_yes_no(frame: &mut Frame, yes_no: &YesNo, area: Rect) {
    let selected = Style::default().fg(Color::Black).bg(Color::Cyan);
    let normal = Style::default();
    let (yes_style, no_style) = if yes_no.is_yes() {
        (selected, normal)
    } else {
        (normal, selected)
    };
    let line = Line::from(vec![
        Span::styled(" Yes ", yes_style),
        Span::raw("     "),
        Span::styled(" No ", no_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_choices(frame: &mut Frame, list: &mut ChoiceList, labels: &[String], area: Rect) {
    if labels.is_empty() {
        frame.render_widget(
            Paragraph::new("(nothing to choose from)").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let rows = area.height as usize;
    list.scroll_into_view(rows);
    let offset = list.offset;
    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(i, label)| {
            if list.is_multi() {
                let mark = if list.is_checked(i) { 'x' } else { ' ' };
                ListItem::new(format!("[{}] {}", mark, label))
            } else {
                ListItem::new(label.as_str())
            }
        })
        .collect();

    let widget = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(list.cursor() - offset));
    frame.render_stateful_widget(widget, area, &mut state);
}

/// Draw the hint text on the bottom line of `area`.
pub fn render_hint_bar(frame: &mut Frame, hints: &str, area: Rect) {
    let bar_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };
    let paragraph =
        Paragraph::new(hints).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(paragraph, bar_area);
}
