/*
[INPUT]:  Overlay state and dialog button focus
[OUTPUT]: Centered alert, success, and confirm dialog rendering
[POS]:    TUI UI dialog overlay renderer
[UPDATE]: When changing dialog titles, messages, or buttons
*/

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::controller::Overlay;

pub(in crate::tui) const SUCCESS_MESSAGE: &str = "Activity has been added successfully.";
pub(in crate::tui) const CONFIRM_DELETE_MESSAGE: &str =
    "Are you sure you want to delete this item? This action cannot be undone.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::tui) enum DialogButton {
    Cancel,
    Confirm,
}

impl DialogButton {
    pub(in crate::tui) fn toggle(self) -> Self {
        match self {
            DialogButton::Cancel => DialogButton::Confirm,
            DialogButton::Confirm => DialogButton::Cancel,
        }
    }
}

pub(in crate::tui) fn draw_dialog(
    frame: &mut Frame,
    area: Rect,
    overlay: &Overlay,
    focus: DialogButton,
) {
    let (title, message, border_color) = match overlay {
        Overlay::Alert { message } => (" Validation Error ", message.as_str(), Color::Red),
        Overlay::Success => (" Success! ", SUCCESS_MESSAGE, Color::Green),
        Overlay::ConfirmDelete { .. } => {
            (" Confirm Delete ", CONFIRM_DELETE_MESSAGE, Color::Red)
        }
    };

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, layout[0]);

    let buttons = match overlay {
        Overlay::Alert { .. } | Overlay::Success => {
            Line::from(Span::styled("[ OK ]", active_button_style()))
        }
        Overlay::ConfirmDelete { .. } => Line::from(vec![
            Span::styled("[ Cancel ]", button_style(focus == DialogButton::Cancel)),
            Span::raw("   "),
            Span::styled("[ Delete ]", button_style(focus == DialogButton::Confirm)),
        ]),
    };
    let button_row = Paragraph::new(buttons).alignment(Alignment::Center);
    frame.render_widget(button_row, layout[1]);
}

fn active_button_style() -> Style {
    Style::default()
        .add_modifier(Modifier::REVERSED)
        .add_modifier(Modifier::BOLD)
}

fn button_style(focused: bool) -> Style {
    if focused {
        active_button_style()
    } else {
        Style::default().fg(Color::Gray)
    }
}
