/*
[INPUT]:  ActivityListController, terminal key events, tick interval
[OUTPUT]: TUI run loop, screen layout, and shared style helpers
[POS]:    TUI runtime loop
[UPDATE]: When changing the layout, tick timing, or input plumbing
*/

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::controller::ActivityListController;

use super::app::App;
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::dialog::draw_dialog;
use super::ui::{draw_activity_list, draw_form};

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run(controller: ActivityListController) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = App::new(controller);

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    if handle_key_event(&mut app, key).await {
                        should_quit = true;
                    }
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(4)])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[0]);

    draw_form(frame, content[0], app);
    draw_activity_list(frame, content[1], app);
    draw_footer(frame, layout[1], app);

    if let Some(overlay) = app.controller.overlay() {
        let dialog_area = centered_rect(area, 50, 35);
        draw_dialog(frame, dialog_area, overlay, app.dialog_focus);
    }
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Tab]", key_style),
        Span::raw(" Next field  "),
        Span::styled("[Shift+Tab]", key_style),
        Span::raw(" Previous  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Add/Confirm  "),
        Span::styled("[Esc]", key_style),
        Span::raw(" Quit"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Choose  "),
        Span::styled("[Left/Right]", key_style),
        Span::raw(" Slider  "),
        Span::styled("[Space]", key_style),
        Span::raw(" Toggle  "),
        Span::styled("[d/Del]", key_style),
        Span::raw(" Delete  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(super) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(super) fn focused_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn unfocused_style() -> Style {
    Style::default().fg(Color::Gray)
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
