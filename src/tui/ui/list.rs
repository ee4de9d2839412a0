/*
[INPUT]:  Activity records and the list selection state
[OUTPUT]: Activity list panel with selection highlight
[POS]:    TUI UI list panel renderer
[UPDATE]: When changing the row format or highlight behaviour
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::record::ActivityRecord;
use crate::tui::app::{App, Focus};
use crate::tui::runtime::{border_style, focused_style};

pub(in crate::tui) fn draw_activity_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let records = app.controller.records();
    let items: Vec<ListItem> = if records.is_empty() {
        vec![ListItem::new("No activities yet")]
    } else {
        records.iter().map(|record| ListItem::new(row_text(record))).collect()
    };

    let title = format!(" Activities ({}) ", records.len());
    let block_style = if app.focus == Focus::List {
        focused_style()
    } else {
        border_style()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(block_style)
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn row_text(record: &ActivityRecord) -> String {
    let price = if record.price.is_empty() {
        "0.00"
    } else {
        record.price.as_str()
    };
    let category = if record.category.is_empty() {
        "No Type"
    } else {
        record.category.as_str()
    };
    let booking = if record.booking_required { "yes" } else { "no" };
    format!(
        "{} - RM {} - {} | booking: {} | access: {:.1}",
        record.activity, price, category, booking, record.accessibility
    )
}
