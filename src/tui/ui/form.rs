/*
[INPUT]:  ActivityForm state and the current focus
[OUTPUT]: Form panel with labelled fields, checkbox, and slider
[POS]:    TUI UI form panel renderer
[UPDATE]: When form fields or their presentation change
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, Focus};
use crate::tui::runtime::{border_style, focused_style, unfocused_style};

pub(in crate::tui) fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.controller.form;
    let focus = app.focus;

    let mut content = vec![
        Line::from(format!(
            "Total activities: {}",
            app.controller.records().len()
        )),
        Line::from(""),
    ];

    content.push(text_field_line(
        "*Activity:       ",
        &form.activity,
        focus == Focus::Activity,
    ));
    content.push(Line::from(""));

    content.push(text_field_line(
        "*Price (RM):     ",
        &form.price,
        focus == Focus::Price,
    ));
    content.push(Line::from(""));

    let category_label = label_style(focus == Focus::Category);
    let category_value = match form.category {
        Some(category) => Span::raw(category.label()),
        None => Span::styled("Select an option", Style::default().fg(Color::DarkGray)),
    };
    content.push(Line::from(vec![
        Span::styled("*Type:           ", category_label),
        category_value,
    ]));
    content.push(Line::from(""));

    let booking_mark = if form.booking_required { "[x]" } else { "[ ]" };
    content.push(Line::from(vec![
        Span::styled("Booking Required ", label_style(focus == Focus::Booking)),
        Span::raw(booking_mark),
    ]));
    content.push(Line::from(""));

    content.push(Line::from(vec![
        Span::styled(
            "Accessibility    ",
            label_style(focus == Focus::Accessibility),
        ),
        Span::raw(slider_bar(form.accessibility)),
        Span::raw(format!(" {:.1}", form.accessibility)),
    ]));
    content.push(Line::from(""));

    let add_style = if focus == Focus::AddButton {
        focused_style().add_modifier(Modifier::REVERSED)
    } else {
        unfocused_style()
    };
    content.push(Line::from(Span::styled("[ Add ]", add_style)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(" Add Activity ");
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn text_field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let mut spans = vec![Span::styled(label, label_style(focused)), Span::raw(value)];
    if focused {
        spans.push(Span::styled(" █", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn label_style(focused: bool) -> Style {
    if focused {
        focused_style()
    } else {
        unfocused_style()
    }
}

fn slider_bar(value: f64) -> String {
    let filled = (value * 10.0).round() as usize;
    let mut bar = String::from("[");
    for i in 0..10 {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_bar_fills_proportionally() {
        assert_eq!(slider_bar(0.0), "[----------]");
        assert_eq!(slider_bar(0.5), "[#####-----]");
        assert_eq!(slider_bar(1.0), "[##########]");
    }
}
