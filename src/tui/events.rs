/*
[INPUT]:  Crossterm key events and the current focus/overlay state
[OUTPUT]: Controller operation calls and focus transitions
[POS]:    TUI key routing
[UPDATE]: When changing keybindings or dialog key handling
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::Overlay;
use crate::form::ACCESSIBILITY_STEP;

use super::app::{App, Focus};
use super::ui::dialog::DialogButton;

/// Handles one key event.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // An open dialog captures all input until dismissed.
    if app.controller.overlay().is_some() {
        return handle_dialog_key(app, key.code).await;
    }

    match key.code {
        KeyCode::Esc => true,
        KeyCode::Tab => {
            app.focus = app.focus.next();
            false
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            false
        }
        code => {
            handle_focused_key(app, code).await;
            false
        }
    }
}

async fn handle_focused_key(app: &mut App, code: KeyCode) {
    match app.focus {
        Focus::Activity => match code {
            KeyCode::Char(ch) => app.controller.form.activity.push(ch),
            KeyCode::Backspace => {
                app.controller.form.activity.pop();
            }
            _ => {}
        },
        Focus::Price => match code {
            // Rejected characters never reach the field and no error is
            // shown.
            KeyCode::Char(ch) => {
                app.controller.form.push_price_char(ch);
            }
            KeyCode::Backspace => app.controller.form.pop_price_char(),
            _ => {}
        },
        Focus::Category => match code {
            KeyCode::Up => app.controller.form.prev_category(),
            KeyCode::Down => app.controller.form.next_category(),
            _ => {}
        },
        Focus::Booking => {
            if code == KeyCode::Char(' ') {
                app.controller.form.toggle_booking();
            }
        }
        Focus::Accessibility => match code {
            KeyCode::Left => app.controller.form.adjust_accessibility(-ACCESSIBILITY_STEP),
            KeyCode::Right => app.controller.form.adjust_accessibility(ACCESSIBILITY_STEP),
            _ => {}
        },
        Focus::AddButton => {
            if code == KeyCode::Enter {
                match app.controller.submit().await {
                    Ok(()) => app.sync_selection(),
                    Err(err) => app.status_message = format!("save failed: {err}"),
                }
            }
        }
        Focus::List => match code {
            KeyCode::Up => app.move_selection(-1),
            KeyCode::Down => app.move_selection(1),
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(index) = app.selected_index() {
                    app.controller.request_delete(index);
                    // Destructive action: Cancel holds focus first.
                    app.dialog_focus = DialogButton::Cancel;
                }
            }
            _ => {}
        },
    }
}

async fn handle_dialog_key(app: &mut App, code: KeyCode) -> bool {
    match app.controller.overlay().cloned() {
        Some(Overlay::Alert { .. }) | Some(Overlay::Success) => {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                app.controller.dismiss_overlay();
            }
        }
        Some(Overlay::ConfirmDelete { .. }) => match code {
            KeyCode::Esc => app.controller.dismiss_overlay(),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                app.dialog_focus = app.dialog_focus.toggle();
            }
            KeyCode::Enter => match app.dialog_focus {
                DialogButton::Cancel => app.controller.dismiss_overlay(),
                DialogButton::Confirm => {
                    match app.controller.confirm_delete().await {
                        Ok(()) => app.sync_selection(),
                        Err(err) => app.status_message = format!("delete failed: {err}"),
                    }
                }
            },
            _ => {}
        },
        None => {}
    }
    false
}
