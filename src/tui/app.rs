/*
[INPUT]:  ActivityListController, list selection, and focus state
[OUTPUT]: App state helpers for TUI rendering and key handling
[POS]:    TUI app state
[UPDATE]: When adding focusable fields or selection behaviour
*/

use ratatui::widgets::ListState;

use crate::controller::ActivityListController;

use super::ui::dialog::DialogButton;

/// Which part of the screen receives keystrokes. Tab order follows the
/// variant order, wrapping at the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Activity,
    Price,
    Category,
    Booking,
    Accessibility,
    AddButton,
    List,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Activity,
        Focus::Price,
        Focus::Category,
        Focus::Booking,
        Focus::Accessibility,
        Focus::AddButton,
        Focus::List,
    ];

    pub(super) fn next(self) -> Focus {
        let idx = Self::ORDER.iter().position(|&f| f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub(super) fn prev(self) -> Focus {
        let idx = Self::ORDER.iter().position(|&f| f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub(super) struct App {
    pub(super) controller: ActivityListController,
    pub(super) focus: Focus,
    pub(super) list_state: ListState,
    pub(super) dialog_focus: DialogButton,
    pub(super) status_message: String,
}

impl App {
    pub(super) fn new(controller: ActivityListController) -> Self {
        let mut list_state = ListState::default();
        if !controller.records().is_empty() {
            list_state.select(Some(0));
        }
        Self {
            controller,
            focus: Focus::Activity,
            list_state,
            dialog_focus: DialogButton::Cancel,
            status_message: "Ready".to_string(),
        }
    }

    pub(super) fn selected_index(&self) -> Option<usize> {
        let idx = self.list_state.selected()?;
        (idx < self.controller.records().len()).then_some(idx)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.controller.records().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    /// Re-clamps the selection after the list length changed.
    pub(super) fn sync_selection(&mut self) {
        let len = self.controller.records().len();
        if len == 0 {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= len {
                self.list_state.select(Some(len - 1));
            }
        } else {
            self.list_state.select(Some(0));
        }
    }
}
