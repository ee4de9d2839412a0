/*
[INPUT]:  TUI app state for UI components
[OUTPUT]: Panel render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding panels or renderers
*/

mod form;
mod list;

pub(in crate::tui) mod dialog;

pub(in crate::tui) use form::draw_form;
pub(in crate::tui) use list::draw_activity_list;
