/*
[INPUT]:  ActivityListController and terminal key events
[OUTPUT]: Ratatui-based form, list, and dialog interface
[POS]:    TUI module root
[UPDATE]: When changing TUI layout, keybindings, or the run loop
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::run;
