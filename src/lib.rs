/*
[INPUT]:  Public API exports for the activity-list crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod controller;
pub mod form;
pub mod record;
pub mod storage;
pub mod tui;

// Re-export main types for convenience
pub use controller::{ActivityListController, Overlay};
pub use form::ActivityForm;
pub use record::{ActivityRecord, Category};
pub use storage::ActivityStore;
