/*
[INPUT]:  Form submissions, delete requests, and dialog acknowledgements
[OUTPUT]: ActivityListController owning the list, form, and overlay state
[POS]:    Application core - list state machine with persistence mirroring
[UPDATE]: When changing submit/delete semantics or overlay transitions
*/

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::form::ActivityForm;
use crate::record::ActivityRecord;
use crate::storage::ActivityStore;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// The single dialog overlay. Holding at most one variant makes two
/// simultaneously open dialogs unrepresentable; the pending delete index
/// lives inside `ConfirmDelete`, so clearing the overlay also clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Validation failure with a user-facing message.
    Alert { message: String },
    /// A record was appended.
    Success,
    /// Deletion of `index` awaits confirmation.
    ConfirmDelete { index: usize },
}

/// Owns the activity list, the transient form state, and the overlay flag.
/// Every list mutation is mirrored to the store before the operation
/// returns; hydration happens once at construction and never writes back.
pub struct ActivityListController {
    store: ActivityStore,
    records: Vec<ActivityRecord>,
    pub form: ActivityForm,
    overlay: Option<Overlay>,
}

impl ActivityListController {
    /// Hydrates the list from the store. An absent file starts an empty
    /// list; a malformed file is logged and treated the same way rather
    /// than refusing to start.
    pub async fn load(store: ActivityStore) -> Self {
        let records = match store.load().await {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    path = %store.path().display(),
                    error = %err,
                    "stored activity list unreadable; starting empty"
                );
                Vec::new()
            }
        };
        Self {
            store,
            records,
            form: ActivityForm::new(),
            overlay: None,
        }
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Validates the form and appends a record. On a missing required field
    /// the alert overlay opens and nothing else changes; otherwise the
    /// record is appended and persisted, the form resets to defaults, and
    /// the success overlay opens.
    pub async fn submit(&mut self) -> Result<()> {
        let Some(record) = self.form.record() else {
            self.overlay = Some(Overlay::Alert {
                message: REQUIRED_FIELDS_MESSAGE.to_string(),
            });
            return Ok(());
        };

        info!(activity = %record.activity, category = %record.category, "activity added");
        self.records.push(record);
        self.persist().await?;
        self.form.reset();
        self.overlay = Some(Overlay::Success);
        Ok(())
    }

    /// Marks `index` as pending deletion and opens the confirm dialog. The
    /// list is not touched. Ignored when a dialog is already open or the
    /// index is out of range.
    pub fn request_delete(&mut self, index: usize) {
        if self.overlay.is_some() || index >= self.records.len() {
            return;
        }
        self.overlay = Some(Overlay::ConfirmDelete { index });
    }

    /// Removes the pending index and persists. A no-op unless the confirm
    /// dialog is open.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let index = match self.overlay.take() {
            Some(Overlay::ConfirmDelete { index }) => index,
            other => {
                self.overlay = other;
                return Ok(());
            }
        };

        if index < self.records.len() {
            let removed = self.records.remove(index);
            info!(activity = %removed.activity, index, "activity deleted");
            self.persist().await?;
        }
        Ok(())
    }

    /// Closes whichever dialog is open. Covers cancel-delete as well as
    /// alert/success acknowledgement; no other state changes.
    pub fn dismiss_overlay(&mut self) {
        self.overlay = None;
    }

    async fn persist(&self) -> Result<()> {
        self.store
            .save(&self.records)
            .await
            .context("persist activity list")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;
    use tempfile::TempDir;

    async fn controller_in(dir: &TempDir) -> ActivityListController {
        ActivityListController::load(ActivityStore::in_dir(dir.path())).await
    }

    fn fill_form(controller: &mut ActivityListController) {
        controller.form.activity = "Run".to_string();
        assert!(controller.form.set_price("5.5"));
        controller.form.category = Some(Category::Recreational);
        controller.form.booking_required = true;
        controller.form.accessibility = 0.7;
    }

    #[tokio::test]
    async fn submit_with_missing_fields_opens_alert_and_keeps_state() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller_in(&dir).await;
        controller.form.activity = "Run".to_string();
        // price and category still empty

        controller.submit().await.unwrap();

        assert!(controller.records().is_empty());
        assert_eq!(
            controller.overlay(),
            Some(&Overlay::Alert {
                message: REQUIRED_FIELDS_MESSAGE.to_string()
            })
        );
        // Fields are not reset on a failed submit.
        assert_eq!(controller.form.activity, "Run");
    }

    #[tokio::test]
    async fn submit_appends_resets_and_opens_success() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller_in(&dir).await;
        fill_form(&mut controller);

        controller.submit().await.unwrap();

        assert_eq!(controller.records().len(), 1);
        let record = &controller.records()[0];
        assert_eq!(record.activity, "Run");
        assert_eq!(record.price, "5.5");
        assert_eq!(record.category, "Recreational");
        assert!(record.booking_required);
        assert_eq!(record.accessibility, 0.7);

        assert_eq!(controller.form, ActivityForm::new());
        assert_eq!(controller.overlay(), Some(&Overlay::Success));
    }

    #[tokio::test]
    async fn submitted_record_uses_the_wire_field_names() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller_in(&dir).await;
        fill_form(&mut controller);
        controller.submit().await.unwrap();

        let stored = std::fs::read_to_string(
            ActivityStore::in_dir(dir.path()).path(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(value[0]["activity"], "Run");
        assert_eq!(value[0]["price"], "5.5");
        assert_eq!(value[0]["selected"], "Recreational");
        assert_eq!(value[0]["isChecked"], true);
        assert_eq!(value[0]["value"], 0.7);
    }

    #[tokio::test]
    async fn duplicate_entries_are_allowed() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller_in(&dir).await;

        for _ in 0..2 {
            fill_form(&mut controller);
            controller.submit().await.unwrap();
            controller.dismiss_overlay();
        }

        assert_eq!(controller.records().len(), 2);
        assert_eq!(controller.records()[0], controller.records()[1]);
    }

    #[tokio::test]
    async fn request_then_confirm_removes_exactly_that_index() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller_in(&dir).await;

        for name in ["First", "Second", "Third"] {
            fill_form(&mut controller);
            controller.form.activity = name.to_string();
            controller.submit().await.unwrap();
            controller.dismiss_overlay();
        }

        controller.request_delete(1);
        assert_eq!(
            controller.overlay(),
            Some(&Overlay::ConfirmDelete { index: 1 })
        );
        assert_eq!(controller.records().len(), 3);

        controller.confirm_delete().await.unwrap();
        assert!(controller.overlay().is_none());
        let names: Vec<&str> = controller
            .records()
            .iter()
            .map(|r| r.activity.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Third"]);
    }

    #[tokio::test]
    async fn confirm_without_pending_delete_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller_in(&dir).await;
        fill_form(&mut controller);
        controller.submit().await.unwrap();

        // Success overlay is open, not a confirm dialog.
        controller.confirm_delete().await.unwrap();
        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.overlay(), Some(&Overlay::Success));

        controller.dismiss_overlay();
        controller.confirm_delete().await.unwrap();
        assert_eq!(controller.records().len(), 1);
    }

    #[tokio::test]
    async fn cancel_delete_keeps_the_list() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller_in(&dir).await;
        fill_form(&mut controller);
        controller.submit().await.unwrap();
        controller.dismiss_overlay();

        controller.request_delete(0);
        controller.dismiss_overlay();

        assert!(controller.overlay().is_none());
        assert_eq!(controller.records().len(), 1);
    }

    #[tokio::test]
    async fn request_delete_ignores_out_of_range_and_open_dialogs() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller_in(&dir).await;
        fill_form(&mut controller);
        controller.submit().await.unwrap();

        // Success overlay is still open; the request must not replace it.
        controller.request_delete(0);
        assert_eq!(controller.overlay(), Some(&Overlay::Success));

        controller.dismiss_overlay();
        controller.request_delete(5);
        assert!(controller.overlay().is_none());
    }

    #[tokio::test]
    async fn corrupt_store_hydrates_empty_without_writing_back() {
        let dir = TempDir::new().unwrap();
        let store = ActivityStore::in_dir(dir.path());
        std::fs::write(store.path(), "{ not json").unwrap();

        let controller = ActivityListController::load(store).await;
        assert!(controller.records().is_empty());

        // Hydration must not overwrite the file.
        let content = std::fs::read_to_string(dir.path().join("activities.json")).unwrap();
        assert_eq!(content, "{ not json");
    }
}
