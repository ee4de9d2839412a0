/*
[INPUT]:  Activity list controller and file-backed store
[OUTPUT]: End-to-end create/delete/reload verification
[POS]:    Integration test layer - persistence across sessions
[UPDATE]: When adding new end-to-end scenarios
*/

use activity_list::{ActivityListController, ActivityStore, Category, Overlay};
use tempfile::TempDir;

async fn controller_in(dir: &TempDir) -> ActivityListController {
    ActivityListController::load(ActivityStore::in_dir(dir.path())).await
}

fn fill_form(controller: &mut ActivityListController, activity: &str, price: &str) {
    controller.form.activity = activity.to_string();
    assert!(controller.form.set_price(price));
    controller.form.category = Some(Category::Recreational);
}

/// Records created in one session hydrate unchanged in the next.
#[tokio::test]
async fn records_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut controller = controller_in(&dir).await;
        fill_form(&mut controller, "Run", "5.5");
        controller.form.booking_required = true;
        controller.form.accessibility = 0.7;
        controller.submit().await.unwrap();
        controller.dismiss_overlay();

        fill_form(&mut controller, "Swim", "12.34");
        controller.submit().await.unwrap();
    }

    let controller = controller_in(&dir).await;
    assert_eq!(controller.records().len(), 2);

    let first = &controller.records()[0];
    assert_eq!(first.activity, "Run");
    assert_eq!(first.price, "5.5");
    assert_eq!(first.category, "Recreational");
    assert!(first.booking_required);
    assert_eq!(first.accessibility, 0.7);

    assert_eq!(controller.records()[1].activity, "Swim");
    // Hydration starts without any dialog open.
    assert!(controller.overlay().is_none());
}

/// Deleting in one session is durable; the remaining order is preserved.
#[tokio::test]
async fn deletions_are_durable() {
    let dir = TempDir::new().unwrap();

    {
        let mut controller = controller_in(&dir).await;
        for name in ["A", "B", "C"] {
            fill_form(&mut controller, name, "1");
            controller.submit().await.unwrap();
            controller.dismiss_overlay();
        }

        controller.request_delete(0);
        assert!(matches!(
            controller.overlay(),
            Some(Overlay::ConfirmDelete { index: 0 })
        ));
        controller.confirm_delete().await.unwrap();
    }

    let controller = controller_in(&dir).await;
    let names: Vec<&str> = controller
        .records()
        .iter()
        .map(|r| r.activity.as_str())
        .collect();
    assert_eq!(names, vec!["B", "C"]);
}

/// A failed submit leaves the stored file untouched.
#[tokio::test]
async fn failed_validation_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let mut controller = controller_in(&dir).await;
    controller.form.activity = "Incomplete".to_string();
    controller.submit().await.unwrap();
    assert!(matches!(controller.overlay(), Some(Overlay::Alert { .. })));

    // No list mutation happened, so no file was created either.
    assert!(!ActivityStore::in_dir(dir.path()).path().exists());
}
