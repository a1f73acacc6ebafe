mod common;

use pathway_core::{Id, PlanDocument, PlannerBuilder, Position};
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
    "plan": [
        { "title": "Understand your triggers", "tasks": ["Keep a craving journal", "List your top three triggers"] },
        { "title": "Build support", "tasks": ["Tell a friend about your goal"] }
    ],
    "formData": { "addictions": "smoking", "struggles": "work stress" }
}"#;

#[tokio::test]
async fn test_walk_imported_plan_end_to_end() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    let document: PlanDocument = serde_json::from_str(DOCUMENT).expect("Invalid document");

    let plan = planner
        .import_plan(document, None)
        .await
        .expect("Failed to import plan");
    let id = Id { id: plan.id };

    let view = planner.current_task(&id).await.unwrap();
    assert_eq!(view.position, Position::new(0, 0));
    assert_eq!(view.progress.completed, 0);
    assert_eq!(view.progress.total, 3);
    assert!(view.is_first);

    let step = planner.advance_task(&id).await.unwrap();
    assert_eq!(step.view.position, Position::new(0, 1));
    assert_eq!(step.view.progress.completed, 1);

    let step = planner.advance_task(&id).await.unwrap();
    assert_eq!(step.view.position, Position::new(1, 0));
    assert_eq!(step.view.progress.completed, 2);
    assert!(step.view.is_last);
    assert!(step.to_string().contains("Completed!"));

    let step = planner.advance_task(&id).await.unwrap();
    assert!(!step.moved);
    assert_eq!(step.view.position, Position::new(1, 0));
}

#[tokio::test]
async fn test_position_survives_new_planner_instance() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("shared.db");
    let document: PlanDocument = serde_json::from_str(DOCUMENT).unwrap();

    let first = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let plan = first.import_plan(document, Some("Shared")).await.unwrap();
    first.advance_task(&Id { id: plan.id }).await.unwrap();

    let second = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let view = second.current_task(&Id { id: plan.id }).await.unwrap();

    assert_eq!(view.plan_title, "Shared");
    assert_eq!(view.task.as_deref(), Some("List your top three triggers"));
}

#[tokio::test]
async fn test_show_plan_display() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    let document: PlanDocument = serde_json::from_str(DOCUMENT).unwrap();
    let plan = planner.import_plan(document, None).await.unwrap();

    let output = planner
        .require_plan(&Id { id: plan.id })
        .await
        .unwrap()
        .to_string();

    assert!(output.contains("# 1. Your Personalized Plan"));
    assert!(output.contains("### Step 2: Build support"));
    assert!(output.contains("- ➤ Keep a craving journal"));
    assert!(output.contains("- Struggles: work stress"));
}
