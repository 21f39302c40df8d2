use crate::{TaskAdvanceResult, TaskStatus};

use serde_json::json;

#[test]
fn test_processed_body() {
    let result: TaskAdvanceResult = serde_json::from_value(json!({
        "task": {
            "id": "t1",
            "title": "Write capture module",
            "description": "Grab frames",
            "status": "done",
            "assigned_to": "developer"
        },
        "agent": "developer",
        "result": { "files": ["camera.py"] }
    }))
    .unwrap();

    let processed = result.processed().unwrap();
    assert_eq!(processed.agent, "developer");
    assert_eq!(processed.task.status, TaskStatus::Done);
    assert_eq!(processed.result["files"][0], "camera.py");
    assert!(!result.is_idle());
}

#[test]
fn test_processed_body_without_result_is_null() {
    let result: TaskAdvanceResult = serde_json::from_value(json!({
        "task": {
            "id": "t1",
            "title": "x",
            "description": "y",
            "status": "in_progress"
        },
        "agent": "tester"
    }))
    .unwrap();

    assert!(result.processed().unwrap().result.is_null());
}

#[test]
fn test_no_tasks_available_body() {
    let result: TaskAdvanceResult =
        serde_json::from_value(json!({ "status": "no_tasks_available" })).unwrap();

    assert_eq!(result, TaskAdvanceResult::NoTasksAvailable);
    assert!(result.is_idle());
    assert!(result.processed().is_none());
}

#[test]
fn test_no_tasks_available_serializes_back() {
    let value = serde_json::to_value(TaskAdvanceResult::NoTasksAvailable).unwrap();
    assert_eq!(value, json!({ "status": "no_tasks_available" }));
}

#[test]
fn test_unknown_status_is_rejected() {
    let result = serde_json::from_value::<TaskAdvanceResult>(json!({ "status": "busy" }));
    assert!(result.is_err());
}

#[test]
fn test_unrelated_body_is_rejected() {
    let result = serde_json::from_value::<TaskAdvanceResult>(json!([1, 2, 3]));
    assert!(result.is_err());
}
