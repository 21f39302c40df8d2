use crate::{DEFAULT_PROJECT_STATUS, Project, ProjectId, TaskStatus};

use serde_json::json;

#[test]
fn test_project_minimal_body_uses_defaults() {
    let project: Project = serde_json::from_value(json!({
        "id": 1,
        "name": "Alpha",
        "description": "First project"
    }))
    .unwrap();

    assert_eq!(project.id, ProjectId::Number(1));
    assert_eq!(project.name, "Alpha");
    assert_eq!(project.description, "First project");
    assert!(project.tasks.is_empty());
    assert!(project.app.is_empty());
    assert_eq!(project.status, DEFAULT_PROJECT_STATUS);
    assert!(project.extra.is_empty());
}

#[test]
fn test_project_full_body() {
    let project: Project = serde_json::from_value(json!({
        "id": "b3c1",
        "name": "Camera",
        "description": "Camera app",
        "status": "active",
        "tasks": [
            {
                "id": "t1",
                "title": "Write capture module",
                "description": "Grab frames",
                "status": "done",
                "assigned_to": "developer",
                "dependencies": [],
                "created_at": "2024-05-01T10:15:30.123456",
                "updated_at": "2024-05-01T11:00:00"
            },
            {
                "id": "t2",
                "title": "Deploy",
                "description": "Ship it",
                "status": "todo",
                "dependencies": ["t1"]
            }
        ],
        "app": [
            { "id": "s1", "name": "api", "doc": "REST API", "type": "backend" }
        ]
    }))
    .unwrap();

    assert_eq!(project.id, ProjectId::Text("b3c1".to_string()));
    assert_eq!(project.tasks.len(), 2);
    assert_eq!(project.tasks[0].status, TaskStatus::Done);
    assert_eq!(project.tasks[0].assigned_to.as_deref(), Some("developer"));
    assert!(project.tasks[0].created_at.is_some());
    assert_eq!(project.tasks[1].dependencies, vec!["t1".to_string()]);
    assert!(project.tasks[1].created_at.is_none());
    assert_eq!(project.app[0].service_type, "backend");
    assert_eq!(project.app[0].status, "todo");

    let open: Vec<_> = project.open_tasks().map(|t| t.id.as_str()).collect();
    assert_eq!(open, vec!["t2"]);
}

#[test]
fn test_project_unknown_fields_are_kept() {
    let project: Project = serde_json::from_value(json!({
        "id": 7,
        "name": "Alpha",
        "description": "First project",
        "owner": "ops"
    }))
    .unwrap();

    assert_eq!(project.extra.get("owner"), Some(&json!("ops")));

    let back = serde_json::to_value(&project).unwrap();
    assert_eq!(back["owner"], "ops");
    assert_eq!(back["id"], 7);
}

#[test]
fn test_project_missing_name_is_rejected() {
    let result = serde_json::from_value::<Project>(json!({
        "id": 1,
        "description": "no name"
    }));
    assert!(result.is_err());
}

#[test]
fn test_project_id_display() {
    assert_eq!(ProjectId::from(42).to_string(), "42");
    assert_eq!(ProjectId::from("abc").to_string(), "abc");
}
