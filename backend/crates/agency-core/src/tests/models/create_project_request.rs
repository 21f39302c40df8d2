use crate::CreateProjectRequest;

use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_create_project_request_body() {
    let body = serde_json::to_value(CreateProjectRequest::new("Alpha", "First project")).unwrap();
    assert_eq!(body, json!({ "name": "Alpha", "description": "First project" }));
}

#[test]
fn test_empty_strings_pass_through() {
    let body = serde_json::to_value(CreateProjectRequest::new("", "")).unwrap();
    assert_eq!(body, json!({ "name": "", "description": "" }));
}

proptest! {
    #[test]
    fn given_any_name_and_description_when_serialized_then_body_has_exactly_both(
        name in ".*",
        description in ".*",
    ) {
        let body = serde_json::to_value(CreateProjectRequest::new(name.clone(), description.clone())).unwrap();
        prop_assert_eq!(body, json!({ "name": name, "description": description }));
    }
}
