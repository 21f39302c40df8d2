pub mod create_project_request;
pub mod processed_task;
pub mod project;
pub mod project_id;
pub mod resource_upload;
pub mod service;
pub mod task;
pub mod task_advance_result;
pub mod task_status;
