mod create_project_request;
mod project;
mod task_advance_result;
