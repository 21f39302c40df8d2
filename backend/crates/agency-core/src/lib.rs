pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::create_project_request::CreateProjectRequest;
pub use models::processed_task::ProcessedTask;
pub use models::project::{DEFAULT_PROJECT_STATUS, Project};
pub use models::project_id::ProjectId;
pub use models::resource_upload::ResourceUpload;
pub use models::service::Service;
pub use models::task::Task;
pub use models::task_advance_result::TaskAdvanceResult;
pub use models::task_status::TaskStatus;
