use crate::{CliClientResult, ClientError};

use agency_core::{CreateProjectRequest, Project, ResourceUpload, TaskAdvanceResult};

use std::fmt::Display;
use std::path::Path;

use log::{debug, error};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Multipart field name the backend reads uploads from
const UPLOAD_FIELD: &str = "file";
const FALLBACK_UPLOAD_NAME: &str = "upload";

/// HTTP client for the agency backend REST API.
///
/// Holds no state besides the base URL and a pooled connection handle, so a
/// clone can be moved into another task and used concurrently.
#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:7060")
    pub fn new(base_url: &str) -> Self {
        Self::with_http_client(base_url, ReqwestClient::new())
    }

    /// Create a client on top of a preconfigured reqwest client
    pub fn with_http_client(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    /// Send the request, reject non-2xx statuses, decode the body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                error_detail(status, &body),
            ));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// Create a new project
    pub async fn create_project(&self, name: &str, description: &str) -> CliClientResult<Project> {
        let req = self.create_project_request(name, description);
        logged("creating project", self.execute(req).await)
    }

    /// Create a new project, returning the backend body untouched
    pub async fn create_project_raw(&self, name: &str, description: &str) -> CliClientResult<Value> {
        let req = self.create_project_request(name, description);
        logged("creating project", self.execute(req).await)
    }

    fn create_project_request(&self, name: &str, description: &str) -> reqwest::RequestBuilder {
        let body = CreateProjectRequest::new(name, description);
        self.request(Method::POST, "/projects/").json(&body)
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// Ask the backend to assign and run the next task of a project
    pub async fn process_next_task(
        &self,
        project_id: impl Display,
    ) -> CliClientResult<TaskAdvanceResult> {
        let req = self.next_task_request(project_id);
        logged("processing next task", self.execute(req).await)
    }

    /// Same as [`Client::process_next_task`], returning the backend body untouched
    pub async fn process_next_task_raw(&self, project_id: impl Display) -> CliClientResult<Value> {
        let req = self.next_task_request(project_id);
        logged("processing next task", self.execute(req).await)
    }

    fn next_task_request(&self, project_id: impl Display) -> reqwest::RequestBuilder {
        self.request(
            Method::POST,
            &format!("/projects/{}/next-task", project_id),
        )
    }

    // =========================================================================
    // Resource Operations
    // =========================================================================

    /// Upload a file into a project's resource collection
    pub async fn upload_resource(
        &self,
        project_id: impl Display,
        file_name: &str,
        contents: Vec<u8>,
    ) -> CliClientResult<ResourceUpload> {
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let req = self
            .request(
                Method::POST,
                &format!("/projects/{}/ressources/", project_id),
            )
            .multipart(form);
        logged("uploading resource", self.execute(req).await)
    }

    /// Read a local file and upload it
    pub async fn upload_resource_file(
        &self,
        project_id: impl Display,
        path: &Path,
    ) -> CliClientResult<ResourceUpload> {
        let contents = match tokio::fs::read(path).await {
            Ok(contents) => contents,
            Err(e) => {
                let err = ClientError::from_io(path.to_path_buf(), e);
                return logged("uploading resource", Err(err));
            }
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_UPLOAD_NAME.to_string());

        self.upload_resource(project_id, &file_name, contents).await
    }
}

/// Emit the single diagnostic entry for a failed call and hand the result back unchanged
fn logged<T>(operation: &str, result: CliClientResult<T>) -> CliClientResult<T> {
    if let Err(ref e) = result {
        error!("Error {}: {}", operation, e);
    }
    result
}

/// Human-readable reason for a rejected request.
///
/// Prefers the `detail` field the backend puts in error bodies, then the raw
/// body text, then the status reason phrase.
pub(crate) fn error_detail(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body)
        && let Some(detail) = value.get("detail")
    {
        return match detail.as_str() {
            Some(s) => s.to_string(),
            None => detail.to_string(),
        };
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        text
    }
}
