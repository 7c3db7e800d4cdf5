//! Project calls: list, status change, archive, delete.
//!
//! Every mutation follows the same shape: claim the in-flight permit for
//! the project, send the request, check the response, then refetch the
//! project list so the caller always renders server state.

use metr_db::models::project::ProjectSummary;
use metr_db::models::statut::ProjectStatus;
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};
use crate::MetrClient;

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl MetrClient {
    /// Fetch the projects visible to `user_id` (owned or shared).
    pub async fn list_projects(&self, user_id: i64) -> ClientResult<Vec<ProjectSummary>> {
        let response = self
            .http
            .get(self.url("/projects"))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// Change a project's status, then return the refreshed project list.
    pub async fn change_status(
        &self,
        project_id: i64,
        statut: ProjectStatus,
        user_id: i64,
    ) -> ClientResult<Vec<ProjectSummary>> {
        let permit = self
            .in_flight
            .try_acquire(project_id)
            .ok_or(ClientError::Busy { project_id })?;

        let response = self
            .http
            .put(self.url(&format!("/projects/{project_id}")))
            .json(&serde_json::json!({ "statut": statut }))
            .send()
            .await?;
        check(response).await?;

        drop(permit);
        tracing::debug!(project_id, ?statut, "Status changed, refetching projects");
        self.list_projects(user_id).await
    }

    /// Archive a project. Shorthand for a status change to `Archive`.
    pub async fn archive_project(
        &self,
        project_id: i64,
        user_id: i64,
    ) -> ClientResult<Vec<ProjectSummary>> {
        self.change_status(project_id, ProjectStatus::Archive, user_id)
            .await
    }

    /// Delete a project and everything under it, then return the refreshed
    /// project list.
    pub async fn delete_project(
        &self,
        project_id: i64,
        user_id: i64,
    ) -> ClientResult<Vec<ProjectSummary>> {
        let permit = self
            .in_flight
            .try_acquire(project_id)
            .ok_or(ClientError::Busy { project_id })?;

        let response = self
            .http
            .delete(self.url(&format!("/projects/{project_id}")))
            .send()
            .await?;
        check(response).await?;

        drop(permit);
        tracing::debug!(project_id, "Project deleted, refetching projects");
        self.list_projects(user_id).await
    }
}

/// Turn a non-2xx response into [`ClientError::Api`], keeping the server's
/// `message` untouched.
async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: extract_message(&body),
    })
}

fn extract_message(body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| "Une erreur est survenue".to_string())
}
