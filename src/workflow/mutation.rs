use std::sync::Arc;
use crate::errors::AppResult;
use crate::models::{FormFields, UpsertRequest};
use crate::services::Registry;
use crate::sync::SyncController;

/// Pending delete awaiting the user's decision.
///
/// Only [`MutationWorkflow::request_delete`] creates one, and confirming or
/// declining consumes it, so a delete cannot go out without a prompt for
/// that exact id.
#[derive(Debug)]
#[must_use = "a delete request must be confirmed or declined"]
pub struct DeleteConfirmation {
    user_id: String,
}

impl DeleteConfirmation {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn prompt(&self) -> String {
        format!("Delete user {}?", self.user_id)
    }
}

/// Create, edit and delete, each followed by a full resynchronization.
pub struct MutationWorkflow<R: ?Sized> {
    controller: Arc<SyncController<R>>,
}

impl<R: Registry + ?Sized> MutationWorkflow<R> {
    pub fn new(controller: Arc<SyncController<R>>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &Arc<SyncController<R>> {
        &self.controller
    }

    pub async fn refresh(&self) -> AppResult<()> {
        self.controller.refresh().await.map(|_| ())
    }

    pub async fn submit_create(&self, fields: &FormFields) -> AppResult<()> {
        let request = fields.validate_for_create()?;
        tracing::info!("Creating user {}", request.user_id);
        self.upsert_and_resync(request).await
    }

    pub async fn submit_edit(&self, existing_id: &str, fields: &FormFields) -> AppResult<()> {
        let request = fields.validate_for_edit(existing_id)?;
        tracing::info!("Updating user {}", request.user_id);
        self.upsert_and_resync(request).await
    }

    pub fn request_delete(&self, user_id: &str) -> DeleteConfirmation {
        tracing::debug!("Delete requested for user {}", user_id);
        DeleteConfirmation { user_id: user_id.to_string() }
    }

    pub fn decline_delete(&self, confirmation: DeleteConfirmation) {
        tracing::warn!("Delete of user {} declined", confirmation.user_id);
    }

    /// Sends the delete. The confirmation is spent whatever the outcome; a
    /// failure is logged and returned, and no resync happens.
    pub async fn confirm_delete(&self, confirmation: DeleteConfirmation) -> AppResult<()> {
        let user_id = confirmation.user_id;
        tracing::info!("Deleting user {}", user_id);

        if let Err(e) = self.controller.registry().delete(&user_id).await {
            tracing::error!("Failed to delete user {}: {}", user_id, e);
            return Err(e.into());
        }

        self.resync().await;
        Ok(())
    }

    // The form's contents are never applied locally; the server is the
    // only source of truth.
    async fn upsert_and_resync(&self, request: UpsertRequest) -> AppResult<()> {
        self.controller.registry().upsert(&request).await?;
        tracing::info!("Saved user {}", request.user_id);
        self.resync().await;
        Ok(())
    }

    // A failed resync is already published as the controller's error state.
    async fn resync(&self) {
        if let Err(e) = self.controller.refresh().await {
            tracing::warn!("Mutation succeeded but refresh failed: {}", e);
        }
    }
}
