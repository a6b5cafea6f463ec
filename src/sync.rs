//! Preference synchronization against the portal API.
//!
//! ARCHITECTURE
//! ============
//! `submit` is the only path from a built patch to committed local state:
//! send the patch, and on acknowledgment replace the store's document with
//! the server's full returned copy. The client never merges locally and
//! never commits optimistically, so a failed submit leaves the store exactly
//! as it was. Failures become a user-visible notification and a returned
//! error; nothing is retried automatically — resubmission takes a new user
//! action.
//!
//! Submits are independent, with no client-side locking. The server merges
//! per section, so an older in-flight response cannot clobber sections it
//! never touched.

use std::sync::Arc;

use crate::api::PreferencesApi;
use crate::error::SyncError;
use crate::model::{PatchDocument, PreferenceDocument};
use crate::notify::{Notifier, Severity};
use crate::patch::{self, Toggle};
use crate::store::PreferenceStore;

/// Orchestrates submit → server confirmation → store replace → notify.
pub struct PreferenceSynchronizer {
    api: Arc<dyn PreferencesApi>,
    store: Arc<PreferenceStore>,
    notifier: Arc<dyn Notifier>,
}

impl PreferenceSynchronizer {
    #[must_use]
    pub fn new(
        api: Arc<dyn PreferencesApi>,
        store: Arc<PreferenceStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { api, store, notifier }
    }

    /// Fetch the user's preferences and load the store. Call once per
    /// session, before any submit.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] if the fetch fails; the store stays unloaded.
    pub async fn start_session(&self) -> Result<(), SyncError> {
        let doc = self.api.fetch_preferences().await?;
        self.store.load(doc).await;
        tracing::info!("preference session loaded");
        Ok(())
    }

    /// Tear down session state at logout.
    pub async fn end_session(&self) {
        self.store.clear().await;
        tracing::info!("preference session cleared");
    }

    /// Submit a patch without a success toast (used by toggles, which give
    /// their own immediate visual feedback).
    ///
    /// # Errors
    ///
    /// Returns the underlying [`SyncError`]; the store is left unchanged and
    /// an error notification has already fired.
    pub async fn submit(&self, patch: PatchDocument) -> Result<PreferenceDocument, SyncError> {
        self.submit_inner(patch, None).await
    }

    /// Submit a patch and surface `message` as an info notification once the
    /// server confirms.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::submit`].
    pub async fn submit_with_message(
        &self,
        patch: PatchDocument,
        message: &str,
    ) -> Result<PreferenceDocument, SyncError> {
        self.submit_inner(patch, Some(message)).await
    }

    /// Flip one named toggle.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::submit`].
    pub async fn set_toggle(
        &self,
        toggle: Toggle,
        enabled: bool,
    ) -> Result<PreferenceDocument, SyncError> {
        self.submit(patch::toggle_patch(toggle, enabled)).await
    }

    /// Submit the staged source-classification selection.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::submit`].
    pub async fn submit_source_classifications(
        &self,
        values: &[String],
    ) -> Result<PreferenceDocument, SyncError> {
        self.submit_with_message(
            patch::classifications_patch(values),
            "Sources classifications updated",
        )
        .await
    }

    /// Submit the staged GCN notice-type and tag selections in one patch.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::submit`].
    pub async fn submit_gcn_selections(
        &self,
        notice_types: &[String],
        tags: &[String],
    ) -> Result<PreferenceDocument, SyncError> {
        self.submit_with_message(
            patch::gcn_selection_patch(notice_types, tags),
            "GCN notice types updated",
        )
        .await
    }

    async fn submit_inner(
        &self,
        patch: PatchDocument,
        success_message: Option<&str>,
    ) -> Result<PreferenceDocument, SyncError> {
        match self.api.update_preferences(&patch).await {
            Ok(doc) => {
                self.store.replace(doc.clone()).await;
                self.store.reset_staged_from(&patch).await;
                tracing::info!("preference update confirmed");
                if let Some(message) = success_message {
                    self.notifier.notify(message, Severity::Info);
                }
                Ok(doc)
            }
            Err(e) => {
                tracing::warn!(code = e.error_code(), error = %e, "preference update failed");
                self.notifier.notify(e.user_message(), Severity::Error);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
