//! Process-wide preference state.
//!
//! DESIGN
//! ======
//! The store is the single source of truth for the authenticated user's
//! preference document. Lifecycle: loaded once at session start, replaced
//! only by the synchronizer's success path with the server's returned
//! document, cleared at logout. `replace` is `pub(crate)` so no caller
//! outside this crate can commit a document the server never acknowledged.
//!
//! The store also holds the staged multi-select lists backing the selection
//! pickers. The UI writes those freely; on a confirmed submit they are reset
//! to the deduplicated values actually sent, so stale duplicate entries
//! cannot drift away from server state.

use tokio::sync::RwLock;

use crate::model::{PatchDocument, PreferenceDocument, Section};
use serde_json::Value;

/// Staged multi-select state for the selection pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedSelections {
    pub classifications: Vec<String>,
    pub gcn_notice_types: Vec<String>,
    pub gcn_tags: Vec<String>,
}

impl StagedSelections {
    fn from_document(doc: &PreferenceDocument) -> Self {
        Self {
            classifications: doc.classifications().to_vec(),
            gcn_notice_types: doc.gcn_notice_types().to_vec(),
            gcn_tags: doc.gcn_tags().to_vec(),
        }
    }
}

struct Inner {
    document: Option<PreferenceDocument>,
    staged: StagedSelections,
}

/// Owned, single-writer cell holding the current preference document.
pub struct PreferenceStore {
    inner: RwLock<Inner>,
}

impl PreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner { document: None, staged: StagedSelections::default() }),
        }
    }

    /// Whether a session document has been loaded.
    pub async fn is_loaded(&self) -> bool {
        self.inner.read().await.document.is_some()
    }

    /// Load the session's initial document and seed the staged selections
    /// from it.
    pub async fn load(&self, doc: PreferenceDocument) {
        let mut inner = self.inner.write().await;
        inner.staged = StagedSelections::from_document(&doc);
        inner.document = Some(doc);
    }

    /// Tear down at logout.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.document = None;
        inner.staged = StagedSelections::default();
    }

    /// Snapshot of the current document. Defaults to the empty document when
    /// no session is loaded, so reads never fail.
    pub async fn document(&self) -> PreferenceDocument {
        self.inner.read().await.document.clone().unwrap_or_default()
    }

    /// Whether a section's master switch is on.
    pub async fn is_active(&self, section: Section) -> bool {
        self.inner
            .read()
            .await
            .document
            .as_ref()
            .is_some_and(|doc| doc.is_active(section))
    }

    /// Read a nested field by dotted path. `None` when absent or unloaded.
    pub async fn value_at(&self, path: &str) -> Option<Value> {
        self.inner
            .read()
            .await
            .document
            .as_ref()
            .and_then(|doc| doc.value_at(path))
    }

    /// Current staged picker state.
    pub async fn staged(&self) -> StagedSelections {
        self.inner.read().await.staged.clone()
    }

    pub async fn set_staged_classifications(&self, values: Vec<String>) {
        self.inner.write().await.staged.classifications = values;
    }

    pub async fn set_staged_gcn_notice_types(&self, values: Vec<String>) {
        self.inner.write().await.staged.gcn_notice_types = values;
    }

    pub async fn set_staged_gcn_tags(&self, values: Vec<String>) {
        self.inner.write().await.staged.gcn_tags = values;
    }

    /// Replace the document with a server-acknowledged copy.
    ///
    /// Only the synchronizer's success path may call this.
    pub(crate) async fn replace(&self, doc: PreferenceDocument) {
        self.inner.write().await.document = Some(doc);
    }

    /// Reset staged selections to the values a confirmed patch carried.
    /// Fields absent from the patch keep their staged state.
    pub(crate) async fn reset_staged_from(&self, patch: &PatchDocument) {
        let mut inner = self.inner.write().await;
        if let Some(sources) = &patch.sources {
            if let Some(values) = &sources.classifications {
                inner.staged.classifications.clone_from(values);
            }
        }
        if let Some(gcn) = &patch.gcn_events {
            if let Some(values) = &gcn.gcn_notice_types {
                inner.staged.gcn_notice_types.clone_from(values);
            }
            if let Some(values) = &gcn.gcn_tags {
                inner.staged.gcn_tags.clone_from(values);
            }
        }
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
