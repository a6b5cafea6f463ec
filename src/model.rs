//! Preference document and patch types.
//!
//! DESIGN
//! ======
//! The server stores notification preferences as a tree of named sections.
//! Sections are optional everywhere: a user who never touched a toggle has no
//! entry for it, and an absent section reads as inactive. Reads therefore go
//! through default-absent accessors instead of nested `Option` chains.
//!
//! `PatchDocument` is the partial counterpart: only keys present in a patch
//! are changed server-side (shallow merge per section, not whole-document
//! replace). An explicitly present empty list clears a field; an absent field
//! leaves it untouched. The two cases must never collapse into one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// SECTIONS
// =============================================================================

/// Top-level notification preference categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Sources,
    GcnEvents,
    FacilityTransactions,
    FavoriteSources,
    Mention,
}

impl Section {
    /// All known sections, in the order the profile page lists them.
    pub const ALL: [Section; 5] = [
        Section::Sources,
        Section::GcnEvents,
        Section::FacilityTransactions,
        Section::FavoriteSources,
        Section::Mention,
    ];

    /// The wire name of this section as it appears in the document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Sources => "sources",
            Section::GcnEvents => "gcn_events",
            Section::FacilityTransactions => "facility_transactions",
            Section::FavoriteSources => "favorite_sources",
            Section::Mention => "mention",
        }
    }
}

// =============================================================================
// PREFERENCE DOCUMENT
// =============================================================================

/// Full notification preference document for one user.
///
/// Absent sections are semantically `active = false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourcesSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcn_events: Option<GcnEventsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_transactions: Option<ToggleSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_sources: Option<FavoriteSourcesSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention: Option<ToggleSection>,
}

/// `sources` section: notify on classification activity across all sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesSection {
    pub active: bool,
    pub classifications: Vec<String>,
}

/// `gcn_events` section: notify on GCN events by notice type and tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcnEventsSection {
    pub active: bool,
    pub gcn_notice_types: Vec<String>,
    pub gcn_tags: Vec<String>,
}

/// Sections carrying only an on/off switch (`facility_transactions`, `mention`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleSection {
    pub active: bool,
}

/// `favorite_sources` section: master switch plus per-event sub-toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoriteSourcesSection {
    pub active: bool,
    pub new_comments: bool,
    pub new_spectra: bool,
    pub new_classifications: bool,
}

impl PreferenceDocument {
    /// Whether a section's master switch is on. Absent sections read as off.
    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        match section {
            Section::Sources => self.sources.as_ref().is_some_and(|s| s.active),
            Section::GcnEvents => self.gcn_events.as_ref().is_some_and(|s| s.active),
            Section::FacilityTransactions => self
                .facility_transactions
                .as_ref()
                .is_some_and(|s| s.active),
            Section::FavoriteSources => self.favorite_sources.as_ref().is_some_and(|s| s.active),
            Section::Mention => self.mention.as_ref().is_some_and(|s| s.active),
        }
    }

    /// Selected source classifications. Empty when the section is absent.
    #[must_use]
    pub fn classifications(&self) -> &[String] {
        self.sources
            .as_ref()
            .map_or(&[], |s| s.classifications.as_slice())
    }

    /// Selected GCN notice types. Empty when the section is absent.
    #[must_use]
    pub fn gcn_notice_types(&self) -> &[String] {
        self.gcn_events
            .as_ref()
            .map_or(&[], |s| s.gcn_notice_types.as_slice())
    }

    /// Selected GCN tags. Empty when the section is absent.
    #[must_use]
    pub fn gcn_tags(&self) -> &[String] {
        self.gcn_events
            .as_ref()
            .map_or(&[], |s| s.gcn_tags.as_slice())
    }

    /// Read a nested field by dotted path (e.g. `"sources.active"`).
    ///
    /// Returns `None` for any segment that is absent, so callers get the
    /// default-absent contract without chaining optionals themselves.
    #[must_use]
    pub fn value_at(&self, path: &str) -> Option<Value> {
        let root = serde_json::to_value(self).ok()?;
        let mut current = &root;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current.clone())
    }
}

// =============================================================================
// PATCH DOCUMENT
// =============================================================================

/// Partial preference document: only present keys are changed server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourcesPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcn_events: Option<GcnEventsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_transactions: Option<TogglePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_sources: Option<FavoriteSourcesPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention: Option<TogglePatch>,
}

/// Partial `sources` section.
///
/// `classifications: Some(vec![])` clears the selection; `None` leaves it
/// alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Vec<String>>,
}

/// Partial `gcn_events` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcnEventsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcn_notice_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcn_tags: Option<Vec<String>>,
}

/// Partial switch-only section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TogglePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Partial `favorite_sources` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoriteSourcesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_spectra: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_classifications: Option<bool>,
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
