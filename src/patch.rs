//! Pure mapping from UI events to preference patches.
//!
//! DESIGN
//! ======
//! Every control on the notification settings page dispatches either a named
//! toggle with a boolean, or a multi-select submission with a list of values.
//! Both map to a [`PatchDocument`] touching exactly the changed section and
//! field(s), and nothing else. Keeping this mapping free of side effects is
//! what makes the submit contract testable without a server.
//!
//! Multi-select values are deduplicated with first-occurrence order preserved
//! before the patch is built, so the wire value is always a set.

use crate::model::{
    FavoriteSourcesPatch, GcnEventsPatch, PatchDocument, SourcesPatch, TogglePatch,
};

// =============================================================================
// TOGGLES
// =============================================================================

/// Named toggles on the notification settings page.
///
/// The five section toggles flip a section's `active` switch; the three
/// favorite-sources sub-toggles flip per-event flags inside that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Sources,
    GcnEvents,
    FacilityTransactions,
    FavoriteSources,
    Mention,
    FavoriteSourcesNewComments,
    FavoriteSourcesNewSpectra,
    FavoriteSourcesNewClassifications,
}

impl Toggle {
    /// All known toggles.
    pub const ALL: [Toggle; 8] = [
        Toggle::Sources,
        Toggle::GcnEvents,
        Toggle::FacilityTransactions,
        Toggle::FavoriteSources,
        Toggle::Mention,
        Toggle::FavoriteSourcesNewComments,
        Toggle::FavoriteSourcesNewSpectra,
        Toggle::FavoriteSourcesNewClassifications,
    ];

    /// Control name as dispatched by the settings page.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Toggle::Sources => "sources",
            Toggle::GcnEvents => "gcn_events",
            Toggle::FacilityTransactions => "facility_transactions",
            Toggle::FavoriteSources => "favorite_sources",
            Toggle::Mention => "mention",
            Toggle::FavoriteSourcesNewComments => "favorite_sources_new_comments",
            Toggle::FavoriteSourcesNewSpectra => "favorite_sources_new_spectra",
            Toggle::FavoriteSourcesNewClassifications => "favorite_sources_new_classifications",
        }
    }

    /// Parse a control name back into a toggle. `None` for unknown names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Toggle::ALL.into_iter().find(|t| t.name() == name)
    }
}

// =============================================================================
// PATCH BUILDERS
// =============================================================================

/// Build the minimal patch for one toggle event.
#[must_use]
pub fn toggle_patch(toggle: Toggle, enabled: bool) -> PatchDocument {
    let mut patch = PatchDocument::default();
    match toggle {
        Toggle::Sources => {
            patch.sources = Some(SourcesPatch { active: Some(enabled), classifications: None });
        }
        Toggle::GcnEvents => {
            patch.gcn_events = Some(GcnEventsPatch { active: Some(enabled), ..Default::default() });
        }
        Toggle::FacilityTransactions => {
            patch.facility_transactions = Some(TogglePatch { active: Some(enabled) });
        }
        Toggle::FavoriteSources => {
            patch.favorite_sources =
                Some(FavoriteSourcesPatch { active: Some(enabled), ..Default::default() });
        }
        Toggle::Mention => {
            patch.mention = Some(TogglePatch { active: Some(enabled) });
        }
        Toggle::FavoriteSourcesNewComments => {
            patch.favorite_sources =
                Some(FavoriteSourcesPatch { new_comments: Some(enabled), ..Default::default() });
        }
        Toggle::FavoriteSourcesNewSpectra => {
            patch.favorite_sources =
                Some(FavoriteSourcesPatch { new_spectra: Some(enabled), ..Default::default() });
        }
        Toggle::FavoriteSourcesNewClassifications => {
            patch.favorite_sources = Some(FavoriteSourcesPatch {
                new_classifications: Some(enabled),
                ..Default::default()
            });
        }
    }
    patch
}

/// Build the patch for a source-classifications submission.
///
/// An empty selection is a valid patch that clears the field.
#[must_use]
pub fn classifications_patch(values: &[String]) -> PatchDocument {
    PatchDocument {
        sources: Some(SourcesPatch { active: None, classifications: Some(dedup(values)) }),
        ..Default::default()
    }
}

/// Build the patch for a GCN selection submission.
///
/// The settings page submits notice types and tags together in one patch.
#[must_use]
pub fn gcn_selection_patch(notice_types: &[String], tags: &[String]) -> PatchDocument {
    PatchDocument {
        gcn_events: Some(GcnEventsPatch {
            active: None,
            gcn_notice_types: Some(dedup(notice_types)),
            gcn_tags: Some(dedup(tags)),
        }),
        ..Default::default()
    }
}

/// Deduplicate values, keeping the first occurrence of each and its position.
#[must_use]
pub fn dedup(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "patch_test.rs"]
mod tests;
