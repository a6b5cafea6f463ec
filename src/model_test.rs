use super::*;
use serde_json::json;

// =============================================================================
// default-absent reads
// =============================================================================

#[test]
fn empty_document_all_sections_inactive() {
    let doc = PreferenceDocument::default();
    for section in Section::ALL {
        assert!(!doc.is_active(section), "{} should be off", section.as_str());
    }
}

#[test]
fn empty_document_selection_reads_are_empty() {
    let doc = PreferenceDocument::default();
    assert!(doc.classifications().is_empty());
    assert!(doc.gcn_notice_types().is_empty());
    assert!(doc.gcn_tags().is_empty());
}

#[test]
fn present_section_reads_active() {
    let doc = PreferenceDocument {
        sources: Some(SourcesSection { active: true, classifications: vec!["Ia".into()] }),
        ..Default::default()
    };
    assert!(doc.is_active(Section::Sources));
    assert!(!doc.is_active(Section::GcnEvents));
    assert_eq!(doc.classifications(), ["Ia"]);
}

#[test]
fn section_present_but_inactive_reads_false() {
    let doc = PreferenceDocument {
        mention: Some(ToggleSection { active: false }),
        ..Default::default()
    };
    assert!(!doc.is_active(Section::Mention));
}

// =============================================================================
// value_at
// =============================================================================

#[test]
fn value_at_present_path() {
    let doc = PreferenceDocument {
        favorite_sources: Some(FavoriteSourcesSection {
            active: true,
            new_comments: true,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(doc.value_at("favorite_sources.active"), Some(json!(true)));
    assert_eq!(doc.value_at("favorite_sources.new_comments"), Some(json!(true)));
    assert_eq!(doc.value_at("favorite_sources.new_spectra"), Some(json!(false)));
}

#[test]
fn value_at_absent_section_is_none() {
    let doc = PreferenceDocument::default();
    assert_eq!(doc.value_at("sources.active"), None);
    assert_eq!(doc.value_at("sources"), None);
}

#[test]
fn value_at_unknown_path_is_none() {
    let doc = PreferenceDocument {
        sources: Some(SourcesSection::default()),
        ..Default::default()
    };
    assert_eq!(doc.value_at("sources.no_such_field"), None);
    assert_eq!(doc.value_at("sources.active.too_deep"), None);
}

// =============================================================================
// serde shape
// =============================================================================

#[test]
fn empty_document_serializes_to_empty_object() {
    let doc = PreferenceDocument::default();
    assert_eq!(serde_json::to_value(&doc).unwrap(), json!({}));
}

#[test]
fn document_deserializes_partial_payload() {
    let doc: PreferenceDocument = serde_json::from_value(json!({
        "gcn_events": { "active": true, "gcn_tags": ["GW"] }
    }))
    .unwrap();
    assert!(doc.is_active(Section::GcnEvents));
    assert_eq!(doc.gcn_tags(), ["GW"]);
    // Field missing from the payload defaults, not fails.
    assert!(doc.gcn_notice_types().is_empty());
    assert!(doc.sources.is_none());
}

#[test]
fn document_ignores_unknown_section_fields() {
    let doc: PreferenceDocument = serde_json::from_value(json!({
        "sources": { "active": true },
        "unknown_section": { "active": true }
    }))
    .unwrap();
    assert!(doc.is_active(Section::Sources));
}

#[test]
fn patch_serializes_only_present_keys() {
    let patch = PatchDocument {
        mention: Some(TogglePatch { active: Some(true) }),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "mention": { "active": true } }));
}

#[test]
fn patch_empty_selection_serializes_as_empty_array() {
    // Clearing a field must go over the wire as [], never vanish.
    let patch = PatchDocument {
        sources: Some(SourcesPatch { active: None, classifications: Some(vec![]) }),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "sources": { "classifications": [] } }));
}

#[test]
fn patch_absent_field_stays_absent() {
    let patch = PatchDocument {
        sources: Some(SourcesPatch { active: Some(false), classifications: None }),
        ..Default::default()
    };
    let value = serde_json::to_value(&patch).unwrap();
    assert!(value["sources"].get("classifications").is_none());
}
