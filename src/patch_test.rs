use super::*;
use serde_json::Value;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

// =============================================================================
// toggle names
// =============================================================================

#[test]
fn toggle_names_round_trip() {
    for toggle in Toggle::ALL {
        assert_eq!(Toggle::parse(toggle.name()), Some(toggle));
    }
}

#[test]
fn parse_unknown_name_is_none() {
    assert_eq!(Toggle::parse("sms"), None);
    assert_eq!(Toggle::parse(""), None);
}

// =============================================================================
// toggle_patch — minimality
// =============================================================================

/// Every toggle, on or off, must touch exactly one section and one field.
#[test]
fn every_toggle_touches_one_section_one_field() {
    for toggle in Toggle::ALL {
        for enabled in [true, false] {
            let patch = toggle_patch(toggle, enabled);
            let value = serde_json::to_value(&patch).unwrap();
            let sections = value.as_object().unwrap();
            assert_eq!(sections.len(), 1, "{}: expected one section", toggle.name());
            let (_, section) = sections.iter().next().unwrap();
            let fields = section.as_object().unwrap();
            assert_eq!(fields.len(), 1, "{}: expected one field", toggle.name());
            let (_, field) = fields.iter().next().unwrap();
            assert_eq!(field, &Value::Bool(enabled));
        }
    }
}

#[test]
fn section_toggles_set_active() {
    let patch = toggle_patch(Toggle::Sources, true);
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({ "sources": { "active": true } }));

    let patch = toggle_patch(Toggle::Mention, false);
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({ "mention": { "active": false } }));
}

#[test]
fn sub_toggles_target_favorite_sources_fields() {
    let patch = toggle_patch(Toggle::FavoriteSourcesNewSpectra, true);
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({ "favorite_sources": { "new_spectra": true } }));
    // The master switch must not ride along.
    assert!(patch.favorite_sources.unwrap().active.is_none());
}

// =============================================================================
// dedup
// =============================================================================

#[test]
fn dedup_removes_duplicates_keeps_first_order() {
    assert_eq!(dedup(&strings(&["a", "a", "b"])), strings(&["a", "b"]));
    assert_eq!(dedup(&strings(&["b", "a", "b", "a"])), strings(&["b", "a"]));
}

#[test]
fn dedup_empty_is_empty() {
    assert_eq!(dedup(&[]), Vec::<String>::new());
}

#[test]
fn dedup_no_duplicates_is_identity() {
    let input = strings(&["x", "y", "z"]);
    assert_eq!(dedup(&input), input);
}

// =============================================================================
// classifications_patch
// =============================================================================

#[test]
fn classifications_patch_dedups() {
    let patch = classifications_patch(&strings(&["x", "y", "y"]));
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({ "sources": { "classifications": ["x", "y"] } }));
}

#[test]
fn classifications_patch_empty_clears_not_skips() {
    let patch = classifications_patch(&[]);
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({ "sources": { "classifications": [] } }));
}

#[test]
fn classifications_patch_leaves_active_untouched() {
    let patch = classifications_patch(&strings(&["Ia"]));
    assert!(patch.sources.unwrap().active.is_none());
}

// =============================================================================
// gcn_selection_patch
// =============================================================================

#[test]
fn gcn_selection_patch_carries_both_fields() {
    let patch = gcn_selection_patch(&strings(&["LVC_INITIAL", "LVC_INITIAL"]), &strings(&["GW"]));
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "gcn_events": { "gcn_notice_types": ["LVC_INITIAL"], "gcn_tags": ["GW"] }
        })
    );
}

#[test]
fn gcn_selection_patch_empty_both_clears_both() {
    let patch = gcn_selection_patch(&[], &[]);
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "gcn_events": { "gcn_notice_types": [], "gcn_tags": [] } })
    );
}
