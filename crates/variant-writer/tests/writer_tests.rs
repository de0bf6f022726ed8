use std::fs;

use param_format::{load_or_default, ParameterSet, ParameterSets, ParametricDocument};
use proptest::prelude::*;
use serde_json::{json, Value};
use variant_writer::{build_targets, differs, format_targets, VariantWriter, WriteStatus};

fn sets(value: Value) -> ParameterSets {
    value
        .as_object()
        .unwrap()
        .iter()
        .map(|(name, set)| (name.clone(), set.as_object().cloned().unwrap()))
        .collect()
}

fn writer() -> (tempfile::TempDir, VariantWriter) {
    let dir = tempfile::tempdir().unwrap();
    let writer = VariantWriter::new(dir.path());
    (dir, writer)
}

const DEMO_SMALL: &str = "{\n    \"fileFormatVersion\": \"1\",\n    \"parameterSets\": {\n        \"small\": {\n            \"h\": 10\n        }\n    }\n}";

// ── Single writes ────────────────────────────────────────────────────────

#[test]
fn first_write_creates_sorted_file() {
    let (_dir, w) = writer();
    let status = w
        .write_single(&sets(json!({"small": {"h": 10}})), "demo", "small", false)
        .unwrap();
    assert_eq!(status, WriteStatus::Updated);

    let text = fs::read_to_string(w.variant_path("demo", "small")).unwrap();
    assert_eq!(text, DEMO_SMALL);
}

#[test]
fn second_write_is_unchanged_and_file_untouched() {
    let (_dir, w) = writer();
    let input = sets(json!({"small": {"h": 10}}));
    w.write_single(&input, "demo", "small", false).unwrap();
    let path = w.variant_path("demo", "small");
    let before = fs::read(&path).unwrap();

    let status = w.write_single(&input, "demo", "small", false).unwrap();
    assert_eq!(status, WriteStatus::Unchanged);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn missing_set_touches_nothing() {
    let (dir, w) = writer();
    let status = w
        .write_single(&sets(json!({"small": {"h": 10}})), "demo", "large", false)
        .unwrap();
    assert_eq!(status, WriteStatus::Missing);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn changed_value_rewrites() {
    let (_dir, w) = writer();
    w.write_single(&sets(json!({"small": {"h": 10}})), "demo", "small", false)
        .unwrap();
    let status = w
        .write_single(&sets(json!({"small": {"h": 12}})), "demo", "small", false)
        .unwrap();
    assert_eq!(status, WriteStatus::Updated);

    let doc = load_or_default(w.variant_path("demo", "small")).unwrap();
    assert_eq!(doc.parameter_sets["small"]["h"], json!(12));
}

#[test]
fn removed_key_is_not_rewritten() {
    let (_dir, w) = writer();
    w.write_single(&sets(json!({"small": {"h": 10, "w": 4}})), "demo", "small", false)
        .unwrap();
    let status = w
        .write_single(&sets(json!({"small": {"h": 10}})), "demo", "small", false)
        .unwrap();
    assert_eq!(status, WriteStatus::Unchanged);

    let doc = load_or_default(w.variant_path("demo", "small")).unwrap();
    assert_eq!(doc.parameter_sets["small"]["w"], json!(4));
}

#[test]
fn force_rewrites_identical_content() {
    let (_dir, w) = writer();
    let input = sets(json!({"small": {"h": 10}}));
    w.write_single(&input, "demo", "small", false).unwrap();
    let status = w.write_single(&input, "demo", "small", true).unwrap();
    assert_eq!(status, WriteStatus::Updated);
    assert_eq!(
        fs::read_to_string(w.variant_path("demo", "small")).unwrap(),
        DEMO_SMALL
    );
}

#[test]
fn force_drops_removed_keys() {
    let (_dir, w) = writer();
    w.write_single(&sets(json!({"small": {"h": 10, "w": 4}})), "demo", "small", false)
        .unwrap();
    w.write_single(&sets(json!({"small": {"h": 10}})), "demo", "small", true)
        .unwrap();
    let doc = load_or_default(w.variant_path("demo", "small")).unwrap();
    assert!(doc.parameter_sets["small"].get("w").is_none());
}

#[test]
fn malformed_previous_file_is_fatal() {
    let (_dir, w) = writer();
    fs::write(w.variant_path("demo", "small"), "{oops").unwrap();
    let result = w.write_single(&sets(json!({"small": {"h": 10}})), "demo", "small", true);
    assert!(result.is_err());
}

#[test]
fn missing_variants_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let w = VariantWriter::new(dir.path().join("out").join("variants"));
    let result = w.write_single(&sets(json!({"small": {"h": 10}})), "demo", "small", false);
    assert!(result.is_err());
    assert!(!w.variants_dir().exists());
}

// ── Write all ────────────────────────────────────────────────────────────

fn write_all_statuses(
    w: &VariantWriter,
    input: &ParameterSets,
    force: bool,
) -> (Vec<(String, WriteStatus)>, bool) {
    let mut statuses = Vec::new();
    let result = w.write_all(input, "demo", force, |name, status| {
        statuses.push((name.to_string(), status))
    });
    (statuses, result.is_ok())
}

#[test]
fn write_all_reports_each_set_in_order() {
    let (_dir, w) = writer();
    let input = sets(json!({"tall": {"h": 30}, "short": {"h": 5}}));
    w.write_single(&input, "demo", "short", false).unwrap();

    let (statuses, ok) = write_all_statuses(&w, &input, false);
    assert!(ok);
    assert_eq!(
        statuses,
        vec![
            ("tall".to_string(), WriteStatus::Updated),
            ("short".to_string(), WriteStatus::Unchanged),
        ]
    );

    let (forced, ok) = write_all_statuses(&w, &input, true);
    assert!(ok);
    assert_eq!(forced.len(), 2);
    assert!(forced.iter().all(|(_, s)| *s == WriteStatus::Updated));
}

#[test]
fn write_all_reports_sets_written_before_a_failure() {
    let (_dir, w) = writer();
    let input = sets(json!({"ok": {"h": 1}, "sub/bad": {"h": 2}, "later": {"h": 3}}));

    let (statuses, ok) = write_all_statuses(&w, &input, false);
    assert!(!ok);
    assert_eq!(statuses, vec![("ok".to_string(), WriteStatus::Updated)]);
    assert!(w.variant_path("demo", "ok").exists());
    assert!(!w.variant_path("demo", "later").exists());
}

#[test]
fn large_integer_change_is_detected() {
    let (_dir, w) = writer();
    w.write_single(&sets(json!({"s": {"x": 9007199254740992.0}})), "demo", "s", false)
        .unwrap();
    let status = w
        .write_single(&sets(json!({"s": {"x": 9007199254740993u64}})), "demo", "s", false)
        .unwrap();
    assert_eq!(status, WriteStatus::Updated);
}

// ── Targets ──────────────────────────────────────────────────────────────

#[test]
fn targets_list_every_named_set() {
    let mut doc = ParametricDocument::empty("box");
    doc.parameter_sets = sets(json!({"small": {}, "": {}, "large": {}}));
    let line = format_targets(&build_targets(&doc, "models/box.json"));
    assert_eq!(
        line,
        "box:small:models/box.json:models/box.scad box:large:models/box.json:models/box.scad"
    );
}

#[test]
fn no_sets_no_targets() {
    let doc = ParametricDocument::empty("box");
    assert_eq!(format_targets(&build_targets(&doc, "box.json")), "");
}

// ── Properties ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn deleting_keys_never_counts_as_change(
        entries in prop::collection::btree_map("[a-z]{1,4}", 0i64..100, 1..8),
        keep in prop::collection::vec(any::<bool>(), 8),
    ) {
        let old: ParameterSet = entries.iter().map(|(k, v)| (k.clone(), json!(v))).collect();
        let new: ParameterSet = entries
            .iter()
            .zip(keep.iter())
            .filter(|(_, keep)| **keep)
            .map(|((k, v), _)| (k.clone(), json!(v)))
            .collect();

        let mut old_sets = ParameterSets::new();
        old_sets.insert("s".into(), old);
        let mut new_sets = ParameterSets::new();
        new_sets.insert("s".into(), new);
        prop_assert!(!differs(&new_sets, &old_sets));
    }

    #[test]
    fn rewriting_same_values_is_idempotent(
        entries in prop::collection::btree_map("[a-z]{1,4}", -50i64..50, 0..6),
    ) {
        let (_dir, w) = writer();
        let set: ParameterSet = entries.iter().rev().map(|(k, v)| (k.clone(), json!(v))).collect();
        let mut input = ParameterSets::new();
        input.insert("v".into(), set);

        prop_assert_eq!(w.write_single(&input, "p", "v", false).unwrap(), WriteStatus::Updated);
        let first = fs::read(w.variant_path("p", "v")).unwrap();
        prop_assert_eq!(w.write_single(&input, "p", "v", false).unwrap(), WriteStatus::Unchanged);
        prop_assert_eq!(fs::read(w.variant_path("p", "v")).unwrap(), first);
    }
}
