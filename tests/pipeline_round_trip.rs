use pipewright::codec::pipeline::{from_json, to_json, to_json_compact};
use pipewright::model::task::{OneOrMany, Point, Rect};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn read_fixture(fixture_name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", fixture_name, e))
}

/// Helper: load a fixture file, parse it, serialize it, and assert
/// byte-for-byte equality
fn assert_pipeline_round_trip(fixture_name: &str) {
    let source = read_fixture(fixture_name);

    let mapping = from_json(&source).unwrap();
    let output = to_json(&mapping).unwrap();

    assert_eq!(
        output, source,
        "Round-trip failed for fixture: {}",
        fixture_name
    );
}

// ============================================================================
// Round-trip tests
// ============================================================================

#[test]
fn round_trip_minimal() {
    assert_pipeline_round_trip("minimal.json");
}

#[test]
fn round_trip_arena() {
    assert_pipeline_round_trip("arena.json");
}

#[test]
fn round_trip_empty_document() {
    let mapping = from_json("{}").unwrap();
    assert_eq!(to_json(&mapping).unwrap(), "{}");
}

#[test]
fn compact_form_parses_back_identically() {
    let source = read_fixture("arena.json");
    let mapping = from_json(&source).unwrap();

    let compact = to_json_compact(&mapping).unwrap();
    assert!(!compact.contains('\n'));

    let reparsed = from_json(&compact).unwrap();
    assert_eq!(to_json(&reparsed).unwrap(), source);
}

// ============================================================================
// Parse correctness tests
// ============================================================================

#[test]
fn arena_parse_correctness() {
    let source = read_fixture("arena.json");
    let mapping = from_json(&source).unwrap();

    let keys: Vec<&String> = mapping.keys().collect();
    assert_eq!(
        keys,
        vec![
            "EnterArena",
            "WaitBattleStart",
            "BattleLoop",
            "CollectReward",
            "Idle"
        ]
    );

    // EnterArena: single-value roi and template stay single
    let enter = &mapping["EnterArena"];
    assert_eq!(enter.recognition.as_deref(), Some("TemplateMatch"));
    assert_eq!(enter.action.as_deref(), Some("Click"));
    assert_eq!(enter.roi, OneOrMany::One(Rect::new(520, 310, 240, 120)));
    assert_eq!(enter.template, OneOrMany::One("arena/enter.png".to_string()));
    assert_eq!(enter.next, Some(vec!["WaitBattleStart".to_string()]));

    // WaitBattleStart: list-form roi and expected
    let wait = &mapping["WaitBattleStart"];
    assert_eq!(
        wait.roi,
        OneOrMany::Many(vec![
            Rect::new(0, 0, 1280, 720),
            Rect::new(100, 50, 600, 200)
        ])
    );
    assert_eq!(
        wait.expected,
        OneOrMany::Many(vec!["Start".to_string(), "Begin".to_string()])
    );

    // BattleLoop: swipe endpoints, color bounds, and a self-link in next
    let battle = &mapping["BattleLoop"];
    assert_eq!(battle.begin, Some(Point::new(640, 500)));
    assert_eq!(battle.end, Some(Point::new(640, 200)));
    assert_eq!(battle.upper, Some(vec![255, 255, 255]));
    assert_eq!(battle.lower, Some(vec![180, 180, 180]));
    assert_eq!(
        battle.next,
        Some(vec!["BattleLoop".to_string(), "CollectReward".to_string()])
    );

    // CollectReward: action target
    let collect = &mapping["CollectReward"];
    assert_eq!(collect.target, Some(Rect::new(600, 400, 80, 80)));

    // Idle: nothing set at all
    let idle = &mapping["Idle"];
    assert!(idle.recognition.is_none());
    assert!(idle.action.is_none());
    assert!(idle.next.is_none());
    assert!(idle.roi.is_empty());
    assert!(idle.extra.is_empty());
}

#[test]
fn unmodeled_fields_ride_in_extra() {
    let source = read_fixture("arena.json");
    let mapping = from_json(&source).unwrap();

    let enter = &mapping["EnterArena"];
    assert_eq!(enter.extra.len(), 1);
    assert_eq!(enter.extra["timeout"], serde_json::json!(20000));

    assert_eq!(
        mapping["WaitBattleStart"].extra["pre_delay"],
        serde_json::json!(500)
    );
    assert_eq!(
        mapping["CollectReward"].extra["post_delay"],
        serde_json::json!(1000)
    );

    // Modeled fields never leak into extra
    assert!(!enter.extra.contains_key("roi"));
    assert!(!enter.extra.contains_key("template"));
}

// ============================================================================
// Selective rewrite tests
// ============================================================================

/// The core editing property: changing one field of one task changes only
/// that field's line in the output. Every other task, and every other line
/// of the edited task, stays byte-for-byte identical to the source.
#[test]
fn editing_one_task_leaves_others_byte_identical() {
    let source = read_fixture("arena.json");
    let mut mapping = from_json(&source).unwrap();

    mapping.get_mut("BattleLoop").unwrap().action = Some("LongPress".to_string());
    let output = to_json(&mapping).unwrap();

    // The only difference should be the one action value
    let expected = source.replace("\"action\": \"Swipe\"", "\"action\": \"LongPress\"");
    assert_eq!(output, expected);
}
