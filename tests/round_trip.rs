//! Round-trip and patch properties over the fixture boards: parsing,
//! serializing, and toggling must never disturb anything but the one state
//! character they are aimed at.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use cardboard::model::board::Board;
use cardboard::model::config::Grammar;
use cardboard::model::task::Task;
use cardboard::ops::patch::toggle_task;
use cardboard::parse::{BoardParser, serialize_board};

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("could not read fixture {}: {}", name, e))
}

// ============================================================================
// Parse / serialize round-trip
// ============================================================================

#[test]
fn week_fixture_parses_to_expected_board() {
    let board = BoardParser::new(Grammar::Date).parse(&fixture("week_board.md"));

    let labels: Vec<&str> = board.labels().collect();
    assert_eq!(labels, vec!["2024-01-01", "2024-01-02"]);

    let monday = board.tasks("2024-01-01").unwrap();
    assert_eq!(monday.len(), 2);
    assert_eq!(monday[0], Task::new("buy milk", false));
    assert_eq!(monday[1], Task::new("pay rent", true));

    // Wednesday has a header but no tasks, so it never becomes a section.
    assert!(board.tasks("2024-01-03").is_none());
}

#[test]
fn column_fixture_parses_to_expected_board() {
    let board = BoardParser::new(Grammar::Label).parse(&fixture("column_board.md"));

    let labels: Vec<&str> = board.labels().collect();
    assert_eq!(labels, vec!["Backlog", "Doing", "Done"]);
    assert_eq!(board.tasks("Backlog").unwrap().len(), 2);
    assert!(board.tasks("Done").unwrap()[0].done);
}

#[test]
fn serialize_then_parse_is_identity() {
    for (name, grammar) in [
        ("week_board.md", Grammar::Date),
        ("column_board.md", Grammar::Label),
    ] {
        let board = BoardParser::new(grammar).parse(&fixture(name));
        let reparsed = BoardParser::new(grammar).parse(&serialize_board(&board));
        assert_eq!(reparsed, board, "serialize/parse identity failed for {}", name);
    }
}

#[test]
fn serialize_then_parse_identity_on_constructed_board() {
    let mut board = Board::new();
    board.push_task("2024-06-03", Task::new("water the garden", false));
    board.push_task("2024-06-03", Task::new("mow the lawn", true));
    board.push_task("Someday", Task::new("learn to juggle [3 balls]", false));

    let reparsed = BoardParser::new(Grammar::Label).parse(&serialize_board(&board));
    assert_eq!(reparsed, board);
}

// ============================================================================
// Patch properties against the full fixtures
// ============================================================================

/// The core property: a successful toggle changes exactly one character of
/// the document, and everything else (prose, blank lines, other sections)
/// is byte-identical.
#[test]
fn toggle_is_a_single_character_diff() {
    let source = fixture("week_board.md");
    let patched = toggle_task(&source, "2024-01-02", "call mom", true, Grammar::Date);

    assert_ne!(patched, source);
    assert_eq!(patched.len(), source.len());
    let diffs: Vec<(usize, u8, u8)> = source
        .bytes()
        .zip(patched.bytes())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, (a, b))| (i, a, b))
        .collect();
    assert_eq!(diffs.len(), 1);
    let (_, before, after) = diffs[0];
    assert_eq!(before, b' ');
    assert_eq!(after, b'x');
}

#[test]
fn toggle_is_idempotent() {
    let source = fixture("column_board.md");
    let once = toggle_task(&source, "Doing", "draft README", true, Grammar::Label);
    let twice = toggle_task(&once, "Doing", "draft README", true, Grammar::Label);
    assert_eq!(once, twice);
}

#[test]
fn toggle_missing_target_returns_input_unchanged() {
    let source = fixture("week_board.md");
    assert_eq!(
        toggle_task(&source, "2024-01-01", "no such task", true, Grammar::Date),
        source
    );
    assert_eq!(
        toggle_task(&source, "2024-01-09", "buy milk", true, Grammar::Date),
        source
    );
}

#[test]
fn toggle_then_parse_sees_the_new_state() {
    let source = fixture("column_board.md");
    let parser = BoardParser::new(Grammar::Label);

    let before = parser.parse(&source);
    assert!(!before.find_task("Backlog", "refactor parser").unwrap().done);

    let patched = toggle_task(&source, "Backlog", "refactor parser", true, Grammar::Label);
    let after = parser.parse(&patched);
    assert!(after.find_task("Backlog", "refactor parser").unwrap().done);

    // No other task changed state.
    assert!(!after.find_task("Backlog", "write tests").unwrap().done);
    assert!(!after.find_task("Doing", "draft README").unwrap().done);
    assert!(after.find_task("Done", "ship release").unwrap().done);
}

#[test]
fn toggle_off_then_on_restores_the_document() {
    let source = fixture("week_board.md");
    let off = toggle_task(&source, "2024-01-01", "pay rent", false, Grammar::Date);
    assert_ne!(off, source);
    let back = toggle_task(&off, "2024-01-01", "pay rent", true, Grammar::Date);
    assert_eq!(back, source);
}

#[test]
fn toggle_text_with_metacharacters_from_fixture() {
    let source = fixture("week_board.md");
    let patched = toggle_task(
        &source,
        "2024-01-02",
        "write report (draft)",
        true,
        Grammar::Date,
    );
    assert!(patched.contains("- [x] write report (draft)"));
}
