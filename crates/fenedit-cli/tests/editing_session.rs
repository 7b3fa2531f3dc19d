//! Integration tests for whole editing sessions over the line protocol.
//!
//! Drives the editor with scripted input and checks the FEN it ends on,
//! its replies, and that every intermediate position stays well-formed.

use std::io::Cursor;

use fenedit_cli::{Editor, parse_command};
use fenedit_core::{STARTING_FEN, is_valid_fen_structure, validate_fen_input};

const SICILIAN_FEN: &str =
    "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2";

const ENDGAME_FEN: &str =
    "8/8/8/3k4/8/3K4/4P3/8 w - - 0 1";

/// Helper: run `script` through a fresh editor, returning it and its output lines.
fn session(script: &str) -> (Editor, Vec<String>) {
    let mut editor = Editor::new();
    let mut output = Vec::new();
    editor
        .run(Cursor::new(script), &mut output)
        .expect("in-memory session should not fail");
    let lines = String::from_utf8(output)
        .expect("editor output should be UTF-8")
        .lines()
        .map(str::to_string)
        .collect();
    (editor, lines)
}

// ── Position setup ────────────────────────────────────────────────────────────

#[test]
fn position_fen_round_trips() {
    for fen in [STARTING_FEN, SICILIAN_FEN, ENDGAME_FEN] {
        let (_, lines) = session(&format!("position fen {fen}\nfen\n"));
        assert_eq!(lines, vec![format!("fen {fen}")], "round trip failed for {fen}");
    }
}

#[test]
fn invalid_position_keeps_previous_fen() {
    let (editor, _) = session(&format!(
        "position fen {ENDGAME_FEN}\nposition fen 8/8/8/3k4/8/3K4/4P3 w - - 0 1\n"
    ));
    assert_eq!(editor.fen(), ENDGAME_FEN);
}

// ── Editing ───────────────────────────────────────────────────────────────────

#[test]
fn build_position_from_empty_board() {
    let script = "position empty\n\
                  drop K 227 377\n\
                  drop k 227 27\n\
                  put a1 R\n\
                  put h8 r\n\
                  castling Qk\n\
                  fen\n";
    let (_, lines) = session(script);
    assert_eq!(lines, vec!["fen 4k2r/8/8/8/8/8/8/R3K3 w Qk - 0 1".to_string()]);
}

#[test]
fn en_passant_checks_follow_pawn_color() {
    // White pawn on c5, black pawn on e4.
    let script = "position fen 4k3/8/8/2P5/4p3/8/8/4K3 w - - 0 1\n\
                  validate ep c6\nvalidate ep e3\nvalidate ep c3\nvalidate ep e6\n";
    let (_, lines) = session(script);
    assert_eq!(lines[0], "valid", "white pawn stands on c5");
    assert_eq!(lines[1], "valid", "black pawn stands on e4");
    assert!(lines[2].starts_with("invalid "), "no black pawn on c4");
    assert!(lines[3].starts_with("invalid "), "no white pawn on e5");
}

#[test]
fn sicilian_c6_is_not_backed_by_a_white_pawn() {
    let (_, lines) = session(&format!("position fen {SICILIAN_FEN}\nvalidate ep c6\n"));
    assert!(lines[0].starts_with("invalid "));
}

#[test]
fn every_step_stays_well_formed() {
    let steps = [
        "move e2 e4",
        "ep e3",
        "drag g8 327 27 277 127",
        "castling KQk",
        "halfmove 1",
        "fullmove 2",
        "flip",
        "drop Q 200 200",
        "remove a1",
        "turn w",
        "ep",
    ];

    let mut editor = Editor::new();
    let mut sink = Vec::new();
    for step in steps {
        editor
            .execute(parse_command(step).expect("step should parse"), &mut sink)
            .expect("step should apply");
        assert!(
            is_valid_fen_structure(editor.fen()),
            "'{step}' produced malformed FEN {}",
            editor.fen()
        );
        assert!(validate_fen_input(editor.fen()).valid);
    }
}

// ── Robustness ────────────────────────────────────────────────────────────────

#[test]
fn garbage_input_is_ignored() {
    let script = "\n\n   \nmove\nput e4\ndrag e2\nlayout 1 2\nsetoption\nvalidate\nxyzzy\nfen\n";
    let (editor, lines) = session(script);
    assert_eq!(editor.fen(), STARTING_FEN);
    assert_eq!(lines, vec![format!("fen {STARTING_FEN}")]);
}
