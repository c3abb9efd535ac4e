//! Tests for the first-line delimiter sniffer

mod common;

use csvxl::pipeline::sniff_delimiter;
use encoding_rs::UTF_8;
use tempfile::TempDir;

fn sniff(contents: &str) -> u8 {
    let temp = TempDir::new().unwrap();
    let path = common::write_file(&temp, "sample.csv", contents);
    sniff_delimiter(&path, UTF_8).unwrap()
}

#[test]
fn test_sniffs_pipe() {
    assert_eq!(sniff("a|b|c\n1|2|3\n"), b'|');
}

#[test]
fn test_sniffs_tab() {
    assert_eq!(sniff("a\tb\tc\n"), b'\t');
}

#[test]
fn test_sniffs_semicolon() {
    assert_eq!(sniff("a;b;c\n"), b';');
}

#[test]
fn test_sniffs_comma() {
    assert_eq!(sniff("a,b,c\n"), b',');
}

#[test]
fn test_pipe_wins_over_comma() {
    // Candidates are tested in order: '|' before '\t' before ';' before ','.
    assert_eq!(sniff("a|b,c\n"), b'|');
}

#[test]
fn test_fallback_is_newline() {
    // No candidate present: the degenerate fallback disables splitting.
    assert_eq!(sniff("a b c\n1 2 3\n"), b'\n');
}

#[test]
fn test_only_first_line_is_inspected() {
    assert_eq!(sniff("plain header\n1;2;3\n"), b'\n');
}

#[test]
fn test_empty_file_falls_back_to_newline() {
    assert_eq!(sniff(""), b'\n');
}

#[test]
fn test_non_utf8_encoding() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("latin.csv");
    // "colonne;prix d'été" in latin1: the 0xE9 bytes are not valid UTF-8.
    std::fs::write(&path, b"colonne;prix d'\xe9t\xe9\n").unwrap();

    let enc = encoding_rs::Encoding::for_label(b"latin1").unwrap();
    assert_eq!(sniff_delimiter(&path, enc).unwrap(), b';');
}
