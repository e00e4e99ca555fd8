use anagram_core::dictionary::{self, Source};
use anagram_core::{AnagramError, Solver, SolverOptions};
use std::collections::BTreeSet;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn dictionary_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_file_and_drops_invalid_lines() {
    let file = dictionary_file("cat\ndog\nta'co\nact\n");
    let (index, report) = dictionary::load_path(file.path()).unwrap();

    assert_eq!(index.find_anagrams("cat", true), vec!["act"]);
    assert!(!index.contains("ta'co"));
    assert_eq!(index.size(), 3);
    assert_eq!(report.skipped, 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    match dictionary::load_path(&missing) {
        Err(AnagramError::Io { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected an I/O error, got {:?}", other.map(|(_, r)| r)),
    }
}

#[test]
fn solver_from_file() {
    let file = dictionary_file("live\nevil\nvile\nveil\nLevi\nno-no\n");
    let solver = Solver::from_path(file.path(), SolverOptions::default()).unwrap();

    assert_eq!(solver.source(), &Source::File(file.path().to_path_buf()));
    let solution = solver.solve("live").unwrap();
    let found: BTreeSet<_> = solution.anagrams.iter().map(String::as_str).collect();
    assert_eq!(found, BTreeSet::from(["evil", "vile", "veil", "Levi"]));
    assert_eq!(solution.dictionary_size, 5);

    let report = solver.load_report().unwrap();
    assert_eq!(report.accepted, 5);
    assert_eq!(report.skipped, 1);
}

#[test]
fn cli_prints_one_anagram_per_line() {
    let file = dictionary_file("one\ntwo\nneo\neon\n");
    let output = Command::new(env!("CARGO_BIN_EXE_anagram"))
        .arg("--dictionary")
        .arg(file.path())
        .arg("one")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "eon\nneo\n");
}

#[test]
fn cli_json_output() {
    let file = dictionary_file("one\ntwo\nneo\n");
    let output = Command::new(env!("CARGO_BIN_EXE_anagram"))
        .args(["--json", "--dictionary"])
        .arg(file.path())
        .arg("one")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["word"], "one");
    assert_eq!(json["key"], "eno");
    assert_eq!(json["anagrams"], serde_json::json!(["neo"]));
    assert_eq!(json["dictionary_size"], 3);
}

#[test]
fn cli_rejects_invalid_word() {
    let output = Command::new(env!("CARGO_BIN_EXE_anagram"))
        .arg("can't")
        .env_remove("ANAGRAM_DICTIONARY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    // reported once, by the binary, not again by the default-level logger
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("can't").count(), 1, "{}", stderr);
}
