// File: src/dictionary.rs
use crate::core::canonical::is_valid;
use crate::core::index::AnagramIndex;
use crate::core::types::LoadReport;
use crate::error::{AnagramError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const SAMPLE_DICTIONARY: &str = include_str!("../data/sample_dictionary.txt");

/// Reads one word per line into `index`.
///
/// Each line is trimmed before validation. Lines that fail `is_valid`,
/// blank ones included, are dropped and counted as skipped. Read failures
/// are reported against `origin`.
pub fn read_into<R: BufRead>(
    reader: R,
    index: &mut AnagramIndex,
    origin: &Path,
) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for line in reader.lines() {
        let line = line.map_err(|source| AnagramError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        report.lines += 1;

        let word = line.trim();
        if !is_valid(word) {
            log::debug!("dictionary: skipping line {}: {:?}", report.lines, word);
            report.skipped += 1;
            continue;
        }

        if index.insert(word) {
            report.accepted += 1;
        } else {
            report.duplicates += 1;
        }
    }

    Ok(report)
}

/// Builds a fresh index from a dictionary file.
pub fn load_path(path: impl AsRef<Path>) -> Result<(AnagramIndex, LoadReport)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnagramError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut index = AnagramIndex::new();
    let report = read_into(BufReader::new(file), &mut index, path)?;
    log::info!(
        "dictionary: loaded {} words from {} ({} skipped, {} duplicates)",
        report.accepted,
        path.display(),
        report.skipped,
        report.duplicates
    );
    Ok((index, report))
}

/// The built-in example word list.
pub fn sample() -> AnagramIndex {
    SAMPLE_DICTIONARY.lines().map(str::trim).collect()
}

/// Where a dictionary came from, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Sample,
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Sample => f.write_str("built-in sample"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_skips_invalid_lines() {
        let mut index = AnagramIndex::new();
        let report = read_into(
            Cursor::new("cat\ndog\nta'co\nact\n"),
            &mut index,
            Path::new("<memory>"),
        )
        .unwrap();

        assert_eq!(index.find_anagrams("cat", true), vec!["act"]);
        assert!(!index.contains("ta'co"));
        assert_eq!(
            report,
            LoadReport {
                lines: 4,
                accepted: 3,
                skipped: 1,
                duplicates: 0
            }
        );
    }

    #[test]
    fn test_trims_and_counts_duplicates() {
        let mut index = AnagramIndex::new();
        let report = read_into(
            Cursor::new("  live \r\n\n\tevil\nlive\n"),
            &mut index,
            Path::new("<memory>"),
        )
        .unwrap();

        assert_eq!(report.accepted, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.duplicates, 1);
        assert_eq!(index.find_anagrams("live", true), vec!["evil"]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_failure_is_surfaced() {
        let mut index = AnagramIndex::new();
        let err = read_into(
            io::BufReader::new(FailingReader),
            &mut index,
            Path::new("words.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, AnagramError::Io { ref path, .. } if path == Path::new("words.txt")));
    }

    #[test]
    fn test_sample_dictionary() {
        let index = sample();
        assert!(index.size() > 20);
        assert_eq!(
            index.find_anagrams("live", true),
            vec!["evil", "levi", "veil", "vile"]
        );
    }

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Sample.to_string(), "built-in sample");
        assert_eq!(
            Source::File(PathBuf::from("words.txt")).to_string(),
            "words.txt"
        );
    }
}
