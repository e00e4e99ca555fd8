use crate::core::canonical::is_valid;
use crate::core::index::AnagramIndex;
use crate::core::types::{CanonicalKey, LoadReport, Solution};
use crate::dictionary::{self, Source};
use crate::error::{AnagramError, Result};
use std::path::Path;

/// Word solved when none is given.
pub const DEFAULT_WORD: &str = "live";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Leave the query word itself out of the results.
    pub exclude_self: bool,
    /// Reject query words that fail `is_valid` instead of returning nothing.
    pub strict: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            exclude_self: true,
            strict: true,
        }
    }
}

// The solver owns a dictionary and answers one query at a time.
pub struct Solver {
    index: AnagramIndex,
    source: Source,
    report: Option<LoadReport>,
    options: SolverOptions,
}

impl Solver {
    pub fn new(index: AnagramIndex, source: Source, options: SolverOptions) -> Self {
        Self {
            index,
            source,
            report: None,
            options,
        }
    }

    pub fn from_sample(options: SolverOptions) -> Self {
        Self::new(dictionary::sample(), Source::Sample, options)
    }

    pub fn from_path(path: impl AsRef<Path>, options: SolverOptions) -> Result<Self> {
        let path = path.as_ref();
        let (index, report) = dictionary::load_path(path)?;
        let mut solver = Self::new(index, Source::File(path.to_path_buf()), options);
        solver.report = Some(report);
        Ok(solver)
    }

    pub fn index(&self) -> &AnagramIndex {
        &self.index
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Tally of the file load. `None` for an index handed in directly.
    pub fn load_report(&self) -> Option<&LoadReport> {
        self.report.as_ref()
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    pub fn solve(&self, word: &str) -> Result<Solution> {
        let dictionary_size = self.index.size();
        log::info!("There are {} words in your dictionary", dictionary_size);

        if self.options.strict && !is_valid(word) {
            log::debug!("solver: rejecting {:?}", word);
            return Err(AnagramError::invalid(word));
        }

        log::info!("Finding anagrams for {}", word);
        let anagrams = self.index.find_anagrams(word, self.options.exclude_self);
        log::info!("{} anagrams found", anagrams.len());

        Ok(Solution {
            word: word.to_string(),
            key: CanonicalKey::of(word),
            anagrams,
            dictionary_size,
        })
    }
}
