//! Per-file scanning and key provenance.
//!
//! Scans stream a decoded file line by line (1-based counter) and feed the
//! extraction rules. Every accepted key records where it was seen in a
//! [`ProvenanceIndex`], which accumulates across the whole run and is only
//! ever added to, so re-scanning a file is idempotent.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::encoding;
use crate::extract::{extract_code_keys, extract_table_key, is_comment_line};

/// A single sighting of a key: file path plus 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub path: PathBuf,
    pub line: usize,
}

/// Key → set of sightings. Two indexes are kept per run, one for keys found
/// in source code and one for keys found in translation tables.
#[derive(Debug, Default)]
pub struct ProvenanceIndex {
    entries: HashMap<String, HashSet<Occurrence>>,
}

impl ProvenanceIndex {
    pub fn record(&mut self, key: &str, path: &Path, line: usize) {
        self.entries.entry(key.to_owned()).or_default().insert(Occurrence {
            path: path.to_owned(),
            line,
        });
    }

    pub fn occurrences(&self, key: &str) -> Option<&HashSet<Occurrence>> {
        self.entries.get(key)
    }
}

/// A duplicate declaration found while scanning a table: the line of the
/// second (or later) sighting within that file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    pub line: usize,
}

/// Result of scanning one `.strings` file.
#[derive(Debug)]
pub struct TableScan {
    pub keys: HashSet<String>,
    pub duplicates: Vec<DuplicateKey>,
}

/// Scan a `.strings` file for key declarations.
///
/// The first sighting of a key in this file enters the key set and the
/// provenance index; a repeat sighting becomes a [`DuplicateKey`] and is
/// neither re-added nor re-recorded. Reporting duplicates is left to the
/// caller so that re-scans of the same file do not re-report them.
pub fn scan_table_file(path: &Path, index: &mut ProvenanceIndex) -> Result<TableScan> {
    let text = encoding::read_to_string(path)?;

    let mut keys: HashSet<String> = HashSet::new();
    let mut duplicates: Vec<DuplicateKey> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;

        if is_comment_line(line) {
            continue;
        }
        let Some(key) = extract_table_key(line) else {
            continue;
        };

        if keys.contains(key) {
            duplicates.push(DuplicateKey {
                key: key.to_owned(),
                line: line_number,
            });
            continue;
        }

        keys.insert(key.to_owned());
        index.record(key, path, line_number);
    }

    Ok(TableScan { keys, duplicates })
}

/// Scan a source file for localization calls, returning the union of keys
/// found. Every key sighting is recorded in the code provenance index.
pub fn scan_code_file(path: &Path, index: &mut ProvenanceIndex) -> Result<HashSet<String>> {
    let text = encoding::read_to_string(path)?;

    let mut keys: HashSet<String> = HashSet::new();

    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;

        if is_comment_line(line) {
            continue;
        }

        for key in extract_code_keys(line) {
            index.record(key, path, line_number);
            keys.insert(key.to_owned());
        }
    }

    Ok(keys)
}
