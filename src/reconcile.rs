//! Set reconciliation across source files and translation tables.
//!
//! One pass over the project collects the keys referenced in code and the
//! project-wide baseline of declared keys; each `Localizable.strings` is then
//! diffed against both. Tables are deliberately re-scanned per diff rather
//! than cached: project trees are small next to a build, and the scans are
//! idempotent.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use crate::report::Reporter;
use crate::scanner::{ProvenanceIndex, scan_code_file, scan_table_file};
use crate::walker::files_matching;

/// The canonical table filename checked across all language variants.
pub const TABLE_FILE_NAME: &str = "Localizable.strings";

/// Recognized source file suffixes.
pub const SOURCE_SUFFIXES: &[&str] = &[".m", ".swift"];

fn is_source_file(name: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

fn is_table_file(name: &str) -> bool {
    name == TABLE_FILE_NAME
}

/// Provenance for the whole run, threaded through every scan call. Both
/// indexes are additive for the duration of the reconciliation.
#[derive(Debug, Default)]
struct ScanState {
    code: ProvenanceIndex,
    tables: ProvenanceIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The warning cap tripped; remaining findings were not reported.
    WarningCapReached,
}

/// The language variant a table belongs to: the name of the nearest ancestor
/// directory ending in `.lproj`, e.g. `en.lproj`.
pub fn language_variant(path: &Path) -> Option<&str> {
    path.ancestors().skip(1).find_map(|ancestor| {
        ancestor
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| name.ends_with(".lproj"))
    })
}

/// Scan the whole project under `root` and report every finding.
///
/// Duplicate-key errors are reported while the project baseline is built;
/// missing/unused/project-missing warnings per table afterwards. The warning
/// cap is checked before each missing or unused key (project-missing
/// warnings are exempt from the cap, matching long-standing behavior); when
/// it trips, reporting stops immediately.
pub fn reconcile(
    root: &Path,
    exclude_dirs: &HashSet<String>,
    reporter: &mut Reporter,
    verbose: bool,
) -> Result<Outcome> {
    let mut state = ScanState::default();

    // Keys referenced anywhere in source code.
    let mut keys_in_code: HashSet<String> = HashSet::new();
    let mut source_file_count = 0usize;
    for path in files_matching(root, exclude_dirs, is_source_file) {
        keys_in_code.extend(scan_code_file(&path, &mut state.code)?);
        source_file_count += 1;
    }

    // Project-wide baseline: keys declared in any language variant.
    // Duplicate declarations are reported here, once per duplicate.
    let mut keys_in_project: HashSet<String> = HashSet::new();
    let mut table_file_count = 0usize;
    for path in files_matching(root, exclude_dirs, is_table_file) {
        let scan = scan_table_file(&path, &mut state.tables)?;
        for duplicate in &scan.duplicates {
            reporter.error(
                &path,
                duplicate.line,
                &format!("key already defined: \"{}\"", duplicate.key),
            );
        }
        keys_in_project.extend(scan.keys);
        table_file_count += 1;
    }

    if verbose {
        eprintln!(
            "scanned {} source file(s), {} translation table(s), {} key(s) in code, {} key(s) in project",
            source_file_count,
            table_file_count,
            keys_in_code.len(),
            keys_in_project.len()
        );
    }

    for path in files_matching(root, exclude_dirs, is_table_file) {
        // Re-scan; duplicates were already reported during the baseline pass.
        let scan = scan_table_file(&path, &mut state.tables)?;
        let language = language_variant(&path).unwrap_or("unknown");

        for key in keys_in_code.difference(&scan.keys) {
            if reporter.at_capacity() {
                return Ok(Outcome::WarningCapReached);
            }
            let message = format!("missing key in {language}: \"{key}\"");
            if let Some(occurrences) = state.code.occurrences(key) {
                for occurrence in occurrences {
                    reporter.warning(&occurrence.path, occurrence.line, &message);
                }
            }
        }

        for key in scan.keys.difference(&keys_in_code) {
            if reporter.at_capacity() {
                return Ok(Outcome::WarningCapReached);
            }
            let message = format!("unused key in {language}: \"{key}\"");
            if let Some(occurrences) = state.tables.occurrences(key) {
                for occurrence in occurrences {
                    reporter.warning(&occurrence.path, occurrence.line, &message);
                }
            }
        }

        for key in keys_in_project.difference(&scan.keys) {
            let message = format!("project missing key in {language}: \"{key}\"");
            if let Some(occurrences) = state.tables.occurrences(key) {
                for occurrence in occurrences {
                    reporter.warning(&occurrence.path, occurrence.line, &message);
                }
            }
        }
    }

    Ok(Outcome::Completed)
}
