//! Markup regression testing via snapshot comparison.
//!
//! Baselines are pretty-printed HTML under `tests/snapshots/`, relative to
//! the crate running the test. A missing baseline fails the test;
//! `SNAPSHOT_UPDATE=1` records new baselines and overwrites existing ones.

use segmenta_core::Node;
use std::fs;
use std::path::Path;

const SNAPSHOT_DIR: &str = "tests/snapshots";

/// Snapshot comparison utilities.
pub struct Snapshot;

impl Snapshot {
    /// Compare rendered markup against its baseline.
    ///
    /// # Panics
    ///
    /// Panics if the markup differs from the baseline or no baseline exists.
    pub fn assert_match(name: &str, actual: &Node) {
        Self::assert_text_match(name, &actual.to_pretty_html());
    }

    /// Compare arbitrary text against its baseline.
    ///
    /// # Panics
    ///
    /// Panics if the text differs from the baseline or no baseline exists.
    pub fn assert_text_match(name: &str, actual: &str) {
        let update = std::env::var_os("SNAPSHOT_UPDATE").is_some();
        Self::check(Path::new(SNAPSHOT_DIR), name, actual, update);
    }

    fn check(dir: &Path, name: &str, actual: &str, update: bool) {
        let baseline_path = dir.join(format!("{name}.html"));

        match fs::read_to_string(&baseline_path) {
            Ok(baseline) if !update => {
                if let Some(line) = Self::first_difference(&baseline, actual) {
                    let actual_path = dir.join(format!("{name}.actual.html"));
                    Self::save(&actual_path, actual);
                    panic!(
                        "Snapshot mismatch '{}' at line {}\n\
                         Baseline: {}\n\
                         Actual: {}",
                        name,
                        line,
                        baseline_path.display(),
                        actual_path.display()
                    );
                }
            }
            _ if update => {
                Self::save(&baseline_path, actual);
                println!("Recorded baseline: {}", baseline_path.display());
            }
            _ => panic!(
                "No baseline found for '{}'. Run with SNAPSHOT_UPDATE=1 to create.\n\
                 Expected path: {}",
                name,
                baseline_path.display()
            ),
        }
    }

    /// One-based line number of the first difference, ignoring a trailing
    /// newline mismatch.
    #[must_use]
    pub fn first_difference(baseline: &str, actual: &str) -> Option<usize> {
        let mut expected = baseline.trim_end().lines();
        let mut got = actual.trim_end().lines();
        let mut line = 1;
        loop {
            match (expected.next(), got.next()) {
                (None, None) => return None,
                (a, b) if a == b => line += 1,
                _ => return Some(line),
            }
        }
    }

    fn save(path: &Path, contents: &str) {
        if let Some(dir) = path.parent() {
            if let Err(err) = fs::create_dir_all(dir) {
                panic!("cannot create {}: {err}", dir.display());
            }
        }
        if let Err(err) = fs::write(path, contents) {
            panic!("cannot write {}: {err}", path.display());
        }
    }
}
