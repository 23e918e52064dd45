// crates/rosterfind-core/src/report.rs
use crate::error::Result;
use crate::search::{SearchOutcome, SearchRequest};
use chrono::Local;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sink for terminal search outcomes. The engine hands every outcome to
/// one of these; what persistence means (text file, JSON, database) is
/// the implementation's business.
pub trait ResultReporter {
    /// Persist the outcome, returning where it landed.
    fn report(&self, request: &SearchRequest, outcome: &SearchOutcome) -> Result<PathBuf>;
}

/// Writes a timestamped plain-text report into a results directory,
/// creating the directory on first use.
pub struct TextReporter {
    dir: PathBuf,
}

impl TextReporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        TextReporter { dir: dir.into() }
    }

    fn filename(outcome: &SearchOutcome) -> String {
        let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        match outcome {
            SearchOutcome::Found(found) => format!("record_{}_{stamp}.txt", found.display_key),
            SearchOutcome::Exhausted { .. } => format!("not_found_{stamp}.txt"),
            SearchOutcome::Cancelled { .. } => format!("cancelled_{stamp}.txt"),
        }
    }
}

impl ResultReporter for TextReporter {
    fn report(&self, request: &SearchRequest, outcome: &SearchOutcome) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(Self::filename(outcome));
        let mut out = BufWriter::new(File::create(&path)?);

        writeln!(out, "ROSTER SEARCH REPORT")?;
        writeln!(out, "====================")?;
        writeln!(out)?;
        writeln!(out, "Date: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(out, "Target: {}", request.target_name())?;
        writeln!(out, "Key range: {}-{}", request.low, request.high)?;
        writeln!(out)?;

        match outcome {
            SearchOutcome::Found(found) => {
                writeln!(out, "Result: FOUND")?;
                writeln!(out, "Full name: {}", found.full_name)?;
                writeln!(out, "Displayed ID: {}", found.display_key)?;
                writeln!(out, "Probed key: {}", found.probed_key)?;
            }
            SearchOutcome::Exhausted { .. } => {
                writeln!(out, "Result: NOT FOUND")?;
                writeln!(out, "The range was fully narrowed without a match.")?;
                writeln!(out, "Check the spelling against the roster and the key bounds.")?;
            }
            SearchOutcome::Cancelled { .. } => {
                writeln!(out, "Result: CANCELLED")?;
            }
        }

        let attempts = outcome.attempts();
        writeln!(out)?;
        writeln!(out, "Attempts: {attempts}")?;
        writeln!(out, "Elapsed: {:.1}s", outcome.elapsed().as_secs_f64())?;
        if attempts > 0 {
            let span = (request.high - request.low + 1) as f64;
            writeln!(
                out,
                "Efficiency: {:.1}x fewer probes than a linear scan",
                span / attempts as f64
            )?;
        }
        out.flush()?;

        tracing::info!(path = %path.display(), "report written");
        Ok(path)
    }
}

impl TextReporter {
    /// Directory reports land in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FoundRecord;
    use std::time::Duration;

    #[test]
    fn found_report_contains_name_key_and_attempts() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = TextReporter::new(dir.path());
        let request = SearchRequest::new("احمد", "علي").with_bounds(1, 100);
        let outcome = SearchOutcome::Found(FoundRecord {
            full_name: "احمد علي حسن".into(),
            display_key: "45120".into(),
            probed_key: 42,
            attempts: 7,
            elapsed: Duration::from_secs(9),
        });

        let path = reporter.report(&request, &outcome).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("احمد علي حسن"));
        assert!(body.contains("45120"));
        assert!(body.contains("Attempts: 7"));
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("record_45120_"));
    }

    #[test]
    fn exhausted_report_says_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = TextReporter::new(dir.path());
        let request = SearchRequest::new("احمد", "علي").with_bounds(1, 10);
        let outcome = SearchOutcome::Exhausted {
            attempts: 4,
            elapsed: Duration::from_secs(3),
        };

        let path = reporter.report(&request, &outcome).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("NOT FOUND"));
        assert!(body.contains("Attempts: 4"));
    }

    #[test]
    fn creates_the_results_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("results").join("deep");
        let reporter = TextReporter::new(&nested);
        let request = SearchRequest::new("احمد", "علي").with_bounds(1, 10);
        let outcome = SearchOutcome::Cancelled {
            attempts: 0,
            elapsed: Duration::ZERO,
        };

        reporter.report(&request, &outcome).unwrap();
        assert!(nested.is_dir());
    }
}
