// crates/rosterfind-core/src/search.rs
use crate::alphabet::Alphabet;
use crate::collate::Collator;
use crate::error::{Result, RosterError};
use crate::probe::{ProbeResult, ProbeSource};
use crate::text::{names_match, normalize};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Known valid roster key bounds, used when a request does not override
/// them.
pub const DEFAULT_LOW_KEY: u32 = 45_001;
pub const DEFAULT_HIGH_KEY: u32 = 46_900;

// -----------------------------------------------------------------------------
// REQUEST / CONFIG
// -----------------------------------------------------------------------------

/// One search: who to look for and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub first_name: String,
    pub last_name: String,
    /// Inclusive key bounds.
    pub low: u32,
    pub high: u32,
}

impl SearchRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        SearchRequest {
            first_name: first_name.into(),
            last_name: last_name.into(),
            low: DEFAULT_LOW_KEY,
            high: DEFAULT_HIGH_KEY,
        }
    }

    pub fn with_bounds(mut self, low: u32, high: u32) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// The full target name the matcher and collator see.
    pub fn target_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    fn validate(&self) -> Result<()> {
        if self.low > self.high {
            return Err(RosterError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        if normalize(&self.target_name()).is_empty() {
            return Err(RosterError::EmptyTarget);
        }
        Ok(())
    }
}

/// Engine knobs. The defaults match the cadence the roster tolerates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Extra same-key attempts after a failed probe round trip before the
    /// failure is surfaced to the caller.
    pub probe_retries: u32,
    /// Courtesy pause between iterations, also applied before a retry.
    /// Zero disables pacing (tests).
    pub pause: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            probe_retries: 2,
            pause: Duration::from_millis(500),
        }
    }
}

// -----------------------------------------------------------------------------
// OUTCOMES
// -----------------------------------------------------------------------------

/// A confirmed hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundRecord {
    /// Full display name from the roster, untrimmed of extra tokens.
    pub full_name: String,
    /// The ID the roster displays; this is what gets reported, not the
    /// probed key.
    pub display_key: String,
    /// The numeric key whose probe produced the hit.
    pub probed_key: u32,
    pub attempts: u32,
    pub elapsed: Duration,
}

/// Terminal state of one search. Every variant carries the attempt count
/// and elapsed wall time; no outcome is discarded silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(FoundRecord),
    /// The range shrank to nothing without a match. A legitimate outcome,
    /// not an error.
    Exhausted { attempts: u32, elapsed: Duration },
    /// The operator aborted between probes.
    Cancelled { attempts: u32, elapsed: Duration },
}

impl SearchOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            SearchOutcome::Found(f) => f.attempts,
            SearchOutcome::Exhausted { attempts, .. }
            | SearchOutcome::Cancelled { attempts, .. } => *attempts,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            SearchOutcome::Found(f) => f.elapsed,
            SearchOutcome::Exhausted { elapsed, .. }
            | SearchOutcome::Cancelled { elapsed, .. } => *elapsed,
        }
    }
}

// -----------------------------------------------------------------------------
// ENGINE
// -----------------------------------------------------------------------------

/// Adaptive binary search over the key range.
///
/// The loop is strictly sequential: one probe in flight, its result
/// decides the next. Per iteration it probes the floor midpoint, then
/// either terminates on a name match, advances `low` past an empty slot,
/// or halves the range by collation order.
///
/// Empty slots always advance `low`, never `high`. If empty keys can sit
/// on either side of the target this can skip past it; that is a known
/// limitation of the narrowing policy, kept deliberately.
pub struct SearchEngine<'a> {
    collator: Collator<'a>,
    config: SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> SearchEngine<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        SearchEngine {
            collator: Collator::new(alphabet),
            config: SearchConfig::default(),
            cancel: None,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Install an abort flag. The engine checks it between probes, never
    /// mid-probe; a set flag yields [`SearchOutcome::Cancelled`] with the
    /// attempts made so far.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Run one search to a terminal outcome.
    ///
    /// Errors: [`RosterError::InvalidRange`] / [`RosterError::EmptyTarget`]
    /// before the first probe, and [`RosterError::ProbeFailed`] when a key
    /// cannot be probed even after the configured retries. A probe failure
    /// leaves the range untouched and is never folded into "empty slot".
    pub fn run(
        &self,
        source: &mut dyn ProbeSource,
        request: &SearchRequest,
    ) -> Result<SearchOutcome> {
        request.validate()?;

        let target = request.target_name();
        let started = Instant::now();
        let mut low = request.low;
        let mut high = request.high;
        let mut attempts: u32 = 0;

        tracing::info!(target_name = %target, low, high, "starting adaptive search");

        while low <= high {
            if self.is_cancelled() {
                tracing::info!(attempts, "search cancelled");
                return Ok(SearchOutcome::Cancelled {
                    attempts,
                    elapsed: started.elapsed(),
                });
            }

            // Floor midpoint; overflow-safe for any u32 bounds.
            let mid = low + (high - low) / 2;
            attempts += 1;

            match self.probe_with_retry(source, mid)? {
                ProbeResult::Empty => {
                    tracing::info!(attempt = attempts, key = mid, "empty slot, advancing low");
                    low = mid + 1;
                }
                ProbeResult::Record(record) => {
                    if names_match(&target, &record.raw_name) {
                        let found = FoundRecord {
                            full_name: record.raw_name,
                            display_key: record.display_key,
                            probed_key: mid,
                            attempts,
                            elapsed: started.elapsed(),
                        };
                        tracing::info!(
                            name = %found.full_name,
                            key = %found.display_key,
                            attempts,
                            "match confirmed"
                        );
                        return Ok(SearchOutcome::Found(found));
                    }

                    match self.collator.compare(&record.raw_name, &target) {
                        Ordering::Less => low = mid + 1,
                        _ => {
                            if mid == 0 {
                                break;
                            }
                            high = mid - 1;
                        }
                    }
                    tracing::info!(
                        attempt = attempts,
                        key = mid,
                        name = %record.raw_name,
                        low,
                        high,
                        "narrowed range"
                    );
                }
            }

            if low <= high {
                self.pace();
            }
        }

        tracing::info!(attempts, "range exhausted without a match");
        Ok(SearchOutcome::Exhausted {
            attempts,
            elapsed: started.elapsed(),
        })
    }

    /// Probe one key, retrying the same key a bounded number of times.
    /// Retries exist for transient transport hiccups; a key that stays
    /// unreachable is surfaced distinctly so an outage never reads as a
    /// missing record.
    fn probe_with_retry(
        &self,
        source: &mut dyn ProbeSource,
        key: u32,
    ) -> Result<ProbeResult> {
        let mut tried: u32 = 0;
        loop {
            match source.probe(key) {
                Ok(result) => return Ok(result),
                Err(err) => {
                    tried += 1;
                    if tried > self.config.probe_retries {
                        return Err(RosterError::ProbeFailed {
                            key,
                            attempts: tried,
                            source: Box::new(err),
                        });
                    }
                    tracing::warn!(key, attempt = tried, error = %err, "probe failed, retrying");
                    self.pace();
                }
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(AtomicOrdering::Relaxed))
    }

    fn pace(&self) {
        if !self.config.pause.is_zero() {
            std::thread::sleep(self.config.pause);
        }
    }
}
