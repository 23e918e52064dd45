// crates/rosterfind-core/src/probe.rs
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One record as the roster displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// Display name exactly as returned; normalization happens downstream.
    pub raw_name: String,
    /// The ID the roster displays for this record. May differ from the
    /// probed key (the source re-keys some entries) and is the value that
    /// ends up in reports.
    pub display_key: String,
}

/// Outcome of probing a single numeric key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeResult {
    /// The key is inside the valid range but the roster holds nothing
    /// there. Carries no ordering information.
    Empty,
    Record(RosterRecord),
}

/// A source of roster records, one key per round trip.
///
/// Implementations wrap whatever actually fetches the record — the
/// bundled HTTP client, a headless browser session, or an in-memory
/// fixture in tests. The engine never assumes how.
///
/// `probe` takes `&mut self` because the typical implementation is a
/// single stateful session that cannot serve concurrent requests; the
/// engine is strictly sequential for the same reason.
pub trait ProbeSource {
    /// Fetch the record at `key`, or [`ProbeResult::Empty`] when the
    /// roster has none. A round trip that cannot complete (timeout,
    /// transport failure) is an `Err`, never `Empty`.
    fn probe(&mut self, key: u32) -> Result<ProbeResult>;
}

/// Adapter turning a closure into a probe source; handy for fixtures.
pub struct FnProbe<F>(pub F);

impl<F> ProbeSource for FnProbe<F>
where
    F: FnMut(u32) -> Result<ProbeResult>,
{
    fn probe(&mut self, key: u32) -> Result<ProbeResult> {
        (self.0)(key)
    }
}

impl ProbeResult {
    pub fn record(raw_name: impl Into<String>, display_key: impl Into<String>) -> Self {
        ProbeResult::Record(RosterRecord {
            raw_name: raw_name.into(),
            display_key: display_key.into(),
        })
    }
}
