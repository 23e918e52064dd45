// crates/rosterfind-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Error taxonomy for the probe search.
///
/// An empty slot at a probed key is NOT an error; it is a regular
/// [`ProbeResult::Empty`](crate::probe::ProbeResult) that drives range
/// narrowing. Only conditions that stop a search from producing a terminal
/// outcome live here.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The requested key range was inverted before the search started.
    #[error("invalid key range: low {low} exceeds high {high}")]
    InvalidRange { low: u32, high: u32 },

    /// The search target normalized to an empty string.
    #[error("search target is empty after normalization")]
    EmptyTarget,

    /// A probe round trip could not complete even after bounded retries.
    /// Kept distinct from an empty slot so an outage never reads as
    /// "record not present".
    #[error("probe for key {key} failed after {attempts} attempt(s)")]
    ProbeFailed {
        key: u32,
        attempts: u32,
        #[source]
        source: Box<RosterError>,
    },

    #[error("i/o failure")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "client")]
    #[error("http transport error")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "client")]
    #[error("invalid extraction pattern")]
    Pattern(#[from] regex::Error),
}
