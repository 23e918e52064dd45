// crates/rosterfind-core/src/lib.rs

pub mod alphabet;
pub mod audit;
#[cfg(feature = "client")]
pub mod client; // The HTTP probe (feature gated)
pub mod collate;
pub mod error;
pub mod probe;
pub mod report;
pub mod search; // The engine
pub mod text; // Normalization + matching helpers

// Re-exports
pub use crate::alphabet::{Alphabet, Ordinal};
pub use crate::audit::{AuditReport, OrderInversion};
#[cfg(feature = "client")]
pub use crate::client::{HttpProbe, HttpProbeConfig};
pub use crate::collate::Collator;
pub use crate::error::{Result, RosterError};
pub use crate::probe::{FnProbe, ProbeResult, ProbeSource, RosterRecord};
pub use crate::report::{ResultReporter, TextReporter};
pub use crate::search::{
    FoundRecord, SearchConfig, SearchEngine, SearchOutcome, SearchRequest,
};
pub use crate::text::{name_key, names_match, normalize};
