// crates/rosterfind-core/src/audit.rs
//
// Binary search is only as good as the assumption that roster names are
// stored in collation order as the numeric key grows. That assumption is
// inherited, not guaranteed; this module checks it against a live source
// before anyone trusts the engine's answers.

use crate::alphabet::Alphabet;
use crate::collate::Collator;
use crate::error::{Result, RosterError};
use crate::probe::{ProbeResult, ProbeSource};
use serde::Serialize;
use std::cmp::Ordering;

/// Two adjacent sampled records that are out of collation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderInversion {
    pub prev_key: u32,
    pub prev_name: String,
    pub key: u32,
    pub name: String,
}

/// Result of an ordering scan over a sampled key range.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Probes issued.
    pub probed: u32,
    /// Keys that held a record.
    pub records: u32,
    /// Keys that held nothing.
    pub empty: u32,
    pub inversions: Vec<OrderInversion>,
}

impl AuditReport {
    /// True when every sampled pair was in order. Only then is the
    /// engine's range narrowing trustworthy on this source.
    pub fn is_monotonic(&self) -> bool {
        self.inversions.is_empty()
    }
}

/// Probe an evenly spaced sample of keys in `[low, high]` and check that
/// consecutive non-empty records come back in non-decreasing collation
/// order. `samples` caps the number of probes; the step never drops
/// below one key.
///
/// Probe failures propagate immediately; an audit run with a flaky
/// source proves nothing either way.
pub fn scan(
    source: &mut dyn ProbeSource,
    alphabet: &Alphabet,
    low: u32,
    high: u32,
    samples: u32,
) -> Result<AuditReport> {
    if low > high {
        return Err(RosterError::InvalidRange { low, high });
    }
    let collator = Collator::new(alphabet);
    let span = high - low + 1;
    let step = (span / samples.max(1)).max(1);

    let mut report = AuditReport {
        probed: 0,
        records: 0,
        empty: 0,
        inversions: Vec::new(),
    };
    let mut prev: Option<(u32, String)> = None;

    let mut key = low;
    loop {
        report.probed += 1;
        match source.probe(key)? {
            ProbeResult::Empty => {
                report.empty += 1;
                tracing::debug!(key, "audit: empty slot");
            }
            ProbeResult::Record(record) => {
                report.records += 1;
                if let Some((prev_key, prev_name)) = &prev {
                    if collator.compare(prev_name, &record.raw_name) == Ordering::Greater {
                        tracing::warn!(
                            prev_key,
                            prev_name = %prev_name,
                            key,
                            name = %record.raw_name,
                            "audit: ordering inversion"
                        );
                        report.inversions.push(OrderInversion {
                            prev_key: *prev_key,
                            prev_name: prev_name.clone(),
                            key,
                            name: record.raw_name.clone(),
                        });
                    }
                }
                prev = Some((key, record.raw_name));
            }
        }

        match key.checked_add(step) {
            Some(next) if next <= high => key = next,
            _ => break,
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{FnProbe, ProbeResult};

    fn fixture(
        names: &'static [&'static str],
    ) -> FnProbe<impl FnMut(u32) -> Result<ProbeResult>> {
        FnProbe(move |key: u32| {
            Ok(names
                .get((key - 1) as usize)
                .map(|name| ProbeResult::record(*name, key.to_string()))
                .unwrap_or(ProbeResult::Empty))
        })
    }

    #[test]
    fn ordered_roster_passes() {
        let mut source = fixture(&["احمد علي", "باسم عمر", "جمال سعيد", "خالد يوسف"]);
        let report = scan(&mut source, Alphabet::arabic(), 1, 4, 4).unwrap();
        assert!(report.is_monotonic());
        assert_eq!(report.records, 4);
    }

    #[test]
    fn shuffled_roster_is_flagged() {
        let mut source = fixture(&["خالد يوسف", "احمد علي", "باسم عمر", "جمال سعيد"]);
        let report = scan(&mut source, Alphabet::arabic(), 1, 4, 4).unwrap();
        assert!(!report.is_monotonic());
        assert_eq!(report.inversions[0].prev_key, 1);
        assert_eq!(report.inversions[0].key, 2);
    }

    #[test]
    fn empty_slots_are_counted_not_flagged() {
        let mut source = FnProbe(|key: u32| {
            Ok(match key {
                1 => ProbeResult::record("احمد علي", "1"),
                3 => ProbeResult::record("جمال سعيد", "3"),
                _ => ProbeResult::Empty,
            })
        });
        let report = scan(&mut source, Alphabet::arabic(), 1, 4, 4).unwrap();
        assert!(report.is_monotonic());
        assert_eq!(report.empty, 2);
        assert_eq!(report.records, 2);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut source = fixture(&[]);
        assert!(matches!(
            scan(&mut source, Alphabet::arabic(), 9, 3, 4),
            Err(RosterError::InvalidRange { .. })
        ));
    }
}
