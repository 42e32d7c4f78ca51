//! Fault statistics for a simulation run.

use std::fmt;

/// Counters kept while a policy processes a reference sequence.
///
/// A run is single-threaded, so these are plain integers. Every access is
/// either a hit or a fault; a fault that overwrote an occupied slot is also
/// an eviction.
///
/// # Example
/// ```
/// use pagerep::FaultStats;
///
/// let mut stats = FaultStats::new();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.faults, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaultStats {
    /// Accesses to a page that was not resident.
    pub faults: u64,

    /// Accesses to a page that was already resident.
    pub hits: u64,

    /// Faults that replaced a resident page.
    pub evictions: u64,
}

impl FaultStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Count a fault; `evicted` is true when an occupied slot was overwritten.
    pub fn record_fault(&mut self, evicted: bool) {
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Total accesses seen.
    pub fn accesses(&self) -> u64 {
        self.faults + self.hits
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
