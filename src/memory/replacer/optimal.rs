//! Optimal (clairvoyant) replacement policy.

use log::debug;

use super::{farthest, Policy, Replacer};
use crate::common::FrameId;
use crate::memory::{FrameTable, ReferenceSequence};

/// Evicts the resident page whose next use lies farthest ahead.
///
/// Needs the whole remaining reference sequence, so it only exists in
/// simulation, as the lower bound the other policies are measured against.
///
/// # Eviction
/// While a slot is empty the faulting page takes the first empty slot.
/// Once the table is full, every resident page is scanned forward from the
/// current position. A page that never appears again gets the maximal
/// distance and is evicted before any page that recurs. The strictly
/// largest distance wins; ties go to the lowest slot.
#[derive(Debug, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for OptimalReplacer {
    fn policy(&self) -> Policy {
        Policy::Optimal
    }

    fn select_slot(
        &mut self,
        table: &FrameTable,
        refs: &ReferenceSequence,
        position: usize,
    ) -> FrameId {
        if let Some(free) = table.first_empty() {
            return free;
        }

        let candidates = table.resident().map(|(frame_id, page)| {
            let distance = refs
                .next_use(page, position)
                .map_or(usize::MAX, |next| next - position);
            (frame_id, distance)
        });

        match farthest(candidates) {
            Some((victim, distance)) => {
                debug!(
                    "optimal: access {} evicts {:?} from {} (next use in {})",
                    position,
                    table.slot_at(victim).page(),
                    victim,
                    if distance == usize::MAX {
                        "never".to_string()
                    } else {
                        distance.to_string()
                    }
                );
                victim
            }
            // Full tables always have a resident page; only a zero-slot
            // table lands here, which the simulator never builds.
            None => FrameId::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    fn table_with(pages: &[u32]) -> FrameTable {
        let mut table = FrameTable::new(pages.len());
        for (idx, &page) in pages.iter().enumerate() {
            table.place(FrameId::new(idx), PageId::new(page));
        }
        table
    }

    #[test]
    fn test_optimal_fills_empty_first() {
        let mut replacer = OptimalReplacer::new();
        let mut table = FrameTable::new(3);
        table.place(FrameId::new(0), PageId::new(1));
        let refs = ReferenceSequence::from(vec![1, 2]);

        assert_eq!(replacer.select_slot(&table, &refs, 1), FrameId::new(1));
    }

    #[test]
    fn test_optimal_evicts_farthest_next_use() {
        let mut replacer = OptimalReplacer::new();
        let table = table_with(&[1, 2, 3]);
        // At position 3 (page 4): 2 is used next at 4, 1 at 6, 3 at 5
        let refs = ReferenceSequence::from(vec![1, 2, 3, 4, 2, 3, 1]);

        assert_eq!(replacer.select_slot(&table, &refs, 3), FrameId::new(0));
    }

    #[test]
    fn test_optimal_prefers_never_used_again() {
        let mut replacer = OptimalReplacer::new();
        let table = table_with(&[1, 2, 3]);
        // Page 2 never recurs; page 1 recurs far away
        let refs = ReferenceSequence::from(vec![1, 2, 3, 4, 3, 4, 3, 4, 1]);

        assert_eq!(replacer.select_slot(&table, &refs, 3), FrameId::new(1));
    }

    #[test]
    fn test_optimal_tie_goes_to_lowest_slot() {
        let mut replacer = OptimalReplacer::new();
        let table = table_with(&[1, 2, 3]);
        // Neither 2 nor 3 recurs after position 3
        let refs = ReferenceSequence::from(vec![1, 2, 3, 4, 1]);

        assert_eq!(replacer.select_slot(&table, &refs, 3), FrameId::new(1));
    }

    #[test]
    fn test_optimal_at_last_access() {
        let mut replacer = OptimalReplacer::new();
        let table = table_with(&[1, 2]);
        let refs = ReferenceSequence::from(vec![1, 2, 3]);

        // Nothing recurs, so slot 0 wins the tie
        assert_eq!(replacer.select_slot(&table, &refs, 2), FrameId::new(0));
    }
}
