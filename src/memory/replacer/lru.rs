//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use log::debug;

use super::{farthest, Policy, Replacer};
use crate::common::{FrameId, PageId};
use crate::memory::{FrameTable, ReferenceSequence};

/// Evicts the resident page whose most recent access is oldest.
///
/// Keeps, per resident page, the position of its last access. On a fault
/// with a full table the backward distance `position - last_access` is
/// computed for each resident page; a page with no recorded access counts
/// as infinitely old. The strictly largest distance wins; ties go to the
/// lowest slot.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Position of the most recent access, per resident page.
    last_access: HashMap<PageId, usize>,
}

impl LruReplacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for LruReplacer {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn record_access(&mut self, page: PageId, position: usize) {
        self.last_access.insert(page, position);
    }

    fn select_slot(
        &mut self,
        table: &FrameTable,
        _refs: &ReferenceSequence,
        position: usize,
    ) -> FrameId {
        if let Some(free) = table.first_empty() {
            return free;
        }

        let candidates = table.resident().map(|(frame_id, page)| {
            let distance = self
                .last_access
                .get(&page)
                .map_or(usize::MAX, |&last| position - last);
            (frame_id, distance)
        });

        match farthest(candidates) {
            Some((victim, distance)) => {
                if let Some(page) = table.slot_at(victim).page() {
                    self.last_access.remove(&page);
                    debug!(
                        "lru: access {} evicts page {} from {} (last used {} ago)",
                        position, page, victim, distance
                    );
                }
                victim
            }
            // Full tables always have a resident page; only a zero-slot
            // table lands here, which the simulator never builds.
            None => FrameId::new(0),
        }
    }
}
