//! Loop detection over checkpoint states.

use std::collections::HashSet;

use crate::core::grid::WallBreak;
use crate::core::state::{BotState, StateKey};

/// Per-cell history of checkpoint states already seen.
///
/// Recorded history is only sound while the grid it was recorded against is
/// unchanged: breaking a wall alters the reachable-state space, so
/// [`LoopDetector::on_break`] discards everything. The reset is
/// conservative; it may forget true history but never reports a false loop.
#[derive(Debug)]
pub struct LoopDetector {
    cols: usize,
    seen: Vec<HashSet<StateKey>>,
}

impl LoopDetector {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            seen: vec![HashSet::new(); rows * cols],
        }
    }

    /// True if this exact configuration (position, facing, breaker,
    /// inversion) was recorded at an earlier checkpoint.
    pub fn observed(&self, state: &BotState) -> bool {
        self.seen[self.index(state)].contains(&state.key())
    }

    /// Record `state`'s configuration at its cell.
    pub fn record(&mut self, state: &BotState) {
        let idx = self.index(state);
        self.seen[idx].insert(state.key());
    }

    /// Drop all history: the grid mutated, so earlier observations no longer
    /// predict future behavior.
    pub fn on_break(&mut self, _event: &WallBreak) {
        for cell in &mut self.seen {
            cell.clear();
        }
    }

    fn index(&self, state: &BotState) -> usize {
        state.pos.y as usize * self.cols + state.pos.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Coordinate;
    use crate::test_support::start_state;

    #[test]
    fn record_then_observe() {
        let (_, state) = start_state(&["@  $"]);
        let mut detector = LoopDetector::new(1, 4);
        assert!(!detector.observed(&state));
        detector.record(&state);
        assert!(detector.observed(&state));
    }

    #[test]
    fn different_flags_are_different_configurations() {
        let (_, state) = start_state(&["@  $"]);
        let mut detector = LoopDetector::new(1, 4);
        detector.record(&state);

        let mut with_breaker = state;
        with_breaker.breaker = true;
        assert!(!detector.observed(&with_breaker));

        let mut inverted = state;
        inverted.inverted = true;
        assert!(!detector.observed(&inverted));
    }

    #[test]
    fn transient_teleport_flag_does_not_split_identity() {
        let (_, state) = start_state(&["@T T$"]);
        let mut detector = LoopDetector::new(1, 5);
        detector.record(&state);

        let mut landed = state;
        landed.just_teleported = true;
        assert!(detector.observed(&landed));
    }

    #[test]
    fn wall_break_clears_every_cell() {
        let (_, state) = start_state(&["@X $"]);
        let mut detector = LoopDetector::new(1, 4);
        let mut moved = state;
        moved.pos = Coordinate::new(2, 0);
        detector.record(&state);
        detector.record(&moved);

        detector.on_break(&WallBreak {
            pos: Coordinate::new(1, 0),
        });
        assert!(!detector.observed(&state));
        assert!(!detector.observed(&moved));
    }
}
