//! Run statistics, threaded explicitly through the driver instead of kept
//! as global mutable state.

/// Per-run diagnostic counters, reported via `-v`/end-of-stream summary
/// logging rather than printed directly.
#[derive(Debug, Default, Clone)]
pub struct Counters {
    pub generated_orientations: u64,
    pub most_generated_orientations: u64,
    pub stored_bitsets: u64,
    pub most_stored_bitsets: u64,
    pub orientations_giving_subset: u64,
    pub orientations_giving_superset: u64,
    pub empty_bitsets_stored: u64,
    pub complementary_bitsets: u64,
    pub graphs_satisfying_oddness_condition: u64,
    pub graphs_not_satisfying_oddness_condition: u64,
    pub graphs_satisfying_first_oddness: u64,
    pub graphs_satisfying_second_oddness: u64,
    pub total_orientations_generated: u64,
    pub graphs_checked: u64,
    pub graphs_passed: u64,
    pub graphs_skipped: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note_pool_size(&mut self, size: u64) {
        self.stored_bitsets = size;
        self.most_stored_bitsets = self.most_stored_bitsets.max(size);
    }

    pub fn note_generated_orientation(&mut self) {
        self.generated_orientations += 1;
        self.most_generated_orientations = self.most_generated_orientations.max(self.generated_orientations);
    }

    pub fn reset_per_graph(&mut self) {
        self.generated_orientations = 0;
        self.stored_bitsets = 0;
        self.total_orientations_generated = 0;
    }
}
