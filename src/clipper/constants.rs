pub const UNASSIGNED: usize = usize::MAX;

// Largest coordinate magnitude for which every sweep predicate stays exact in i128.
pub const HI_RANGE: i64 = (1 << 38) - 1;

pub const MAX_SPLIT_PASSES: usize = 64;
