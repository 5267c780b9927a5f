pub const DEFAULT_SCALE_EXPONENT: u8 = 4;

pub const MAX_SCALE_EXPONENT: u8 = 9;

// [outer_count, hole_count] precede the ring offsets of a packed result.
pub const RESULT_HEADER_SIZE: usize = 2;
