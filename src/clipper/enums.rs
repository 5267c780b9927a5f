#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyFillType {
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

impl PolyFillType {
    #[inline(always)]
    pub fn is_filled(self, wind_cnt: i32) -> bool {
        match self {
            PolyFillType::EvenOdd => wind_cnt % 2 != 0,
            PolyFillType::NonZero => wind_cnt != 0,
            PolyFillType::Positive => wind_cnt > 0,
            PolyFillType::Negative => wind_cnt < 0,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(PolyFillType::EvenOdd),
            1 => Some(PolyFillType::NonZero),
            2 => Some(PolyFillType::Positive),
            3 => Some(PolyFillType::Negative),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

impl PolyType {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

impl ClipType {
    /// Combines the subject and clip memberships of a region.
    #[inline(always)]
    pub fn apply(self, in_subject: bool, in_clip: bool) -> bool {
        match self {
            ClipType::Intersection => in_subject && in_clip,
            ClipType::Union => in_subject || in_clip,
            ClipType::Difference => in_subject && !in_clip,
            ClipType::Xor => in_subject != in_clip,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ClipType::Intersection),
            1 => Some(ClipType::Union),
            2 => Some(ClipType::Difference),
            3 => Some(ClipType::Xor),
            _ => None,
        }
    }
}

/// How a merged edge takes part in the result boundary.
///
/// `Forward` runs from the edge's bottom to its top (left to right for
/// horizontals), `Reverse` the other way; either way the filled region is on
/// the left of the emitted fragment.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum EdgeSide {
    Unvisited = 0,
    Inner = 1,
    Forward = 2,
    Reverse = 3,
}

impl EdgeSide {
    #[inline(always)]
    pub fn from_fill(left_or_below: bool, right_or_above: bool, is_horizontal: bool) -> Self {
        if left_or_below == right_or_above {
            return EdgeSide::Inner;
        }

        // non-horizontal: inside on the left walks upwards
        // horizontal: inside above walks to the right
        let forward = if is_horizontal { right_or_above } else { left_or_below };
        if forward {
            EdgeSide::Forward
        } else {
            EdgeSide::Reverse
        }
    }
}
