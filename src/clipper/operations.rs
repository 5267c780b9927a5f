use crate::clipper::clipper::Clipper;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::utils::clean_polygon;
use crate::error::{ClipperError, ClipperResult};
use crate::geometry::point::Point;
use crate::geometry::polygon::{is_clockwise, normalize_start, signed_area};

/// Rings of a finished operation split by orientation. Outer contours are
/// counter-clockwise, holes clockwise; there is no parent linkage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputResult {
    pub outer: Vec<Vec<Point>>,
    pub holes: Vec<Vec<Point>>,
}

impl OutputResult {
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty() && self.holes.is_empty()
    }

    pub fn ring_count(&self) -> usize {
        self.outer.len() + self.holes.len()
    }

    /// Twice the net area: outer contours minus holes.
    pub fn signed_area(&self) -> i128 {
        self.outer
            .iter()
            .chain(self.holes.iter())
            .map(|ring| signed_area(ring))
            .sum()
    }

    /// Outer contours first, then holes.
    pub fn rings(&self) -> impl Iterator<Item = &Vec<Point>> {
        self.outer.iter().chain(self.holes.iter())
    }
}

/// Sorts reconstructed rings into outer contours and holes.
pub fn classify(rings: Vec<Vec<Point>>) -> OutputResult {
    let mut result = OutputResult::default();

    for mut ring in rings {
        if signed_area(&ring) == 0 {
            continue;
        }

        normalize_start(&mut ring);
        if is_clockwise(&ring) {
            result.holes.push(ring);
        } else {
            result.outer.push(ring);
        }
    }

    result
}

/// Runs the exact cleaner and rejects rings it reduces below a triangle.
pub fn clean(ring: &[Point], distance: f64) -> ClipperResult<Vec<Point>> {
    let cleaned = clean_polygon(ring, distance);

    if cleaned.is_empty() {
        return Err(ClipperError::invalid_input(format!(
            "ring of {} points has fewer than 3 usable points",
            ring.len()
        )));
    }

    Ok(cleaned)
}

/// Resolves the self-intersections of one ring under `fill_type`.
pub fn simplify(ring: &[Point], fill_type: PolyFillType) -> ClipperResult<OutputResult> {
    let cleaned = clean(ring, 0.0)?;
    let mut clipper = Clipper::new();

    clipper.add_path(&cleaned, PolyType::Subject)?;
    let rings = clipper.execute(ClipType::Union, fill_type, fill_type)?;

    Ok(classify(rings))
}

pub fn simplify_default(ring: &[Point]) -> ClipperResult<OutputResult> {
    simplify(ring, PolyFillType::NonZero)
}

/// One sweep over all `rings`, each added as a subject ring. The clip
/// operand stays empty, so `clip_type` sees every region as outside of it.
pub fn combine(
    rings: &[Vec<Point>],
    clip_type: ClipType,
    subject_fill: PolyFillType,
    clip_fill: PolyFillType,
) -> ClipperResult<OutputResult> {
    let mut clipper = Clipper::new();

    for ring in rings {
        let cleaned = clean(ring, 0.0)?;
        clipper.add_path(&cleaned, PolyType::Subject)?;
    }

    let rings = clipper.execute(clip_type, subject_fill, clip_fill)?;

    Ok(classify(rings))
}

/// Boolean operation between a subject and a clip operand.
pub fn execute(
    subject: &[Vec<Point>],
    clip: &[Vec<Point>],
    clip_type: ClipType,
    subject_fill: PolyFillType,
    clip_fill: PolyFillType,
) -> ClipperResult<OutputResult> {
    let mut clipper = Clipper::new();

    for ring in subject {
        clipper.add_path(&clean(ring, 0.0)?, PolyType::Subject)?;
    }
    for ring in clip {
        clipper.add_path(&clean(ring, 0.0)?, PolyType::Clip)?;
    }

    let rings = clipper.execute(clip_type, subject_fill, clip_fill)?;

    Ok(classify(rings))
}

/// Union of every ring, each added as a clip ring. A clockwise ring
/// subtracts from the rings around it, so holes survive as holes.
pub fn union(rings: &[Vec<Point>]) -> ClipperResult<OutputResult> {
    union_with(
        rings,
        ClipType::Union,
        PolyFillType::EvenOdd,
        PolyFillType::Positive,
    )
}

/// `union` with explicit operation and fill rules. The subject operand is
/// empty, so `subject_fill` only matters for clip types that keep it.
pub fn union_with(
    rings: &[Vec<Point>],
    clip_type: ClipType,
    subject_fill: PolyFillType,
    clip_fill: PolyFillType,
) -> ClipperResult<OutputResult> {
    execute(&[], rings, clip_type, subject_fill, clip_fill)
}
