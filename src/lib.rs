use num_traits::ToPrimitive;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Float64Array;

pub mod clipper;
pub mod clipper_config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod utils;

use crate::clipper::operations::{self, OutputResult};
use crate::clipper_config::ClipperConfig;
use crate::constants::RESULT_HEADER_SIZE;
use crate::error::{ClipperError, ClipperResult};
use crate::geometry::point::Point;

fn from_mem_seg(mem_seg: &[f64], scale: f64) -> ClipperResult<Vec<Point>> {
    if mem_seg.len() % 2 != 0 {
        return Err(ClipperError::invalid_input(format!(
            "coordinate count {} is odd",
            mem_seg.len()
        )));
    }

    let mut out = Vec::with_capacity(mem_seg.len() / 2);

    for chunk in mem_seg.chunks_exact(2) {
        out.push(Point::new(to_engine(chunk[0], scale)?, to_engine(chunk[1], scale)?));
    }

    Ok(out)
}

fn to_engine(value: f64, scale: f64) -> ClipperResult<i64> {
    // to_i64 truncates toward zero and refuses NaN, infinities and overflow
    (value * scale).to_i64().ok_or_else(|| {
        ClipperError::invalid_input(format!("coordinate {} cannot be scaled by {}", value, scale))
    })
}

fn to_mem_seg(polygon: &[Point], scale: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(polygon.len() * 2);
    for p in polygon {
        out.push(p.x as f64 / scale);
        out.push(p.y as f64 / scale);
    }
    out
}

fn read_header(value: f64, name: &str) -> ClipperResult<usize> {
    if value.fract() != 0.0 {
        return Err(ClipperError::invalid_input(format!("{} {} is not an integer", name, value)));
    }

    value
        .to_usize()
        .ok_or_else(|| ClipperError::invalid_input(format!("{} {} is out of range", name, value)))
}

/// Splits `[count, offset_0 .. offset_{count-1}, x0, y0, ...]` into rings.
/// Offsets point into the data section, one unit per coordinate.
fn unpack_polygons(packed: &[f64], scale: f64) -> ClipperResult<Vec<Vec<Point>>> {
    let count = read_header(*packed.first().ok_or_else(|| {
        ClipperError::invalid_input("packed polygon buffer is empty")
    })?, "ring count")?;

    let header_len = 1 + count;
    if packed.len() < header_len {
        return Err(ClipperError::invalid_input(format!(
            "packed buffer of {} values cannot hold {} offsets",
            packed.len(),
            count
        )));
    }

    let data = &packed[header_len..];
    let mut offsets: Vec<usize> = Vec::with_capacity(count + 1);
    for i in 0..count {
        offsets.push(read_header(packed[1 + i], "ring offset")?);
    }
    offsets.push(data.len());

    let mut result = Vec::with_capacity(count);
    for pair in offsets.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        if start > end || end > data.len() {
            return Err(ClipperError::invalid_input(format!(
                "ring offsets {}..{} do not fit {} coordinates",
                start,
                end,
                data.len()
            )));
        }
        result.push(from_mem_seg(&data[start..end], scale)?);
    }

    Ok(result)
}

pub fn pack_polygons(nested: &[&Vec<Point>], scale: f64) -> Vec<f64> {
    let m = nested.len();
    let total_points: usize = nested.iter().map(|v| v.len()).sum();
    let header_len = 1 + m;

    let mut out = Vec::with_capacity(header_len + total_points * 2);
    out.resize(header_len, 0.0);
    out[0] = m as f64;

    let mut running: usize = 0;
    for (i, arr) in nested.iter().enumerate() {
        out[1 + i] = running as f64;
        running += arr.len() * 2;
    }

    for arr in nested {
        out.extend(to_mem_seg(arr, scale));
    }

    out
}

/// `[outer_count, hole_count, offsets..., data...]`, outer rings first.
fn pack_result(result: &OutputResult, scale: f64) -> Vec<f64> {
    let rings: Vec<&Vec<Point>> = result.rings().collect();
    let packed = pack_polygons(&rings, scale);

    let mut out = Vec::with_capacity(RESULT_HEADER_SIZE + packed.len() - 1);
    out.push(result.outer.len() as f64);
    out.push(result.holes.len() as f64);
    // the ring count is implied by the two counts above
    out.extend_from_slice(&packed[1..]);
    out
}

/// Resolves the self-intersections of one flat ring `x0, y0, x1, y1, ...`
/// with the subject fill rule of `config`.
pub fn simplify_inner(mem_seg: &[f64], config: &ClipperConfig) -> Result<Vec<f64>, ClipperError> {
    let scale = config.scale();
    let polygon = from_mem_seg(mem_seg, scale)?;
    let result = operations::simplify(&polygon, config.subject_fill)?;

    Ok(pack_result(&result, scale))
}

/// Union of the rings of a packed polygon buffer. The rings form the clip
/// operand of `config.clip_type` under `config.clip_fill`.
pub fn union_inner(packed: &[f64], config: &ClipperConfig) -> Result<Vec<f64>, ClipperError> {
    let scale = config.scale();
    let polygons = unpack_polygons(packed, scale)?;
    let result = operations::union_with(
        &polygons,
        config.clip_type,
        config.subject_fill,
        config.clip_fill,
    )?;

    Ok(pack_result(&result, scale))
}

/// Cleans one flat ring with the clean distance of `config`.
pub fn clean_inner(mem_seg: &[f64], config: &ClipperConfig) -> Result<Vec<f64>, ClipperError> {
    let scale = config.scale();
    let polygon = from_mem_seg(mem_seg, scale)?;
    let cleaned = operations::clean(&polygon, config.scaled_clean_distance())?;

    Ok(to_mem_seg(&cleaned, scale))
}

fn to_js_result(name: &str, result: ClipperResult<Vec<f64>>) -> JsValue {
    match result {
        Ok(values) => {
            let out = Float64Array::new_with_length(values.len() as u32);
            out.copy_from(&values);
            out.into()
        }
        Err(error) => {
            wasm_log!("{} failed: {}", name, error);
            JsValue::FALSE
        }
    }
}

fn read_config(packed: u32) -> ClipperResult<ClipperConfig> {
    let mut config = ClipperConfig::new();
    config.deserialize(packed)?;
    Ok(config)
}

#[wasm_bindgen]
pub fn simplify_polygon_wasm(buff: &[f64], config: u32) -> JsValue {
    let result = read_config(config).and_then(|config| simplify_inner(buff, &config));
    to_js_result("simplify_polygon", result)
}

#[wasm_bindgen]
pub fn union_polygons_wasm(buff: &[f64], config: u32) -> JsValue {
    let result = read_config(config).and_then(|config| union_inner(buff, &config));
    to_js_result("union_polygons", result)
}

#[wasm_bindgen]
pub fn clean_polygon_wasm(buff: &[f64], config: u32) -> JsValue {
    let result = read_config(config).and_then(|config| clean_inner(buff, &config));
    to_js_result("clean_polygon", result)
}

#[wasm_bindgen]
pub fn default_config_wasm() -> u32 {
    ClipperConfig::default().serialize()
}
