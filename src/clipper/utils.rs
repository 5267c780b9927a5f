use crate::geometry::point::Point;
use crate::utils::math::cycle_index;

/// Removes duplicate, collinear and spike vertices from a ring.
///
/// Points closer than `distance` are merged and points within `distance` of
/// the line through their neighbours are dropped; the scan steps back after
/// every removal because it can expose a new reducible triple. Returns an
/// empty ring when fewer than three points survive.
pub fn clean_polygon(path: &[Point], distance: f64) -> Vec<Point> {
    if path.len() < 3 {
        return Vec::new();
    }

    let mut result: Vec<Point> = path.to_vec();
    let mut marked: Vec<bool> = vec![false; result.len()];
    let dist_sqrd = distance * distance;
    let mut curr_index = 0;

    while result.len() > 2 && !marked[curr_index] {
        let point_count = result.len();
        let prev_index = cycle_index(curr_index, point_count, -1);
        let next_index = cycle_index(curr_index, point_count, 1);

        let prev_point = result[prev_index];
        let curr_point = result[curr_index];
        let next_point = result[next_index];

        let mut indices: Vec<usize> = if curr_point.close_to(&prev_point, dist_sqrd) {
            vec![curr_index]
        } else if prev_point.close_to(&next_point, dist_sqrd) {
            // spike returning onto prev
            vec![curr_index, next_index]
        } else if Point::slopes_near_collinear(&prev_point, &curr_point, &next_point, dist_sqrd) {
            vec![curr_index]
        } else {
            marked[curr_index] = true;
            curr_index = next_index;
            continue;
        };

        indices.sort_unstable_by(|a, b| b.cmp(a));
        for &index in &indices {
            result.remove(index);
            marked.remove(index);
        }

        if result.is_empty() {
            break;
        }

        let shift = indices.iter().filter(|&&index| index < prev_index).count();
        curr_index = (prev_index - shift).min(result.len() - 1);
        marked[curr_index] = false;
    }

    if result.len() < 3 {
        Vec::new()
    } else {
        result
    }
}
