//! Geometry helpers for polyline hit testing and node insertion.
//!
//! All functions work in canvas coordinates and are pure, so they are shared by the
//! render surface (hit testing) and the interaction engine (node insertion).

use bevy::math::DVec2;

use crate::constants::INSERT_MAX_DISTANCE;

/// Where a new node should be inserted into a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentInsertion {
    /// Index before which the new point goes (the segment's second endpoint)
    pub index: usize,
    /// Projection of the click onto the segment
    pub point: DVec2,
}

/// Closest point to `point` on the segment `seg_start..seg_end`.
///
/// The projection parameter is clamped to [0, 1], so the result always lies on the
/// segment itself rather than on the infinite line through it.
pub fn closest_point_on_segment(point: DVec2, seg_start: DVec2, seg_end: DVec2) -> DVec2 {
    let line_vec = seg_end - seg_start;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq == 0.0 {
        // Segment is a point
        return seg_start;
    }

    let t = ((point - seg_start).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    seg_start + line_vec * t
}

/// Distance from `point` to the segment `seg_start..seg_end`
pub fn point_to_segment_distance(point: DVec2, seg_start: DVec2, seg_end: DVec2) -> f64 {
    point.distance(closest_point_on_segment(point, seg_start, seg_end))
}

/// Check if a point lies within `tolerance` of any segment of a polyline.
///
/// Polylines with fewer than two points have no segments and never match.
pub fn is_point_on_polyline(points: &[DVec2], point: DVec2, tolerance: f64) -> bool {
    points
        .windows(2)
        .any(|w| point_to_segment_distance(point, w[0], w[1]) <= tolerance)
}

/// Find the segment closest to `click` and the point on it where a node would be inserted.
///
/// Returns `None` when the polyline has no segments or the nearest one is farther than
/// `max_distance`. On exact ties the first segment wins.
pub fn find_nearest_segment_insertion(
    points: &[DVec2],
    click: DVec2,
    max_distance: f64,
) -> Option<SegmentInsertion> {
    let mut best: Option<(f64, SegmentInsertion)> = None;

    for (i, w) in points.windows(2).enumerate() {
        let projected = closest_point_on_segment(click, w[0], w[1]);
        let dist = click.distance(projected);

        if best.is_none_or(|(min_dist, _)| dist < min_dist) {
            best = Some((
                dist,
                SegmentInsertion {
                    index: i + 1,
                    point: projected,
                },
            ));
        }
    }

    best.filter(|(dist, _)| *dist <= max_distance)
        .map(|(_, insertion)| insertion)
}

/// [`find_nearest_segment_insertion`] with the default insertion distance
pub fn find_nearest_segment_insertion_default(
    points: &[DVec2],
    click: DVec2,
) -> Option<SegmentInsertion> {
    find_nearest_segment_insertion(points, click, INSERT_MAX_DISTANCE)
}
