//! Approximate polyline containment.

use super::Polyline;
use crate::angle::Angle;
use crate::distance::{is_edge_b_near_edge_a, project};
use std::collections::HashSet;
use tracing::trace;

/// A point in the covering search.
///
/// `i` indexes an edge of the covering polyline and `j` an edge of the
/// covered one. With `i_in_progress` the covered polyline has been
/// matched through vertex `j`; otherwise it has been matched through the
/// point of edge `j` closest to vertex `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SearchState {
    i: usize,
    j: usize,
    i_in_progress: bool,
}

impl Polyline {
    /// Returns `true` if `covered` lies within `max_error` of this polyline
    /// and can be traversed in the same direction.
    ///
    /// Picture two cars, one driving along each polyline, that never move
    /// backwards and stay within `max_error` of each other. Local
    /// backtracking shorter than `max_error` is tolerated on either side.
    /// An empty polyline is covered by anything; a non-empty one is never
    /// covered by an empty polyline.
    ///
    /// The search explores `(edge of self, edge of covered)` states
    /// depth-first from every edge of `self` near the first vertex of
    /// `covered`, since the nearest starting edge is not always the one
    /// that leads to a full match. Each state is visited at most once.
    pub fn nearly_covers(&self, covered: &Polyline, max_error: Angle) -> bool {
        let this = self.vertices();
        let other = covered.vertices();
        if other.is_empty() {
            return true;
        }
        if this.is_empty() {
            return false;
        }
        let n = this.len();
        let m = other.len();

        // No edges: the polyline is a single point, which covers whatever
        // lies inside the cap of radius `max_error` around it.
        if next_distinct_vertex(self, 0) == n {
            return other.iter().all(|&p| p.approx_eq(this[0], max_error));
        }

        let mut pending = Vec::new();
        let mut done = HashSet::new();

        // Starting states. End vertices are skipped except on the last
        // non-degenerate edge, so no start is pushed twice.
        let mut i = 0;
        let mut next_i = next_distinct_vertex(self, 0);
        while next_i < n {
            let next_next_i = next_distinct_vertex(self, next_i);
            let closest = project(other[0], this[i], this[next_i]);
            if (next_next_i == n || closest != this[next_i]) && closest.approx_eq(other[0], max_error) {
                pending.push(SearchState { i, j: 0, i_in_progress: true });
            }
            i = next_i;
            next_i = next_next_i;
        }

        while let Some(state) = pending.pop() {
            if !done.insert(state) {
                continue;
            }

            let next_i = next_distinct_vertex(self, state.i);
            let next_j = next_distinct_vertex(covered, state.j);
            if next_j == m {
                trace!(states = done.len(), "polyline covered");
                return true;
            }
            if next_i == n {
                continue;
            }

            let (i_begin, j_begin) = if state.i_in_progress {
                let j_begin = other[state.j];
                (project(j_begin, this[state.i], this[next_i]), j_begin)
            } else {
                let i_begin = this[state.i];
                (i_begin, project(i_begin, other[state.j], other[next_j]))
            };

            if is_edge_b_near_edge_a(j_begin, other[next_j], i_begin, this[next_i], max_error) {
                pending.push(SearchState { i: next_i, j: state.j, i_in_progress: false });
            }
            if is_edge_b_near_edge_a(i_begin, this[next_i], j_begin, other[next_j], max_error) {
                pending.push(SearchState { i: state.i, j: next_j, i_in_progress: true });
            }
        }

        trace!(states = done.len(), "polyline not covered");
        false
    }
}

/// Index of the first vertex after `index` that differs from it, or the
/// vertex count if there is none.
fn next_distinct_vertex(line: &Polyline, index: usize) -> usize {
    let vertices = line.vertices();
    let initial = vertices[index];
    vertices[index + 1..]
        .iter()
        .position(|&v| v != initial)
        .map_or(vertices.len(), |offset| index + 1 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::parse_polyline;

    /// Checks coverage in both directions, with `max_error` in degrees.
    fn check(a: &str, b: &str, max_error: f64, b_covers_a: bool, a_covers_b: bool) {
        let a = parse_polyline(a);
        let b = parse_polyline(b);
        let max_error = Angle::from_degrees(max_error);
        assert_eq!(b.nearly_covers(&a, max_error), b_covers_a, "B covers A");
        assert_eq!(a.nearly_covers(&b, max_error), a_covers_b, "A covers B");
    }

    #[test]
    fn test_covers_self() {
        check("1:1, 2:2, -1:10", "1:1, 2:2, -1:10", 1e-10, true, true);
    }

    #[test]
    fn test_covers_self_at_zero_tolerance() {
        check("1:1, 2:2, -1:10", "1:1, 2:2, -1:10", 0.0, true, true);
        check("3:4", "3:4", 0.0, true, true);
    }

    #[test]
    fn test_does_not_cover_reverse() {
        check("1:1, 2:2, -1:10", "-1:10, 2:2, 1:1", 1e-10, false, false);
    }

    #[test]
    fn test_covers_equivalent_with_extra_vertex() {
        check("1:1, 2:1", "1:1, 1.5:1, 2:1", 1e-10, true, true);
    }

    #[test]
    fn test_short_covered_by_long() {
        check("-5:1, 10:1, 10:5, 5:10", "9:1, 9.9995:1, 10.0005:5", 1e-3, false, true);
    }

    #[test]
    fn test_partial_overlap_only() {
        check("-5:1, 10:1", "0:1, 20:1", 1.0, false, false);
    }

    #[test]
    fn test_short_backtracking() {
        // A greedy matcher fails here.
        check("0:0, 0:2, 0:1, 0:4, 0:5", "0:0, 0:2, 0:4, 0:3, 0:5", 1.5, true, true);
        check("0:0, 0:2, 0:1, 0:4, 0:5", "0:0, 0:2, 0:4, 0:3, 0:5", 0.5, false, false);
    }

    #[test]
    fn test_long_backtracking() {
        check("5:1, -5:1", "1:1, 3:1", 1.0, false, false);
        check("5:1, -5:1", "1:1, 3:1", 2.5, false, true);
    }

    #[test]
    fn test_duplicate_vertices() {
        check("0:1, 0:2, 0:2, 0:3", "0:1, 0:1, 0:1, 0:3", 1e-10, true, true);
    }

    #[test]
    fn test_chooses_between_starting_points() {
        // Both 0:11->0:0 and 0:9->0:20 pass near 0:10; only the second leads
        // to a match.
        check("0:11, 0:0, 0:9, 0:20", "0:10, 0:15", 1.5, false, true);
    }

    #[test]
    fn test_straight_and_wiggly() {
        check(
            "40:1, 20:1",
            "39.9:0.9, 40:1.1, 30:1.15, 29:0.95, 28:1.1, 27:1.15, 26:1.05, 25:0.85, 24:1.1, 23:0.9, 20:0.99",
            0.2,
            true,
            true,
        );
    }

    #[test]
    fn test_match_starts_at_last_vertex() {
        check("0:0, 0:2", "0:2, 0:3", 1.5, false, true);
        check("0:0, 0:2, 0:2, 0:2", "0:2, 0:3", 1.5, false, true);
    }

    #[test]
    fn test_empty_polylines() {
        check("0:1, 0:2", "", 0.0, false, true);
        check("", "", 0.0, true, true);
    }

    #[test]
    fn test_point_covers_nearby_points() {
        let point = parse_polyline("0:0");
        assert!(point.nearly_covers(&parse_polyline("0:0.5, 0.5:0"), Angle::from_degrees(1.0)));
        assert!(!point.nearly_covers(&parse_polyline("0:0.5, 0:2"), Angle::from_degrees(1.0)));
    }

    #[test]
    fn test_next_distinct_vertex() {
        let line = parse_polyline("0:1, 0:1, 0:2, 0:2");
        assert_eq!(next_distinct_vertex(&line, 0), 2);
        assert_eq!(next_distinct_vertex(&line, 2), 4);
    }
}
