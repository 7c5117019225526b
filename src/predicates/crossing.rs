//! Edge crossing tests and intersection points.

use super::sign::{expensive_sign, ordered_ccw, robust_sign, triage_sign, Direction};
use crate::consts::{DBL_EPSILON, DBL_ERROR};
use crate::primitives::{Point, Vec3};
use std::cmp::Ordering;

/// Result of testing two edges for a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossing {
    /// The interiors of the edges cross at a single point.
    Cross,
    /// Two vertices from different edges are equal; the caller decides
    /// (see [`vertex_crossing`]).
    MaybeCross,
    /// The edges do not cross.
    DoNotCross,
}

/// Tests edge `a→b` against a sequence of edges, reusing work between calls.
///
/// The crosser caches the outward tangents of the fixed edge and the
/// orientation of the last vertex, so testing a chain `c0→c1→c2…` costs one
/// orientation test per vertex in the common non-crossing case.
#[derive(Debug, Clone)]
pub struct EdgeCrosser {
    a: Point,
    b: Point,
    a_tangent: Vec3<f64>,
    b_tangent: Vec3<f64>,
    c: Point,
    acb: Direction,
}

impl EdgeCrosser {
    /// Creates a crosser for the fixed edge `a→b`.
    pub fn new(a: Point, b: Point) -> Self {
        let norm = a.point_cross(b);
        Self {
            a,
            b,
            a_tangent: a.vec().cross(norm),
            b_tangent: norm.cross(b.vec()),
            // Never equal to a real vertex, so the first `crossing_sign`
            // call always restarts.
            c: Point::from_vec_unchecked(Vec3::zero()),
            acb: Direction::Indeterminate,
        }
    }

    /// Creates a crosser for `a→b` positioned at chain vertex `c`.
    pub fn new_chain(a: Point, b: Point, c: Point) -> Self {
        let mut crosser = Self::new(a, b);
        crosser.restart_at(c);
        crosser
    }

    /// Moves the chain cursor to `c` without testing an edge.
    pub fn restart_at(&mut self, c: Point) {
        self.c = c;
        self.acb = -triage_sign(self.a, self.b, c);
    }

    /// Tests `a→b` against `c→d`.
    pub fn crossing_sign(&mut self, c: Point, d: Point) -> Crossing {
        if c != self.c {
            self.restart_at(c);
        }
        self.chain_crossing_sign(d)
    }

    /// Like [`EdgeCrosser::crossing_sign`], resolving shared vertices with
    /// [`vertex_crossing`].
    pub fn edge_or_vertex_crossing(&mut self, c: Point, d: Point) -> bool {
        if c != self.c {
            self.restart_at(c);
        }
        self.edge_or_vertex_chain_crossing(d)
    }

    /// Tests `a→b` against the edge from the current cursor to `d`, then
    /// advances the cursor to `d`.
    pub fn chain_crossing_sign(&mut self, d: Point) -> Crossing {
        let bda = triage_sign(self.a, self.b, d);
        if self.acb == -bda && bda != Direction::Indeterminate {
            // Opposite orientations: the common case, no crossing.
            self.c = d;
            self.acb = -bda;
            return Crossing::DoNotCross;
        }
        self.slow_crossing_sign(d, bda)
    }

    /// Chain version of [`EdgeCrosser::edge_or_vertex_crossing`].
    pub fn edge_or_vertex_chain_crossing(&mut self, d: Point) -> bool {
        let c = self.c;
        match self.chain_crossing_sign(d) {
            Crossing::DoNotCross => false,
            Crossing::Cross => true,
            Crossing::MaybeCross => vertex_crossing(self.a, self.b, c, d),
        }
    }

    fn slow_crossing_sign(&mut self, d: Point, mut bda: Direction) -> Crossing {
        let result = self.decide_crossing(d, &mut bda);
        self.c = d;
        self.acb = -bda;
        result
    }

    fn decide_crossing(&mut self, d: Point, bda: &mut Direction) -> Crossing {
        // Most chains that come close to AB without crossing it lie beyond
        // one of its endpoints; the outward tangents detect that cheaply.
        let max_error = (1.5 + 1.0 / 3f64.sqrt()) * DBL_EPSILON;
        let c = self.c.vec();
        if (c.dot(self.a_tangent) > max_error && d.vec().dot(self.a_tangent) > max_error)
            || (c.dot(self.b_tangent) > max_error && d.vec().dot(self.b_tangent) > max_error)
        {
            return Crossing::DoNotCross;
        }

        if self.a == self.c || self.a == d || self.b == self.c || self.b == d {
            return Crossing::MaybeCross;
        }
        if self.a == self.b || self.c == d {
            return Crossing::DoNotCross;
        }

        if self.acb == Direction::Indeterminate {
            self.acb = -expensive_sign(self.a, self.b, self.c);
        }
        if *bda == Direction::Indeterminate {
            *bda = expensive_sign(self.a, self.b, d);
        }
        if *bda != self.acb {
            return Crossing::DoNotCross;
        }

        let cbd = -robust_sign(self.c, d, self.b);
        if cbd != self.acb {
            return Crossing::DoNotCross;
        }
        let dac = robust_sign(self.c, d, self.a);
        if dac != self.acb {
            return Crossing::DoNotCross;
        }
        Crossing::Cross
    }
}

/// Tests whether edge `a→b` crosses edge `c→d`.
///
/// Returns [`Crossing::Cross`] if the interiors cross at a single point,
/// [`Crossing::MaybeCross`] if two vertices from different edges are
/// equal, and [`Crossing::DoNotCross`] otherwise (including when either
/// edge is degenerate). The result is symmetric: swapping the edges or
/// reversing either one gives the same answer.
pub fn crossing_sign(a: Point, b: Point, c: Point, d: Point) -> Crossing {
    EdgeCrosser::new_chain(a, b, c).chain_crossing_sign(d)
}

/// Decides whether two edges sharing a vertex should count as crossing.
///
/// Given that `a→b` and `c→d` share at least one vertex, returns `true` if
/// `a→b` is further counter-clockwise around the shared vertex than
/// `c→d`, measured from a fixed reference direction. This gives a
/// consistent rule under which a chain passing through a vertex of another
/// chain crosses it exactly once.
pub fn vertex_crossing(a: Point, b: Point, c: Point, d: Point) -> bool {
    if a == b || c == d {
        return false;
    }
    if a == d {
        ordered_ccw(a.ortho(), c, b, a)
    } else if b == c {
        ordered_ccw(b.ortho(), d, a, b)
    } else if a == c {
        ordered_ccw(a.ortho(), d, b, a)
    } else if b == d {
        ordered_ccw(b.ortho(), c, a, b)
    } else {
        false
    }
}

/// Returns `true` if the edges cross, resolving shared vertices with
/// [`vertex_crossing`].
pub fn edge_or_vertex_crossing(a: Point, b: Point, c: Point, d: Point) -> bool {
    match crossing_sign(a, b, c, d) {
        Crossing::DoNotCross => false,
        Crossing::Cross => true,
        Crossing::MaybeCross => vertex_crossing(a, b, c, d),
    }
}

/// Maximum angular error of [`intersection`], in radians.
pub const INTERSECTION_ERROR: f64 = 8.0 * DBL_ERROR;

/// Returns the intersection point of two edges that cross.
///
/// The result is only meaningful when [`crossing_sign`] reports
/// [`Crossing::Cross`]. It does not change when the edges are swapped or
/// reversed.
pub fn intersection(a0: Point, a1: Point, b0: Point, b1: Point) -> Point {
    let x = intersection_stable(a0, a1, b0, b1).unwrap_or_else(|| {
        let n = a0.point_cross(a1).normalize().cross(b0.point_cross(b1).normalize());
        if n.is_zero() {
            a0.vec()
        } else {
            n
        }
    });

    // Both edges are shorter than 180 degrees, so the intersection is on
    // the side of the sphere that the sum of the vertices points to.
    let sum = (a0.vec() + a1.vec()) + (b0.vec() + b1.vec());
    let x = if x.dot(sum) < 0.0 { -x } else { x };
    Point::from_vec(x)
}

fn intersection_stable(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<Vec3<f64>> {
    // The longer edge supplies the plane normal and the shorter one is
    // interpolated, which minimizes error. Ties are broken independently
    // of edge and vertex order.
    let a_len2 = (a1.vec() - a0.vec()).magnitude_squared();
    let b_len2 = (b1.vec() - b0.vec()).magnitude_squared();
    if a_len2 < b_len2 || (a_len2 == b_len2 && edge_lex_less(a0, a1, b0, b1)) {
        intersection_stable_sorted(b0, b1, a0, a1)
    } else {
        intersection_stable_sorted(a0, a1, b0, b1)
    }
}

fn edge_lex_less(a0: Point, a1: Point, b0: Point, b1: Point) -> bool {
    let sorted = |p: Point, q: Point| {
        if p.vec().lex_cmp(q.vec()) == Ordering::Greater {
            (q, p)
        } else {
            (p, q)
        }
    };
    let (a0, a1) = sorted(a0, a1);
    let (b0, b1) = sorted(b0, b1);
    a0.vec()
        .lex_cmp(b0.vec())
        .then_with(|| a1.vec().lex_cmp(b1.vec()))
        == Ordering::Less
}

fn intersection_stable_sorted(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<Vec3<f64>> {
    let a_norm = (a0.vec() - a1.vec()).cross(a0.vec() + a1.vec());
    let a_norm_len = a_norm.magnitude();
    let b_len = (b1.vec() - b0.vec()).magnitude();

    // Signed distances of b0 and b1 from the plane of A, scaled by |a_norm|.
    let (b0_dist, b0_error) = plane_projection(b0.vec(), a_norm, a_norm_len, a0, a1);
    let (b1_dist, b1_error) = plane_projection(b1.vec(), a_norm, a_norm_len, a0, a1);

    let dist_sum = (b0_dist - b1_dist).abs();
    let error_sum = b0_error + b1_error;
    if dist_sum <= error_sum {
        return None;
    }

    // Interpolate along B at fraction b0_dist / (b0_dist - b1_dist),
    // scaled by dist_sum since the result is normalized anyway.
    let x = b1.vec() * b0_dist - b0.vec() * b1_dist;
    let error = b_len * (b0_dist * b1_error - b1_dist * b0_error).abs() / (dist_sum - error_sum)
        + 2.0 * DBL_ERROR * dist_sum;

    let x_len2 = x.magnitude_squared();
    if x_len2 < f64::MIN_POSITIVE {
        return None;
    }
    let x_len = x_len2.sqrt();
    if error > (INTERSECTION_ERROR - DBL_ERROR) * x_len {
        return None;
    }
    Some(x * (1.0 / x_len))
}

/// Signed distance of `x` from the plane with normal `a_norm` through the
/// origin, with an upper bound on its error.
fn plane_projection(
    x: Vec3<f64>,
    a_norm: Vec3<f64>,
    a_norm_len: f64,
    a0: Point,
    a1: Point,
) -> (f64, f64) {
    // Measuring from the nearer endpoint instead of the origin reduces the
    // error of the dot product by a large factor.
    let x0 = x - a0.vec();
    let x1 = x - a1.vec();
    let x0_dist2 = x0.magnitude_squared();
    let x1_dist2 = x1.magnitude_squared();

    let (dist, nearer2) = if x0_dist2 < x1_dist2
        || (x0_dist2 == x1_dist2 && x0.lex_cmp(x1) == Ordering::Less)
    {
        (x0.dot(a_norm), x0_dist2)
    } else {
        (x1.dot(a_norm), x1_dist2)
    };

    let sqrt3 = 3f64.sqrt();
    let bound = (((3.5 + 2.0 * sqrt3) * a_norm_len + 32.0 * sqrt3 * DBL_ERROR) * nearer2.sqrt()
        + 1.5 * dist.abs())
        * DBL_ERROR;
    (dist, bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Angle;
    use crate::testing::random_point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::from_coords(x, y, z)
    }

    fn check_crossing(a: Point, b: Point, c: Point, d: Point, expected: Crossing) {
        assert_eq!(crossing_sign(a, b, c, d), expected);
        assert_eq!(crossing_sign(b, a, c, d), expected);
        assert_eq!(crossing_sign(a, b, d, c), expected);
        assert_eq!(crossing_sign(c, d, a, b), expected);
        let mut crosser = EdgeCrosser::new(a, b);
        assert_eq!(crosser.crossing_sign(c, d), expected);
        let mut chained = EdgeCrosser::new_chain(a, b, c);
        assert_eq!(chained.chain_crossing_sign(d), expected);
    }

    #[test]
    fn test_regular_edges_cross() {
        let (a, b) = (p(1.0, 2.0, 1.0), p(1.0, -3.0, 0.5));
        let (c, d) = (p(1.0, -0.5, -3.0), p(0.1, 0.5, 3.0));
        check_crossing(a, b, c, d, Crossing::Cross);
        assert!(edge_or_vertex_crossing(a, b, c, d));
    }

    #[test]
    fn test_edges_meeting_at_antipodal_points() {
        let (a, b) = (p(1.0, 2.0, 1.0), p(1.0, -3.0, 0.5));
        let (c, d) = (p(-1.0, 0.5, 3.0), p(-0.1, -0.5, -3.0));
        check_crossing(a, b, c, d, Crossing::DoNotCross);
        assert!(!edge_or_vertex_crossing(a, b, c, d));
    }

    #[test]
    fn test_axis_edges() {
        let (a, b) = (p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        check_crossing(a, b, p(0.0, 0.0, 1.0), p(1.0, 1.0, -1.0), Crossing::Cross);
        check_crossing(a, b, p(0.0, 0.0, -1.0), p(1.0, 1.0, 1.0), Crossing::Cross);
        check_crossing(a, b, p(0.0, 0.0, -1.0), p(-1.0, -1.0, 1.0), Crossing::DoNotCross);
    }

    #[test]
    fn test_shared_vertex_is_maybe() {
        let (a, b) = (p(2.0, 3.0, 4.0), p(-1.0, 2.0, 5.0));
        let (c, d) = (p(7.0, -2.0, 3.0), p(2.0, 3.0, 4.0));
        check_crossing(a, b, c, d, Crossing::MaybeCross);
    }

    #[test]
    fn test_degenerate_edges_do_not_cross() {
        let a = p(1.0, 0.0, 0.0);
        let c = p(0.0, 1.0, 0.0);
        let d = p(0.0, 0.0, 1.0);
        assert_ne!(crossing_sign(a, a, c, d), Crossing::Cross);
        assert_ne!(crossing_sign(c, d, a, a), Crossing::Cross);
    }

    #[test]
    fn test_vertex_crossing_through_shared_vertex() {
        // A chain passing through vertex v of another chain crosses exactly
        // one of the two edges incident to v.
        let v = p(1.0, 0.0, 0.0);
        let west = p(1.0, -1.0, 0.0);
        let east = p(1.0, 1.0, 0.0);
        let south = p(1.0, 0.0, -1.0);
        let north = p(1.0, 0.0, 1.0);
        let first = vertex_crossing(west, v, south, v);
        let second = vertex_crossing(v, east, south, v);
        assert_ne!(first, second);
        assert!(!vertex_crossing(v, v, south, north));
        assert!(!vertex_crossing(west, east, south, north));
    }

    #[test]
    fn test_intersection_of_crossing_edges() {
        let x = intersection(p(1.0, -1.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, -1.0), p(1.0, 0.0, 1.0));
        assert!(x.approx_eq(p(1.0, 0.0, 0.0), Angle::from_radians(1e-15)));
    }

    #[test]
    fn test_intersection_is_order_independent_and_on_both_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut checked = 0;
        while checked < 50 {
            let (a0, a1, b0, b1) = (
                random_point(&mut rng),
                random_point(&mut rng),
                random_point(&mut rng),
                random_point(&mut rng),
            );
            if crossing_sign(a0, a1, b0, b1) != Crossing::Cross {
                continue;
            }
            checked += 1;
            let x = intersection(a0, a1, b0, b1);
            assert!(x.is_unit());
            assert_eq!(x, intersection(b0, b1, a0, a1));
            assert_eq!(x, intersection(a1, a0, b1, b0));
            let slack = Angle::from_radians(1e-14);
            let on_a = a0.distance(x) + x.distance(a1) - a0.distance(a1);
            let on_b = b0.distance(x) + x.distance(b1) - b0.distance(b1);
            assert!(on_a <= slack, "{on_a:?}");
            assert!(on_b <= slack, "{on_b:?}");
        }
    }
}
