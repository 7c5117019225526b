//! Closed intervals on the unit circle.

use crate::consts::DBL_EPSILON;
use std::f64::consts::PI;

/// A closed interval of angles in `[-π, π]`, walked counter-clockwise from
/// `lo` to `hi`.
///
/// An interval with `lo > hi` is inverted and wraps through ±π. The point
/// `-π` is normalized to `π` except in the full interval `[-π, π]`; the
/// empty interval is `[π, -π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcInterval {
    pub lo: f64,
    pub hi: f64,
}

impl ArcInterval {
    /// Creates an interval from its endpoints, normalizing `-π` to `π`
    /// unless the result would be the full or empty interval.
    pub fn new(lo: f64, hi: f64) -> Self {
        let mut i = Self { lo, hi };
        if lo == -PI && hi != PI {
            i.lo = PI;
        }
        if hi == -PI && lo != PI {
            i.hi = PI;
        }
        i
    }

    #[inline]
    pub fn empty() -> Self {
        Self { lo: PI, hi: -PI }
    }

    #[inline]
    pub fn full() -> Self {
        Self { lo: -PI, hi: PI }
    }

    /// The shorter interval containing both angles.
    pub fn from_point_pair(a: f64, b: f64) -> Self {
        let a = if a == -PI { PI } else { a };
        let b = if b == -PI { PI } else { b };
        if positive_distance(a, b) <= PI {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.lo == PI && self.hi == -PI
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self.lo == -PI && self.hi == PI
    }

    #[inline]
    pub fn is_inverted(self) -> bool {
        self.lo > self.hi
    }

    /// Length of the interval; negative for the empty interval.
    pub fn length(self) -> f64 {
        let l = self.hi - self.lo;
        if l >= 0.0 {
            return l;
        }
        let l = l + 2.0 * PI;
        if l > 0.0 {
            l
        } else {
            -1.0
        }
    }

    /// Containment without normalizing `-π`.
    fn fast_contains(self, p: f64) -> bool {
        if self.is_inverted() {
            (p >= self.lo || p <= self.hi) && !self.is_empty()
        } else {
            p >= self.lo && p <= self.hi
        }
    }

    /// Returns `true` if the interval contains the angle `p` in `[-π, π]`.
    pub fn contains(self, p: f64) -> bool {
        self.fast_contains(if p == -PI { PI } else { p })
    }

    pub fn contains_interval(self, other: Self) -> bool {
        if self.is_inverted() {
            if other.is_inverted() {
                return other.lo >= self.lo && other.hi <= self.hi;
            }
            return (other.lo >= self.lo || other.hi <= self.hi) && !self.is_empty();
        }
        if other.is_inverted() {
            return self.is_full() || other.is_empty();
        }
        other.lo >= self.lo && other.hi <= self.hi
    }

    pub fn intersects(self, other: Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.is_inverted() {
            return other.is_inverted() || other.lo <= self.hi || other.hi >= self.lo;
        }
        if other.is_inverted() {
            return other.lo <= self.hi || other.hi >= self.lo;
        }
        other.lo <= self.hi && other.hi >= self.lo
    }

    /// The smallest interval containing both intervals.
    pub fn union(self, other: Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                // Either other is inside self, or together they cover the circle.
                if self.contains_interval(other) {
                    return self;
                }
                return Self::full();
            }
            return Self { lo: self.lo, hi: other.hi };
        }
        if self.fast_contains(other.hi) {
            return Self { lo: other.lo, hi: self.hi };
        }
        if self.is_empty() || other.fast_contains(self.lo) {
            return other;
        }
        // Disjoint: bridge the smaller gap.
        if positive_distance(other.hi, self.lo) < positive_distance(self.hi, other.lo) {
            Self { lo: other.lo, hi: self.hi }
        } else {
            Self { lo: self.lo, hi: other.hi }
        }
    }

    /// The smallest interval containing the intersection of both intervals.
    pub fn intersection(self, other: Self) -> Self {
        if other.is_empty() {
            return Self::empty();
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                // Either other is inside self, or they overlap at both ends
                // and the shorter one covers both pieces.
                if other.length() < self.length() {
                    return other;
                }
                return self;
            }
            return Self { lo: other.lo, hi: self.hi };
        }
        if self.fast_contains(other.hi) {
            return Self { lo: self.lo, hi: other.hi };
        }
        if other.fast_contains(self.lo) {
            return self;
        }
        Self::empty()
    }

    /// Returns the interval expanded to contain `p`, choosing the shorter
    /// way around. Angles outside `[-π, π]` are ignored.
    pub fn add_point(self, p: f64) -> Self {
        if p.abs() > PI {
            return self;
        }
        let p = if p == -PI { PI } else { p };
        if self.fast_contains(p) {
            return self;
        }
        if self.is_empty() {
            return Self { lo: p, hi: p };
        }
        if positive_distance(p, self.lo) < positive_distance(self.hi, p) {
            Self { lo: p, hi: self.hi }
        } else {
            Self { lo: self.lo, hi: p }
        }
    }

    /// Returns the interval grown by `margin` radians on each side (shrunk
    /// if negative).
    pub fn expanded(self, margin: f64) -> Self {
        if margin >= 0.0 {
            if self.is_empty() {
                return self;
            }
            // Allow for rounding in each endpoint.
            if self.length() + 2.0 * margin + 2.0 * DBL_EPSILON >= 2.0 * PI {
                return Self::full();
            }
        } else {
            if self.is_full() {
                return self;
            }
            if self.length() + 2.0 * margin - 2.0 * DBL_EPSILON <= 0.0 {
                return Self::empty();
            }
        }
        let mut result = Self::new(
            remainder(self.lo - margin, 2.0 * PI),
            remainder(self.hi + margin, 2.0 * PI),
        );
        if result.lo <= -PI {
            result.lo = PI;
        }
        result
    }
}

impl Default for ArcInterval {
    fn default() -> Self {
        Self::empty()
    }
}

/// Counter-clockwise distance from `a` to `b`, in `[0, 2π)`.
fn positive_distance(a: f64, b: f64) -> f64 {
    let d = b - a;
    if d >= 0.0 {
        return d;
    }
    (b + PI) - (a - PI)
}

/// IEEE remainder: `x - n·y` with `n` the integer nearest `x / y`.
fn remainder(x: f64, y: f64) -> f64 {
    x - (x / y).round_ties_even() * y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_empty_and_full() {
        assert!(ArcInterval::empty().is_empty());
        assert!(ArcInterval::full().is_full());
        assert!(!ArcInterval::empty().contains(0.0));
        assert!(ArcInterval::full().contains(-PI));
        assert!(ArcInterval::full().contains(PI));
        assert_eq!(ArcInterval::empty().length(), -1.0);
        assert_relative_eq!(ArcInterval::full().length(), 2.0 * PI);
    }

    #[test]
    fn test_inverted_contains() {
        // From 170 degrees through 180 to -170 degrees.
        let i = ArcInterval::new(3.0, -3.0);
        assert!(i.is_inverted());
        assert!(i.contains(PI));
        assert!(i.contains(-PI));
        assert!(i.contains(3.1));
        assert!(!i.contains(0.0));
        assert_relative_eq!(i.length(), 2.0 * PI - 6.0, epsilon = 1e-15);
    }

    #[test]
    fn test_from_point_pair() {
        let i = ArcInterval::from_point_pair(-3.0, 3.0);
        assert_eq!(i, ArcInterval { lo: 3.0, hi: -3.0 });
        let i = ArcInterval::from_point_pair(0.0, 1.0);
        assert_eq!(i, ArcInterval { lo: 0.0, hi: 1.0 });
        let i = ArcInterval::from_point_pair(-PI, -PI);
        assert_eq!(i, ArcInterval { lo: PI, hi: PI });
    }

    #[test]
    fn test_add_point() {
        let i = ArcInterval::empty().add_point(0.0).add_point(FRAC_PI_2);
        assert_eq!(i, ArcInterval { lo: 0.0, hi: FRAC_PI_2 });
        // Grows the short way round.
        let i = ArcInterval::empty().add_point(3.0).add_point(-3.0);
        assert!(i.is_inverted());
        assert!(i.contains(PI));
        assert_eq!(ArcInterval::empty().add_point(4.0), ArcInterval::empty());
    }

    #[test]
    fn test_union_and_intersection() {
        let a = ArcInterval::new(0.0, 1.0);
        let b = ArcInterval::new(0.5, 2.0);
        assert_eq!(a.union(b), ArcInterval::new(0.0, 2.0));
        assert_eq!(a.intersection(b), ArcInterval::new(0.5, 1.0));
        assert!(a.intersects(b));

        let c = ArcInterval::new(3.0, -3.0);
        assert!(!a.intersects(c));
        assert!(a.intersection(c).is_empty());
        // The gap from 1 to 3 is shorter than the one from -3 to 0.
        assert_eq!(a.union(c), ArcInterval::new(0.0, -3.0));
        assert!(ArcInterval::new(-2.0, 2.0).union(ArcInterval::new(1.0, -1.0)).is_full());
    }

    #[test]
    fn test_expanded() {
        let i = ArcInterval::new(0.0, 1.0).expanded(0.5);
        assert_relative_eq!(i.lo, -0.5);
        assert_relative_eq!(i.hi, 1.5);
        assert!(ArcInterval::new(0.0, 3.0).expanded(2.0).is_full());
        assert!(ArcInterval::new(0.0, 1.0).expanded(-0.6).is_empty());
        assert!(ArcInterval::empty().expanded(1.0).is_empty());
        // Wraps through ±π.
        let i = ArcInterval::new(3.0, 3.1).expanded(0.2);
        assert!(i.is_inverted());
        assert!(i.contains(PI));
        assert!(i.contains(2.85));
    }
}
