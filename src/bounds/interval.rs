//! Closed intervals on the real line.

/// A closed interval `[lo, hi]`. Any interval with `lo > hi` is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The canonical empty interval.
    #[inline]
    pub fn empty() -> Self {
        Self { lo: 1.0, hi: 0.0 }
    }

    /// The interval containing a single point.
    #[inline]
    pub fn from_point(p: f64) -> Self {
        Self { lo: p, hi: p }
    }

    /// The smallest interval containing both points.
    #[inline]
    pub fn from_point_pair(a: f64, b: f64) -> Self {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.lo > self.hi
    }

    /// Returns `hi - lo`, negative for empty intervals.
    #[inline]
    pub fn length(self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn contains(self, p: f64) -> bool {
        self.lo <= p && p <= self.hi
    }

    pub fn contains_interval(self, other: Self) -> bool {
        if other.is_empty() {
            return true;
        }
        self.lo <= other.lo && other.hi <= self.hi
    }

    pub fn intersects(self, other: Self) -> bool {
        if self.lo <= other.lo {
            other.lo <= self.hi && other.lo <= other.hi
        } else {
            self.lo <= other.hi && self.lo <= self.hi
        }
    }

    /// Returns the interval expanded to contain `p`.
    pub fn add_point(self, p: f64) -> Self {
        if self.is_empty() {
            Self::from_point(p)
        } else if p < self.lo {
            Self::new(p, self.hi)
        } else if p > self.hi {
            Self::new(self.lo, p)
        } else {
            self
        }
    }

    /// The smallest interval containing both intervals.
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }

    pub fn intersection(self, other: Self) -> Self {
        Self::new(self.lo.max(other.lo), self.hi.min(other.hi))
    }

    /// Returns the interval grown by `margin` on each side. Empty intervals
    /// stay empty.
    pub fn expanded(self, margin: f64) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::new(self.lo - margin, self.hi + margin)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let e = Interval::empty();
        assert!(e.is_empty());
        assert!(!e.contains(0.5));
        assert!(!e.intersects(Interval::new(0.0, 1.0)));
        assert_eq!(e.add_point(3.0), Interval::from_point(3.0));
        assert!(e.expanded(1.0).is_empty());
    }

    #[test]
    fn test_union_and_intersection() {
        let a = Interval::new(0.0, 2.0);
        let b = Interval::new(1.0, 3.0);
        assert_eq!(a.union(b), Interval::new(0.0, 3.0));
        assert_eq!(a.intersection(b), Interval::new(1.0, 2.0));
        assert!(a.intersects(b));
        assert!(!a.intersects(Interval::new(2.5, 3.0)));
        assert!(a.intersection(Interval::new(2.5, 3.0)).is_empty());
        assert!(a.contains_interval(Interval::new(0.5, 1.5)));
        assert!(!a.contains_interval(b));
    }

    #[test]
    fn test_add_point_and_pair() {
        let i = Interval::from_point_pair(4.0, -1.0);
        assert_eq!(i, Interval::new(-1.0, 4.0));
        assert_eq!(i.add_point(5.0), Interval::new(-1.0, 5.0));
        assert_eq!(i.add_point(-2.0), Interval::new(-2.0, 4.0));
        assert_eq!(i.add_point(0.0), i);
        assert_eq!(i.expanded(0.5), Interval::new(-1.5, 4.5));
    }
}
