//! Structural validation of polylines.

use super::Polyline;
use crate::error::ValidationError;
use tracing::debug;

impl Polyline {
    /// Checks that every vertex is unit length and that no two adjacent
    /// vertices are identical or antipodal.
    ///
    /// Reports the first violation found: unit length is checked over all
    /// vertices before any adjacent pair. Non-adjacent antipodal vertices
    /// are allowed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let result = self.find_validation_error();
        if let Err(err) = &result {
            debug!(error = %err, vertices = self.num_vertices(), "polyline failed validation");
        }
        result
    }

    fn find_validation_error(&self) -> Result<(), ValidationError> {
        if let Some(index) = self.vertices().iter().position(|p| !p.is_unit()) {
            return Err(ValidationError::NotUnitLength { index });
        }
        for (first, pair) in self.vertices().windows(2).enumerate() {
            let (prev, cur) = (pair[0], pair[1]);
            let second = first + 1;
            if prev == cur {
                return Err(ValidationError::IdenticalVertices { first, second });
            }
            if prev == -cur {
                return Err(ValidationError::AntipodalVertices { first, second });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Point, Vec3};
    use crate::testing::parse_polyline;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::from_coords(x, y, z)
    }

    #[test]
    fn test_valid_zigzag() {
        let line = parse_polyline("0:0, 2:1, 0:2, 2:3, 0:4, 2:5, 0:6");
        assert_eq!(line.validate(), Ok(()));
        assert_eq!(Polyline::default().validate(), Ok(()));
    }

    #[test]
    fn test_not_unit_length() {
        let line = Polyline::new(vec![
            p(0.0, 1.0, 0.0),
            Point::from_vec_unchecked(Vec3::new(10.0, 3.0, 7.0)),
            p(0.0, 0.0, 1.0),
        ]);
        assert_eq!(
            line.validate(),
            Err(ValidationError::NotUnitLength { index: 1 })
        );
    }

    #[test]
    fn test_adjacent_identical() {
        let line = Polyline::new(vec![
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 0.0),
        ]);
        assert_eq!(
            line.validate(),
            Err(ValidationError::IdenticalVertices { first: 1, second: 2 })
        );
    }

    #[test]
    fn test_antipodal_vertices() {
        let pt = p(1.0, 1.0, 0.0);

        let separated = Polyline::new(vec![p(0.0, 1.0, 0.0), pt, p(0.0, 0.0, 1.0), -pt]);
        assert_eq!(separated.validate(), Ok(()));

        let adjacent = Polyline::new(vec![p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0), pt, -pt]);
        assert_eq!(
            adjacent.validate(),
            Err(ValidationError::AntipodalVertices { first: 2, second: 3 })
        );
    }

    #[test]
    fn test_error_messages_name_vertices() {
        let err = ValidationError::IdenticalVertices { first: 4, second: 5 };
        assert_eq!(err.to_string(), "vertices 4 and 5 are identical");
    }
}
