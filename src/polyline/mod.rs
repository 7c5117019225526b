//! Polylines on the sphere.
//!
//! A [`Polyline`] is an ordered chain of geodesic edges. This module
//! provides:
//! - Length, centroid and arc-length parametrization
//! - Projection of points onto the chain and side-of-line tests
//! - Validation of the vertex invariants
//! - Intersection with other polylines and with cells
//! - Order-preserving subsampling
//! - Approximate containment of one polyline by another
//!
//! # Example
//!
//! ```
//! use spherum::angle::Angle;
//! use spherum::polyline::Polyline;
//! use spherum::primitives::LatLng;
//!
//! let route = Polyline::from_lat_lngs(&[
//!     LatLng::from_degrees(0.0, 0.0),
//!     LatLng::from_degrees(0.0, 10.0),
//!     LatLng::from_degrees(5.0, 15.0),
//! ]);
//! assert!(route.validate().is_ok());
//! assert!(route.nearly_covers(&route, Angle::from_degrees(1e-9)));
//! ```

mod core;
mod covers;
mod intersect;
mod measure;
mod shape;
mod subsample;
mod validate;

pub use self::core::Polyline;
