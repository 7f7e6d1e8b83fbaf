//! Geodesic primitives on the WGS84 ellipsoid and the boundary-sampling
//! nearest-pair search built on them.
pub mod coord;
pub mod ellipsoid;
pub mod error;
pub mod nearest;
pub mod sample;
pub mod sector;

pub use coord::{check_coord, check_multipolygon};
pub use ellipsoid::{destination, distance_km, distance_m, forward_azimuth, geodesic_circle};
pub use error::GeodesyError;
pub use nearest::{nearest_pair, ClosestPair, SampledShape, ShapeKind};
pub use sample::{sample_boundary, SampleDensity};
pub use sector::Sector;
