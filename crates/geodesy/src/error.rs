/// Errors raised when data enters the geodesic engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeodesyError {
    /// A longitude/latitude pair outside `[-180, 180] x [-90, 90]`, or not finite.
    #[error("coordinate out of range: lon={lon}, lat={lat}")]
    CoordinateOutOfRange { lon: f64, lat: f64 },

    /// A boundary sample density of zero.
    #[error("sample density must be at least 1")]
    ZeroSampleDensity,
}
