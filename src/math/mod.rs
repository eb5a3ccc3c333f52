pub mod frustum;
pub mod polygon;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Half-extent of the seed polygon a brush plane is clipped from.
///
/// Also the working-volume limit: brush hulls must fit inside
/// `|coordinate| < WORLD_EXTENT` to count as bounded.
pub const WORLD_EXTENT: f64 = 1.0e5;

/// Distance a volume sample point is pushed off a fragment plane
/// when classifying the front/back side.
pub const SIDE_SAMPLE_OFFSET: f64 = 1.0e-4;
