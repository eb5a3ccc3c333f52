pub mod box3;
pub mod plane;
pub mod ray;

pub use box3::Box3;
pub use plane::Plane;
pub use ray::Ray;
