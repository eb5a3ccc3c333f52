pub mod brush;
pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;
pub mod world;

pub use brush::{Brush, BrushId, Face, Fragment, Volume, VolumeOperation};
pub use error::{Result, TesseraError};
pub use geometry::{Box3, Plane, Ray};
pub use tessellation::{triangulate, Triangle};
pub use world::{RayHit, World};
