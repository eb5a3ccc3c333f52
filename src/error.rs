use thiserror::Error;

/// Top-level error type for the Tessera CSG engine.
#[derive(Debug, Error)]
pub enum TesseraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    World(#[from] WorldError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the brush world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("brush not found (removed or stale id)")]
    BrushNotFound,
}

/// Convenience type alias for results using [`TesseraError`].
pub type Result<T> = std::result::Result<T, TesseraError>;
