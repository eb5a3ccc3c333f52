/// Ambient volume classification id.
///
/// The meaning of particular ids (air, solid, water, ...) is up to the
/// caller; the engine only composes and compares them.
pub type Volume = i32;

/// A pure function mapping an ambient volume id to a resulting id.
///
/// Modeled as a tagged enum rather than an opaque callable so operations
/// stay comparable and cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeOperation {
    /// Replaces any incoming volume with `Fill(v)`.
    Fill(Volume),
    /// Replaces `from` with `to`, passing every other volume through.
    Convert {
        /// Volume id to replace.
        from: Volume,
        /// Replacement id.
        to: Volume,
    },
}

impl VolumeOperation {
    /// Applies the operation to an incoming volume id.
    #[must_use]
    pub fn apply(&self, volume: Volume) -> Volume {
        match *self {
            Self::Fill(with) => with,
            Self::Convert { from, to } => {
                if volume == from {
                    to
                } else {
                    volume
                }
            }
        }
    }
}

impl Default for VolumeOperation {
    fn default() -> Self {
        Self::Fill(0)
    }
}
