/// How the emitted tetrahedra are wound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// keep the winding inherited from each face, which is not guaranteed to be
    /// consistent between tetrahedra
    #[default]
    AsEmitted,
    /// flip tetrahedra with a negative signed volume so every cell has
    /// non-negative volume
    PositiveVolume,
}

/// What [`decompose_grid`](crate::decompose_grid) does when a single cell cannot
/// be decomposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// log the failure, leave the cell out of the output and continue
    #[default]
    Skip,
    /// stop at the first failing cell and return its error
    Abort,
}

/// Settings for a decomposition.
///
/// ```
/// use vtk_polyhedra::{DecomposeOptions, ErrorPolicy, Orientation};
///
/// let options = DecomposeOptions::default()
///     .orientation(Orientation::PositiveVolume)
///     .error_policy(ErrorPolicy::Abort);
///
/// assert_eq!(options.orientation, Orientation::PositiveVolume);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecomposeOptions {
    pub orientation: Orientation,
    pub error_policy: ErrorPolicy,
}

impl DecomposeOptions {
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}
