#![doc = include_str!("../README.md")]

pub mod array;
pub mod decompose;
pub mod grid;
pub mod mesh;
pub mod prelude;
mod traits;

pub use traits::Interpolate;
pub use traits::Numeric;
pub use traits::Precision;

pub use array::{AttributeArray, AttributeTable};
pub use array::{BitArray, NumericArray, TextArray};

pub use mesh::{CellShape, Face, IndexedMesh, Polyhedron};

pub use decompose::decompose;
pub use decompose::DecomposeError;
pub use decompose::{DecomposeOptions, ErrorPolicy, Orientation};

pub use grid::{decompose_grid, GridDecomposition, PolyhedralGrid};

pub use ndarray;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not decompose polyhedron: {0}")]
    Decompose(#[from] DecomposeError),
    #[error("Could not decompose cell {cell_id}: {source}")]
    CellFailed {
        cell_id: usize,
        #[source]
        source: DecomposeError,
    },
}
