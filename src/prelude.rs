//! Common traits and types that are useful for working with `vtk_polyhedra`
#![allow(unused_imports)]

pub use crate::array::{AttributeArray, AttributeTable, BitArray, NumericArray, TextArray};
pub use crate::decompose::{DecomposeError, DecomposeOptions, ErrorPolicy, Orientation};
pub use crate::grid::PolyhedralGrid;
pub use crate::mesh::{CellShape, Face, IndexedMesh, Polyhedron};
pub use crate::traits::{Interpolate, Numeric, Precision};

pub(crate) use crate::decompose::{
    AttributeKindMismatch, AttributeLengthMismatch, CellArityMismatch, DegenerateFace, EmptyIndexSet,
    EmptyPolyhedron, IndexOutOfRange,
};
pub(crate) use crate::Error;

pub(crate) use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};

pub(crate) use ndarray::{Array1, Array2, ArrayView1, Axis};
