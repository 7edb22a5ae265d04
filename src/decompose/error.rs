use crate::prelude::*;

/// Every way decomposing a single polyhedron can fail.
///
/// These are structural problems with the input, so there is nothing to retry: the
/// polyhedron is abandoned and no partial mesh is returned.
#[derive(Debug, thiserror::Error, From)]
pub enum DecomposeError {
    #[error("{0}")]
    DegenerateFace(DegenerateFace),
    #[error("{0}")]
    EmptyPolyhedron(EmptyPolyhedron),
    #[error("{0}")]
    EmptyIndexSet(EmptyIndexSet),
    #[error("{0}")]
    AttributeLengthMismatch(AttributeLengthMismatch),
    #[error("{0}")]
    IndexOutOfRange(IndexOutOfRange),
    #[error("{0}")]
    AttributeKindMismatch(AttributeKindMismatch),
    #[error("{0}")]
    CellArityMismatch(CellArityMismatch),
    #[error("failed to append a row to an attribute array: {0}")]
    Shape(ndarray::ShapeError),
}

#[derive(Display, Debug, Clone, PartialEq, Constructor)]
#[display(
    fmt = "face with {points} point indices has only {distinct} distinct points, at least 3 are required"
)]
pub struct DegenerateFace {
    pub points: usize,
    pub distinct: usize,
}

#[derive(Display, Debug, Clone, PartialEq)]
#[display(fmt = "polyhedron has no faces")]
pub struct EmptyPolyhedron;

#[derive(Display, Debug, Clone, PartialEq)]
#[display(fmt = "cannot average an empty set of tuples")]
pub struct EmptyIndexSet;

#[derive(Display, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "attribute array `{name}` has {actual} tuples, expected {expected}")]
pub struct AttributeLengthMismatch {
    pub name: String,
    pub expected: usize,
    pub actual: usize,
}

#[derive(Display, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "index {index} is out of range for {len} entries")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

#[derive(Display, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "attribute array `{name}` cannot be combined: expected {expected}, found {actual}")]
pub struct AttributeKindMismatch {
    pub name: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Display, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "{shape} cell needs {expected} point indices, got {actual}")]
pub struct CellArityMismatch {
    pub shape: CellShape,
    pub expected: usize,
    pub actual: usize,
}
