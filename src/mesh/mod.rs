//! # Mesh Information
//!
//! A [`Polyhedron`] is the input of a decomposition: a list of points and the
//! [`Face`]s that index into it. An [`IndexedMesh`] is the output: points, cells made
//! of point indices, and an [`AttributeTable`](crate::AttributeTable) each for point
//! and cell data.
//!
//! The distinction mirrors how the two are used. A polyhedron is read-only and is
//! described by its boundary, while an indexed mesh is built up by appending points
//! and cells and is handed on as a value once it is complete.
//!
//! ## Point identity
//!
//! A point is identified by its row in the mesh for the whole lifetime of the mesh.
//! Decomposing a polyhedron with `P` points and `F` faces produces a mesh whose first
//! `P` points are the polyhedron's points in their original order, followed by one
//! barycenter per face (in face order) and finally the cell barycenter.

mod indexed;
mod polyhedron;

pub use indexed::{Cell, CellShape, IndexedMesh, Points};
pub use polyhedron::{Face, Polyhedron};
