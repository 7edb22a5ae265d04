//! # Polyhedron decomposition
//!
//! [`decompose`] splits one polyhedral cell into tetrahedra that all share a point at
//! the barycenter of the cell:
//!
//! 1. the polyhedron's points and their attribute tuples are copied into a new mesh
//! 2. every face gets a barycenter point ([`face_barycenter`])
//! 3. the cell gets a barycenter point, the mean of the face barycenters
//!    ([`cell_barycenter`])
//! 4. every face edge is connected to its face barycenter and the cell barycenter
//!    ([`emit_fan`])
//! 5. the cell's attribute tuple is copied to every tetrahedron
//!    ([`broadcast_cell_data`])
//!
//! The building blocks are public so a caller can run them on a mesh of its own, but
//! only [`decompose`] guarantees that a failure leaves nothing half-built behind.

mod broadcast;
mod cell;
mod error;
mod face;
mod fan;
mod options;
mod orient;

pub use broadcast::broadcast_cell_data;
pub use cell::cell_barycenter;
pub use error::*;
pub use face::face_barycenter;
pub use fan::emit_fan;
pub use options::{DecomposeOptions, ErrorPolicy, Orientation};
pub use orient::{orient_positive, signed_volume};

use crate::prelude::*;

/// Decompose a polyhedron into tetrahedra anchored at its face and cell barycenters.
///
/// `point_data` must hold one tuple per point of `polyhedron` and `cell_data` exactly
/// one tuple, the data of the polyhedron itself. The returned mesh has
/// `P + F + 1` points and one tetrahedron per face edge, with point data interpolated
/// onto the barycenters and the cell tuple copied to every tetrahedron.
///
/// ```
/// use vtk_polyhedra::prelude::*;
///
/// // a tetrahedron described by its four triangular faces
/// let polyhedron = Polyhedron::new(
///     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
///     vec![
///         Face::from([0, 2, 1]),
///         Face::from([0, 1, 3]),
///         Face::from([1, 2, 3]),
///         Face::from([0, 3, 2]),
///     ],
/// );
///
/// let mesh = vtk_polyhedra::decompose(
///     &polyhedron,
///     &AttributeTable::new(),
///     &AttributeTable::new(),
///     DecomposeOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(mesh.num_points(), 4 + 4 + 1);
/// assert_eq!(mesh.num_cells(), 12);
/// ```
pub fn decompose(
    polyhedron: &Polyhedron,
    point_data: &AttributeTable,
    cell_data: &AttributeTable,
    options: DecomposeOptions,
) -> Result<IndexedMesh, DecomposeError> {
    tracing::trace!(
        points = polyhedron.num_points(),
        faces = polyhedron.num_faces(),
        "decomposing polyhedron"
    );

    if polyhedron.faces().is_empty() {
        return Err(EmptyPolyhedron.into());
    }
    cell_data.check_len(1)?;

    let mut mesh = IndexedMesh::from_points(polyhedron.points(), point_data.clone(), cell_data)?;

    let face_centers = polyhedron
        .faces()
        .iter()
        .map(|face| face_barycenter(face, &mut mesh))
        .collect::<Result<Vec<_>, _>>()?;

    let cell_center = cell_barycenter(&face_centers, &mut mesh)?;

    let first_cell = mesh.num_cells();
    for (face, face_center) in polyhedron.faces().iter().zip(&face_centers) {
        emit_fan(face, *face_center, cell_center, &mut mesh)?;
    }
    let cells = first_cell..mesh.num_cells();

    if options.orientation == Orientation::PositiveVolume {
        let flipped = orient_positive(cells.clone(), &mut mesh);
        tracing::trace!(flipped, "re-oriented tetrahedra");
    }

    broadcast_cell_data(cell_data, cells, &mut mesh)?;

    tracing::trace!(
        points = mesh.num_points(),
        cells = mesh.num_cells(),
        "polyhedron decomposed"
    );

    Ok(mesh)
}
