use crate::prelude::*;
use std::ops::Range;

/// Emit the tetrahedral fan of one face and return the indices of the new cells.
///
/// For a face `[p0, p1, .., pn-1]` one tetrahedron
/// `(p_i, p_{i+1 mod n}, face_center, cell_center)` is emitted per boundary edge, so
/// an `n`-gon produces exactly `n` tetrahedra. The winding of the emitted cells
/// follows the winding of the face and is not corrected here, see
/// [`Orientation`](super::Orientation).
///
/// Only geometry is appended: the cell attribute tuples of the new cells are filled
/// in afterwards by [`broadcast_cell_data`](super::broadcast_cell_data).
pub fn emit_fan(
    face: &Face,
    face_center: usize,
    cell_center: usize,
    mesh: &mut IndexedMesh,
) -> Result<Range<usize>, DecomposeError> {
    let first = mesh.num_cells();

    for (a, b) in face.edges() {
        mesh.push_cell(CellShape::Tetrahedron, &[a, b, face_center, cell_center])?;
    }

    Ok(first..mesh.num_cells())
}
