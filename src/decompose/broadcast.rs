use crate::prelude::*;
use std::ops::Range;

/// Copy the single tuple of `source` to every cell in `cells`.
///
/// `source` holds the cell attribute data of the polyhedron that was decomposed,
/// exactly one tuple per array. The tuple is copied verbatim, without averaging, so
/// every emitted cell ends up with the same values as the source cell.
///
/// `cells` must be the cells appended last, in order: the cell tables of `mesh` have
/// to cover every cell before `cells.start` and none after.
pub fn broadcast_cell_data(
    source: &AttributeTable,
    cells: Range<usize>,
    mesh: &mut IndexedMesh,
) -> Result<(), DecomposeError> {
    source.check_len(1)?;
    mesh.cell_data().check_len(cells.start)?;

    if cells.end != mesh.num_cells() {
        return Err(IndexOutOfRange::new(cells.end, mesh.num_cells()).into());
    }

    mesh.cell_data_mut().push_repeated(source, 0, cells.len())
}
