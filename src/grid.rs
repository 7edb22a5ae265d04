//! # Grids of polyhedra
//!
//! A [`PolyhedralGrid`] is an unstructured grid whose cells are all polyhedra sharing
//! one point set. [`decompose_grid`] decomposes every cell on its own and merges the
//! results into a single [`IndexedMesh`], offsetting point indices as it goes.
//!
//! Each cell is decomposed into its own mesh, so a failing cell never leaves
//! anything behind in the merged output. With the `parallel` feature enabled the
//! cells are decomposed on the rayon thread pool; merging always happens in cell
//! order, so the output does not depend on the feature.

use crate::decompose::{decompose, DecomposeError, DecomposeOptions, ErrorPolicy};
use crate::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Points, point data, polyhedral cells and cell data of an unstructured grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyhedralGrid {
    points: Vec<[f64; 3]>,
    cells: Vec<Vec<Face>>,
    point_data: AttributeTable,
    cell_data: AttributeTable,
}

impl PolyhedralGrid {
    /// A grid over `points` with no cells and no attribute data
    pub fn new(points: Vec<[f64; 3]>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    pub fn with_point_data(mut self, point_data: AttributeTable) -> Self {
        self.point_data = point_data;
        self
    }

    pub fn with_cell_data(mut self, cell_data: AttributeTable) -> Self {
        self.cell_data = cell_data;
        self
    }

    /// Add a polyhedral cell whose faces index the grid's points. Returns the cell id.
    pub fn push_cell(&mut self, faces: Vec<Face>) -> usize {
        self.cells.push(faces);
        self.cells.len() - 1
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    pub fn point_data(&self) -> &AttributeTable {
        &self.point_data
    }

    pub fn cell_data(&self) -> &AttributeTable {
        &self.cell_data
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn faces(&self, cell_id: usize) -> Option<&[Face]> {
        self.cells.get(cell_id).map(Vec::as_slice)
    }

    /// Extract one cell as a standalone polyhedron together with its point data and
    /// its single cell data tuple.
    ///
    /// The polyhedron's points are the distinct grid points its faces reference, in
    /// order of first appearance, and its faces are renumbered to match.
    pub fn polyhedron(
        &self,
        cell_id: usize,
    ) -> Result<(Polyhedron, AttributeTable, AttributeTable), DecomposeError> {
        let faces = self
            .cells
            .get(cell_id)
            .ok_or_else(|| IndexOutOfRange::new(cell_id, self.cells.len()))?;

        let mut global_ids: Vec<usize> = Vec::new();
        let mut local_faces = Vec::with_capacity(faces.len());

        for face in faces {
            let local = face
                .iter()
                .map(|global| match global_ids.iter().position(|id| id == global) {
                    Some(local) => local,
                    None => {
                        global_ids.push(*global);
                        global_ids.len() - 1
                    }
                })
                .collect::<Vec<_>>();
            local_faces.push(Face::new(local));
        }

        let points = global_ids
            .iter()
            .map(|id| {
                self.points
                    .get(*id)
                    .copied()
                    .ok_or_else(|| IndexOutOfRange::new(*id, self.points.len()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let point_data = self.point_data.gather(&global_ids)?;
        let cell_data = self.cell_data.gather(&[cell_id])?;

        Ok((Polyhedron::new(points, local_faces), point_data, cell_data))
    }
}

/// The merged result of [`decompose_grid`]
#[derive(Debug)]
pub struct GridDecomposition {
    /// every decomposed cell, merged into one mesh
    pub mesh: IndexedMesh,
    /// for every cell of `mesh`, the id of the grid cell it was cut from
    pub source_cells: Vec<usize>,
    /// cells left out under [`ErrorPolicy::Skip`], with the reason
    pub skipped: Vec<(usize, DecomposeError)>,
}

/// Decompose every cell of `grid` and merge the results.
///
/// Attribute data of the whole grid is validated up front: a point table that does
/// not match the point count, or a cell table that does not match the cell count,
/// fails the whole call regardless of the error policy. Failures of individual cells
/// are handled according to [`DecomposeOptions::error_policy`].
pub fn decompose_grid(grid: &PolyhedralGrid, options: DecomposeOptions) -> Result<GridDecomposition, Error> {
    grid.point_data.check_len(grid.points.len())?;
    grid.cell_data.check_len(grid.cells.len())?;

    let decompose_cell = |cell_id: usize| -> Result<IndexedMesh, DecomposeError> {
        let (polyhedron, point_data, cell_data) = grid.polyhedron(cell_id)?;
        decompose(&polyhedron, &point_data, &cell_data, options)
    };

    #[cfg(feature = "parallel")]
    let results: Vec<_> = (0..grid.num_cells()).into_par_iter().map(decompose_cell).collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = (0..grid.num_cells()).map(decompose_cell).collect();

    let mut mesh = IndexedMesh::with_tables(grid.point_data.empty_like(), grid.cell_data.empty_like());
    let mut source_cells = Vec::new();
    let mut skipped = Vec::new();

    for (cell_id, result) in results.into_iter().enumerate() {
        match result {
            Ok(part) => {
                let cells = mesh.append(&part)?;
                source_cells.extend(std::iter::repeat(cell_id).take(cells.len()));
            }
            Err(source) => match options.error_policy {
                ErrorPolicy::Skip => {
                    tracing::warn!(cell_id, error = %source, "skipping polyhedral cell");
                    skipped.push((cell_id, source));
                }
                ErrorPolicy::Abort => return Err(Error::CellFailed { cell_id, source }),
            },
        }
    }

    tracing::debug!(
        cells = grid.num_cells(),
        skipped = skipped.len(),
        tetrahedra = mesh.num_cells(),
        "decomposed polyhedral grid"
    );

    Ok(GridDecomposition {
        mesh,
        source_cells,
        skipped,
    })
}
