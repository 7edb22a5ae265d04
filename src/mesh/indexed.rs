use crate::prelude::*;
use crate::traits::check_ids;

/// Shape tag of a cell in an [`IndexedMesh`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[non_exhaustive]
pub enum CellShape {
    Tetrahedron,
}

impl CellShape {
    /// number of point indices a cell of this shape references
    pub fn num_points(&self) -> usize {
        match self {
            CellShape::Tetrahedron => 4,
        }
    }
}

#[derive(Deref, Into, Clone, PartialEq, Debug)]
/// Point coordinates of a mesh, one `[x, y, z]` row per point
pub struct Points(Array2<f64>);

impl Default for Points {
    fn default() -> Self {
        Self(Array2::zeros((0, 3)))
    }
}

impl Points {
    pub fn from_coordinates(coordinates: &[[f64; 3]]) -> Self {
        Self(Array2::from_shape_fn((coordinates.len(), 3), |(i, j)| {
            coordinates[i][j]
        }))
    }

    pub fn get(&self, id: usize) -> Option<[f64; 3]> {
        (id < self.0.nrows()).then(|| {
            let row = self.0.row(id);
            [row[0], row[1], row[2]]
        })
    }
}

/// A borrowed view of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<'a> {
    pub shape: CellShape,
    pub point_ids: &'a [usize],
}

/// An unstructured mesh of points and cells with attribute data on both.
///
/// Cells are stored the way VTK stores them: a single connectivity list, an offset
/// per cell into that list and a shape tag per cell. The mesh only ever grows; the
/// one exception to append-only access is the orientation pass, which may swap two
/// indices inside a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    points: Points,
    connectivity: Vec<usize>,
    // offsets.len() == num_cells + 1, offsets[0] == 0
    offsets: Vec<usize>,
    shapes: Vec<CellShape>,
    point_data: AttributeTable,
    cell_data: AttributeTable,
}

impl Default for IndexedMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexedMesh {
    /// An empty mesh without attribute arrays
    pub fn new() -> Self {
        Self::with_tables(AttributeTable::new(), AttributeTable::new())
    }

    /// An empty mesh whose point and cell tables hold the given (empty) arrays
    pub fn with_tables(point_data: AttributeTable, cell_data: AttributeTable) -> Self {
        Self {
            points: Points::default(),
            connectivity: Vec::new(),
            offsets: vec![0],
            shapes: Vec::new(),
            point_data,
            cell_data,
        }
    }

    /// A mesh seeded with points and their attribute tuples, and no cells.
    ///
    /// Every array of `point_data` must have one tuple per point. `cell_data` is only
    /// used for its layout; the seeded mesh has no cells, so no cell tuples.
    pub fn from_points(
        points: &[[f64; 3]],
        point_data: AttributeTable,
        cell_data: &AttributeTable,
    ) -> Result<Self, DecomposeError> {
        point_data.check_len(points.len())?;

        let mut mesh = Self::with_tables(point_data, cell_data.empty_like());
        mesh.points = Points::from_coordinates(points);

        Ok(mesh)
    }

    pub fn num_points(&self) -> usize {
        self.points.nrows()
    }

    pub fn num_cells(&self) -> usize {
        self.shapes.len()
    }

    pub fn points(&self) -> &Points {
        &self.points
    }

    pub fn point(&self, id: usize) -> Option<[f64; 3]> {
        self.points.get(id)
    }

    pub fn cell(&self, id: usize) -> Option<Cell<'_>> {
        let shape = *self.shapes.get(id)?;
        let point_ids = &self.connectivity[self.offsets[id]..self.offsets[id + 1]];
        Some(Cell { shape, point_ids })
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        (0..self.num_cells()).filter_map(move |id| self.cell(id))
    }

    /// the flat connectivity list of every cell
    pub fn connectivity(&self) -> &[usize] {
        &self.connectivity
    }

    pub fn point_data(&self) -> &AttributeTable {
        &self.point_data
    }

    pub fn cell_data(&self) -> &AttributeTable {
        &self.cell_data
    }

    pub(crate) fn point_data_mut(&mut self) -> &mut AttributeTable {
        &mut self.point_data
    }

    pub(crate) fn cell_data_mut(&mut self) -> &mut AttributeTable {
        &mut self.cell_data
    }

    /// Arithmetic mean of the coordinates of the points at `ids`
    pub fn mean_point(&self, ids: &[usize]) -> Result<[f64; 3], DecomposeError> {
        crate::traits::check_mean_ids(ids, self.num_points())?;

        let mut sum = [0.0; 3];
        for id in ids {
            let row = self.points.row(*id);
            sum.iter_mut().zip(row).for_each(|(s, x)| *s += x);
        }

        let count = ids.len() as f64;
        Ok(sum.map(|s| s / count))
    }

    /// Append a point and return its index. Point attribute tuples are appended
    /// separately.
    pub(crate) fn push_point(&mut self, point: [f64; 3]) -> Result<usize, DecomposeError> {
        self.points.0.push_row(ArrayView1::from(&point[..]))?;
        Ok(self.num_points() - 1)
    }

    /// Append a cell and return its index. Cell attribute tuples are appended
    /// separately.
    pub(crate) fn push_cell(&mut self, shape: CellShape, point_ids: &[usize]) -> Result<usize, DecomposeError> {
        if point_ids.len() != shape.num_points() {
            return Err(CellArityMismatch::new(shape, shape.num_points(), point_ids.len()).into());
        }
        check_ids(point_ids, self.num_points())?;

        self.connectivity.extend_from_slice(point_ids);
        self.offsets.push(self.connectivity.len());
        self.shapes.push(shape);

        Ok(self.num_cells() - 1)
    }

    /// exchange two point indices of a cell, used to flip its orientation
    pub(crate) fn swap_cell_points(&mut self, cell: usize, a: usize, b: usize) {
        let start = self.offsets[cell];
        self.connectivity.swap(start + a, start + b);
    }

    /// Append every point, cell and attribute tuple of `other`, shifting its point
    /// indices past the points already in this mesh.
    ///
    /// Returns the range of cell indices that the cells of `other` received.
    pub fn append(&mut self, other: &IndexedMesh) -> Result<std::ops::Range<usize>, DecomposeError> {
        let point_offset = self.num_points();
        let first_cell = self.num_cells();

        // a layout mismatch must leave this mesh untouched
        self.point_data.check_compatible(&other.point_data)?;
        self.cell_data.check_compatible(&other.cell_data)?;

        self.points.0.append(Axis(0), other.points.view())?;
        self.point_data.extend_from(&other.point_data)?;
        self.cell_data.extend_from(&other.cell_data)?;

        let connectivity_offset = self.connectivity.len();
        self.connectivity
            .extend(other.connectivity.iter().map(|id| id + point_offset));
        self.offsets
            .extend(other.offsets[1..].iter().map(|offset| offset + connectivity_offset));
        self.shapes.extend_from_slice(&other.shapes);

        Ok(first_cell..self.num_cells())
    }
}
