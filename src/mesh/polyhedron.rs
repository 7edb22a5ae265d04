use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deref, From, Into)]
/// One side of a polyhedron: an ordered loop of point indices.
///
/// The loop is implicitly closed, the last point connects back to the first. Faces
/// are expected to be wound consistently with the outward orientation of the
/// polyhedron, but this is not checked.
pub struct Face(Vec<usize>);

impl Face {
    pub fn new(point_ids: Vec<usize>) -> Self {
        Self(point_ids)
    }

    /// the point indices of the face in boundary order
    pub fn point_ids(&self) -> &[usize] {
        &self.0
    }

    /// number of distinct point indices referenced by the face
    pub fn distinct_points(&self) -> usize {
        let mut ids = self.0.clone();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// the boundary edges of the face, `(p_i, p_{i+1})` with wraparound
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| (self.0[i], self.0[(i + 1) % n]))
    }
}

impl From<&[usize]> for Face {
    fn from(x: &[usize]) -> Self {
        Self(x.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Face {
    fn from(x: [usize; N]) -> Self {
        Self(x.to_vec())
    }
}

/// A single polyhedral cell: a point list and the faces that index into it.
///
/// The faces should enclose a single solid. Closedness and orientation are the
/// caller's responsibility; the decomposition only requires that every face has at
/// least three distinct points and that every index is valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyhedron {
    points: Vec<[f64; 3]>,
    faces: Vec<Face>,
}

impl Polyhedron {
    pub fn new(points: Vec<[f64; 3]>, faces: Vec<Face>) -> Self {
        Self { points, faces }
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// number of tetrahedra a decomposition of this polyhedron produces
    pub fn num_tetrahedra(&self) -> usize {
        self.faces.iter().map(|face| face.len()).sum()
    }
}
