use crate::prelude::*;

/// Append the barycenter of the whole polyhedron to `mesh` and return its point index.
///
/// The barycenter is the mean over the face barycenters, not over the polyhedron's
/// own points, and its attribute tuples are likewise averaged from the face
/// barycenter tuples. The two differ whenever points are shared by a different
/// number of faces, e.g. the apex of a pyramid.
pub fn cell_barycenter(face_centers: &[usize], mesh: &mut IndexedMesh) -> Result<usize, DecomposeError> {
    if face_centers.is_empty() {
        return Err(EmptyPolyhedron.into());
    }

    mesh.point_data().check_len(mesh.num_points())?;

    let center = mesh.mean_point(face_centers)?;
    mesh.point_data_mut().push_interpolated(face_centers)?;

    mesh.push_point(center)
}
