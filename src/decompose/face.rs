//! Face barycenters
//!
//! Each face gets a new point at the unweighted mean of its points. The barycenter is
//! the plain average of the corner coordinates and corner attribute tuples, it is not
//! area weighted.

use crate::prelude::*;

/// Append the barycenter of `face` to `mesh` and return its point index.
///
/// The new point is the mean of the face's point coordinates. Every point attribute
/// array grows by one tuple: the mean of the face's tuples for numeric arrays, the
/// default value for text and bit arrays.
pub fn face_barycenter(face: &Face, mesh: &mut IndexedMesh) -> Result<usize, DecomposeError> {
    let distinct = face.distinct_points();
    if distinct < 3 {
        return Err(DegenerateFace::new(face.len(), distinct).into());
    }

    mesh.point_data().check_len(mesh.num_points())?;

    let center = mesh.mean_point(face.point_ids())?;
    mesh.point_data_mut().push_interpolated(face.point_ids())?;

    mesh.push_point(center)
}
