use crate::prelude::*;
use std::ops::Range;

/// Signed volume of the tetrahedron `(a, b, c, d)`, times six.
///
/// Positive when `d` lies on the side of the triangle `(a, b, c)` that its
/// counter-clockwise winding faces.
pub fn signed_volume(a: [f64; 3], b: [f64; 3], c: [f64; 3], d: [f64; 3]) -> f64 {
    let ab = sub(b, a);
    let ac = sub(c, a);
    let ad = sub(d, a);

    let cross = [
        ab[1] * ac[2] - ab[2] * ac[1],
        ab[2] * ac[0] - ab[0] * ac[2],
        ab[0] * ac[1] - ab[1] * ac[0],
    ];

    cross[0] * ad[0] + cross[1] * ad[1] + cross[2] * ad[2]
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Flip every tetrahedron in `cells` whose signed volume is negative by swapping its
/// first two points. Flat tetrahedra are left untouched.
///
/// Returns the number of flipped cells.
pub fn orient_positive(cells: Range<usize>, mesh: &mut IndexedMesh) -> usize {
    let mut flipped = 0;

    for id in cells {
        let volume = match mesh.cell(id) {
            Some(cell) if cell.shape == CellShape::Tetrahedron => {
                let corner = |i: usize| mesh.point(cell.point_ids[i]).unwrap_or_default();
                signed_volume(corner(0), corner(1), corner(2), corner(3))
            }
            _ => continue,
        };

        if volume < 0.0 {
            mesh.swap_cell_points(id, 0, 1);
            flipped += 1;
        }
    }

    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_sign_follows_winding() {
        let o = [0.0, 0.0, 0.0];
        let x = [1.0, 0.0, 0.0];
        let y = [0.0, 1.0, 0.0];
        let z = [0.0, 0.0, 1.0];

        assert_eq!(signed_volume(o, x, y, z), 1.0);
        assert_eq!(signed_volume(x, o, y, z), -1.0);
        assert_eq!(signed_volume(o, x, y, [2.0, 2.0, 0.0]), 0.0);
    }

    #[test]
    fn negative_cells_are_flipped() {
        let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let mut mesh = IndexedMesh::from_points(&points, AttributeTable::new(), &AttributeTable::new()).unwrap();
        mesh.push_cell(CellShape::Tetrahedron, &[0, 1, 2, 3]).unwrap();
        mesh.push_cell(CellShape::Tetrahedron, &[1, 0, 2, 3]).unwrap();

        assert_eq!(orient_positive(0..2, &mut mesh), 1);
        assert_eq!(mesh.cell(1).unwrap().point_ids, &[0, 1, 2, 3]);
    }
}
