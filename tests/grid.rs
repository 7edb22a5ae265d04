use vtk_polyhedra::prelude::*;
use vtk_polyhedra::{decompose_grid, Error};

const CUBE_POINTS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 1.0],
];

const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 6],
    [0, 2, 5, 1],
    [0, 6, 4, 2],
    [1, 5, 7, 3],
    [6, 3, 7, 4],
    [2, 4, 7, 5],
];

const CUBE_VALUES: [f64; 8] = [2.0, 5.0, 2.0, 2.0, 2.0, 3.0, 2.0, 3.0];

fn cube_faces(first_point: usize) -> Vec<Face> {
    CUBE_FACES
        .iter()
        .map(|face| Face::new(face.iter().map(|id| id + first_point).collect()))
        .collect()
}

/// Two unit cubes side by side, the second shifted by 2 along x
fn two_cubes() -> PolyhedralGrid {
    let points = CUBE_POINTS
        .iter()
        .copied()
        .chain(CUBE_POINTS.iter().map(|[x, y, z]| [x + 2.0, *y, *z]))
        .collect();
    let values = CUBE_VALUES.iter().chain(CUBE_VALUES.iter()).copied().collect();

    let mut grid = PolyhedralGrid::new(points)
        .with_point_data(AttributeTable::new().with_array(AttributeArray::scalars("scalars", values)))
        .with_cell_data(AttributeTable::new().with_array(AttributeArray::numeric(
            "block",
            NumericArray::<i64>::from_scalars(vec![10, 20]),
        )));
    grid.push_cell(cube_faces(0));
    grid.push_cell(cube_faces(8));
    grid
}

fn scalars(mesh: &IndexedMesh) -> Vec<f64> {
    mesh.point_data()
        .get("scalars")
        .unwrap()
        .as_numeric::<f64>()
        .unwrap()
        .column(0)
        .to_vec()
}

#[test]
fn congruent_cubes() {
    let grid = two_cubes();
    let result = decompose_grid(&grid, DecomposeOptions::default()).unwrap();
    let mesh = &result.mesh;

    assert_eq!(mesh.num_points(), 2 * 15);
    assert_eq!(mesh.num_cells(), 2 * 24);
    assert!(result.skipped.is_empty());

    let values = scalars(mesh);
    let expected = [2.0, 5.0, 2.0, 2.0, 2.0, 3.0, 2.0, 3.0, 2.75, 3.0, 2.0, 3.25, 2.25, 2.5, 2.625];
    assert_eq!(&values[..15], &expected);
    assert_eq!(&values[15..], &expected);

    assert_eq!(mesh.point(14), Some([0.5, 0.5, 0.5]));
    assert_eq!(mesh.point(29), Some([2.5, 0.5, 0.5]));
}

#[test]
fn second_cell_is_offset() {
    let grid = two_cubes();
    let result = decompose_grid(&grid, DecomposeOptions::default()).unwrap();
    let mesh = &result.mesh;

    for cell in mesh.cells().take(24) {
        assert!(cell.point_ids.iter().all(|id| *id < 15));
        assert_eq!(cell.point_ids[3], 14);
    }
    for cell in mesh.cells().skip(24) {
        assert!(cell.point_ids.iter().all(|id| (15..30).contains(id)));
        assert_eq!(cell.point_ids[3], 29);
    }

    assert_eq!(mesh.cell(24).unwrap().point_ids, &[15, 16, 23, 29]);
}

#[test]
fn cell_data_follows_source_cells() {
    let grid = two_cubes();
    let result = decompose_grid(&grid, DecomposeOptions::default()).unwrap();

    let mut source_cells = vec![0; 24];
    source_cells.extend(vec![1; 24]);
    assert_eq!(result.source_cells, source_cells);

    let block = result.mesh.cell_data().get("block").unwrap().as_numeric::<i64>().unwrap();
    for (value, source) in block.column(0).iter().zip(&result.source_cells) {
        assert_eq!(*value, [10, 20][*source]);
    }
}

fn with_degenerate_cell() -> PolyhedralGrid {
    let mut grid = two_cubes();
    let cells = grid.num_cells();

    // a second copy of the first cube with one face collapsed to an edge
    let mut faces = cube_faces(0);
    faces[2] = Face::from([0, 6, 6, 0]);
    grid.push_cell(faces);

    grid.with_cell_data(AttributeTable::new().with_array(AttributeArray::numeric(
        "block",
        NumericArray::<i64>::from_scalars((0..=cells as i64).map(|id| 10 * (id + 1)).collect()),
    )))
}

#[test]
fn skip_leaves_failing_cells_out() {
    let grid = with_degenerate_cell();
    let options = DecomposeOptions::default().error_policy(ErrorPolicy::Skip);
    let result = decompose_grid(&grid, options).unwrap();

    assert_eq!(result.mesh.num_points(), 30);
    assert_eq!(result.mesh.num_cells(), 48);
    assert_eq!(result.skipped.len(), 1);

    let (cell_id, err) = &result.skipped[0];
    assert_eq!(*cell_id, 2);
    assert!(matches!(err, DecomposeError::DegenerateFace(_)));

    result.mesh.point_data().check_len(30).unwrap();
    result.mesh.cell_data().check_len(48).unwrap();
}

#[test]
fn abort_reports_the_failing_cell() {
    let grid = with_degenerate_cell();
    let options = DecomposeOptions::default().error_policy(ErrorPolicy::Abort);
    let err = decompose_grid(&grid, options).unwrap_err();

    match err {
        Error::CellFailed { cell_id, source } => {
            assert_eq!(cell_id, 2);
            assert!(matches!(source, DecomposeError::DegenerateFace(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_grid() {
    let grid = PolyhedralGrid::new(CUBE_POINTS.to_vec());
    let result = decompose_grid(&grid, DecomposeOptions::default()).unwrap();

    assert_eq!(result.mesh.num_points(), 0);
    assert_eq!(result.mesh.num_cells(), 0);
    assert!(result.source_cells.is_empty());
}
