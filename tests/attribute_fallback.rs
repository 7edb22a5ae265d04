use vtk_polyhedra::prelude::*;

fn cube() -> Polyhedron {
    let points = vec![
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
    ];
    let faces = vec![
        Face::from([0, 1, 3, 6]),
        Face::from([0, 2, 5, 1]),
        Face::from([0, 6, 4, 2]),
        Face::from([1, 5, 7, 3]),
        Face::from([6, 3, 7, 4]),
        Face::from([2, 4, 7, 5]),
    ];
    Polyhedron::new(points, faces)
}

fn point_data() -> AttributeTable {
    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];

    AttributeTable::new()
        .with_array(AttributeArray::text("label", TextArray::from_strings(names)))
        .with_array(AttributeArray::bit(
            "mask",
            BitArray::from_bools([true, false, true, true, false, true, true, true]),
        ))
        .with_array(AttributeArray::numeric(
            "id",
            NumericArray::<i32>::from_scalars(vec![0, 1, 2, 3, 4, 5, 6, 7]),
        ))
        .with_array(AttributeArray::numeric(
            "velocity",
            NumericArray::<f32>::from_tuples(&[[1.0, 0.0, -1.0]; 8]),
        ))
}

fn cell_data() -> AttributeTable {
    AttributeTable::new()
        .with_array(AttributeArray::scalars("pressure", vec![101.325]))
        .with_array(AttributeArray::text("block", TextArray::from_strings(["inlet"])))
        .with_array(AttributeArray::bit("active", BitArray::from_bools([true])))
        .with_array(AttributeArray::numeric(
            "material",
            NumericArray::<u8>::from_scalars(vec![3]),
        ))
}

fn decompose() -> IndexedMesh {
    vtk_polyhedra::decompose(&cube(), &point_data(), &cell_data(), DecomposeOptions::default()).unwrap()
}

#[test]
fn text_points_get_empty_strings() {
    let mesh = decompose();
    let label = mesh.point_data().get("label").unwrap().as_text().unwrap();

    assert_eq!(label.tuple(0), Some(&["a".to_string()][..]));
    assert_eq!(label.tuple(7), Some(&["h".to_string()][..]));
    for id in 8..15 {
        assert_eq!(label.tuple(id), Some(&[String::new()][..]));
    }
    assert_eq!(label.tuple(15), None);
}

#[test]
fn bit_points_get_cleared_bits() {
    let mesh = decompose();
    let mask = mesh.point_data().get("mask").unwrap().as_bit().unwrap();

    let bits: Vec<bool> = (0..15).map(|id| mask.get(id, 0).unwrap()).collect();
    assert_eq!(
        bits,
        vec![
            true, false, true, true, false, true, true, true, //
            false, false, false, false, false, false, false,
        ]
    );
}

#[test]
fn numeric_points_are_averaged_per_component() {
    let mesh = decompose();

    let id = mesh.point_data().get("id").unwrap().as_numeric::<i32>().unwrap();
    // face [0, 1, 3, 6] averages to 2.5, rounded away from zero
    assert_eq!(id[[8, 0]], 3);
    // face [0, 6, 4, 2] averages to 3
    assert_eq!(id[[10, 0]], 3);

    let velocity = mesh.point_data().get("velocity").unwrap().as_numeric::<f32>().unwrap();
    assert_eq!(velocity.dim(), (15, 3));
    for row in velocity.rows() {
        assert_eq!(row.to_vec(), vec![1.0, 0.0, -1.0]);
    }
}

#[test]
fn original_point_data_is_preserved() {
    let mesh = decompose();
    let original: Vec<usize> = (0..8).collect();

    assert_eq!(mesh.point_data().gather(&original).unwrap(), point_data());
}

#[test]
fn cell_data_is_copied_to_every_tetrahedron() {
    let mesh = decompose();
    let source = cell_data();

    mesh.cell_data().check_len(24).unwrap();
    for cell_id in 0..mesh.num_cells() {
        assert_eq!(mesh.cell_data().gather(&[cell_id]).unwrap(), source);
    }

    let active = mesh.cell_data().get("active").unwrap().as_bit().unwrap();
    assert_eq!(active.as_bytes(), &[0xff, 0xff, 0xff]);
}

#[test]
fn array_order_and_names_survive() {
    let mesh = decompose();

    let names: Vec<&str> = mesh.point_data().iter().map(AttributeArray::name).collect();
    assert_eq!(names, vec!["label", "mask", "id", "velocity"]);

    let kinds: Vec<String> = mesh.cell_data().iter().map(|a| a.kind().to_string()).collect();
    assert_eq!(kinds, vec!["Float64", "String", "Bit", "UInt8"]);
}

#[test]
fn cell_data_needs_exactly_one_tuple() {
    let cell_data = AttributeTable::new().with_array(AttributeArray::scalars("p", vec![1.0, 2.0]));

    let err = vtk_polyhedra::decompose(&cube(), &point_data(), &cell_data, DecomposeOptions::default())
        .unwrap_err();
    assert!(matches!(err, DecomposeError::AttributeLengthMismatch(_)));
}
