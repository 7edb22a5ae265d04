use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use vtk_polyhedra::prelude::*;

/// `n` sided prism: two n-gon caps and `n` quadrilateral sides
fn prism(n: usize) -> Polyhedron {
    let mut points = Vec::with_capacity(2 * n);
    for i in 0..n {
        let angle = std::f64::consts::TAU * i as f64 / n as f64;
        points.push([angle.cos(), angle.sin(), 0.0]);
        points.push([angle.cos(), angle.sin(), 1.0]);
    }

    let mut faces = vec![
        Face::new((0..n).rev().map(|i| 2 * i).collect()),
        Face::new((0..n).map(|i| 2 * i + 1).collect()),
    ];
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(Face::from([2 * i, 2 * j, 2 * j + 1, 2 * i + 1]));
    }

    Polyhedron::new(points, faces)
}

fn random_point_data(num_points: usize) -> AttributeTable {
    let velocity: Array2<f64> = Array2::random((num_points, 3), Uniform::new(0., 10.));
    let temperature: Array2<f32> = Array2::random((num_points, 1), Uniform::new(250., 350.));

    AttributeTable::new()
        .with_array(AttributeArray::numeric("velocity", NumericArray::new(velocity)))
        .with_array(AttributeArray::numeric("temperature", NumericArray::new(temperature)))
        .with_array(AttributeArray::text(
            "label",
            TextArray::from_strings((0..num_points).map(|i| format!("p{i}"))),
        ))
}

fn decompose_prism(polyhedron: &Polyhedron, point_data: &AttributeTable) -> usize {
    let cell_data = AttributeTable::new().with_array(AttributeArray::scalars("pressure", vec![1.0]));
    let mesh = vtk_polyhedra::decompose(polyhedron, point_data, &cell_data, DecomposeOptions::default())
        .unwrap();
    mesh.num_cells()
}

/// `n` prisms stacked along z, sharing their caps
fn prism_column(sides: usize, n: usize) -> PolyhedralGrid {
    let mut points = Vec::new();
    for level in 0..=n {
        for i in 0..sides {
            let angle = std::f64::consts::TAU * i as f64 / sides as f64;
            points.push([angle.cos(), angle.sin(), level as f64]);
        }
    }

    let values: Array2<f64> = Array2::random((points.len(), 3), Uniform::new(0., 10.));
    let mut grid = PolyhedralGrid::new(points)
        .with_point_data(
            AttributeTable::new().with_array(AttributeArray::numeric("velocity", NumericArray::new(values))),
        )
        .with_cell_data(AttributeTable::new().with_array(AttributeArray::scalars("pressure", vec![1.0; n])));

    for level in 0..n {
        let bottom = level * sides;
        let top = bottom + sides;

        let mut faces = vec![
            Face::new((0..sides).rev().map(|i| bottom + i).collect()),
            Face::new((0..sides).map(|i| top + i).collect()),
        ];
        for i in 0..sides {
            let j = (i + 1) % sides;
            faces.push(Face::from([bottom + i, bottom + j, top + j, top + i]));
        }
        grid.push_cell(faces);
    }

    grid
}

fn decompose_bench(c: &mut Criterion) {
    let hexagonal = prism(6);
    let hexagonal_data = random_point_data(12);
    c.bench_function("decompose prism 6", |b| {
        b.iter(|| decompose_prism(black_box(&hexagonal), black_box(&hexagonal_data)))
    });

    let round = prism(64);
    let round_data = random_point_data(128);
    c.bench_function("decompose prism 64", |b| {
        b.iter(|| decompose_prism(black_box(&round), black_box(&round_data)))
    });
}

fn grid_bench(c: &mut Criterion) {
    let column = prism_column(8, 500);
    c.bench_function("decompose_grid 500 prisms", |b| {
        b.iter(|| {
            vtk_polyhedra::decompose_grid(black_box(&column), DecomposeOptions::default())
                .unwrap()
                .mesh
                .num_cells()
        })
    });
}

criterion_group!(benches, decompose_bench, grid_bench);
criterion_main!(benches);
