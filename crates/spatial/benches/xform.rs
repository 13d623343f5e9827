//! Benchmark: transform composition against raw matrix multiplication.
//!
//! Composition between stateless frames should cost exactly one matrix
//! multiply; the runtime-checked variant adds one integer compare.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use spatial::{Camera, Matrix, Player, PlayerAtFrame, World, Xform, in_sequence};

fn filled_matrix(seed: f32) -> Matrix {
    Matrix::from_fn(|row, col| seed + (row * 4 + col) as f32)
}

fn composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");

    let lhs = filled_matrix(1.0);
    let rhs = filled_matrix(2.0);
    group.bench_function("matrix_multiplication", |b| {
        b.iter(|| black_box(rhs * lhs));
    });

    let world_to_player = Xform::new(filled_matrix(1.0), World, Player);
    let player_to_camera = Xform::new(filled_matrix(2.0), Player, Camera);
    group.bench_function("stateless_concatenation", |b| {
        b.iter(|| black_box(in_sequence(world_to_player, player_to_camera)));
    });

    let at_frame = PlayerAtFrame::new(31);
    let world_to_frame = Xform::new(filled_matrix(1.0), World, at_frame);
    let frame_to_camera = Xform::new(filled_matrix(2.0), at_frame, Camera);
    group.bench_function("runtime_checked_concatenation", |b| {
        b.iter(|| black_box(in_sequence(world_to_frame, frame_to_camera)));
    });

    group.finish();
}

criterion_group!(benches, composition);
criterion_main!(benches);
