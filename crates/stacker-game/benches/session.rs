//! Benchmarks for the alignment cut and the per-frame loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use stacker_core::{Axis, BodyHandle, Extent, GameConfig};
use stacker_game::{align, AutoPlayer, Layer, Session};
use stacker_physics::RapierGateway;
use stacker_test::{RecordingGateway, RecordingHud};

fn layer(x: f32, y: f32, axis: Option<Axis>) -> Layer {
    Layer {
        position: Vec3::new(x, y, 0.0),
        extent: Extent::new(3.0, 3.0),
        axis,
        placed: axis.is_none(),
        body: BodyHandle(0),
    }
}

fn bench_align(c: &mut Criterion) {
    let below = layer(0.0, 0.0, None);
    let partial = layer(1.2, 1.0, Some(Axis::X));
    let miss = layer(4.0, 1.0, Some(Axis::X));

    c.bench_function("align_partial", |b| {
        b.iter(|| black_box(align(black_box(&partial), &below, -10.0)));
    });
    c.bench_function("align_miss", |b| {
        b.iter(|| black_box(align(black_box(&miss), &below, -10.0)));
    });
}

/// Play a centered game for `frames` frames.
fn warm_session<G: stacker_core::Gateway>(gateway: G, frames: usize) -> Session<G, RecordingHud> {
    let mut session = Session::new(GameConfig::default(), gateway, RecordingHud::new())
        .expect("default config is valid");
    let player = AutoPlayer::new(0.0);
    for _ in 0..frames {
        if let Some(event) = player.decide(&session) {
            session.enqueue(event);
        }
        session.frame();
    }
    session
}

fn bench_frame(c: &mut Criterion) {
    let player = AutoPlayer::new(0.0);

    let mut recorded = warm_session(RecordingGateway::new(), 600);
    c.bench_function("frame_recording_gateway", |b| {
        b.iter(|| {
            if let Some(event) = player.decide(&recorded) {
                recorded.enqueue(event);
            }
            black_box(recorded.frame())
        });
    });

    let mut physics = warm_session(RapierGateway::default(), 600);
    c.bench_function("frame_rapier_gateway", |b| {
        b.iter(|| {
            if let Some(event) = player.decide(&physics) {
                physics.enqueue(event);
            }
            black_box(physics.frame())
        });
    });
}

criterion_group!(benches, bench_align, bench_frame);
criterion_main!(benches);
