//! Shared setup helpers for rebound benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- step

use rebound::glam::Vec3;
use rebound::{Body, StaticBoundary};

/// Radius used by every benchmark body.
pub const RADIUS: f32 = 0.5;

/// A boundary wide enough to hold `n` bodies laid out by [`setup_grid`].
pub fn boundary_for(n: usize) -> StaticBoundary {
    let cols = (n as f32).sqrt().ceil().max(1.0);
    StaticBoundary::new(cols * 0.9 + 1.0).unwrap()
}

/// `n` unit-mass spheres on a square grid with spacing `0.9`, so neighbours
/// overlap slightly and the pair resolver has work to do.
pub fn setup_grid(n: usize) -> Vec<Body> {
    let cols = (n as f32).sqrt().ceil() as usize;
    let offset = (cols as f32 - 1.0) * 0.45;

    (0..n)
        .map(|i| {
            let x = (i % cols) as f32 * 0.9 - offset;
            let y = (i / cols) as f32 * 0.9 - offset;
            let vx = ((i * 37) % 7) as f32 - 3.0;
            let vy = ((i * 11) % 5) as f32 - 2.0;
            let velocity = Vec3::new(vx, vy, 0.0);
            Body::new(
                1.0,
                RADIUS,
                Vec3::new(x, y, 2.0),
                velocity,
                Vec3::new(0.0, 0.0, -9.8),
            )
            .unwrap()
        })
        .collect()
}

/// Two overlapping spheres approaching head-on.
pub fn setup_pair() -> (Body, Body) {
    let a = Body::new(
        1.0,
        RADIUS,
        Vec3::new(-0.45, 0.1, 1.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::ZERO,
    )
    .unwrap();
    let b = Body::new(
        2.0,
        RADIUS,
        Vec3::new(0.45, -0.1, 1.0),
        Vec3::new(-1.0, 0.5, 0.0),
        Vec3::ZERO,
    )
    .unwrap();
    (a, b)
}
