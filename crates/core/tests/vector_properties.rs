//! Algebraic and geometric properties of `Vector3`, checked over a seeded
//! sample of random vectors.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};
use vector3_core::{clamp, Vector3, UNIT_TOLERANCE};

const SAMPLES: usize = 500;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Random vector with components in [-100, 100), never the zero vector
fn random_vector(rng: &mut StdRng) -> Vector3 {
    loop {
        let v = Vector3::new(
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
        );
        if v.magnitude() > 1e-3 {
            return v;
        }
    }
}

fn sample_pairs(seed: u64) -> Vec<(Vector3, Vector3)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| (random_vector(&mut rng), random_vector(&mut rng)))
        .collect()
}

#[test]
fn test_construction_round_trip() {
    for (v, _) in sample_pairs(1) {
        let (x, y, z) = v.to_tuple();
        let rebuilt = Vector3::from_slice(&[x, y, z]).unwrap();
        assert_eq!(rebuilt.to_tuple(), (x, y, z));
    }
}

#[test]
fn test_additive_identity_and_inverse() {
    for (v, _) in sample_pairs(2) {
        assert_eq!(v + Vector3::zero(), v);
        assert_eq!(v + (v * -1.0), Vector3::zero());
        assert_eq!(v + (-v), Vector3::zero());
    }
}

#[test]
fn test_addition_and_dot_commute() {
    for (a, b) in sample_pairs(3) {
        assert_eq!(a + b, b + a);
        assert_eq!(a.dot(&b), b.dot(&a));
    }
}

#[test]
fn test_cross_product_anti_commutes() {
    for (a, b) in sample_pairs(4) {
        assert_eq!(a.cross(&b), b.cross(&a) * -1.0);
    }
}

#[test]
fn test_cross_product_is_orthogonal_to_inputs() {
    for (a, b) in sample_pairs(5) {
        let c = a.cross(&b);
        let scale = a.magnitude() * b.magnitude();
        assert_abs_diff_eq!(c.dot(&a) / (scale * a.magnitude()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dot(&b) / (scale * b.magnitude()), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_unit_vectors_have_unit_magnitude() {
    for (v, _) in sample_pairs(6) {
        let u = v.unit().unwrap();
        assert_abs_diff_eq!(u.magnitude(), 1.0, epsilon = UNIT_TOLERANCE);
        assert!(u.is_unit());
    }
}

#[test]
fn test_angle_bounds() {
    for (a, b) in sample_pairs(7) {
        let angle = a.angle_to(&b).unwrap();
        assert!((0.0..=PI).contains(&angle), "angle {angle} out of [0, π]");
        assert_abs_diff_eq!(a.angle_to(&a).unwrap(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(a.angle_to(&-a).unwrap(), PI, epsilon = 1e-6);
    }
}

#[test]
fn test_angle_is_symmetric() {
    for (a, b) in sample_pairs(8) {
        assert_relative_eq!(
            a.angle_to(&b).unwrap(),
            b.angle_to(&a).unwrap(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_orthogonal_vectors_are_right_angles() {
    for (a, b) in sample_pairs(9) {
        // a × b is perpendicular to a whenever a and b are not parallel
        let perpendicular = a.cross(&b);
        if perpendicular.magnitude() < 1e-6 {
            continue;
        }
        assert_relative_eq!(a.angle_to(&perpendicular).unwrap(), FRAC_PI_2, epsilon = 1e-9);
    }
}

#[test]
fn test_cross_magnitude_and_triangle_identities() {
    for (a, b) in sample_pairs(10) {
        let cross_len = a.cross(&b).magnitude();
        assert_relative_eq!(
            a.cross_magnitude(&b).unwrap(),
            cross_len,
            epsilon = 1e-6,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            a.triangle_area(&b).unwrap(),
            cross_len / 2.0,
            epsilon = 1e-6,
            max_relative = 1e-6
        );
    }
}

#[test]
fn test_clamp_stays_within_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let value: f64 = rng.random_range(-10.0..10.0);
        let clamped = clamp(-1.0, 1.0, value);
        assert!((-1.0..=1.0).contains(&clamped));
        if (-1.0..=1.0).contains(&value) {
            assert_eq!(clamped, value);
        }
    }
}
