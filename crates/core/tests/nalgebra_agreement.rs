//! Cross-checks `Vector3` against nalgebra's implementations of the same
//! operations.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vector3_core::Vector3;

type NaVec = nalgebra::Vector3<f64>;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_pair(rng: &mut StdRng) -> (Vector3, Vector3) {
    let mut component = || rng.random_range(-50.0..50.0);
    let a = Vector3::new(component(), component(), component());
    let b = Vector3::new(component(), component(), component());
    (a, b)
}

#[test]
fn test_products_agree_with_nalgebra() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let (a, b) = random_pair(&mut rng);
        let (na, nb): (NaVec, NaVec) = (a.into(), b.into());

        assert_relative_eq!(a.dot(&b), na.dot(&nb), epsilon = 1e-9);
        assert_relative_eq!(a.cross(&b), Vector3::from(na.cross(&nb)), epsilon = 1e-9);
        assert_relative_eq!(a.magnitude(), na.norm(), epsilon = 1e-9);
    }
}

#[test]
fn test_angle_and_unit_agree_with_nalgebra() {
    let mut rng = StdRng::seed_from_u64(0xA11CE);
    for _ in 0..200 {
        let (a, b) = random_pair(&mut rng);
        let (na, nb): (NaVec, NaVec) = (a.into(), b.into());

        assert_relative_eq!(a.angle_to(&b).unwrap(), na.angle(&nb), epsilon = 1e-7);
        assert_relative_eq!(
            a.unit().unwrap(),
            Vector3::from(na.normalize()),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_arithmetic_agrees_with_nalgebra() {
    let a = Vector3::new(1.0, -2.0, 3.5);
    let b = Vector3::new(-4.0, 0.5, 2.0);
    let (na, nb): (NaVec, NaVec) = (a.into(), b.into());

    assert_eq!(a + b, Vector3::from(na + nb));
    assert_eq!(a - b, Vector3::from(na - nb));
    assert_eq!(a * 3.0, Vector3::from(na * 3.0));
    assert_eq!(a / 4.0, Vector3::from(na / 4.0));
    assert_eq!(-a, Vector3::from(-na));
}
