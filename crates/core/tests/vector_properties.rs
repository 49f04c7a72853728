//! Algebraic properties of `Vec3` and its free functions, checked over
//! seeded random inputs.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ray_vec_core::sampling::random_f32_range;
use ray_vec_core::{cross, dot, random_vector_range, reflect, unit_vector, Vec3};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Random vector pairs with components in [-10, 10)
fn vector_pairs(seed: u64, n: usize) -> Vec<(Vec3, Vec3)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                random_vector_range(&mut rng, -10.0, 10.0),
                random_vector_range(&mut rng, -10.0, 10.0),
            )
        })
        .collect()
}

#[test]
fn test_commutativity() {
    for (u, v) in vector_pairs(1, 500) {
        assert_eq!(u + v, v + u);
        assert_eq!(u * v, v * u);
        assert_eq!(dot(u, v), dot(v, u));
        assert_eq!(cross(u, v), -cross(v, u));
    }
}

#[test]
fn test_length_matches_length_squared() {
    for (u, _) in vector_pairs(2, 500) {
        assert_relative_eq!(u.length() * u.length(), u.length_squared(), max_relative = 1e-5);
    }
}

#[test]
fn test_unit_vector_has_unit_length() {
    for (u, _) in vector_pairs(3, 500) {
        if u.near_zero() {
            continue;
        }
        assert_relative_eq!(unit_vector(u).length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_reflect_reference_case() {
    let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_reflect_preserves_length() {
    for (v, n) in vector_pairs(4, 200) {
        if n.near_zero() {
            continue;
        }
        let r = reflect(v, unit_vector(n));
        assert_relative_eq!(r.length(), v.length(), max_relative = 1e-4);
    }
}

#[test]
fn test_cross_reference_case() {
    assert_eq!(
        cross(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        Vec3::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn test_near_zero_reference_cases() {
    assert!(Vec3::new(0.0, 0.0, 0.0).near_zero());
    assert!(!Vec3::new(1e-3, 0.0, 0.0).near_zero());
}

#[test]
fn test_scalar_subtraction_is_not_commutative() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(5.0 - v, Vec3::new(4.0, 3.0, 2.0));
    assert_eq!(v - 5.0, Vec3::new(-4.0, -3.0, -2.0));
    assert_eq!(5.0 - v, -(v - 5.0));
}

#[test]
fn test_scalar_subtraction_round_trip() {
    let mut rng = StdRng::seed_from_u64(5);
    for (v, _) in vector_pairs(6, 500) {
        let s = random_f32_range(&mut rng, -10.0, 10.0);
        let back = (v - s) + s;
        for i in 0..3 {
            assert_relative_eq!(back[i], v[i], epsilon = 1e-5);
        }
    }
    // Exactly representable values round-trip bit for bit
    let v = Vec3::new(1.5, -2.25, 8.0);
    assert_eq!((v - 0.5) + 0.5, v);
}

#[test]
fn test_text_formatting() {
    assert_eq!(Vec3::new(1.5, 2.0, -3.25).to_string(), "1.5 2 -3.25");
}
