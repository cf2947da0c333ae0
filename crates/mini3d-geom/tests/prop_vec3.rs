use mini3d_geom::Vec3;
use proptest::prelude::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    (a - b).abs() <= atol + rtol * a.abs().max(b.abs())
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    (-1.0e5f32..1.0e5).prop_filter("finite", |v| v.is_finite())
}

fn bounded_nonzero_f32() -> impl Strategy<Value = f32> {
    bounded_f32().prop_filter("nonzero", |v| v.abs() >= 1e-4)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_nondegenerate_vec3() -> impl Strategy<Value = Vec3> {
    (
        bounded_nonzero_f32(),
        bounded_nonzero_f32(),
        bounded_nonzero_f32(),
    )
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // a + b == b + a
    #[test]
    fn add_commutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a + b, b + a, 1e-5));
    }

    // (a + b)·c == a·c + b·c; tolerance scales with the inputs, not the
    // (possibly cancelled-to-zero) result
    #[test]
    fn dot_distributes_over_add(a in arb_vec3(), b in arb_vec3(), c in arb_vec3()) {
        let left = (a + b).dot(c);
        let right = a.dot(c) + b.dot(c);
        let scale = (a.length() + b.length()) * c.length();
        prop_assert!((left - right).abs() <= 1e-4 + 1e-4 * scale);
    }

    // a·(a×b) == 0 and b·(a×b) == 0
    #[test]
    fn cross_is_orthogonal(a in arb_nondegenerate_vec3(), b in arb_nondegenerate_vec3()) {
        let c = a.cross(b);
        let scale = a.length() * b.length() * (a.length() + b.length());
        prop_assert!(a.dot(c).abs() <= 1e-4 + 1e-4 * scale);
        prop_assert!(b.dot(c).abs() <= 1e-4 + 1e-4 * scale);
    }

    // a×b == -(b×a)
    #[test]
    fn cross_anticommutative(a in arb_vec3(), b in arb_vec3()) {
        let sum = a.cross(b) + b.cross(a);
        prop_assert!(vapprox(sum, Vec3::ZERO, 1e-2));
    }

    // |normalize(v)| == 1 for non-degenerate v; zero stays zero
    #[test]
    fn normalized_has_unit_length(v in arb_nondegenerate_vec3()) {
        prop_assert!(approx(v.normalized().length(), 1.0, 1e-3));
    }

    // -v + v == 0
    #[test]
    fn neg_is_additive_inverse(v in arb_vec3()) {
        prop_assert!(vapprox(v + (-v), Vec3::ZERO, 1e-6));
    }

    // horizontal() zeroes y and keeps x/z
    #[test]
    fn horizontal_drops_y(v in arb_vec3()) {
        let h = v.horizontal();
        prop_assert_eq!(h.y, 0.0);
        prop_assert_eq!(h.x, v.x);
        prop_assert_eq!(h.z, v.z);
    }

    // (v * k) / k == v for k != 0
    #[test]
    fn scale_roundtrip(v in arb_vec3(), k in bounded_nonzero_f32()) {
        let r = (v * k) / k;
        prop_assert!(approx_abs_rel(r.x, v.x, 1e-4, 1e-4));
        prop_assert!(approx_abs_rel(r.y, v.y, 1e-4, 1e-4));
        prop_assert!(approx_abs_rel(r.z, v.z, 1e-4, 1e-4));
    }
}

#[test]
fn normalized_zero_is_zero() {
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
}

#[test]
fn up_cross_conventions() {
    // forward -Z crossed with up gives +X (right-handed, matches the walker)
    let fwd = Vec3::new(0.0, 0.0, -1.0);
    assert_eq!(fwd.cross(Vec3::UP), Vec3::new(1.0, 0.0, 0.0));
}
