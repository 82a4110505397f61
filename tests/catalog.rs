use approx::assert_abs_diff_eq;
use nvec::Vector;

type Vec2 = Vector<f64, 2>;

#[test]
fn reference_scenario() {
    let a = Vec2::from([-1.0, 3.5]);
    let b = Vec2::from([2.0, 2.5]);

    assert_eq!(a + b, Vec2::from([1.0, 6.0]));
    assert_eq!(a - b, Vec2::from([-3.0, 1.0]));
    assert_eq!(a * b, Vec2::from([-2.0, 8.75]));
    assert_eq!(a / b, Vec2::from([-0.5, 1.4]));
    assert_eq!(a.max(b), Vec2::from([2.0, 3.5]));
    assert_eq!(a.min(b), Vec2::from([-1.0, 2.5]));
    assert_eq!((a.max_element(), a.argmax()), (3.5, 1));
    assert_eq!((a.min_element(), a.argmin()), (-1.0, 0));
    assert_eq!(a.abs(), Vec2::from([1.0, 3.5]));
    assert_eq!(a.sum(), 2.5);
    assert_eq!(a.dot(b), 6.75);
}

#[test]
fn pointwise_matches_componentwise() {
    let a = Vector::from([0.5, -2.0, 7.25, 3.0]);
    let b = Vector::from([-1.5, 4.0, 2.0, -0.25]);
    for i in 0..4 {
        assert_eq!((a + b)[i], a[i] + b[i]);
        assert_eq!((a - b)[i], a[i] - b[i]);
        assert_eq!((a * b)[i], a[i] * b[i]);
        assert_eq!((a / b)[i], a[i] / b[i]);
    }
}

#[test]
fn norm_identities() {
    let v: Vector<f64, 4> = Vector::from([0.5, -2.0, 7.25, 3.0]);
    assert_eq!(v.norm1(), v.abs().sum());
    assert_eq!(v.norm2(), v.dot(v).sqrt());
    assert_eq!(v.norm8(), v.abs().max_element());
    assert_abs_diff_eq!(v.norm(2.0), v.norm2(), epsilon = 1e-12);
}

#[test]
fn construction_catalog() {
    let broadcast: Vector<f64, 6> = Vector::splat(3.1416);
    assert_eq!(broadcast.as_slice(), &[3.1416; 6]);

    let grown: Vector<f64, 6> = Vector::from([1.0, 2.0, 3.0, 4.0]).resize();
    assert_eq!(grown.to_string(), "(1, 2, 3, 4, 0, 0)");

    let shrunk: Vector<f64, 6> =
        Vector::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).resize();
    assert_eq!(shrunk.to_string(), "(1, 2, 3, 4, 5, 6)");
}

#[test]
fn compound_assignment_observed_through_same_binding() {
    let mut a = Vec2::from([-1.0, 3.5]);
    let b = Vec2::from([2.0, 2.5]);
    let before = a;
    a += b;
    assert_eq!(a, before + b);
    assert_eq!(a[0], 1.0);
}
