use approx::assert_relative_eq;
use vector3::{
    Error, Sphere, Vector3, add, cross, dot, length, normalize, scale, subtract, vertex_normals,
};

const SAMPLES: [Vector3; 6] = [
    Vector3::new(0., 0., 0.),
    Vector3::new(1., 0., 0.),
    Vector3::new(3., 4., 0.),
    Vector3::new(-1.5, 2.25, 8.),
    Vector3::new(0.001, -0.002, 0.003),
    Vector3::new(-120., 45.5, -7.75),
];

const SCALARS: [f32; 5] = [0., 1., -1., 0.5, -3.25];

fn assert_close(expected: Vector3, actual: Vector3) {
    assert_relative_eq!(expected.x, actual.x, epsilon = 1e-4, max_relative = 1e-5);
    assert_relative_eq!(expected.y, actual.y, epsilon = 1e-4, max_relative = 1e-5);
    assert_relative_eq!(expected.z, actual.z, epsilon = 1e-4, max_relative = 1e-5);
}

#[test]
fn add_commutes_and_subtract_undoes_it() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            assert_eq!(add(a, b), add(b, a));
            assert_close(a, subtract(add(a, b), b));
        }
    }
}

#[test]
fn subtract_is_add_of_negation() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            assert_eq!(subtract(a, b), add(a, scale(b, -1.)));
        }
    }
}

#[test]
fn scale_composes() {
    for &v in &SAMPLES {
        for &s in &SCALARS {
            for &t in &SCALARS {
                assert_close(scale(v, s * t), scale(scale(v, s), t));
            }
        }
    }
}

#[test]
fn dot_commutes() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            assert_eq!(dot(a, b), dot(b, a));
        }
    }
}

#[test]
fn length_is_non_negative() {
    for &v in &SAMPLES {
        assert!(length(v) >= 0.);
        assert_eq!(0., length(scale(v, 0.)));
    }
}

#[test]
fn length_of_nan_is_nan() {
    assert!(length(Vector3::new(1., f32::NAN, 0.)).is_nan());
}

#[test]
fn normalize_zero_is_zero() {
    let n = normalize(Vector3::new(0., 0., 0.));
    assert_eq!(0., n.x);
    assert_eq!(0., n.y);
    assert_eq!(0., n.z);
}

#[test]
fn normalize_has_unit_length() {
    for &v in SAMPLES.iter().filter(|v| length(**v) > 0.) {
        assert_relative_eq!(1., length(normalize(v)), epsilon = 1e-5);
    }
}

#[test]
fn cross_anticommutes() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            assert_close(cross(a, b), scale(cross(b, a), -1.));
        }
    }
}

#[test]
fn cross_is_orthogonal() {
    let a = Vector3::new(1., 2., 3.);
    let b = Vector3::new(-4., 0.5, 2.);
    let c = cross(a, b);
    assert_relative_eq!(0., dot(a, c), epsilon = 1e-5);
    assert_relative_eq!(0., dot(b, c), epsilon = 1e-5);
}

#[test]
fn concrete_values() {
    assert_eq!(
        Vector3::new(0., 0., 1.),
        cross(Vector3::new(1., 0., 0.), Vector3::new(0., 1., 0.))
    );
    assert_eq!(32., dot(Vector3::new(1., 2., 3.), Vector3::new(4., 5., 6.)));
    assert_eq!(5., length(Vector3::new(3., 4., 0.)));
    assert_close(
        Vector3::new(0.6, 0.8, 0.),
        normalize(Vector3::new(3., 4., 0.)),
    );
    assert_eq!(
        Vector3::new(3., 3., 3.),
        add(Vector3::new(1., 1., 1.), Vector3::new(2., 2., 2.))
    );
    assert_eq!(
        Vector3::new(2., 2., 2.),
        subtract(Vector3::new(3., 3., 3.), Vector3::new(1., 1., 1.))
    );
}

#[test]
fn inputs_are_not_aliased() {
    let a = Vector3::new(1., 2., 3.);
    let b = Vector3::new(4., 5., 6.);
    let _ = add(a, b);
    let _ = normalize(a);
    let _ = cross(a, b);
    assert_eq!(Vector3::new(1., 2., 3.), a);
    assert_eq!(Vector3::new(4., 5., 6.), b);
}

#[test]
fn sphere_normals_point_outward() {
    let sphere = Sphere::new(5., 24, 12);
    let positions = sphere.positions().unwrap();
    let indices = sphere.indices().unwrap();
    let normals = vertex_normals(&positions, &indices).unwrap();
    let stride = sphere.width_segments as usize + 1;
    let interior = stride..positions.len() - stride;
    for (position, normal) in positions[interior.clone()]
        .iter()
        .zip(&normals[interior])
    {
        assert_relative_eq!(1., normal.length(), epsilon = 1e-5);
        let outward = normalize(*position);
        assert!(dot(outward, *normal) > 0.9);
    }
}

#[test]
fn sphere_with_no_segments() {
    let sphere = Sphere::new(1., 16, 0);
    assert_eq!(
        Err(Error::InvalidSegments {
            width: 16,
            height: 0
        }),
        sphere.indices()
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        "index 7 is out of range for 3 positions",
        Error::IndexOutOfRange { index: 7, len: 3 }.to_string()
    );
    assert_eq!(
        "index count 5 is not a multiple of three",
        Error::IncompleteTriangle(5).to_string()
    );
}
