//! Integration tests for microphone-array geometry: construction, rigid
//! motion and world-to-array spherical conversion.

use approx::assert_relative_eq;
use ndarray::{array, Array1, Array2, Axis};
use scene_sim_spatial::{wrap_to_180, ArrayGeometry, Orientation};

const MAX_ABS_TOL: f64 = 1e-8;

/// Linear array of `num_mics` microphones spaced `spacing` apart along `axis`.
fn linear_array(num_mics: usize, axis: usize, spacing: f64) -> Array2<f64> {
    let mut positions = Array2::zeros((num_mics, 3));
    for mic in 0..num_mics {
        positions[[mic, axis]] = spacing * mic as f64;
    }
    positions
}

fn assert_arrays_close(actual: &Array2<f64>, expected: &Array2<f64>) {
    assert_eq!(actual.shape(), expected.shape());
    let max_diff = (actual - expected)
        .iter()
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    assert!(max_diff < MAX_ABS_TOL, "max abs diff {max_diff}");
}

fn permute_rows(
    centered: &Array2<f64>,
    f: impl Fn(f64, f64, f64) -> [f64; 3],
) -> Array2<f64> {
    let mut out = Array2::zeros(centered.raw_dim());
    for (mut row, src) in out
        .axis_iter_mut(Axis(0))
        .zip(centered.axis_iter(Axis(0)))
    {
        let mapped = f(src[0], src[1], src[2]);
        for j in 0..3 {
            row[j] = mapped[j];
        }
    }
    out
}

#[test]
fn test_linear_array_initialization() {
    let spacing = 0.05;
    for num_mics in [2, 4] {
        for axis in 0..3 {
            let positions = linear_array(num_mics, axis, spacing);
            let center = positions.sum_axis(Axis(0)) / num_mics as f64;
            let centered = &positions - &center;

            let uut = ArrayGeometry::new(positions.clone()).unwrap();

            for i in 0..3 {
                assert_relative_eq!(uut.center()[i], center[i], epsilon = MAX_ABS_TOL);
            }
            assert_arrays_close(uut.positions(), &positions);
            assert_arrays_close(uut.centered_positions(), &centered);

            // half the array span
            let expected_radius = (num_mics - 1) as f64 / 2.0 * spacing;
            assert_relative_eq!(uut.radius(), expected_radius, epsilon = MAX_ABS_TOL);
        }
    }
}

#[test]
fn test_translation_updates_positions_only() {
    let mut uut = ArrayGeometry::new(linear_array(4, 0, 0.05)).unwrap();
    let centered = uut.centered_positions().clone();

    let new_center = array![-3.2, 1.7, 0.4];
    uut.translate(&new_center);

    assert_arrays_close(uut.centered_positions(), &centered);
    let expected_positions = &centered + &new_center;
    assert_arrays_close(uut.positions(), &expected_positions);
    for i in 0..3 {
        assert_relative_eq!(uut.center()[i], new_center[i], epsilon = MAX_ABS_TOL);
    }
}

#[test]
fn test_single_axis_rotations() {
    for num_mics in [2, 4] {
        for axis in 0..3 {
            let mut uut = ArrayGeometry::new(linear_array(num_mics, axis, 0.05)).unwrap();
            uut.translate(&array![0.3, -0.4, 1.1]);

            let center = uut.center().clone();
            let centered = uut.centered_positions().clone();

            let cases: [(Orientation, Box<dyn Fn(f64, f64, f64) -> [f64; 3]>); 3] = [
                (
                    Orientation::with_yaw(90.0).unwrap(),
                    Box::new(|x, y, z| [-y, x, z]),
                ),
                (
                    Orientation::with_pitch(90.0).unwrap(),
                    Box::new(|x, y, z| [z, y, -x]),
                ),
                (
                    Orientation::with_roll(90.0).unwrap(),
                    Box::new(|x, y, z| [x, -z, y]),
                ),
            ];

            for (orientation, permutation) in &cases {
                let rotated = uut.new_rotated_array(orientation);

                for i in 0..3 {
                    assert_relative_eq!(rotated.center()[i], center[i], epsilon = MAX_ABS_TOL);
                }
                let expected = permute_rows(&centered, permutation);
                assert_arrays_close(rotated.centered_positions(), &expected);

                // the source geometry is untouched
                assert_arrays_close(uut.centered_positions(), &centered);
            }
        }
    }
}

#[test]
fn test_spherical_relative_to_array() {
    let mut uut = ArrayGeometry::new(linear_array(4, 1, 0.05)).unwrap();
    let point = array![1.0, 0.0, 0.0];

    struct Case {
        center: Array1<f64>,
        azim: f64,
        elev: f64,
    }

    let cases = [
        Case {
            center: array![0.0, 0.0, 0.0],
            azim: 0.0,
            elev: 0.0,
        },
        Case {
            center: array![2.0, 0.0, 0.0],
            azim: -180.0,
            elev: 0.0,
        },
        Case {
            center: array![1.0, 1.0, 1.0],
            azim: -90.0,
            elev: -45.0,
        },
        Case {
            center: array![1.0, 2.0, -2.0],
            azim: -90.0,
            elev: 45.0,
        },
    ];

    for case in &cases {
        uut.translate(&case.center);

        let offset = &point - &case.center;
        let expected_dist = offset.dot(&offset).sqrt();

        let (dist, azim, elev) = uut.spherical_relative_to_array(&point);
        assert_relative_eq!(dist, expected_dist, epsilon = MAX_ABS_TOL);
        assert!(wrap_to_180(azim - case.azim).abs() < MAX_ABS_TOL);
        assert_relative_eq!(elev, case.elev, epsilon = MAX_ABS_TOL);
    }
}
