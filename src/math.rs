use std::f64::consts::PI;

/// Converts an angle in degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Builds the 2x2 rotation matrix for an angle in radians
pub fn rotation_matrix(angle: f64) -> [[f64; 2]; 2] {
    let (sin_a, cos_a) = angle.sin_cos();
    [[cos_a, -sin_a], [sin_a, cos_a]]
}

/// Multiplies a 2x2 matrix by a 2-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 2]; 2], vector: &[f64; 2]) -> [f64; 2] {
    let mut result = [0.0; 2];
    for i in 0..2 {
        for j in 0..2 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Rotates a point around the origin by `degrees`.
///
/// Screen space has Y growing downwards, so a positive angle turns the
/// positive X axis towards positive Y (clockwise on screen).
pub fn rotate(point: [f64; 2], degrees: f64) -> [f64; 2] {
    multiply_matrix_vector(&rotation_matrix(degrees_to_radians(degrees)), &point)
}

/// Undoes [`rotate`]: applies the rotation by `-degrees`
pub fn unrotate(point: [f64; 2], degrees: f64) -> [f64; 2] {
    rotate(point, -degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f64; 2], b: [f64; 2]) {
        assert!(
            (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn quarter_turn_maps_x_axis_onto_y_axis() {
        assert_close(rotate([1.0, 0.0], 90.0), [0.0, 1.0]);
        assert_close(rotate([0.0, 1.0], 90.0), [-1.0, 0.0]);
    }

    #[test]
    fn unrotate_inverts_rotate() {
        let point = [37.5, -12.25];
        for degrees in [-30.0, -7.0, 0.0, 13.0, 30.0] {
            assert_close(unrotate(rotate(point, degrees), degrees), point);
        }
    }

    #[test]
    fn zero_angle_is_identity() {
        assert_close(rotate([5.0, 9.0], 0.0), [5.0, 9.0]);
    }
}
