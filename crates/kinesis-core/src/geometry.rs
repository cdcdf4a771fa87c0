//! Geometric helpers for landmark-space computations.
//!
//! All functions are pure and stateless. Landmark space is left-handed
//! image space: `x` right, `y` down, `z` toward the scene (negative z
//! points at the camera).

use nalgebra::{Vector2, Vector3};

const EPSILON: f32 = 1e-6;

/// Unit direction from `a` to `b`.
///
/// Returns the zero vector when `a == b`; callers that feed the result
/// into further normalization must guard against that case.
pub fn direction(a: &Vector3<f32>, b: &Vector3<f32>) -> Vector3<f32> {
    let diff = b - a;
    let norm = diff.norm();
    if norm < EPSILON {
        Vector3::zeros()
    } else {
        diff / norm
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    (b - a).norm()
}

/// Angle in degrees between two vectors, range `[0, 180]`.
pub fn angle_between(u: &Vector3<f32>, v: &Vector3<f32>) -> f32 {
    let norms = u.norm() * v.norm();
    if norms < EPSILON {
        return 0.0;
    }
    (u.dot(v) / norms).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle in degrees between the x/y projections of two vectors,
/// ignoring depth. Range `[0, 180]`; degenerate projections yield 0.
pub fn angle_between_2d(u: &Vector3<f32>, v: &Vector3<f32>) -> f32 {
    let u2 = Vector2::new(u.x, u.y);
    let v2 = Vector2::new(v.x, v.y);
    let norms = u2.norm() * v2.norm();
    if norms < EPSILON {
        return 0.0;
    }
    (u2.dot(&v2) / norms).clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_is_unit_length() {
        let a = Vector3::new(0.5, 0.5, 0.0);
        let b = Vector3::new(0.5, 0.1, -0.2);
        let dir = direction(&a, &b);
        assert_relative_eq!(dir.norm(), 1.0, epsilon = 1e-5);
        assert!(dir.y < 0.0);
        assert!(dir.z < 0.0);
    }

    #[test]
    fn test_direction_of_coincident_points_is_zero() {
        let a = Vector3::new(0.3, 0.3, 0.1);
        assert_eq!(direction(&a, &a), Vector3::zeros());
    }

    #[test]
    fn test_distance() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(3.0, 4.0, 0.0);
        assert_relative_eq!(distance(&a, &b), 5.0);
    }

    #[test]
    fn test_angle_between_orthogonal() {
        let u = Vector3::new(1.0, 0.0, 0.0);
        let v = Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(angle_between(&u, &v), 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_angle_between_2d_ignores_depth() {
        // Opposite in the plane, wildly different depth.
        let u = Vector3::new(1.0, 0.0, -5.0);
        let v = Vector3::new(-1.0, 0.0, 3.0);
        assert_relative_eq!(angle_between_2d(&u, &v), 180.0, epsilon = 1e-4);
    }

    #[test]
    fn test_angle_between_2d_range() {
        let u = Vector3::new(1.0, 0.0, 0.0);
        let v = Vector3::new(
            (150.0_f32).to_radians().cos(),
            (150.0_f32).to_radians().sin(),
            0.0,
        );
        assert_relative_eq!(angle_between_2d(&u, &v), 150.0, epsilon = 1e-3);
    }

    #[test]
    fn test_angle_between_2d_degenerate_projection() {
        // Purely depth-axis vectors have no 2D component.
        let u = Vector3::new(0.0, 0.0, 1.0);
        let v = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(angle_between_2d(&u, &v), 0.0);
    }
}
