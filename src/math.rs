//! Vector and matrix utilities for camera transforms.
//!
//! Fallible wrappers around the handful of constructions the camera needs:
//! normalization, a right-handed look-at transform, and an axis-angle
//! rotation matrix. Degenerate inputs return errors instead of NaN matrices.

use nalgebra::{Matrix3, Matrix4, Vector3};
use thiserror::Error;

/// Below this length a vector has no usable direction.
const LENGTH_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
    #[error("up vector is collinear with the view direction")]
    CollinearUp,
}

pub fn normalize(v: &Vector3<f64>) -> Result<Vector3<f64>, GeometryError> {
    let n = v.norm();
    if n < LENGTH_EPSILON {
        return Err(GeometryError::ZeroLengthVector);
    }
    Ok(v / n)
}

/// Right-handed view transform from an eye point, a look-at point, and an
/// up hint. The up hint must not be collinear with the view direction.
pub fn look_at(
    eye: &Vector3<f64>,
    center: &Vector3<f64>,
    up: &Vector3<f64>,
) -> Result<Matrix4<f64>, GeometryError> {
    let f = normalize(&(center - eye))?;
    let side_raw = f.cross(up);
    if side_raw.norm() < LENGTH_EPSILON {
        return Err(GeometryError::CollinearUp);
    }
    let s = normalize(&side_raw)?;
    let u = s.cross(&f);

    let rotation = Matrix4::new(
        s.x, s.y, s.z, 0.0,
        u.x, u.y, u.z, 0.0,
        -f.x, -f.y, -f.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    let translation = Matrix4::new(
        1.0, 0.0, 0.0, -eye.x,
        0.0, 1.0, 0.0, -eye.y,
        0.0, 0.0, 1.0, -eye.z,
        0.0, 0.0, 0.0, 1.0,
    );
    Ok(rotation * translation)
}

/// Rodrigues rotation matrix about `axis` by `angle` radians,
/// counterclockwise looking down the axis. The axis is normalized here.
pub fn axis_angle_rotation(
    axis: &Vector3<f64>,
    angle: f64,
) -> Result<Matrix3<f64>, GeometryError> {
    let a = normalize(axis)?;
    let ca = angle.cos();
    let sa = angle.sin();
    let t = 1.0 - ca;
    let (x, y, z) = (a.x, a.y, a.z);
    Ok(Matrix3::new(
        t * x * x + ca,     t * x * y - sa * z, t * x * z + sa * y,
        t * x * y + sa * z, t * y * y + ca,     t * y * z - sa * x,
        t * x * z - sa * y, t * y * z + sa * x, t * z * z + ca,
    ))
}
