//! # Alignment Rotation
//!
//! Rigid rotation mapping one direction onto another. Every oriented
//! primitive is built along a canonical axis and then aligned with this.

use config::constants::PARALLEL_EPSILON;
use glam::{DQuat, DVec3};
use std::f64::consts::PI;

/// Returns the rotation that maps direction `from` onto direction `to`.
///
/// Both inputs are normalized before use, so any non-zero vectors are
/// accepted.
///
/// - parallel (`|u×v|` below tolerance, `u·v > 0`): identity
/// - antiparallel (`|u×v|` below tolerance, `u·v < 0`): half turn about a
///   vector perpendicular to `from`
/// - otherwise: axis `normalize(u×v)`, angle `atan2(|u×v|, u·v)`
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tower_mesh::align;
///
/// let r = align(DVec3::Z, DVec3::X);
/// let mapped = r * DVec3::Z;
/// assert!((mapped - DVec3::X).length() < 1e-12);
///
/// let flip = align(DVec3::Z, -DVec3::Z);
/// assert!((flip * DVec3::Z + DVec3::Z).length() < 1e-12);
/// ```
pub fn align(from: DVec3, to: DVec3) -> DQuat {
    let u = from.normalize();
    let v = to.normalize();

    let cross = u.cross(v);
    let sin = cross.length();
    let cos = u.dot(v);

    if sin < PARALLEL_EPSILON {
        if cos > 0.0 {
            return DQuat::IDENTITY;
        }
        return DQuat::from_axis_angle(u.any_orthonormal_vector(), PI);
    }

    DQuat::from_axis_angle(cross / sin, sin.atan2(cos))
}
