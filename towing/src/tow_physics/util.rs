use std::f32::consts::{PI, TAU};

use crate::{Quatf, Vec3f};

// Basis: +Y up, hull forward is −Z (the tug moves along −Z at yaw 0)
pub(super) const HULL_FWD: Vec3f = Vec3f::new(0.0, 0.0, -1.0);

/// Rotate a hull-local offset by a heading about +Y.
#[inline]
pub(super) fn rotate_by_yaw(v: Vec3f, yaw: f32) -> Vec3f {
    Quatf::from_rotation_y(yaw) * v
}

/// Wrap an angle into (−π, π].
#[inline]
pub(super) fn wrap_pi(mut a: f32) -> f32 {
    if !a.is_finite() {
        return 0.0;
    }
    a %= TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

/// Move `current` toward `target` by `fraction` of the shortest arc.
#[inline]
pub(super) fn ease_yaw(current: f32, target: f32, fraction: f32) -> f32 {
    current + wrap_pi(target - current) * fraction
}
