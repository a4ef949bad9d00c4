use tracing::trace;

use super::terms::{load_bob, load_pitch, load_roll};
use super::types::{BodyTransform, TowState, TowStepDebug};
use super::util::{ease_yaw, rotate_by_yaw, wrap_pi};
use crate::{ControlIntents, TowParams, Vec3f};

/// Tow bitt on the tug's stern, raised to where the rope is made fast.
pub fn tow_anchor(params: &TowParams, vessel: &BodyTransform) -> Vec3f {
    let mut p = stern_point(params, vessel);
    p.y += params.tow_height;
    p
}

/// Hitch on the barge's bow, raised to the hook height.
pub fn hitch_anchor(params: &TowParams, load: &BodyTransform) -> Vec3f {
    let mut p = bow_point(params, load);
    p.y += params.hitch_height;
    p
}

fn stern_point(params: &TowParams, vessel: &BodyTransform) -> Vec3f {
    vessel.position + rotate_by_yaw(params.stern_offset, vessel.yaw)
}

fn bow_point(params: &TowParams, load: &BodyTransform) -> Vec3f {
    load.position + rotate_by_yaw(params.bow_offset, load.yaw)
}

/// Advance the barge one tick behind the tug.
/// See `step_tow_dbg` for details and telemetry.
pub fn step_tow(
    params: &TowParams,
    intents: ControlIntents,
    vessel: &BodyTransform,
    state: &mut TowState,
    dt: f32,
    time: f32,
) {
    step_tow_dbg(params, intents, vessel, state, dt, time, None);
}

/// Variant of `step_tow` that fills out an optional debug telemetry struct.
///
/// The rope is a tension-only spring: when the stern-to-bow distance exceeds
/// the paid-out length the barge gets an impulse toward the tug proportional
/// to the stretch; when slack it gets nothing. Velocity is damped every tick
/// and the barge eases its heading toward the rope direction.
pub fn step_tow_dbg(
    params: &TowParams,
    intents: ControlIntents,
    vessel: &BodyTransform,
    state: &mut TowState,
    dt: f32,
    time: f32,
    mut dbg: Option<&mut TowStepDebug>,
) {
    if dt <= 0.0 {
        return;
    }

    // Reel before solving so the new length applies this tick
    let requested = state.rope_length
        + if intents.pay_out { params.reel_rate * dt } else { 0.0 }
        - if intents.haul_in { params.reel_rate * dt } else { 0.0 };
    state.rope_length = requested.clamp(params.min_rope_length, params.max_rope_length);
    if requested != state.rope_length {
        trace!(requested, rope_length = state.rope_length, "rope length at limit");
    }

    let tow_point = stern_point(params, vessel);
    let hitch_point = bow_point(params, &state.load);
    let rope = tow_point - hitch_point;
    let distance = rope.length();

    let taut = distance > state.rope_length;
    let stretch = (distance - state.rope_length).max(0.0);
    let impulse = if taut {
        // Zero-length rope has no direction; normalize_or_zero keeps NaN out.
        rope.normalize_or_zero() * (stretch * params.pull_coefficient * dt)
    } else {
        Vec3f::ZERO
    };
    state.velocity += impulse;
    state.velocity *= params.damping;

    // Per-tick integration, no dt
    state.load.position += state.velocity;

    let target_yaw = rope.x.atan2(rope.z);
    let yaw_err = wrap_pi(target_yaw - state.load.yaw);
    if rope.x != 0.0 || rope.z != 0.0 {
        state.load.yaw = ease_yaw(state.load.yaw, target_yaw, params.yaw_follow);
    } else {
        trace!("rope vertical or zero length; barge heading held");
    }

    state.load.position.y = params.base_height + load_bob(time);
    state.load.roll = load_roll(time);
    state.load.pitch = load_pitch(time);

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.time = time;
        d.rope_length = state.rope_length;
        d.tow_point = tow_point;
        d.hitch_point = hitch_point;
        d.rope_vector = rope;
        d.distance = distance;
        d.taut = taut;
        d.stretch = stretch;
        d.impulse = impulse;
        d.velocity = state.velocity;
        d.target_yaw = target_yaw;
        d.yaw_err = yaw_err;
    }
}
