use super::terms::{vessel_bob, vessel_pitch, vessel_roll};
use super::types::{VesselState, VesselStepDebug};
use super::util::{rotate_by_yaw, HULL_FWD};
use crate::{ControlIntents, VesselParams};

/// Advance the tug one tick.
/// See `step_vessel_dbg` for details and telemetry.
pub fn step_vessel(params: &VesselParams, intents: ControlIntents, state: &mut VesselState, dt: f32) {
    step_vessel_dbg(params, intents, state, dt, None);
}

/// Variant of `step_vessel` that fills out an optional debug telemetry struct.
///
/// - Throttle: forward/backward change speed by `acceleration * dt`, capped at
///   `max_speed` ahead and `max_speed * reverse_fraction` astern. With neither
///   held the speed decays linearly toward zero and never crosses it.
/// - Steering only bites while forward is held and the tug is making way.
///   The heading changes by a fixed `turn_step` per tick, so turn rate
///   depends on frame rate.
/// - The hull moves `speed` units along its heading each tick.
pub fn step_vessel_dbg(
    params: &VesselParams,
    intents: ControlIntents,
    state: &mut VesselState,
    dt: f32,
    mut dbg: Option<&mut VesselStepDebug>,
) {
    if dt <= 0.0 {
        return;
    }

    let speed_before = state.speed;
    let max_reverse = -params.max_speed * params.reverse_fraction;
    if intents.forward {
        state.speed = (state.speed + params.acceleration * dt).min(params.max_speed);
    } else if intents.backward {
        state.speed = (state.speed - params.acceleration * dt).max(max_reverse);
    } else if state.speed > 0.0 {
        state.speed = (state.speed - params.deceleration * dt).max(0.0);
    } else if state.speed < 0.0 {
        state.speed = (state.speed + params.deceleration * dt).min(0.0);
    }
    // Backing off from above the reverse cap must not leave us outside the band.
    state.speed = state.speed.clamp(max_reverse, params.max_speed);

    let steering = intents.forward && state.speed > params.turn_speed_epsilon;
    state.turn = 0.0;
    if steering {
        if intents.left {
            state.turn = params.turn_step;
        } else if intents.right {
            state.turn = -params.turn_step;
        }
        state.transform.yaw += state.turn;
    }

    let forward = rotate_by_yaw(HULL_FWD, state.transform.yaw);
    let displacement = forward * state.speed;
    state.transform.position.x += displacement.x;
    state.transform.position.z += displacement.z;

    state.wave_time += dt;
    let intensity = state.speed.abs() / params.max_speed;
    let bob = vessel_bob(state.wave_time);
    state.transform.position.y = params.base_height + bob;
    state.transform.pitch = vessel_pitch(
        state.wave_time,
        intensity,
        state.speed,
        params.accel_pitch_gain,
    );
    state.transform.roll = vessel_roll(state.wave_time, state.turn, params.lean_gain);

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.intents = intents;
        d.speed_before = speed_before;
        d.speed = state.speed;
        d.forward = forward;
        d.displacement = displacement;
        d.steering = steering;
        d.wave_intensity = intensity;
        d.bob = bob;
    }
}
