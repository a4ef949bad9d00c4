// ----- Cosmetic wave motion -----
// None of these feed back into the physics; they only dress the transforms
// handed to the renderer.

/// Tug heave above its base height.
pub(super) fn vessel_bob(wave_time: f32) -> f32 {
    (wave_time * 1.2).sin() * 0.4 + (wave_time * 2.1).sin() * 0.2
}

/// Tug pitch: swell scaled by how hard we're moving, plus a constant chop.
pub(super) fn vessel_pitch(wave_time: f32, intensity: f32, speed: f32, accel_gain: f32) -> f32 {
    (wave_time * 1.3).cos() * 0.12 * intensity + (wave_time * 1.9).sin() * 0.06 + speed * accel_gain
}

/// Tug roll: lean into the turn plus chop.
pub(super) fn vessel_roll(wave_time: f32, turn: f32, lean_gain: f32) -> f32 {
    turn * lean_gain + (wave_time * 1.5).sin() * 0.08
}

pub(super) fn load_bob(time: f32) -> f32 {
    time.sin() * 0.3 + (time * 1.5).sin() * 0.2
}

pub(super) fn load_roll(time: f32) -> f32 {
    (time * 1.2).sin() * 0.1
}

pub(super) fn load_pitch(time: f32) -> f32 {
    (time * 1.5).cos() * 0.08
}
