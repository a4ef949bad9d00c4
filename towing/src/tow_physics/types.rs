use crate::{ControlIntents, Vec3f};

/// Position and heading of a floating body.
///
/// `yaw` is the physical heading about +Y. `pitch` and `roll` are cosmetic
/// wave motion: they are rewritten every tick and never fed back into the
/// physics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyTransform {
    pub position: Vec3f,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl BodyTransform {
    pub fn at(position: Vec3f) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.yaw.is_finite()
            && self.pitch.is_finite()
            && self.roll.is_finite()
    }
}

#[derive(Debug, Clone, Default)]
pub struct VesselState {
    /// Signed speed, units per tick. Positive is ahead.
    pub speed: f32,
    pub transform: BodyTransform,
    /// Accumulated wave clock driving the bob.
    pub wave_time: f32,
    /// Yaw applied on the last tick (0 when not steering); drives the lean.
    pub turn: f32,
}

impl VesselState {
    pub fn at_rest(position: Vec3f) -> Self {
        Self {
            transform: BodyTransform::at(position),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct TowState {
    pub load: BodyTransform,
    pub velocity: Vec3f,
    pub rope_length: f32,
}

impl TowState {
    pub fn new(load_position: Vec3f, rope_length: f32) -> Self {
        Self {
            load: BodyTransform::at(load_position),
            velocity: Vec3f::ZERO,
            rope_length,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VesselStepDebug {
    pub dt: f32,
    pub intents: ControlIntents,
    pub speed_before: f32,
    pub speed: f32,
    pub forward: Vec3f,
    pub displacement: Vec3f,
    pub steering: bool,
    pub wave_intensity: f32,
    pub bob: f32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TowStepDebug {
    pub dt: f32,
    pub time: f32,
    pub rope_length: f32,
    // Anchors at deck level (before the height offsets)
    pub tow_point: Vec3f,
    pub hitch_point: Vec3f,
    pub rope_vector: Vec3f,
    pub distance: f32,
    pub taut: bool,
    pub stretch: f32,
    pub impulse: Vec3f,
    pub velocity: Vec3f,
    pub target_yaw: f32,
    pub yaw_err: f32,
}
