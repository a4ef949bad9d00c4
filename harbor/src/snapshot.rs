use bevy_ecs::prelude::*;
use bevy_math::{EulerRot, Quat, Vec3};
use bevy_transform::components::Transform;
use towing::BodyTransform;

use crate::sim::{Rig, TickCounter};

/// What the renderer needs each frame: both hulls with their wave motion
/// applied, and the rope path to loft a tube along.
#[derive(Resource, Debug, Clone, Default)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub vessel: Transform,
    pub load: Transform,
    pub rope: Vec<Vec3>,
    pub rope_length: f32,
    pub speed: f32,
}

/// Pitch about X, heading about Y, roll about Z, applied in that order.
pub fn body_to_transform(body: &BodyTransform) -> Transform {
    Transform::from_translation(body.position).with_rotation(Quat::from_euler(
        EulerRot::XYZ,
        body.pitch,
        body.yaw,
        body.roll,
    ))
}

pub(crate) fn publish_snapshot(
    rig: Res<Rig>,
    counter: Res<TickCounter>,
    mut snap: ResMut<RenderSnapshot>,
) {
    let rig = &rig.0;
    snap.tick = counter.0;
    snap.vessel = body_to_transform(&rig.vessel().transform);
    snap.load = body_to_transform(&rig.tow().load);
    snap.rope.clear();
    snap.rope.extend_from_slice(&rig.rope().points);
    snap.rope_length = rig.tow().rope_length;
    snap.speed = rig.vessel().speed;
}
