//! Tow physics shared by any host that renders the tugboat scene.
//!
//! This crate intentionally avoids any ECS types. It exposes plain state
//! structs and step functions; the host decides how to schedule them and how
//! to hand the results to a renderer.

mod math;
pub use math::{Quatf, Vec3f};

mod input;
pub use input::{ControlIntents, Intent, KeyBindings};

mod rig_params;
pub use rig_params::{presets, ParamsError, RigParams, RopeParams, TowParams, VesselParams};

pub mod tow_physics;
pub use tow_physics::{
    hitch_anchor, sample_rope, step_tow, step_tow_dbg, step_vessel, step_vessel_dbg, tow_anchor,
    BodyTransform, RopeCurve, TowState, TowStepDebug, VesselState, VesselStepDebug,
};

mod rig;
pub use rig::TowingRig;
