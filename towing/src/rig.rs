use tracing::debug;

use crate::tow_physics::{
    hitch_anchor, resample_rope, step_tow_dbg, step_vessel_dbg, tow_anchor, RopeCurve, TowState,
    TowStepDebug, VesselState, VesselStepDebug,
};
use crate::{ControlIntents, ParamsError, RigParams};

/// Tug, barge and rope stepped together in the fixed per-tick order:
/// vessel, then tow coupling against the updated vessel, then the rope.
#[derive(Debug, Clone)]
pub struct TowingRig {
    params: RigParams,
    vessel: VesselState,
    tow: TowState,
    rope: RopeCurve,
    vessel_dbg: VesselStepDebug,
    tow_dbg: TowStepDebug,
}

impl TowingRig {
    pub fn new(params: RigParams) -> Result<Self, ParamsError> {
        params.validate()?;
        let vessel = VesselState::at_rest(params.boat_start);
        let tow = TowState::new(params.barge_start, params.tow.initial_rope_length);
        let mut rig = Self {
            params,
            vessel,
            tow,
            rope: RopeCurve::default(),
            vessel_dbg: VesselStepDebug::default(),
            tow_dbg: TowStepDebug::default(),
        };
        rig.rebuild_rope();
        Ok(rig)
    }

    /// Run one tick. `time` is the global elapsed clock driving the barge's
    /// cosmetic sway.
    pub fn tick(&mut self, dt: f32, time: f32, intents: ControlIntents) -> &RopeCurve {
        step_vessel_dbg(
            &self.params.vessel,
            intents,
            &mut self.vessel,
            dt,
            Some(&mut self.vessel_dbg),
        );
        step_tow_dbg(
            &self.params.tow,
            intents,
            &self.vessel.transform,
            &mut self.tow,
            dt,
            time,
            Some(&mut self.tow_dbg),
        );
        self.rebuild_rope();
        &self.rope
    }

    /// Back to the starting layout. The only way out of a corrupted state.
    pub fn reset(&mut self) {
        debug!("towing rig reset");
        self.vessel = VesselState::at_rest(self.params.boat_start);
        self.tow = TowState::new(self.params.barge_start, self.params.tow.initial_rope_length);
        self.vessel_dbg = VesselStepDebug::default();
        self.tow_dbg = TowStepDebug::default();
        self.rebuild_rope();
    }

    fn rebuild_rope(&mut self) {
        let tow = tow_anchor(&self.params.tow, &self.vessel.transform);
        let hitch = hitch_anchor(&self.params.tow, &self.tow.load);
        resample_rope(&self.params.rope, tow, hitch, &mut self.rope);
    }

    pub fn is_finite(&self) -> bool {
        self.vessel.speed.is_finite()
            && self.vessel.transform.is_finite()
            && self.tow.load.is_finite()
            && self.tow.velocity.is_finite()
    }

    pub fn params(&self) -> &RigParams {
        &self.params
    }

    pub fn vessel(&self) -> &VesselState {
        &self.vessel
    }

    pub fn tow(&self) -> &TowState {
        &self.tow
    }

    pub fn rope(&self) -> &RopeCurve {
        &self.rope
    }

    pub fn vessel_debug(&self) -> &VesselStepDebug {
        &self.vessel_dbg
    }

    pub fn tow_debug(&self) -> &TowStepDebug {
        &self.tow_dbg
    }
}
