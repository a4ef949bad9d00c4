mod util;
mod types;
mod terms;
mod vessel;
mod coupling;
mod rope;

pub use types::{BodyTransform, TowState, TowStepDebug, VesselState, VesselStepDebug};
pub use vessel::{step_vessel, step_vessel_dbg};
pub use coupling::{hitch_anchor, step_tow, step_tow_dbg, tow_anchor};
pub use rope::{sample_rope, RopeCurve};
pub(crate) use rope::resample_rope;
