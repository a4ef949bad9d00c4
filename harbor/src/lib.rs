//! Headless host for the towing simulation.
//!
//! Drives a `towing::TowingRig` from a bevy schedule, feeding it key events or
//! a scripted autopilot and publishing a render snapshot every tick.

use std::time::Duration;

use anyhow::{Context, Result};
use bevy_app::App;
use bevy_time::Time;
use towing::TowingRig;

pub mod args;
pub mod config;
pub mod sim;
pub mod snapshot;

pub use args::Args;
pub use config::{load_config, parse_config, Config, ScriptStep};
pub use sim::{
    Autopilot, Bindings, HeldIntents, KeyInput, Rig, SimSet, TelemetryCadence, TickCounter,
    TowSimPlugin,
};
pub use snapshot::{body_to_transform, RenderSnapshot};

pub fn build_harbor_app(cfg: Config) -> Result<App> {
    let rig = TowingRig::new(cfg.rig.clone()).context("building towing rig")?;

    let mut app = App::new();
    app.init_resource::<Time>()
        .insert_resource(Rig(rig))
        .insert_resource(Bindings(cfg.bindings.clone()))
        .insert_resource(Autopilot::new(cfg.script.clone()))
        .insert_resource(TelemetryCadence(cfg.log_every))
        .insert_resource(cfg)
        .add_plugins(TowSimPlugin);
    Ok(app)
}

/// Step the clock by `dt` and run one frame.
pub fn advance_app(app: &mut App, dt: f32) {
    if let Some(mut time) = app.world_mut().get_resource_mut::<Time>() {
        time.advance_by(Duration::from_secs_f32(dt));
    }
    app.update();
}
