use bevy_app::{App, Plugin, Update};
use bevy_ecs::prelude::*;
use bevy_time::Time;
use tracing::{debug, info, trace, warn};
use towing::{ControlIntents, KeyBindings, TowingRig};

use crate::config::ScriptStep;
use crate::snapshot::publish_snapshot;

/// Systems that advance the towing simulation, run chained in this order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimSet;

#[derive(Resource, Debug, Clone)]
pub struct Rig(pub TowingRig);

/// Controls held this tick.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct HeldIntents(pub ControlIntents);

#[derive(Resource, Debug, Clone, Default)]
pub struct Bindings(pub KeyBindings);

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TickCounter(pub u64);

#[derive(Resource, Debug, Clone, Copy)]
pub struct TelemetryCadence(pub u64);

/// A key went down or came up. Hosts with a window forward their key events here.
#[derive(Event, Debug, Clone)]
pub struct KeyInput {
    pub key: String,
    pub pressed: bool,
}

impl KeyInput {
    pub fn press(key: &str) -> Self {
        Self {
            key: key.to_string(),
            pressed: true,
        }
    }

    pub fn release(key: &str) -> Self {
        Self {
            key: key.to_string(),
            pressed: false,
        }
    }
}

/// Scripted helmsman. Plays its steps in order until finished or until a
/// bound key is pressed.
#[derive(Resource, Debug, Clone)]
pub struct Autopilot {
    pub steps: Vec<ScriptStep>,
    pub index: usize,
    pub elapsed_in_step: f32,
    pub active: bool,
}

impl Autopilot {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        let active = !steps.is_empty();
        Self {
            steps,
            index: 0,
            elapsed_in_step: 0.0,
            active,
        }
    }
}

pub struct TowSimPlugin;

impl Plugin for TowSimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeldIntents>()
            .init_resource::<Bindings>()
            .init_resource::<TickCounter>()
            .init_resource::<crate::RenderSnapshot>()
            .add_event::<KeyInput>()
            .configure_sets(Update, SimSet)
            .add_systems(
                Update,
                (
                    apply_key_input,
                    run_autopilot,
                    step_rig,
                    publish_snapshot,
                    log_telemetry,
                )
                    .chain()
                    .in_set(SimSet),
            );
        if !app.world().contains_resource::<Autopilot>() {
            app.insert_resource(Autopilot::new(Vec::new()));
        }
        if !app.world().contains_resource::<TelemetryCadence>() {
            app.insert_resource(TelemetryCadence(0));
        }
    }
}

fn apply_key_input(
    mut events: EventReader<KeyInput>,
    bindings: Res<Bindings>,
    mut held: ResMut<HeldIntents>,
    mut pilot: ResMut<Autopilot>,
) {
    for ev in events.read() {
        let Some(intent) = bindings.0.lookup(&ev.key) else {
            debug!(key = %ev.key, "unbound key ignored");
            continue;
        };
        if pilot.active {
            info!(key = %ev.key, "manual control; autopilot disengaged");
            pilot.active = false;
            // Drop whatever the script was holding
            held.0 = ControlIntents::default();
        }
        held.0.set(intent, ev.pressed);
    }
}

fn run_autopilot(time: Res<Time>, mut pilot: ResMut<Autopilot>, mut held: ResMut<HeldIntents>) {
    if !pilot.active {
        return;
    }
    loop {
        let Some(step) = pilot.steps.get(pilot.index).cloned() else {
            info!("autopilot script finished");
            pilot.active = false;
            held.0 = ControlIntents::default();
            return;
        };
        if pilot.elapsed_in_step >= step.secs {
            pilot.index += 1;
            pilot.elapsed_in_step = 0.0;
            continue;
        }
        if pilot.elapsed_in_step == 0.0 {
            debug!(step = pilot.index, hold = ?step.hold, secs = step.secs, "autopilot step");
        }
        held.0 = ControlIntents::holding(&step.hold);
        pilot.elapsed_in_step += time.delta_secs();
        return;
    }
}

fn step_rig(
    time: Res<Time>,
    held: Res<HeldIntents>,
    mut rig: ResMut<Rig>,
    mut counter: ResMut<TickCounter>,
) {
    rig.0.tick(time.delta_secs(), time.elapsed_secs(), held.0);
    counter.0 += 1;

    if !rig.0.is_finite() {
        warn!(tick = counter.0, "non-finite towing state; resetting rig");
        rig.0.reset();
    }
}

fn log_telemetry(counter: Res<TickCounter>, cadence: Res<TelemetryCadence>, rig: Res<Rig>) {
    let v = rig.0.vessel_debug();
    let t = rig.0.tow_debug();
    trace!(
        tick = counter.0,
        speed = v.speed,
        distance = t.distance,
        stretch = t.stretch,
        "tick"
    );
    if cadence.0 == 0 || counter.0 % cadence.0 != 0 {
        return;
    }
    let tug = rig.0.vessel().transform;
    let barge = rig.0.tow().load;
    info!(
        tick = counter.0,
        speed = rig.0.vessel().speed,
        heading = tug.yaw,
        rope_length = rig.0.tow().rope_length,
        distance = t.distance,
        taut = t.taut,
        tug = ?tug.position,
        barge = ?barge.position,
        "tow telemetry"
    );
}
