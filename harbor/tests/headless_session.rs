use anyhow::Result;
use bevy_app::App;
use harbor::{
    advance_app, build_harbor_app, parse_config, Autopilot, Config, HeldIntents, KeyInput,
    RenderSnapshot, Rig, ScriptStep, TickCounter,
};
use towing::Intent;

const DT: f32 = 1.0 / 60.0;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn snapshot(app: &App) -> RenderSnapshot {
    app.world()
        .get_resource::<RenderSnapshot>()
        .cloned()
        .expect("snapshot resource")
}

#[test]
fn autopilot_tows_barge_out_of_harbour() -> Result<()> {
    init_tracing();
    let cfg = Config {
        script: vec![ScriptStep::new(8.0, &[Intent::Forward])],
        log_every: 120,
        ..Config::default()
    };
    let mut app = build_harbor_app(cfg)?;

    for _ in 0..480 {
        advance_app(&mut app, DT);
    }

    let snap = snapshot(&app);
    assert_eq!(snap.tick, 480);
    assert_eq!(snap.rope.len(), 21);
    assert!(snap.vessel.translation.z < -40.0, "tug at {:?}", snap.vessel.translation);
    assert!(snap.load.translation.z < 0.0, "barge at {:?}", snap.load.translation);
    assert!(snap.speed > 0.0);

    // Rope ends sit on the published anchors' side of the rig
    let rig = &app.world().get_resource::<Rig>().expect("rig").0;
    assert_eq!(snap.rope.first().copied(), rig.rope().tow_end());
    assert_eq!(snap.rope.last().copied(), rig.rope().hitch_end());
    Ok(())
}

#[test]
fn script_runs_out_and_releases_controls() -> Result<()> {
    init_tracing();
    let cfg = Config {
        script: vec![
            ScriptStep::new(0.5, &[Intent::Forward, Intent::PayOut]),
            ScriptStep::new(0.0, &[Intent::Backward]),
        ],
        ..Config::default()
    };
    let mut app = build_harbor_app(cfg)?;

    advance_app(&mut app, DT);
    let held = app.world().get_resource::<HeldIntents>().expect("held").0;
    assert!(held.forward && held.pay_out);

    for _ in 0..60 {
        advance_app(&mut app, DT);
    }
    let world = app.world();
    let held = world.get_resource::<HeldIntents>().expect("held").0;
    assert_eq!(held, towing::ControlIntents::default());
    assert!(!world.get_resource::<Autopilot>().expect("autopilot").active);
    // Half a second of pay-out at 2 units/s
    let rope_length = world.get_resource::<Rig>().expect("rig").0.tow().rope_length;
    assert!((rope_length - 13.0).abs() < 0.1, "rope length {rope_length}");
    Ok(())
}

#[test]
fn key_press_takes_the_helm() -> Result<()> {
    init_tracing();
    let mut app = build_harbor_app(Config::default())?;
    advance_app(&mut app, DT);

    app.world_mut().send_event(KeyInput::press("S"));
    advance_app(&mut app, DT);
    {
        let world = app.world();
        assert!(!world.get_resource::<Autopilot>().expect("autopilot").active);
        let held = world.get_resource::<HeldIntents>().expect("held").0;
        assert!(held.backward && !held.forward);
    }

    for _ in 0..30 {
        advance_app(&mut app, DT);
    }
    assert!(snapshot(&app).speed < 0.0, "backing down should give sternway");

    app.world_mut().send_event(KeyInput::release("s"));
    app.world_mut().send_event(KeyInput::press("q"));
    advance_app(&mut app, DT);
    let held = app.world().get_resource::<HeldIntents>().expect("held").0;
    assert_eq!(held, towing::ControlIntents::default());
    Ok(())
}

#[test]
fn zero_length_frame_leaves_hulls_in_place() -> Result<()> {
    let cfg = Config {
        script: vec![ScriptStep::new(5.0, &[Intent::Forward])],
        ..Config::default()
    };
    let mut app = build_harbor_app(cfg)?;
    for _ in 0..120 {
        advance_app(&mut app, DT);
    }
    let before = snapshot(&app);

    advance_app(&mut app, 0.0);

    let after = snapshot(&app);
    assert_eq!(app.world().get_resource::<TickCounter>().expect("ticks").0, 121);
    assert_eq!(after.vessel.translation, before.vessel.translation);
    assert_eq!(after.load.translation, before.load.translation);
    assert_eq!(after.rope, before.rope);
    Ok(())
}

#[test]
fn config_from_toml_overrides_defaults() -> Result<()> {
    let cfg = parse_config(
        r#"
        tick_hz = 30
        duration_secs = 10.0

        [rig.tow]
        initial_rope_length = 20.0
        max_rope_length = 40.0

        [rig.rope]
        segments = 8

        [[script]]
        secs = 2.0
        hold = ["forward", "pay_out"]
        "#,
    )?;
    assert_eq!(cfg.total_ticks(), 300);
    assert_eq!(cfg.rig.tow.initial_rope_length, 20.0);
    // Untouched fields keep the preset values
    assert_eq!(cfg.rig.tow.min_rope_length, 5.0);
    assert_eq!(cfg.rig.vessel.max_speed, 0.15);
    assert_eq!(cfg.script, vec![ScriptStep::new(2.0, &[Intent::Forward, Intent::PayOut])]);

    let mut app = build_harbor_app(cfg)?;
    advance_app(&mut app, 1.0 / 30.0);
    assert_eq!(snapshot(&app).rope.len(), 9);
    Ok(())
}

#[test]
fn inconsistent_rope_bounds_rejected() {
    let err = parse_config(
        r#"
        [rig.tow]
        min_rope_length = 25.0
        max_rope_length = 10.0
        "#,
    )
    .expect_err("bounds are inverted");
    assert!(format!("{err:#}").contains("rope bounds"), "{err:#}");
}
