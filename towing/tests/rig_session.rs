use towing::{hitch_anchor, presets, tow_anchor, ControlIntents, Intent, TowingRig};

const DT: f32 = 1.0 / 60.0;

#[test]
fn barge_follows_tug_under_way() {
    let mut rig = TowingRig::new(presets::harbor_tug()).expect("valid preset");
    let ahead = ControlIntents::holding(&[Intent::Forward]);
    let mut t = 0.0f32;
    for _ in 0..600 {
        rig.tick(DT, t, ahead);
        t += DT;
        assert!(rig.is_finite());
    }

    let barge = rig.tow().load.position;
    let tug = rig.vessel().transform.position;
    assert!(tug.z < -60.0, "tug only reached z = {}", tug.z);
    assert!(barge.z < -20.0, "barge left behind at z = {}", barge.z);
    // The barge swings its hitch round while settling, so allow a little sideways drift
    assert!(barge.x.abs() < 2.0, "barge wandered sideways: x = {}", barge.x);

    let d = rig.tow_debug();
    assert!(d.taut, "rope should be carrying load at speed");
    assert!(d.stretch < 4.0, "rope overstretched by {}", d.stretch);
}

#[test]
fn rope_curve_tracks_anchors_every_tick() {
    let mut rig = TowingRig::new(presets::harbor_tug()).expect("valid preset");
    let script = [
        (120, ControlIntents::holding(&[Intent::Forward])),
        (90, ControlIntents::holding(&[Intent::Forward, Intent::Left])),
        (60, ControlIntents::holding(&[Intent::Forward, Intent::PayOut])),
        (90, ControlIntents::holding(&[Intent::Backward, Intent::HaulIn])),
        (120, ControlIntents::default()),
    ];
    let mut t = 0.0f32;
    for (ticks, intents) in script {
        for _ in 0..ticks {
            let rope = rig.tick(DT, t, intents).clone();
            t += DT;

            let tow = tow_anchor(&rig.params().tow, &rig.vessel().transform);
            let hitch = hitch_anchor(&rig.params().tow, &rig.tow().load);
            assert_eq!(rope.points.len(), 21);
            assert!(rope.points[0].distance(tow) < 1e-4);
            assert!(rope.points[20].distance(hitch) < 1e-4);
        }
    }
}

#[test]
fn zero_dt_tick_keeps_physical_state() {
    let mut rig = TowingRig::new(presets::harbor_tug()).expect("valid preset");
    let ahead = ControlIntents::holding(&[Intent::Forward]);
    let mut t = 0.0f32;
    for _ in 0..300 {
        rig.tick(DT, t, ahead);
        t += DT;
    }
    let vessel = rig.vessel().clone();
    let tow = rig.tow().clone();

    // Clock held fixed as well
    rig.tick(0.0, t, ahead);

    assert_eq!(rig.vessel().transform, vessel.transform);
    assert_eq!(rig.vessel().speed, vessel.speed);
    assert_eq!(rig.tow().load, tow.load);
    assert_eq!(rig.tow().velocity, tow.velocity);
    assert_eq!(rig.tow().rope_length, tow.rope_length);
}

#[test]
fn reset_restores_start_layout() {
    let params = presets::harbor_tug();
    let mut rig = TowingRig::new(params.clone()).expect("valid preset");
    let initial_rope = rig.rope().clone();
    for i in 0..200 {
        rig.tick(DT, i as f32 * DT, ControlIntents::holding(&[Intent::Forward, Intent::Right]));
    }
    rig.reset();
    assert_eq!(rig.vessel().transform.position, params.boat_start);
    assert_eq!(rig.tow().load.position, params.barge_start);
    assert_eq!(rig.tow().rope_length, params.tow.initial_rope_length);
    assert_eq!(rig.rope(), &initial_rope);
}

#[test]
fn invalid_params_refused() {
    let mut params = presets::harbor_tug();
    params.tow.damping = 1.5;
    assert!(TowingRig::new(params).is_err());
}
