use anyhow::Result;
use clap::Parser;
use tracing::info;

use harbor::{advance_app, build_harbor_app, load_config, Args, RenderSnapshot};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(every) = args.log_every {
        cfg.log_every = every;
    }
    info!(?cfg, "Harbor config loaded");

    let ticks = args.ticks.unwrap_or_else(|| cfg.total_ticks());
    let dt = cfg.tick_dt();
    let mut app = build_harbor_app(cfg)?;
    app.insert_resource(args);
    for _ in 0..ticks {
        advance_app(&mut app, dt);
    }

    if let Some(snap) = app.world().get_resource::<RenderSnapshot>() {
        info!(
            ticks = snap.tick,
            tug = ?snap.vessel.translation,
            barge = ?snap.load.translation,
            rope_length = snap.rope_length,
            "Session finished"
        );
    }
    Ok(())
}
