use std::path::Path;

use anyhow::{bail, Context, Result};
use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use towing::{Intent, KeyBindings, RigParams};

/// One leg of the autopilot: hold these controls for `secs` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub secs: f32,
    #[serde(default)]
    pub hold: Vec<Intent>,
}

impl ScriptStep {
    pub fn new(secs: f32, hold: &[Intent]) -> Self {
        Self {
            secs,
            hold: hold.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct Config {
    pub tick_hz: u32,
    pub duration_secs: f32,
    /// Telemetry cadence in ticks; 0 disables the periodic log line.
    pub log_every: u64,
    pub rig: RigParams,
    pub bindings: KeyBindings,
    pub script: Vec<ScriptStep>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            duration_secs: 30.0,
            log_every: 60,
            rig: RigParams::default(),
            bindings: KeyBindings::default(),
            script: demo_tour(),
        }
    }
}

impl Config {
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }

    pub fn total_ticks(&self) -> u64 {
        (self.duration_secs.max(0.0) * self.tick_hz as f32).round() as u64
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_hz == 0 {
            bail!("tick_hz must be positive");
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            bail!("duration_secs must be a non-negative number (got {})", self.duration_secs);
        }
        if let Some((i, step)) = self
            .script
            .iter()
            .enumerate()
            .find(|(_, s)| !s.secs.is_finite() || s.secs < 0.0)
        {
            bail!("script step {i} has invalid duration {}", step.secs);
        }
        self.rig.validate().context("invalid rig parameters")?;
        Ok(())
    }
}

// Out of the harbour, round a bend, pay out, swing back and haul in.
fn demo_tour() -> Vec<ScriptStep> {
    vec![
        ScriptStep::new(4.0, &[Intent::Forward]),
        ScriptStep::new(3.0, &[Intent::Forward, Intent::Left]),
        ScriptStep::new(2.5, &[Intent::Forward, Intent::PayOut]),
        ScriptStep::new(4.0, &[Intent::Forward, Intent::Right]),
        ScriptStep::new(3.0, &[Intent::HaulIn]),
        ScriptStep::new(3.0, &[]),
    ]
}

pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text).context("parsing harbor config")?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        let cfg = Config::default();
        cfg.validate()?;
        return Ok(cfg);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading config {}", path.display()))
}
