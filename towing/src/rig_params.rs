use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::Vec3f;

/// Handling parameters for the tug.
///
/// `max_speed` is a per-tick displacement (the hull moves `speed` units each
/// tick); acceleration and deceleration are per second so speed changes
/// scale with frame time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselParams {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Yaw change (rad) applied per tick while steering.
    pub turn_step: f32,
    /// Minimum forward speed before the rudder bites.
    pub turn_speed_epsilon: f32,
    /// Reverse speed cap as a fraction of `max_speed`.
    pub reverse_fraction: f32,
    pub base_height: f32,
    /// Roll per radian of per-tick turn.
    pub lean_gain: f32,
    /// Nose pitch per unit of speed.
    pub accel_pitch_gain: f32,
}

impl Default for VesselParams {
    fn default() -> Self {
        presets::harbor_tug().vessel
    }
}

/// Rope and barge parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TowParams {
    /// Tow bitt position in the tug's local frame (+Z is astern).
    pub stern_offset: Vec3f,
    pub tow_height: f32,
    /// Hitch position in the barge's local frame (−Z is the bow).
    pub bow_offset: Vec3f,
    pub hitch_height: f32,
    pub initial_rope_length: f32,
    pub min_rope_length: f32,
    pub max_rope_length: f32,
    /// Pay-out / haul-in speed, units per second.
    pub reel_rate: f32,
    pub pull_coefficient: f32,
    /// Per-tick velocity multiplier (water drag).
    pub damping: f32,
    /// Fraction of the heading error removed each tick.
    pub yaw_follow: f32,
    pub base_height: f32,
}

impl Default for TowParams {
    fn default() -> Self {
        presets::harbor_tug().tow
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeParams {
    pub segments: usize,
    pub sag_factor: f32,
    pub sag_cap: f32,
}

impl Default for RopeParams {
    fn default() -> Self {
        presets::harbor_tug().rope
    }
}

/// Everything needed to start a towing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RigParams {
    pub vessel: VesselParams,
    pub tow: TowParams,
    pub rope: RopeParams,
    pub boat_start: Vec3f,
    pub barge_start: Vec3f,
}

impl Default for RigParams {
    fn default() -> Self {
        presets::harbor_tug()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must lie in {min}..={max} (got {value})")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("rope bounds inverted: min {min} > max {max}")]
    RopeBounds { min: f32, max: f32 },
    #[error("rope curve needs at least one segment")]
    NoSegments,
    #[error("{name} is not finite")]
    NonFinite { name: &'static str },
}

fn positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NonFinite { name });
    }
    if value <= 0.0 {
        return Err(ParamsError::NotPositive { name, value });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NonFinite { name });
    }
    if value < 0.0 {
        return Err(ParamsError::Negative { name, value });
    }
    Ok(())
}

fn in_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NonFinite { name });
    }
    if value < min || value > max {
        return Err(ParamsError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn finite_vec(name: &'static str, v: Vec3f) -> Result<(), ParamsError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NonFinite { name })
    }
}

impl RigParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        let v = &self.vessel;
        positive("vessel.max_speed", v.max_speed)?;
        non_negative("vessel.acceleration", v.acceleration)?;
        non_negative("vessel.deceleration", v.deceleration)?;
        non_negative("vessel.turn_step", v.turn_step)?;
        non_negative("vessel.turn_speed_epsilon", v.turn_speed_epsilon)?;
        in_range("vessel.reverse_fraction", v.reverse_fraction, 0.0, 1.0)?;

        let t = &self.tow;
        finite_vec("tow.stern_offset", t.stern_offset)?;
        finite_vec("tow.bow_offset", t.bow_offset)?;
        positive("tow.min_rope_length", t.min_rope_length)?;
        positive("tow.max_rope_length", t.max_rope_length)?;
        if t.min_rope_length > t.max_rope_length {
            return Err(ParamsError::RopeBounds {
                min: t.min_rope_length,
                max: t.max_rope_length,
            });
        }
        in_range(
            "tow.initial_rope_length",
            t.initial_rope_length,
            t.min_rope_length,
            t.max_rope_length,
        )?;
        non_negative("tow.reel_rate", t.reel_rate)?;
        non_negative("tow.pull_coefficient", t.pull_coefficient)?;
        in_range("tow.damping", t.damping, 0.0, 1.0)?;
        positive("tow.yaw_follow", t.yaw_follow)?;
        in_range("tow.yaw_follow", t.yaw_follow, 0.0, 1.0)?;

        let r = &self.rope;
        if r.segments == 0 {
            return Err(ParamsError::NoSegments);
        }
        non_negative("rope.sag_factor", r.sag_factor)?;
        non_negative("rope.sag_cap", r.sag_cap)?;

        finite_vec("boat_start", self.boat_start)?;
        finite_vec("barge_start", self.barge_start)?;
        Ok(())
    }
}

pub mod presets {
    use super::*;

    // The stormy-harbor toy: small tug, flat barge fifteen units astern.
    pub fn harbor_tug() -> RigParams {
        RigParams {
            vessel: VesselParams {
                max_speed: 0.15,
                // 0.002 / 0.001 per tick at 60 Hz
                acceleration: 0.12,
                deceleration: 0.06,
                turn_step: 0.04,
                turn_speed_epsilon: 0.001,
                reverse_fraction: 0.5,
                base_height: 0.5,
                lean_gain: 3.0,
                accel_pitch_gain: 0.3,
            },
            tow: TowParams {
                stern_offset: Vec3f::new(0.0, 0.0, 2.5),
                tow_height: 0.8,
                bow_offset: Vec3f::new(0.0, 0.0, -3.2),
                hitch_height: 0.6,
                initial_rope_length: 12.0,
                min_rope_length: 5.0,
                max_rope_length: 30.0,
                reel_rate: 2.0,
                pull_coefficient: 0.5,
                damping: 0.95,
                yaw_follow: 0.05,
                base_height: 0.5,
            },
            rope: RopeParams {
                segments: 20,
                sag_factor: 0.15,
                sag_cap: 1.5,
            },
            boat_start: Vec3f::new(0.0, 0.5, 0.0),
            barge_start: Vec3f::new(0.0, 0.5, 15.0),
        }
    }
}
