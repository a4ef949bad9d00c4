use crate::{RopeParams, Vec3f};

/// Ordered sample points from the tow bitt to the barge hitch.
///
/// The renderer lofts a tube along these; nothing here persists between
/// ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RopeCurve {
    pub points: Vec<Vec3f>,
    /// How far the middle of the rope hangs below the straight chord.
    pub sag: f32,
}

impl RopeCurve {
    pub fn tow_end(&self) -> Option<Vec3f> {
        self.points.first().copied()
    }

    pub fn hitch_end(&self) -> Option<Vec3f> {
        self.points.last().copied()
    }

    /// Length along the sampled polyline.
    pub fn path_length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

/// Sample a sagging rope between two raised anchor points.
///
/// Not a catenary: the midpoint of the chord is dropped by
/// `min(distance * sag_factor, sag_cap)` and the curve is two straight legs
/// through it, `segments + 1` points in total.
pub fn sample_rope(params: &RopeParams, tow: Vec3f, hitch: Vec3f) -> RopeCurve {
    let mut curve = RopeCurve::default();
    resample_rope(params, tow, hitch, &mut curve);
    curve
}

/// Same as `sample_rope` but reuses the point buffer.
pub(crate) fn resample_rope(params: &RopeParams, tow: Vec3f, hitch: Vec3f, out: &mut RopeCurve) {
    let segments = params.segments.max(1);
    let distance = tow.distance(hitch);
    let sag = (distance * params.sag_factor).min(params.sag_cap);
    let mut mid = tow.lerp(hitch, 0.5);
    mid.y -= sag;

    out.sag = sag;
    out.points.clear();
    out.points.reserve(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let p = if t <= 0.5 {
            tow.lerp(mid, t * 2.0)
        } else {
            mid.lerp(hitch, (t - 0.5) * 2.0)
        };
        out.points.push(p);
    }
}
