//! Animator configuration.

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::canvas::Color;
use crate::centripetal::SplineParams;
use crate::error::{Error, Result};
use crate::ring::{Deformation, MIN_POINTS};

/// Everything that stays fixed from one frame to the next.
///
/// The defaults reproduce the reference animation: ten points, twenty
/// subdivisions per span, a red 2.5 wide curve over black guides and
/// markers on a light gray background.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct AnimatorConfig {
    /// Logical points on the ring; at least 4.
    pub point_count: usize,
    pub segments_per_span: usize,
    pub stroke_width: f64,
    pub guide_width: f64,
    pub marker_radius: f64,
    /// The ring scale is the smaller drawing-area side divided by this.
    pub scale_divisor: f64,
    /// Painted over the whole drawing area first, if set.
    pub background: Option<Color>,
    pub marker_color: Color,
    pub guide_color: Color,
    pub spline_color: Color,
    pub deformation: Deformation,
    pub spline: SplineParams,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        AnimatorConfig {
            point_count: 10,
            segments_per_span: 20,
            stroke_width: 2.5,
            guide_width: 1.0,
            marker_radius: 4.0,
            scale_divisor: 3.0,
            background: Some(Color::LIGHT_GRAY),
            marker_color: Color::BLACK,
            guide_color: Color::BLACK,
            spline_color: Color::RED,
            deformation: Deformation::default(),
            spline: SplineParams::default(),
        }
    }
}

impl AnimatorConfig {
    /// Check that the configuration describes a drawable animation.
    pub fn validate(&self) -> Result<()> {
        if self.point_count < MIN_POINTS {
            return Err(Error::TooFewPoints {
                count: self.point_count,
                min: MIN_POINTS,
            });
        }
        if self.segments_per_span == 0 {
            return Err(Error::NoSubdivisions);
        }
        check_width("stroke width", self.stroke_width)?;
        check_width("guide width", self.guide_width)?;
        check_width("marker radius", self.marker_radius)?;
        if !(self.scale_divisor.is_finite() && self.scale_divisor > 0.0) {
            return Err(Error::InvalidScaleDivisor(self.scale_divisor));
        }
        if !(0.0..=1.0).contains(&self.spline.alpha) {
            return Err(Error::InvalidAlpha(self.spline.alpha));
        }
        check_finite("spline tension", self.spline.tension)?;

        let d = &self.deformation;
        check_finite("deformation base", d.base)?;
        check_finite("deformation pulse", d.pulse)?;
        check_finite("deformation pulse rate", d.pulse_rate)?;
        check_finite("deformation ripple", d.ripple)?;
        check_finite("deformation lobes", d.lobes)?;
        check_finite("deformation ripple rate", d.ripple_rate)?;
        let (min_radius, _) = d.radius_bounds();
        if min_radius < 0.0 {
            return Err(Error::NegativeRadius(min_radius));
        }
        Ok(())
    }
}

fn check_finite(what: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { what, value })
    }
}

fn check_width(what: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWidth { what, value })
    }
}
