use crate::{error::Error, globe::projection::CartesianPoint};
use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;

/* # parameters */

/// static description of a circular orbit, set once per satellite
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParameters {
    pub radius: f64,
    pub angular_speed: f64,
    pub phase_offset: f64,
    pub inclination: f64,
}

impl OrbitParameters {
    /// a flat equatorial orbit, the degenerate case of the inclined form
    pub fn new(radius: f64, angular_speed: f64) -> Result<Self, Error> {
        if radius <= 0.0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Self {
            radius,
            angular_speed,
            phase_offset: 0.0,
            inclination: 0.0,
        })
    }

    /// shift the starting point along the orbit
    pub fn phased(mut self, offset: f64) -> Self {
        self.phase_offset = offset;
        self
    }

    /// tilt the orbital plane, clamped to [-π/2, π/2]
    pub fn inclined(mut self, angle: f64) -> Self {
        self.inclination = angle.clamp(-FRAC_PI_2, FRAC_PI_2);
        self
    }
}

/* # state */

/// instantaneous position and flight direction, fully derived per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    pub position: CartesianPoint,
    pub heading: CartesianPoint,
}

/// satellite state at the given elapsed time
///
/// nothing is integrated between frames, the state is rebuilt from the
/// parameters and the clock alone, so the motion cannot drift with frame rate
pub fn orbit_state(params: &OrbitParameters, elapsed_time: f64) -> OrbitState {
    let t = elapsed_time * params.angular_speed + params.phase_offset;
    let position = CartesianPoint {
        x: t.cos() * params.radius,
        y: t.sin() * params.inclination.sin() * params.radius,
        z: t.sin() * params.inclination.cos() * params.radius,
    };
    // tangent in the unrotated frame is already unit length, normalisation
    // only mops up rounding
    let heading = Vector3::new(-t.sin(), 0.0, t.cos()).normalize();
    OrbitState {
        position,
        heading: CartesianPoint::from(heading),
    }
}
