use crate::globe::orbit::{orbit_state, OrbitParameters, OrbitState};
use log::trace;
use rayon::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SatelliteKind {
    Weather,
    Communication,
    Navigation,
}

#[derive(Clone, Copy, Debug)]
pub struct Satellite {
    pub kind: SatelliteKind,
    pub params: OrbitParameters,
}

impl Satellite {
    fn new(kind: SatelliteKind, radius: f64, angular_speed: f64, inclination: f64) -> Self {
        Self {
            kind,
            params: OrbitParameters {
                radius,
                angular_speed,
                phase_offset: 0.0,
                inclination,
            },
        }
    }
}

/// the ten orbits flown around the dashboard globe
///
/// weather birds ride polar orbits, communication sits near the equator,
/// navigation fills the inclinations in between
pub fn fleet() -> Vec<Satellite> {
    use SatelliteKind::*;
    Vec::from([
        Satellite::new(Weather, 3.0, 0.4, FRAC_PI_2),
        Satellite::new(Weather, 3.0, 0.4, -FRAC_PI_2),
        Satellite::new(Weather, 3.2, 0.4, FRAC_PI_2),
        Satellite::new(Communication, 4.0, 0.2, 0.1),
        Satellite::new(Communication, 4.0, 0.2, -0.1),
        Satellite::new(Communication, 4.2, 0.2, 0.2),
        Satellite::new(Navigation, 3.5, 0.3, FRAC_PI_4),
        Satellite::new(Navigation, 3.5, 0.3, -FRAC_PI_4),
        Satellite::new(Navigation, 3.7, 0.3, FRAC_PI_3),
        Satellite::new(Navigation, 3.7, 0.3, -FRAC_PI_3),
    ])
}

/// one state per satellite for the current frame
///
/// each state depends only on its own parameters and the shared clock, so the
/// batch parallelises without coordination
pub fn fleet_states(fleet: &[Satellite], elapsed_time: f64) -> Vec<OrbitState> {
    trace!("computing {} satellite states", fleet.len());
    fleet
        .par_iter()
        .map(|satellite| orbit_state(&satellite.params, elapsed_time))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vars::GLOBE_RADIUS;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.0000_01;

    #[test]
    fn fleet_composition() {
        let fleet = fleet();
        assert_eq!(fleet.len(), 10);
        let count = |kind| fleet.iter().filter(|s| s.kind == kind).count();
        assert_eq!(count(SatelliteKind::Weather), 3);
        assert_eq!(count(SatelliteKind::Communication), 3);
        assert_eq!(count(SatelliteKind::Navigation), 4);
    }

    #[test]
    fn fleet_clears_the_globe() {
        for satellite in fleet() {
            assert!(satellite.params.radius > GLOBE_RADIUS);
        }
    }

    #[test]
    fn states_match_single_calls() {
        let fleet = fleet();
        let states = fleet_states(&fleet, 2.4);
        assert_eq!(states.len(), fleet.len());
        for (satellite, state) in fleet.iter().zip(&states) {
            assert_eq!(*state, orbit_state(&satellite.params, 2.4));
            assert_float_eq!(
                state.position.norm(),
                satellite.params.radius,
                rel <= EPSILON
            );
        }
    }
}
