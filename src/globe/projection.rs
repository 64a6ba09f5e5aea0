use crate::{
    error::Error,
    units::{Latitude, Longitude, Unit},
    vars::{CAMERA_DISTANCE, CLOUD_SPIN, GLOBE_RADIUS, GLOBE_SPIN, MARKER_LIFT},
};
use geo::Coordinate;
use nalgebra::Vector3;
use std::ops::{Add, Div, Mul, Neg, Sub};

/* # points */

macro_rules! impl_ops_internal {
    ($trait: ident, $op: tt, $method: ident) => {
        impl $trait for CartesianPoint {
            type Output = Self;

            fn $method(self, other: Self) -> Self::Output {
                Self {
                    x: self.x $op other.x,
                    y: self.y $op other.y,
                    z: self.z $op other.z,
                }
            }
        }
    };
}

macro_rules! impl_ops_external {
    ($trait: ident, $op: tt, $method: ident) => {
        impl $trait<f64> for CartesianPoint {
            type Output = Self;

            fn $method(self, other: f64) -> Self::Output {
                Self {
                    x: self.x $op other,
                    y: self.y $op other,
                    z: self.z $op other,
                }
            }
        }
    };
}

/// a point in the rendering surface's right-handed frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn norm(self) -> f64 {
        Vector3::from(self).norm()
    }
}

impl From<CartesianPoint> for Vector3<f64> {
    fn from(point: CartesianPoint) -> Self {
        Vector3::new(point.x, point.y, point.z)
    }
}

impl From<Vector3<f64>> for CartesianPoint {
    fn from(vector: Vector3<f64>) -> Self {
        Self {
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }
}

impl Neg for CartesianPoint {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl_ops_internal!(Add, +, add);
impl_ops_internal!(Sub, -, sub);
impl_ops_external!(Mul, *, mul);
impl_ops_external!(Div, /, div);

/* # coordinates */

/// a place on the globe, normalised on construction
///
/// upstream geocoding data is not guaranteed clean, so latitude is clamped
/// and longitude wrapped rather than trusted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Latitude::confine(latitude),
            longitude: Longitude::confine(longitude),
        }
    }
}

impl From<GeoCoordinate> for Coordinate<f64> {
    fn from(coord: GeoCoordinate) -> Self {
        Self {
            x: coord.longitude.release(),
            y: coord.latitude.release(),
        }
    }
}

/* # projection */

/// place a coordinate on a sphere of the given radius
///
/// longitude zero sits at the texture seam, so the azimuth is offset by 180°
pub fn project(coord: GeoCoordinate, radius: f64) -> Result<CartesianPoint, Error> {
    if radius <= 0.0 {
        return Err(Error::NonPositiveRadius(radius));
    }
    let phi = (90.0 - coord.latitude.release()).to_radians();
    let theta = (coord.longitude.release() + 180.0).to_radians();
    Ok(CartesianPoint {
        x: -radius * phi.sin() * theta.cos(),
        y: radius * phi.cos(),
        z: radius * phi.sin() * theta.sin(),
    })
}

/// marker position for the selected location, floating just off the surface
pub fn marker_position(coord: GeoCoordinate) -> Result<CartesianPoint, Error> {
    project(coord, GLOBE_RADIUS * MARKER_LIFT)
}

/// initial viewpoint above a coordinate, same mapping at camera distance
pub fn camera_position(coord: GeoCoordinate, distance: f64) -> Result<CartesianPoint, Error> {
    project(coord, distance)
}

/// viewpoint when no location is selected yet
pub fn default_camera() -> CartesianPoint {
    CartesianPoint::new(0.0, 0.0, CAMERA_DISTANCE)
}

/* # rotation */

/// globe yaw that turns the given coordinate towards the camera
pub fn facing_rotation(coord: GeoCoordinate) -> f64 {
    -coord.longitude.radians()
}

pub fn globe_spin(elapsed_time: f64) -> f64 {
    elapsed_time * GLOBE_SPIN
}

pub fn cloud_spin(elapsed_time: f64) -> f64 {
    elapsed_time * CLOUD_SPIN
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.0000_01;

    macro_rules! test_ops_internal {
        ($name: ident, $op: tt, $sx: expr, $sy: expr, $sz: expr, $ox: expr, $oy: expr, $oz: expr, $rx: expr, $ry: expr, $rz: expr) => {
            #[test]
            fn $name() {
                assert_eq!(
                    CartesianPoint::new($sx, $sy, $sz) $op CartesianPoint::new($ox, $oy, $oz),
                    CartesianPoint::new($rx, $ry, $rz),
                );
            }
        };
    }

    macro_rules! test_ops_external {
        ($name: ident, $op: tt, $sx: expr, $sy: expr, $sz: expr, $o: expr, $rx: expr, $ry: expr, $rz: expr) => {
            #[test]
            fn $name() {
                assert_eq!(
                    CartesianPoint::new($sx, $sy, $sz) $op $o,
                    CartesianPoint::new($rx, $ry, $rz),
                );
            }
        };
    }

    test_ops_internal!(point_op_add, +, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 3.0, 5.0, 7.0);
    test_ops_internal!(point_op_sub, -, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, -3.0, -3.0, -3.0);
    test_ops_external!(point_op_mul, *, 1.0, 2.0, 3.0, 2.0, 2.0, 4.0, 6.0);
    test_ops_external!(point_op_div, /, 2.0, 4.0, 6.0, 2.0, 1.0, 2.0, 3.0);

    #[test]
    fn point_op_neg() {
        assert_eq!(
            -CartesianPoint::new(1.0, -2.0, 3.0),
            CartesianPoint::new(-1.0, 2.0, -3.0)
        );
    }

    #[test]
    fn point_vector_conversion() {
        let point = CartesianPoint::new(1.0, 2.0, 3.0);
        assert_eq!(CartesianPoint::from(Vector3::from(point)), point);
    }

    #[test]
    fn coordinate_normalised() {
        let coord = GeoCoordinate::new(100.0, 200.0);
        assert_float_eq!(coord.latitude.release(), 90.0, abs <= EPSILON);
        assert_float_eq!(coord.longitude.release(), -160.0, abs <= EPSILON);
    }

    #[test]
    fn coordinate_into_geo() {
        let coord: Coordinate<f64> = GeoCoordinate::new(51.5, -0.13).into();
        assert_float_eq!(coord.x, -0.13, abs <= EPSILON);
        assert_float_eq!(coord.y, 51.5, abs <= EPSILON);
    }

    #[test]
    fn project_prime_meridian() {
        // φ = 90°, θ = 180° lands the equator crossing on the positive x axis
        let point = project(GeoCoordinate::new(0.0, 0.0), 2.0).unwrap();
        assert_float_eq!(point.x, 2.0, abs <= EPSILON);
        assert_float_eq!(point.y, 0.0, abs <= EPSILON);
        assert_float_eq!(point.z, 0.0, abs <= EPSILON);
    }

    #[test]
    fn project_poles() {
        for longitude in [-180.0, -45.0, 0.0, 160.0] {
            let north = project(GeoCoordinate::new(90.0, longitude), 3.0).unwrap();
            assert_float_eq!(north.x, 0.0, abs <= EPSILON);
            assert_float_eq!(north.y, 3.0, abs <= EPSILON);
            assert_float_eq!(north.z, 0.0, abs <= EPSILON);

            let south = project(GeoCoordinate::new(-90.0, longitude), 3.0).unwrap();
            assert_float_eq!(south.y, -3.0, abs <= EPSILON);
        }
    }

    #[test]
    fn project_preserves_radius() {
        for latitude in [-90.0, -60.0, -30.0, 0.0, 30.0, 60.0, 90.0] {
            for longitude in [-180.0, -120.0, -60.0, 0.0, 60.0, 120.0, 180.0] {
                for radius in [0.5, 2.0, 8.0] {
                    let point = project(GeoCoordinate::new(latitude, longitude), radius).unwrap();
                    assert_float_eq!(point.norm(), radius, rel <= EPSILON);
                }
            }
        }
    }

    #[test]
    fn project_rejects_degenerate_sphere() {
        assert!(project(GeoCoordinate::new(0.0, 0.0), 0.0).is_err());
        assert!(project(GeoCoordinate::new(0.0, 0.0), -2.0).is_err());
    }

    #[test]
    fn marker_floats_off_the_surface() {
        let point = marker_position(GeoCoordinate::new(60.17, 24.94)).unwrap();
        assert_float_eq!(point.norm(), GLOBE_RADIUS * MARKER_LIFT, rel <= EPSILON);
    }

    #[test]
    fn camera_above_coordinate() {
        let point = camera_position(GeoCoordinate::new(0.0, 0.0), CAMERA_DISTANCE).unwrap();
        assert_float_eq!(point.x, 8.0, abs <= EPSILON);
        assert_float_eq!(point.norm(), CAMERA_DISTANCE, rel <= EPSILON);
        assert_eq!(default_camera(), CartesianPoint::new(0.0, 0.0, 8.0));
    }

    #[test]
    fn rotation_values() {
        assert_float_eq!(
            facing_rotation(GeoCoordinate::new(0.0, 90.0)),
            -std::f64::consts::FRAC_PI_2,
            abs <= EPSILON
        );
        assert_float_eq!(globe_spin(10.0), 1.0, abs <= EPSILON);
        assert_float_eq!(cloud_spin(10.0), 1.5, abs <= EPSILON);
    }
}
