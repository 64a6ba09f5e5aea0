/* # globe */

pub const GLOBE_RADIUS: f64 = 2.0; // sphere radius in scene units
pub const MARKER_LIFT: f64 = 1.01; // marker floats just off the surface
pub const CAMERA_DISTANCE: f64 = 8.0; // viewpoint distance from the origin
pub const GLOBE_SPIN: f64 = 0.1; // idle surface rotation, radians per second
pub const CLOUD_SPIN: f64 = 0.15; // cloud shell drifts faster than the surface

/* # forecast */

pub const HOURLY_SLICE: usize = 24; // entries shown on the hourly strip
pub const DAILY_SLICE: usize = 5; // days shown on the daily strip
pub const FORECAST_STEP: i64 = 10800; // seconds between forecast entries
