pub trait Unit<T> {
    fn confine(value: T) -> Self;
    fn release(self) -> T;
}

/* # angles */

/// geographic latitude in degrees, confined to [-90, 90]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Latitude(f64);

impl Latitude {
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl Unit<f64> for Latitude {
    fn confine(value: f64) -> Self {
        Self(value.clamp(-90.0, 90.0))
    }

    fn release(self) -> f64 {
        self.0
    }
}

/// geographic longitude in degrees, confined to [-180, 180]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Longitude(f64);

impl Longitude {
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl Unit<f64> for Longitude {
    fn confine(value: f64) -> Self {
        Self((value + 180.0).rem_euclid(360.0) - 180.0)
    }

    fn release(self) -> f64 {
        self.0
    }
}

/* # weather */

/// air temperature, stored in degrees celsius
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    pub fn fahrenheit(self) -> f64 {
        self.0 * 9.0 / 5.0 + 32.0
    }

    /// whole degrees, the way the cards display it
    pub fn rounded(self) -> i32 {
        self.0.round() as i32
    }
}

impl Unit<f64> for Temperature {
    fn confine(value: f64) -> Self {
        Self(value)
    }

    fn release(self) -> f64 {
        self.0
    }
}

/// wind speed, stored in meters per second
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct WindSpeed(f64);

impl WindSpeed {
    pub fn kmh(self) -> f64 {
        self.0 * 3.6
    }

    pub fn mph(self) -> f64 {
        self.0 * 2.236936
    }
}

impl Unit<f64> for WindSpeed {
    fn confine(value: f64) -> Self {
        Self(value)
    }

    fn release(self) -> f64 {
        self.0
    }
}
