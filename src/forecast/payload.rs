//! serde mirror of the consumed fields of the weather provider's responses
//!
//! fetching and HTTP error translation live outside the core, this is the
//! translation boundary where response bodies become plain values

use crate::{error::Error, globe::projection::GeoCoordinate};
use serde::Deserialize;

/// one weather condition as the provider reports it
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Condition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl Condition {
    /// glyph shown on the marker billboard and the forecast cards
    pub fn glyph(&self) -> &'static str {
        match self.icon.as_str() {
            "01d" => "☀️",
            "01n" => "🌙",
            "02d" => "⛅",
            "02n" | "03d" | "03n" | "04d" | "04n" => "☁️",
            "09d" | "09n" | "10n" => "🌧️",
            "10d" => "🌦️",
            "11d" | "11n" => "⛈️",
            "13d" | "13n" => "🌨️",
            "50d" | "50n" => "🌫️",
            _ => "☁️",
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MainPayload {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WindPayload {
    pub speed: f64,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct SysPayload {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// current-conditions response body
#[derive(Clone, Debug, Deserialize)]
pub struct CurrentPayload {
    pub dt: i64,
    pub main: MainPayload,
    pub wind: WindPayload,
    pub weather: Vec<Condition>,
    pub visibility: Option<f64>,
    #[serde(default)]
    pub sys: SysPayload,
}

/// one 3-hour step of the forecast response
#[derive(Clone, Debug, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainPayload,
    pub wind: WindPayload,
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub pop: f64,
}

/// 5-day/3-hour forecast response body
#[derive(Clone, Debug, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<ForecastEntry>,
}

/// geocoding result naming a place on the globe
#[derive(Clone, Debug, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: String,
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.lat, self.lon)
    }
}

pub fn parse_current(json: &str) -> Result<CurrentPayload, Error> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_forecast(json: &str) -> Result<ForecastPayload, Error> {
    Ok(serde_json::from_str(json)?)
}
