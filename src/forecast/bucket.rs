//! shaping of the flat 3-hour forecast list into the slices the dashboard
//! renders, one sample per strip card

use crate::{
    error::Error,
    forecast::payload::{Condition, CurrentPayload, ForecastEntry, ForecastPayload},
    units::{Temperature, Unit, WindSpeed},
    vars::{DAILY_SLICE, HOURLY_SLICE},
};
use chrono::{DateTime, NaiveDate};
use itertools::Itertools;
use log::trace;
use ord_subset::OrdSubsetIterExt;

/* # samples */

/// current conditions card
#[derive(Clone, Debug)]
pub struct CurrentConditions {
    pub dt: i64,
    pub temp: Temperature,
    pub feels_like: Temperature,
    pub humidity: f64,
    pub wind_speed: WindSpeed,
    pub pressure: f64,
    pub visibility: Option<f64>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    pub conditions: Vec<Condition>,
}

impl From<CurrentPayload> for CurrentConditions {
    fn from(payload: CurrentPayload) -> Self {
        Self {
            dt: payload.dt,
            temp: Temperature::confine(payload.main.temp),
            feels_like: Temperature::confine(payload.main.feels_like),
            humidity: payload.main.humidity,
            wind_speed: WindSpeed::confine(payload.wind.speed),
            pressure: payload.main.pressure,
            visibility: payload.visibility,
            sunrise: payload.sys.sunrise,
            sunset: payload.sys.sunset,
            conditions: payload.weather,
        }
    }
}

/// one card on the hourly strip
#[derive(Clone, Debug)]
pub struct HourSample {
    pub dt: i64,
    pub temp: Temperature,
    pub feels_like: Temperature,
    pub humidity: f64,
    pub wind_speed: WindSpeed,
    pub pop: f64,
    pub conditions: Vec<Condition>,
}

impl HourSample {
    pub fn label(&self) -> String {
        DateTime::from_timestamp(self.dt, 0)
            .unwrap_or_default()
            .format("%H:%M")
            .to_string()
    }
}

impl From<&ForecastEntry> for HourSample {
    fn from(entry: &ForecastEntry) -> Self {
        Self {
            dt: entry.dt,
            temp: Temperature::confine(entry.main.temp),
            feels_like: Temperature::confine(entry.main.feels_like),
            humidity: entry.main.humidity,
            wind_speed: WindSpeed::confine(entry.wind.speed),
            pop: entry.pop,
            conditions: entry.weather.clone(),
        }
    }
}

/// one card on the daily strip, aggregated over the day's entries
#[derive(Clone, Debug)]
pub struct DayBucket {
    pub dt: i64,
    pub date: NaiveDate,
    pub temp_min: Temperature,
    pub temp_max: Temperature,
    pub humidity: f64,
    pub wind_speed: WindSpeed,
    pub pop: f64,
    pub conditions: Vec<Condition>,
}

impl DayBucket {
    pub fn label(&self) -> String {
        self.date.format("%a").to_string()
    }

    fn gather(date: NaiveDate, day: &[&ForecastEntry]) -> Self {
        let first = day[0];
        Self {
            dt: first.dt,
            date,
            temp_min: Temperature::confine(
                day.iter()
                    .map(|entry| entry.main.temp_min)
                    .ord_subset_min()
                    .unwrap_or(f64::NAN),
            ),
            temp_max: Temperature::confine(
                day.iter()
                    .map(|entry| entry.main.temp_max)
                    .ord_subset_max()
                    .unwrap_or(f64::NAN),
            ),
            humidity: first.main.humidity,
            wind_speed: WindSpeed::confine(first.wind.speed),
            // worst case over the day
            pop: day
                .iter()
                .map(|entry| entry.pop)
                .ord_subset_max()
                .unwrap_or(0.0),
            conditions: first.weather.clone(),
        }
    }
}

/// everything the dashboard renders for one location
#[derive(Clone, Debug)]
pub struct WeatherBundle {
    pub current: CurrentConditions,
    pub hourly: Vec<HourSample>,
    pub daily: Vec<DayBucket>,
}

/* # bucketing */

fn calendar_day(dt: i64) -> NaiveDate {
    DateTime::from_timestamp(dt, 0)
        .unwrap_or_default()
        .date_naive()
}

/// the first day of entries, passed through verbatim
pub fn hourly_slice(entries: &[ForecastEntry]) -> Vec<HourSample> {
    entries
        .iter()
        .take(HOURLY_SLICE)
        .map(HourSample::from)
        .collect()
}

/// entries grouped by calendar day, capped at the strip length
pub fn daily_slice(entries: &[ForecastEntry]) -> Vec<DayBucket> {
    let days = entries.iter().group_by(|entry| calendar_day(entry.dt));
    days.into_iter()
        .take(DAILY_SLICE)
        .map(|(date, group)| {
            let day = group.collect::<Vec<&ForecastEntry>>();
            DayBucket::gather(date, &day)
        })
        .collect()
}

/// assemble the value the dashboard consumes
pub fn bundle(current: CurrentPayload, forecast: ForecastPayload) -> Result<WeatherBundle, Error> {
    if forecast.list.is_empty() {
        return Err(Error::EmptyForecast);
    }
    trace!("bucketing {} forecast entries", forecast.list.len());
    Ok(WeatherBundle {
        hourly: hourly_slice(&forecast.list),
        daily: daily_slice(&forecast.list),
        current: CurrentConditions::from(current),
    })
}
