use chrono::NaiveDate;
use serde::Deserialize;

/// What to fetch: a free-form location and the day used for astronomy data.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    /// City name, ZIP code or `lat,lon`.
    pub location: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// °F and mph.
    #[default]
    Imperial,
    /// °C and kph.
    Metric,
}

impl Units {
    pub fn temperature_label(self) -> &'static str {
        match self {
            Units::Imperial => "°F",
            Units::Metric => "°C",
        }
    }

    pub fn speed_label(self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric => "kph",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub text: String,
    pub code: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirQuality {
    /// US EPA index, 1 (good) to 6 (hazardous).
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Current {
    /// Local observation time as `YYYY-MM-DD HH:MM`.
    pub last_updated: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub humidity: i64,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub vis_miles: f64,
    pub uv: f64,
    pub condition: Condition,
    #[serde(default)]
    pub air_quality: Option<AirQuality>,
}

impl Current {
    pub fn temperature(&self, units: Units) -> f64 {
        match units {
            Units::Imperial => self.temp_f,
            Units::Metric => self.temp_c,
        }
    }

    pub fn feels_like(&self, units: Units) -> f64 {
        match units {
            Units::Imperial => self.feelslike_f,
            Units::Metric => self.feelslike_c,
        }
    }

    pub fn wind_speed(&self, units: Units) -> f64 {
        match units {
            Units::Imperial => self.wind_mph,
            Units::Metric => self.wind_kph,
        }
    }

    pub fn air_quality_index(&self) -> Option<i64> {
        self.air_quality.as_ref().and_then(|aq| aq.us_epa_index)
    }
}

/// The parts of the astronomy data the report uses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Astro {
    pub moon_phase: Option<String>,
    pub is_sun_up: Option<u8>,
}

/// Body of `current.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub location: Location,
    pub current: Current,
}

/// Body of `astronomy.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct AstronomyResponse {
    #[serde(default)]
    pub astronomy: Option<Astronomy>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Astronomy {
    #[serde(default)]
    pub astro: Option<Astro>,
}

/// Current conditions merged with today's astronomy data. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: Current,
    pub astro: Option<Astro>,
}

impl WeatherSnapshot {
    pub(crate) fn merge(current: CurrentResponse, astronomy: AstronomyResponse) -> Self {
        Self {
            location: current.location,
            current: current.current,
            astro: astronomy.astronomy.and_then(|a| a.astro),
        }
    }

    /// The moon phase name, if the astronomy data carried a non-empty one.
    pub fn moon_phase(&self) -> Option<&str> {
        self.astro
            .as_ref()
            .and_then(|astro| astro.moon_phase.as_deref())
            .filter(|phase| !phase.is_empty())
    }

    /// Whether the sun is up. Uses the astronomy flag when present,
    /// otherwise treats local hours 6..18 as daytime.
    pub fn is_daytime(&self, local_hour: u32) -> bool {
        match self.astro.as_ref().and_then(|astro| astro.is_sun_up) {
            Some(flag) => flag == 1,
            None => (6..18).contains(&local_hour),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn snapshot(code: i32, astro: Option<Astro>) -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location {
                name: "Austin".into(),
                region: "Texas".into(),
                country: "United States of America".into(),
            },
            current: Current {
                last_updated: "2024-03-15 14:30".into(),
                temp_c: 23.9,
                temp_f: 75.0,
                feelslike_c: 25.1,
                feelslike_f: 77.2,
                humidity: 40,
                wind_mph: 8.1,
                wind_kph: 13.0,
                wind_degree: 190.0,
                wind_dir: "S".into(),
                pressure_mb: 1012.0,
                vis_miles: 9.0,
                uv: 6.0,
                condition: Condition { text: "Sunny".into(), code },
                air_quality: None,
            },
            astro,
        }
    }
}
