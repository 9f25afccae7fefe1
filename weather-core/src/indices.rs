//! Small derived readings: wind arrow, UV risk tier and air quality band.

use std::fmt;

/// Arrows for the 8 compass points, clockwise from north.
pub const WIND_ARROWS: [&str; 8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];

/// Arrow for a wind bearing in degrees. Halfway bearings round to the even bucket.
pub fn wind_arrow(degrees: f64) -> &'static str {
    let bucket = (degrees / 45.0).round_ties_even() as i64;
    WIND_ARROWS[bucket.rem_euclid(8) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UvRisk {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvRisk {
    pub fn from_index(uv: f64) -> Self {
        if uv <= 2.0 {
            UvRisk::Low
        } else if uv <= 5.0 {
            UvRisk::Moderate
        } else if uv <= 7.0 {
            UvRisk::High
        } else if uv <= 10.0 {
            UvRisk::VeryHigh
        } else {
            UvRisk::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UvRisk::Low => "Low",
            UvRisk::Moderate => "Moderate",
            UvRisk::High => "High",
            UvRisk::VeryHigh => "Very High",
            UvRisk::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for UvRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// US EPA air quality band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AirQuality {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

impl AirQuality {
    pub fn from_epa_index(index: i64) -> Self {
        match index {
            1 => AirQuality::Good,
            2 => AirQuality::Moderate,
            3 => AirQuality::UnhealthyForSensitiveGroups,
            4 => AirQuality::Unhealthy,
            5 => AirQuality::VeryUnhealthy,
            6 => AirQuality::Hazardous,
            _ => AirQuality::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AirQuality::Good => "Good",
            AirQuality::Moderate => "Moderate",
            AirQuality::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AirQuality::Unhealthy => "Unhealthy",
            AirQuality::VeryUnhealthy => "Very Unhealthy",
            AirQuality::Hazardous => "Hazardous",
            AirQuality::Unknown => "Unknown",
        }
    }
}
