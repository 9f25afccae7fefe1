//! ANSI escape sequences and the color choices for each reading.

use weather_core::{AirQuality, Art, ConditionCategory, UvRisk};

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

pub fn art_color(art: Art) -> &'static str {
    match art {
        Art::Sky(category) => category_color(category),
        Art::Moon(_) | Art::Blank => BLUE,
    }
}

pub fn category_color(category: ConditionCategory) -> &'static str {
    match category {
        ConditionCategory::Sunny => YELLOW,
        ConditionCategory::Cloudy | ConditionCategory::Snowy | ConditionCategory::ClearNight => {
            WHITE
        }
        ConditionCategory::Rainy => CYAN,
        ConditionCategory::Thunder => MAGENTA,
    }
}

pub fn uv_color(risk: UvRisk) -> &'static str {
    match risk {
        UvRisk::Low => GREEN,
        UvRisk::Moderate | UvRisk::High => YELLOW,
        UvRisk::VeryHigh | UvRisk::Extreme => RED,
    }
}

/// `None` for an out-of-range index, which is shown uncolored.
pub fn air_quality_color(quality: AirQuality) -> Option<&'static str> {
    match quality {
        AirQuality::Good => Some(GREEN),
        AirQuality::Moderate | AirQuality::UnhealthyForSensitiveGroups => Some(YELLOW),
        AirQuality::Unhealthy | AirQuality::VeryUnhealthy | AirQuality::Hazardous => Some(RED),
        AirQuality::Unknown => None,
    }
}
