//! Two-column terminal report: colored art on the left, labelled readings on the right.

use chrono::NaiveDateTime;
use weather_core::{
    AirQuality, Art, ConditionCategory, Units, UvRisk, WeatherSnapshot,
    icons::weather_glyph,
    indices::wind_arrow,
};

use crate::ansi::{self, BOLD, BLUE, CYAN, RESET};

/// Visible width of the art column. Constant for every art block.
const ART_WIDTH: usize = 15;

const RULE_WIDTH: usize = 64;
const MOON_RULE_WIDTH: usize = 72;

const TIMESTAMP_IN: &str = "%Y-%m-%d %H:%M";
const TIMESTAMP_OUT: &str = "%A, %B %d, %Y at %I:%M %p";

/// Lines of a full report, including the horizontal rules above and below.
pub fn render(snapshot: &WeatherSnapshot, units: Units, local_hour: u32) -> Vec<String> {
    let current = &snapshot.current;
    let daytime = snapshot.is_daytime(local_hour);
    let moon_phase = snapshot.moon_phase();

    let category = ConditionCategory::classify(current.condition.code, daytime);
    let art = Art::resolve(category, moon_phase);
    let art_color = ansi::art_color(art);

    let left: Vec<String> = art
        .lines()
        .iter()
        .map(|line| {
            let colored = format!("{art_color}{line}{RESET}");
            let width = ART_WIDTH + art_color.len() + RESET.len();
            format!("{colored:<width$}")
        })
        .collect();

    let right = readings(snapshot, units, daytime, moon_phase);

    let blank = " ".repeat(ART_WIDTH);
    let rows = left.len().max(right.len());
    let rule = horizontal_rule(if art.is_detailed_moon() { MOON_RULE_WIDTH } else { RULE_WIDTH });

    let mut lines = Vec::with_capacity(rows + 2);
    lines.push(rule.clone());
    for i in 0..rows {
        let l = left.get(i).map_or(blank.as_str(), String::as_str);
        let r = right.get(i).map_or("", String::as_str);
        lines.push(format!("{l} {r}"));
    }
    lines.push(rule);
    lines
}

fn readings(
    snapshot: &WeatherSnapshot,
    units: Units,
    daytime: bool,
    moon_phase: Option<&str>,
) -> Vec<String> {
    let location = &snapshot.location;
    let current = &snapshot.current;
    let temp_unit = units.temperature_label();

    let glyph = weather_glyph(current.condition.code, daytime, moon_phase);

    let uv = UvRisk::from_index(current.uv);
    let mut uv_line = format!(
        "{BOLD}UV Index:{RESET} {} ({}{}{RESET})",
        reading(current.uv),
        ansi::uv_color(uv),
        uv.label()
    );
    if let Some(index) = current.air_quality_index() {
        let quality = AirQuality::from_epa_index(index);
        let color = ansi::air_quality_color(quality).unwrap_or_default();
        uv_line.push_str(&format!(
            "  {BOLD}Air Quality:{RESET} {color}{} ({index}/6)",
            quality.label()
        ));
    }

    let mut lines = vec![
        format!(
            "{BOLD}{CYAN}{}, {}, {}{RESET}",
            location.name, location.region, location.country
        ),
        format!("{BOLD}Weather:{RESET} {glyph} {}", current.condition.text),
        format!(
            "{BOLD}Temperature:{RESET} {}{temp_unit} (Feels like: {}{temp_unit})",
            reading(current.temperature(units)),
            reading(current.feels_like(units)),
        ),
        format!("{BOLD}Humidity:{RESET} {}%", current.humidity),
        format!(
            "{BOLD}Wind:{RESET} {} {} {} {}",
            reading(current.wind_speed(units)),
            units.speed_label(),
            wind_arrow(current.wind_degree),
            current.wind_dir
        ),
        format!("{BOLD}Pressure:{RESET} {} mb", reading(current.pressure_mb)),
        format!("{BOLD}Visibility:{RESET} {} miles", reading(current.vis_miles)),
        uv_line,
    ];

    if let Some(phase) = moon_phase.filter(|_| !daytime) {
        lines.push(format!("{BOLD}Moon Phase:{RESET} {phase}"));
    }

    lines.push(format!(
        "{BOLD}Updated:{RESET} {}",
        format_timestamp(&current.last_updated)
    ));
    lines
}

fn horizontal_rule(width: usize) -> String {
    format!("{BLUE}{}{RESET}", "─".repeat(width))
}

/// Decimal readings keep their fractional part, so `75.0` stays `75.0`.
fn reading(value: f64) -> String {
    format!("{value:?}")
}

/// `2024-03-15 14:30` becomes `Friday, March 15, 2024 at 02:30 PM`.
/// Anything that does not parse is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_IN)
        .map(|dt| dt.format(TIMESTAMP_OUT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
