//! Unicode glyphs and ASCII art for conditions and moon phases.
//!
//! Every glyph carries a trailing space; the art blocks are reproduced
//! character for character and must not be reflowed.

use crate::condition::ConditionCategory;

/// Shown for condition codes without a glyph of their own.
pub const THERMOMETER: &str = "\u{1f321}\u{fe0f} ";

/// Shown at night when the phase name is not one of the eight known ones.
pub const FULL_MOON: &str = "\u{1f315} ";

const SUN: &str = "\u{2600}\u{fe0f} ";
const SUN_BEHIND_CLOUD: &str = "\u{1f324}\u{fe0f} ";
const PARTLY_CLOUDY: &str = "\u{26c5} ";
const CLOUD: &str = "\u{2601}\u{fe0f} ";
const FOG: &str = "\u{1f32b}\u{fe0f} ";
const SUN_BEHIND_RAIN: &str = "\u{1f326}\u{fe0f} ";
const SNOW_CLOUD: &str = "\u{1f328}\u{fe0f} ";
const RAIN_CLOUD: &str = "\u{1f327}\u{fe0f} ";
const THUNDER_CLOUD: &str = "\u{26c8}\u{fe0f} ";
const SNOWFLAKE: &str = "\u{2744}\u{fe0f} ";

/// The eight canonical lunar phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const fn all() -> &'static [MoonPhase] {
        &[
            MoonPhase::NewMoon,
            MoonPhase::WaxingCrescent,
            MoonPhase::FirstQuarter,
            MoonPhase::WaxingGibbous,
            MoonPhase::FullMoon,
            MoonPhase::WaningGibbous,
            MoonPhase::LastQuarter,
            MoonPhase::WaningCrescent,
        ]
    }

    /// Parse the exact phase name the API reports, e.g. `"Waxing Gibbous"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|phase| phase.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "\u{1f311} ",
            MoonPhase::WaxingCrescent => "\u{1f312} ",
            MoonPhase::FirstQuarter => "\u{1f313} ",
            MoonPhase::WaxingGibbous => "\u{1f314} ",
            MoonPhase::FullMoon => FULL_MOON,
            MoonPhase::WaningGibbous => "\u{1f316} ",
            MoonPhase::LastQuarter => "\u{1f317} ",
            MoonPhase::WaningCrescent => "\u{1f318} ",
        }
    }

    /// Six-line drawing of the phase.
    pub fn art(&self) -> &'static [&'static str] {
        match self {
            MoonPhase::NewMoon => &[
                "     _..._   ",
                "   .:::::::. ",
                "  :::::::::::",
                "  :::::::::::",
                "  `:::::::::'",
                "    `':::''  ",
            ],
            MoonPhase::WaxingCrescent => &[
                "     _..._   ",
                "   .::::. `. ",
                "  :::::::.  :",
                "  ::::::::  :",
                "  `::::::' .'",
                "    `'::'-'  ",
            ],
            MoonPhase::FirstQuarter => &[
                "     _..._   ",
                "   .::::  `. ",
                "  ::::::    :",
                "  ::::::    :",
                "  `:::::   .'",
                "    `'::.-'  ",
            ],
            MoonPhase::WaxingGibbous => &[
                "     _..._   ",
                "   .::'   `. ",
                "  :::       :",
                "  :::       :",
                "  `::.     .'",
                "    `':..-'  ",
            ],
            MoonPhase::FullMoon => &[
                "     _..._   ",
                "   .'     `. ",
                "  :         :",
                "  :         :",
                "  `.       .'",
                "    `-...-'  ",
            ],
            MoonPhase::WaningGibbous => &[
                "     _..._   ",
                "   .'   `::. ",
                "  :       :::",
                "  :       :::",
                "  `.     .::'",
                "    `-..:''  ",
            ],
            MoonPhase::LastQuarter => &[
                "     _..._   ",
                "   .'  ::::. ",
                "  :    ::::::",
                "  :    ::::::",
                "  `.   :::::'",
                "    `-.::''  ",
            ],
            MoonPhase::WaningCrescent => &[
                "     _..._   ",
                "   .' .::::. ",
                "  :  ::::::::",
                "  :  ::::::::",
                "  `. '::::::'",
                "    `-.::''  ",
            ],
        }
    }
}

/// Glyph for a condition code, if the code has one.
pub fn condition_glyph(code: i32) -> Option<&'static str> {
    let glyph = match code {
        1000 => SUN,
        1003 => SUN_BEHIND_CLOUD,
        1006 => PARTLY_CLOUDY,
        1009 => CLOUD,
        1030 | 1135 | 1147 => FOG,
        1063 => SUN_BEHIND_RAIN,
        1066 | 1117 => SNOW_CLOUD,
        1069 | 1072 => RAIN_CLOUD,
        1087 => THUNDER_CLOUD,
        1114 => SNOWFLAKE,
        1150 | 1153 | 1168 | 1171 | 1180 | 1183 | 1186 | 1189 | 1192 | 1195 | 1198 | 1201 => {
            RAIN_CLOUD
        }
        1204 | 1207 | 1210 | 1213 | 1216 | 1219 | 1222 => SNOW_CLOUD,
        1225 | 1237 => SNOWFLAKE,
        1240 | 1243 | 1246 | 1249 | 1252 => RAIN_CLOUD,
        1255 | 1258 => SNOW_CLOUD,
        1261 | 1264 => SNOWFLAKE,
        1273 | 1276 | 1279 | 1282 => THUNDER_CLOUD,
        _ => return None,
    };
    Some(glyph)
}

/// Pick the glyph for the "Weather:" line.
///
/// At night with a known moon phase the moon wins regardless of the condition;
/// an unrecognised phase name falls back to the full moon.
pub fn weather_glyph(code: i32, is_daytime: bool, moon_phase: Option<&str>) -> &'static str {
    match moon_phase {
        Some(name) if !is_daytime && !name.is_empty() => {
            MoonPhase::from_name(name).map_or(FULL_MOON, |phase| phase.glyph())
        }
        _ => condition_glyph(code).unwrap_or(THERMOMETER),
    }
}

/// Art for a daytime or non-clear category; `None` for `ClearNight`, which uses moon art.
pub fn category_art(category: ConditionCategory) -> Option<&'static [&'static str]> {
    let art: &'static [&'static str] = match category {
        ConditionCategory::Sunny => &[
            "    \\   /   ",
            "     .-.     ",
            "  \u{2015} (   ) \u{2015} ",
            "     `-'     ",
            "    /   \\   ",
        ],
        ConditionCategory::Cloudy => &[
            "      .--.   ",
            "   .-(    ). ",
            "  (___.__)__)",
            "             ",
        ],
        ConditionCategory::Rainy => &[
            "      .--.   ",
            "   .-(    ). ",
            "  (___.__)__)",
            "    , , , ,  ",
            "    , , , ,  ",
        ],
        ConditionCategory::Snowy => &[
            "      .--.   ",
            "   .-(    ). ",
            "  (___.__)__)",
            "    * * * *  ",
            "    * * * *  ",
        ],
        ConditionCategory::Thunder => &[
            "      .--.   ",
            "   .-(    ). ",
            "  (___.__)__)",
            "    \u{26a1}\u{fe0e}  \u{26a1}\u{fe0e}  \u{26a1}\u{fe0e}  ",
            "   \u{26a1}\u{fe0e}  \u{26a1}\u{fe0e}  \u{26a1}\u{fe0e}   ",
        ],
        ConditionCategory::ClearNight => return None,
    };
    Some(art)
}

/// The art block chosen for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Art {
    /// Detailed moon drawing for a clear night with a known phase.
    Moon(MoonPhase),
    /// Standard art for a weather category.
    Sky(ConditionCategory),
    /// Clear night but the phase is unknown: nothing to draw.
    Blank,
}

impl Art {
    pub fn resolve(category: ConditionCategory, moon_phase: Option<&str>) -> Self {
        match category {
            ConditionCategory::ClearNight => moon_phase
                .and_then(MoonPhase::from_name)
                .map_or(Art::Blank, Art::Moon),
            other => Art::Sky(other),
        }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            Art::Moon(phase) => phase.art(),
            Art::Sky(category) => category_art(*category).unwrap_or(&[]),
            Art::Blank => &[],
        }
    }

    /// The detailed moon drawing is wider and gets a longer rule.
    pub fn is_detailed_moon(&self) -> bool {
        matches!(self, Art::Moon(_))
    }
}
