//! Maps WeatherAPI.com condition codes to the sky categories used for art and color.

/// The six art buckets a condition can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Thunder,
    ClearNight,
}

/// Condition code for "Sunny" by day and "Clear" by night.
pub const CLEAR: i32 = 1000;

pub const CLOUDY_CODES: [i32; 6] = [1003, 1006, 1009, 1030, 1135, 1147];

pub const THUNDER_CODES: [i32; 4] = [1273, 1276, 1279, 1282];

pub const SNOWY_CODES: [i32; 11] = [
    1210, 1213, 1216, 1219, 1222, 1225, 1237, 1255, 1258, 1261, 1264,
];

impl ConditionCategory {
    /// Classify a condition code. Anything not listed lands in `Rainy`,
    /// which covers drizzle, rain and sleet.
    pub fn classify(code: i32, is_daytime: bool) -> Self {
        match code {
            CLEAR if is_daytime => ConditionCategory::Sunny,
            CLEAR => ConditionCategory::ClearNight,
            c if CLOUDY_CODES.contains(&c) => ConditionCategory::Cloudy,
            c if THUNDER_CODES.contains(&c) => ConditionCategory::Thunder,
            c if SNOWY_CODES.contains(&c) => ConditionCategory::Snowy,
            _ => ConditionCategory::Rainy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_depends_on_daylight() {
        assert_eq!(ConditionCategory::classify(1000, true), ConditionCategory::Sunny);
        assert_eq!(ConditionCategory::classify(1000, false), ConditionCategory::ClearNight);
    }

    #[test]
    fn listed_codes_map_to_their_category() {
        for code in CLOUDY_CODES {
            assert_eq!(ConditionCategory::classify(code, true), ConditionCategory::Cloudy);
        }
        for code in THUNDER_CODES {
            assert_eq!(ConditionCategory::classify(code, true), ConditionCategory::Thunder);
        }
        for code in SNOWY_CODES {
            assert_eq!(ConditionCategory::classify(code, true), ConditionCategory::Snowy);
        }
    }

    #[test]
    fn unlisted_codes_are_rainy() {
        // Patchy snow, blizzard and thundery outbreaks are not in any list.
        for code in [1063, 1066, 1087, 1117, 1183, 1204, 1246, 0, -1, i32::MAX] {
            assert_eq!(ConditionCategory::classify(code, true), ConditionCategory::Rainy, "{code}");
        }
    }

    #[test]
    fn only_clear_is_sensitive_to_daylight() {
        for code in (900..1400).filter(|&c| c != CLEAR) {
            assert_eq!(
                ConditionCategory::classify(code, true),
                ConditionCategory::classify(code, false),
                "{code}"
            );
        }
    }
}
