//! Arabic weekday names.

use chrono::{Datelike, NaiveDate};

/// Weekday names indexed Sunday-first, matching `num_days_from_sunday`.
pub const ARABIC_DAYS: [&str; 7] = [
    "ﺍﻻﺣﺪ",
    "ﺍﻻﺛﻨﻴﻦ",
    "ﺍﻟﺜﻼﺛﺎﺀ",
    "ﺍﻻﺭﺑﻌﺎﺀ",
    "ﺍﻟﺨﻤﻴﺲ",
    "ﺍﻟﺠﻤﻌﺔ",
    "ﺍﻟﺴﺒﺖ",
];

/// Returns the day name for a weekday index (0 = Sunday).
///
/// Indices past Saturday wrap around the week.
pub fn day_name(weekday_index: u32) -> &'static str {
    ARABIC_DAYS[(weekday_index % 7) as usize]
}

/// Returns the day name of a calendar date.
pub fn day_name_for(date: NaiveDate) -> &'static str {
    day_name(date.weekday().num_days_from_sunday())
}
