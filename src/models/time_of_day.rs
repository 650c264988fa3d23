use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Label/template language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

/// Named slice of the day a release hour falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeOfDay {
    EarlyMorning, // 01-05
    Morning,      // 06-11
    Midday,       // 12-13
    Afternoon,    // 14-16
    Dusk,         // 17-18
    Evening,      // 19-22
    LateNight,    // 23, 00
}

const EARLY_MORNING_START: u32 = 1;
const MORNING_START: u32 = 6;
const MIDDAY_START: u32 = 12;
const AFTERNOON_START: u32 = 14;
const DUSK_START: u32 = 17;
const EVENING_START: u32 = 19;
const LATE_NIGHT_START: u32 = 23;

impl TimeOfDay {
    /// Half-open ranges checked in order; anything left over (23, 0 and
    /// out-of-range values) is late night.
    pub fn from_hour(hour: u32) -> Self {
        if (EARLY_MORNING_START..MORNING_START).contains(&hour) {
            TimeOfDay::EarlyMorning
        } else if (MORNING_START..MIDDAY_START).contains(&hour) {
            TimeOfDay::Morning
        } else if (MIDDAY_START..AFTERNOON_START).contains(&hour) {
            TimeOfDay::Midday
        } else if (AFTERNOON_START..DUSK_START).contains(&hour) {
            TimeOfDay::Afternoon
        } else if (DUSK_START..EVENING_START).contains(&hour) {
            TimeOfDay::Dusk
        } else if (EVENING_START..LATE_NIGHT_START).contains(&hour) {
            TimeOfDay::Evening
        } else {
            TimeOfDay::LateNight
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                TimeOfDay::EarlyMorning => "early-morning",
                TimeOfDay::Morning => "morning",
                TimeOfDay::Midday => "midday",
                TimeOfDay::Afternoon => "afternoon",
                TimeOfDay::Dusk => "dusk",
                TimeOfDay::Evening => "evening",
                TimeOfDay::LateNight => "late-night",
            },
            Locale::Zh => match self {
                TimeOfDay::EarlyMorning => "凌晨",
                TimeOfDay::Morning => "早上",
                TimeOfDay::Midday => "中午",
                TimeOfDay::Afternoon => "下午",
                TimeOfDay::Dusk => "傍晚",
                TimeOfDay::Evening => "晚上",
                TimeOfDay::LateNight => "深夜",
            },
        }
    }
}
