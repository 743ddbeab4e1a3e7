use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Service window a customer can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Asap,
    WithinOneHour,
    WithinTwoHours,
    TomorrowMorning,
    TomorrowAfternoon,
    ThisWeekend,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Asap,
        TimeSlot::WithinOneHour,
        TimeSlot::WithinTwoHours,
        TimeSlot::TomorrowMorning,
        TimeSlot::TomorrowAfternoon,
        TimeSlot::ThisWeekend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::WithinOneHour => "within_one_hour",
            Self::WithinTwoHours => "within_two_hours",
            Self::TomorrowMorning => "tomorrow_morning",
            Self::TomorrowAfternoon => "tomorrow_afternoon",
            Self::ThisWeekend => "this_weekend",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Asap => "ASAP (within 30 min)",
            Self::WithinOneHour => "Within 1 hour",
            Self::WithinTwoHours => "Within 2 hours",
            Self::TomorrowMorning => "Tomorrow morning",
            Self::TomorrowAfternoon => "Tomorrow afternoon",
            Self::ThisWeekend => "This weekend",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        TimeSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == normalized)
            .ok_or_else(|| format!("Unknown time slot '{}'", s))
    }
}
