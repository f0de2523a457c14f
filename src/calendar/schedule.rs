use chrono::NaiveTime;

use super::Category;

/// Weekday indices (0 = Sunday) in the order the weekly grid shows them.
pub const DISPLAY_DAYS: [u8; 7] = [1, 2, 3, 4, 5, 6, 0];

pub const FIRST_SLOT_HOUR: u32 = 7;
pub const SLOT_COUNT: usize = 15;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A weekly recurring entry. Times are kept as the `HH:MM` text the user
/// typed; nothing checks that they parse or that start precedes end.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub category: Category,
    pub description: Option<String>,
}

impl ScheduleEvent {
    /// Half-open containment: `start_time <= time < end_time`.
    pub fn covers(&self, day: u8, time: &str) -> bool {
        self.day_of_week == day && self.start_time.as_str() <= time && time < self.end_time.as_str()
    }

    pub fn duration_minutes(&self) -> Option<i64> {
        let start = parse_time(&self.start_time)?;
        let end = parse_time(&self.end_time)?;
        let minutes = (end - start).num_minutes();
        (minutes > 0).then_some(minutes)
    }

    pub fn time_range_display(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES.get(day as usize).copied().unwrap_or("Unknown")
}

pub fn short_day_name(day: u8) -> &'static str {
    &day_name(day)[..3]
}

/// The `HH:00` labels of the grid rows, 07:00 through 21:00.
pub fn slot_labels() -> Vec<String> {
    (0..SLOT_COUNT)
        .map(|i| format!("{:02}:00", FIRST_SLOT_HOUR as usize + i))
        .collect()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// One hour after `time`, for prefilling the end of a new entry. Falls back
/// to the input when it does not parse or would wrap past midnight.
pub fn hour_after(time: &str) -> String {
    match parse_time(time) {
        Some(t) => {
            let (next, wrapped) = t.overflowing_add_signed(chrono::Duration::hours(1));
            if wrapped != 0 {
                time.to_string()
            } else {
                next.format("%H:%M").to_string()
            }
        }
        None => time.to_string(),
    }
}

/// How a single (day, slot) cell of the weekly grid is drawn.
#[derive(Debug, PartialEq)]
pub enum SlotCell<'a> {
    /// Nothing covers the slot; it accepts a new entry.
    Open,
    /// Entries whose start time is exactly this slot. Drawn as blocks here.
    Starts(Vec<&'a ScheduleEvent>),
    /// Covered by an entry anchored elsewhere. Draws nothing.
    Covered,
}

impl<'a> SlotCell<'a> {
    pub fn classify(covering: Vec<&'a ScheduleEvent>, time: &str) -> Self {
        if covering.is_empty() {
            return SlotCell::Open;
        }
        let starts: Vec<&ScheduleEvent> = covering
            .into_iter()
            .filter(|ev| ev.start_time == time)
            .collect();
        if starts.is_empty() {
            SlotCell::Covered
        } else {
            SlotCell::Starts(starts)
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SlotCell::Open)
    }
}

/// Terminal lines a block occupies when each hour row is `rows_per_hour`
/// lines tall. Never less than one line.
pub fn block_height(event: &ScheduleEvent, rows_per_hour: u16) -> u16 {
    match event.duration_minutes() {
        Some(minutes) => {
            let lines = (minutes * rows_per_hour as i64 + 59) / 60;
            lines.clamp(1, u16::MAX as i64) as u16
        }
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn entry(day: u8, start: &str, end: &str) -> ScheduleEvent {
        ScheduleEvent {
            id: "1".to_string(),
            title: "Lecture".to_string(),
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            category: Category::Work,
            description: None,
        }
    }

    #[test_case("09:59", false ; "before start")]
    #[test_case("10:00", true ; "at start")]
    #[test_case("10:30", true ; "inside")]
    #[test_case("11:00", true ; "last whole hour")]
    #[test_case("11:30", false ; "at end")]
    fn covers_is_half_open(time: &str, expected: bool) {
        let ev = entry(1, "10:00", "11:30");
        assert_eq!(ev.covers(1, time), expected);
    }

    #[test]
    fn covers_requires_matching_day() {
        let ev = entry(1, "10:00", "11:30");
        assert!(!ev.covers(2, "10:00"));
    }

    #[test]
    fn reversed_range_covers_nothing() {
        let ev = entry(3, "12:00", "09:00");
        for label in slot_labels() {
            assert!(!ev.covers(3, &label));
        }
    }

    #[test]
    fn slot_labels_span_seven_to_twenty_one() {
        let labels = slot_labels();
        assert_eq!(labels.len(), 15);
        assert_eq!(labels.first().map(String::as_str), Some("07:00"));
        assert_eq!(labels.last().map(String::as_str), Some("21:00"));
    }

    #[test]
    fn display_order_ends_on_sunday() {
        let names: Vec<&str> = DISPLAY_DAYS.iter().map(|d| short_day_name(*d)).collect();
        assert_eq!(names, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn duration_ignores_bad_input() {
        assert_eq!(entry(1, "10:00", "11:30").duration_minutes(), Some(90));
        assert_eq!(entry(1, "10:00", "10:00").duration_minutes(), None);
        assert_eq!(entry(1, "ten", "11:00").duration_minutes(), None);
    }

    #[test_case("10:00", "11:00", 1, 1)]
    #[test_case("10:00", "11:30", 1, 2)]
    #[test_case("10:00", "11:30", 2, 3)]
    #[test_case("10:00", "10:15", 3, 1)]
    #[test_case("10:00", "09:00", 2, 1)]
    fn block_height_scales_with_duration(start: &str, end: &str, rows_per_hour: u16, lines: u16) {
        assert_eq!(block_height(&entry(1, start, end), rows_per_hour), lines);
    }

    #[test]
    fn classify_distinguishes_anchor_from_continuation() {
        let ev = entry(1, "10:00", "12:00");
        assert_eq!(SlotCell::classify(vec![], "09:00"), SlotCell::Open);
        assert_eq!(SlotCell::classify(vec![&ev], "10:00"), SlotCell::Starts(vec![&ev]));
        assert_eq!(SlotCell::classify(vec![&ev], "11:00"), SlotCell::Covered);
    }

    #[test]
    fn classify_keeps_only_entries_anchored_here() {
        let long = entry(1, "09:00", "12:00");
        let short = entry(1, "10:00", "11:00");
        assert_eq!(
            SlotCell::classify(vec![&long, &short], "10:00"),
            SlotCell::Starts(vec![&short])
        );
    }

    #[test]
    fn hour_after_prefills_end_time() {
        assert_eq!(hour_after("09:00"), "10:00");
        assert_eq!(hour_after("23:30"), "23:30");
        assert_eq!(hour_after("soon"), "soon");
    }
}
