use chrono::{Datelike, NaiveDate, Utc};

use super::category::Category;
use super::event::CalendarEvent;
use super::schedule::ScheduleEvent;

pub const UPCOMING_LIMIT: usize = 5;

/// In-memory home of every calendar event and schedule entry. Lives as long
/// as the app; nothing is written to disk.
#[derive(Debug, Default)]
pub struct Store {
    events: Vec<CalendarEvent>,
    schedule: Vec<ScheduleEvent>,
    last_id: i64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo events shown on first launch, placed in the
    /// month of `today`.
    pub fn with_sample_events(today: NaiveDate) -> Self {
        let mut store = Self::new();
        let samples = [
            ("Team meeting", 15, Category::Work, Some("Discuss new projects")),
            ("Mom's birthday", 20, Category::Important, Some("Remember to buy a gift")),
            ("Movie night", 18, Category::Leisure, None),
        ];

        for (title, day, category, description) in samples {
            let Some(date) = today.with_day(day) else {
                continue;
            };
            let id = store.next_id();
            store.add_event(CalendarEvent {
                id,
                title: title.to_string(),
                date,
                category,
                description: description.map(str::to_string),
            });
        }

        store
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn schedule_events(&self) -> &[ScheduleEvent] {
        &self.schedule
    }

    pub fn add_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn add_schedule_event(&mut self, event: ScheduleEvent) {
        self.schedule.push(event);
    }

    /// Events on the same calendar day as `date`; any time-of-day part of
    /// `date` is ignored.
    pub fn events_for_date<D: Datelike>(&self, date: &D) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|ev| {
                ev.date.year() == date.year()
                    && ev.date.month() == date.month()
                    && ev.date.day() == date.day()
            })
            .collect()
    }

    /// Up to five events dated `today` or later, earliest first. Events on
    /// the same day keep their insertion order.
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<&CalendarEvent> {
        let mut upcoming: Vec<&CalendarEvent> =
            self.events.iter().filter(|ev| ev.date >= today).collect();
        upcoming.sort_by_key(|ev| ev.date);
        upcoming.truncate(UPCOMING_LIMIT);
        upcoming
    }

    pub fn schedule_events_for_slot(&self, day: u8, time: &str) -> Vec<&ScheduleEvent> {
        self.schedule
            .iter()
            .filter(|ev| ev.covers(day, time))
            .collect()
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.events.iter().filter(|ev| ev.category == category).count()
    }

    /// Millisecond timestamp id, bumped past the previous one when two are
    /// handed out within the same millisecond.
    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }
}
