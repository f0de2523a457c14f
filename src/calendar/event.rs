use chrono::NaiveDate;

use super::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub category: Category,
    pub description: Option<String>,
}

impl CalendarEvent {
    pub fn date_display(&self) -> String {
        self.date.format("%-d %B").to_string()
    }
}
