use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use super::form;
use crate::calendar::schedule::{day_name, hour_after};
use crate::calendar::{Category, ScheduleEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduleField {
    Title,
    Day,
    StartTime,
    EndTime,
    Category,
    Description,
}

impl ScheduleField {
    pub fn next(&self) -> Self {
        match self {
            ScheduleField::Title => ScheduleField::Day,
            ScheduleField::Day => ScheduleField::StartTime,
            ScheduleField::StartTime => ScheduleField::EndTime,
            ScheduleField::EndTime => ScheduleField::Category,
            ScheduleField::Category => ScheduleField::Description,
            ScheduleField::Description => ScheduleField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ScheduleField::Title => ScheduleField::Description,
            ScheduleField::Day => ScheduleField::Title,
            ScheduleField::StartTime => ScheduleField::Day,
            ScheduleField::EndTime => ScheduleField::StartTime,
            ScheduleField::Category => ScheduleField::EndTime,
            ScheduleField::Description => ScheduleField::Category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    pub title: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub category: Category,
    pub description: String,
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            day_of_week: 1,
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            category: Category::Work,
            description: String::new(),
        }
    }
}

impl ScheduleDraft {
    /// Point the draft at a grid slot. The end time follows one hour later.
    pub fn prefill(&mut self, day: u8, time: &str) {
        self.day_of_week = day;
        self.start_time = time.to_string();
        self.end_time = hour_after(time);
    }

    pub fn can_submit(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn input_char(&mut self, field: ScheduleField, c: char) {
        match field {
            ScheduleField::Title => self.title.push(c),
            ScheduleField::StartTime => self.start_time.push(c),
            ScheduleField::EndTime => self.end_time.push(c),
            ScheduleField::Description => self.description.push(c),
            ScheduleField::Day | ScheduleField::Category => {}
        }
    }

    pub fn backspace(&mut self, field: ScheduleField) {
        match field {
            ScheduleField::Title => {
                self.title.pop();
            }
            ScheduleField::StartTime => {
                self.start_time.pop();
            }
            ScheduleField::EndTime => {
                self.end_time.pop();
            }
            ScheduleField::Description => {
                self.description.pop();
            }
            ScheduleField::Day | ScheduleField::Category => {}
        }
    }

    pub fn cycle(&mut self, field: ScheduleField, forward: bool) {
        match field {
            ScheduleField::Day => {
                self.day_of_week = if forward {
                    (self.day_of_week + 1) % 7
                } else {
                    (self.day_of_week + 6) % 7
                };
            }
            ScheduleField::Category => {
                self.category = if forward { self.category.next() } else { self.category.prev() };
            }
            _ => {}
        }
    }

    pub fn to_event(&self, id: String) -> ScheduleEvent {
        ScheduleEvent {
            id,
            title: self.title.clone(),
            day_of_week: self.day_of_week,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            category: self.category,
            description: (!self.description.is_empty()).then(|| self.description.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDialogState {
    pub active_field: ScheduleField,
}

impl Default for ScheduleDialogState {
    fn default() -> Self {
        Self {
            active_field: ScheduleField::Title,
        }
    }
}

pub struct ScheduleDialog;

impl ScheduleDialog {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &ScheduleDialogState,
        draft: &ScheduleDraft,
    ) {
        let inner = form::open_popup(frame, area, "New Schedule Entry", 52, 11);

        let rows = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // day
            Constraint::Length(1), // start
            Constraint::Length(1), // end
            Constraint::Length(1), // category
            Constraint::Length(1), // description
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        let active = state.active_field;
        form::render_field(frame, rows[0], "Title", &draft.title, active == ScheduleField::Title);
        form::render_select(
            frame,
            rows[1],
            "Day",
            day_name(draft.day_of_week),
            active == ScheduleField::Day,
        );
        form::render_field(
            frame,
            rows[2],
            "Start",
            &draft.start_time,
            active == ScheduleField::StartTime,
        );
        form::render_field(
            frame,
            rows[3],
            "End",
            &draft.end_time,
            active == ScheduleField::EndTime,
        );
        form::render_category(frame, rows[4], draft.category, active == ScheduleField::Category);
        form::render_field(
            frame,
            rows[5],
            "Notes",
            &draft.description,
            active == ScheduleField::Description,
        );
        form::render_actions(frame, rows[7], draft.can_submit());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefill_sets_day_start_and_following_hour() {
        let mut draft = ScheduleDraft::default();
        draft.prefill(3, "09:00");
        assert_eq!(draft.day_of_week, 3);
        assert_eq!(draft.start_time, "09:00");
        assert_eq!(draft.end_time, "10:00");
    }

    #[test]
    fn day_select_wraps_through_week() {
        let mut draft = ScheduleDraft {
            day_of_week: 6,
            ..Default::default()
        };
        draft.cycle(ScheduleField::Day, true);
        assert_eq!(draft.day_of_week, 0);
        draft.cycle(ScheduleField::Day, false);
        assert_eq!(draft.day_of_week, 6);
    }

    #[test]
    fn time_fields_accept_anything() {
        let mut draft = ScheduleDraft::default();
        draft.backspace(ScheduleField::EndTime);
        draft.backspace(ScheduleField::EndTime);
        draft.input_char(ScheduleField::EndTime, 'x');
        assert_eq!(draft.end_time, "10:x");
        draft.input_char(ScheduleField::Title, 'G');
        assert!(draft.can_submit());

        let entry = draft.to_event("7".to_string());
        assert_eq!(entry.end_time, "10:x");
        assert_eq!(entry.start_time, "09:00");
    }

    #[test]
    fn empty_title_cannot_submit() {
        assert!(!ScheduleDraft::default().can_submit());
    }
}
