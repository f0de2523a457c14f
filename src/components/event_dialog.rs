use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::form;
use crate::calendar::{CalendarEvent, Category};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventField {
    Title,
    Category,
    Description,
}

impl EventField {
    pub fn next(&self) -> Self {
        match self {
            EventField::Title => EventField::Category,
            EventField::Category => EventField::Description,
            EventField::Description => EventField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            EventField::Title => EventField::Description,
            EventField::Category => EventField::Title,
            EventField::Description => EventField::Category,
        }
    }
}

/// The in-progress event, kept by the app between dialog openings.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub category: Category,
    pub description: String,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: Category::Personal,
            description: String::new(),
        }
    }
}

impl EventDraft {
    pub fn can_submit(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn input_char(&mut self, field: EventField, c: char) {
        match field {
            EventField::Title => self.title.push(c),
            EventField::Description => self.description.push(c),
            EventField::Category => {}
        }
    }

    pub fn backspace(&mut self, field: EventField) {
        match field {
            EventField::Title => {
                self.title.pop();
            }
            EventField::Description => {
                self.description.pop();
            }
            EventField::Category => {}
        }
    }

    pub fn cycle(&mut self, field: EventField, forward: bool) {
        if field == EventField::Category {
            self.category = if forward { self.category.next() } else { self.category.prev() };
        }
    }

    pub fn to_event(&self, id: String, date: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title.clone(),
            date,
            category: self.category,
            description: (!self.description.is_empty()).then(|| self.description.clone()),
        }
    }
}

/// Which date the open dialog adds to, and where the focus is.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDialogState {
    pub date: NaiveDate,
    pub active_field: EventField,
}

impl EventDialogState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            active_field: EventField::Title,
        }
    }
}

pub struct EventDialog;

impl EventDialog {
    pub fn render(frame: &mut Frame, area: Rect, state: &EventDialogState, draft: &EventDraft) {
        let inner = form::open_popup(frame, area, "New Event", 52, 10);

        let rows = Layout::vertical([
            Constraint::Length(1), // date
            Constraint::Length(1), // spacer
            Constraint::Length(1), // title
            Constraint::Length(1), // category
            Constraint::Length(1), // description
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        let date = Line::from(Span::styled(
            state.date.format("%-d %B %Y").to_string(),
            theme::current().dim,
        ));
        frame.render_widget(Paragraph::new(date), rows[0]);

        let active = state.active_field;
        form::render_field(frame, rows[2], "Title", &draft.title, active == EventField::Title);
        form::render_category(frame, rows[3], draft.category, active == EventField::Category);
        form::render_field(
            frame,
            rows[4],
            "Notes",
            &draft.description,
            active == EventField::Description,
        );
        form::render_actions(frame, rows[6], draft.can_submit());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_title_cannot_submit() {
        let mut draft = EventDraft::default();
        assert!(!draft.can_submit());
        draft.input_char(EventField::Title, 'x');
        assert!(draft.can_submit());
        draft.backspace(EventField::Title);
        assert!(!draft.can_submit());
    }

    #[test]
    fn typing_goes_to_active_text_field_only() {
        let mut draft = EventDraft::default();
        draft.input_char(EventField::Category, 'z');
        draft.input_char(EventField::Description, 'a');
        assert_eq!(draft.title, "");
        assert_eq!(draft.description, "a");
        assert_eq!(draft.category, Category::Personal);
    }

    #[test]
    fn cycling_changes_category_only_on_category_field() {
        let mut draft = EventDraft::default();
        draft.cycle(EventField::Title, true);
        assert_eq!(draft.category, Category::Personal);
        draft.cycle(EventField::Category, true);
        assert_eq!(draft.category, Category::Important);
        draft.cycle(EventField::Category, false);
        draft.cycle(EventField::Category, false);
        assert_eq!(draft.category, Category::Work);
    }

    #[test]
    fn blank_description_becomes_none() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let draft = EventDraft {
            title: "Dentist".to_string(),
            ..Default::default()
        };
        let event = draft.to_event("1".to_string(), date);
        assert_eq!(event.description, None);
        assert_eq!(event.date, date);
        assert_eq!(event.category, Category::Personal);
    }

    #[test]
    fn field_order_wraps() {
        assert_eq!(EventField::Description.next(), EventField::Title);
        assert_eq!(EventField::Title.prev(), EventField::Description);
    }
}
