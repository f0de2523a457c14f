use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::{Store, YearMonth};
use crate::components::event_dialog::{EventDialogState, EventDraft, EventField};
use crate::components::schedule_dialog::{ScheduleDialogState, ScheduleDraft, ScheduleField};
use crate::components::schedule_view::{slot_grid, SlotCursor};
use crate::config::{Config, StartView};
use crate::event::Action;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    Calendar,
    Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    EventDialog,
    ScheduleDialog,
}

pub struct App {
    pub running: bool,
    pub view_mode: ViewMode,
    pub month: YearMonth,
    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    pub slot_cursor: SlotCursor,
    pub event_dialog: Option<EventDialogState>,
    pub event_draft: EventDraft,
    pub schedule_dialog: Option<ScheduleDialogState>,
    pub schedule_draft: ScheduleDraft,
    pub show_help: bool,
    pub status_message: Option<String>,
    store: Store,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let today = Local::now().date_naive();
        let store = if config.sample_events {
            Store::with_sample_events(today)
        } else {
            Store::new()
        };
        let view_mode = match config.start_view {
            StartView::Calendar => ViewMode::Calendar,
            StartView::Schedule => ViewMode::Schedule,
        };
        Self::with_store(store, today, view_mode)
    }

    pub fn with_store(store: Store, today: NaiveDate, view_mode: ViewMode) -> Self {
        let mut slot_cursor = SlotCursor::default();
        slot_cursor.jump_to_day(today.weekday().num_days_from_sunday() as u8);

        Self {
            running: true,
            view_mode,
            month: YearMonth::of(today),
            selected_date: today,
            today,
            slot_cursor,
            event_dialog: None,
            event_draft: EventDraft::default(),
            schedule_dialog: None,
            schedule_draft: ScheduleDraft::default(),
            show_help: false,
            status_message: None,
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn input_mode(&self) -> InputMode {
        if self.event_dialog.is_some() {
            InputMode::EventDialog
        } else if self.schedule_dialog.is_some() {
            InputMode::ScheduleDialog
        } else {
            InputMode::Normal
        }
    }

    /// Re-read the wall clock so "today" and "upcoming" stay current.
    pub fn refresh_today(&mut self) {
        self.today = Local::now().date_naive();
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowView(mode) => self.view_mode = mode,
            Action::ToggleView => {
                self.view_mode = match self.view_mode {
                    ViewMode::Calendar => ViewMode::Schedule,
                    ViewMode::Schedule => ViewMode::Calendar,
                }
            }
            Action::Help => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::Today => self.go_to_today(),
            Action::Left => match self.view_mode {
                ViewMode::Calendar => self.move_cursor_days(-1),
                ViewMode::Schedule => self.slot_cursor.left(),
            },
            Action::Right => match self.view_mode {
                ViewMode::Calendar => self.move_cursor_days(1),
                ViewMode::Schedule => self.slot_cursor.right(),
            },
            Action::Up => match self.view_mode {
                ViewMode::Calendar => self.move_cursor_days(-7),
                ViewMode::Schedule => self.slot_cursor.up(),
            },
            Action::Down => match self.view_mode {
                ViewMode::Calendar => self.move_cursor_days(7),
                ViewMode::Schedule => self.slot_cursor.down(),
            },
            Action::PrevMonth => self.prev_month(),
            Action::NextMonth => self.next_month(),
            Action::Select => match self.view_mode {
                ViewMode::Calendar => self.select_day(self.selected_date),
                ViewMode::Schedule => self.select_slot(),
            },
            Action::New => match self.view_mode {
                ViewMode::Calendar => self.select_day(self.selected_date),
                ViewMode::Schedule => self.open_schedule_dialog(),
            },
            Action::FormChar(c) => self.form_input_char(c),
            Action::FormBackspace => self.form_backspace(),
            Action::FormNextField => self.form_tab(false),
            Action::FormPrevField => self.form_tab(true),
            Action::FormCycle(forward) => self.form_cycle(forward),
            Action::FormSubmit => self.submit_form(),
            Action::FormCancel => self.close_form(),
        }
    }

    // ── calendar navigation ──

    fn move_cursor_days(&mut self, days: i64) {
        if let Some(date) = self
            .selected_date
            .checked_add_signed(chrono::Duration::days(days))
        {
            self.selected_date = date;
            if !self.month.contains(date) {
                self.month = YearMonth::of(date);
                log::debug!("calendar moved to {}", self.month.name());
            }
        }
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
        self.selected_date = self.month.clamped_day(self.selected_date.day());
        log::debug!("calendar moved to {}", self.month.name());
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
        self.selected_date = self.month.clamped_day(self.selected_date.day());
        log::debug!("calendar moved to {}", self.month.name());
    }

    pub fn go_to_today(&mut self) {
        self.refresh_today();
        self.selected_date = self.today;
        self.month = YearMonth::of(self.today);
        self.slot_cursor
            .jump_to_day(self.today.weekday().num_days_from_sunday() as u8);
    }

    // ── intents from the views ──

    /// A day in the month grid was picked: open the event dialog for it.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.month = YearMonth::of(date);
        self.schedule_dialog = None;
        self.event_dialog = Some(EventDialogState::new(date));
        log::debug!("event dialog opened for {}", date);
    }

    /// The cursor slot was picked. Only open slots accept a new entry.
    pub fn select_slot(&mut self) {
        let cursor = self.slot_cursor;
        let open = slot_grid(&self.store)
            .get(cursor.slot)
            .and_then(|row| row.get(cursor.column))
            .is_some_and(|cell| cell.is_open());
        if !open {
            return;
        }
        self.schedule_draft.prefill(cursor.day(), &cursor.time());
        self.open_schedule_dialog();
    }

    pub fn open_schedule_dialog(&mut self) {
        self.event_dialog = None;
        self.schedule_dialog = Some(ScheduleDialogState::default());
        log::debug!(
            "schedule dialog opened for day {} at {}",
            self.schedule_draft.day_of_week,
            self.schedule_draft.start_time
        );
    }

    // ── dialogs ──

    fn form_input_char(&mut self, c: char) {
        if let Some(ref dialog) = self.event_dialog {
            let field = dialog.active_field;
            if c == ' ' && field == EventField::Category {
                self.event_draft.cycle(field, true);
            } else {
                self.event_draft.input_char(field, c);
            }
        } else if let Some(ref dialog) = self.schedule_dialog {
            let field = dialog.active_field;
            if c == ' ' && matches!(field, ScheduleField::Day | ScheduleField::Category) {
                self.schedule_draft.cycle(field, true);
            } else {
                self.schedule_draft.input_char(field, c);
            }
        }
    }

    fn form_backspace(&mut self) {
        if let Some(ref dialog) = self.event_dialog {
            self.event_draft.backspace(dialog.active_field);
        } else if let Some(ref dialog) = self.schedule_dialog {
            self.schedule_draft.backspace(dialog.active_field);
        }
    }

    fn form_tab(&mut self, backwards: bool) {
        if let Some(ref mut dialog) = self.event_dialog {
            dialog.active_field = if backwards {
                dialog.active_field.prev()
            } else {
                dialog.active_field.next()
            };
        } else if let Some(ref mut dialog) = self.schedule_dialog {
            dialog.active_field = if backwards {
                dialog.active_field.prev()
            } else {
                dialog.active_field.next()
            };
        }
    }

    fn form_cycle(&mut self, forward: bool) {
        if let Some(ref dialog) = self.event_dialog {
            self.event_draft.cycle(dialog.active_field, forward);
        } else if let Some(ref dialog) = self.schedule_dialog {
            self.schedule_draft.cycle(dialog.active_field, forward);
        }
    }

    fn submit_form(&mut self) {
        match self.input_mode() {
            InputMode::EventDialog => self.submit_event_dialog(),
            InputMode::ScheduleDialog => self.submit_schedule_dialog(),
            InputMode::Normal => {}
        }
    }

    /// Commit the event draft. Does nothing while the title is empty.
    pub fn submit_event_dialog(&mut self) {
        let Some(ref dialog) = self.event_dialog else {
            return;
        };
        if !self.event_draft.can_submit() {
            log::debug!("ignored event submit with empty title");
            return;
        }

        let id = self.store.next_id();
        let event = self.event_draft.to_event(id, dialog.date);
        log::info!(
            "added event {} \"{}\" on {} ({})",
            event.id,
            event.title,
            event.date,
            event.category.label()
        );
        self.status_message = Some(format!("Added \"{}\"", event.title));
        self.store.add_event(event);

        self.event_draft = EventDraft::default();
        self.event_dialog = None;
    }

    /// Commit the schedule draft. Does nothing while the title is empty.
    pub fn submit_schedule_dialog(&mut self) {
        if self.schedule_dialog.is_none() {
            return;
        }
        if !self.schedule_draft.can_submit() {
            log::debug!("ignored schedule submit with empty title");
            return;
        }

        let id = self.store.next_id();
        let entry = self.schedule_draft.to_event(id);
        log::info!(
            "added schedule entry {} \"{}\" day {} {}",
            entry.id,
            entry.title,
            entry.day_of_week,
            entry.time_range_display()
        );
        self.status_message = Some(format!("Added \"{}\"", entry.title));
        self.store.add_schedule_event(entry);

        self.schedule_draft = ScheduleDraft::default();
        self.schedule_dialog = None;
    }

    /// Close whichever dialog is open. The draft is kept for next time.
    pub fn close_form(&mut self) {
        if self.event_dialog.take().is_some() || self.schedule_dialog.take().is_some() {
            log::debug!("dialog closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::schedule::DISPLAY_DAYS;
    use crate::calendar::{Category, SlotCell};
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn app_on(today: NaiveDate) -> App {
        App::with_store(Store::new(), today, ViewMode::Calendar)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.apply(Action::FormChar(c));
        }
    }

    #[test]
    fn month_navigation_rolls_over_years() {
        let mut app = app_on(d(2025, 12, 31));
        app.apply(Action::NextMonth);
        assert_eq!(app.month, YearMonth::new(2026, 1).unwrap());
        assert_eq!(app.selected_date, d(2026, 1, 31));

        app.apply(Action::PrevMonth);
        app.apply(Action::PrevMonth);
        assert_eq!(app.month, YearMonth::new(2025, 11).unwrap());
        assert_eq!(app.selected_date, d(2025, 11, 30));

        let mut january = app_on(d(2025, 1, 10));
        january.apply(Action::PrevMonth);
        assert_eq!(january.month, YearMonth::new(2024, 12).unwrap());
    }

    #[test]
    fn cursor_crossing_month_moves_reference_month() {
        let mut app = app_on(d(2026, 10, 31));
        app.apply(Action::Right);
        assert_eq!(app.selected_date, d(2026, 11, 1));
        assert_eq!(app.month, YearMonth::new(2026, 11).unwrap());
        app.apply(Action::Up);
        assert_eq!(app.selected_date, d(2026, 10, 25));
        assert_eq!(app.month, YearMonth::new(2026, 10).unwrap());
    }

    #[test]
    fn empty_title_submit_is_a_no_op() {
        let mut app = app_on(d(2026, 10, 18));
        app.apply(Action::Select);
        assert_eq!(app.input_mode(), InputMode::EventDialog);

        app.apply(Action::FormSubmit);
        assert_eq!(app.store().events().len(), 0);
        assert_eq!(app.input_mode(), InputMode::EventDialog);
    }

    #[test]
    fn adding_an_event_from_a_day() {
        let today = d(2026, 10, 10);
        let mut app = app_on(today);
        let day = app.month.day(15).unwrap();

        app.select_day(day);
        assert_eq!(app.event_dialog.as_ref().map(|s| s.date), Some(day));

        type_text(&mut app, "Dentist");
        app.apply(Action::FormNextField);
        // Personal is the default category.
        assert_eq!(app.event_draft.category, Category::Personal);
        app.apply(Action::FormSubmit);

        assert_eq!(app.store().events().len(), 1);
        assert_eq!(app.store().events_for_date(&day).len(), 1);
        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.event_draft, EventDraft::default());

        let upcoming: Vec<&str> = app
            .store()
            .upcoming_events(app.today)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(upcoming, vec!["Dentist"]);
    }

    #[test]
    fn cancel_keeps_the_draft() {
        let mut app = app_on(d(2026, 10, 18));
        app.apply(Action::New);
        type_text(&mut app, "Call");
        app.apply(Action::FormCancel);
        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.event_draft.title, "Call");
        assert!(app.store().events().is_empty());
    }

    #[test]
    fn space_cycles_selects_and_types_in_text() {
        let mut app = app_on(d(2026, 10, 18));
        app.apply(Action::New);
        type_text(&mut app, "a b");
        app.apply(Action::FormNextField);
        app.apply(Action::FormChar(' '));
        assert_eq!(app.event_draft.title, "a b");
        assert_eq!(app.event_draft.category, Category::Important);
        app.apply(Action::FormCycle(false));
        app.apply(Action::FormCycle(false));
        assert_eq!(app.event_draft.category, Category::Work);
    }

    #[test]
    fn adding_a_schedule_entry_from_a_slot() {
        let mut app = App::with_store(Store::new(), d(2026, 10, 18), ViewMode::Schedule);
        // Wednesday, 09:00.
        app.slot_cursor.jump_to_day(3);
        app.slot_cursor.slot = 2;

        app.apply(Action::Select);
        assert_eq!(app.input_mode(), InputMode::ScheduleDialog);
        assert_eq!(app.schedule_draft.day_of_week, 3);
        assert_eq!(app.schedule_draft.start_time, "09:00");

        type_text(&mut app, "Gym");
        for _ in 0..3 {
            app.apply(Action::FormNextField);
        }
        app.apply(Action::FormBackspace);
        app.apply(Action::FormBackspace);
        type_text(&mut app, "00");
        assert_eq!(app.schedule_draft.end_time, "10:00");
        app.apply(Action::FormSubmit);

        assert_eq!(app.store().schedule_events().len(), 1);
        let grid = slot_grid(app.store());
        let wednesday = DISPLAY_DAYS.iter().position(|d| *d == 3).unwrap();
        match &grid[2][wednesday] {
            SlotCell::Starts(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].title, "Gym");
                assert_eq!(
                    crate::calendar::schedule::block_height(entries[0], 1),
                    1
                );
            }
            other => panic!("expected a block at 09:00, got {other:?}"),
        }
        assert!(grid[1][wednesday].is_open());

        // 09:00 no longer accepts a new entry; 08:00 still does.
        app.apply(Action::Select);
        assert_eq!(app.input_mode(), InputMode::Normal);
        app.apply(Action::Up);
        app.apply(Action::Select);
        assert_eq!(app.input_mode(), InputMode::ScheduleDialog);
        assert_eq!(app.schedule_draft.start_time, "08:00");
    }

    #[test]
    fn add_entry_button_uses_current_draft() {
        let mut app = App::with_store(Store::new(), d(2026, 10, 18), ViewMode::Schedule);
        app.apply(Action::New);
        assert_eq!(app.input_mode(), InputMode::ScheduleDialog);
        assert_eq!(app.schedule_draft, ScheduleDraft::default());
        app.apply(Action::FormSubmit);
        assert!(app.store().schedule_events().is_empty());
    }

    #[test]
    fn schedule_cursor_starts_on_todays_column() {
        // 18 October 2026 is a Sunday, the last display column.
        let app = App::with_store(Store::new(), d(2026, 10, 18), ViewMode::Schedule);
        assert_eq!(app.slot_cursor.day(), 0);
        assert_eq!(app.slot_cursor.column, 6);
    }

    #[test]
    fn toggling_views() {
        let mut app = app_on(d(2026, 10, 18));
        app.apply(Action::ToggleView);
        assert_eq!(app.view_mode, ViewMode::Schedule);
        app.apply(Action::ShowView(ViewMode::Calendar));
        assert_eq!(app.view_mode, ViewMode::Calendar);
        app.apply(Action::Quit);
        assert!(!app.running);
    }
}
