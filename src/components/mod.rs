pub mod event_dialog;
pub mod form;
pub mod help;
pub mod month_view;
pub mod schedule_dialog;
pub mod schedule_view;
pub mod side_panel;
pub mod status_bar;

pub use event_dialog::EventDialog;
pub use help::Help;
pub use month_view::MonthView;
pub use schedule_dialog::ScheduleDialog;
pub use schedule_view::ScheduleView;
pub use side_panel::SidePanel;
pub use status_bar::StatusBar;
