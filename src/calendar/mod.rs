pub mod category;
pub mod event;
pub mod month;
pub mod schedule;
pub mod store;

pub use category::Category;
pub use event::CalendarEvent;
pub use month::YearMonth;
pub use schedule::{ScheduleEvent, SlotCell};
pub use store::Store;
