use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode, ViewMode};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let style = theme::current().status;

        let mode_str = match app.view_mode {
            ViewMode::Calendar => "[1]Calendar",
            ViewMode::Schedule => "[2]Schedule",
        };

        let focus_indicator = match app.input_mode() {
            InputMode::EventDialog => " [New Event]".to_string(),
            InputMode::ScheduleDialog => " [New Entry]".to_string(),
            InputMode::Normal if app.view_mode == ViewMode::Schedule => {
                let cursor = app.slot_cursor;
                format!(
                    " {} {}",
                    crate::calendar::schedule::short_day_name(cursor.day()),
                    cursor.time()
                )
            }
            InputMode::Normal => format!(" {}", app.selected_date.format("%a %-d %b")),
        };

        // Show status message if present, otherwise show context-aware hints
        let right_text = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else {
            hints(app.view_mode, w).to_string()
        };

        let left = format!(" {}{} ", mode_str, focus_indicator);
        let padding_len = w.saturating_sub(left.chars().count() + right_text.chars().count());
        let padding = " ".repeat(padding_len);

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right_text, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

fn hints(view: ViewMode, w: usize) -> &'static str {
    match view {
        ViewMode::Calendar if w >= 90 => {
            " hjkl:Nav [/]:Month t:Today Enter:Add event Tab:Schedule ?:Help q:Quit "
        }
        ViewMode::Calendar if w >= 50 => " [/]:Month Enter:Add ?:Help q:Quit ",
        ViewMode::Schedule if w >= 90 => {
            " hjkl:Nav Enter:Add at slot n:Add entry Tab:Calendar ?:Help q:Quit "
        }
        ViewMode::Schedule if w >= 50 => " Enter:Add n:New ?:Help q:Quit ",
        _ => " ?:Help q:Quit ",
    }
}
