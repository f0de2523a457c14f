use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::{CalendarEvent, Category, Store, YearMonth};
use crate::theme;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 6;
const MAX_DOTS: usize = 3;

/// Width of the grid including its border.
pub const GRID_WIDTH: u16 = (CELL_WIDTH * 7) as u16 + 2;

pub struct MonthView;

impl MonthView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        month: YearMonth,
        selected_date: NaiveDate,
        today: NaiveDate,
        store: &Store,
    ) {
        let t = theme::current();

        let block = Block::default()
            .title(format!(" {} ", month.name()))
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(t.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_cells: Vec<Span> = DAY_NAMES
            .iter()
            .map(|d| Span::styled(format!("{:^width$}", d, width = CELL_WIDTH), t.dim))
            .collect();
        let header = Line::from(header_cells);

        let weeks: Vec<Line> = month_grid(month)
            .chunks(7)
            .map(|week| {
                let mut spans = Vec::new();
                for cell in week {
                    match cell {
                        None => spans.push(Span::raw(" ".repeat(CELL_WIDTH))),
                        Some(date) => {
                            let events = store.events_for_date(date);
                            spans.extend(day_cell(*date, &events, selected_date, today));
                        }
                    }
                }
                Line::from(spans)
            })
            .collect();

        let mut constraints = vec![Constraint::Length(1)]; // header
        for _ in &weeks {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));

        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);
        for (i, week) in weeks.into_iter().enumerate() {
            frame.render_widget(Paragraph::new(week), rows[i + 1]);
        }
    }
}

/// Grid cells in Sunday-first order: leading blanks, then days 1..N, padded
/// with blanks to whole weeks.
pub fn month_grid(month: YearMonth) -> Vec<Option<NaiveDate>> {
    let mut cells: Vec<Option<NaiveDate>> = vec![None; month.leading_blanks() as usize];
    cells.extend((1..=month.days_in_month()).map(|day| month.day(day)));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// Categories of the first three events of a day, one dot each.
pub fn dot_categories(events: &[&CalendarEvent]) -> Vec<Category> {
    events.iter().take(MAX_DOTS).map(|ev| ev.category).collect()
}

fn day_cell(
    date: NaiveDate,
    events: &[&CalendarEvent],
    selected_date: NaiveDate,
    today: NaiveDate,
) -> Vec<Span<'static>> {
    let t = theme::current();
    let style = if date == today && date == selected_date {
        t.today_selected()
    } else if date == selected_date {
        t.selected
    } else if date == today {
        t.today
    } else {
        Style::default()
    };

    let day = chrono::Datelike::day(&date);
    let mut spans = vec![Span::styled(format!("{:>3}", day), style)];

    let dots = dot_categories(events);
    for category in &dots {
        spans.push(Span::styled(
            "\u{25cf}",
            Style::default().fg(t.category_color(*category)),
        ));
    }
    spans.push(Span::raw(" ".repeat(CELL_WIDTH - 3 - dots.len())));
    spans
}
