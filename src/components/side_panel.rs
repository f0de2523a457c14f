use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::calendar::{Category, Store};
use crate::theme;

/// Upcoming events above the per-category counts.
pub struct SidePanel;

impl SidePanel {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, today: NaiveDate) {
        let categories_h = Category::ALL.len() as u16 + 2;
        let parts = Layout::vertical([Constraint::Min(3), Constraint::Length(categories_h)])
            .split(area);

        UpcomingList::render(frame, parts[0], store, today);
        CategoryPanel::render(frame, parts[1], store);
    }
}

pub struct UpcomingList;

impl UpcomingList {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, today: NaiveDate) {
        let t = theme::current();
        let upcoming = store.upcoming_events(today);

        let block = Block::default()
            .title(" Upcoming ")
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(t.border);

        if upcoming.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No upcoming events").style(t.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;
        let mut items: Vec<ListItem> = Vec::new();

        for (i, ev) in upcoming.iter().enumerate() {
            if i > 0 {
                items.push(ListItem::new(Line::from("")));
            }

            let bar = Span::styled("\u{2503} ", Style::default().fg(t.category_color(ev.category)));
            let mut lines = vec![
                Line::from(vec![
                    bar.clone(),
                    Span::styled(
                        truncate(&ev.title, inner_w.saturating_sub(2)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![bar.clone(), Span::styled(ev.date_display(), t.dim)]),
            ];
            if let Some(ref description) = ev.description {
                lines.push(Line::from(vec![
                    bar,
                    Span::styled(truncate(description, inner_w.saturating_sub(2)), t.dim),
                ]));
            }
            items.push(ListItem::new(lines));
        }

        frame.render_widget(List::new(items).block(block), area);
    }
}

pub struct CategoryPanel;

impl CategoryPanel {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let t = theme::current();
        let inner_w = area.width.saturating_sub(2) as usize;

        let block = Block::default()
            .title(" Categories ")
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(t.border);

        let items: Vec<ListItem> = Category::ALL
            .iter()
            .map(|category| {
                let count = store.category_count(*category).to_string();
                let label_w = inner_w.saturating_sub(count.len() + 3);
                ListItem::new(Line::from(vec![
                    Span::styled("\u{25cf} ", Style::default().fg(t.category_color(*category))),
                    Span::raw(format!("{:<width$}", category.label(), width = label_w)),
                    Span::styled(count, t.highlight),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn screen(store: &Store, today: NaiveDate) -> String {
        let mut terminal = Terminal::new(TestBackend::new(32, 30)).unwrap();
        terminal
            .draw(|frame| SidePanel::render(frame, frame.area(), store, today))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn empty_store_says_nothing_upcoming() {
        let text = screen(&Store::new(), d(18));
        assert!(text.contains("No upcoming events"));
        for category in Category::ALL {
            assert!(text.contains(category.label()));
        }
    }

    #[test]
    fn lists_title_date_and_description() {
        let mut store = Store::new();
        store.add_event(CalendarEvent {
            id: "1".to_string(),
            title: "Dentist".to_string(),
            date: d(20),
            category: Category::Personal,
            description: Some("Bring forms".to_string()),
        });
        store.add_event(CalendarEvent {
            id: "2".to_string(),
            title: "Old news".to_string(),
            date: d(2),
            category: Category::Work,
            description: None,
        });

        let text = screen(&store, d(18));
        assert!(text.contains("Dentist"));
        assert!(text.contains("20 October"));
        assert!(text.contains("Bring forms"));
        assert!(!text.contains("Old news"));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("crème brûlée", 12), "crème brûlée");
        assert_eq!(truncate("abcdefgh", 6), "abc...");
        assert_eq!(truncate("abcdefgh", 2), "ab");
    }
}
