use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::calendar::Category;
use crate::theme;

const LABEL_WIDTH: usize = 8;

/// Clear a centered popup of at most `max_w` × `max_h` and draw its frame.
/// Returns the inner area.
pub fn open_popup(frame: &mut Frame, area: Rect, title: &str, max_w: u16, max_h: u16) -> Rect {
    let popup_w = area.width.min(max_w).max(30.min(area.width));
    let popup_h = area.height.min(max_h);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let t = theme::current();
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(t.dialog)
        .borders(Borders::ALL)
        .border_style(t.dialog.remove_modifier(Modifier::BOLD));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    inner
}

pub fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let cursor = if active { "_" } else { "" };

    let style = if active {
        Style::default().fg(ratatui::style::Color::Cyan)
    } else {
        Style::default()
    };

    let spans = vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), theme::current().dim),
        Span::styled(format!("{}{}", value, cursor), style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// A single-choice field drawn as `< value >`.
pub fn render_select(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let style = if active {
        Style::default().fg(ratatui::style::Color::Cyan)
    } else {
        Style::default()
    };
    let arrows = if active { ("< ", " >") } else { ("  ", "  ") };

    let spans = vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), theme::current().dim),
        Span::styled(format!("{}{}{}", arrows.0, value, arrows.1), style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_category(frame: &mut Frame, area: Rect, category: Category, active: bool) {
    let t = theme::current();
    let style = if active {
        Style::default().fg(ratatui::style::Color::Cyan)
    } else {
        Style::default()
    };
    let arrows = if active { ("< ", " >") } else { ("  ", "  ") };

    let line = Line::from(vec![
        Span::styled(format!("{:<width$}", "Category", width = LABEL_WIDTH), t.dim),
        Span::styled(arrows.0, style),
        Span::styled("\u{25cf} ", Style::default().fg(t.category_color(category))),
        Span::styled(category.label(), style),
        Span::styled(arrows.1, style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints. "Save" is dimmed while the form cannot be submitted.
pub fn render_actions(frame: &mut Frame, area: Rect, can_submit: bool) {
    let t = theme::current();
    let key = Style::default().add_modifier(Modifier::BOLD);
    let save_key = if can_submit { key } else { t.dim };

    let help = Line::from(vec![
        Span::styled("Tab", key),
        Span::styled(":Next ", t.dim),
        Span::styled("\u{2190}/\u{2192}", key),
        Span::styled(":Pick ", t.dim),
        Span::styled("Enter", save_key),
        Span::styled(":Save ", t.dim),
        Span::styled("Esc", key),
        Span::styled(":Cancel", t.dim),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}
