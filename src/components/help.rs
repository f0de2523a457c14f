use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::form;
use crate::theme;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("h/l \u{2190}/\u{2192}", "Previous/next day"),
            ("j/k \u{2193}/\u{2191}", "Next/previous week or slot"),
            ("[/]", "Previous/next month"),
            ("t", "Jump to today"),
        ],
    ),
    (
        "Views",
        &[("1/2 Tab", "Calendar / Schedule")],
    ),
    (
        "Actions",
        &[
            ("Enter", "Add event on day / entry at slot"),
            ("n", "Add event / schedule entry"),
            ("q", "Quit"),
            ("Esc", "Close popup or dialog"),
        ],
    ),
    (
        "Dialogs",
        &[
            ("Tab", "Next field"),
            ("\u{2190}/\u{2192} Space", "Change selection"),
            ("Enter", "Save (needs a title)"),
        ],
    ),
];

pub struct Help;

impl Help {
    pub fn render(frame: &mut Frame, area: Rect) {
        let inner = form::open_popup(frame, area, "Keybindings", 54, 24);

        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut lines = Vec::new();
        for (i, (section, keys)) in BINDINGS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(*section, section_style)));
            for (key, desc) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<14}", key), key_style),
                    Span::styled(*desc, theme::current().header.remove_modifier(Modifier::BOLD)),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
