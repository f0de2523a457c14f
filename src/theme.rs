use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::calendar::Category;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme built from the config. Only the first call has effect.
pub fn init(theme: Theme) {
    let _ = THEME.set(theme);
}

/// Get the active theme, falling back to the default if `init` never ran.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    pub today: Style,
    pub selected: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub highlight: Style,
    pub dialog: Style,
    categories: [Color; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Yellow),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            highlight: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            dialog: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            categories: default_category_colors(),
        }
    }
}

impl Theme {
    pub fn from_config(theme: &ThemeConfig, categories: &CategoryColors) -> Self {
        let mut built = theme.clone().into_theme();
        categories.apply(&mut built);
        built
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    pub fn category_color(&self, category: Category) -> Color {
        self.categories[category_slot(category)]
    }

    /// Style for a schedule block or swatch of the given category.
    pub fn category_block(&self, category: Category) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.category_color(category))
    }

    /// Style for a day that is both today and under the cursor.
    pub fn today_selected(&self) -> Style {
        self.today.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(189, 147, 249)), // purple
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(139, 233, 253)), // cyan
            header: Style::default().fg(Color::Rgb(248, 248, 242)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
            highlight: Style::default()
                .bg(Color::Rgb(68, 71, 90))
                .add_modifier(Modifier::BOLD),
            dialog: Style::default()
                .fg(Color::Rgb(80, 250, 123))
                .add_modifier(Modifier::BOLD),
            categories: [
                Color::Rgb(139, 233, 253),
                Color::Rgb(80, 250, 123),
                Color::Rgb(255, 85, 85),
                Color::Rgb(255, 121, 198),
            ],
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(250, 189, 47)), // yellow
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(131, 165, 152)), // aqua
            header: Style::default().fg(Color::Rgb(235, 219, 178)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            status: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(80, 73, 69)),
            highlight: Style::default()
                .bg(Color::Rgb(80, 73, 69))
                .add_modifier(Modifier::BOLD),
            dialog: Style::default()
                .fg(Color::Rgb(184, 187, 38))
                .add_modifier(Modifier::BOLD),
            categories: [
                Color::Rgb(131, 165, 152),
                Color::Rgb(184, 187, 38),
                Color::Rgb(251, 73, 52),
                Color::Rgb(211, 134, 155),
            ],
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(235, 203, 139)), // yellow
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(136, 192, 208)), // frost
            header: Style::default().fg(Color::Rgb(229, 233, 240)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(Color::Rgb(67, 76, 94)),
            status: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(67, 76, 94)),
            highlight: Style::default()
                .bg(Color::Rgb(67, 76, 94))
                .add_modifier(Modifier::BOLD),
            dialog: Style::default()
                .fg(Color::Rgb(163, 190, 140))
                .add_modifier(Modifier::BOLD),
            categories: [
                Color::Rgb(94, 129, 172),
                Color::Rgb(163, 190, 140),
                Color::Rgb(191, 97, 106),
                Color::Rgb(180, 142, 173),
            ],
        }
    }
}

fn default_category_colors() -> [Color; 4] {
    Category::ALL.map(|c| c.default_color())
}

fn category_slot(category: Category) -> usize {
    match category {
        Category::Work => 0,
        Category::Personal => 1,
        Category::Important => 2,
        Category::Leisure => 3,
    }
}

// ── TOML config types ──

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub today_fg: Option<String>,
    pub today_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub highlight_bg: Option<String>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        let fg = |style: &mut Style, value: &Option<String>| {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                *style = style.fg(c);
            }
        };
        fg(&mut theme.today, &self.today_fg);
        fg(&mut theme.selected, &self.selected_fg);
        fg(&mut theme.header, &self.header_fg);
        fg(&mut theme.dim, &self.dim_fg);
        fg(&mut theme.border, &self.border_fg);
        fg(&mut theme.status, &self.status_fg);

        let bg = |style: &mut Style, value: &Option<String>| {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                *style = style.bg(c);
            }
        };
        bg(&mut theme.today, &self.today_bg);
        bg(&mut theme.selected, &self.selected_bg);
        bg(&mut theme.status, &self.status_bg);
        bg(&mut theme.highlight, &self.highlight_bg);

        theme
    }
}

/// Per-category color overrides from the `[categories]` table.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CategoryColors {
    pub work: Option<String>,
    pub personal: Option<String>,
    pub important: Option<String>,
    pub leisure: Option<String>,
}

impl CategoryColors {
    fn apply(&self, theme: &mut Theme) {
        let overrides = [
            (Category::Work, &self.work),
            (Category::Personal, &self.personal),
            (Category::Important, &self.important),
            (Category::Leisure, &self.leisure),
        ];
        for (category, value) in overrides {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                theme.categories[category_slot(category)] = c;
            }
        }
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#0a0B0c"), Some(Color::Rgb(10, 11, 12)));
        assert_eq!(parse_color(" Grey "), Some(Color::Gray));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn non_ascii_hex_is_ignored() {
        assert_eq!(parse_color("#a\u{e9}aaa"), None);
        assert_eq!(parse_color("#\u{1f600}aa"), None);

        let config = ThemeConfig {
            today_bg: Some("#a\u{e9}aaa".to_string()),
            ..Default::default()
        };
        let categories = CategoryColors {
            work: Some("#\u{e9}\u{e9}\u{e9}".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config, &categories);
        assert_eq!(theme.today.bg, Theme::default().today.bg);
        assert_eq!(theme.category_color(Category::Work), Category::Work.default_color());
    }

    #[test]
    fn preset_then_overrides() {
        let config = ThemeConfig {
            preset: Some("nord".to_string()),
            today_bg: Some("red".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config, &CategoryColors::default());
        assert_eq!(theme.name, "nord");
        assert_eq!(theme.today.bg, Some(Color::Red));
        assert_eq!(theme.selected.bg, Some(Color::Rgb(136, 192, 208)));
    }

    #[test]
    fn category_overrides_replace_only_named_colors() {
        let categories = CategoryColors {
            leisure: Some("#010203".to_string()),
            important: Some("not-a-color".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&ThemeConfig::default(), &categories);
        assert_eq!(theme.category_color(Category::Leisure), Color::Rgb(1, 2, 3));
        assert_eq!(
            theme.category_color(Category::Important),
            Category::Important.default_color()
        );
        assert_eq!(theme.category_color(Category::Work), Category::Work.default_color());
    }

    #[test]
    fn unknown_preset_is_default() {
        assert_eq!(Theme::preset("solarized").name, "default");
    }
}
