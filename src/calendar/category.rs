use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Work,
    Personal,
    Important,
    Leisure,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Important,
        Category::Leisure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Important => "Important",
            Category::Leisure => "Leisure",
        }
    }

    /// Built-in color, used unless the config overrides it.
    pub fn default_color(&self) -> Color {
        match self {
            Category::Work => Color::Rgb(94, 129, 244),
            Category::Personal => Color::Rgb(80, 200, 120),
            Category::Important => Color::Rgb(235, 87, 87),
            Category::Leisure => Color::Rgb(187, 134, 252),
        }
    }

    pub fn next(&self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}
