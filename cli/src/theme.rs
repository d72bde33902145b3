use habitchart_core::Bucket;
use ratatui::style::Color;

/// Palette for the four activity shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Green,
    Yellow,
    Orange,
    Red,
    Blue,
}

const IDLE: Color = Color::DarkGray;

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Green,
        Theme::Yellow,
        Theme::Orange,
        Theme::Red,
        Theme::Blue,
    ];

    pub fn from_name(name: &str) -> Option<Theme> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Green => "green",
            Theme::Yellow => "yellow",
            Theme::Orange => "orange",
            Theme::Red => "red",
            Theme::Blue => "blue",
        }
    }

    pub fn next(self) -> Theme {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn palette(self) -> [Color; 4] {
        match self {
            Theme::Green => [
                Color::Rgb(155, 233, 168),
                Color::Rgb(64, 196, 99),
                Color::Rgb(48, 161, 78),
                Color::Rgb(33, 110, 57),
            ],
            Theme::Yellow => [
                Color::Rgb(250, 230, 120),
                Color::Rgb(240, 200, 40),
                Color::Rgb(210, 160, 0),
                Color::Rgb(150, 110, 0),
            ],
            Theme::Orange => [
                Color::Rgb(255, 200, 150),
                Color::Rgb(255, 160, 80),
                Color::Rgb(235, 110, 20),
                Color::Rgb(170, 70, 0),
            ],
            Theme::Red => [
                Color::Rgb(255, 180, 170),
                Color::Rgb(240, 110, 100),
                Color::Rgb(200, 50, 40),
                Color::Rgb(140, 20, 20),
            ],
            Theme::Blue => [
                Color::Rgb(170, 210, 255),
                Color::Rgb(100, 160, 240),
                Color::Rgb(40, 110, 210),
                Color::Rgb(20, 60, 150),
            ],
        }
    }

    pub fn color(self, bucket: Bucket) -> Color {
        match bucket.level() {
            0 => IDLE,
            level => self.palette()[level - 1],
        }
    }

    /// Third of the four shades, used for highlights.
    pub fn accent(self) -> Color {
        self.palette()[2]
    }
}
