//! Light and dark color themes.

use ratatui::style::Color;

/// Active color theme.
///
/// Starts light, flips only on user request, and is not persisted
/// across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark marks on a light background.
    #[default]
    Light,
    /// Light marks on a dark background.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Short name, shown in the footer next to the toggle key.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Resolves the theme to concrete widget colors.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                grid: Color::Gray,
                hint: Color::Gray,
                x_mark: Color::Blue,
                o_mark: Color::Red,
                accent: Color::Cyan,
                cursor: Color::Cyan,
                win: Color::LightGreen,
            },
            Theme::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                grid: Color::DarkGray,
                hint: Color::DarkGray,
                x_mark: Color::LightBlue,
                o_mark: Color::LightRed,
                accent: Color::Cyan,
                cursor: Color::Blue,
                win: Color::Green,
            },
        }
    }
}

/// Concrete colors for the widgets.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Fill behind every widget.
    pub background: Color,
    /// Default foreground.
    pub text: Color,
    /// Board separators and borders.
    pub grid: Color,
    /// Key hints in vacant cells.
    pub hint: Color,
    /// X marks.
    pub x_mark: Color,
    /// O marks.
    pub o_mark: Color,
    /// Title and status accents.
    pub accent: Color,
    /// Background of the cell under the cursor.
    pub cursor: Color,
    /// Background of the winning line's cells.
    pub win: Color,
}
