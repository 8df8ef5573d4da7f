//! Theme support with auto-detection for dark/light terminals.

use ratatui::style::Color;

/// Application theme (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Detect the terminal theme based on background luminance.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => {
                tracing::info!("Detected light terminal (luma: {:.2})", luma);
                Theme::Light
            }
            Ok(luma) => {
                tracing::info!("Detected dark terminal (luma: {:.2})", luma);
                Theme::Dark
            }
            Err(e) => {
                tracing::debug!("Could not detect terminal theme: {}, defaulting to dark", e);
                Theme::Dark
            }
        }
    }

    /// Get the color palette for this theme.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette::dark(),
            Theme::Light => Palette::light(),
        }
    }
}

/// Color palette for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub fg_dim: Color,
    pub bg: Color,
    pub border: Color,

    pub primary: Color,
    pub accent: Color,

    pub success: Color,
    pub error: Color,

    pub selection: Color,
    pub muted: Color,
}

impl Palette {
    /// Dark theme palette (for dark terminal backgrounds).
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            fg_dim: Color::Gray,
            bg: Color::Reset,
            border: Color::DarkGray,

            primary: Color::Cyan,
            accent: Color::Magenta,

            success: Color::Green,
            error: Color::Red,

            selection: Color::LightBlue,
            muted: Color::DarkGray,
        }
    }

    /// Light theme palette: saturated darker colors that stay readable
    /// on a bright background.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            fg_dim: Color::DarkGray,
            bg: Color::Reset,
            border: Color::Gray,

            primary: Color::Rgb(0, 128, 128),
            accent: Color::Rgb(128, 0, 128),

            success: Color::Rgb(0, 128, 0),
            error: Color::Rgb(178, 34, 34),

            selection: Color::Rgb(70, 130, 180),
            muted: Color::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_dark_palette() {
        let palette = Theme::Dark.palette();
        assert_eq!(palette.fg, Color::White);
        assert_eq!(palette.primary, Color::Cyan);
    }

    #[test]
    fn test_light_palette() {
        let palette = Theme::Light.palette();
        assert_eq!(palette.fg, Color::Black);
    }

    #[test]
    fn test_palettes_have_different_fg() {
        let dark = Palette::dark();
        let light = Palette::light();
        assert_ne!(dark.fg, light.fg);
    }
}
