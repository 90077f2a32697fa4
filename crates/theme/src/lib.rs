pub mod colors;
pub mod style;

pub use colors::Color;

use notch_config::ThemeConfig;
use notch_core::DisplayOptions;

/// Compiled theme derived from [`ThemeConfig`] and the live [`DisplayOptions`].
///
/// Colors are pre-parsed into normalised `[0, 1]` RGBA.  Building a theme is
/// infallible — invalid color strings fall back to the stock notch colors.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:     Color,
    pub foreground:     Color,
    /// Translucent backing behind the time chip.
    pub chip:           Color,
    /// Color of the "DELETE" drop overlay.
    pub danger:         Color,
    pub time_font_size: f32,
    pub info_font_size: f32,
    pub corner_radius:  f32,
    pub padding_x:      u16,
    pub padding_y:      u16,
    pub spacing:        u16,
}

impl Theme {
    /// Build a [`Theme`] from the `[theme]` section and the current colors.
    pub fn from_parts(cfg: &ThemeConfig, options: &DisplayOptions) -> Self {
        Self {
            background:     Color::parse(&options.background_color).unwrap_or(Color::NOTCH_BLUE),
            foreground:     Color::parse(&options.text_color).unwrap_or(Color::WHITE),
            chip:           Color::BLACK.with_alpha(50.0 / 255.0),
            danger:         Color::RED,
            time_font_size: cfg.time_font_size,
            info_font_size: cfg.info_font_size,
            corner_radius:  cfg.corner_radius,
            padding_x:      cfg.padding_x,
            padding_y:      cfg.padding_y,
            spacing:        cfg.spacing,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_parts(&ThemeConfig::default(), &DisplayOptions::default())
    }
}
