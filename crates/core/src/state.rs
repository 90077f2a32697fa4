use crate::{
    display::DisplayLine,
    geometry::Rect,
    proximity::HoverState,
};
use serde::{Deserialize, Serialize};

/// Central application state — all widgets read from this snapshot.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// What to show and in which colors.  Never persisted.
    pub options: DisplayOptions,
    /// Latest system resource snapshot.
    pub system: SystemSnapshot,
    /// Label text produced by the last refresh tick.
    pub line: DisplayLine,
    /// Notch rectangle as currently drawn (animated).
    pub notch: Rect,
    /// Target hover state; the options button is only shown when expanded.
    pub hover: HoverState,
    /// A file drag is hovering over the surface.
    pub dropping: bool,
}

/// User-facing display switches and colors.
///
/// Colors are kept as strings (`#rrggbb`, `#rrggbbaa`, `rgba(r, g, b, a)` or a
/// basic color name) and parsed by the theme with a safe fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_time:        bool,
    pub show_cpu:         bool,
    pub show_ram:         bool,
    pub background_color: String,
    pub text_color:       String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_time:        true,
            show_cpu:         false,
            show_ram:         false,
            background_color: "#2196f3b4".to_string(), // rgba(33, 150, 243, 180)
            text_color:       "#ffffff".to_string(),
        }
    }
}

/// One of the three toggleable label fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayField {
    Time,
    Cpu,
    Ram,
}

/// Which of the two user-pickable colors a picker edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Background,
    Text,
}

impl DisplayOptions {
    pub fn enabled(&self, field: DisplayField) -> bool {
        match field {
            DisplayField::Time => self.show_time,
            DisplayField::Cpu  => self.show_cpu,
            DisplayField::Ram  => self.show_ram,
        }
    }

    pub fn set_enabled(&mut self, field: DisplayField, on: bool) {
        match field {
            DisplayField::Time => self.show_time = on,
            DisplayField::Cpu  => self.show_cpu  = on,
            DisplayField::Ram  => self.show_ram  = on,
        }
    }

    pub fn color(&self, target: ColorTarget) -> &str {
        match target {
            ColorTarget::Background => &self.background_color,
            ColorTarget::Text       => &self.text_color,
        }
    }

    pub fn set_color(&mut self, target: ColorTarget, value: String) {
        match target {
            ColorTarget::Background => self.background_color = value,
            ColorTarget::Text       => self.text_color       = value,
        }
    }
}

/// A point-in-time snapshot of system resource usage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSnapshot {
    /// Average CPU usage across all cores (0.0 – 100.0).
    pub cpu_average: f32,
    /// RAM used in bytes.
    pub ram_used: u64,
    /// Total RAM in bytes.
    pub ram_total: u64,
}

impl SystemSnapshot {
    /// RAM usage as a percentage in `[0, 100]`.
    #[must_use]
    pub fn ram_percent(&self) -> f32 {
        if self.ram_total == 0 {
            return 0.0;
        }
        (self.ram_used as f64 / self.ram_total as f64 * 100.0) as f32
    }
}
