use notch_core::{DisplayOptions, NotchGeometry};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `notch.toml`.
///
/// The file is only ever read; changes made in the options dialog live for
/// the current run and are never written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotchConfig {
    /// Window dimensions and hover behaviour.
    pub window: WindowConfig,
    /// Timer intervals.
    pub timing: TimingConfig,
    /// Startup display options (what the options dialog starts from).
    pub display: DisplayOptions,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// The two built-in notch layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// 300 × 30 → 100, with the options dialog.
    #[default]
    Classic,
    /// 220 × 24 → 72, no options dialog.
    Slim,
}

impl Layout {
    pub fn geometry(self) -> NotchGeometry {
        match self {
            Layout::Classic => NotchGeometry { width: 300.0, collapsed_height: 30.0, expanded_height: 100.0 },
            Layout::Slim    => NotchGeometry { width: 220.0, collapsed_height: 24.0, expanded_height: 72.0 },
        }
    }

    pub fn has_options_dialog(self) -> bool {
        matches!(self, Layout::Classic)
    }
}

/// Window settings.  Unset dimensions fall back to the layout preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub layout: Layout,
    pub width: Option<u32>,
    pub collapsed_height: Option<u32>,
    pub expanded_height: Option<u32>,
    /// Extra pixels below the notch that still count as hovering.
    pub hover_buffer: u32,
    /// Expand / collapse animation length in milliseconds.
    pub animation_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            layout:           Layout::Classic,
            width:            None,
            collapsed_height: None,
            expanded_height:  None,
            hover_buffer:     10,
            animation_ms:     300,
        }
    }
}

impl WindowConfig {
    /// Effective notch geometry: layout preset with per-field overrides.
    pub fn geometry(&self) -> NotchGeometry {
        let preset = self.layout.geometry();
        NotchGeometry {
            width:            self.width.map_or(preset.width, |v| v as f32),
            collapsed_height: self.collapsed_height.map_or(preset.collapsed_height, |v| v as f32),
            expanded_height:  self.expanded_height.map_or(preset.expanded_height, |v| v as f32),
        }
    }
}

/// Poll intervals in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Label refresh (time / CPU / RAM).
    pub refresh_ms: u64,
    /// Cursor proximity check.
    pub proximity_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { refresh_ms: 1_000, proximity_ms: 50 }
    }
}

/// Theme / styling configuration.  Colors live in [`DisplayOptions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Font size of the time chip.
    pub time_font_size: f32,
    /// Font size of the CPU / RAM label.
    pub info_font_size: f32,
    /// Corner radius of the notch (pixels).
    pub corner_radius: f32,
    /// Horizontal inner padding (pixels).
    pub padding_x: u16,
    /// Vertical inner padding (pixels).
    pub padding_y: u16,
    /// Gap between the time chip, the label and the options button.
    pub spacing: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            time_font_size: 13.0,
            info_font_size: 15.0,
            corner_radius:  15.0,
            padding_x:      15,
            padding_y:      5,
            spacing:        10,
        }
    }
}
