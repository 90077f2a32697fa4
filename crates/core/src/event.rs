use crate::{
    geometry::Point,
    state::{ColorTarget, DisplayField, SystemSnapshot},
};
use std::path::PathBuf;

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Notch surface events   → `Cursor*`, `Files*`, `FileDropped`
/// - System monitor task    → `SystemSnapshot`
/// - Config watcher task    → `ConfigReloaded`
/// - Widgets / options view → `OpenOptions`, `Option*`, `Picker*`, `ConfirmOptions`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Notch surface ─────────────────────────────────────────────────────────
    /// Cursor moved inside the notch surface (surface-local coordinates).
    CursorMoved(Point),
    /// Cursor left the notch surface.
    CursorLeft,
    /// A file drag entered the surface.
    FilesHovered,
    /// The drag left the surface without dropping.
    FilesHoveredLeft,
    /// A single file was dropped.  One message per dropped path.
    FileDropped(PathBuf),

    // ── System monitor ────────────────────────────────────────────────────────
    /// Fresh system resource snapshot from the background monitor task.
    SystemSnapshot(SystemSnapshot),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,

    // ── Options dialog ────────────────────────────────────────────────────────
    /// Options button pressed on the expanded notch.
    OpenOptions,
    /// Checkbox toggled in the options dialog (draft only until confirmed).
    OptionToggled(DisplayField, bool),
    /// Open or close the inline color picker for one of the two colors.
    TogglePicker(ColorTarget),
    PickerHue(f32),
    PickerSat(f32),
    PickerLit(f32),
    PickerAlpha(f32),
    /// "OK" in the options dialog — commit the draft and close.
    ConfirmOptions,
    /// "Exit Program" in the options dialog.
    ExitRequested,
}
