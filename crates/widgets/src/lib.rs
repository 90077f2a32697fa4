pub mod clock;
pub mod color_picker;
pub mod delete_overlay;
pub mod info;
pub mod options_button;

pub use clock::ClockWidget;
pub use color_picker::{ColorPicker, PickerState};
pub use delete_overlay::DeleteOverlay;
pub use info::InfoWidget;
pub use options_button::OptionsButton;
