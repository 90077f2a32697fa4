use notch_core::{event::Message, proximity::HoverState, state::AppState};
use notch_theme::Theme;
use iced::{
    widget::{button, text},
    Element,
};

/// Gear button that opens the options dialog.  Only present while expanded
/// and not covered by the drop overlay.
#[derive(Debug, Default)]
pub struct OptionsButton;

impl OptionsButton {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Option<Element<'a, Message>> {
        if state.hover != HoverState::Expanded || state.dropping {
            return None;
        }

        Some(
            button(text("⚙").size(20.0).color(theme.foreground.to_iced()))
                .on_press(Message::OpenOptions)
                .padding(0)
                .style(button::text)
                .into(),
        )
    }
}
