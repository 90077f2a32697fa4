use notch_core::{event::Message, state::AppState};
use notch_theme::{style, Theme};
use iced::{
    widget::{container, text},
    Element,
};

/// Time chip on the left of the notch.
///
/// Reads `state.line.time`, refreshed by the one-second tick.  Returns `None`
/// when the time display is switched off so the row collapses around it.
#[derive(Debug, Default)]
pub struct ClockWidget;

impl ClockWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Option<Element<'a, Message>> {
        let time = state.line.time.as_deref()?;

        Some(
            container(text(time).size(theme.time_font_size).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }))
            .padding([2, 5])
            .style(style::time_chip(theme))
            .into(),
        )
    }
}
