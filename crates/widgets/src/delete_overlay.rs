use notch_core::{event::Message, state::AppState};
use notch_theme::{style, Theme};
use iced::{
    alignment,
    widget::{container, text},
    Element, Length,
};

/// Dashed-red "DELETE" drop target covering the label and options button.
#[derive(Debug, Default)]
pub struct DeleteOverlay;

impl DeleteOverlay {
    pub fn new() -> Self {
        Self
    }

    /// `None` unless a file drag is hovering over the notch.
    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Option<Element<'a, Message>> {
        if !state.dropping {
            return None;
        }

        // Scale the caption with the notch so it fits the collapsed height too.
        let size = (state.notch.height * 0.5).clamp(10.0, 28.0);

        Some(
            container(text("DELETE").size(size).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(style::delete_overlay(theme))
            .into(),
        )
    }
}
