use notch_core::{event::Message, state::ColorTarget};
use notch_theme::{style, Color};
use iced::{
    widget::{column, container, row, slider, text},
    Alignment, Element, Length,
};

/// Slider positions of an open inline picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerState {
    pub target: ColorTarget,
    /// Hue 0 – 360.
    pub h: f32,
    /// Saturation 0 – 1.
    pub s: f32,
    /// Lightness 0 – 1.
    pub l: f32,
    /// Alpha 0 – 1.  Only the background picker exposes it.
    pub alpha: f32,
}

impl PickerState {
    /// Seed the sliders from the color currently in use.
    pub fn from_color(target: ColorTarget, color: Color) -> Self {
        let (h, s, l) = color.to_hsl();
        Self { target, h, s, l, alpha: color.a }
    }

    pub fn color(&self) -> Color {
        Color::from_hsl(self.h, self.s, self.l, self.alpha)
    }

    pub fn shows_alpha(&self) -> bool {
        self.target == ColorTarget::Background
    }
}

/// Hue / saturation / lightness (and alpha) sliders with a live preview strip.
#[derive(Debug, Default)]
pub struct ColorPicker;

impl ColorPicker {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, picker: &PickerState) -> Element<'a, Message> {
        let PickerState { h, s, l, alpha, .. } = *picker;

        let mut content = column![
            slider_row("H", slider(0.0f32..=360.0, h, Message::PickerHue).step(1.0f32), format!("{h:.0}°")),
            slider_row("S", slider(0.0f32..=1.0, s, Message::PickerSat).step(0.01f32), percent(s)),
            slider_row("L", slider(0.0f32..=1.0, l, Message::PickerLit).step(0.01f32), percent(l)),
        ]
        .spacing(4);

        if picker.shows_alpha() {
            content = content.push(slider_row(
                "A",
                slider(0.0f32..=1.0, alpha, Message::PickerAlpha).step(0.01f32),
                percent(alpha),
            ));
        }

        content
            .push(
                container(text(""))
                    .width(Length::Fill)
                    .height(Length::Fixed(18.0))
                    .style(style::swatch(picker.color())),
            )
            .into()
    }
}

fn slider_row<'a>(
    label: &'a str,
    slider: impl Into<Element<'a, Message>>,
    value: String,
) -> Element<'a, Message> {
    row![
        text(label).width(14).size(12.0),
        slider.into(),
        text(value).width(38).size(12.0),
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}

fn percent(v: f32) -> String {
    format!("{:.0}%", v * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_picker_reproduces_color() {
        let seeded = Color::parse("rgba(33, 150, 243, 180)").unwrap();
        let picker = PickerState::from_color(ColorTarget::Background, seeded);

        assert_eq!(picker.color().to_hex(), "#2196f3b4");
        assert!(picker.shows_alpha());
    }

    #[test]
    fn text_picker_hides_alpha() {
        let picker = PickerState::from_color(ColorTarget::Text, Color::WHITE);
        assert!(!picker.shows_alpha());
        assert_eq!(picker.color(), Color::WHITE);
    }
}
