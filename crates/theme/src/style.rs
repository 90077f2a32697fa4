//! Container styles shared by the notch surface and the options window.

use crate::{Color, Theme};
use iced::{
    widget::container,
    Background, Border,
};

/// Rounded notch body in the user's background color.
pub fn notch_surface(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let bg     = theme.background.to_iced();
    let fg     = theme.foreground.to_iced();
    let radius = theme.corner_radius;

    move |_| container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(fg),
        border:     Border { radius: radius.into(), ..Default::default() },
        ..Default::default()
    }
}

/// Dim pill behind the time label.
pub fn time_chip(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let bg = theme.chip.to_iced();

    move |_| container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(Color::WHITE.to_iced()),
        border:     Border { radius: 5.0.into(), ..Default::default() },
        ..Default::default()
    }
}

/// Red bordered box shown while files hover over the notch.
pub fn delete_overlay(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let red  = theme.danger.to_iced();
    let fill = theme.danger.with_alpha(50.0 / 255.0).to_iced();

    move |_| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(red),
        border:     Border { color: red, width: 4.0, radius: 4.0.into() },
        ..Default::default()
    }
}

/// Opaque backing for the options window; the daemon background is transparent.
pub fn dialog_surface(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(iced::Color::from_rgb8(0x2b, 0x2b, 0x2b))),
        text_color: Some(iced::Color::WHITE),
        ..Default::default()
    }
}

/// Small square color sample.
pub fn swatch(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    let c = color.to_iced();

    move |_| container::Style {
        background: Some(Background::Color(c)),
        border: Border {
            radius: 4.0.into(),
            color:  iced::Color::from_rgb8(0x45, 0x47, 0x5a),
            width:  1.0,
        },
        ..Default::default()
    }
}
