//! Options dialog model and view.
//!
//! Checkbox changes are a draft committed by "OK".  Color changes are written
//! straight into the live [`DisplayOptions`] so the notch recolors while the
//! user drags the sliders, and they survive a cancelled dialog.

use notch_core::{
    event::Message,
    state::{ColorTarget, DisplayField, DisplayOptions},
};
use notch_theme::{style, Color};
use notch_widgets::{ColorPicker, PickerState};
use iced::{
    widget::{button, checkbox, column, container, row, scrollable, text},
    Alignment, Element, Length,
};

/// One slider movement in the inline picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerChange {
    Hue(f32),
    Sat(f32),
    Lit(f32),
    Alpha(f32),
}

#[derive(Debug, Clone)]
pub struct OptionsDialog {
    draft:  DisplayOptions,
    picker: Option<PickerState>,
}

impl OptionsDialog {
    pub fn new(current: &DisplayOptions) -> Self {
        Self { draft: current.clone(), picker: None }
    }

    pub fn picker(&self) -> Option<&PickerState> {
        self.picker.as_ref()
    }

    pub fn toggle(&mut self, field: DisplayField, on: bool) {
        self.draft.set_enabled(field, on);
    }

    /// Open the picker for `target`, or close it if it is already open.
    pub fn toggle_picker(&mut self, target: ColorTarget, live: &DisplayOptions) {
        if self.picker.is_some_and(|p| p.target == target) {
            self.picker = None;
            return;
        }

        let fallback = match target {
            ColorTarget::Background => Color::NOTCH_BLUE,
            ColorTarget::Text       => Color::WHITE,
        };
        let current = Color::parse(live.color(target)).unwrap_or(fallback);
        self.picker = Some(PickerState::from_color(target, current));
    }

    /// Move a slider and apply the resulting color to `live` immediately.
    /// Returns `false` when no picker is open.
    pub fn adjust(&mut self, change: PickerChange, live: &mut DisplayOptions) -> bool {
        let Some(picker) = self.picker.as_mut() else {
            return false;
        };

        match change {
            PickerChange::Hue(v)   => picker.h     = v,
            PickerChange::Sat(v)   => picker.s     = v,
            PickerChange::Lit(v)   => picker.l     = v,
            PickerChange::Alpha(v) => picker.alpha = v,
        }

        let hex = picker.color().to_hex();
        self.draft.set_color(picker.target, hex.clone());
        live.set_color(picker.target, hex);
        true
    }

    /// "OK": copy the checkbox draft into `live`.  Colors are already there.
    pub fn commit(self, live: &mut DisplayOptions) {
        for field in [DisplayField::Time, DisplayField::Cpu, DisplayField::Ram] {
            live.set_enabled(field, self.draft.enabled(field));
        }
    }

    pub fn view<'a>(&'a self, live: &'a DisplayOptions, picker: &'a ColorPicker) -> Element<'a, Message> {
        let d = &self.draft;

        let mut body = column![
            checkbox(d.show_time)
                .label("Show Time")
                .on_toggle(|on| Message::OptionToggled(DisplayField::Time, on)),
            checkbox(d.show_cpu)
                .label("Show CPU Usage")
                .on_toggle(|on| Message::OptionToggled(DisplayField::Cpu, on)),
            checkbox(d.show_ram)
                .label("Show RAM Usage")
                .on_toggle(|on| Message::OptionToggled(DisplayField::Ram, on)),
        ]
        .spacing(10);

        for (label, target) in [
            ("Select Background Color", ColorTarget::Background),
            ("Select Text Color", ColorTarget::Text),
        ] {
            body = body.push(color_row(label, target, live));
            if let Some(open) = self.picker.filter(|p| p.target == target) {
                body = body.push(picker.view(&open));
            }
        }

        body = body
            .push(
                button(text("Exit Program"))
                    .on_press(Message::ExitRequested)
                    .style(button::danger)
                    .width(Length::Fill),
            )
            .push(
                button(text("OK"))
                    .on_press(Message::ConfirmOptions)
                    .style(button::primary)
                    .width(Length::Fill),
            );

        container(scrollable(body.padding(12)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::dialog_surface)
            .into()
    }
}

fn color_row<'a>(label: &'a str, target: ColorTarget, live: &DisplayOptions) -> Element<'a, Message> {
    let current = Color::parse(live.color(target)).unwrap_or(Color::TRANSPARENT);

    row![
        container(text(""))
            .width(Length::Fixed(24.0))
            .height(Length::Fixed(24.0))
            .style(style::swatch(current)),
        button(text(label).size(13.0))
            .on_press(Message::TogglePicker(target))
            .width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
