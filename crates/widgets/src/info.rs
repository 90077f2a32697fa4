use notch_core::{event::Message, state::AppState};
use notch_theme::Theme;
use iced::{widget::text, Element};

/// CPU / RAM label.  Empty when neither stat is enabled, hidden under the
/// drop overlay.
#[derive(Debug, Default)]
pub struct InfoWidget;

impl InfoWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Option<Element<'a, Message>> {
        if state.dropping {
            return None;
        }

        Some(
            text(state.line.info.as_str())
                .size(theme.info_font_size)
                .color(theme.foreground.to_iced())
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_gives_way_to_drop_overlay() {
        let mut state = AppState::default();
        let theme = Theme::default();
        assert!(InfoWidget::new().view(&state, &theme).is_some());

        state.dropping = true;
        assert!(InfoWidget::new().view(&state, &theme).is_none());
    }
}
