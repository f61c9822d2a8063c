//! Status line at the bottom of the window.

use crate::gui::common::messages::AppEvent;
use crate::gui::style::button::ButtonType;
use crate::gui::style::text::TextType;
use crate::gui::widget::{Button, Container, Row, Space, Text};
use iced::alignment::Vertical;
use iced::{Alignment, Length};

/// A transient, user-visible message. `danger` switches the text color.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub danger: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Notice {
        Notice {
            text: text.into(),
            danger: false,
        }
    }

    pub fn danger(text: impl Into<String>) -> Notice {
        Notice {
            text: text.into(),
            danger: true,
        }
    }
}

pub fn footer<'a>(notice: Option<&Notice>) -> Container<'a, AppEvent> {
    let message: Text<'a> = match notice {
        Some(notice) => {
            let class = if notice.danger {
                TextType::Danger
            } else {
                TextType::Subtitle
            };
            Text::new(notice.text.clone()).size(14).class(class)
        }
        None => Text::new(""),
    };

    let row = Row::new()
        .align_y(Alignment::Center)
        .push(message)
        .push(Space::new().width(Length::Fill))
        .push(
            Button::new(Text::new("Theme").size(13))
                .class(ButtonType::Transparent)
                .on_press(AppEvent::ToggleTheme),
        );

    Container::new(row)
        .width(Length::Fill)
        .height(36)
        .align_y(Vertical::Center)
        .padding([0.0, 10.0])
}
