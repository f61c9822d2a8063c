use crate::gui::style::button::ButtonType;
use crate::gui::widget::{Button, Container, Text};
use iced::alignment::{Horizontal, Vertical};
use iced::Padding;

pub struct FilledButton {
    label: String,
    button_type: ButtonType,
}

impl FilledButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.into(),
            button_type: ButtonType::Standard,
        }
    }

    pub fn style(mut self, style: ButtonType) -> Self {
        self.button_type = style;
        self
    }

    pub fn build<'a, Message: 'a>(self) -> Button<'a, Message> {
        Button::new(
            Container::new(Text::new(self.label).size(15))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .padding(Padding {
            top: 0.0,
            right: 18.0,
            bottom: 0.0,
            left: 18.0,
        })
        .height(40)
        .width(130)
        .class(self.button_type)
    }
}
