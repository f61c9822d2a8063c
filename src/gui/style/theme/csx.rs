use crate::gui::style::theme::palette::Palette;
use crate::rgba8;
use iced::theme::{self, Base};
use iced::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum StyleType {
    Night,
    #[default]
    Day,
}

impl StyleType {
    pub fn toggle(&self) -> Self {
        match self {
            StyleType::Day => StyleType::Night,
            StyleType::Night => StyleType::Day,
        }
    }

    pub fn get_palette(&self) -> Palette {
        match self {
            StyleType::Night => Palette {
                background: rgba8!(28.0, 32.0, 42.0, 1.0),
                primary: rgba8!(38.0, 44.0, 58.0, 1.0),
                primary_darker: rgba8!(24.0, 28.0, 38.0, 1.0),
                secondary: rgba8!(90.0, 100.0, 120.0, 1.0),
                danger: rgba8!(225.0, 100.0, 100.0, 1.0),
                action: rgba8!(90.0, 160.0, 255.0, 1.0),
                text: Color::WHITE,
                text_inv: Color::BLACK,
            },
            StyleType::Day => Palette {
                background: rgba8!(235.0, 236.0, 240.0, 1.0),
                primary: rgba8!(250.0, 250.0, 252.0, 1.0),
                primary_darker: rgba8!(205.0, 208.0, 216.0, 1.0),
                secondary: rgba8!(150.0, 155.0, 168.0, 1.0),
                danger: rgba8!(200.0, 60.0, 60.0, 1.0),
                action: rgba8!(35.0, 100.0, 210.0, 1.0),
                text: Color::BLACK,
                text_inv: Color::WHITE,
            },
        }
    }
}

impl Base for StyleType {
    fn default(preference: theme::Mode) -> Self {
        match preference {
            theme::Mode::Dark => StyleType::Night,
            theme::Mode::None | theme::Mode::Light => StyleType::Day,
        }
    }

    fn mode(&self) -> theme::Mode {
        match self {
            StyleType::Night => theme::Mode::Dark,
            StyleType::Day => theme::Mode::Light,
        }
    }

    fn base(&self) -> theme::Style {
        let colors = self.get_palette();
        theme::Style {
            background_color: colors.background,
            text_color: colors.text,
        }
    }

    fn palette(&self) -> Option<theme::Palette> {
        None
    }

    fn name(&self) -> &str {
        match self {
            StyleType::Night => "Night",
            StyleType::Day => "Day",
        }
    }
}
