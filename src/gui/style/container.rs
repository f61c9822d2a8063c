use crate::gui::style::theme::csx::StyleType;
use iced::widget::container::{Catalog, Style};
use iced::{Background, Border, Color, Shadow, Vector};

#[derive(Clone, Copy, Debug, Default)]
pub enum ContainerType {
    #[default]
    Standard,
    /// The drop/preview area on the left panel.
    Preview,
    /// One cell of the rendered solution grid.
    Cell,
    /// Surrounds the whole solution grid.
    Board,
}

impl Catalog for StyleType {
    type Class<'a> = ContainerType;

    fn default<'a>() -> Self::Class<'a> {
        ContainerType::Standard
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        let colors = self.get_palette();
        Style {
            background: Some(match class {
                ContainerType::Preview => Background::Color(colors.primary),
                ContainerType::Cell => Background::Color(colors.primary),
                ContainerType::Board => Background::Color(colors.primary_darker),
                _ => Background::Color(Color::TRANSPARENT),
            }),
            border: Border {
                radius: match class {
                    ContainerType::Cell => 2.0.into(),
                    ContainerType::Board => 6.0.into(),
                    _ => 8.0.into(),
                },
                width: match class {
                    ContainerType::Preview => 2.0,
                    ContainerType::Cell => 1.0,
                    _ => 0.0,
                },
                color: match class {
                    ContainerType::Cell => Color {
                        a: 0.5,
                        ..colors.secondary
                    },
                    _ => Color {
                        a: 0.8,
                        ..colors.secondary
                    },
                },
            },
            text_color: Some(colors.text),
            shadow: Shadow {
                color: Color::TRANSPARENT,
                offset: Vector::ZERO,
                blur_radius: 0.0,
            },
            snap: false,
        }
    }
}
