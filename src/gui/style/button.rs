use crate::gui::style::theme::csx::StyleType;
use iced::widget::button::{Catalog, Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

pub const BORDER_RADIUS: f32 = 8.0;

#[derive(Clone, Copy, Debug, Default)]
pub enum ButtonType {
    #[default]
    Standard,
    /// The main action of a panel (Solve, Take Photo).
    Action,
    /// Destructive or backing-out actions (Reset, Cancel).
    Danger,
    Transparent,
}

impl Catalog for StyleType {
    type Class<'a> = ButtonType;

    fn default<'a>() -> Self::Class<'a> {
        ButtonType::Standard
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        let colors = self.get_palette();

        let base_color = match class {
            ButtonType::Action => colors.action,
            ButtonType::Danger => colors.danger,
            ButtonType::Transparent => Color::TRANSPARENT,
            ButtonType::Standard => colors.primary_darker,
        };

        let text_color = match class {
            ButtonType::Action | ButtonType::Danger => Color::WHITE,
            _ => colors.text,
        };

        let active = Style {
            background: Some(Background::Color(base_color)),
            border: Border {
                radius: BORDER_RADIUS.into(),
                width: match class {
                    ButtonType::Standard => 1.0,
                    _ => 0.0,
                },
                color: Color {
                    a: 0.6,
                    ..colors.secondary
                },
            },
            text_color,
            shadow: Shadow::default(),
            snap: false,
        };

        match status {
            Status::Active => active,
            Status::Hovered => Style {
                background: Some(Background::Color(match class {
                    ButtonType::Transparent => Color::TRANSPARENT,
                    _ => colors.active(base_color),
                })),
                shadow: match class {
                    ButtonType::Transparent => Shadow::default(),
                    _ => Shadow {
                        color: Color::BLACK,
                        offset: Vector::new(0.0, 1.0),
                        blur_radius: 4.0,
                    },
                },
                ..active
            },
            Status::Pressed => Style {
                shadow: Shadow::default(),
                ..active
            },
            Status::Disabled => Style {
                background: Some(Background::Color(match class {
                    ButtonType::Transparent => Color::TRANSPARENT,
                    _ => colors.disabled(base_color),
                })),
                text_color: Color {
                    a: 0.4,
                    ..active.text_color
                },
                ..active
            },
        }
    }
}
