use crate::gui::style::theme::color::mix;
use crate::gui::style::theme::csx::StyleType;

#[derive(Clone, Copy, Debug, Default)]
pub enum TextType {
    #[default]
    Standard,
    Subtitle,
    Danger,
    /// A digit the puzzle already contained, as opposed to a solved one.
    Given,
}

impl iced::widget::text::Catalog for StyleType {
    type Class<'a> = TextType;

    fn default<'a>() -> Self::Class<'a> {
        TextType::Standard
    }

    fn style(&self, class: &Self::Class<'_>) -> iced::widget::text::Style {
        let palette = self.get_palette();
        iced::widget::text::Style {
            color: Some(match class {
                TextType::Standard => palette.text,
                TextType::Subtitle => palette.subtitle_text(),
                TextType::Danger => mix(palette.danger, palette.text),
                TextType::Given => palette.action,
            }),
        }
    }
}
