use iced::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// main app color
    pub background: Color,
    /// surface color for panels and cells
    pub primary: Color,
    /// as primary but darker for elements
    pub primary_darker: Color,
    /// Secondary color of the GUI
    pub secondary: Color,
    /// Color of alert
    pub danger: Color,
    /// The action content color
    pub action: Color,
    /// Base text color
    pub text: Color,
    /// Inverted text color (light in dark mode, v.v.)
    pub text_inv: Color,
}

impl Palette {
    fn adjust(&self, color: Color, amount: f32, alpha: f32) -> Color {
        let channel = |value: f32| {
            if self.is_dark() {
                f32::min(value + amount, 1.0)
            } else {
                f32::max(value - amount, 0.0)
            }
        };
        Color {
            r: channel(color.r),
            g: channel(color.g),
            b: channel(color.b),
            a: alpha,
        }
    }

    pub fn is_dark(&self) -> bool {
        let luminance =
            0.2126 * self.background.r + 0.7152 * self.background.g + 0.0722 * self.background.b;
        luminance < 0.5
    }

    pub fn active(&self, color: Color) -> Color {
        self.adjust(color, 0.15, 1.0)
    }

    pub fn disabled(&self, color: Color) -> Color {
        self.adjust(color, if self.is_dark() { 0.1 } else { 0.2 }, 0.6)
    }

    pub fn subtitle_text(&self) -> Color {
        let neutral = if self.is_dark() { 0.75 } else { 0.35 };
        Color {
            r: neutral,
            g: neutral,
            b: neutral,
            a: 1.0,
        }
    }
}
