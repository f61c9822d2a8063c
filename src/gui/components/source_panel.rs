//! The left panel: image selection, live preview and the action buttons.

use crate::gui::common::messages::AppEvent;
use crate::gui::style::button::ButtonType;
use crate::gui::style::buttons::FilledButton;
use crate::gui::style::container::ContainerType;
use crate::gui::style::text::TextType;
use crate::gui::widget::{
    Canvas, Column, Container, Element, IcedButtonExt, IcedParentExt, Row, Text,
};
use crate::source::ImageSource;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::Image;
use iced::{Alignment, Length};

use super::spinner::Spinner;

pub fn source_panel<'a>(
    source: &ImageSource,
    preview: Option<&Handle>,
    solving: bool,
) -> Container<'a, AppEvent> {
    let pickers = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(
            FilledButton::new("Upload Image")
                .style(ButtonType::Standard)
                .build()
                .on_press(AppEvent::PickImage),
        )
        .push(
            FilledButton::new("Use Webcam")
                .style(ButtonType::Standard)
                .build()
                .on_press_if(!source.is_live(), || AppEvent::UseWebcam),
        );

    let content = Column::new()
        .spacing(14)
        .align_x(Alignment::Center)
        .push(pickers)
        .push(preview_area(source, preview))
        .push(actions(source, solving));

    Container::new(content).width(Length::Fill).padding(10)
}

/// Shows the selected picture, the live camera feed, or the drop hint.
fn preview_area<'a>(source: &ImageSource, preview: Option<&Handle>) -> Container<'a, AppEvent> {
    let content: Element<'a, AppEvent> = match source {
        ImageSource::Static(image) => Image::new(image.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ImageSource::AwaitingCapture { .. } => match preview {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Text::new("Starting camera...")
                .class(TextType::Subtitle)
                .into(),
        },
        ImageSource::Empty => Column::new()
            .spacing(6)
            .align_x(Alignment::Center)
            .push(Text::new("Drag & drop a Sudoku image here").class(TextType::Subtitle))
            .push(Text::new("or use the buttons above").size(13).class(TextType::Subtitle))
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(340)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(6)
        .class(ContainerType::Preview)
}

fn actions<'a>(source: &ImageSource, solving: bool) -> Row<'a, AppEvent> {
    if source.is_live() {
        return Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                FilledButton::new("Cancel")
                    .style(ButtonType::Danger)
                    .build()
                    .on_press(AppEvent::CancelWebcam),
            )
            .push(
                FilledButton::new("Take Photo")
                    .style(ButtonType::Action)
                    .build()
                    .on_press_if(!source.is_encoding(), || AppEvent::TakePhoto),
            );
    }

    let solve_label = if solving { "Solving..." } else { "Solve Sudoku" };

    Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(
            FilledButton::new("Reset")
                .style(ButtonType::Danger)
                .build()
                .on_press(AppEvent::Reset),
        )
        .push(
            FilledButton::new(solve_label)
                .style(ButtonType::Action)
                .build()
                .on_press_if(!solving, || AppEvent::Solve),
        )
        .push_if(solving, || Canvas::new(Spinner::new()).width(30).height(30))
}
