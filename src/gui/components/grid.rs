//! The solved-grid presenter.
//!
//! Pure rendering: a 9x9 board when a solution is present, a placeholder
//! otherwise. Digits are shown exactly as the service sent them; cells the
//! puzzle already contained (when the service reported them) are emphasized.

use crate::gui::common::messages::AppEvent;
use crate::gui::style::container::ContainerType;
use crate::gui::style::text::TextType;
use crate::gui::widget::{Column, Container, Element, Row, Text};
use crate::solver::Solved;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::{Alignment, Font, Length};

const CELL_SIZE: f32 = 42.0;

pub fn solution_panel<'a>(solved: Option<&Solved>) -> Container<'a, AppEvent> {
    let content: Element<'a, AppEvent> = match solved {
        Some(solved) => board(solved).into(),
        None => placeholder().into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
}

fn board<'a>(solved: &Solved) -> Container<'a, AppEvent> {
    let mut rows = Column::new().spacing(4).align_x(Alignment::Center);

    for block_row in 0..3 {
        let mut band = Row::new().spacing(4);
        for block_col in 0..3 {
            band = band.push(block(solved, block_row, block_col));
        }
        rows = rows.push(band);
    }

    Container::new(rows).padding(8).class(ContainerType::Board)
}

/// One 3x3 block of the board.
fn block<'a>(solved: &Solved, block_row: usize, block_col: usize) -> Column<'a, AppEvent> {
    let mut lines = Column::new().spacing(1);

    for r in 0..3 {
        let mut line = Row::new().spacing(1);
        for c in 0..3 {
            let row = block_row * 3 + r;
            let col = block_col * 3 + c;
            line = line.push(cell(solved, row, col));
        }
        lines = lines.push(line);
    }

    lines
}

fn cell<'a>(solved: &Solved, row: usize, col: usize) -> Container<'a, AppEvent> {
    let digit = solved.solution.cell(row, col);

    let given = solved
        .givens
        .map(|givens| givens.cell(row, col) != 0)
        .unwrap_or(false);

    let mut text = Text::new(digit.to_string()).size(20);
    if given {
        text = text.class(TextType::Given).font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });
    }

    Container::new(text)
        .width(CELL_SIZE)
        .height(CELL_SIZE)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .class(ContainerType::Cell)
}

fn placeholder<'a>() -> Container<'a, AppEvent> {
    Container::new(
        Text::new("Your solved Sudoku will appear here")
            .size(16)
            .class(TextType::Subtitle),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
}
