use iced::mouse::Cursor;
use iced::widget::canvas;
use iced::widget::canvas::{Action, Event, Frame, Geometry, Path, Stroke, Style};
use iced::{Color, Point, Rectangle, Renderer};

/// Small rotating marker shown while a solve request is in flight.
pub struct Spinner {}

impl Spinner {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Default)]
pub struct SpinnerRotation {
    rotation: f32,
}

impl<Message, Theme> canvas::Program<Message, Theme> for Spinner {
    type State = SpinnerRotation;

    fn update(
        &self,
        state: &mut Self::State,
        _event: &Event,
        _bounds: Rectangle,
        _cursor: Cursor,
    ) -> Option<Action<Message>> {
        state.rotation += 0.01;
        None
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let mut frame = Frame::new(renderer, bounds.size());

        let spinner_radius = 10.0;
        let circle_radius = 3.0;
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        let angle = state.rotation * 2.0 * std::f32::consts::PI;

        let circle_x = center.x + spinner_radius * angle.cos();
        let circle_y = center.y + spinner_radius * angle.sin();

        let path = Path::circle(Point::new(circle_x, circle_y), circle_radius);
        frame.fill(&path, Color::from_rgb(0.0, 0.6, 1.0));

        let background = Path::circle(center, spinner_radius);
        frame.stroke(
            &background,
            Stroke {
                style: Style::Solid(Color::from_rgba(0.5, 0.5, 0.5, 0.6)),
                width: 1.5,
                ..Default::default()
            },
        );

        vec![frame.into_geometry()]
    }
}
