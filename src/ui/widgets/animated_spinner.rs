// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown inside the submit button while a prediction runs.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians advanced per animation tick.
pub const ROTATION_STEP: f32 = 0.2;

const ARC_SEGMENTS: u16 = 24;

/// Ring with a rotating half arc.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_MD,
        }
    }

    /// Sets the square edge length in logical pixels.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Rotation after one tick, wrapped to `[0, 2π)`.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let stroke_width = (self.size / 10.0).max(2.0);
                let radius = frame.width().min(frame.height()) / 2.0 - stroke_width;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(stroke_width).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Arc starts at 12 o'clock and sweeps half a turn.
                let start = self.rotation - PI / 2.0;
                let mut arc = canvas::path::Builder::new();
                arc.move_to(Point::new(
                    center.x + radius * start.cos(),
                    center.y + radius * start.sin(),
                ));
                for i in 1..=ARC_SEGMENTS {
                    let angle = start + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
                    arc.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_full_turn() {
        let mut rotation = 0.0;
        for _ in 0..100 {
            rotation = advance(rotation);
            assert!((0.0..TAU).contains(&rotation));
        }
    }

    #[test]
    fn with_size_overrides_default() {
        let spinner = AnimatedSpinner::new(Color::WHITE, 0.0).with_size(18.0);
        assert!((spinner.size - 18.0).abs() < f32::EPSILON);
    }
}
