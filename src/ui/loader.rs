/// Animated loader ring shown while "analyzing"
/// Two counter-rotating arcs around a pulsing center dot
use iced::widget::canvas::{self, path, Path, Stroke};
use iced::{Color, Point, Radians, Rectangle};
use std::f32::consts::{PI, TAU};

use super::theme;

/// Spinner state: `phase` is the elapsed animation time in seconds
#[derive(Debug, Clone, Copy)]
pub struct Loader {
    pub phase: f32,
}

impl Loader {
    /// Seconds per turn of the outer ring
    const OUTER_PERIOD: f32 = 3.0;
    /// Seconds per turn of the inner ring (turns the other way)
    const INNER_PERIOD: f32 = 2.0;
    /// Seconds per glow pulse
    const PULSE_PERIOD: f32 = 2.0;

    fn angle(&self, period: f32) -> f32 {
        (self.phase / period).fract() * TAU
    }

    /// 0.0..=1.0, peaking halfway through each pulse
    fn pulse(&self) -> f32 {
        let t = (self.phase / Self::PULSE_PERIOD).fract();
        0.5 - 0.5 * (t * TAU).cos()
    }
}

fn arc(center: Point, radius: f32, start: f32, sweep: f32) -> Path {
    Path::new(|builder| {
        builder.arc(path::Arc {
            center,
            radius,
            start_angle: Radians(start),
            end_angle: Radians(start + sweep),
        });
    })
}

impl<Message> canvas::Program<Message> for Loader {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let center = frame.center();
        let outer = bounds.width.min(bounds.height) / 2.0 - 6.0;
        if outer <= 0.0 {
            return vec![frame.into_geometry()];
        }
        let inner = outer * 0.72;
        let pulse = self.pulse();

        // Glow behind the rings
        frame.fill(
            &Path::circle(center, outer * (1.0 + 0.15 * pulse)),
            Color { a: 0.10 + 0.10 * pulse, ..theme::PRIMARY },
        );

        // Tracks
        let track = || Stroke::default().with_color(theme::SECONDARY).with_width(5.0);
        frame.stroke(&Path::circle(center, outer), track());
        frame.stroke(&Path::circle(center, inner), track());

        // Outer ring: primary + pink quarter arcs, clockwise
        let outer_angle = self.angle(Self::OUTER_PERIOD);
        frame.stroke(
            &arc(center, outer, outer_angle, PI / 2.0),
            Stroke::default().with_color(theme::PRIMARY).with_width(5.0),
        );
        frame.stroke(
            &arc(center, outer, outer_angle + PI / 2.0, PI / 2.0),
            Stroke::default().with_color(theme::PINK).with_width(5.0),
        );

        // Inner ring: gold arc, counter-clockwise
        let inner_angle = -self.angle(Self::INNER_PERIOD);
        frame.stroke(
            &arc(center, inner, inner_angle, PI / 2.0),
            Stroke::default().with_color(theme::GOLD).with_width(5.0),
        );

        // Center dot
        frame.fill(
            &Path::circle(center, inner * (0.25 + 0.05 * pulse)),
            theme::PRIMARY,
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angles_wrap_each_turn() {
        let start = Loader { phase: 0.0 };
        let one_turn = Loader { phase: Loader::OUTER_PERIOD };
        assert!(start.angle(Loader::OUTER_PERIOD).abs() < 1e-4);
        assert!(one_turn.angle(Loader::OUTER_PERIOD).abs() < 1e-4);

        let half = Loader { phase: Loader::OUTER_PERIOD / 2.0 };
        assert!((half.angle(Loader::OUTER_PERIOD) - PI).abs() < 1e-4);
    }

    #[test]
    fn test_pulse_range() {
        for step in 0..40 {
            let loader = Loader { phase: step as f32 * 0.1 };
            let pulse = loader.pulse();
            assert!((0.0..=1.0).contains(&pulse));
        }
        let peak = Loader { phase: Loader::PULSE_PERIOD / 2.0 };
        assert!((peak.pulse() - 1.0).abs() < 1e-4);
    }
}
