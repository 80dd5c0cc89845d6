/// Processing page: loader animation while the step timeline plays out
use futures::{Stream, StreamExt};
use iced::widget::{canvas, column, container, progress_bar, row, text, Column};
use iced::{time, Alignment, Element, Length, Subscription};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::Action;
use crate::routes::Route;
use crate::state::sequencer::{SequencerEvent, SequencerHandle, SequencerTiming, StepSequencer, Transition};
use crate::ui::loader::Loader;
use crate::ui::theme;
use crate::ui::widgets::{self, BOLD};

/// Spinner redraw rate (~30 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Debug, Clone)]
pub enum Message {
    /// Timeline tick tagged with the run that produced it
    Timeline(u64, SequencerEvent),
    Frame(Instant),
}

pub struct Processing {
    run: u64,
    sequencer: StepSequencer,
    /// Dropping the screen drops this and ends the timeline
    timeline: SequencerHandle,
    started: Instant,
    loader: Loader,
}

impl Processing {
    /// Enter the screen. The host runs the returned stream and feeds every
    /// message back through `update`.
    pub fn start(
        run: u64,
        timing: SequencerTiming,
    ) -> (Self, impl Stream<Item = Message> + Send + 'static) {
        let mut sequencer = StepSequencer::new();
        let (events, timeline) = sequencer.start(timing);
        info!(run, "🔍 Analysis started");

        let screen = Self {
            run,
            sequencer,
            timeline,
            started: Instant::now(),
            loader: Loader { phase: 0.0 },
        };
        (screen, events.map(move |event| Message::Timeline(run, event)))
    }

    pub fn update(&mut self, message: Message) -> Action<Message> {
        match message {
            Message::Timeline(run, _) if run != self.run => {
                debug!(run, current = self.run, "ignoring tick from an old run");
                Action::None
            }
            Message::Timeline(_, event) => match self.sequencer.apply(event) {
                Some(Transition::Navigate) => {
                    self.timeline.stop();
                    self.sequencer.stop();
                    info!(run = self.run, "✅ Analysis complete");
                    Action::Navigate(Route::Results)
                }
                Some(Transition::Step(step)) => {
                    debug!(step, "processing step");
                    Action::None
                }
                None => Action::None,
            },
            Message::Frame(now) => {
                self.loader.phase = now.saturating_duration_since(self.started).as_secs_f32();
                Action::None
            }
        }
    }

    pub fn current_step(&self) -> usize {
        self.sequencer.current_step()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let steps = self
            .sequencer
            .steps()
            .into_iter()
            .enumerate()
            .fold(Column::new().spacing(12), |steps, (index, step)| {
                let active = self.sequencer.is_active(index);
                let marker = if step.complete {
                    text("✓").color(theme::GOLD)
                } else if active {
                    text("●").color(theme::PRIMARY)
                } else {
                    text("○").color(theme::BORDER)
                };
                let label = text(step.label).color(if active {
                    theme::FOREGROUND
                } else {
                    theme::MUTED
                });
                steps.push(row![marker, label].spacing(12).align_y(Alignment::Center))
            });

        let content = column![
            canvas(self.loader)
                .width(Length::Fixed(160.0))
                .height(Length::Fixed(160.0)),
            widgets::heading("Analyzing", "Your Photo", 32),
            text("Analyzing facial features using AI...").font(BOLD).size(18),
            text("Please wait while we find your perfect match").color(theme::MUTED),
            container(steps).padding(24).width(Length::Fill).style(theme::card),
            progress_bar(0.0..=100.0, self.sequencer.progress()).height(Length::Fixed(8.0)),
        ]
        .spacing(24)
        .max_width(520)
        .align_x(Alignment::Center);

        container(content)
            .padding([96, 32])
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_step() {
        let (processing, _events) = Processing::start(1, SequencerTiming::default());
        assert_eq!(processing.current_step(), 0);
        assert_eq!(processing.sequencer.progress(), 25.0);
    }

    #[test]
    fn test_steps_advance_and_navigate_once() {
        let (mut processing, _events) = Processing::start(1, SequencerTiming::default());
        for _ in 0..5 {
            processing.update(Message::Timeline(1, SequencerEvent::Advance));
        }
        assert_eq!(processing.current_step(), 3);

        assert!(matches!(
            processing.update(Message::Timeline(1, SequencerEvent::Finished)),
            Action::Navigate(Route::Results)
        ));
        assert!(processing.timeline.is_stopped());
        assert!(matches!(
            processing.update(Message::Timeline(1, SequencerEvent::Finished)),
            Action::None
        ));
    }

    #[test]
    fn test_frame_moves_the_spinner() {
        let (mut processing, _events) = Processing::start(1, SequencerTiming::default());
        let later = processing.started + Duration::from_millis(1500);

        processing.update(Message::Frame(later));

        assert!((processing.loader.phase - 1.5).abs() < 1e-3);
    }
}
