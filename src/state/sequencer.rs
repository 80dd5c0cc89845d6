/// Processing animation timeline
///
/// The processing screen shows four step labels that light up one after
/// another and then hands over to the results screen. Nothing real is
/// computed: the sequence is pure timer choreography.
///
/// `StepSequencer` is the state machine. `StepSequencer::start` returns
/// the timeline as a stream of `SequencerEvent`s together with a
/// `SequencerHandle`; stopping (or dropping) the handle ends the stream.
use futures::stream::{self, AbortHandle, Stream};
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::debug;

use super::data::ProcessingStep;

/// Labels shown while "analyzing"
pub const PROCESSING_STEPS: [&str; 4] = [
    "Detecting facial landmarks...",
    "Analyzing face shape...",
    "Matching with hairstyle database...",
    "Generating recommendations...",
];

/// Default delay between two steps
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(800);

/// Default time until the results screen is shown
pub const DEFAULT_TOTAL_DURATION: Duration = Duration::from_millis(4000);

/// Cadence of the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerTiming {
    pub step_interval: Duration,
    pub total_duration: Duration,
}

impl Default for SequencerTiming {
    fn default() -> Self {
        Self {
            step_interval: DEFAULT_STEP_INTERVAL,
            total_duration: DEFAULT_TOTAL_DURATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    /// Index into `PROCESSING_STEPS`
    Step(usize),
    Done,
}

/// Ticks produced by the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// One step interval elapsed
    Advance,
    /// The total duration elapsed
    Finished,
}

/// What the host has to do after applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The current step is now the given index (may be unchanged when clamped)
    Step(usize),
    /// Show the results screen
    Navigate,
}

/// Cancels a running timeline. Dropping the handle cancels too.
#[derive(Debug)]
pub struct SequencerHandle {
    abort: AbortHandle,
}

impl SequencerHandle {
    pub fn stop(&self) {
        if !self.abort.is_aborted() {
            debug!("processing timeline cancelled");
        }
        self.abort.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for SequencerHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

#[derive(Debug)]
pub struct StepSequencer {
    state: SequencerState,
    stopped: bool,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSequencer {
    pub fn new() -> Self {
        Self {
            state: SequencerState::Idle,
            stopped: false,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Show the first step and start the timeline.
    ///
    /// The returned stream only makes progress while it is polled; the host
    /// feeds every item back through `apply`.
    pub fn start(
        &mut self,
        timing: SequencerTiming,
    ) -> (impl Stream<Item = SequencerEvent> + Send + 'static, SequencerHandle) {
        if self.state == SequencerState::Idle {
            self.state = SequencerState::Step(0);
        }
        let (events, abort) = stream::abortable(timeline(timing));
        (events, SequencerHandle { abort })
    }

    /// Ignore every event from now on
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Feed one timeline event into the state machine.
    ///
    /// Returns `None` when the event is ignored: before `start`, after
    /// `stop`, or once the sequence is done. `Transition::Navigate` is
    /// therefore returned at most once.
    pub fn apply(&mut self, event: SequencerEvent) -> Option<Transition> {
        if self.stopped {
            return None;
        }
        match (self.state, event) {
            (SequencerState::Idle | SequencerState::Done, _) => None,
            (SequencerState::Step(current), SequencerEvent::Advance) => {
                let next = (current + 1).min(PROCESSING_STEPS.len() - 1);
                self.state = SequencerState::Step(next);
                Some(Transition::Step(next))
            }
            (SequencerState::Step(_), SequencerEvent::Finished) => {
                self.state = SequencerState::Done;
                Some(Transition::Navigate)
            }
        }
    }

    /// Index of the highlighted step. Stays on the last step once done.
    pub fn current_step(&self) -> usize {
        match self.state {
            SequencerState::Idle => 0,
            SequencerState::Step(index) => index,
            SequencerState::Done => PROCESSING_STEPS.len() - 1,
        }
    }

    pub fn steps(&self) -> Vec<ProcessingStep> {
        let current = self.current_step();
        PROCESSING_STEPS
            .iter()
            .enumerate()
            .map(|(index, label)| ProcessingStep {
                label,
                complete: index < current,
            })
            .collect()
    }

    /// Whether the step at `index` is lit
    pub fn is_active(&self, index: usize) -> bool {
        self.state != SequencerState::Idle && index <= self.current_step()
    }

    /// Progress bar fill in percent
    pub fn progress(&self) -> f32 {
        if self.state == SequencerState::Idle {
            return 0.0;
        }
        (self.current_step() + 1) as f32 / PROCESSING_STEPS.len() as f32 * 100.0
    }
}

/// Emits `Advance` every step interval that falls strictly before the total
/// duration, then a single `Finished`, then ends.
fn timeline(timing: SequencerTiming) -> impl Stream<Item = SequencerEvent> + Send + 'static {
    // (started at, ticks emitted, finished)
    stream::unfold(
        (None::<Instant>, 0u32, false),
        move |(started, ticks, finished)| async move {
            if finished {
                return None;
            }
            let started = started.unwrap_or_else(Instant::now);
            let deadline = started + timing.total_duration;
            let next_tick = started + timing.step_interval * (ticks + 1);

            if next_tick < deadline {
                time::sleep_until(next_tick).await;
                Some((SequencerEvent::Advance, (Some(started), ticks + 1, false)))
            } else {
                time::sleep_until(deadline).await;
                Some((SequencerEvent::Finished, (Some(started), ticks, true)))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn started() -> StepSequencer {
        let mut sequencer = StepSequencer::new();
        sequencer.state = SequencerState::Step(0);
        sequencer
    }

    #[test]
    fn test_starts_idle() {
        let sequencer = StepSequencer::new();
        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert_eq!(sequencer.progress(), 0.0);
        assert!(!sequencer.is_active(0));
    }

    #[test]
    fn test_events_before_start_are_ignored() {
        let mut sequencer = StepSequencer::new();
        assert_eq!(sequencer.apply(SequencerEvent::Advance), None);
        assert_eq!(sequencer.apply(SequencerEvent::Finished), None);
        assert_eq!(sequencer.state(), SequencerState::Idle);
    }

    #[test]
    fn test_advance_clamps_at_last_step() {
        let mut sequencer = started();
        let mut seen = vec![sequencer.current_step()];
        for _ in 0..6 {
            sequencer.apply(SequencerEvent::Advance);
            seen.push(sequencer.current_step());
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 3, 3, 3]);
        assert_eq!(sequencer.state(), SequencerState::Step(3));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_finish_navigates_exactly_once() {
        let mut sequencer = started();
        sequencer.apply(SequencerEvent::Advance);

        assert_eq!(sequencer.apply(SequencerEvent::Finished), Some(Transition::Navigate));
        assert_eq!(sequencer.state(), SequencerState::Done);
        assert_eq!(sequencer.apply(SequencerEvent::Finished), None);
        assert_eq!(sequencer.apply(SequencerEvent::Advance), None);
        assert_eq!(sequencer.state(), SequencerState::Done);
    }

    #[test]
    fn test_stopped_sequencer_ignores_events() {
        let mut sequencer = started();
        sequencer.stop();

        assert_eq!(sequencer.apply(SequencerEvent::Advance), None);
        assert_eq!(sequencer.apply(SequencerEvent::Finished), None);
        assert_eq!(sequencer.state(), SequencerState::Step(0));
    }

    #[test]
    fn test_steps_and_progress() {
        let mut sequencer = started();
        sequencer.apply(SequencerEvent::Advance);
        sequencer.apply(SequencerEvent::Advance);

        let steps = sequencer.steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].label, "Detecting facial landmarks...");
        assert_eq!(
            steps.iter().map(|s| s.complete).collect::<Vec<_>>(),
            vec![true, true, false, false]
        );
        assert!(sequencer.is_active(2));
        assert!(!sequencer.is_active(3));
        assert_eq!(sequencer.progress(), 75.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeline_cadence() {
        let mut sequencer = StepSequencer::new();
        let (events, _handle) = sequencer.start(SequencerTiming::default());
        assert_eq!(sequencer.state(), SequencerState::Step(0));

        let begin = Instant::now();
        let mut events = Box::pin(events);
        let mut stamped = Vec::new();
        while let Some(event) = events.next().await {
            stamped.push((begin.elapsed().as_millis(), event));
            sequencer.apply(event);
        }

        use SequencerEvent::*;
        assert_eq!(
            stamped,
            vec![
                (800, Advance),
                (1600, Advance),
                (2400, Advance),
                (3200, Advance),
                (4000, Finished),
            ]
        );
        assert_eq!(sequencer.state(), SequencerState::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaches_last_step_before_finishing() {
        let mut sequencer = StepSequencer::new();
        let (events, _handle) = sequencer.start(SequencerTiming::default());
        let mut events = Box::pin(events);

        let mut navigations = 0;
        let mut state_before_finish = None;
        while let Some(event) = events.next().await {
            if event == SequencerEvent::Finished {
                state_before_finish = Some(sequencer.state());
            }
            if sequencer.apply(event) == Some(Transition::Navigate) {
                navigations += 1;
            }
        }

        assert_eq!(state_before_finish, Some(SequencerState::Step(3)));
        assert_eq!(navigations, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_does_not_wait_for_steps() {
        // Slow steps: only one interval fits before the deadline
        let timing = SequencerTiming {
            step_interval: Duration::from_millis(1500),
            total_duration: Duration::from_millis(2000),
        };
        let mut sequencer = StepSequencer::new();
        let (events, _handle) = sequencer.start(timing);
        let collected: Vec<_> = events.collect().await;

        assert_eq!(collected, vec![SequencerEvent::Advance, SequencerEvent::Finished]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_timeline() {
        let mut sequencer = StepSequencer::new();
        let (events, handle) = sequencer.start(SequencerTiming::default());
        let mut events = Box::pin(events);

        let first = events.next().await;
        assert_eq!(first, Some(SequencerEvent::Advance));
        sequencer.apply(SequencerEvent::Advance);

        handle.stop();
        sequencer.stop();
        assert!(handle.is_stopped());

        // Even well past the deadline nothing else comes out
        time::advance(Duration::from_secs(10)).await;
        assert_eq!(events.next().await, None);
        assert_eq!(sequencer.state(), SequencerState::Step(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let mut sequencer = StepSequencer::new();
        let (events, handle) = sequencer.start(SequencerTiming::default());
        drop(handle);

        let collected: Vec<_> = events.collect().await;
        assert!(collected.is_empty());
    }
}
