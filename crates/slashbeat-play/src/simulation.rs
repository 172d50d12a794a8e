//! Fixed-tick gameplay loop.

use log::{debug, info};

use slashbeat_input::InputSource;
use slashbeat_model::{Chart, NoteStates};

use crate::collision::{CollisionResolver, NoteEvent};
use crate::lifecycle::{GameStatus, GameplayStateMachine};
use crate::result::PlayResult;
use crate::score::ScoreState;
use crate::timeline::NoteTimeline;
use crate::transport::Transport;
use crate::view::FrameView;

/// The song is considered finished this long before its nominal end.
const END_MARGIN: f64 = 0.5;

/// One play session over an immutable chart.
///
/// The host calls [`tick`](Self::tick) at a fixed rate with the current
/// input source and transport. Within a tick the end-of-song check runs
/// first, then activation, collision and event application.
pub struct Simulation {
    chart: Chart,
    duration: f64,
    states: NoteStates,
    timeline: NoteTimeline,
    score: ScoreState,
    machine: GameplayStateMachine,
    events: Vec<NoteEvent>,
    time: f64,
}

impl Simulation {
    pub fn new(chart: Chart, duration: f64) -> Self {
        let states = NoteStates::new(chart.len());
        Self {
            chart,
            duration,
            states,
            timeline: NoteTimeline::new(),
            score: ScoreState::new(),
            machine: GameplayStateMachine::new(),
            events: Vec::new(),
            time: 0.0,
        }
    }

    /// Adopt a new chart. Refused while a session is running.
    pub fn set_chart(&mut self, chart: Chart, duration: f64) -> bool {
        if matches!(self.status(), GameStatus::Playing | GameStatus::Paused) {
            debug!("Ignoring chart change in {:?}", self.status());
            return false;
        }
        info!("Adopted chart with {} notes ({:.1}s)", chart.len(), duration);
        self.states.reset(chart.len());
        self.timeline.reset();
        self.chart = chart;
        self.duration = duration;
        true
    }

    /// Idle -> Playing. Requires a ready input source.
    pub fn start<I, T>(&mut self, input: &I, transport: &mut T) -> bool
    where
        I: InputSource + ?Sized,
        T: Transport + ?Sized,
    {
        if !input.is_ready() {
            debug!("Ignoring start, input not ready");
            return false;
        }
        if self.status() == GameStatus::Loading {
            self.machine.input_ready();
        }
        if !self.machine.start() {
            return false;
        }

        self.score.reset();
        self.states.reset(self.chart.len());
        self.timeline.reset();
        self.events.clear();
        self.time = 0.0;

        transport.seek(0.0);
        transport.play();
        info!("Started session with {} notes", self.chart.len());
        true
    }

    pub fn toggle_pause<T: Transport + ?Sized>(&mut self, transport: &mut T) -> bool {
        if !self.machine.toggle_pause() {
            return false;
        }
        match self.status() {
            GameStatus::Paused => transport.pause(),
            _ => transport.play(),
        }
        true
    }

    pub fn return_to_menu<T: Transport + ?Sized>(&mut self, transport: &mut T) -> bool {
        if !self.machine.return_to_menu() {
            return false;
        }
        transport.pause();
        transport.seek(0.0);
        true
    }

    /// Advance one tick. Returns the note events applied to the score during
    /// it; events resolved after a game over in the same tick are dropped.
    pub fn tick<I, T>(&mut self, input: &I, transport: &mut T) -> &[NoteEvent]
    where
        I: InputSource + ?Sized,
        T: Transport + ?Sized,
    {
        self.events.clear();

        match self.status() {
            GameStatus::Loading => {
                if input.is_ready() {
                    self.machine.input_ready();
                }
                return &self.events;
            }
            GameStatus::Playing => {}
            _ => return &self.events,
        }

        let now = transport.current_time();
        self.time = now;

        if now >= self.duration - END_MARGIN || transport.ended() {
            self.machine.win();
            transport.pause();
            return &self.events;
        }

        self.timeline.activate(&self.chart, now);

        let snapshot = input.snapshot();
        CollisionResolver::resolve(
            &self.chart,
            &mut self.states,
            &mut self.timeline,
            &snapshot,
            now,
            &mut self.events,
        );

        let mut applied = self.events.len();
        for (i, event) in self.events.iter().enumerate() {
            match *event {
                NoteEvent::Hit { good, .. } => {
                    self.score.apply_hit(good);
                }
                NoteEvent::Miss { .. } => {
                    if self.score.apply_miss() {
                        self.machine.lose();
                        transport.pause();
                        applied = i + 1;
                        break;
                    }
                }
            }
        }
        if applied < self.events.len() {
            debug!("Dropping {} events after game over", self.events.len() - applied);
            self.events.truncate(applied);
        }

        &self.events
    }

    pub fn status(&self) -> GameStatus {
        self.machine.status()
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn note_states(&self) -> &NoteStates {
        &self.states
    }

    /// Chart indices currently on the highway, in activation order.
    pub fn active_notes(&self) -> &[usize] {
        self.timeline.active()
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Song time seen by the last playing tick.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn frame_view(&self) -> FrameView {
        FrameView::build(
            &self.chart,
            &self.states,
            &self.score,
            self.status(),
            self.time,
        )
    }

    /// Final summary, once the session reached Victory or GameOver.
    pub fn result(&self) -> Option<PlayResult> {
        let status = self.status();
        status.is_finished().then(|| {
            PlayResult::new(status == GameStatus::Victory, &self.score, self.chart.len())
        })
    }
}
