//! Scenario replay against a virtual frame clock

use anyhow::{ensure, Context, Result};
use serde::Serialize;
use vitrine_animation::{FrameClock, ManualClock};
use vitrine_carousel::{Carousel, DragPhase, PresentationEvent};
use vitrine_core::events::event_types::{POINTER_DOWN, POINTER_MOVE, POINTER_UP};
use vitrine_core::{Event, Widget};
use vitrine_search::{RecognitionResult, ScriptedRecognizer, SearchBar, SearchOutput, VoiceState};

use crate::config::VitrineConfig;
use crate::scenario::{Scenario, ScenarioStep};

/// Virtual frame interval
pub const REPLAY_FRAME_MS: f64 = 16.0;

/// Virtual time allowed for the widgets to come to rest after the last step
const SETTLE_LIMIT_MS: f64 = 60_000.0;

/// Anything a widget emitted during replay
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", content = "output", rename_all = "snake_case")]
pub enum WidgetOutput {
    Carousel(PresentationEvent),
    Search(SearchOutput),
}

/// An output and the virtual time it was observed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedOutput {
    pub at_ms: f64,
    #[serde(flatten)]
    pub output: WidgetOutput,
}

/// Widget state once the replay has settled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub items: usize,
    pub active_index: usize,
    pub presented_index: usize,
    pub scroll_offset: f32,
    pub drag_phase: String,
    pub query: String,
    pub voice: String,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub outputs: Vec<TimedOutput>,
    pub summary: ReplaySummary,
}

/// Drives a carousel and a search bar from scenario steps
pub struct Replay {
    carousel: Carousel,
    search: SearchBar,
    recognizer: ScriptedRecognizer,
    clock: ManualClock,
    last_pointer_x: f32,
    outputs: Vec<TimedOutput>,
}

impl Replay {
    pub fn new(carousel: Carousel, config: &VitrineConfig) -> Self {
        let recognizer = ScriptedRecognizer::new();
        let search = SearchBar::with_recognizer(config.search.clone(), Box::new(recognizer.clone()));
        Self {
            carousel,
            search,
            recognizer,
            clock: ManualClock::with_frame_interval(REPLAY_FRAME_MS),
            last_pointer_x: 0.0,
            outputs: Vec::new(),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Run every step, then let the widgets settle
    pub fn run(mut self, scenario: &Scenario) -> Result<ReplayReport> {
        for (n, step) in scenario.steps.iter().enumerate() {
            self.apply(step)
                .with_context(|| format!("step {} ({step:?}) failed", n + 1))?;
        }
        self.settle()?;
        Ok(self.finish())
    }

    /// Apply one step at the current virtual time
    pub fn apply(&mut self, step: &ScenarioStep) -> Result<()> {
        let now = self.clock.now_ms();
        tracing::debug!(?step, now, "step");
        match step {
            ScenarioStep::Layout { width } => {
                self.carousel.handle_event(&Event::layout(*width, 0.0, now));
            }
            ScenarioStep::Scroll { delta } => {
                self.carousel.handle_event(&Event::scroll(*delta, 0.0, now));
            }
            ScenarioStep::DragStart { x } => self.pointer(POINTER_DOWN, *x, now),
            ScenarioStep::DragMove { x } => self.pointer(POINTER_MOVE, *x, now),
            ScenarioStep::DragEnd => self.pointer(POINTER_UP, self.last_pointer_x, now),
            ScenarioStep::PointerLeave => {
                self.carousel.handle_event(&Event::pointer_leave(now));
            }
            ScenarioStep::Indicator { index } => {
                self.carousel.handle_event(&Event::activate(*index, now));
            }
            ScenarioStep::Wait { ms } => self.wait(*ms),
            ScenarioStep::Type { text } => {
                self.search.handle_event(&Event::text_input(text.clone(), now));
            }
            ScenarioStep::Mic => self.search.handle_event(&Event::activate(0, now)),
            ScenarioStep::SpeechResult { transcripts } => {
                let results: Vec<_> = transcripts
                    .iter()
                    .map(|t| RecognitionResult::best(t.as_str()))
                    .collect();
                self.search.on_speech_result(&results, now);
            }
            ScenarioStep::SpeechEnd => self.search.on_speech_end(now),
            ScenarioStep::SpeechError { message } => self.search.on_speech_error(message, now),
            ScenarioStep::AssertActive { index } => {
                let active = self.carousel.active_index();
                ensure!(
                    active == *index,
                    "expected active index {index}, found {active} (offset {})",
                    self.carousel.scroll_offset()
                );
            }
        }
        self.collect();
        Ok(())
    }

    /// Advance virtual time by `ms`, ticking both widgets every frame
    pub fn wait(&mut self, ms: f64) {
        let target = self.clock.now_ms() + ms.max(0.0);
        while self.clock.now_ms() < target {
            let step = (target - self.clock.now_ms()).min(self.clock.frame_interval());
            let now = self.clock.advance(step);
            self.carousel.tick(now);
            self.search.tick(now);
            self.collect();
        }
    }

    fn settle(&mut self) -> Result<()> {
        let limit = self.clock.now_ms() + SETTLE_LIMIT_MS;
        loop {
            let now = self.clock.now_ms();
            let busy = self.carousel.tick(now) | self.search.tick(now);
            self.collect();
            if !busy {
                return Ok(());
            }
            ensure!(now < limit, "widgets still busy after {SETTLE_LIMIT_MS}ms");
            self.clock.step_frame();
        }
    }

    fn pointer(&mut self, event_type: u32, x: f32, now: f64) {
        self.last_pointer_x = x;
        self.carousel
            .handle_event(&Event::pointer(event_type, x, 0.0, now));
    }

    fn collect(&mut self) {
        let at_ms = self.clock.now_ms();
        for event in self.carousel.take_events() {
            tracing::info!(at_ms, ?event, "carousel");
            self.outputs.push(TimedOutput {
                at_ms,
                output: WidgetOutput::Carousel(event),
            });
        }
        for output in self.search.take_outputs() {
            tracing::info!(at_ms, ?output, "search");
            self.outputs.push(TimedOutput {
                at_ms,
                output: WidgetOutput::Search(output),
            });
        }
    }

    fn finish(self) -> ReplayReport {
        let log = self.recognizer.log();
        tracing::debug!(starts = log.starts, stops = log.stops, "recognizer calls");
        let summary = ReplaySummary {
            items: self.carousel.items().len(),
            active_index: self.carousel.active_index(),
            presented_index: self.carousel.presented_index(),
            scroll_offset: self.carousel.scroll_offset(),
            drag_phase: phase_name(self.carousel.drag_phase()).to_string(),
            query: self.search.value().to_string(),
            voice: voice_name(self.search.voice_state()).to_string(),
            elapsed_ms: self.clock.now_ms(),
        };
        ReplayReport {
            outputs: self.outputs,
            summary,
        }
    }
}

fn phase_name(phase: DragPhase) -> &'static str {
    match phase {
        DragPhase::Idle => "idle",
        DragPhase::Dragging => "dragging",
        DragPhase::Momentum => "momentum",
    }
}

fn voice_name(state: VoiceState) -> &'static str {
    match state {
        VoiceState::Unsupported => "unsupported",
        VoiceState::Idle => "idle",
        VoiceState::Listening => "listening",
    }
}
