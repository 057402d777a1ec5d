//! Common types and data structures

use std::time::Duration;
use tokio::time::Instant;

/// Fill color of the square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SquareColor {
    #[default]
    Black,
    Green,
    Blue,
    Red,
}

impl SquareColor {
    /// Map a request result to a color. Exact match only, anything unknown is red.
    pub fn from_result(result: &str) -> Self {
        match result {
            "1" => SquareColor::Green,
            "0" => SquareColor::Blue,
            _ => SquareColor::Red,
        }
    }

    /// CSS keyword for the color
    pub fn name(self) -> &'static str {
        match self {
            SquareColor::Black => "black",
            SquareColor::Green => "green",
            SquareColor::Blue => "blue",
            SquareColor::Red => "red",
        }
    }
}

impl std::fmt::Display for SquareColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Linear transition on the horizontal offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub from_left: f32,
    pub started: Instant,
}

/// The single visual element on the surface
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub top: f32,
    pub left: f32,
    pub size: f32,
    pub color: SquareColor,
    pub transition: Option<Transition>,
}

impl Square {
    pub fn new(size: f32) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            size,
            color: SquareColor::Black,
            transition: None,
        }
    }

    /// Horizontal offset as it should be painted at `now`
    pub fn rendered_left(&self, now: Instant) -> f32 {
        match self.transition {
            Some(t) => {
                let elapsed = now.saturating_duration_since(t.started);
                if t.duration.is_zero() || elapsed >= t.duration {
                    self.left
                } else {
                    let progress = elapsed.as_secs_f32() / t.duration.as_secs_f32();
                    t.from_left + (self.left - t.from_left) * progress
                }
            }
            None => self.left,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .is_some_and(|t| now.saturating_duration_since(t.started) < t.duration)
    }
}

/// Status of the outbound request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    Resolved(String),
}

/// Where the orchestrator currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Waiting,
    Moving,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    SquareCreated,
    RequestSent,
    RequestResolved,
    MovementStarted,
    MovementFinished,
    ColorApplied,
}

/// Events of a run, stamped relative to its start
#[derive(Debug, Clone)]
pub struct Timeline {
    started: Instant,
    events: Vec<(Duration, RunEvent)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            events: Vec::new(),
        }
    }

    pub fn record(&mut self, event: RunEvent) {
        self.events.push((self.started.elapsed(), event));
    }

    /// Elapsed time of the first occurrence of `event`
    pub fn at(&self, event: RunEvent) -> Option<Duration> {
        self.events
            .iter()
            .find(|(_, e)| *e == event)
            .map(|(elapsed, _)| *elapsed)
    }

    pub fn events(&self) -> &[(Duration, RunEvent)] {
        &self.events
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared progress of one orchestrator run
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub phase: RunPhase,
    pub request: RequestStatus,
    pub timeline: Timeline,
}
